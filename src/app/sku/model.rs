//! SKU 数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::common::error::{CoreError, MISSING_FIELDS};

/// 持久化的 SKU 记录，`sku` 为唯一业务键
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sku {
    /// 代理标识，旧数据中可能不存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub sku: String,
    pub description: String,
    /// 十进制文本，不做数值解析
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// POST 请求体，字段全部可缺省，由 `validated` 统一校验
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SkuRequest {
    #[validate(required, length(min = 1))]
    pub sku: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub price: Option<String>,
}

impl SkuRequest {
    /// 校验必填字段，通过后转换为 `SkuInput`
    pub fn validated(self) -> Result<SkuInput, CoreError> {
        self.validate()
            .map_err(|_| CoreError::Validation(MISSING_FIELDS.to_string()))?;

        match (self.sku, self.description, self.price) {
            (Some(sku), Some(description), Some(price)) => Ok(SkuInput {
                sku,
                description,
                price,
            }),
            _ => Err(CoreError::Validation(MISSING_FIELDS.to_string())),
        }
    }
}

/// 已校验的创建/更新输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuInput {
    pub sku: String,
    pub description: String,
    pub price: String,
}

impl SkuInput {
    pub fn new(
        sku: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}

/// POST 查询参数，`target` 指向待更新的 SKU（兼容旧参数名 `id` 和 `skuCode`）
#[derive(Debug, Default, Deserialize)]
pub struct UpsertQuery {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "skuCode")]
    pub sku_code: Option<String>,
}

impl UpsertQuery {
    /// 按 target、id、skuCode 的顺序取第一个非空值，空字符串视为未提供
    pub fn target(&self) -> Option<&str> {
        [&self.target, &self.id, &self.sku_code]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }
}
