//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::infrastructure::storage::StoreError;

pub const MISSING_FIELDS: &str =
    "Missing required fields: sku, description, and price are required";
pub const INVALID_QUERY: &str = "Invalid query parameters";
pub const SKU_NOT_FOUND: &str = "SKU not found";
pub const SKU_NOT_FOUND_FOR_UPDATE: &str = "SKU not found for update";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("存储错误: {0}")]
    Storage(#[from] StoreError),
}

impl CoreError {
    pub fn conflict(code: &str) -> Self {
        CoreError::Conflict(format!("SKU with code '{}' already exists", code))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Conflict(_) => StatusCode::CONFLICT,
            CoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            CoreError::Validation(msg) | CoreError::NotFound(msg) | CoreError::Conflict(msg) => msg,
            // 内部错误只记录日志，不向客户端暴露细节
            other => {
                error!("请求处理失败: {}", other);
                INTERNAL_ERROR.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
