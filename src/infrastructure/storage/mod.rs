//! 存储基础设施
//!
//! `SkuStore` 只要求实现整表读写，其余操作都基于“读取最新 → 修改 → 整体写回”。
//! 不做缓存、索引或加锁，并发写请求之间可能丢失更新。

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::app::sku::model::Sku;

/// 存储错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("文件读写错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait SkuStore: Send + Sync + 'static {
    /// 读取全部记录，数据不存在时返回空集合
    async fn load_all(&self) -> Result<Vec<Sku>, StoreError>;

    /// 整体覆盖写回全部记录
    async fn save_all(&self, records: &[Sku]) -> Result<(), StoreError>;

    async fn find_by_key(&self, key: &str) -> Result<Option<Sku>, StoreError> {
        let records = self.load_all().await?;
        Ok(records.into_iter().find(|r| r.sku == key))
    }

    async fn insert(&self, record: Sku) -> Result<Sku, StoreError> {
        let mut records = self.load_all().await?;
        records.push(record.clone());
        self.save_all(&records).await?;
        Ok(record)
    }

    /// 原位替换，`key` 不存在时返回 `None`
    async fn replace(&self, key: &str, record: Sku) -> Result<Option<Sku>, StoreError> {
        let mut records = self.load_all().await?;
        let Some(index) = records.iter().position(|r| r.sku == key) else {
            return Ok(None);
        };

        records[index] = record.clone();
        self.save_all(&records).await?;
        Ok(Some(record))
    }

    async fn remove_by_key(&self, key: &str) -> Result<bool, StoreError> {
        let mut records = self.load_all().await?;
        let Some(index) = records.iter().position(|r| r.sku == key) else {
            return Ok(false);
        };

        records.remove(index);
        self.save_all(&records).await?;
        Ok(true)
    }

    /// 更换主键：移除旧记录并追加新记录，只写一次
    async fn rename(&self, old_key: &str, record: Sku) -> Result<Option<Sku>, StoreError> {
        let mut records = self.load_all().await?;
        let Some(index) = records.iter().position(|r| r.sku == old_key) else {
            return Ok(None);
        };

        records.remove(index);
        records.push(record.clone());
        self.save_all(&records).await?;
        Ok(Some(record))
    }
}
