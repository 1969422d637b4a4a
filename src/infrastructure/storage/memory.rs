//! 内存存储，主要用于测试

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SkuStore, StoreError};
use crate::app::sku::model::Sku;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Sku>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkuStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Sku>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn save_all(&self, records: &[Sku]) -> Result<(), StoreError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
