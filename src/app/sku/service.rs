//! SKU 业务服务

use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::model::{Sku, SkuInput};
use crate::common::error::{CoreError, SKU_NOT_FOUND_FOR_UPDATE};
use crate::infrastructure::storage::SkuStore;

#[derive(Clone)]
pub struct SkuService {
    store: Arc<dyn SkuStore>,
}

impl SkuService {
    pub fn new(store: Arc<dyn SkuStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Sku>, CoreError> {
        Ok(self.store.load_all().await?)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Option<Sku>, CoreError> {
        Ok(self.store.find_by_key(code).await?)
    }

    pub async fn create(&self, input: SkuInput) -> Result<Sku, CoreError> {
        if self.store.find_by_key(&input.sku).await?.is_some() {
            return Err(CoreError::conflict(&input.sku));
        }

        let now = Utc::now();
        let sku = Sku {
            id: Some(Uuid::new_v4()),
            sku: input.sku,
            description: input.description,
            price: input.price,
            created_at: now,
            updated_at: now,
        };

        let created = self.store.insert(sku).await?;
        info!("已创建 SKU: {}", created.sku);
        Ok(created)
    }

    /// 更新 `target` 对应的记录，`input.sku` 与 `target` 不同时视为改名
    pub async fn update(&self, target: &str, input: SkuInput) -> Result<Sku, CoreError> {
        let existing = self
            .store
            .find_by_key(target)
            .await?
            .ok_or_else(|| CoreError::NotFound(SKU_NOT_FOUND_FOR_UPDATE.to_string()))?;

        let renaming = input.sku != target;
        if renaming && self.store.find_by_key(&input.sku).await?.is_some() {
            return Err(CoreError::conflict(&input.sku));
        }

        let updated = Sku {
            id: existing.id,
            sku: input.sku,
            description: input.description,
            price: input.price,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let saved = if renaming {
            self.store.rename(target, updated).await?
        } else {
            self.store.replace(target, updated).await?
        };

        // 两次读取之间记录可能已被并发请求删除
        let saved =
            saved.ok_or_else(|| CoreError::NotFound(SKU_NOT_FOUND_FOR_UPDATE.to_string()))?;
        info!("已更新 SKU: {} -> {}", target, saved.sku);
        Ok(saved)
    }

    pub async fn delete(&self, code: &str) -> Result<bool, CoreError> {
        let removed = self.store.remove_by_key(code).await?;
        if removed {
            info!("已删除 SKU: {}", code);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStore;

    fn service() -> (SkuService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SkuService::new(store.clone()), store)
    }

    async fn seed(service: &SkuService) {
        service
            .create(SkuInput::new("glazed", "Glazed donut", "1.99"))
            .await
            .unwrap();
        service
            .create(SkuInput::new("chocolate", "Chocolate frosted donut", "2.29"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (service, _) = service();
        let created = service
            .create(SkuInput::new("glazed", "Glazed donut", "1.99"))
            .await
            .unwrap();
        assert_eq!(created.created_at, created.updated_at);
        assert!(created.id.is_some());

        let fetched = service.get_by_code("glazed").await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert!(service.get_by_code("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let (service, store) = service();
        seed(&service).await;
        let before = store.load_all().await.unwrap();

        let result = service
            .create(SkuInput::new("glazed", "Another glazed", "9.99"))
            .await;
        match result {
            Err(CoreError::Conflict(msg)) => assert!(msg.contains("glazed")),
            other => panic!("expected conflict, got {:?}", other),
        }

        assert_eq!(store.load_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_in_place_preserves_created_at() {
        let (service, _) = service();
        seed(&service).await;
        let original = service.get_by_code("glazed").await.unwrap().unwrap();

        let updated = service
            .update("glazed", SkuInput::new("glazed", "Honey glazed donut", "2.49"))
            .await
            .unwrap();

        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.id, original.id);
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(updated.description, "Honey glazed donut");
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_target() {
        let (service, _) = service();
        seed(&service).await;

        let result = service
            .update("missing", SkuInput::new("missing", "Nothing", "0.00"))
            .await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rename() {
        let (service, _) = service();
        seed(&service).await;
        let original = service.get_by_code("glazed").await.unwrap().unwrap();

        let renamed = service
            .update("glazed", SkuInput::new("maple", "Maple glazed donut", "2.19"))
            .await
            .unwrap();
        assert_eq!(renamed.sku, "maple");
        assert_eq!(renamed.created_at, original.created_at);

        assert!(service.get_by_code("glazed").await.unwrap().is_none());
        assert_eq!(
            service.get_by_code("maple").await.unwrap().unwrap().price,
            "2.19"
        );
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename_onto_existing_conflicts() {
        let (service, store) = service();
        seed(&service).await;
        let before = store.load_all().await.unwrap();

        let result = service
            .update("glazed", SkuInput::new("chocolate", "Clash", "0.01"))
            .await;
        match result {
            Err(CoreError::Conflict(msg)) => assert!(msg.contains("chocolate")),
            other => panic!("expected conflict, got {:?}", other),
        }

        assert_eq!(store.load_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let (service, _) = service();
        seed(&service).await;

        assert!(service.delete("glazed").await.unwrap());
        assert!(!service.delete("glazed").await.unwrap());
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }
}
