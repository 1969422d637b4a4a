//! 基于 JSON 文件的存储

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{SkuStore, StoreError};
use crate::app::sku::model::Sku;

/// 每次操作都重新读取整个文件，修改后整体覆盖写回。
/// 写入不是原子的，进程在写入过程中崩溃可能导致文件截断。
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SkuStore for FileStore {
    async fn load_all(&self) -> Result<Vec<Sku>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("数据文件不存在，返回空集合: {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    async fn save_all(&self, records: &[Sku]) -> Result<(), StoreError> {
        // 确保目录存在
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).await?;
        debug!("已写入 {} 条记录到 {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample(code: &str) -> Sku {
        let now = Utc::now();
        Sku {
            id: None,
            sku: code.to_string(),
            description: format!("{} donut", code),
            price: "1.99".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("skus.json"));

        assert!(store.load_all().await.unwrap().is_empty());
        assert!(store.find_by_key("glazed").await.unwrap().is_none());
        assert!(!store.remove_by_key("glazed").await.unwrap());
        // 只读操作不应创建文件
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested/data/skus.json"));

        store.insert(sample("glazed")).await.unwrap();
        assert!(store.path().exists());

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\n  {"));
    }

    #[tokio::test]
    async fn test_crud_operations() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("skus.json"));

        store.insert(sample("glazed")).await.unwrap();
        store.insert(sample("chocolate")).await.unwrap();
        store.insert(sample("berliner")).await.unwrap();

        let mut updated = sample("chocolate");
        updated.price = "2.49".to_string();
        assert!(store.replace("chocolate", updated).await.unwrap().is_some());
        assert!(store.replace("missing", sample("missing")).await.unwrap().is_none());

        let records = store.load_all().await.unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(codes, vec!["glazed", "chocolate", "berliner"]);
        assert_eq!(records[1].price, "2.49");

        assert!(store.remove_by_key("glazed").await.unwrap());
        assert_eq!(store.load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename_moves_record_to_end() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("skus.json"));

        store.insert(sample("glazed")).await.unwrap();
        store.insert(sample("chocolate")).await.unwrap();

        let renamed = store.rename("glazed", sample("maple")).await.unwrap();
        assert_eq!(renamed.map(|r| r.sku), Some("maple".to_string()));
        assert!(store.rename("glazed", sample("other")).await.unwrap().is_none());

        let codes: Vec<String> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.sku)
            .collect();
        assert_eq!(codes, vec!["chocolate", "maple"]);
    }

    #[tokio::test]
    async fn test_corrupted_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("skus.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load_all().await, Err(StoreError::Json(_))));
    }
}
