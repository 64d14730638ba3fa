use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};

/// Keeps the collection as one JSON array, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl<Item> SnapshotStore<Item> for JsonFileSnapshotStore
where
    Item: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<Option<Item>>, SnapshotStoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "snapshot file not found, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, slots: &[Option<Item>]) -> Result<(), SnapshotStoreError> {
        let data = serde_json::to_vec(slots)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, data).await?;
        tracing::debug!(path = %self.path.display(), slots = slots.len(), "snapshot written");
        Ok(())
    }
}
