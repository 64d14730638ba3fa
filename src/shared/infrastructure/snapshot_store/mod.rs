// Snapshot store port.
//
// Purpose
// - Load and save a whole positional collection at once.
//
// Boundaries
// - Implementations decide how slots are stored. Callers always hand over
//   the complete collection, holes included.

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotStoreError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SnapshotStore<Item>: Send + Sync
where
    Item: Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<Option<Item>>, SnapshotStoreError>;
    async fn save(&self, slots: &[Option<Item>]) -> Result<(), SnapshotStoreError>;
}
