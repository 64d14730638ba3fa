// In memory implementation of the SnapshotStore port.
//
// Purpose
// - Support store and http tests without touching the filesystem.
//
// Responsibilities
// - Keep the last saved slots and count how many saves happened.
// - Fail every call while toggled offline.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};

pub struct InMemorySnapshotStore<Item> {
    slots: RwLock<Vec<Option<Item>>>,
    saves: AtomicUsize,
    offline: AtomicBool,
}

impl<Item> Default for InMemorySnapshotStore<Item> {
    fn default() -> Self {
        Self::with_slots(Vec::new())
    }
}

impl<Item> InMemorySnapshotStore<Item> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<Option<Item>>) -> Self {
        Self {
            slots: RwLock::new(slots),
            saves: AtomicUsize::new(0),
            offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), SnapshotStoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SnapshotStoreError::Backend("Snapshot store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl<Item> SnapshotStore<Item> for InMemorySnapshotStore<Item>
where
    Item: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<Option<Item>>, SnapshotStoreError> {
        self.ensure_online()?;
        Ok(self.slots.read().await.clone())
    }

    async fn save(&self, slots: &[Option<Item>]) -> Result<(), SnapshotStoreError> {
        self.ensure_online()?;
        *self.slots.write().await = slots.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
