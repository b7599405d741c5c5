use std::sync::Arc;

use storage::Store;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to the single in-memory store.
///
/// Mutations hold the write guard for the whole operation, so each one
/// completes before the next request observes the store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
