//! Application state

use std::sync::Arc;

use taskboard_core::task::{demo_tasks, InMemoryTaskStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: InMemoryTaskStore,
}

impl AppState {
    /// Create state with a fresh store, optionally holding the demo tasks
    pub fn new(seed_demo: bool) -> Self {
        let store = if seed_demo {
            InMemoryTaskStore::with_tasks(demo_tasks())
        } else {
            InMemoryTaskStore::new()
        };
        Self::with_store(store)
    }

    pub fn with_store(task_store: InMemoryTaskStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_store }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &InMemoryTaskStore {
        &self.inner.task_store
    }
}
