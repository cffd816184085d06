//! In-memory task storage implementation
//!
//! Tasks live only as long as the owning process. Writers are serialized
//! through the lock, so every mutation is observed whole or not at all.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::input::TaskPatch;
use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

/// Ordered in-memory task store
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `tasks`
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if unique.iter().any(|t| t.id == task.id) {
                tracing::warn!("Dropping duplicate seed task {}", task.id);
                continue;
            }
            unique.push(task);
        }
        Self {
            tasks: RwLock::new(unique),
        }
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(Error::InvalidInput(format!(
                "Task with ID {} already exists",
                task.id
            )));
        }
        tasks.push(task.clone());
        tracing::debug!(task_id = %task.id, "Task created");
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.clone())
    }

    async fn apply_patch(&self, id: Uuid, patch: TaskPatch) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn toggle_completed(&self, id: Uuid) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        task.completed = !task.completed;
        task.touch();
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok(tasks.len() != before)
    }
}
