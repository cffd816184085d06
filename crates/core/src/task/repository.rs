//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::input::TaskPatch;
use super::model::Task;
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Append a new task
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks in insertion order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Apply an edit to a task in one write, refreshing `updated_at`
    async fn apply_patch(&self, id: Uuid, patch: TaskPatch) -> Result<Task>;

    /// Flip the completion flag of a task
    async fn toggle_completed(&self, id: Uuid) -> Result<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
