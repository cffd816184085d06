//! Task module
//!
//! This module contains task-related types, input validation and storage.

mod input;
mod memory_store;
mod model;
mod repository;
mod seed;

pub use input::{parse_instant, CreateTaskInput, TaskPatch};
pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use seed::demo_tasks;
