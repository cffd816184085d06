//! Error types for the core library

use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(ValidationErrors),

    #[error("Invalid task: {0}")]
    InvalidTask(ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
