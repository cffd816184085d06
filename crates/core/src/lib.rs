//! Core library for the task board
//!
//! This crate contains the business logic shared by every consumer:
//! - Task model, creation and edit validation
//! - In-memory task storage
//! - The query pipeline (validate, filter, sort, aggregate)

pub mod error;
pub mod query;
pub mod task;
pub mod validation;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
