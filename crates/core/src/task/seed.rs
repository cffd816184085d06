//! Demo tasks loaded into a fresh store

use chrono::{Duration, Utc};

use super::model::{Task, TaskPriority};

/// A small board covering every priority, both completion states,
/// categories and due dates.
pub fn demo_tasks() -> Vec<Task> {
    let now = Utc::now();
    let mut tasks = vec![
        Task::new("Set up project repository", TaskPriority::High)
            .with_description("Initialize the repository and configure CI")
            .with_category("development")
            .with_completed(true),
        Task::new("Design task card layout", TaskPriority::Medium)
            .with_description("Sketch the card, list and filter components")
            .with_category("design")
            .with_due_date(now + Duration::days(3)),
        Task::new("Write API documentation", TaskPriority::Low)
            .with_description("Document the tasks and health endpoints")
            .with_category("documentation")
            .with_due_date(now + Duration::days(7)),
        Task::new("Add search to task list", TaskPriority::High)
            .with_category("development")
            .with_due_date(now + Duration::days(1)),
        Task::new("Review pull requests", TaskPriority::Medium),
    ];

    // Stagger creation times so the default ordering is deterministic.
    let count = tasks.len() as i64;
    for (index, task) in tasks.iter_mut().enumerate() {
        task.created_at = now - Duration::hours(count - index as i64);
        task.updated_at = task.created_at;
    }
    tasks
}
