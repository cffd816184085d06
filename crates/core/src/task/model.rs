//! Task model definitions

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority level, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    /// Parse a priority name, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Comma-separated list of accepted names, for error messages
    pub fn allowed() -> String {
        Self::ALL.map(|p| p.as_str()).join(", ")
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub priority: TaskPriority,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(title: impl Into<String>, priority: TaskPriority) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            completed: false,
            priority,
            category: None,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Refresh `updated_at`, never letting it fall behind `created_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task", TaskPriority::Medium);
        assert_eq!(task.title, "Test task");
        assert!(!task.completed);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert!(task.description.is_none());
        assert!(task.category.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_builders() {
        let due = Utc::now();
        let task = Task::new("Test task", TaskPriority::High)
            .with_description("This is a test")
            .with_category("work")
            .with_due_date(due)
            .with_completed(true);

        assert_eq!(task.description, Some("This is a test".to_string()));
        assert_eq!(task.category, Some("work".to_string()));
        assert_eq!(task.due_date, Some(due));
        assert!(task.completed);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(TaskPriority::Low < TaskPriority::Medium);
        assert!(TaskPriority::Medium < TaskPriority::High);
    }

    #[test]
    fn test_priority_parse_ignores_case() {
        assert_eq!(TaskPriority::parse("medium"), Some(TaskPriority::Medium));
        assert_eq!(TaskPriority::parse("HIGH"), Some(TaskPriority::High));
        assert_eq!(TaskPriority::parse("Low"), Some(TaskPriority::Low));
        assert_eq!(TaskPriority::parse("URGENT"), None);
        assert_eq!(TaskPriority::allowed(), "low, medium, high");
    }

    #[test]
    fn test_touch_keeps_updated_after_created() {
        let mut task = Task::new("Test task", TaskPriority::Low);
        task.created_at = Utc::now() + chrono::Duration::hours(1);
        task.touch();
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_serializes_camel_case() {
        let task = Task::new("Test task", TaskPriority::High);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("dueDate").is_some());
    }
}
