//! Creation and edit input validation
//!
//! Inputs arrive as raw JSON objects so that type mismatches can be reported
//! per field instead of failing on the first bad key.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::model::{Task, TaskPriority};
use crate::validation::{
    ValidationErrors, CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
};

/// A validated request to create a task
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTaskInput {
    /// Validate a raw creation payload, collecting every violation
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = as_object(raw, &mut errors) else {
            return Err(errors);
        };

        let title = match present(object, "title") {
            Some(value) => parse_title(value, &mut errors),
            None => {
                errors.push("title", "title is required");
                None
            }
        };

        let priority = match present(object, "priority") {
            Some(value) => parse_priority(value, &mut errors),
            None => {
                errors.push("priority", "priority is required");
                None
            }
        };

        let description = present(object, "description")
            .and_then(|v| parse_optional_text(v, "description", DESCRIPTION_MAX_LEN, &mut errors));
        let category = present(object, "category")
            .and_then(|v| parse_optional_text(v, "category", CATEGORY_MAX_LEN, &mut errors));
        let due_date = present(object, "dueDate").and_then(|v| parse_due_date(v, &mut errors));

        match (title, priority) {
            (Some(title), Some(priority)) if errors.is_empty() => Ok(Self {
                title,
                description,
                priority,
                category,
                due_date,
            }),
            _ => Err(errors),
        }
    }

    /// Build the task record, assigning id and timestamps
    pub fn into_task(self) -> Task {
        let mut task = Task::new(self.title, self.priority);
        task.description = self.description;
        task.category = self.category;
        task.due_date = self.due_date;
        task
    }
}

/// A validated edit to an existing task
///
/// Outer `None` leaves a field unchanged; for nullable fields `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
    pub category: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Validate a raw edit payload, applying creation rules to present keys
    pub fn parse(raw: &Value) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let Some(object) = as_object(raw, &mut errors) else {
            return Err(errors);
        };

        let mut patch = Self::default();

        if let Some(value) = object.get("title") {
            patch.title = parse_title(value, &mut errors);
        }
        if let Some(value) = object.get("priority") {
            patch.priority = parse_priority(value, &mut errors);
        }
        if let Some(value) = object.get("completed") {
            match value {
                Value::Bool(flag) => patch.completed = Some(*flag),
                _ => errors.push("completed", "completed must be a boolean"),
            }
        }
        if let Some(value) = object.get("description") {
            patch.description = Some(parse_optional_text(
                value,
                "description",
                DESCRIPTION_MAX_LEN,
                &mut errors,
            ));
        }
        if let Some(value) = object.get("category") {
            patch.category = Some(parse_optional_text(
                value,
                "category",
                CATEGORY_MAX_LEN,
                &mut errors,
            ));
        }
        if let Some(value) = object.get("dueDate") {
            patch.due_date = Some(parse_due_date(value, &mut errors));
        }

        errors.into_result(patch)
    }

    /// Apply the edit and refresh `updated_at`
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        task.touch();
    }
}

fn as_object<'a>(raw: &'a Value, errors: &mut ValidationErrors) -> Option<&'a Map<String, Value>> {
    let object = raw.as_object();
    if object.is_none() {
        errors.push("body", "request body must be a JSON object");
    }
    object
}

/// A key counts as present only when it holds a non-null value
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

fn parse_title(value: &Value, errors: &mut ValidationErrors) -> Option<String> {
    let Some(raw) = value.as_str() else {
        errors.push("title", "title must be a string");
        return None;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push("title", "title must not be empty");
        return None;
    }
    let before = errors.len();
    errors.check_max_len("title", trimmed, TITLE_MAX_LEN);
    (errors.len() == before).then(|| trimmed.to_string())
}

fn parse_priority(value: &Value, errors: &mut ValidationErrors) -> Option<TaskPriority> {
    let parsed = value.as_str().and_then(TaskPriority::parse);
    if parsed.is_none() {
        errors.push(
            "priority",
            format!(
                "invalid priority {}: expected one of {}",
                value,
                TaskPriority::allowed()
            ),
        );
    }
    parsed
}

/// Optional free text; blank values normalize to `None`
fn parse_optional_text(
    value: &Value,
    field: &str,
    max: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(raw) => {
            let trimmed = raw.trim();
            errors.check_max_len(field, trimmed, max);
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => {
            errors.push(field, format!("{} must be a string", field));
            None
        }
    }
}

fn parse_due_date(value: &Value, errors: &mut ValidationErrors) -> Option<DateTime<Utc>> {
    match value {
        Value::Null => None,
        Value::String(raw) if raw.trim().is_empty() => None,
        Value::String(raw) => {
            let parsed = parse_instant(raw.trim());
            if parsed.is_none() {
                errors.push(
                    "dueDate",
                    format!("dueDate must be an RFC 3339 timestamp or YYYY-MM-DD date (got \"{}\")", raw),
                );
            }
            parsed
        }
        _ => {
            errors.push("dueDate", "dueDate must be a string");
            None
        }
    }
}

/// Parse an RFC 3339 instant, or a bare date taken as midnight UTC
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
