//! Task filtering
//!
//! All criteria combine with AND semantics. Filtering never reorders.

use std::fmt;

use crate::task::{Task, TaskPriority};

/// Completion status filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Parse a status name, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|s| s.as_str()).join(", ")
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Pending => !task.completed,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter criteria for listing tasks
///
/// `None` means the criterion is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub priority: Option<TaskPriority>,
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category: String = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    /// Blank search terms are treated as no search at all
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search: String = search.into();
        self.search = (!search.is_empty()).then_some(search);
        self
    }

    /// Whether `task` satisfies every active criterion
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_with_needle(task, self.search_needle().as_deref())
    }

    fn search_needle(&self) -> Option<String> {
        self.search.as_deref().map(str::to_lowercase)
    }

    fn matches_with_needle(&self, task: &Task, needle: Option<&str>) -> bool {
        if !self.status.matches(task) {
            return false;
        }
        if self.priority.is_some_and(|p| p != task.priority) {
            return false;
        }
        if let Some(category) = &self.category {
            if task.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        match needle {
            Some(needle) => {
                task.title.to_lowercase().contains(needle)
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(needle))
            }
            None => true,
        }
    }
}

/// Keep the tasks matching `filter`, preserving input order
pub fn filter_tasks<'a, I>(tasks: I, filter: &FilterSpec) -> Vec<Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = filter.search_needle();
    tasks
        .into_iter()
        .filter(|task| filter.matches_with_needle(task, needle.as_deref()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Buy milk", TaskPriority::Low).with_category("home"),
            Task::new("Fix login bug", TaskPriority::High)
                .with_category("work")
                .with_description("Users cannot SIGN IN on mobile"),
            Task::new("Plan trip", TaskPriority::Medium)
                .with_category("Home")
                .with_completed(true),
        ]
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let tasks = sample();
        let result = filter_tasks(&tasks, &FilterSpec::new());
        assert_eq!(titles(&result), vec!["Buy milk", "Fix login bug", "Plan trip"]);
    }

    #[test]
    fn test_status_filter() {
        let tasks = sample();
        let completed = filter_tasks(&tasks, &FilterSpec::new().with_status(StatusFilter::Completed));
        assert_eq!(titles(&completed), vec!["Plan trip"]);

        let pending = filter_tasks(&tasks, &FilterSpec::new().with_status(StatusFilter::Pending));
        assert_eq!(titles(&pending), vec!["Buy milk", "Fix login bug"]);
    }

    #[test]
    fn test_priority_filter() {
        let tasks = sample();
        let high = filter_tasks(&tasks, &FilterSpec::new().with_priority(TaskPriority::High));
        assert_eq!(titles(&high), vec!["Fix login bug"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let tasks = sample();
        let home = filter_tasks(&tasks, &FilterSpec::new().with_category("home"));
        assert_eq!(titles(&home), vec!["Buy milk"]);
    }

    #[test]
    fn test_search_matches_title_and_description_ignoring_case() {
        let tasks = sample();
        let by_title = filter_tasks(&tasks, &FilterSpec::new().with_search("MILK"));
        assert_eq!(titles(&by_title), vec!["Buy milk"]);

        let by_description = filter_tasks(&tasks, &FilterSpec::new().with_search("sign in"));
        assert_eq!(titles(&by_description), vec!["Fix login bug"]);

        let none = filter_tasks(&tasks, &FilterSpec::new().with_search("nothing here"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_search_is_no_search() {
        let filter = FilterSpec::new().with_search("");
        assert_eq!(filter, FilterSpec::new());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let tasks = sample();
        let filter = FilterSpec::new()
            .with_status(StatusFilter::Pending)
            .with_category("work")
            .with_search("bug");
        assert_eq!(titles(&filter_tasks(&tasks, &filter)), vec!["Fix login bug"]);

        let filter = filter.with_priority(TaskPriority::Low);
        assert!(filter_tasks(&tasks, &filter).is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(StatusFilter::parse("PENDING"), Some(StatusFilter::Pending));
        assert_eq!(StatusFilter::parse("completed"), Some(StatusFilter::Completed));
        assert_eq!(StatusFilter::parse("done"), None);
    }
}
