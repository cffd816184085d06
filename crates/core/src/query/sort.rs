//! Task ordering
//!
//! Every sort here is stable, so equal keys keep their input order.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::task::Task;

/// Key to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Priority,
    DueDate,
    CreatedAt,
    Title,
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Priority, Self::DueDate, Self::CreatedAt, Self::Title];

    /// Parse a field name as it appears in query strings, ignoring case
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::DueDate => "dueDate",
            Self::CreatedAt => "createdAt",
            Self::Title => "title",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|f| f.as_str()).join(", ")
    }

    /// Direction used when none is requested
    pub fn default_order(&self) -> SortOrder {
        match self {
            Self::Title | Self::DueDate => SortOrder::Asc,
            Self::Priority | Self::CreatedAt => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Compare two tasks under this spec
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self.field {
            SortField::Priority => self.order.apply(a.priority.cmp(&b.priority)),
            // Undated tasks go last whichever way we sort.
            SortField::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => self.order.apply(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortField::CreatedAt => self.order.apply(a.created_at.cmp(&b.created_at)),
            SortField::Title => self.order.apply(compare_titles(&a.title, &b.title)),
        }
    }
}

static TITLE_COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

fn title_collator() -> Option<&'static CollatorBorrowed<'static>> {
    TITLE_COLLATOR
        .get_or_init(|| match Collator::try_new(Default::default(), CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Root collation unavailable, titles compare case-folded: {}", e);
                None
            }
        })
        .as_ref()
}

/// Locale-aware title comparison using the Unicode root collation
///
/// Accents and case only break ties between otherwise equal letters, so
/// `"éclair"` sorts before `"zebra"` and `"a"` before `"A"`.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    match title_collator() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
            .then_with(|| b.cmp(a)),
    }
}

/// Default list ordering: pending before completed, then higher priority,
/// then newest first.
pub fn default_compare(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sort in place by `spec`, or by the default ordering when `spec` is `None`
pub fn sort_tasks(tasks: &mut [Task], spec: Option<SortSpec>) {
    match spec {
        Some(spec) => tasks.sort_by(|a, b| spec.compare(a, b)),
        None => tasks.sort_by(default_compare),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;
    use chrono::{Duration, Utc};

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_priority_desc_puts_high_first() {
        let mut tasks = vec![
            Task::new("low", TaskPriority::Low),
            Task::new("high", TaskPriority::High),
            Task::new("medium", TaskPriority::Medium),
        ];
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Priority, SortOrder::Desc)));
        assert_eq!(titles(&tasks), vec!["high", "medium", "low"]);

        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Priority, SortOrder::Asc)));
        assert_eq!(titles(&tasks), vec!["low", "medium", "high"]);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let mut tasks = vec![
            Task::new("first", TaskPriority::High),
            Task::new("second", TaskPriority::High),
            Task::new("third", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Priority, SortOrder::Desc)));
        assert_eq!(titles(&tasks), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_due_date_missing_always_last() {
        let now = Utc::now();
        let base = vec![
            Task::new("none", TaskPriority::Low),
            Task::new("later", TaskPriority::Low).with_due_date(now + Duration::days(5)),
            Task::new("sooner", TaskPriority::Low).with_due_date(now + Duration::days(1)),
        ];

        let mut asc = base.clone();
        sort_tasks(&mut asc, Some(SortSpec::new(SortField::DueDate, SortOrder::Asc)));
        assert_eq!(titles(&asc), vec!["sooner", "later", "none"]);

        let mut desc = base;
        sort_tasks(&mut desc, Some(SortSpec::new(SortField::DueDate, SortOrder::Desc)));
        assert_eq!(titles(&desc), vec!["later", "sooner", "none"]);
    }

    #[test]
    fn test_created_at_sort() {
        let now = Utc::now();
        let mut old = Task::new("old", TaskPriority::Low);
        old.created_at = now - Duration::days(2);
        let mut new = Task::new("new", TaskPriority::Low);
        new.created_at = now;

        let mut tasks = vec![old, new];
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::CreatedAt, SortOrder::Desc)));
        assert_eq!(titles(&tasks), vec!["new", "old"]);
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::CreatedAt, SortOrder::Asc)));
        assert_eq!(titles(&tasks), vec!["old", "new"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut tasks = vec![
            Task::new("banana", TaskPriority::Low),
            Task::new("Apple", TaskPriority::Low),
            Task::new("cherry", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Title, SortOrder::Asc)));
        assert_eq!(titles(&tasks), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_compare_titles_lowercase_first_on_tie() {
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("A", "a"), Ordering::Greater);
        assert_eq!(compare_titles("abc", "abc"), Ordering::Equal);
        assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_compare_titles_accents() {
        assert_eq!(compare_titles("éclair", "zebra"), Ordering::Less);
        assert_eq!(compare_titles("Éclair", "eclair"), Ordering::Greater);
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "rime"), Ordering::Less);
    }

    #[test]
    fn test_title_sort_places_accented_titles_by_letter() {
        let mut tasks = vec![
            Task::new("zebra", TaskPriority::Low),
            Task::new("éclair", TaskPriority::Low),
            Task::new("apple", TaskPriority::Low),
            Task::new("Eclair", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Title, SortOrder::Asc)));
        assert_eq!(titles(&tasks), vec!["apple", "Eclair", "éclair", "zebra"]);

        sort_tasks(&mut tasks, Some(SortSpec::new(SortField::Title, SortOrder::Desc)));
        assert_eq!(titles(&tasks), vec!["zebra", "éclair", "Eclair", "apple"]);
    }

    #[test]
    fn test_default_ordering() {
        let now = Utc::now();
        let mut done_high = Task::new("done high", TaskPriority::High).with_completed(true);
        done_high.created_at = now;
        let mut old_high = Task::new("old high", TaskPriority::High);
        old_high.created_at = now - Duration::hours(2);
        let mut new_high = Task::new("new high", TaskPriority::High);
        new_high.created_at = now - Duration::hours(1);
        let mut medium = Task::new("medium", TaskPriority::Medium);
        medium.created_at = now;
        let mut done_low = Task::new("done low", TaskPriority::Low).with_completed(true);
        done_low.created_at = now;

        let mut tasks = vec![done_low, medium, done_high, old_high, new_high];
        sort_tasks(&mut tasks, None);
        assert_eq!(
            titles(&tasks),
            vec!["new high", "old high", "medium", "done high", "done low"]
        );
    }

    #[test]
    fn test_parse_sort_params() {
        assert_eq!(SortField::parse("dueDate"), Some(SortField::DueDate));
        assert_eq!(SortField::parse("duedate"), Some(SortField::DueDate));
        assert_eq!(SortField::parse("created"), None);
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("down"), None);
        assert_eq!(SortField::Title.default_order(), SortOrder::Asc);
        assert_eq!(SortField::Priority.default_order(), SortOrder::Desc);
    }
}
