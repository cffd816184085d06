//! Task query module
//!
//! The single pipeline every task list goes through.

mod filter;
mod params;
mod pipeline;
mod sort;
mod stats;

pub use filter::{filter_tasks, FilterSpec, StatusFilter};
pub use params::ValidatedQuery;
pub use pipeline::{execute, run_query, QueryResult};
pub use sort::{compare_titles, default_compare, sort_tasks, SortField, SortOrder, SortSpec};
pub use stats::{PriorityCounts, TaskStats};
