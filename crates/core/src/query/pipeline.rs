//! The query pipeline: validate, filter, sort, aggregate

use std::collections::HashMap;

use serde::Serialize;

use super::filter::filter_tasks;
use super::params::ValidatedQuery;
use super::sort::sort_tasks;
use super::stats::TaskStats;
use crate::task::Task;
use crate::{Error, Result};

/// Ordered query results plus statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub items: Vec<Task>,
    /// Counts over the full, unfiltered collection
    pub stats: TaskStats,
    pub filtered_count: usize,
}

/// Run an already validated query over `tasks`
pub fn execute(tasks: &[Task], query: &ValidatedQuery) -> QueryResult {
    let mut items = filter_tasks(tasks, &query.filter);
    sort_tasks(&mut items, query.sort);
    QueryResult {
        stats: TaskStats::compute(tasks),
        filtered_count: items.len(),
        items,
    }
}

/// Validate `params` and run the query over `tasks`
///
/// Nothing is filtered when any parameter is invalid.
pub fn run_query(tasks: &[Task], params: &HashMap<String, String>) -> Result<QueryResult> {
    let query = ValidatedQuery::from_params(params).map_err(Error::InvalidQuery)?;
    let result = execute(tasks, &query);
    tracing::debug!(
        total = result.stats.total,
        filtered = result.filtered_count,
        "Task query executed"
    );
    Ok(result)
}
