//! Aggregate counts over a task collection

use serde::Serialize;

use crate::task::{Task, TaskPriority};

/// Task count per priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn get(&self, priority: TaskPriority) -> usize {
        match priority {
            TaskPriority::High => self.high,
            TaskPriority::Medium => self.medium,
            TaskPriority::Low => self.low,
        }
    }

    fn increment(&mut self, priority: TaskPriority) {
        match priority {
            TaskPriority::High => self.high += 1,
            TaskPriority::Medium => self.medium += 1,
            TaskPriority::Low => self.low += 1,
        }
    }
}

/// Completion and priority breakdown of the full collection
///
/// `completed + pending == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub by_priority: PriorityCounts,
}

impl TaskStats {
    pub fn compute<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut stats = Self::default();
        for task in tasks {
            stats.total += 1;
            if task.completed {
                stats.completed += 1;
            }
            stats.by_priority.increment(task.priority);
        }
        stats.pending = stats.total - stats.completed;
        stats
    }
}
