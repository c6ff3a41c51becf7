//! Client-side task list filtering
//!
//! What the list screens do after a fetch: narrow by exact status, then by a
//! case-insensitive substring over title and description. Pure and
//! order-preserving; never touches the network.

use crate::models::{Task, TaskStatus};

/// Filter a fetched task list by status and search text.
///
/// A task is kept when its status equals `status` (if given) AND its title or
/// description contains `search` case-insensitively (if given). A missing
/// description never matches. An empty search string matches everything.
#[must_use]
pub fn filter_tasks(
    tasks: &[Task],
    status: Option<TaskStatus>,
    search: Option<&str>,
) -> Vec<Task> {
    let query = search
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    tasks
        .iter()
        .filter(|task| status.is_none_or(|s| task.status == s))
        .filter(|task| {
            query.as_deref().is_none_or(|q| {
                task.title.to_lowercase().contains(q)
                    || task
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(q))
            })
        })
        .cloned()
        .collect()
}
