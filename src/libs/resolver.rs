//! Task-switch resolution.
//!
//! Decides which task a timer should be started against when the user asks
//! for something ambiguous: "the Meetings task", "task 86abc", "whatever I was
//! doing before". The resolver only decides. Starting the timer is left to the
//! caller, so every decision can be checked without side effects.
//!
//! ## Strategies
//!
//! - **By name**: exact case-insensitive name match, otherwise the first search result
//! - **By id**: exact id match among the search results, never a fallback
//! - **Previous**: newest recent entry whose task differs from the running one
//!
//! The by-name and by-id strategies differ on purpose. Free text given to
//! `switch` only starts a timer on an exact id match so that a loose query
//! cannot start the wrong task.

use crate::api::{ApiError, ClickUp, Task, TimeEntry, Transport};

/// Data the resolver needs from ClickUp.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    async fn search_tasks(&mut self, query: &str) -> Result<Vec<Task>, ApiError>;

    /// Recent time entries, newest first.
    async fn get_recent_time_entries(&mut self) -> Result<Vec<TimeEntry>, ApiError>;

    async fn get_running_timer(&mut self) -> Result<Option<TimeEntry>, ApiError>;
}

impl<T: Transport> TaskSource for ClickUp<T> {
    async fn search_tasks(&mut self, query: &str) -> Result<Vec<Task>, ApiError> {
        ClickUp::<T>::search_tasks(self, query).await
    }

    async fn get_recent_time_entries(&mut self) -> Result<Vec<TimeEntry>, ApiError> {
        ClickUp::<T>::get_recent_time_entries(self).await
    }

    async fn get_running_timer(&mut self) -> Result<Option<TimeEntry>, ApiError> {
        ClickUp::<T>::get_running_timer(self).await
    }
}

/// Outcome of a resolution. "Nothing found" is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Start a timer against this task.
    Found(Task),
    /// No task qualified for the query.
    NotFound { query: String },
    /// Recent history holds no task other than the running one.
    NoPrevious,
}

impl Resolution {
    pub fn task(&self) -> Option<&Task> {
        match self {
            Resolution::Found(task) => Some(task),
            _ => None,
        }
    }
}

/// Prefers an exact case-insensitive name match, otherwise the first task.
pub fn pick_by_name<'a>(tasks: &'a [Task], name: &str) -> Option<&'a Task> {
    let wanted = name.to_lowercase();
    tasks.iter().find(|task| task.name.to_lowercase() == wanted).or_else(|| tasks.first())
}

/// Only an exact id match qualifies.
pub fn pick_by_id<'a>(tasks: &'a [Task], id: &str) -> Option<&'a Task> {
    tasks.iter().find(|task| task.id == id)
}

/// First entry, in the given order, whose task differs from the running one.
///
/// With nothing running, that is simply the first entry.
pub fn pick_previous<'a>(entries: &'a [TimeEntry], running: Option<&TimeEntry>) -> Option<&'a TimeEntry> {
    let running_task_id = running.map(|entry| entry.task.id.as_str());
    entries.iter().find(|entry| Some(entry.task.id.as_str()) != running_task_id)
}

/// Searches for `name` and picks the task by name.
pub async fn resolve_by_name<S: TaskSource>(source: &mut S, name: &str) -> Result<Resolution, ApiError> {
    let tasks = source.search_tasks(name).await?;
    Ok(match pick_by_name(&tasks, name) {
        Some(task) => Resolution::Found(task.clone()),
        None => Resolution::NotFound { query: name.to_string() },
    })
}

/// Searches for `query` and accepts only a task whose id equals it.
pub async fn resolve_by_id<S: TaskSource>(source: &mut S, query: &str) -> Result<Resolution, ApiError> {
    let tasks = source.search_tasks(query).await?;
    Ok(match pick_by_id(&tasks, query) {
        Some(task) => Resolution::Found(task.clone()),
        None => Resolution::NotFound { query: query.to_string() },
    })
}

/// Finds the task worked on before the running one.
pub async fn resolve_previous<S: TaskSource>(source: &mut S) -> Result<Resolution, ApiError> {
    let entries = source.get_recent_time_entries().await?;
    let running = source.get_running_timer().await?;
    Ok(match pick_previous(&entries, running.as_ref()) {
        Some(entry) => Resolution::Found(entry.task.clone()),
        None => Resolution::NoPrevious,
    })
}
