//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::models::{Project, Task, TaskPriority, TaskStatus, User};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One line of a task list
#[derive(Debug, Serialize)]
pub struct TaskRow {
    /// Task id
    pub id: i64,
    /// Task title
    pub title: String,
    /// Status (wire form)
    pub status: String,
    /// Priority (wire form)
    pub priority: String,
    /// Due date (ISO 8601)
    pub due_date: String,
    /// Owning project id
    pub project_id: i64,
    /// Assignee username, if assigned
    pub assignee: Option<String>,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            due_date: task.due_date.to_string(),
            project_id: task.project_id,
            assignee: task.assignee.as_ref().map(|u| u.username.clone()),
        }
    }
}

/// One line of a project list
#[derive(Debug, Serialize)]
pub struct ProjectRow {
    /// Project id
    pub id: i64,
    /// Project name
    pub name: String,
    /// Status (wire form)
    pub status: String,
    /// Manager username
    pub manager: String,
    /// Team size
    pub team_size: usize,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            status: project.status.to_string(),
            manager: project.project_manager.username.clone(),
            team_size: project.team_members.len(),
        }
    }
}

/// One line of a user list
#[derive(Debug, Serialize)]
pub struct UserRow {
    /// User id
    pub id: i64,
    /// Login name
    pub username: String,
    /// Full display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Server-defined role
    pub role: String,
    /// Whether the account is active
    pub active: bool,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.full_name(),
            email: user.email.clone(),
            role: user.role.clone(),
            active: user.active,
        }
    }
}

/// Colorize a task status for human output
#[must_use]
pub fn task_status_colored(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::Backlog => status.as_str().dimmed(),
        TaskStatus::Todo => status.as_str().normal(),
        TaskStatus::InProgress => status.as_str().yellow(),
        TaskStatus::Review => status.as_str().cyan(),
        TaskStatus::Done => status.as_str().green(),
        TaskStatus::Cancelled => status.as_str().red(),
    }
}

/// Colorize a task priority for human output
#[must_use]
pub fn priority_colored(priority: TaskPriority) -> ColoredString {
    match priority {
        TaskPriority::Low => priority.as_str().dimmed(),
        TaskPriority::Medium => priority.as_str().normal(),
        TaskPriority::High => priority.as_str().yellow(),
        TaskPriority::Critical => priority.as_str().red().bold(),
    }
}
