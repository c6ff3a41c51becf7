//! Task model
//!
//! Tasks belong to a project, may be assigned to a user, and may reference a
//! parent task to form subtask hierarchies. The parent reference is sent as-is;
//! the server owns cycle and existence checks.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::User;

/// A task as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier
    pub id: i64,

    /// Short summary of the work
    pub title: String,

    /// Longer free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Current status
    pub status: TaskStatus,

    /// Priority level
    pub priority: TaskPriority,

    /// Due date (ISO 8601 date)
    pub due_date: NaiveDate,

    /// Estimated effort in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,

    /// Actual effort in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<i32>,

    /// Owning project
    pub project_id: i64,

    /// Assigned user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    /// Parent task, if this is a subtask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<i64>,

    /// When the task was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    /// When the task was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not yet scheduled
    #[default]
    Backlog,
    /// Scheduled, not started
    Todo,
    /// Currently being worked on
    InProgress,
    /// Awaiting review
    Review,
    /// Completed
    Done,
    /// Abandoned
    Cancelled,
}

impl TaskStatus {
    /// The fixed selection set offered in forms
    pub const ALL: [Self; 6] = [
        Self::Backlog,
        Self::Todo,
        Self::InProgress,
        Self::Review,
        Self::Done,
        Self::Cancelled,
    ];

    /// Wire representation (what the backend expects in query strings)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Review => "REVIEW",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "BACKLOG" => Ok(Self::Backlog),
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" | "INPROGRESS" | "STARTED" => Ok(Self::InProgress),
            "REVIEW" => Ok(Self::Review),
            "DONE" | "COMPLETE" | "COMPLETED" => Ok(Self::Done),
            "CANCELLED" | "CANCELED" => Ok(Self::Cancelled),
            _ => Err(format!(
                "Invalid status: {s}. Use: backlog, todo, in_progress, review, done, cancelled"
            )),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Low priority
    Low,
    /// Medium priority (default)
    #[default]
    Medium,
    /// High priority
    High,
    /// Critical - needs immediate attention
    Critical,
}

impl TaskPriority {
    /// The fixed selection set offered in forms
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" | "MED" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "CRITICAL" | "CRIT" => Ok(Self::Critical),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high, critical")),
        }
    }
}

/// Payload for creating or replacing a task
///
/// References are sent as scalar ids (`assigneeId`, `parentTaskId`), not
/// embedded entities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Short summary of the work
    pub title: String,
    /// Longer free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial status
    pub status: TaskStatus,
    /// Priority level
    pub priority: TaskPriority,
    /// Due date (ISO 8601 date)
    pub due_date: NaiveDate,
    /// Estimated effort in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<i32>,
    /// Owning project
    pub project_id: i64,
    /// Assigned user, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    /// Parent task, if this is a subtask
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<i64>,
}
