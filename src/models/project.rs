//! Project model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::User;

/// A project as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned identifier
    pub id: i64,

    /// Project name
    pub name: String,

    /// Longer free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When work started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// Planned end date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_end_date: Option<NaiveDate>,

    /// Actual end date, once finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<NaiveDate>,

    /// Current status
    pub status: ProjectStatus,

    /// Planned effort in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_effort_hours: Option<i32>,

    /// Actual effort in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_effort_hours: Option<i32>,

    /// The project manager
    pub project_manager: User,

    /// Team members (membership unique per project, server-enforced)
    #[serde(default)]
    pub team_members: Vec<User>,

    /// When the project was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    /// When the project was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Being scoped, no work started
    #[default]
    Planning,
    /// Actively worked on
    InProgress,
    /// Paused
    OnHold,
    /// Finished
    Completed,
    /// Abandoned
    Cancelled,
}

impl ProjectStatus {
    /// The fixed selection set offered in forms
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::InProgress,
        Self::OnHold,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Wire representation (what the backend expects in query strings)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::InProgress => "IN_PROGRESS",
            Self::OnHold => "ON_HOLD",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "PLANNING" => Ok(Self::Planning),
            "IN_PROGRESS" | "INPROGRESS" | "ACTIVE" => Ok(Self::InProgress),
            "ON_HOLD" | "ONHOLD" | "PAUSED" => Ok(Self::OnHold),
            "COMPLETED" | "COMPLETE" | "DONE" => Ok(Self::Completed),
            "CANCELLED" | "CANCELED" => Ok(Self::Cancelled),
            _ => Err(format!(
                "Invalid status: {s}. Use: planning, in_progress, on_hold, completed, cancelled"
            )),
        }
    }
}

/// Payload for creating or replacing a project
///
/// References are sent as scalar ids (`projectManagerId`, `teamMemberIds`), not
/// embedded entities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name
    pub name: String,
    /// Longer free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When work starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Planned end date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_end_date: Option<NaiveDate>,
    /// Actual end date, once finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<NaiveDate>,
    /// Initial status
    pub status: ProjectStatus,
    /// Planned effort in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_effort_hours: Option<i32>,
    /// Actual effort in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_effort_hours: Option<i32>,
    /// The project manager
    pub project_manager_id: i64,
    /// Team member ids
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_member_ids: Vec<i64>,
}
