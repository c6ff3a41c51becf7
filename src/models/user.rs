//! User model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    /// Login name
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Server-defined role (ADMIN, PROJECT_MANAGER, DEVELOPER, TESTER)
    pub role: String,
    /// Whether the account is active
    pub active: bool,
    /// When the user was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    /// When the user was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Full display name ("First Last")
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating or replacing a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Login name
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Server-defined role
    pub role: String,
    /// Whether the account is active
    pub active: bool,
}
