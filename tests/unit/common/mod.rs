//! Shared test utilities
//!
//! Fixture builders for wire-shaped JSON and helpers wiring an `ApiClient`
//! to a mockito server with a temp-dir token store.

use chrono::NaiveDate;
use tempfile::TempDir;

use pmcli::api::ApiClient;
use pmcli::auth::TokenStore;
use pmcli::models::{Task, TaskPriority, TaskStatus};

/// Token store backed by a fresh temp directory.
///
/// The `TempDir` must stay alive for the duration of the test.
pub fn temp_store() -> (TempDir, TokenStore) {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::at(dir.path().join("token"));
    (dir, store)
}

/// Client pointed at a mockito server
pub fn test_client(server: &mockito::ServerGuard, store: TokenStore) -> ApiClient {
    ApiClient::with_origin(server.url(), store)
}

/// Wire-shaped user JSON
pub fn user_json(id: i64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": username,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": format!("{username}@example.com"),
        "role": "DEVELOPER",
        "active": true
    })
}

/// Wire-shaped task JSON
pub fn task_json(id: i64, title: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "status": status,
        "priority": "MEDIUM",
        "dueDate": "2024-01-01",
        "projectId": 1
    })
}

/// Wire-shaped project JSON with the given team
pub fn project_json(id: i64, name: &str, team: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "status": "IN_PROGRESS",
        "projectManager": user_json(1, "manager"),
        "teamMembers": team
    })
}

/// In-memory task for filter tests
pub fn make_task(id: i64, title: &str, description: Option<&str>, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.map(String::from),
        status,
        priority: TaskPriority::Medium,
        due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        estimated_hours: None,
        actual_hours: None,
        project_id: 1,
        assignee: None,
        parent_task_id: None,
        created_at: None,
        updated_at: None,
    }
}
