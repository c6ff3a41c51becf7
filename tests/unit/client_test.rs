//! Tests for the HTTP client core
//!
//! Exercises bearer attachment, session-expiry handling and error mapping
//! against local mock servers.

use pmcli::api::ApiError;
use pmcli::models::Task;
use pmcli::services::TaskService;

use super::common::{task_json, temp_store, test_client};

// =============================================================================
// BEARER ATTACHMENT
// =============================================================================

#[tokio::test]
async fn test_stored_token_becomes_bearer_header() {
    let (_dir, store) = temp_store();
    store.set("sekrit").await.unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_header("authorization", "Bearer sekrit")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server, store);
    let tasks = TaskService::new(&client).get_all().await.unwrap();
    assert!(tasks.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = test_client(&server, store);
    let _: Vec<Task> = TaskService::new(&client).get_all().await.unwrap();
    mock.assert_async().await;
}

// =============================================================================
// SESSION EXPIRY
// =============================================================================

#[tokio::test]
async fn test_401_evicts_stored_token_and_surfaces_unauthorized() {
    let (_dir, store) = temp_store();
    store.set("stale").await.unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/tasks").with_status(401).create_async().await;

    let client = test_client(&server, store.clone());
    let err = TaskService::new(&client).get_all().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));

    // The slot is now empty; subsequent requests go out unauthenticated
    assert_eq!(store.get().await.unwrap(), None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_second_401_finds_slot_already_empty() {
    let (_dir, store) = temp_store();
    store.set("stale").await.unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/tasks").with_status(401).expect(2).create_async().await;

    let client = test_client(&server, store.clone());
    let service = TaskService::new(&client);

    // First 401 clears the token
    assert!(service.get_all().await.unwrap_err().is_unauthorized());
    assert_eq!(store.get().await.unwrap(), None);

    // Second 401 on the re-issued request: still unauthorized, still empty,
    // no error from clearing an already-empty slot
    assert!(service.get_all().await.unwrap_err().is_unauthorized());
    assert_eq!(store.get().await.unwrap(), None);
    mock.assert_async().await;
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tasks/9")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = test_client(&server, store);
    let err = TaskService::new(&client).get_by_id(9).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        },
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_maps_to_status_404() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/tasks/404").with_status(404).create_async().await;

    let client = test_client(&server, store);
    let err = TaskService::new(&client).get_by_id(404).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn test_non_json_success_body_maps_to_decode() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tasks")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = test_client(&server, store);
    let err = TaskService::new(&client).get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_error_status_does_not_touch_stored_token() {
    let (_dir, store) = temp_store();
    store.set("keepme").await.unwrap();

    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/tasks").with_status(503).create_async().await;

    let client = test_client(&server, store.clone());
    let _ = TaskService::new(&client).get_all().await.unwrap_err();

    // Only 401 evicts; other failures leave the slot alone
    assert_eq!(store.get().await.unwrap(), Some("keepme".to_string()));
}

#[tokio::test]
async fn test_delete_discards_response_payload() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("DELETE", "/tasks/3").with_status(204).create_async().await;

    let client = test_client(&server, store);
    TaskService::new(&client).delete(3).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_with_valid_json_deserializes() {
    let (_dir, store) = temp_store();

    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/tasks/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(task_json(1, "T", "BACKLOG").to_string())
        .create_async()
        .await;

    let client = test_client(&server, store);
    let task = TaskService::new(&client).get_by_id(1).await.unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.title, "T");
}
