//! Tests for the token store

use super::common::temp_store;

#[tokio::test]
async fn test_fresh_store_is_empty() {
    let (_dir, store) = temp_store();
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get_round_trips() {
    let (_dir, store) = temp_store();
    store.set("tok-123").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("tok-123".to_string()));
}

#[tokio::test]
async fn test_set_overwrites_previous_token() {
    let (_dir, store) = temp_store();
    store.set("old").await.unwrap();
    store.set("new").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("new".to_string()));
}

#[tokio::test]
async fn test_delete_empties_the_slot() {
    let (_dir, store) = temp_store();
    store.set("tok").await.unwrap();
    store.delete().await.unwrap();
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_on_empty_slot_is_noop() {
    let (_dir, store) = temp_store();
    store.delete().await.unwrap();
    store.delete().await.unwrap();
    assert_eq!(store.get().await.unwrap(), None);
}

#[tokio::test]
async fn test_set_creates_missing_parent_dirs() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = pmcli::auth::TokenStore::at(dir.path().join("nested/deeper/token"));
    store.set("tok").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("tok".to_string()));
}

#[tokio::test]
async fn test_surrounding_whitespace_is_trimmed() {
    let (_dir, store) = temp_store();
    store.set("tok\n").await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some("tok".to_string()));
}
