//! Tests for client-side task list filtering

use pmcli::filter::filter_tasks;
use pmcli::models::TaskStatus;

use super::common::make_task;

#[test]
fn test_no_filters_returns_everything() {
    let tasks = vec![
        make_task(1, "One", None, TaskStatus::Todo),
        make_task(2, "Two", None, TaskStatus::Done),
    ];

    let result = filter_tasks(&tasks, None, None);
    assert_eq!(result.len(), 2);
}

#[test]
fn test_status_filter_keeps_only_matching_status() {
    let tasks = vec![
        make_task(1, "One", None, TaskStatus::Done),
        make_task(2, "Two", None, TaskStatus::Todo),
        make_task(3, "Three", None, TaskStatus::Done),
    ];

    let result = filter_tasks(&tasks, Some(TaskStatus::Done), None);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|t| t.status == TaskStatus::Done));
}

#[test]
fn test_search_matches_title_case_insensitive() {
    let tasks = vec![
        make_task(1, "Fix FOO widget", None, TaskStatus::Todo),
        make_task(2, "Unrelated", None, TaskStatus::Todo),
    ];

    let result = filter_tasks(&tasks, None, Some("foo"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

#[test]
fn test_search_matches_description_case_insensitive() {
    let tasks = vec![
        make_task(1, "One", Some("contains Foo somewhere"), TaskStatus::Todo),
        make_task(2, "Two", Some("nothing relevant"), TaskStatus::Todo),
    ];

    let result = filter_tasks(&tasks, None, Some("FOO"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, 1);
}

#[test]
fn test_missing_description_never_matches() {
    let tasks = vec![make_task(1, "One", None, TaskStatus::Todo)];

    let result = filter_tasks(&tasks, None, Some("foo"));
    assert!(result.is_empty());
}

#[test]
fn test_status_and_search_combine_with_and() {
    let tasks = vec![
        make_task(1, "foo one", None, TaskStatus::Done),
        make_task(2, "foo two", None, TaskStatus::Todo),
        make_task(3, "bar", None, TaskStatus::Done),
        make_task(4, "also foo", Some("foo again"), TaskStatus::Done),
    ];

    let result = filter_tasks(&tasks, Some(TaskStatus::Done), Some("foo"));
    let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn test_empty_search_matches_everything() {
    let tasks = vec![make_task(1, "One", None, TaskStatus::Todo)];

    let result = filter_tasks(&tasks, None, Some(""));
    assert_eq!(result.len(), 1);
}

#[test]
fn test_order_is_preserved() {
    let tasks = vec![
        make_task(3, "foo c", None, TaskStatus::Todo),
        make_task(1, "foo a", None, TaskStatus::Todo),
        make_task(2, "foo b", None, TaskStatus::Todo),
    ];

    let result = filter_tasks(&tasks, None, Some("foo"));
    let ids: Vec<i64> = result.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}
