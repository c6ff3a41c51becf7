//! Task service

use chrono::NaiveDate;

use crate::api::{ApiClient, ApiError};
use crate::models::{CreateTaskRequest, Task, TaskStatus};

/// Typed calls for the `/tasks` endpoints
#[derive(Debug, Clone, Copy)]
pub struct TaskService<'a> {
    client: &'a ApiClient,
}

impl<'a> TaskService<'a> {
    /// Façade over the given client
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all tasks
    pub async fn get_all(&self) -> Result<Vec<Task>, ApiError> {
        self.client.get("/tasks").await
    }

    /// Fetch a task by id
    pub async fn get_by_id(&self, id: i64) -> Result<Task, ApiError> {
        self.client.get(&format!("/tasks/{id}")).await
    }

    /// Fetch tasks belonging to the given project
    pub async fn get_by_project(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        self.client
            .get_query("/tasks", &[("projectId", project_id.to_string())])
            .await
    }

    /// Fetch tasks assigned to the given user
    pub async fn get_by_assignee(&self, assignee_id: i64) -> Result<Vec<Task>, ApiError> {
        self.client
            .get_query("/tasks", &[("assigneeId", assignee_id.to_string())])
            .await
    }

    /// Fetch tasks belonging to the given project in the given status
    pub async fn get_by_project_and_status(
        &self,
        project_id: i64,
        status: TaskStatus,
    ) -> Result<Vec<Task>, ApiError> {
        self.client
            .get_query(
                "/tasks",
                &[
                    ("projectId", project_id.to_string()),
                    ("status", status.to_string()),
                ],
            )
            .await
    }

    /// Fetch tasks assigned to the given user in the given status
    pub async fn get_by_assignee_and_status(
        &self,
        assignee_id: i64,
        status: TaskStatus,
    ) -> Result<Vec<Task>, ApiError> {
        self.client
            .get_query(
                "/tasks",
                &[
                    ("assigneeId", assignee_id.to_string()),
                    ("status", status.to_string()),
                ],
            )
            .await
    }

    /// Fetch tasks whose due date has passed
    pub async fn get_overdue(&self) -> Result<Vec<Task>, ApiError> {
        self.client.get("/tasks/overdue").await
    }

    /// Fetch the subtasks of the given task
    pub async fn get_subtasks(&self, parent_task_id: i64) -> Result<Vec<Task>, ApiError> {
        self.client
            .get(&format!("/tasks/subtasks/{parent_task_id}"))
            .await
    }

    /// Fetch tasks of a project due inside the given date range
    pub async fn get_by_project_and_date_range(
        &self,
        project_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Task>, ApiError> {
        self.client
            .get_query(
                &format!("/tasks/project/{project_id}/dateRange"),
                &[
                    ("startDate", start_date.to_string()),
                    ("endDate", end_date.to_string()),
                ],
            )
            .await
    }

    /// Create a task, returning the server's representation
    pub async fn create(&self, task: &CreateTaskRequest) -> Result<Task, ApiError> {
        self.client.post("/tasks", task).await
    }

    /// Replace a task, returning the server's representation
    pub async fn update(&self, id: i64, task: &CreateTaskRequest) -> Result<Task, ApiError> {
        self.client.put(&format!("/tasks/{id}"), task).await
    }

    /// Move a task to the given status
    pub async fn update_status(&self, id: i64, status: TaskStatus) -> Result<Task, ApiError> {
        self.client
            .put_query(
                &format!("/tasks/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    /// Assign a task to a user
    pub async fn assign(&self, id: i64, assignee_id: i64) -> Result<Task, ApiError> {
        self.client
            .put_query(&format!("/tasks/{id}/assign/{assignee_id}"), &[])
            .await
    }

    /// Delete a task
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_empty(&format!("/tasks/{id}")).await
    }
}
