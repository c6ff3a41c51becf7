//! Project service

use crate::api::{ApiClient, ApiError};
use crate::models::{CreateProjectRequest, Project, ProjectStatus};

/// Typed calls for the `/projects` endpoints
#[derive(Debug, Clone, Copy)]
pub struct ProjectService<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectService<'a> {
    /// Façade over the given client
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all projects
    pub async fn get_all(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }

    /// Fetch a project by id
    pub async fn get_by_id(&self, id: i64) -> Result<Project, ApiError> {
        self.client.get(&format!("/projects/{id}")).await
    }

    /// Fetch projects in the given status
    pub async fn get_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, ApiError> {
        self.client
            .get_query("/projects", &[("status", status.to_string())])
            .await
    }

    /// Fetch projects managed by the given user
    pub async fn get_by_manager(&self, manager_id: i64) -> Result<Vec<Project>, ApiError> {
        self.client
            .get_query("/projects", &[("projectManagerId", manager_id.to_string())])
            .await
    }

    /// Fetch projects the given user is a team member of
    pub async fn get_by_team_member(&self, user_id: i64) -> Result<Vec<Project>, ApiError> {
        self.client
            .get_query("/projects", &[("teamMemberId", user_id.to_string())])
            .await
    }

    /// Create a project, returning the server's representation
    pub async fn create(&self, project: &CreateProjectRequest) -> Result<Project, ApiError> {
        self.client.post("/projects", project).await
    }

    /// Replace a project, returning the server's representation
    pub async fn update(
        &self,
        id: i64,
        project: &CreateProjectRequest,
    ) -> Result<Project, ApiError> {
        self.client.put(&format!("/projects/{id}"), project).await
    }

    /// Move a project to the given status
    pub async fn update_status(
        &self,
        id: i64,
        status: ProjectStatus,
    ) -> Result<Project, ApiError> {
        self.client
            .put_query(
                &format!("/projects/{id}/status"),
                &[("status", status.to_string())],
            )
            .await
    }

    /// Add a user to the project team
    pub async fn add_team_member(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> Result<Project, ApiError> {
        self.client
            .put_query(&format!("/projects/{project_id}/team/{user_id}"), &[])
            .await
    }

    /// Remove a user from the project team
    pub async fn remove_team_member(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> Result<Project, ApiError> {
        self.client
            .delete(&format!("/projects/{project_id}/team/{user_id}"))
            .await
    }

    /// Delete a project
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_empty(&format!("/projects/{id}")).await
    }
}
