//! User service

use crate::api::{ApiClient, ApiError};
use crate::models::{CreateUserRequest, User};

/// Typed calls for the `/users` endpoints
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    /// Façade over the given client
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all users
    pub async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/users").await
    }

    /// Fetch a user by id
    pub async fn get_by_id(&self, id: i64) -> Result<User, ApiError> {
        self.client.get(&format!("/users/{id}")).await
    }

    /// Create a user, returning the server's representation
    pub async fn create(&self, user: &CreateUserRequest) -> Result<User, ApiError> {
        self.client.post("/users", user).await
    }

    /// Replace a user, returning the server's representation
    pub async fn update(&self, id: i64, user: &CreateUserRequest) -> Result<User, ApiError> {
        self.client.put(&format!("/users/{id}"), user).await
    }

    /// Delete a user
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_empty(&format!("/users/{id}")).await
    }
}
