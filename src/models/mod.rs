//! Data models for pmcli
//!
//! Plain records exchanged with the backend. The client holds no authoritative
//! state; these are the wire shapes, serde-mapped to the server's camelCase
//! JSON, plus the closed status/priority enumerations with `Display`/`FromStr`
//! for CLI argument parsing.

pub mod project;
pub mod task;
pub mod user;

pub use project::{CreateProjectRequest, Project, ProjectStatus};
pub use task::{CreateTaskRequest, Task, TaskPriority, TaskStatus};
pub use user::{CreateUserRequest, User};
