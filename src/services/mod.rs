//! Domain service façades
//!
//! One operation per backend endpoint, each a thin mapping from typed
//! arguments to an [`ApiClient`](crate::api::ApiClient) invocation. No business
//! logic and no response post-processing beyond typed deserialization; callers
//! refetch lists after mutations, nothing is cached here.

pub mod projects;
pub mod tasks;
pub mod users;

pub use projects::ProjectService;
pub use tasks::TaskService;
pub use users::UserService;
