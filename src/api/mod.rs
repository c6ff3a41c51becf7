//! HTTP client core
//!
//! Single point of outbound communication with the backend.
//!
//! ## Design
//!
//! - **One origin**: every path is resolved against the fixed `/api` base.
//! - **JSON only**: request bodies and response payloads are JSON.
//! - **Bearer attach**: the token store is read before each dispatch; a stored
//!   token becomes an `Authorization: Bearer` header, absence is not an error.
//! - **Session expiry**: a 401 response evicts the stored token once per
//!   request and surfaces [`ApiError::Unauthorized`]. There is no refresh flow
//!   and no automatic re-send.
//! - **Everything else propagates**: other error statuses, transport failures
//!   and malformed bodies are returned to the caller unchanged, without retry
//!   or backoff.

mod client;
mod error;

pub use client::{API_ORIGIN, ApiClient};
pub use error::ApiError;
