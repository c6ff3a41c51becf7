//! pmcli - a typed client for a project management REST service
//!
//! This library provides the API access layer: an HTTP client core handling
//! base-origin resolution, bearer authentication and session expiry, typed
//! service façades over the users/projects/tasks endpoints, and a durable
//! single-slot token store.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod auth;
pub mod config;
pub mod filter;
pub mod models;
pub mod output;
pub mod paths;
pub mod services;
