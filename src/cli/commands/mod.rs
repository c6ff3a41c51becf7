//! Command implementations

mod auth;
mod project;
mod task;
mod user;

pub use auth::auth_cmd;
pub use project::project_cmd;
pub use task::task_cmd;
pub use user::user_cmd;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` CLI argument
pub(crate) fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    s.parse()
        .map_err(|_| anyhow::anyhow!("Invalid date: {s}. Use YYYY-MM-DD"))
}

/// Parse an optional `YYYY-MM-DD` CLI argument
pub(crate) fn parse_date_opt(s: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    s.map(parse_date).transpose()
}
