//! Bearer token persistence
//!
//! Durable single-slot storage for the session token. The slot is populated by
//! `pmcli auth token` (the local surface of an external login flow), read
//! before every outbound request, and cleared when the server reports an
//! expired session. It survives process restarts and starts empty on a fresh
//! installation.

use std::io;
use std::path::PathBuf;

use tokio::fs;

use crate::paths;

/// Single-slot store for the bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by the default slot under the user config directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: paths::token_file(),
        }
    }

    /// Store backed by an explicit file (tests, alternate installations)
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored token. An empty slot is `None`, not an error.
    pub async fn get(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Write the token. A concurrent `get` sees either the old or the new
    /// value, never a torn write: the new token lands in a temp file first and
    /// is renamed over the slot.
    pub async fn set(&self, token: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Delete the stored token. Deleting an already-empty slot is a no-op.
    pub async fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
