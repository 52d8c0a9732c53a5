//! Session token storage
//!
//! The bearer token lives in two possible client-side stores, checked in
//! order: the session file at `~/.limbah/session.json`, then the
//! `LIMBAH_TOKEN` environment variable. Login writes the file; logout
//! removes it.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::paths;

use super::types::LoginData;

/// Environment variable consulted when no session file exists
pub const TOKEN_ENV: &str = "LIMBAH_TOKEN";

/// Persisted session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStore {
    /// Bearer token
    pub token: String,
    /// Refresh token, when issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl SessionStore {
    /// Persist tokens from a login/refresh response
    pub fn save(data: &LoginData) -> anyhow::Result<()> {
        let store = Self {
            token: data.token.clone(),
            refresh_token: data.refresh_token.clone(),
        };

        let dir = paths::global_config_dir();
        fs::create_dir_all(&dir)?;
        let content = serde_json::to_string_pretty(&store)?;
        fs::write(paths::session_file(), content)?;
        Ok(())
    }

    /// Load the persisted session, if any
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = paths::session_file();
        if !path.exists() {
            return None;
        }
        fs::read_to_string(&path).ok().and_then(|content| serde_json::from_str(&content).ok())
    }

    /// Remove the persisted session
    pub fn clear() -> anyhow::Result<()> {
        let path = paths::session_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Resolve the bearer token from the session file, then the environment
#[must_use]
pub fn bearer_token() -> Option<String> {
    if let Some(session) = SessionStore::load() {
        return Some(session.token);
    }
    std::env::var(TOKEN_ENV).ok().filter(|token| !token.is_empty())
}
