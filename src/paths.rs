//! Centralized path definitions for limbah
//!
//! Single source of truth for the files this tool keeps on disk.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.limbah/
//! ├── config.toml      # User preferences (API base URL, label defaults)
//! └── session.json     # Bearer/refresh tokens for the current session
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".limbah";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Session token filename
const SESSION_FILE: &str = "session.json";

/// Get the global limbah directory.
///
/// Returns `~/.limbah/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.limbah/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the session token file path.
///
/// Returns `~/.limbah/session.json`. This is the primary token store; the
/// `LIMBAH_TOKEN` environment variable is the fallback.
#[must_use]
pub fn session_file() -> PathBuf {
    global_config_dir().join(SESSION_FILE)
}
