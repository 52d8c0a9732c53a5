//! Logout command - clear the stored session

use log::warn;

use limbah::api::{ApiClient, SessionStore};
use limbah::output::{OperationResult, OutputMode};

/// Clear the local session and try to invalidate it remotely
pub fn logout(base_url: &str, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);
    if client.has_token() {
        // A failed remote logout still clears the local session
        if let Err(err) = client.logout() {
            warn!("remote logout failed: {err}");
        }
    }

    SessionStore::clear()?;

    OperationResult {
        success: true,
        message: "Logged out.".to_string(),
    }
    .render(mode);
    Ok(())
}
