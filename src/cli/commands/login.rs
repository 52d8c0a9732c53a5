//! Login command - obtain and store a session token

use anyhow::Context;

use limbah::api::{ApiClient, SessionStore};
use limbah::output::{OperationResult, OutputMode};

/// Log in with account credentials and persist the session
pub fn login(base_url: &str, username: &str, password: &str, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);
    let data = client.login(username, password)?;
    SessionStore::save(&data)?;

    OperationResult {
        success: true,
        message: format!("Logged in as {username}."),
    }
    .render(mode);
    Ok(())
}

/// Exchange the stored refresh token for a fresh session
pub fn refresh(base_url: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = SessionStore::load().context("no stored session; run 'limbah login'")?;
    let refresh_token = session
        .refresh_token
        .context("stored session has no refresh token; run 'limbah login'")?;

    let client = ApiClient::new(base_url);
    let data = client.refresh(&refresh_token)?;
    SessionStore::save(&data)?;

    OperationResult {
        success: true,
        message: "Session refreshed.".to_string(),
    }
    .render(mode);
    Ok(())
}
