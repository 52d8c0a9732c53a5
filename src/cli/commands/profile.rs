//! Profile command - show the logged-in user

use limbah::api::ApiClient;
use limbah::output::{OutputMode, ProfileResult};

/// Fetch and render the current user's profile
pub fn profile(base_url: &str, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);
    let user = client.profile()?;

    ProfileResult {
        id: user.id,
        name: user.name,
        department: user.department,
        job_level: user.job_level,
        job_title: user.job_title,
    }
    .render(mode);
    Ok(())
}
