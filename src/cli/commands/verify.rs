//! Verify commands - drive the field-verification flow

use anyhow::Context;

use limbah::api::{ApiClient, VerifierCredentials, WorkflowData};
use limbah::models::{ROLES, VerificationRole};
use limbah::output::{OutputMode, RoleProgress, VerifyActionResult, VerifyStatusResult};
use limbah::verification::FieldVerification;

use crate::cli::app::VerifyAction;

/// Dispatch a verify subcommand
pub fn verify(base_url: &str, action: VerifyAction, mode: OutputMode) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);

    match action {
        VerifyAction::Status { record_id } => status(&client, &record_id, mode),
        VerifyAction::Approve {
            record_id,
            role,
            user,
            password,
            confirm,
            all,
        } => approve(&client, &record_id, &role, &user, &password, &confirm, all, mode),
        VerifyAction::Reject {
            record_id,
            role,
            user,
            password,
            reason,
        } => reject(&client, &record_id, &role, &user, &password, &reason, mode),
    }
}

fn load_flow(client: &ApiClient, record_id: &str) -> anyhow::Result<(WorkflowData, FieldVerification)> {
    let workflow = client
        .workflow(record_id)
        .with_context(|| format!("failed to load workflow for record '{record_id}'"))?;
    let flow = FieldVerification::from_records(&workflow.record_id, &workflow.records);
    Ok((workflow, flow))
}

fn status(client: &ApiClient, record_id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let (workflow, flow) = load_flow(client, record_id)?;

    let roles = ROLES
        .iter()
        .filter_map(|role| {
            flow.record(role.id).map(|record| RoleProgress {
                role_id: role.id.to_string(),
                title: role.title.to_string(),
                status: record.status.to_string(),
                checked: record.checked_count(),
                total: record.checklist.len(),
                completed_by: record.completed_by.as_ref().map(|v| v.name.clone()),
                rejection_reason: record.rejection_reason.clone(),
            })
        })
        .collect();

    VerifyStatusResult {
        record_id: workflow.record_id,
        approval_number: workflow.approval_number,
        status: flow
            .outcome()
            .map_or(workflow.status, |outcome| outcome.status.as_str().to_string()),
        roles,
    }
    .render(mode);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn approve(
    client: &ApiClient,
    record_id: &str,
    role_id: &str,
    user: &str,
    password: &str,
    confirm: &[String],
    all: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (_, mut flow) = load_flow(client, record_id)?;

    flow.select(role_id)?;
    let verifier = flow
        .authenticate(
            client,
            &VerifierCredentials {
                user_id: user.to_string(),
                password: password.to_string(),
            },
        )?
        .clone();

    if all {
        let role = VerificationRole::by_id(role_id)
            .with_context(|| format!("unknown role '{role_id}'"))?;
        for item in role.checklist() {
            flow.set_checked(item.id, true)?;
        }
    } else {
        for item_id in confirm {
            flow.set_checked(item_id, true)?;
        }
    }

    let outcome = flow.approve(client)?;

    VerifyActionResult {
        record_id: record_id.to_string(),
        role_id: role_id.to_string(),
        verifier: verifier.name,
        status: "approved".to_string(),
        workflow_status: outcome.map(|o| o.status.as_str().to_string()),
    }
    .render(mode);
    Ok(())
}

fn reject(
    client: &ApiClient,
    record_id: &str,
    role_id: &str,
    user: &str,
    password: &str,
    reason: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (_, mut flow) = load_flow(client, record_id)?;

    flow.select(role_id)?;
    let verifier = flow
        .authenticate(
            client,
            &VerifierCredentials {
                user_id: user.to_string(),
                password: password.to_string(),
            },
        )?
        .clone();

    let outcome = flow.reject(client, reason)?;

    VerifyActionResult {
        record_id: record_id.to_string(),
        role_id: role_id.to_string(),
        verifier: verifier.name,
        status: "rejected".to_string(),
        workflow_status: Some(outcome.status.as_str().to_string()),
    }
    .render(mode);
    Ok(())
}
