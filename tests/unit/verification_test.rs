//! Tests for the field-verification state machine

use limbah::api::VerifierCredentials;
use limbah::models::{RecordStatus, VerificationRole, Verifier};
use limbah::verification::{
    FieldVerification, RoleState, VerificationError, WorkflowOutcome, WorkflowStatus,
};

use crate::common::{MockApi, VerifierBuilder};

fn credentials(user_id: &str) -> VerifierCredentials {
    VerifierCredentials {
        user_id: user_id.to_string(),
        password: "secret".to_string(),
    }
}

/// One eligible verifier per role in the matrix
fn full_crew() -> Vec<Verifier> {
    vec![
        VerifierBuilder::new().id("EMP-PP").name("Andi").department("Produksi").job_level(7).build(),
        VerifierBuilder::new().id("EMP-SP").name("Budi").department("Produksi").job_level(5).build(),
        VerifierBuilder::new().id("EMP-PH").name("Citra").department("KL").job_level(7).build(),
        VerifierBuilder::new().id("EMP-SH").name("Dewi").department("KL").job_level(6).build(),
    ]
}

fn approve_role(
    flow: &mut FieldVerification,
    api: &MockApi,
    role_id: &str,
    user_id: &str,
) -> Option<WorkflowOutcome> {
    flow.select(role_id).unwrap();
    flow.authenticate(api, &credentials(user_id)).unwrap();
    for item in VerificationRole::by_id(role_id).unwrap().checklist() {
        flow.set_checked(item.id, true).unwrap();
    }
    flow.approve(api).unwrap()
}

#[test]
fn test_scenario_hse_pelaksana_approves() {
    // KL level 7 resolves to pelaksana-hse; 2/2 items checked approves it
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-1");

    flow.select("pelaksana-hse").unwrap();
    let verifier = flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    assert_eq!(verifier.eligible_roles(), vec!["pelaksana-hse"]);

    flow.set_checked("kategori-limbah", true).unwrap();
    flow.set_checked("area-pemusnahan", true).unwrap();
    let outcome = flow.approve(&api).unwrap();

    assert!(outcome.is_none());
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Approved));
    assert_eq!(flow.record("pelaksana-hse").unwrap().status, RecordStatus::Approved);
    assert_eq!(api.approvals.borrow().len(), 1);
    assert_eq!(api.approvals.borrow()[0].verifier_id, "EMP-PH");
}

#[test]
fn test_completion_fires_only_at_four_approvals() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-2");

    assert!(approve_role(&mut flow, &api, "pelaksana-pemohon", "EMP-PP").is_none());
    assert!(approve_role(&mut flow, &api, "supervisor-pemohon", "EMP-SP").is_none());
    assert!(approve_role(&mut flow, &api, "pelaksana-hse", "EMP-PH").is_none());

    let outcome = approve_role(&mut flow, &api, "supervisor-hse", "EMP-SH").unwrap();
    assert_eq!(outcome.status, WorkflowStatus::FieldVerified);
    assert_eq!(outcome.records.len(), 4);
    assert!(outcome.records.iter().all(|r| r.status == RecordStatus::Approved));
    assert_eq!(flow.approved_count(), 4);
}

#[test]
fn test_ineligible_verifier_falls_back_to_selected() {
    // A pemohon-side verifier cannot act on an HSE role
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-3");

    flow.select("pelaksana-hse").unwrap();
    let err = flow.authenticate(&api, &credentials("EMP-PP")).unwrap_err();

    assert!(matches!(err, VerificationError::Ineligible { .. }));
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Selected));
    assert!(flow.auth_error().is_some());
    assert!(flow.verifier().is_none());
}

#[test]
fn test_auth_failure_surfaces_error_and_keeps_selection() {
    let api = MockApi::new(full_crew());
    api.fail_auth.set(true);
    let mut flow = FieldVerification::new("BA-4");

    flow.select("pelaksana-hse").unwrap();
    let err = flow.authenticate(&api, &credentials("EMP-PH")).unwrap_err();

    assert!(matches!(err, VerificationError::AuthenticationFailed(_)));
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Selected));
    assert_eq!(flow.auth_error(), Some("invalid credentials"));

    // The flow continues: a retry with working credentials succeeds
    api.fail_auth.set(false);
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Authenticated));
}

#[test]
fn test_approve_requires_complete_checklist() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-5");

    flow.select("pelaksana-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    flow.set_checked("kategori-limbah", true).unwrap();

    let err = flow.approve(&api).unwrap_err();
    assert!(matches!(
        err,
        VerificationError::Record(limbah::models::RecordError::ChecklistIncomplete { remaining: 1 })
    ));
    assert_eq!(flow.record("pelaksana-hse").unwrap().status, RecordStatus::Pending);
    assert!(api.approvals.borrow().is_empty());
}

#[test]
fn test_failed_submission_does_not_roll_back() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-6");

    flow.select("pelaksana-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    flow.set_checked("kategori-limbah", true).unwrap();
    flow.set_checked("area-pemusnahan", true).unwrap();

    api.fail_submit.set(true);
    let err = flow.approve(&api).unwrap_err();
    assert!(matches!(err, VerificationError::Api(_)));

    // Authenticated state survives the failure and the retry lands
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Authenticated));
    api.fail_submit.set(false);
    flow.approve(&api).unwrap();
    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Approved));
}

#[test]
fn test_rejection_is_hse_supervisor_only() {
    // An eligible HSE pelaksana (level 7) still may not reject, even though
    // the remote endpoint would accept the submission
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-7");

    flow.select("pelaksana-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();

    let err = flow.reject(&api, "kemasan bocor dan rusak").unwrap_err();
    assert!(matches!(err, VerificationError::RejectionNotPermitted));
    assert!(api.rejections.borrow().is_empty());
}

#[test]
fn test_rejection_reason_minimum_length() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-8");

    flow.select("supervisor-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-SH")).unwrap();

    // 9 trimmed characters, padded with whitespace
    let err = flow.reject(&api, "   too short   ").unwrap_err();
    assert!(matches!(err, VerificationError::ReasonTooShort(9)));
    assert!(api.rejections.borrow().is_empty());
}

#[test]
fn test_rejection_closes_workflow_as_field_rejected() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-9");

    flow.select("supervisor-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-SH")).unwrap();
    let outcome = flow.reject(&api, "dokumen tidak sesuai manifest").unwrap();

    assert_eq!(outcome.status, WorkflowStatus::FieldRejected);
    assert_eq!(flow.role_state("supervisor-hse"), Some(RoleState::Rejected));
    assert_eq!(
        flow.record("supervisor-hse").unwrap().rejection_reason.as_deref(),
        Some("dokumen tidak sesuai manifest")
    );

    // The workflow is closed for everything else
    let err = flow.select("pelaksana-hse").unwrap_err();
    assert!(matches!(err, VerificationError::WorkflowClosed(_)));
}

#[test]
fn test_cancel_returns_role_to_unselected() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-10");

    flow.select("pelaksana-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    flow.cancel();

    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Unselected));
    assert!(flow.selected_role().is_none());
    assert!(flow.verifier().is_none());
}

#[test]
fn test_switching_selection_resets_previous_role() {
    let api = MockApi::new(full_crew());
    let mut flow = FieldVerification::new("BA-11");

    flow.select("pelaksana-hse").unwrap();
    flow.authenticate(&api, &credentials("EMP-PH")).unwrap();
    flow.select("supervisor-hse").unwrap();

    assert_eq!(flow.role_state("pelaksana-hse"), Some(RoleState::Unselected));
    assert_eq!(flow.role_state("supervisor-hse"), Some(RoleState::Selected));
    assert!(flow.verifier().is_none());
}

#[test]
fn test_set_checked_requires_authentication() {
    let mut flow = FieldVerification::new("BA-12");
    flow.select("pelaksana-hse").unwrap();

    let err = flow.set_checked("kategori-limbah", true).unwrap_err();
    assert!(matches!(err, VerificationError::NotAuthenticated(_)));
}

#[test]
fn test_select_unknown_role() {
    let mut flow = FieldVerification::new("BA-13");
    let err = flow.select("manajer-umum").unwrap_err();
    assert!(matches!(err, VerificationError::UnknownRole(_)));
}

#[test]
fn test_resume_from_records_and_finish() {
    let api = MockApi::new(full_crew());
    let mut seed = FieldVerification::new("BA-14");
    approve_role(&mut seed, &api, "pelaksana-pemohon", "EMP-PP");
    approve_role(&mut seed, &api, "supervisor-pemohon", "EMP-SP");
    approve_role(&mut seed, &api, "pelaksana-hse", "EMP-PH");
    let records: Vec<_> = seed.records().into_iter().cloned().collect();

    // A fresh instance resumes the three closed roles
    let mut flow = FieldVerification::from_records("BA-14", &records);
    assert_eq!(flow.approved_count(), 3);
    assert!(flow.outcome().is_none());
    assert!(matches!(
        flow.select("pelaksana-hse").unwrap_err(),
        VerificationError::Record(limbah::models::RecordError::AlreadyClosed { .. })
    ));

    let outcome = approve_role(&mut flow, &api, "supervisor-hse", "EMP-SH").unwrap();
    assert_eq!(outcome.status, WorkflowStatus::FieldVerified);
}
