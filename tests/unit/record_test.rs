//! Tests for the verification record model

use limbah::models::{RecordError, RecordStatus, VerificationRecord, VerificationRole};

use crate::common::VerifierBuilder;

fn pending(role_id: &str) -> VerificationRecord {
    VerificationRecord::new(VerificationRole::by_id(role_id).unwrap())
}

#[test]
fn test_new_record_is_pending_and_unchecked() {
    let record = pending("pelaksana-hse");

    assert_eq!(record.status, RecordStatus::Pending);
    assert_eq!(record.checklist.len(), 2);
    assert_eq!(record.checked_count(), 0);
    assert!(!record.all_checked());
    assert!(record.completed_by.is_none());
    assert!(record.completed_at.is_none());
}

#[test]
fn test_set_checked_unknown_item() {
    let mut record = pending("pelaksana-hse");
    let err = record.set_checked("tidak-ada", true).unwrap_err();
    assert_eq!(
        err,
        RecordError::UnknownItem {
            item_id: "tidak-ada".to_string()
        }
    );
}

#[test]
fn test_approve_requires_all_items() {
    let mut record = pending("pelaksana-hse");
    record.set_checked("kategori-limbah", true).unwrap();

    let err = record.approve(VerifierBuilder::new().build()).unwrap_err();
    assert_eq!(err, RecordError::ChecklistIncomplete { remaining: 1 });
    assert_eq!(record.status, RecordStatus::Pending);
}

#[test]
fn test_approve_sets_completion_fields() {
    let mut record = pending("pelaksana-hse");
    record.set_checked("kategori-limbah", true).unwrap();
    record.set_checked("area-pemusnahan", true).unwrap();

    record.approve(VerifierBuilder::new().name("Citra").build()).unwrap();

    assert_eq!(record.status, RecordStatus::Approved);
    assert_eq!(record.completed_by.as_ref().unwrap().name, "Citra");
    assert!(record.completed_at.is_some());
}

#[test]
fn test_closed_record_is_immutable() {
    let mut record = pending("pelaksana-hse");
    record.set_checked("kategori-limbah", true).unwrap();
    record.set_checked("area-pemusnahan", true).unwrap();
    record.approve(VerifierBuilder::new().build()).unwrap();

    // No un-approve, no re-check, no second approval
    assert!(matches!(
        record.set_checked("kategori-limbah", false),
        Err(RecordError::AlreadyClosed { .. })
    ));
    assert!(matches!(
        record.approve(VerifierBuilder::new().build()),
        Err(RecordError::AlreadyClosed { .. })
    ));
    assert!(matches!(
        record.reject(VerifierBuilder::new().build(), "alasan penolakan".to_string()),
        Err(RecordError::AlreadyClosed { .. })
    ));
}

#[test]
fn test_reject_carries_reason() {
    let mut record = pending("supervisor-hse");
    record
        .reject(
            VerifierBuilder::new().job_level(5).build(),
            "kemasan bocor dan rusak".to_string(),
        )
        .unwrap();

    assert_eq!(record.status, RecordStatus::Rejected);
    assert_eq!(record.rejection_reason.as_deref(), Some("kemasan bocor dan rusak"));
}

#[test]
fn test_record_serializes_camel_case() {
    let record = pending("pelaksana-hse");
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"roleId\":\"pelaksana-hse\""));
    assert!(json.contains("\"status\":\"pending\""));
    assert!(json.contains("\"itemId\":\"kategori-limbah\""));
}
