//! Tests for API envelope and wire types

use limbah::api::{BeritaAcara, Envelope, Page, VerifierCredentials, WorkflowData};
use limbah::models::Verifier;

#[test]
fn test_envelope_success_carries_data() {
    let envelope: Envelope<u32> = Envelope {
        success: true,
        data: Some(42),
        message: None,
    };
    assert_eq!(envelope.into_result().unwrap(), 42);
}

#[test]
fn test_envelope_failure_carries_message() {
    let envelope: Envelope<u32> = Envelope {
        success: false,
        data: None,
        message: Some("nomor permohonan tidak ditemukan".to_string()),
    };
    let err = envelope.into_result().unwrap_err();
    assert_eq!(err.to_string(), "nomor permohonan tidak ditemukan");
}

#[test]
fn test_envelope_success_without_data_is_an_error() {
    let envelope: Envelope<u32> = Envelope {
        success: true,
        data: None,
        message: None,
    };
    assert!(envelope.into_result().is_err());
}

#[test]
fn test_envelope_ack_ignores_data() {
    let ok: Envelope<serde_json::Value> = Envelope {
        success: true,
        data: None,
        message: None,
    };
    assert!(ok.into_ack().is_ok());

    let failed: Envelope<serde_json::Value> = Envelope {
        success: false,
        data: None,
        message: Some("rejected".to_string()),
    };
    assert!(failed.into_ack().is_err());
}

#[test]
fn test_verifier_deserializes_camel_case() {
    let json = r#"{
        "success": true,
        "data": {
            "id": "EMP-9",
            "name": "Citra",
            "department": "KL",
            "jobLevel": 7,
            "jobTitle": "Pelaksana HSE"
        }
    }"#;

    let envelope: Envelope<Verifier> = serde_json::from_str(json).unwrap();
    let verifier = envelope.into_result().unwrap();
    assert_eq!(verifier.job_level, 7);
    assert_eq!(verifier.job_title, "Pelaksana HSE");
}

#[test]
fn test_credentials_serialize_camel_case() {
    let credentials = VerifierCredentials {
        user_id: "EMP-9".to_string(),
        password: "secret".to_string(),
    };
    let json = serde_json::to_string(&credentials).unwrap();
    assert!(json.contains("\"userId\":\"EMP-9\""));
}

#[test]
fn test_workflow_deserializes_with_records() {
    let json = r#"{
        "recordId": "BA-7",
        "approvalNumber": "PMH-2024-0042",
        "status": "submitted",
        "records": [{
            "roleId": "pelaksana-hse",
            "status": "approved",
            "completedBy": {
                "id": "EMP-9",
                "name": "Citra",
                "department": "KL",
                "jobLevel": 7,
                "jobTitle": "Pelaksana HSE"
            },
            "completedAt": "2024-06-01T08:00:00Z",
            "checklist": [
                {"itemId": "kategori-limbah", "checked": true},
                {"itemId": "area-pemusnahan", "checked": true}
            ]
        }]
    }"#;

    let workflow: WorkflowData = serde_json::from_str(json).unwrap();
    assert_eq!(workflow.record_id, "BA-7");
    assert_eq!(workflow.records.len(), 1);
    assert!(workflow.records[0].all_checked());
}

#[test]
fn test_page_count() {
    let page: Page<BeritaAcara> = Page {
        items: vec![],
        page: 1,
        per_page: 10,
        total: 31,
    };
    assert_eq!(page.page_count(), 4);

    let exact: Page<BeritaAcara> = Page {
        items: vec![],
        page: 1,
        per_page: 10,
        total: 30,
    };
    assert_eq!(exact.page_count(), 3);

    let degenerate: Page<BeritaAcara> = Page {
        items: vec![],
        page: 1,
        per_page: 0,
        total: 30,
    };
    assert_eq!(degenerate.page_count(), 0);
}
