//! API request and response types
//!
//! All bodies are camelCase on the wire. The envelope is the only shape the
//! transport layer knows about; everything else is plain data.

use serde::{Deserialize, Serialize};

use crate::models::{ChecklistItem, VerificationRecord};

use super::error::ApiError;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard response envelope: `{success, data | message}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into the carried data
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            self.data.ok_or_else(|| ApiError::endpoint("response missing data"))
        } else {
            Err(ApiError::endpoint(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }

    /// Unwrap an envelope whose data does not matter (submissions)
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::endpoint(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// Tokens returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Bearer token for subsequent requests
    pub token: String,
    /// Refresh token, when the backend issues one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Credentials for the independent per-verifier authentication call.
///
/// This call is deliberately sent without the session bearer token: each
/// verifier proves their own identity at the moment they act.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierCredentials {
    /// Employee identifier
    pub user_id: String,
    /// Employee password
    pub password: String,
}

// =============================================================================
// BERITA ACARA
// =============================================================================

/// A destruction-event record as listed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeritaAcara {
    /// Record identifier
    pub id: String,
    /// Approval (permohonan) number
    pub approval_number: String,
    /// Requesting department
    pub department: String,
    /// Short waste description
    pub waste_description: String,
    /// Workflow status tag (e.g. "submitted", "field_verified")
    pub status: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
}

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub per_page: u32,
    /// Total item count across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Total number of pages
    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }
}

// =============================================================================
// WORKFLOW
// =============================================================================

/// Workflow lookup response: the record plus per-role verification state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowData {
    /// Berita Acara record identifier
    pub record_id: String,
    /// Approval (permohonan) number
    pub approval_number: String,
    /// Workflow status tag
    pub status: String,
    /// Per-role verification records
    pub records: Vec<VerificationRecord>,
}

/// Approval submission body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalSubmission {
    /// Role being approved
    pub role_id: String,
    /// Acting verifier's employee id
    pub verifier_id: String,
    /// Checklist state at submission time (all items checked)
    pub checklist: Vec<ChecklistItem>,
    /// Submission timestamp (RFC3339)
    pub completed_at: String,
}

/// Rejection submission body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionSubmission {
    /// Role acting on the rejection
    pub role_id: String,
    /// Acting verifier's employee id
    pub verifier_id: String,
    /// Trimmed rejection reason (minimum 10 characters)
    pub reason: String,
}
