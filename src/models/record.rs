//! Verification record model
//!
//! One record exists per role in the matrix. A record starts `Pending` with
//! every checklist item unchecked, and closes as `Approved` (all items
//! checked, eligible verifier) or `Rejected` (HSE supervisor with a reason).
//! Closed records are immutable; there is no un-approve operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::role::VerificationRole;
use crate::models::verifier::Verifier;

/// Errors raised by record mutations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The record already closed and cannot change
    #[error("record for role '{role_id}' is already {status}")]
    AlreadyClosed {
        /// The role the record belongs to
        role_id: String,
        /// The terminal status it holds
        status: RecordStatus,
    },

    /// The checklist has no item with this id
    #[error("unknown checklist item '{item_id}'")]
    UnknownItem {
        /// The offending item id
        item_id: String,
    },

    /// Approval attempted before every item was checked
    #[error("checklist incomplete: {remaining} item(s) unchecked")]
    ChecklistIncomplete {
        /// Number of items still unchecked
        remaining: usize,
    },
}

/// Status of a per-role record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Awaiting verification
    Pending,
    /// Verified and signed off (terminal)
    Approved,
    /// Refused by an HSE supervisor (terminal)
    Rejected,
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single checklist entry on a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Item id from the role's static checklist
    pub item_id: String,
    /// Whether the verifier ticked this item
    pub checked: bool,
}

/// The verification record for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    /// Role this record belongs to
    pub role_id: String,

    /// Current status
    pub status: RecordStatus,

    /// Who closed the record
    pub completed_by: Option<Verifier>,

    /// When the record closed (RFC3339)
    pub completed_at: Option<String>,

    /// Ordered checklist state
    pub checklist: Vec<ChecklistItem>,

    /// Rejection reason, present only on `Rejected`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl VerificationRecord {
    /// Create a pending record for a role with its static checklist
    #[must_use]
    pub fn new(role: &VerificationRole) -> Self {
        Self {
            role_id: role.id.to_string(),
            status: RecordStatus::Pending,
            completed_by: None,
            completed_at: None,
            checklist: role
                .checklist()
                .iter()
                .map(|item| ChecklistItem {
                    item_id: item.id.to_string(),
                    checked: false,
                })
                .collect(),
            rejection_reason: None,
        }
    }

    /// Whether the record reached a terminal status
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status != RecordStatus::Pending
    }

    /// Whether every checklist item is checked
    #[must_use]
    pub fn all_checked(&self) -> bool {
        self.checklist.iter().all(|item| item.checked)
    }

    /// Number of checked items
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checklist.iter().filter(|item| item.checked).count()
    }

    /// Set the checked state of one item
    pub fn set_checked(&mut self, item_id: &str, checked: bool) -> Result<(), RecordError> {
        if self.is_closed() {
            return Err(RecordError::AlreadyClosed {
                role_id: self.role_id.clone(),
                status: self.status,
            });
        }

        let item = self
            .checklist
            .iter_mut()
            .find(|item| item.item_id == item_id)
            .ok_or_else(|| RecordError::UnknownItem {
                item_id: item_id.to_string(),
            })?;

        item.checked = checked;
        Ok(())
    }

    /// Close the record as approved.
    ///
    /// Requires every checklist item to be checked at submission time.
    pub fn approve(&mut self, verifier: Verifier) -> Result<(), RecordError> {
        if self.is_closed() {
            return Err(RecordError::AlreadyClosed {
                role_id: self.role_id.clone(),
                status: self.status,
            });
        }

        if !self.all_checked() {
            let remaining = self.checklist.len() - self.checked_count();
            return Err(RecordError::ChecklistIncomplete { remaining });
        }

        self.status = RecordStatus::Approved;
        self.completed_by = Some(verifier);
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(())
    }

    /// Close the record as rejected with an already-validated reason
    pub fn reject(&mut self, verifier: Verifier, reason: String) -> Result<(), RecordError> {
        if self.is_closed() {
            return Err(RecordError::AlreadyClosed {
                role_id: self.role_id.clone(),
                status: self.status,
            });
        }

        self.status = RecordStatus::Rejected;
        self.completed_by = Some(verifier);
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        self.rejection_reason = Some(reason);
        Ok(())
    }
}
