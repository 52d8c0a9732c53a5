//! Field-verification state machine
//!
//! One [`FieldVerification`] instance drives the whole multi-role flow for a
//! single Berita Acara record. All flow state is owned by the instance:
//! per-role state and record, the currently selected role, the authenticated
//! verifier buffer, and the final outcome. Remote effects go through the
//! [`VerificationApi`] port so the machine itself stays pure and testable.
//!
//! Per-role lifecycle:
//!
//! ```text
//! Unselected -> Selected -> Authenticating -> Authenticated -> Approved
//!                  ^              |                 |
//!                  +--------------+                 +-> Rejected
//!                   (auth/eligibility failure)        (HSE supervisor only)
//! ```
//!
//! The workflow closes `FieldVerified` when all four roles are approved, or
//! `FieldRejected` the moment one role is rejected. Completion is computed
//! exactly once per submission, from the freshly updated record set.

use serde::Serialize;
use thiserror::Error;

use crate::api::{ApiError, ApprovalSubmission, RejectionSubmission, VerifierCredentials};
use crate::models::{ROLES, RecordError, RecordStatus, VerificationRecord, VerificationRole, Verifier};

/// Minimum trimmed length of a rejection reason
pub const MIN_REJECTION_REASON: usize = 10;

/// Errors raised by flow transitions
#[derive(Debug, Error)]
pub enum VerificationError {
    /// No role with this id exists in the matrix
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    /// The operation needs a selected role
    #[error("no role selected")]
    NoRoleSelected,

    /// The operation needs an authenticated verifier
    #[error("role '{0}' has no authenticated verifier")]
    NotAuthenticated(String),

    /// The per-verifier credential check failed
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The verifier's eligible set does not contain the selected role
    #[error("{name} (level {job_level}) is not eligible for role '{role_id}'")]
    Ineligible {
        /// Verifier name
        name: String,
        /// Verifier job level
        job_level: u8,
        /// The role they tried to act under
        role_id: String,
    },

    /// Rejection attempted by a verifier who is not an eligible HSE supervisor
    #[error("only an HSE Supervisor/Officer (level 5-6) may reject")]
    RejectionNotPermitted,

    /// Rejection reason shorter than the minimum
    #[error("rejection reason must be at least {MIN_REJECTION_REASON} characters (got {0})")]
    ReasonTooShort(usize),

    /// The workflow already reached a terminal status
    #[error("workflow is already closed ({0})")]
    WorkflowClosed(String),

    /// Record-level invariant violation
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Remote submission failure
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Port over the remote workflow endpoints.
///
/// The real implementation is `api::ApiClient`; tests provide mocks.
pub trait VerificationApi {
    /// Independent per-verifier credential check (sent without session auth)
    fn authenticate_verifier(
        &self,
        credentials: &VerifierCredentials,
    ) -> Result<Verifier, ApiError>;

    /// Submit an approval for one role
    fn submit_approval(
        &self,
        record_id: &str,
        submission: &ApprovalSubmission,
    ) -> Result<(), ApiError>;

    /// Submit a workflow rejection
    fn submit_rejection(
        &self,
        record_id: &str,
        submission: &RejectionSubmission,
    ) -> Result<(), ApiError>;
}

/// Per-role flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleState {
    /// Not picked
    Unselected,
    /// Picked, awaiting verifier authentication
    Selected,
    /// Credential check in flight
    Authenticating,
    /// Verifier authenticated and eligible; checklist open
    Authenticated,
    /// Signed off (terminal)
    Approved,
    /// Refused (terminal)
    Rejected,
}

impl std::fmt::Display for RoleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unselected => write!(f, "unselected"),
            Self::Selected => write!(f, "selected"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::Authenticated => write!(f, "authenticated"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// Terminal status of the whole workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Every role approved
    FieldVerified,
    /// An HSE supervisor rejected
    FieldRejected,
}

impl WorkflowStatus {
    /// The wire tag for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FieldVerified => "field_verified",
            Self::FieldRejected => "field_rejected",
        }
    }
}

/// Aggregate result carried out of a completed workflow
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutcome {
    /// Terminal status tag
    pub status: WorkflowStatus,
    /// The full record set at completion time
    pub records: Vec<VerificationRecord>,
}

/// State of one role as held by the flow
#[derive(Debug, Clone)]
struct RoleSlot {
    role: &'static VerificationRole,
    state: RoleState,
    record: VerificationRecord,
}

/// The field-verification flow for one Berita Acara record
#[derive(Debug)]
pub struct FieldVerification {
    record_id: String,
    slots: Vec<RoleSlot>,
    selected: Option<usize>,
    verifier: Option<Verifier>,
    auth_error: Option<String>,
    outcome: Option<WorkflowOutcome>,
}

impl FieldVerification {
    /// Start a fresh flow for a record, all roles unselected and pending
    #[must_use]
    pub fn new(record_id: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            slots: ROLES
                .iter()
                .map(|role| RoleSlot {
                    role,
                    state: RoleState::Unselected,
                    record: VerificationRecord::new(role),
                })
                .collect(),
            selected: None,
            verifier: None,
            auth_error: None,
            outcome: None,
        }
    }

    /// Resume a flow from server-side records (already-closed roles stay
    /// closed)
    #[must_use]
    pub fn from_records(record_id: &str, records: &[VerificationRecord]) -> Self {
        let mut flow = Self::new(record_id);
        for slot in &mut flow.slots {
            if let Some(known) = records.iter().find(|r| r.role_id == slot.role.id) {
                slot.record = known.clone();
                slot.state = match known.status {
                    RecordStatus::Pending => RoleState::Unselected,
                    RecordStatus::Approved => RoleState::Approved,
                    RecordStatus::Rejected => RoleState::Rejected,
                };
            }
        }
        flow.refresh_outcome();
        flow
    }

    /// The Berita Acara record this flow belongs to
    #[must_use]
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Terminal outcome, once reached
    #[must_use]
    pub const fn outcome(&self) -> Option<&WorkflowOutcome> {
        self.outcome.as_ref()
    }

    /// Last surfaced authentication error, if any
    #[must_use]
    pub fn auth_error(&self) -> Option<&str> {
        self.auth_error.as_deref()
    }

    /// Current state of a role
    #[must_use]
    pub fn role_state(&self, role_id: &str) -> Option<RoleState> {
        self.slots.iter().find(|slot| slot.role.id == role_id).map(|slot| slot.state)
    }

    /// The record for a role
    #[must_use]
    pub fn record(&self, role_id: &str) -> Option<&VerificationRecord> {
        self.slots.iter().find(|slot| slot.role.id == role_id).map(|slot| &slot.record)
    }

    /// All records, in matrix order
    #[must_use]
    pub fn records(&self) -> Vec<&VerificationRecord> {
        self.slots.iter().map(|slot| &slot.record).collect()
    }

    /// The currently selected role, if any
    #[must_use]
    pub fn selected_role(&self) -> Option<&'static VerificationRole> {
        self.selected.map(|idx| self.slots[idx].role)
    }

    /// The authenticated verifier for the selected role, if any
    #[must_use]
    pub const fn verifier(&self) -> Option<&Verifier> {
        self.verifier.as_ref()
    }

    /// Number of approved roles
    #[must_use]
    pub fn approved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.record.status == RecordStatus::Approved).count()
    }

    fn ensure_open(&self) -> Result<(), VerificationError> {
        self.outcome.as_ref().map_or(Ok(()), |outcome| {
            Err(VerificationError::WorkflowClosed(outcome.status.as_str().to_string()))
        })
    }

    fn selected_slot(&self) -> Result<usize, VerificationError> {
        self.selected.ok_or(VerificationError::NoRoleSelected)
    }

    /// Pick a role to act on.
    ///
    /// Switching away from a non-terminal role resets it to unselected and
    /// drops the verifier buffer.
    pub fn select(&mut self, role_id: &str) -> Result<(), VerificationError> {
        self.ensure_open()?;

        let idx = self
            .slots
            .iter()
            .position(|slot| slot.role.id == role_id)
            .ok_or_else(|| VerificationError::UnknownRole(role_id.to_string()))?;

        if self.slots[idx].record.is_closed() {
            return Err(VerificationError::Record(RecordError::AlreadyClosed {
                role_id: role_id.to_string(),
                status: self.slots[idx].record.status,
            }));
        }

        if let Some(prev) = self.selected.take() {
            if prev != idx && !self.slots[prev].record.is_closed() {
                self.slots[prev].state = RoleState::Unselected;
            }
        }

        self.verifier = None;
        self.auth_error = None;
        self.slots[idx].state = RoleState::Selected;
        self.selected = Some(idx);
        Ok(())
    }

    /// Explicit cancel/back: the selected role returns to unselected.
    ///
    /// No-op if the selected role is already approved, or nothing is
    /// selected.
    pub fn cancel(&mut self) {
        if let Some(idx) = self.selected {
            if self.slots[idx].record.is_closed() {
                return;
            }
            self.slots[idx].state = RoleState::Unselected;
            self.selected = None;
            self.verifier = None;
            self.auth_error = None;
        }
    }

    /// Authenticate a verifier for the selected role.
    ///
    /// On credential failure or an eligibility miss the role falls back to
    /// `Selected` and the error is surfaced via [`Self::auth_error`]; the
    /// flow continues.
    pub fn authenticate(
        &mut self,
        api: &dyn VerificationApi,
        credentials: &VerifierCredentials,
    ) -> Result<&Verifier, VerificationError> {
        self.ensure_open()?;
        let idx = self.selected_slot()?;

        self.slots[idx].state = RoleState::Authenticating;
        self.auth_error = None;

        let verifier = match api.authenticate_verifier(credentials) {
            Ok(verifier) => verifier,
            Err(err) => {
                self.slots[idx].state = RoleState::Selected;
                let message = err.to_string();
                self.auth_error = Some(message.clone());
                return Err(VerificationError::AuthenticationFailed(message));
            },
        };

        let role_id = self.slots[idx].role.id;
        if !verifier.eligible_roles().contains(&role_id) {
            self.slots[idx].state = RoleState::Selected;
            let err = VerificationError::Ineligible {
                name: verifier.name.clone(),
                job_level: verifier.job_level,
                role_id: role_id.to_string(),
            };
            self.auth_error = Some(err.to_string());
            return Err(err);
        }

        self.slots[idx].state = RoleState::Authenticated;
        Ok(&*self.verifier.insert(verifier))
    }

    /// Tick or untick a checklist item on the selected (authenticated) role
    pub fn set_checked(&mut self, item_id: &str, checked: bool) -> Result<(), VerificationError> {
        self.ensure_open()?;
        let idx = self.selected_slot()?;

        if self.slots[idx].state != RoleState::Authenticated {
            return Err(VerificationError::NotAuthenticated(
                self.slots[idx].role.id.to_string(),
            ));
        }

        self.slots[idx].record.set_checked(item_id, checked)?;
        Ok(())
    }

    /// Submit the selected role's approval.
    ///
    /// Requires an authenticated verifier and a fully checked checklist. A
    /// remote failure is reported without rolling back the authenticated
    /// state. Returns the workflow outcome when this approval was the last
    /// one.
    pub fn approve(
        &mut self,
        api: &dyn VerificationApi,
    ) -> Result<Option<WorkflowOutcome>, VerificationError> {
        self.ensure_open()?;
        let idx = self.selected_slot()?;

        if self.slots[idx].state != RoleState::Authenticated {
            return Err(VerificationError::NotAuthenticated(
                self.slots[idx].role.id.to_string(),
            ));
        }
        let verifier = self.verifier.clone().ok_or_else(|| {
            VerificationError::NotAuthenticated(self.slots[idx].role.id.to_string())
        })?;

        if !self.slots[idx].record.all_checked() {
            let record = &self.slots[idx].record;
            return Err(VerificationError::Record(RecordError::ChecklistIncomplete {
                remaining: record.checklist.len() - record.checked_count(),
            }));
        }

        let submission = ApprovalSubmission {
            role_id: self.slots[idx].role.id.to_string(),
            verifier_id: verifier.id.clone(),
            checklist: self.slots[idx].record.checklist.clone(),
            completed_at: chrono::Utc::now().to_rfc3339(),
        };

        // No rollback on failure: the verifier stays authenticated and may
        // retry the submission.
        api.submit_approval(&self.record_id, &submission)?;

        self.slots[idx].record.approve(verifier)?;
        self.slots[idx].state = RoleState::Approved;
        self.selected = None;
        self.verifier = None;

        // Completion is decided here, from the records just merged.
        self.refresh_outcome();
        Ok(self.outcome.clone())
    }

    /// Reject the whole workflow from the selected role.
    ///
    /// Only an eligible HSE supervisor may reject, with a trimmed reason of
    /// at least [`MIN_REJECTION_REASON`] characters.
    pub fn reject(
        &mut self,
        api: &dyn VerificationApi,
        reason: &str,
    ) -> Result<WorkflowOutcome, VerificationError> {
        self.ensure_open()?;
        let idx = self.selected_slot()?;

        if self.slots[idx].state != RoleState::Authenticated {
            return Err(VerificationError::NotAuthenticated(
                self.slots[idx].role.id.to_string(),
            ));
        }
        let verifier = self.verifier.clone().ok_or_else(|| {
            VerificationError::NotAuthenticated(self.slots[idx].role.id.to_string())
        })?;

        if !verifier.can_reject() {
            return Err(VerificationError::RejectionNotPermitted);
        }

        let reason = reason.trim();
        if reason.chars().count() < MIN_REJECTION_REASON {
            return Err(VerificationError::ReasonTooShort(reason.chars().count()));
        }

        let submission = RejectionSubmission {
            role_id: self.slots[idx].role.id.to_string(),
            verifier_id: verifier.id.clone(),
            reason: reason.to_string(),
        };

        api.submit_rejection(&self.record_id, &submission)?;

        self.slots[idx].record.reject(verifier, reason.to_string())?;
        self.slots[idx].state = RoleState::Rejected;
        self.selected = None;
        self.verifier = None;

        let outcome = WorkflowOutcome {
            status: WorkflowStatus::FieldRejected,
            records: self.records().into_iter().cloned().collect(),
        };
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Recompute the terminal outcome from the current record set
    fn refresh_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if self.slots.iter().any(|slot| slot.record.status == RecordStatus::Rejected) {
            self.outcome = Some(WorkflowOutcome {
                status: WorkflowStatus::FieldRejected,
                records: self.records().into_iter().cloned().collect(),
            });
        } else if self.approved_count() == self.slots.len() {
            self.outcome = Some(WorkflowOutcome {
                status: WorkflowStatus::FieldVerified,
                records: self.records().into_iter().cloned().collect(),
            });
        }
    }
}
