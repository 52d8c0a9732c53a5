//! Data models for limbah
//!
//! Core abstractions:
//! - `VerificationRole`: the fixed review matrix (pemohon side and HSE side)
//! - `Verifier`: an identity from the remote employee directory
//! - `VerificationRecord`: per-role checklist + approval state

pub mod record;
pub mod role;
mod verifier;

pub use record::{ChecklistItem, RecordError, RecordStatus, VerificationRecord};
pub use role::{ChecklistItemDef, Department, ROLES, VerificationRole};
pub use verifier::Verifier;
