//! Eligibility resolver
//!
//! Maps a verifier's department and job level onto the subset of verification
//! roles they may act under. This is pure business logic with no I/O; the
//! state machine calls it after every successful credential check so that an
//! ineligible verifier is refused here, not merely hidden in the UI.
//!
//! Rule: job level 7 maps to the Pelaksana role of the verifier's side,
//! levels 5 and 6 map to the Supervisor/Officer role of that side, and any
//! other level resolves to the empty set.

use crate::models::role::{Department, ROLES};

/// Resolve the role ids a verifier may act under.
///
/// Any department code other than `KL` resolves on the pemohon side.
#[must_use]
pub fn eligible_roles(department: &str, job_level: u8) -> Vec<&'static str> {
    let side = Department::from_code(department);

    ROLES
        .iter()
        .filter(|role| role.department == side && role.accepts_level(job_level))
        .map(|role| role.id)
        .collect()
}

/// Whether a verifier may reject the workflow.
///
/// Rejection is reserved for eligible HSE supervisors: department `KL` with
/// job level 5 or 6.
#[must_use]
pub fn can_reject(department: &str, job_level: u8) -> bool {
    Department::from_code(department) == Department::Kl && matches!(job_level, 5 | 6)
}
