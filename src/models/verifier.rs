//! Verifier model
//!
//! A verifier is an identity from the remote employee directory. It is not
//! owned by this system: it is fetched per session during the independent
//! per-verifier authentication step and discarded afterwards.

use serde::{Deserialize, Serialize};

use crate::eligibility;
use crate::models::role::Department;

/// An employee acting as a verifier in the field verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verifier {
    /// Employee identifier
    pub id: String,

    /// Full name
    pub name: String,

    /// Raw department code (e.g. "KL", "Produksi")
    pub department: String,

    /// Job level from the directory (5-7 are meaningful here)
    pub job_level: u8,

    /// Job title as printed on the record
    pub job_title: String,
}

impl Verifier {
    /// The review side this verifier belongs to
    #[must_use]
    pub fn side(&self) -> Department {
        Department::from_code(&self.department)
    }

    /// Role ids this verifier may act under
    #[must_use]
    pub fn eligible_roles(&self) -> Vec<&'static str> {
        eligibility::eligible_roles(&self.department, self.job_level)
    }

    /// Whether this verifier may reject the workflow
    #[must_use]
    pub fn can_reject(&self) -> bool {
        eligibility::can_reject(&self.department, self.job_level)
    }
}
