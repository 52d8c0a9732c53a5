//! Verification role matrix
//!
//! The field verification is signed off by a fixed matrix of four roles:
//! a Pelaksana (executor) and a Supervisor/Officer on each side of the
//! destruction event (the requesting department and HSE). The matrix and the
//! per-role checklists are static configuration, defined at compile time and
//! never created or destroyed at runtime.

use serde::{Deserialize, Serialize};

/// The review side a role belongs to.
///
/// Every department code other than `KL` is treated as the requesting
/// (pemohon) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    /// Requesting department/party
    #[serde(rename = "pemohon")]
    Pemohon,
    /// Health-safety-environment department
    #[serde(rename = "KL")]
    Kl,
}

impl Department {
    /// Map a raw department code from the employee directory onto a side.
    ///
    /// `KL` (any casing) is the HSE side; everything else reviews as pemohon.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("KL") {
            Self::Kl
        } else {
            Self::Pemohon
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pemohon => write!(f, "pemohon"),
            Self::Kl => write!(f, "KL"),
        }
    }
}

/// A role in the verification matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationRole {
    /// Stable role identifier
    pub id: &'static str,
    /// Human-readable title
    pub title: &'static str,
    /// Which side of the review this role sits on
    pub department: Department,
    /// Job levels that may act in this role
    pub job_levels: &'static [u8],
}

/// A checklist item definition attached to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItemDef {
    /// Stable item identifier
    pub id: &'static str,
    /// Item label shown to the verifier
    pub label: &'static str,
}

/// The fixed verification matrix
pub const ROLES: [VerificationRole; 4] = [
    VerificationRole {
        id: "pelaksana-pemohon",
        title: "Pelaksana Pemohon",
        department: Department::Pemohon,
        job_levels: &[7],
    },
    VerificationRole {
        id: "supervisor-pemohon",
        title: "Supervisor/Officer Pemohon",
        department: Department::Pemohon,
        job_levels: &[5, 6],
    },
    VerificationRole {
        id: "pelaksana-hse",
        title: "Pelaksana HSE",
        department: Department::Kl,
        job_levels: &[7],
    },
    VerificationRole {
        id: "supervisor-hse",
        title: "Supervisor/Officer HSE",
        department: Department::Kl,
        job_levels: &[5, 6],
    },
];

const CHECKLIST_PELAKSANA_PEMOHON: [ChecklistItemDef; 2] = [
    ChecklistItemDef {
        id: "jenis-jumlah-limbah",
        label: "Jenis dan jumlah limbah sesuai berita acara",
    },
    ChecklistItemDef {
        id: "kondisi-wadah",
        label: "Kondisi wadah dan label limbah baik",
    },
];

const CHECKLIST_SUPERVISOR_PEMOHON: [ChecklistItemDef; 2] = [
    ChecklistItemDef {
        id: "dokumen-lengkap",
        label: "Dokumen berita acara lengkap dan benar",
    },
    ChecklistItemDef {
        id: "serah-terima",
        label: "Serah terima limbah telah dilakukan",
    },
];

const CHECKLIST_PELAKSANA_HSE: [ChecklistItemDef; 2] = [
    ChecklistItemDef {
        id: "kategori-limbah",
        label: "Kategori limbah B3 sesuai manifest",
    },
    ChecklistItemDef {
        id: "area-pemusnahan",
        label: "Area pemusnahan memenuhi persyaratan K3",
    },
];

const CHECKLIST_SUPERVISOR_HSE: [ChecklistItemDef; 2] = [
    ChecklistItemDef {
        id: "prosedur-pemusnahan",
        label: "Proses pemusnahan sesuai prosedur",
    },
    ChecklistItemDef {
        id: "tidak-ada-insiden",
        label: "Tidak ada insiden selama pemusnahan",
    },
];

impl VerificationRole {
    /// Look up a role by its identifier
    #[must_use]
    pub fn by_id(id: &str) -> Option<&'static Self> {
        ROLES.iter().find(|role| role.id == id)
    }

    /// The checklist items required before this role may approve
    #[must_use]
    pub fn checklist(&self) -> &'static [ChecklistItemDef] {
        match self.id {
            "pelaksana-pemohon" => &CHECKLIST_PELAKSANA_PEMOHON,
            "supervisor-pemohon" => &CHECKLIST_SUPERVISOR_PEMOHON,
            "pelaksana-hse" => &CHECKLIST_PELAKSANA_HSE,
            _ => &CHECKLIST_SUPERVISOR_HSE,
        }
    }

    /// Whether a job level may act in this role
    #[must_use]
    pub fn accepts_level(&self, job_level: u8) -> bool {
        self.job_levels.contains(&job_level)
    }
}
