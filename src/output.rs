//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

/// Logged-in user profile
#[derive(Debug, Serialize)]
pub struct ProfileResult {
    /// Employee id
    pub id: String,
    /// Full name
    pub name: String,
    /// Department code
    pub department: String,
    /// Job level
    pub job_level: u8,
    /// Job title
    pub job_title: String,
}

/// One row of the Berita Acara listing
#[derive(Debug, Serialize)]
pub struct RecordRow {
    /// Record id
    pub id: String,
    /// Permohonan number
    pub approval_number: String,
    /// Requesting department
    pub department: String,
    /// Waste description
    pub waste_description: String,
    /// Workflow status tag
    pub status: String,
    /// Created timestamp
    pub created_at: String,
}

/// A page of Berita Acara records
#[derive(Debug, Serialize)]
pub struct RecordListResult {
    /// Rows on this page
    pub records: Vec<RecordRow>,
    /// 1-based page number
    pub page: u32,
    /// Total pages
    pub page_count: u64,
    /// Total records across all pages
    pub total: u64,
}

/// Detail view of a single Berita Acara record
#[derive(Debug, Serialize)]
pub struct RecordDetailResult {
    /// The record
    pub record: RecordRow,
}

/// Per-role progress line of a verification
#[derive(Debug, Serialize)]
pub struct RoleProgress {
    /// Role id
    pub role_id: String,
    /// Role title
    pub title: String,
    /// Record status (pending/approved/rejected)
    pub status: String,
    /// Checked item count
    pub checked: usize,
    /// Total checklist items
    pub total: usize,
    /// Who closed the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    /// Rejection reason, if rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Verification progress for a record
#[derive(Debug, Serialize)]
pub struct VerifyStatusResult {
    /// Berita Acara record id
    pub record_id: String,
    /// Permohonan number
    pub approval_number: String,
    /// Workflow status tag
    pub status: String,
    /// Per-role progress
    pub roles: Vec<RoleProgress>,
}

/// Result of an approve/reject submission
#[derive(Debug, Serialize)]
pub struct VerifyActionResult {
    /// Berita Acara record id
    pub record_id: String,
    /// Role acted on
    pub role_id: String,
    /// Acting verifier name
    pub verifier: String,
    /// New role status (approved/rejected)
    pub status: String,
    /// Terminal workflow tag, when this action completed the workflow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_status: Option<String>,
}

/// Result of label generation
#[derive(Debug, Serialize)]
pub struct LabelResult {
    /// Written PNG paths
    pub files: Vec<String>,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

fn colorize_status(status: &str) -> String {
    match status {
        "approved" | "field_verified" => status.green().to_string(),
        "rejected" | "field_rejected" => status.red().to_string(),
        "pending" => status.yellow().to_string(),
        other => other.to_string(),
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

impl ProfileResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} ({})", self.name.bold(), self.id);
                println!("  Department: {}", self.department);
                println!("  Job level:  {}", self.job_level);
                println!("  Title:      {}", self.job_title);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl RecordListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.records.is_empty() {
            println!("No records found.");
            return;
        }

        println!(
            "{:<12} {:<16} {:<12} {:<28} {:<16}",
            "ID".bold(),
            "PERMOHONAN".bold(),
            "DEPARTMENT".bold(),
            "LIMBAH".bold(),
            "STATUS".bold()
        );
        for row in &self.records {
            println!(
                "{:<12} {:<16} {:<12} {:<28} {:<16}",
                row.id,
                row.approval_number,
                row.department,
                row.waste_description,
                colorize_status(&row.status)
            );
        }
        println!("\nPage {} of {} ({} total)", self.page, self.page_count, self.total);
    }
}

impl RecordDetailResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let r = &self.record;
                println!("{} ({})", r.approval_number.bold(), r.id);
                println!("  Department: {}", r.department);
                println!("  Limbah:     {}", r.waste_description);
                println!("  Status:     {}", colorize_status(&r.status));
                println!("  Created:    {}", r.created_at);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl VerifyStatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!(
            "Verification for {} ({}): {}",
            self.record_id.bold(),
            self.approval_number,
            colorize_status(&self.status)
        );
        for role in &self.roles {
            println!(
                "  [{}] {:<28} {}/{} checked  {}",
                colorize_status(&role.status),
                role.title,
                role.checked,
                role.total,
                role.completed_by.as_deref().unwrap_or("-")
            );
            if let Some(reason) = &role.rejection_reason {
                println!("      reason: {reason}");
            }
        }
    }
}

impl VerifyActionResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!(
                    "Role '{}' {} by {}",
                    self.role_id,
                    colorize_status(&self.status),
                    self.verifier
                );
                if let Some(tag) = &self.workflow_status {
                    println!("Workflow complete: {}", colorize_status(tag));
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl LabelResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for file in &self.files {
                    println!("Wrote {file} ({}x{})", self.width, self.height);
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}
