//! limbah - A CLI client for the hazardous-waste destruction workflow
//!
//! This library provides the core functionality for the destruction workflow:
//! the field-verification state machine, verifier eligibility resolution,
//! the REST API client, and the container label renderer.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod api;
pub mod config;
pub mod eligibility;
pub mod label;
pub mod models;
pub mod output;
pub mod paths;
pub mod verification;
