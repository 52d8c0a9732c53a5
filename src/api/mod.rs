//! REST API client for the workflow backend
//!
//! Every endpoint answers with the envelope `{success, data | message}`. The
//! client normalizes that to `Result<T, ApiError>` so callers never see the
//! wire shape.
//!
//! ## Design
//!
//! - **Blocking calls**: the workflow is single-threaded and event-driven;
//!   there is no cancellation and no retry/backoff.
//! - **Bearer auth**: the token is read from two possible client-side stores
//!   (session file, then `LIMBAH_TOKEN`) and attached to every request except
//!   login and the independent per-verifier authentication call.

mod client;
mod error;
mod token;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use token::SessionStore;
pub use types::{
    ApprovalSubmission, BeritaAcara, Envelope, LoginData, Page, RejectionSubmission,
    VerifierCredentials, WorkflowData,
};
