//! Blocking HTTP client for the workflow backend

use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::label::LabelData;
use crate::models::Verifier;
use crate::verification::VerificationApi;

use super::error::ApiError;
use super::token;
use super::types::{
    ApprovalSubmission, BeritaAcara, Envelope, LoginData, LoginRequest, Page, RejectionSubmission,
    VerifierCredentials, WorkflowData,
};

/// Client for the workflow REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against a base URL, picking up the stored session
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token::bearer_token(),
        }
    }

    /// Create a client with an explicit bearer token
    #[must_use]
    pub fn with_token(base_url: &str, token: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Some(token.to_string()),
        }
    }

    /// Whether a bearer token is available
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn bearer(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(request.bearer_auth(token))
    }

    fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let response = request.send()?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET with bearer token
    fn get_authed<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {path}");
        let request = self.bearer(self.http.get(self.url(path)).query(query))?;
        Self::send(request)?.into_result()
    }

    /// POST with bearer token
    fn post_authed<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        debug!("POST {path}");
        let request = self.bearer(self.http.post(self.url(path)).json(body))?;
        Self::send(request)
    }

    /// POST without bearer token (login, per-verifier authentication)
    fn post_open<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        debug!("POST {path} (no auth)");
        Self::send(self.http.post(self.url(path)).json(body))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in with account credentials, returning session tokens
    pub fn login(&self, username: &str, password: &str) -> Result<LoginData, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_open("/auth/login", &body)?.into_result()
    }

    /// Invalidate the current session on the server
    pub fn logout(&self) -> Result<(), ApiError> {
        self.post_authed::<_, serde_json::Value>("/auth/logout", &serde_json::json!({}))?
            .into_ack()
    }

    /// Exchange a refresh token for fresh session tokens
    pub fn refresh(&self, refresh_token: &str) -> Result<LoginData, ApiError> {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        self.post_open("/auth/refresh", &body)?.into_result()
    }

    /// Fetch the logged-in user's profile
    pub fn profile(&self) -> Result<Verifier, ApiError> {
        self.get_authed("/auth/profile", &[])
    }

    // =========================================================================
    // Berita Acara
    // =========================================================================

    /// Look up an approval by its permohonan number
    pub fn approval_by_number(&self, approval_number: &str) -> Result<BeritaAcara, ApiError> {
        self.get_authed(&format!("/approvals/{approval_number}"), &[])
    }

    /// List Berita Acara records with pagination and filters
    pub fn berita_acara(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        status: Option<&str>,
    ) -> Result<Page<BeritaAcara>, ApiError> {
        let mut query = vec![("page", page.to_string()), ("perPage", per_page.to_string())];
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_authed("/berita-acara", &query)
    }

    /// Fetch a single Berita Acara record
    pub fn berita_acara_by_id(&self, id: &str) -> Result<BeritaAcara, ApiError> {
        self.get_authed(&format!("/berita-acara/{id}"), &[])
    }

    // =========================================================================
    // Workflow
    // =========================================================================

    /// Fetch the verification workflow for a record
    pub fn workflow(&self, record_id: &str) -> Result<WorkflowData, ApiError> {
        self.get_authed(&format!("/workflows/{record_id}"), &[])
    }

    // =========================================================================
    // Labels
    // =========================================================================

    /// Fetch the label data set for a permohonan number (one per wadah)
    pub fn labels_by_request(&self, approval_number: &str) -> Result<Vec<LabelData>, ApiError> {
        self.get_authed(&format!("/labels/{approval_number}"), &[])
    }
}

impl VerificationApi for ApiClient {
    fn authenticate_verifier(
        &self,
        credentials: &VerifierCredentials,
    ) -> Result<Verifier, ApiError> {
        // Independent credential check: intentionally sent without the
        // session bearer token.
        self.post_open("/auth/verify", credentials)?.into_result()
    }

    fn submit_approval(
        &self,
        record_id: &str,
        submission: &ApprovalSubmission,
    ) -> Result<(), ApiError> {
        self.post_authed::<_, serde_json::Value>(
            &format!("/workflows/{record_id}/approve"),
            submission,
        )?
        .into_ack()
    }

    fn submit_rejection(
        &self,
        record_id: &str,
        submission: &RejectionSubmission,
    ) -> Result<(), ApiError> {
        self.post_authed::<_, serde_json::Value>(
            &format!("/workflows/{record_id}/reject"),
            submission,
        )?
        .into_ack()
    }
}
