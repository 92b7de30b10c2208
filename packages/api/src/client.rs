//! # Account service transport
//!
//! [`AccountApi`] is the seam between the editor and the remote account
//! resource. [`HttpAccountClient`] talks to the real service over HTTP;
//! [`crate::MemoryAccounts`] is an in-process stand-in.
//!
//! | Call | Request | Success |
//! |------|---------|---------|
//! | [`fetch_account`](AccountApi::fetch_account) | `GET /api/account/{id}` | `200` with a JSON [`UserRecord`] |
//! | [`update_account`](AccountApi::update_account) | `PUT /api/account/{id}` with a JSON [`UpdateRequest`] | any `2xx` |
//!
//! Both requests carry the session token in the `Authorization-Token` header.
//! A rejected update is expected to explain itself as `{"message": "..."}`;
//! that text becomes the [`RemoteError`] shown to the user.

use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{LoadError, RemoteError, GENERIC_UPDATE_FAILURE};
use crate::models::{UpdateRequest, UserId, UserRecord};

/// Header carrying the session token on every account call.
pub const AUTH_TOKEN_HEADER: &str = "Authorization-Token";

/// Async access to the remote account resource.
pub trait AccountApi {
    fn fetch_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
    ) -> impl Future<Output = Result<UserRecord, LoadError>>;
    fn update_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
        request: &UpdateRequest,
    ) -> impl Future<Output = Result<(), RemoteError>>;
}

/// Error body returned by the account service on a rejected update.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP implementation of [`AccountApi`].
#[derive(Debug, Clone)]
pub struct HttpAccountClient {
    client: Client,
    base_url: String,
}

impl HttpAccountClient {
    /// Create a client rooted at `base_url` (scheme + host, e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing `reqwest` client, e.g. one with custom TLS or proxy settings.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn account_url(&self, user_id: &UserId) -> String {
        format!("{}/api/account/{}", self.base_url, user_id)
    }
}

impl AccountApi for HttpAccountClient {
    async fn fetch_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
    ) -> Result<UserRecord, LoadError> {
        let response = self
            .client
            .get(self.account_url(user_id))
            .header(AUTH_TOKEN_HEADER, auth_token)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| LoadError::Decode(e.to_string()))
    }

    async fn update_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
        request: &UpdateRequest,
    ) -> Result<(), RemoteError> {
        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .client
            .put(self.account_url(user_id))
            .header(AUTH_TOKEN_HEADER, auth_token)
            .json(request)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_UPDATE_FAILURE.to_string());

        Err(RemoteError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
