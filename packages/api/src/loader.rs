//! One-shot account load for the edit page.

use crate::client::AccountApi;
use crate::error::LoadError;
use crate::models::{UserId, UserRecord};

/// What the edit page shows while and after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(UserRecord),
    Failed(LoadError),
}

impl From<Result<UserRecord, LoadError>> for LoadState {
    fn from(result: Result<UserRecord, LoadError>) -> Self {
        match result {
            Ok(record) => LoadState::Ready(record),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Fetches the account once per page visit. No retries, no caching.
#[derive(Debug, Clone)]
pub struct ProfileLoader<A> {
    api: A,
}

impl<A: AccountApi> ProfileLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self, user_id: &UserId, auth_token: &str) -> Result<UserRecord, LoadError> {
        match self.api.fetch_account(user_id, auth_token).await {
            Ok(record) => {
                tracing::info!(%user_id, "loaded account");
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "failed to load account");
                Err(e)
            }
        }
    }
}
