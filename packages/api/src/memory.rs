use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::client::AccountApi;
use crate::error::{LoadError, RemoteError};
use crate::models::{UpdateRequest, UserId, UserRecord};

#[derive(Debug, Default)]
struct Accounts {
    records: HashMap<UserId, (String, UserRecord)>,
    updates: Vec<(UserId, UpdateRequest)>,
    rejection: Option<String>,
}

/// In-memory AccountApi for testing and offline previews.
///
/// Accounts are keyed by id and guarded by a token; updates are merged the way
/// the real service does (absent fields untouched) and recorded in call order.
#[derive(Clone, Debug, Default)]
pub struct MemoryAccounts {
    inner: Arc<Mutex<Accounts>>,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to seed an account reachable with `auth_token`.
    pub fn with_account(self, user_id: UserId, auth_token: &str, record: UserRecord) -> Self {
        self.lock()
            .records
            .insert(user_id, (auth_token.to_string(), record));
        self
    }

    /// Make every following update fail with `message`, as a 400 would.
    pub fn reject_updates_with(&self, message: &str) {
        self.lock().rejection = Some(message.to_string());
    }

    pub fn account(&self, user_id: &UserId) -> Option<UserRecord> {
        self.lock()
            .records
            .get(user_id)
            .map(|(_, record)| record.clone())
    }

    /// Every update request received, accepted or not.
    pub fn updates(&self) -> Vec<(UserId, UpdateRequest)> {
        self.lock().updates.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Accounts> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AccountApi for MemoryAccounts {
    async fn fetch_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
    ) -> Result<UserRecord, LoadError> {
        match self.lock().records.get(user_id) {
            Some((token, record)) if token == auth_token => Ok(record.clone()),
            Some(_) => Err(LoadError::Status(401)),
            None => Err(LoadError::Status(404)),
        }
    }

    async fn update_account(
        &self,
        user_id: &UserId,
        auth_token: &str,
        request: &UpdateRequest,
    ) -> Result<(), RemoteError> {
        let mut accounts = self.lock();
        accounts.updates.push((user_id.clone(), request.clone()));

        if let Some(message) = accounts.rejection.clone() {
            return Err(RemoteError::Rejected {
                status: 400,
                message,
            });
        }

        let Some((token, record)) = accounts.records.get_mut(user_id) else {
            return Err(RemoteError::Rejected {
                status: 404,
                message: "User not found".to_string(),
            });
        };
        if token != auth_token {
            return Err(RemoteError::Rejected {
                status: 401,
                message: "Unauthorized".to_string(),
            });
        }

        if let Some(email) = &request.email {
            record.email = Some(email.clone());
        }
        if let Some(full_name) = &request.full_name {
            record.full_name = Some(full_name.clone());
        }
        if let Some(qualification) = &request.qualification {
            record.qualification = Some(qualification.clone());
        }
        if request.date_of_birth.is_some() {
            record.date_of_birth = request.date_of_birth;
        }
        Ok(())
    }
}
