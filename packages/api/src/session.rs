//! # Edit session and submission
//!
//! An [`EditSession`] lives from the moment the account is loaded until the
//! user navigates away. It owns the record being edited, the two transient
//! password inputs and the `submitting` flag.
//!
//! A submission is split in three steps so that a UI can hold the session in
//! reactive state without keeping it borrowed across the network call:
//!
//! 1. [`EditSession::begin_submit`] raises `submitting`, drains the password
//!    inputs and snapshots everything the attempt needs into a [`SubmitAttempt`].
//! 2. [`submit_attempt`] plans the update, sends it and propagates a rename into
//!    the [`IdentityStore`]. It produces exactly one outcome.
//! 3. [`EditSession::finish_submit`] lowers `submitting` again.
//!
//! [`EditSession::submit`] runs all three for callers that can hold `&mut self`.

use chrono::NaiveDate;

use crate::client::AccountApi;
use crate::error::SubmitError;
use crate::identity::IdentityStore;
use crate::models::{UpdateRequest, UserId, UserRecord};
use crate::planner::plan;

/// In-memory state of one form-editing visit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    user_id: UserId,
    original: UserRecord,
    pub edited: UserRecord,
    pub password: String,
    pub confirm_password: String,
    submitting: bool,
}

/// Everything one submission needs, detached from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAttempt {
    pub user_id: UserId,
    pub original: UserRecord,
    pub edited: UserRecord,
    pub password: String,
    pub confirm_password: String,
}

/// A saved update. The caller navigates away afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitSuccess {
    pub request: UpdateRequest,
    /// New display name, when the update renamed the user.
    pub renamed_to: Option<String>,
}

impl EditSession {
    pub fn new(user_id: UserId, record: UserRecord) -> Self {
        Self {
            user_id,
            original: record.clone(),
            edited: record,
            password: String::new(),
            confirm_password: String::new(),
            submitting: false,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// The record as it was loaded.
    pub fn original(&self) -> &UserRecord {
        &self.original
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start an attempt, or `None` while another one is in flight.
    ///
    /// The password inputs are cleared here, whatever the attempt's outcome.
    pub fn begin_submit(&mut self) -> Option<SubmitAttempt> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(SubmitAttempt {
            user_id: self.user_id.clone(),
            original: self.original.clone(),
            edited: self.edited.clone(),
            password: std::mem::take(&mut self.password),
            confirm_password: std::mem::take(&mut self.confirm_password),
        })
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Run a whole attempt. Returns `None` if one is already in flight.
    pub async fn submit<A, I>(
        &mut self,
        api: &A,
        identity: &mut I,
        auth_token: &str,
        today: NaiveDate,
    ) -> Option<Result<SubmitSuccess, SubmitError>>
    where
        A: AccountApi,
        I: IdentityStore,
    {
        let attempt = self.begin_submit()?;
        let outcome = submit_attempt(api, identity, auth_token, attempt, today).await;
        self.finish_submit();
        Some(outcome)
    }
}

/// Plan and send one attempt.
///
/// Validation failures return before any request is made. On success a
/// `full_name` in the request is pushed into `identity`.
pub async fn submit_attempt<A, I>(
    api: &A,
    identity: &mut I,
    auth_token: &str,
    attempt: SubmitAttempt,
    today: NaiveDate,
) -> Result<SubmitSuccess, SubmitError>
where
    A: AccountApi,
    I: IdentityStore,
{
    let request = plan(
        &attempt.original,
        &attempt.edited,
        &attempt.password,
        &attempt.confirm_password,
        today,
    )
    .inspect_err(|e| tracing::info!(reason = e.reason(), "profile update rejected locally"))?;

    if let Err(e) = api
        .update_account(&attempt.user_id, auth_token, &request)
        .await
    {
        tracing::warn!(user_id = %attempt.user_id, error = %e, "profile update failed");
        return Err(e.into());
    }

    let renamed_to = request.full_name.clone();
    if let Some(name) = &renamed_to {
        identity.set_display_name(name);
    }
    tracing::info!(user_id = %attempt.user_id, fields = ?request.field_names(), "profile updated");

    Ok(SubmitSuccess {
        request,
        renamed_to,
    })
}
