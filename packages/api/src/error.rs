//! Error taxonomy for the profile editor.
//!
//! `Display` output of every variant is the text shown to the user.

use thiserror::Error;

/// Message used when the server rejects an update without saying why.
pub const GENERIC_UPDATE_FAILURE: &str = "Failed to update profile";

/// The account could not be loaded. Fatal for the page view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("account fetch failed: server responded with status {0}")]
    Status(u16),
    #[error("account fetch failed: {0}")]
    Transport(String),
    #[error("account fetch failed: malformed account record: {0}")]
    Decode(String),
}

/// Local rejection of a submission. No request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date of Birth cannot be in the future!")]
    DobInFuture,
    #[error("Date of Birth cannot be set to today!")]
    DobIsToday,
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

impl ValidationError {
    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::DobInFuture => "dob in future",
            ValidationError::DobIsToday => "dob is today",
            ValidationError::PasswordMismatch => "password mismatch",
        }
    }
}

/// The update call failed. The user may correct input and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Non-2xx response; `message` is the server's own text or the generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
}

/// Everything that can end a submission attempt without saving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_rejection_displays_server_message_verbatim() {
        let err = SubmitError::from(RemoteError::Rejected {
            status: 400,
            message: "email taken".to_string(),
        });
        assert_eq!(err.to_string(), "email taken");
    }

    #[test]
    fn test_validation_reasons() {
        assert_eq!(ValidationError::DobInFuture.reason(), "dob in future");
        assert_eq!(ValidationError::PasswordMismatch.reason(), "password mismatch");
        assert_eq!(
            SubmitError::from(ValidationError::PasswordMismatch).to_string(),
            "Passwords do not match!"
        );
    }
}
