//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{account_client, notify, use_auth, AuthIdentity, AuthProvider, AuthState};

pub mod views;
