//! # API crate — account access and profile-update policy
//!
//! Framework-free core of the profile editor. The `ui` crate renders the form;
//! everything that decides *what* gets sent lives here so it can be tested
//! without a renderer.
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`models`] | all | [`UserRecord`] as loaded and edited, [`UpdateRequest`] as sent |
//! | [`planner`] | all | [`plan`]: turns an edited record + password inputs into an update or a [`ValidationError`] |
//! | [`client`] | all | [`AccountApi`] seam and its `reqwest` implementation [`HttpAccountClient`] |
//! | [`loader`] | all | [`ProfileLoader`] and the [`LoadState`] the page renders |
//! | [`session`] | all | [`EditSession`] and the submission flow |
//! | [`identity`] | all | [`IdentityStore`]: where a successful rename is published |
//! | [`error`] | all | [`LoadError`], [`ValidationError`], [`RemoteError`], [`SubmitError`] |
//! | [`settings`] | native | [`ClientSettings`] from `profile.toml` / environment |
//!
//! ## Flow
//!
//! 1. [`ProfileLoader::load`] fetches the account once on page entry.
//! 2. The form mutates [`EditSession::edited`] and the password inputs.
//! 3. On submit, [`plan`] validates and filters; nothing is sent if it fails.
//! 4. The update goes out through [`AccountApi::update_account`]; a rename is
//!    pushed into the [`IdentityStore`] and the caller navigates away.

pub mod client;
pub mod error;
pub mod identity;
pub mod loader;
pub mod models;
pub mod planner;
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod settings;

mod memory;
pub use memory::MemoryAccounts;

pub use client::{AccountApi, HttpAccountClient, AUTH_TOKEN_HEADER};
pub use error::{LoadError, RemoteError, SubmitError, ValidationError};
pub use identity::{IdentityStore, LocalIdentity};
pub use loader::{LoadState, ProfileLoader};
pub use models::{PasswordChange, UpdateRequest, UserId, UserRecord};
pub use planner::plan;
pub use session::{submit_attempt, EditSession, SubmitAttempt, SubmitSuccess};
#[cfg(not(target_arch = "wasm32"))]
pub use settings::ClientSettings;
