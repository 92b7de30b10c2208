//! Data models exchanged with the account service.

mod update;
mod user;

pub use update::{PasswordChange, UpdateRequest};
pub use user::{parse_date, UserId, UserRecord};
