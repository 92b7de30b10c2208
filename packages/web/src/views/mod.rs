mod account;
pub use account::Account;

mod edit_profile;
pub use edit_profile::EditProfile;
