mod account;
pub use account::AccountView;

mod edit_profile;
pub use edit_profile::EditProfileView;
