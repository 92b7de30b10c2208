//! Native client settings.
//!
//! Sources, later ones winning: built-in defaults, an optional `profile.toml`
//! in the working directory, then `PROFILE__`-prefixed environment variables
//! (`PROFILE__API__BASE_URL`, `PROFILE__SESSION__AUTH_TOKEN`, ...). A `.env`
//! file is loaded into the environment first.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::client::HttpAccountClient;
use crate::models::UserId;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
        }
    }
}

/// Who the client acts as. Normally filled in by the login flow.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SessionSettings {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ClientSettings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub session: SessionSettings,
}

impl ClientSettings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources("profile.toml", "PROFILE")
    }

    fn from_sources(file: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.base_url", ApiSettings::default().base_url)?
            .add_source(File::with_name(file).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn account_client(&self) -> HttpAccountClient {
        HttpAccountClient::new(self.api.base_url.as_str())
    }

    /// The configured user, when both id and token are present.
    pub fn credentials(&self) -> Option<(UserId, String)> {
        let user_id = self.session.user_id.as_deref().filter(|s| !s.is_empty())?;
        let token = self.session.auth_token.as_deref().filter(|s| !s.is_empty())?;
        Some((UserId::new(user_id), token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings_defaults() {
        let settings = ClientSettings::from_sources("does-not-exist.toml", "PROFILE_TEST_EMPTY")
            .unwrap_or_default();
        assert_eq!(settings.api.base_url, "http://localhost:5000");
        assert!(settings.credentials().is_none());
    }

    #[test]
    fn test_settings_from_env() {
        set_var("PROFILE_TEST_ENV__API__BASE_URL", "https://accounts.example.org");
        set_var("PROFILE_TEST_ENV__SESSION__USER_ID", "17");
        set_var("PROFILE_TEST_ENV__SESSION__AUTH_TOKEN", "tok");
        let settings = ClientSettings::from_sources("does-not-exist.toml", "PROFILE_TEST_ENV")
            .unwrap_or_default();
        println!("Settings = {:?}", settings);

        assert_eq!(settings.api.base_url, "https://accounts.example.org");
        assert_eq!(
            settings.credentials(),
            Some((UserId::new("17"), "tok".to_string()))
        );
        assert_eq!(
            settings.account_client().base_url(),
            "https://accounts.example.org"
        );
    }
}
