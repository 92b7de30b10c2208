//! Identity context and hooks for the UI.

use api::{HttpAccountClient, IdentityStore, UserId};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const STORAGE_USER_ID: &str = "user_id";
#[cfg(target_arch = "wasm32")]
const STORAGE_AUTH_TOKEN: &str = "auth_token";
#[cfg(target_arch = "wasm32")]
const STORAGE_FULL_NAME: &str = "full_name";

/// Who the application is acting as.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user_id: Option<UserId>,
    pub auth_token: Option<String>,
    /// Name shown in page chrome; kept in step with profile renames.
    pub display_name: Option<String>,
}

impl AuthState {
    /// Read the session left behind by the login flow.
    ///
    /// On the web this is `localStorage`; natively it comes from
    /// [`api::ClientSettings`].
    pub fn from_environment() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let item = |key: &str| {
                web_sys::window()
                    .and_then(|w| w.local_storage().ok().flatten())
                    .and_then(|s| s.get_item(key).ok().flatten())
                    .filter(|v| !v.is_empty())
            };
            Self {
                user_id: item(STORAGE_USER_ID).map(UserId::new),
                auth_token: item(STORAGE_AUTH_TOKEN),
                display_name: item(STORAGE_FULL_NAME),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            match api::ClientSettings::new() {
                Ok(settings) => Self {
                    user_id: settings.session.user_id.map(UserId::new),
                    auth_token: settings.session.auth_token,
                    display_name: settings.session.full_name,
                },
                Err(e) => {
                    tracing::error!("Failed to read client settings: {}", e);
                    Self::default()
                }
            }
        }
    }

    pub fn credentials(&self) -> Option<(UserId, String)> {
        Some((self.user_id.clone()?, self.auth_token.clone()?))
    }
}

/// Get the current identity.
/// Returns a signal that updates when the display name changes.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages the identity context.
/// Wrap your app with this component.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::from_environment);

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// [`IdentityStore`] over the UI's identity signal.
#[derive(Clone, Copy)]
pub struct AuthIdentity(Signal<AuthState>);

impl AuthIdentity {
    pub fn new(auth: Signal<AuthState>) -> Self {
        Self(auth)
    }
}

impl IdentityStore for AuthIdentity {
    fn set_display_name(&mut self, name: &str) {
        self.0.write().display_name = Some(name.to_string());

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_FULL_NAME, name);
            }
        }
    }
}

/// Client for the account service this page was served alongside.
pub fn account_client() -> HttpAccountClient {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        HttpAccountClient::new(origin)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        api::ClientSettings::new()
            .map(|settings| settings.account_client())
            .unwrap_or_else(|e| {
                tracing::error!("Failed to read client settings: {}", e);
                HttpAccountClient::new(api::settings::ApiSettings::default().base_url)
            })
    }
}

/// Show a message the user has to acknowledge.
pub fn notify(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_need_id_and_token() {
        let mut state = AuthState {
            user_id: Some(UserId::new("3")),
            ..Default::default()
        };
        assert!(state.credentials().is_none());

        state.auth_token = Some("tok".to_string());
        assert_eq!(
            state.credentials(),
            Some((UserId::new("3"), "tok".to_string()))
        );
    }
}
