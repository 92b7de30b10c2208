//! Application-wide identity context.

/// The part of the shared application identity the editor may change.
///
/// The UI implements this over its auth context so a rename shows up
/// everywhere as soon as the server accepts it.
pub trait IdentityStore {
    fn set_display_name(&mut self, name: &str);
}

/// Plain in-memory identity, for callers without a UI context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalIdentity {
    pub display_name: Option<String>,
}

impl IdentityStore for LocalIdentity {
    fn set_display_name(&mut self, name: &str) {
        self.display_name = Some(name.to_string());
    }
}
