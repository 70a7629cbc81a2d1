//! Session access: who is signed in, and signing out.
//!
//! The authentication backend is external. On the client the session is a
//! JSON record of the user kept in the preference store under
//! [`USER_KEY`]; [`LocalSession`] reads and writes that record.

use crate::config::USER_KEY;
use crate::error::StoreError;
use crate::storage::{read_or_none, PreferenceStore};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The signed-in user as seen by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Authentication accessor consumed by the header and the auth pages.
pub trait SessionStore {
    /// The signed-in user, if any.
    fn current_user(&self) -> Option<User>;

    /// Records `user` as signed in.
    fn login(&self, user: &User) -> Result<(), StoreError>;

    /// Ends the session. Signing out while signed out is a no-op.
    fn logout(&self);
}

/// Session persisted in a [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct LocalSession<S> {
    store: S,
}

impl<S: PreferenceStore> LocalSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: PreferenceStore> SessionStore for LocalSession<S> {
    fn current_user(&self) -> Option<User> {
        let raw = read_or_none(&self.store, USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring corrupt session record: {}", e);
                None
            }
        }
    }

    fn login(&self, user: &User) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &encoded)?;
        info!(name = %user.name, "Signed in");
        Ok(())
    }

    fn logout(&self) {
        match self.store.remove(USER_KEY) {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!("Failed to clear session: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryPreferenceStore;

    #[test]
    fn test_login_then_logout() {
        let session = LocalSession::new(InMemoryPreferenceStore::new());
        assert_eq!(session.current_user(), None);

        let user = User::new("Asha").with_email("asha@example.com");
        session.login(&user).unwrap();
        assert_eq!(session.current_user(), Some(user));

        session.logout();
        assert_eq!(session.current_user(), None);

        // Second logout is harmless
        session.logout();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_record_without_email_decodes() {
        let store = InMemoryPreferenceStore::with_entries([(USER_KEY, r#"{"name":"Ravi"}"#)]);
        let session = LocalSession::new(store);
        assert_eq!(session.current_user(), Some(User::new("Ravi")));
    }

    #[test]
    fn test_corrupt_record_reads_as_signed_out() {
        let store = InMemoryPreferenceStore::with_entries([(USER_KEY, "not json")]);
        let session = LocalSession::new(store);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_email_omitted_when_absent() {
        let encoded = serde_json::to_string(&User::new("Meera")).unwrap();
        assert_eq!(encoded, r#"{"name":"Meera"}"#);
    }
}
