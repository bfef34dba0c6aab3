//! Mock Authentication
//!
//! A single demo account, signup that logs straight in, and the session
//! user persisted as one JSON record.

use log::{error, info, warn};
use thiserror::Error;

use super::store::KeyValueStore;
use crate::config::SESSION_USER_KEY;
use crate::domain::{User, UserPatch};

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Try user@example.com and password.")]
    InvalidCredentials,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Username is required.")]
    MissingUsername,
    #[error("Not logged in.")]
    NotLoggedIn,
}

/// Check the demo credentials and describe the user to log in
pub fn authenticate(email: &str, password: &str) -> Result<UserPatch, AuthError> {
    if email.trim() == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(UserPatch {
            email: Some(DEMO_EMAIL.to_string()),
            username: Some("exampleUser".to_string()),
            display_name: Some("Example User".to_string()),
            ..Default::default()
        })
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Validate a signup form and describe the user to log in
pub fn signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<UserPatch, AuthError> {
    if password != confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    let username = username.trim();
    if username.is_empty() {
        return Err(AuthError::MissingUsername);
    }
    Ok(UserPatch {
        email: Some(email.trim().to_string()),
        username: Some(username.to_string()),
        display_name: Some(username.to_string()),
        ..Default::default()
    })
}

/// Current session, mirrored into the key-value store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    user: Option<User>,
}

impl AuthSession {
    /// Read the stored session user. A malformed record is removed.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(SESSION_USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                error!("failed to load session user: {}", err);
                return Self::default();
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Self { user: Some(user) },
            Err(err) => {
                warn!("discarding malformed session user: {}", err);
                if let Err(err) = store.remove(SESSION_USER_KEY) {
                    error!("failed to remove session user: {}", err);
                }
                Self::default()
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, patch: UserPatch, store: &dyn KeyValueStore) -> &User {
        let user = User::from_patch(patch);
        info!("logged in as {}", user.username);
        persist(&user, store);
        self.user.insert(user)
    }

    pub fn logout(&mut self, store: &dyn KeyValueStore) {
        self.user = None;
        if let Err(err) = store.remove(SESSION_USER_KEY) {
            error!("failed to remove session user: {}", err);
        }
    }

    /// Merge `patch` into the logged-in user and persist it
    pub fn update_user(
        &mut self,
        patch: UserPatch,
        store: &dyn KeyValueStore,
    ) -> Result<&User, AuthError> {
        let user = self.user.as_mut().ok_or(AuthError::NotLoggedIn)?;
        user.apply(patch);
        persist(user, store);
        Ok(&*user)
    }
}

fn persist(user: &User, store: &dyn KeyValueStore) {
    let result = serde_json::to_string(user)
        .map_err(|e| e.to_string())
        .and_then(|json| store.set(SESSION_USER_KEY, &json).map_err(|e| e.to_string()));
    if let Err(err) = result {
        error!("failed to save session user: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_demo_credentials() {
        assert!(authenticate(DEMO_EMAIL, DEMO_PASSWORD).is_ok());
        assert_eq!(authenticate(DEMO_EMAIL, "nope"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_signup_validation() {
        assert_eq!(signup("bee", "b@x.io", "a", "b"), Err(AuthError::PasswordMismatch));
        assert_eq!(signup("  ", "b@x.io", "a", "a"), Err(AuthError::MissingUsername));
        let patch = signup("bee", "b@x.io", "a", "a").unwrap();
        assert_eq!(patch.display_name.as_deref(), Some("bee"));
    }

    #[test]
    fn test_login_persists_and_restores() {
        let store = MemoryStore::new();
        let mut session = AuthSession::restore(&store);
        assert!(!session.is_authenticated());

        let patch = authenticate(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        let id = session.login(patch, &store).id.clone();

        let restored = AuthSession::restore(&store);
        assert_eq!(restored.user().map(|u| u.id.clone()), Some(id));
        assert_eq!(restored.user().map(|u| u.username.as_str()), Some("exampleUser"));
    }

    #[test]
    fn test_logout_clears_record() {
        let store = MemoryStore::new();
        let mut session = AuthSession::default();
        session.login(UserPatch::default(), &store);
        session.logout(&store);
        assert!(!session.is_authenticated());
        assert!(!AuthSession::restore(&store).is_authenticated());
    }

    #[test]
    fn test_update_user_merges_and_persists() {
        let store = MemoryStore::new();
        let mut session = AuthSession::default();
        assert_eq!(
            session.update_user(UserPatch::default(), &store).err(),
            Some(AuthError::NotLoggedIn)
        );

        session.login(UserPatch::default(), &store);
        session
            .update_user(UserPatch { bio: Some("Hi".to_string()), ..Default::default() }, &store)
            .unwrap();

        let restored = AuthSession::restore(&store);
        assert_eq!(restored.user().and_then(|u| u.bio.as_deref()), Some("Hi"));
    }

    #[test]
    fn test_malformed_record_is_removed() {
        let store = MemoryStore::new();
        store.set(SESSION_USER_KEY, "not json").unwrap();
        assert!(!AuthSession::restore(&store).is_authenticated());
        assert_eq!(store.get(SESSION_USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_broken_store_keeps_in_memory_session() {
        let store = MemoryStore::broken();
        let mut session = AuthSession::restore(&store);
        session.login(UserPatch::default(), &store);
        assert!(session.is_authenticated());
    }
}
