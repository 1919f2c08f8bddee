//! Operator session persisted in a key-value store.

use std::collections::HashMap;

use crate::config::DEFAULT_SESSION_KEY;
use crate::error::AppError;
use crate::user::{User, UserDirectory, UserRole};

/// Message returned for every failed login, whatever the cause.
pub const LOGIN_FAILED: &str = "Invalid credentials or account not approved";

/// Minimal string store. Implemented by browser `localStorage` in the app
/// and by [`MemoryStore`] everywhere else.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&mut self, key: &str);
}

/// `HashMap`-backed store used in tests and on non-web targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// Current operator plus the loading flag that gates routing.
///
/// Starts in the loading state; [`SessionStore::initialize`] restores any
/// persisted user and clears the flag.
#[derive(Debug, Clone)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    directory: UserDirectory,
    key: String,
    user: Option<User>,
    loading: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, directory: UserDirectory) -> Self {
        Self {
            store,
            directory,
            key: DEFAULT_SESSION_KEY.to_string(),
            user: None,
            loading: true,
        }
    }

    /// Override the storage key (from `AppConfig::storage`).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore the persisted user, if any.
    ///
    /// A record that fails to parse is dropped and the session starts
    /// logged out.
    pub fn initialize(&mut self) {
        if let Some(raw) = self.store.get_item(&self.key) {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    tracing::info!(username = %user.username, "restored session");
                    self.user = Some(user);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding malformed stored session");
                    self.store.remove_item(&self.key);
                    self.user = None;
                }
            }
        }
        self.loading = false;
    }

    /// Authenticate against the directory and persist the user on success.
    ///
    /// On failure the current session is left untouched.
    pub fn login(&mut self, username: &str, password: &str, role: UserRole) -> Result<User, AppError> {
        self.loading = true;
        let result = self.try_login(username, password, role);
        self.loading = false;
        result
    }

    fn try_login(&mut self, username: &str, password: &str, role: UserRole) -> Result<User, AppError> {
        let Some(user) = self.directory.authenticate(username, password, role).cloned() else {
            tracing::warn!(username, role = role.as_str(), "login rejected");
            return Err(AppError::unauthorized(LOGIN_FAILED));
        };
        let raw = serde_json::to_string(&user)?;
        self.store.set_item(&self.key, &raw)?;
        tracing::info!(username, role = role.as_str(), "login succeeded");
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "signed out");
        }
        self.store.remove_item(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn session() -> SessionStore<MemoryStore> {
        let mut s = SessionStore::new(MemoryStore::new(), UserDirectory::demo());
        s.initialize();
        s
    }

    #[test]
    fn starts_loading_until_initialized() {
        let mut s = SessionStore::new(MemoryStore::new(), UserDirectory::demo());
        assert!(s.is_loading());
        s.initialize();
        assert!(!s.is_loading());
        assert!(!s.is_authenticated());
    }

    #[test]
    fn login_persists_user_record() {
        let mut s = session();
        let user = s.login("superadmin", "admin123", UserRole::SuperAdmin).unwrap();
        assert_eq!(user.username, "superadmin");
        assert!(!s.is_loading());
        let raw = s.store().get_item("civicvoice_user").unwrap();
        let stored: User = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, user);
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let mut s = session();
        s.login("admin1", "admin123", UserRole::Admin).unwrap();
        let err = s.login("admin2", "admin123", UserRole::Admin).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, LOGIN_FAILED);
        assert_eq!(s.user().map(|u| u.username.as_str()), Some("admin1"));
        assert!(!s.is_loading());
    }

    #[test]
    fn logout_clears_user_and_storage() {
        let mut s = session();
        s.login("admin1", "admin123", UserRole::Admin).unwrap();
        s.logout();
        assert!(s.user().is_none());
        assert!(s.store().get_item("civicvoice_user").is_none());
    }

    #[test]
    fn malformed_record_is_discarded() {
        let mut store = MemoryStore::new();
        store.set_item("civicvoice_user", "{not json").unwrap();
        let mut s = SessionStore::new(store, UserDirectory::demo());
        s.initialize();
        assert!(!s.is_authenticated());
        assert!(!s.is_loading());
        assert!(s.store().get_item("civicvoice_user").is_none());
    }

    #[test]
    fn custom_key_is_respected() {
        let mut s = SessionStore::new(MemoryStore::new(), UserDirectory::demo()).with_key("cv");
        s.initialize();
        s.login("admin1", "admin123", UserRole::Admin).unwrap();
        assert!(s.store().get_item("cv").is_some());
        assert!(s.store().get_item("civicvoice_user").is_none());
    }
}
