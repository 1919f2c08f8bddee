use dioxus::prelude::*;
use shared_types::{
    can, AppConfig, AppError, Capability, SessionStore, User, UserDirectory, UserRole,
};

use crate::storage::AppStore;

pub type Session = SessionStore<AppStore>;

/// Global authentication state.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new(config: &AppConfig) -> Self {
        let session = SessionStore::new(AppStore::default(), UserDirectory::demo())
            .with_key(config.storage.session_key.clone());
        Self {
            session: Signal::new(session),
        }
    }

    /// Restore any persisted user and clear the loading flag.
    pub fn initialize(&mut self) {
        self.session.write().initialize();
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().role()
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Whether the signed-in user holds `capability`. False when signed out.
    pub fn can(&self, capability: Capability) -> bool {
        self.role().is_some_and(|role| can(role, capability))
    }

    /// Concurrent calls are not serialized; the last one to finish wins.
    pub async fn login(
        &mut self,
        username: String,
        password: String,
        role: UserRole,
    ) -> Result<User, AppError> {
        self.session.write().login(&username, &password, role)
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }
}

#[cfg(test)]
impl AuthState {
    /// Session already signed in with the demo password.
    pub fn signed_in(username: &str, role: UserRole) -> Self {
        let mut session = SessionStore::new(AppStore::default(), UserDirectory::demo());
        session.initialize();
        if let Err(err) = session.login(username, "admin123", role) {
            panic!("demo login for {username} failed: {}", err.message);
        }
        Self {
            session: Signal::new(session),
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Display name of the signed-in user, used to stamp review decisions.
pub fn use_reviewer_name() -> Option<String> {
    let auth = use_auth();
    auth.current_user().map(|u| u.name)
}
