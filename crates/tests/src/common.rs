use chrono::{DateTime, TimeZone, Utc};
use dioxus::prelude::*;
use shared_types::{MemoryStore, SessionStore, User, UserDirectory, UserRole};

pub const SESSION_KEY: &str = "civicvoice_user";

/// Fixed review timestamp so stamped records compare deterministically.
pub fn review_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap()
}

/// A restored (not loading) session over an empty in-memory store.
pub fn fresh_session() -> SessionStore<MemoryStore> {
    session_over(MemoryStore::new())
}

pub fn session_over(store: MemoryStore) -> SessionStore<MemoryStore> {
    let mut session = SessionStore::new(store, UserDirectory::demo());
    session.initialize();
    session
}

/// Sign in with the demo password, panicking on failure.
pub fn signed_in(username: &str, role: UserRole) -> (SessionStore<MemoryStore>, User) {
    let mut session = fresh_session();
    let user = session
        .login(username, "admin123", role)
        .unwrap_or_else(|e| panic!("login as {username} failed: {}", e.message));
    (session, user)
}

/// Render a root component to HTML.
pub fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
