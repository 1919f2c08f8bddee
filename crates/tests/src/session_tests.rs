use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, KeyValueStore, MemoryStore, UserRole, LOGIN_FAILED};

use crate::common;

#[test]
fn superadmin_login_persists_user_record() {
    let (session, user) = common::signed_in("superadmin", UserRole::SuperAdmin);

    assert_eq!(user.username, "superadmin");
    assert_eq!(session.role(), Some(UserRole::SuperAdmin));
    assert!(!session.is_loading());

    let raw = session.store().get_item(common::SESSION_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["username"], "superadmin");
    assert_eq!(stored["role"], "super_admin");
}

#[test]
fn approved_admin_can_sign_in() {
    let (session, user) = common::signed_in("admin1", UserRole::Admin);
    assert_eq!(user.role, UserRole::Admin);
    assert!(session.is_authenticated());
}

#[test]
fn every_other_combination_fails() {
    let attempts = [
        ("superadmin", "admin123", UserRole::Admin),
        ("admin1", "admin123", UserRole::SuperAdmin),
        ("admin1", "wrong", UserRole::Admin),
        ("admin2", "admin123", UserRole::Admin),
        ("admin2", "admin123", UserRole::SuperAdmin),
        ("nobody", "admin123", UserRole::Admin),
        ("", "", UserRole::Admin),
    ];

    for (username, password, role) in attempts {
        let mut session = common::fresh_session();
        let err = session.login(username, password, role).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized, "{username}/{password} as {role:?}");
        assert_eq!(err.message, LOGIN_FAILED);
        assert!(!session.is_authenticated());
        assert!(session.store().get_item(common::SESSION_KEY).is_none());
    }
}

#[test]
fn failed_login_keeps_existing_session() {
    let (mut session, _) = common::signed_in("admin1", UserRole::Admin);
    assert!(session.login("admin1", "nope", UserRole::Admin).is_err());
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("admin1"));
}

#[test]
fn stored_user_is_restored_exactly() {
    let (session, user) = common::signed_in("admin1", UserRole::Admin);

    let restored = common::session_over(session.store().clone());
    assert_eq!(restored.user(), Some(&user));
    assert!(!restored.is_loading());
}

#[test]
fn hand_written_record_is_restored() {
    let record = serde_json::json!({
        "id": "9",
        "username": "field_officer",
        "name": "Field Officer",
        "role": "admin",
        "status": "approved"
    });
    let mut store = MemoryStore::new();
    store
        .set_item(common::SESSION_KEY, &record.to_string())
        .unwrap();

    let session = common::session_over(store);
    let user = session.user().unwrap();
    assert_eq!(user.username, "field_officer");
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn malformed_record_starts_logged_out() {
    let mut store = MemoryStore::new();
    store.set_item(common::SESSION_KEY, "{\"id\":").unwrap();

    let session = common::session_over(store);
    assert!(!session.is_authenticated());
    assert!(!session.is_loading());
    assert!(session.store().get_item(common::SESSION_KEY).is_none());
}

#[test]
fn logout_clears_user_and_storage() {
    let (mut session, _) = common::signed_in("superadmin", UserRole::SuperAdmin);
    session.logout();
    assert!(session.user().is_none());
    assert!(session.store().get_item(common::SESSION_KEY).is_none());

    let restored = common::session_over(session.store().clone());
    assert!(!restored.is_authenticated());
}
