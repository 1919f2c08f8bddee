use pretty_assertions::assert_eq;
use shared_types::{
    parse_positive_or, save_system_settings, AppConfig, AppErrorKind, KeyValueStore,
    MemoryStore, NotificationKind, NotificationSettings, ProfileSettings, SessionStore,
    SystemSettings, SystemToggle, UserDirectory, UserRole, ALL_NOTIFICATION_KINDS,
    DEFAULT_MAX_REPORTS_PER_DAY,
};

use crate::common;

#[test]
fn only_super_admin_saves_system_settings() {
    let settings = SystemSettings::default();
    assert!(save_system_settings(Some(UserRole::SuperAdmin), &settings).is_ok());

    let err = save_system_settings(Some(UserRole::Admin), &settings).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.title(), "Access Denied");

    assert!(save_system_settings(None, &settings).is_err());
}

#[test]
fn profile_form_starts_from_session_user() {
    let (_, user) = common::signed_in("admin1", UserRole::Admin);
    let profile = ProfileSettings::for_user(Some(&user));
    assert_eq!(profile.name, user.name);
    assert_eq!(profile.email, "admin1");

    assert_eq!(ProfileSettings::for_user(None).name, "");
}

#[test]
fn notification_toggles_are_independent() {
    let mut prefs = NotificationSettings::default();
    assert!(!prefs.get(NotificationKind::Sms));

    prefs.set(NotificationKind::Sms, true);
    prefs.set(NotificationKind::Email, false);

    let enabled: Vec<NotificationKind> = ALL_NOTIFICATION_KINDS
        .iter()
        .copied()
        .filter(|k| prefs.get(*k))
        .collect();
    assert_eq!(enabled.len(), 5);
    assert!(!enabled.contains(&NotificationKind::Email));
}

#[test]
fn system_toggles_and_numeric_fallback() {
    let mut settings = SystemSettings::default();
    settings.set(SystemToggle::MaintenanceMode, true);
    assert!(settings.get(SystemToggle::MaintenanceMode));

    settings.max_reports_per_day = parse_positive_or("", DEFAULT_MAX_REPORTS_PER_DAY);
    assert_eq!(settings.max_reports_per_day, 100);
    assert_eq!(parse_positive_or("250", DEFAULT_MAX_REPORTS_PER_DAY), 250);
}

#[test]
fn configured_session_key_is_honoured() {
    let config = AppConfig::from_toml_or_default(
        r#"
        [storage]
        session_key = "cv_operator"
        "#,
    );
    assert_eq!(config.storage.session_key, "cv_operator");

    let mut session = SessionStore::new(MemoryStore::new(), UserDirectory::demo())
        .with_key(config.storage.session_key.clone());
    session.initialize();
    session.login("superadmin", "admin123", UserRole::SuperAdmin).unwrap();

    assert!(session.store().get_item("cv_operator").is_some());
    assert!(session.store().get_item(common::SESSION_KEY).is_none());
}
