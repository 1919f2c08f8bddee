use pretty_assertions::assert_eq;
use shared_types::{
    can, guard_outcome, visible_destinations, Capability, Destination, GuardOutcome, UserRole,
    ALL_DESTINATIONS,
};

use crate::common;

#[test]
fn admin_cannot_manage_admins() {
    assert!(!can(UserRole::Admin, Capability::ManageAdmins));
    assert!(!can(UserRole::Admin, Capability::ModifySystemSettings));
    assert!(!Destination::AdminManagement.allows(UserRole::Admin));
    assert!(!visible_destinations(UserRole::Admin).contains(&Destination::AdminManagement));
}

#[test]
fn admin_sees_everything_else_in_order() {
    assert_eq!(
        visible_destinations(UserRole::Admin),
        vec![
            Destination::Dashboard,
            Destination::Reports,
            Destination::HeatMap,
            Destination::Leaderboard,
            Destination::Settings,
        ]
    );
}

#[test]
fn super_admin_sees_all_destinations() {
    assert_eq!(visible_destinations(UserRole::SuperAdmin), ALL_DESTINATIONS.to_vec());
    assert!(can(UserRole::SuperAdmin, Capability::ManageAdmins));
}

#[test]
fn guard_follows_session_state() {
    let mut session = shared_types::SessionStore::new(
        shared_types::MemoryStore::new(),
        shared_types::UserDirectory::demo(),
    );
    assert_eq!(
        guard_outcome(session.is_loading(), session.is_authenticated()),
        GuardOutcome::Loading
    );

    session.initialize();
    assert_eq!(
        guard_outcome(session.is_loading(), session.is_authenticated()),
        GuardOutcome::Redirect
    );

    let (signed_in, _) = common::signed_in("admin1", UserRole::Admin);
    assert_eq!(
        guard_outcome(signed_in.is_loading(), signed_in.is_authenticated()),
        GuardOutcome::Render
    );
}
