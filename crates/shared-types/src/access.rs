//! Role-based access decisions shared by the navigation shell, the route
//! guard and privileged actions inside views.

use crate::user::UserRole;

/// Actions gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewDashboard,
    ManageReports,
    ViewHeatmap,
    ViewLeaderboard,
    ManageAdmins,
    EditSettings,
    ModifySystemSettings,
}

/// The single authorization check used throughout the dashboard.
pub fn can(role: UserRole, capability: Capability) -> bool {
    match capability {
        Capability::ManageAdmins | Capability::ModifySystemSettings => {
            role == UserRole::SuperAdmin
        }
        Capability::ViewDashboard
        | Capability::ManageReports
        | Capability::ViewHeatmap
        | Capability::ViewLeaderboard
        | Capability::EditSettings => true,
    }
}

/// A top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Reports,
    HeatMap,
    Leaderboard,
    AdminManagement,
    Settings,
}

/// All destinations in sidebar order.
pub const ALL_DESTINATIONS: &[Destination] = &[
    Destination::Dashboard,
    Destination::Reports,
    Destination::HeatMap,
    Destination::Leaderboard,
    Destination::AdminManagement,
    Destination::Settings,
];

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/dashboard",
            Destination::Reports => "/reports",
            Destination::HeatMap => "/heatmap",
            Destination::Leaderboard => "/leaderboard",
            Destination::AdminManagement => "/admin-management",
            Destination::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Reports => "Reports Management",
            Destination::HeatMap => "Heat Map",
            Destination::Leaderboard => "Leaderboard",
            Destination::AdminManagement => "Admin Management",
            Destination::Settings => "Settings",
        }
    }

    pub fn required_capability(&self) -> Capability {
        match self {
            Destination::Dashboard => Capability::ViewDashboard,
            Destination::Reports => Capability::ManageReports,
            Destination::HeatMap => Capability::ViewHeatmap,
            Destination::Leaderboard => Capability::ViewLeaderboard,
            Destination::AdminManagement => Capability::ManageAdmins,
            Destination::Settings => Capability::EditSettings,
        }
    }

    pub fn allows(&self, role: UserRole) -> bool {
        can(role, self.required_capability())
    }
}

/// Destinations the given role may navigate to, in sidebar order.
pub fn visible_destinations(role: UserRole) -> Vec<Destination> {
    ALL_DESTINATIONS
        .iter()
        .copied()
        .filter(|d| d.allows(role))
        .collect()
}

/// What a guarded route should do for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore still running: show a placeholder.
    Loading,
    /// No user: send to the login screen.
    Redirect,
    Render,
}

pub fn guard_outcome(loading: bool, has_user: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Loading
    } else if !has_user {
        GuardOutcome::Redirect
    } else {
        GuardOutcome::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn super_admin_sees_every_destination() {
        assert_eq!(visible_destinations(UserRole::SuperAdmin), ALL_DESTINATIONS.to_vec());
    }

    #[test]
    fn admin_loses_admin_management_only() {
        let visible = visible_destinations(UserRole::Admin);
        assert_eq!(visible.len(), ALL_DESTINATIONS.len() - 1);
        assert!(!visible.contains(&Destination::AdminManagement));
        assert_eq!(visible.first(), Some(&Destination::Dashboard));
        assert_eq!(visible.last(), Some(&Destination::Settings));
    }

    #[test]
    fn system_settings_restricted() {
        assert!(can(UserRole::SuperAdmin, Capability::ModifySystemSettings));
        assert!(!can(UserRole::Admin, Capability::ModifySystemSettings));
        assert!(can(UserRole::Admin, Capability::EditSettings));
    }

    #[test]
    fn guard_precedence() {
        assert_eq!(guard_outcome(true, false), GuardOutcome::Loading);
        assert_eq!(guard_outcome(true, true), GuardOutcome::Loading);
        assert_eq!(guard_outcome(false, false), GuardOutcome::Redirect);
        assert_eq!(guard_outcome(false, true), GuardOutcome::Render);
    }
}
