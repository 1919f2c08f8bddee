use serde::{Deserialize, Serialize};

use crate::access::{can, Capability};
use crate::error::AppError;
use crate::user::{User, UserRole};

pub const DEFAULT_SESSION_TIMEOUT: u32 = 30;
pub const DEFAULT_MAX_REPORTS_PER_DAY: u32 = 100;

/// Editable profile fields on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub bio: String,
}

impl ProfileSettings {
    /// Seed the form from the signed-in user. The email field starts with
    /// the username since operator accounts carry no address.
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            email: user.map(|u| u.username.clone()).unwrap_or_default(),
            phone: "+1 (555) 123-4567".to_string(),
            department: "Infrastructure Management".to_string(),
            bio: "Experienced administrator focused on improving civic infrastructure and community engagement.".to_string(),
        }
    }
}

/// One notification channel toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Push,
    Sms,
    WeeklyReports,
    UrgentAlerts,
    StatusUpdates,
}

pub const ALL_NOTIFICATION_KINDS: &[NotificationKind] = &[
    NotificationKind::Email,
    NotificationKind::Push,
    NotificationKind::Sms,
    NotificationKind::WeeklyReports,
    NotificationKind::UrgentAlerts,
    NotificationKind::StatusUpdates,
];

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::Sms => "SMS Notifications",
            NotificationKind::WeeklyReports => "Weekly Reports",
            NotificationKind::UrgentAlerts => "Urgent Alerts",
            NotificationKind::StatusUpdates => "Status Updates",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive updates via email",
            NotificationKind::Push => "Browser push notifications",
            NotificationKind::Sms => "Text message alerts",
            NotificationKind::WeeklyReports => "Summary reports every week",
            NotificationKind::UrgentAlerts => "High priority issue notifications",
            NotificationKind::StatusUpdates => "Report status change notifications",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub weekly_reports: bool,
    pub urgent_alerts: bool,
    pub status_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            weekly_reports: true,
            urgent_alerts: true,
            status_updates: true,
        }
    }
}

impl NotificationSettings {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::Sms => self.sms,
            NotificationKind::WeeklyReports => self.weekly_reports,
            NotificationKind::UrgentAlerts => self.urgent_alerts,
            NotificationKind::StatusUpdates => self.status_updates,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let slot = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Push => &mut self.push,
            NotificationKind::Sms => &mut self.sms,
            NotificationKind::WeeklyReports => &mut self.weekly_reports,
            NotificationKind::UrgentAlerts => &mut self.urgent_alerts,
            NotificationKind::StatusUpdates => &mut self.status_updates,
        };
        *slot = enabled;
    }
}

/// Global switches on the system configuration card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemToggle {
    AutoApproveReports,
    RequireManagerApproval,
    MaintenanceMode,
}

pub const ALL_SYSTEM_TOGGLES: &[SystemToggle] = &[
    SystemToggle::AutoApproveReports,
    SystemToggle::RequireManagerApproval,
    SystemToggle::MaintenanceMode,
];

impl SystemToggle {
    pub fn label(&self) -> &'static str {
        match self {
            SystemToggle::AutoApproveReports => "Auto-approve Reports",
            SystemToggle::RequireManagerApproval => "Require Manager Approval",
            SystemToggle::MaintenanceMode => "Maintenance Mode",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SystemToggle::AutoApproveReports => "Automatically approve low-priority reports",
            SystemToggle::RequireManagerApproval => "High-priority reports need manager approval",
            SystemToggle::MaintenanceMode => "Enable system maintenance mode",
        }
    }
}

/// Security and system configuration values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemSettings {
    pub auto_approve_reports: bool,
    pub require_manager_approval: bool,
    pub max_reports_per_day: u32,
    pub session_timeout: u32,
    pub two_factor_auth: bool,
    pub maintenance_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            auto_approve_reports: false,
            require_manager_approval: true,
            max_reports_per_day: DEFAULT_MAX_REPORTS_PER_DAY,
            session_timeout: DEFAULT_SESSION_TIMEOUT,
            two_factor_auth: false,
            maintenance_mode: false,
        }
    }
}

impl SystemSettings {
    pub fn get(&self, toggle: SystemToggle) -> bool {
        match toggle {
            SystemToggle::AutoApproveReports => self.auto_approve_reports,
            SystemToggle::RequireManagerApproval => self.require_manager_approval,
            SystemToggle::MaintenanceMode => self.maintenance_mode,
        }
    }

    pub fn set(&mut self, toggle: SystemToggle, enabled: bool) {
        match toggle {
            SystemToggle::AutoApproveReports => self.auto_approve_reports = enabled,
            SystemToggle::RequireManagerApproval => self.require_manager_approval = enabled,
            SystemToggle::MaintenanceMode => self.maintenance_mode = enabled,
        }
    }
}

/// Parse the leading digits of a numeric input. Empty, zero or
/// non-numeric input yields `fallback`.
pub fn parse_positive_or(raw: &str, fallback: u32) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}

/// Authorize a system-settings save for `role`.
pub fn save_system_settings(role: Option<UserRole>, settings: &SystemSettings) -> Result<(), AppError> {
    let allowed = role.is_some_and(|r| can(r, Capability::ModifySystemSettings));
    if !allowed {
        tracing::warn!(role = role.map(|r| r.as_str()).unwrap_or("none"), "system settings save denied");
        return Err(AppError::forbidden(
            "Only Super Administrators can modify system settings",
        ));
    }
    tracing::info!(
        maintenance = settings.maintenance_mode,
        max_reports = settings.max_reports_per_day,
        "system settings saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn numeric_inputs_fall_back() {
        assert_eq!(parse_positive_or("45", 30), 45);
        assert_eq!(parse_positive_or("12abc", 30), 12);
        assert_eq!(parse_positive_or("", 30), 30);
        assert_eq!(parse_positive_or("0", 100), 100);
        assert_eq!(parse_positive_or("-5", 100), 100);
        assert_eq!(parse_positive_or("abc", 100), 100);
    }

    #[test]
    fn system_save_requires_super_admin() {
        let settings = SystemSettings::default();
        assert!(save_system_settings(Some(UserRole::SuperAdmin), &settings).is_ok());
        let err = save_system_settings(Some(UserRole::Admin), &settings).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert!(save_system_settings(None, &settings).is_err());
    }

    #[test]
    fn notification_toggle_roundtrip() {
        let mut n = NotificationSettings::default();
        assert!(!n.get(NotificationKind::Sms));
        n.set(NotificationKind::Sms, true);
        assert!(n.get(NotificationKind::Sms));
        n.set(NotificationKind::Email, false);
        assert!(!n.email);
    }

    #[test]
    fn profile_defaults_without_user() {
        let p = ProfileSettings::for_user(None);
        assert_eq!(p.name, "");
        assert_eq!(p.department, "Infrastructure Management");
    }
}
