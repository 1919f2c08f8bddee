use serde::{Deserialize, Serialize};

/// Dashboard operator role.
///
/// - `SuperAdmin`: full access, including administrator review and system settings.
/// - `Admin`: day-to-day moderation of reports and citizens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    #[default]
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
        }
    }

    /// Compact label used by the sidebar badge.
    pub fn short_label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
        }
    }

    /// Full title shown on the dashboard header.
    pub fn title(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Administrator",
            UserRole::Admin => "Administrator",
        }
    }

    /// Panel name used in the login greeting.
    pub fn panel_name(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
        }
    }
}

/// Verification state of an operator account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Approved => "approved",
            AccountStatus::Rejected => "rejected",
        }
    }
}

/// An authenticated dashboard operator.
///
/// This is the record persisted under the session key, so field names
/// follow the camelCase layout of the stored JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: UserRole,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl User {
    /// Whether the account is allowed to open a session.
    ///
    /// Super administrators bypass the approval workflow.
    pub fn can_sign_in(&self) -> bool {
        self.role == UserRole::SuperAdmin || self.status == AccountStatus::Approved
    }
}

/// The fixed username/password pairs accepted by the mock directory.
const DEMO_CREDENTIALS: &[(&str, &str)] = &[("superadmin", "admin123"), ("admin1", "admin123")];

/// In-memory list of operator accounts backing the login screen.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Directory seeded with the three demo operators.
    pub fn demo() -> Self {
        Self::new(crate::seed::operators())
    }

    /// Resolve a login attempt to a user.
    ///
    /// The account must match both username and role and be allowed to sign
    /// in, and the password must match one of the demo credential pairs.
    pub fn authenticate(&self, username: &str, password: &str, role: UserRole) -> Option<&User> {
        let credentials_ok = DEMO_CREDENTIALS
            .iter()
            .any(|(u, p)| *u == username && *p == password);
        if !credentials_ok {
            return None;
        }
        self.users
            .iter()
            .find(|u| u.username == username && u.role == role && u.can_sign_in())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_string_mapping() {
        assert_eq!(UserRole::SuperAdmin.as_str(), "super_admin");
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn user_serializes_with_camel_case_fields() {
        let user = User {
            id: "2".into(),
            username: "admin1".into(),
            name: "John Smith".into(),
            role: UserRole::Admin,
            status: AccountStatus::Approved,
            aadhaar: None,
            dob: None,
            approved_by: Some("Super Administrator".into()),
            approved_at: Some("2024-01-15".into()),
            rejection_reason: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["status"], "approved");
        assert_eq!(json["approvedBy"], "Super Administrator");
        assert!(json.get("aadhaar").is_none());
    }

    #[test]
    fn authenticate_accepts_demo_pairs() {
        let dir = UserDirectory::demo();
        let su = dir.authenticate("superadmin", "admin123", UserRole::SuperAdmin);
        assert_eq!(su.map(|u| u.name.as_str()), Some("Super Administrator"));
        let admin = dir.authenticate("admin1", "admin123", UserRole::Admin);
        assert_eq!(admin.map(|u| u.id.as_str()), Some("2"));
    }

    #[test]
    fn authenticate_requires_matching_role() {
        let dir = UserDirectory::demo();
        assert!(dir.authenticate("admin1", "admin123", UserRole::SuperAdmin).is_none());
        assert!(dir.authenticate("superadmin", "admin123", UserRole::Admin).is_none());
    }

    #[test]
    fn authenticate_rejects_pending_and_wrong_password() {
        let dir = UserDirectory::demo();
        assert!(dir.authenticate("admin2", "admin123", UserRole::Admin).is_none());
        assert!(dir.authenticate("admin1", "wrong", UserRole::Admin).is_none());
        assert!(dir.authenticate("", "", UserRole::Admin).is_none());
    }
}
