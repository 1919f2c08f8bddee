use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filter::{matches_search, FilterChoice};

/// Reviewer recorded when the session has no user name.
pub const DEFAULT_REVIEWER: &str = "Super Administrator";

/// Review state of an administrator application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

pub const ALL_APPLICATION_STATUSES: &[ApplicationStatus] = &[
    ApplicationStatus::Pending,
    ApplicationStatus::Approved,
    ApplicationStatus::Rejected,
];

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_APPLICATION_STATUSES
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A request to become a dashboard administrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub username: String,
    pub aadhaar: String,
    pub dob: NaiveDate,
    pub phone: String,
    pub address: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    pub departments: Vec<String>,
}

impl AdminApplication {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    pub search: String,
    pub status: FilterChoice<ApplicationStatus>,
}

impl ApplicationFilter {
    pub fn matches(&self, app: &AdminApplication) -> bool {
        matches_search(&self.search, &[&app.name, &app.email, &app.username])
            && self.status.accepts(&app.status)
    }

    pub fn apply(&self, apps: &[AdminApplication]) -> Vec<AdminApplication> {
        apps.iter().filter(|a| self.matches(a)).cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.status.is_all()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ApplicationStats {
    pub fn from_applications(apps: &[AdminApplication]) -> Self {
        let count = |status| apps.iter().filter(|a| a.status == status).count();
        Self {
            total: apps.len(),
            pending: count(ApplicationStatus::Pending),
            approved: count(ApplicationStatus::Approved),
            rejected: count(ApplicationStatus::Rejected),
        }
    }
}

fn find_mut<'a>(
    apps: &'a mut [AdminApplication],
    id: &str,
) -> Result<&'a mut AdminApplication, AppError> {
    apps.iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| AppError::not_found(format!("Application {id} not found")))
}

fn reviewer_name(reviewer: Option<&str>) -> String {
    reviewer
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(DEFAULT_REVIEWER)
        .to_string()
}

/// Approve an application, stamping the reviewer and time.
pub fn approve(
    apps: &mut [AdminApplication],
    id: &str,
    reviewer: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let app = find_mut(apps, id)?;
    app.status = ApplicationStatus::Approved;
    app.reviewed_at = Some(now);
    app.reviewed_by = Some(reviewer_name(reviewer));
    tracing::info!(application = id, "admin application approved");
    Ok(())
}

/// Reject an application. A blank reason is refused and nothing changes.
pub fn reject(
    apps: &mut [AdminApplication],
    id: &str,
    reviewer: Option<&str>,
    reason: &str,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if reason.trim().is_empty() {
        return Err(AppError::field(
            "reason",
            "Please provide a reason for rejection",
        ));
    }
    let app = find_mut(apps, id)?;
    app.status = ApplicationStatus::Rejected;
    app.reviewed_at = Some(now);
    app.reviewed_by = Some(reviewer_name(reviewer));
    app.rejection_reason = Some(reason.to_string());
    tracing::info!(application = id, "admin application rejected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use crate::seed;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn blank_reason_is_rejected_without_mutation() {
        let mut apps = seed::admin_applications();
        let before = apps.clone();
        for reason in ["", "   ", "\n\t"] {
            let err = reject(&mut apps, "3", Some("Root"), reason, now()).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::ValidationError);
            assert!(err.field_error("reason").is_some());
        }
        assert_eq!(apps, before);
    }

    #[test]
    fn reject_records_reason_and_reviewer() {
        let mut apps = seed::admin_applications();
        reject(&mut apps, "3", Some("Root"), "Duplicate application", now()).unwrap();
        let app = &apps[2];
        assert_eq!(app.status, ApplicationStatus::Rejected);
        assert_eq!(app.rejection_reason.as_deref(), Some("Duplicate application"));
        assert_eq!(app.reviewed_by.as_deref(), Some("Root"));
        assert_eq!(app.reviewed_at, Some(now()));
    }

    #[test]
    fn approve_defaults_reviewer_name() {
        let mut apps = seed::admin_applications();
        approve(&mut apps, "5", None, now()).unwrap();
        assert_eq!(apps[4].reviewed_by.as_deref(), Some(DEFAULT_REVIEWER));
    }

    #[test]
    fn approve_unknown_id_is_not_found() {
        let mut apps = seed::admin_applications();
        let err = approve(&mut apps, "42", None, now()).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn filter_by_username_and_status() {
        let apps = seed::admin_applications();
        let filter = ApplicationFilter {
            search: "ADMIN3".into(),
            status: FilterChoice::All,
        };
        assert_eq!(filter.apply(&apps).len(), 1);

        let pending = ApplicationFilter {
            search: String::new(),
            status: FilterChoice::Only(ApplicationStatus::Pending),
        };
        assert_eq!(pending.apply(&apps).len(), 3);
    }

    #[test]
    fn stats_from_seed() {
        let stats = ApplicationStats::from_applications(&seed::admin_applications());
        assert_eq!(
            stats,
            ApplicationStats {
                total: 5,
                pending: 3,
                approved: 1,
                rejected: 1
            }
        );
    }
}
