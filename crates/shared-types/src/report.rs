use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filter::{matches_search, FilterChoice};

/// Lifecycle state of a civic report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Open,
    InProgress,
    Resolved,
    Escalated,
}

pub const ALL_REPORT_STATUSES: &[ReportStatus] = &[
    ReportStatus::Open,
    ReportStatus::InProgress,
    ReportStatus::Resolved,
    ReportStatus::Escalated,
];

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Escalated => "escalated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_REPORT_STATUSES.iter().copied().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Open => "Open",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Escalated => "Escalated",
        }
    }

    /// Any status may follow any other; the workflow is not enforced.
    /// Forward moves come first and reopening last.
    pub fn allowed_transitions(&self) -> Vec<ReportStatus> {
        TRANSITION_ORDER
            .iter()
            .copied()
            .filter(|s| s != self)
            .collect()
    }

    /// Status to apply from the update dialog: `picked` when it is a real
    /// change, otherwise the first allowed transition.
    pub fn next_status(&self, picked: Option<ReportStatus>) -> ReportStatus {
        let allowed = self.allowed_transitions();
        picked
            .filter(|p| allowed.contains(p))
            .or_else(|| allowed.first().copied())
            .unwrap_or(*self)
    }

    /// Open or being worked on.
    pub fn is_active(&self) -> bool {
        matches!(self, ReportStatus::Open | ReportStatus::InProgress)
    }
}

const TRANSITION_ORDER: &[ReportStatus] = &[
    ReportStatus::InProgress,
    ReportStatus::Resolved,
    ReportStatus::Escalated,
    ReportStatus::Open,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

pub const ALL_PRIORITIES: &[Priority] = &[Priority::High, Priority::Medium, Priority::Low];

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ALL_PRIORITIES.iter().copied().find(|p| p.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A citizen-submitted issue report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub status: ReportStatus,
    pub priority: Priority,
    pub submitted_by: String,
    pub submitted_at: DateTime<Utc>,
    pub votes: u32,
    pub comments: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// Search and select state of the reports view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    pub search: String,
    pub status: FilterChoice<ReportStatus>,
    pub priority: FilterChoice<Priority>,
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        matches_search(
            &self.search,
            &[&report.title, &report.description, &report.location],
        ) && self.status.accepts(&report.status)
            && self.priority.accepts(&report.priority)
    }

    pub fn apply(&self, reports: &[Report]) -> Vec<Report> {
        reports.iter().filter(|r| self.matches(r)).cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.status.is_all() || !self.priority.is_all()
    }
}

/// Counts shown on the reports stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub escalated: usize,
}

impl ReportStats {
    pub fn from_reports(reports: &[Report]) -> Self {
        let count = |status: ReportStatus| reports.iter().filter(|r| r.status == status).count();
        Self {
            total: reports.len(),
            open: count(ReportStatus::Open),
            in_progress: count(ReportStatus::InProgress),
            resolved: count(ReportStatus::Resolved),
            escalated: count(ReportStatus::Escalated),
        }
    }
}

/// Replace the status of the report with `id`.
///
/// The optional reason is recorded in the log only.
pub fn update_status(
    reports: &mut [Report],
    id: &str,
    status: ReportStatus,
    reason: Option<&str>,
) -> Result<(), AppError> {
    let report = reports
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::not_found(format!("Report {id} not found")))?;
    tracing::info!(
        report = id,
        from = report.status.as_str(),
        to = status.as_str(),
        reason = reason.unwrap_or(""),
        "report status changed"
    );
    report.status = status;
    Ok(())
}

/// Download name for the CSV export.
pub const CSV_FILE_NAME: &str = "civic_reports.csv";

const CSV_HEADER: &[&str] = &[
    "ID",
    "Title",
    "Location",
    "Category",
    "Status",
    "Priority",
    "Submitted By",
    "Date",
    "Votes",
];

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        csv_quoted(value)
    } else {
        value.to_string()
    }
}

fn csv_quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render reports as CSV, one row per report, newline separated.
///
/// Title and location are always quoted; other columns are quoted only
/// when needed.
pub fn export_csv(reports: &[Report]) -> String {
    let mut lines = Vec::with_capacity(reports.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for r in reports {
        let row = [
            csv_field(&r.id),
            csv_quoted(&r.title),
            csv_quoted(&r.location),
            csv_field(&r.category),
            r.status.as_str().to_string(),
            r.priority.as_str().to_string(),
            csv_field(&r.submitted_by),
            r.submitted_at.format("%-m/%-d/%Y").to_string(),
            r.votes.to_string(),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use crate::seed;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_filter_returns_everything() {
        let reports = seed::reports();
        assert_eq!(ReportFilter::default().apply(&reports).len(), reports.len());
        assert!(!ReportFilter::default().is_active());
    }

    #[test]
    fn search_covers_description() {
        let filter = ReportFilter {
            search: "PESTS".into(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&seed::reports()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["RPT-003".to_string()]);
    }

    #[test]
    fn status_and_priority_combine() {
        let filter = ReportFilter {
            search: String::new(),
            status: FilterChoice::Only(ReportStatus::Open),
            priority: FilterChoice::Only(Priority::High),
        };
        let ids: Vec<_> = filter.apply(&seed::reports()).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["RPT-001".to_string()]);
    }

    #[test]
    fn update_status_changes_one_report() {
        let mut reports = seed::reports();
        let before = reports.clone();
        update_status(&mut reports, "RPT-002", ReportStatus::Resolved, Some("fixed")).unwrap();
        assert_eq!(reports[1].status, ReportStatus::Resolved);
        for (i, (a, b)) in reports.iter().zip(before.iter()).enumerate() {
            if i != 1 {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn update_status_unknown_id() {
        let mut reports = seed::reports();
        let err = update_status(&mut reports, "RPT-999", ReportStatus::Open, None).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn transitions_are_unrestricted() {
        let next = ReportStatus::Resolved.allowed_transitions();
        assert_eq!(next.len(), 3);
        assert!(next.contains(&ReportStatus::Open));
        assert!(!next.contains(&ReportStatus::Resolved));
    }

    #[test]
    fn next_status_never_repeats_current() {
        assert_eq!(ReportStatus::Open.next_status(None), ReportStatus::InProgress);
        assert_eq!(ReportStatus::InProgress.next_status(None), ReportStatus::Resolved);
        assert_eq!(
            ReportStatus::InProgress.next_status(Some(ReportStatus::InProgress)),
            ReportStatus::Resolved
        );
        assert_eq!(
            ReportStatus::Escalated.next_status(Some(ReportStatus::Open)),
            ReportStatus::Open
        );
    }

    #[test]
    fn csv_escapes_embedded_quotes_and_commas() {
        let mut report = seed::reports().remove(0);
        report.title = "Lamp \"flickers\", then dies".into();
        report.submitted_by = "Doe, Jane".into();
        let csv = export_csv(&[report]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Title,Location,Category,Status,Priority,Submitted By,Date,Votes"
        );
        assert_eq!(
            lines[1],
            "RPT-001,\"Lamp \"\"flickers\"\", then dies\",\"Main Road & Oak Street, Downtown Zone A\",Infrastructure,open,high,\"Doe, Jane\",1/15/2024,23"
        );
    }

    #[test]
    fn stats_count_by_status() {
        let stats = ReportStats::from_reports(&seed::reports());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.escalated, 1);
    }
}
