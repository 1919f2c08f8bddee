use pretty_assertions::assert_eq;
use shared_types::{
    export_csv, seed, update_status, AppErrorKind, FilterChoice, Priority, ReportFilter,
    ReportStats, ReportStatus,
};

fn ids(reports: &[shared_types::Report]) -> Vec<&str> {
    reports.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn default_filter_keeps_everything() {
    let reports = seed::reports();
    let filter = ReportFilter::default();
    assert!(!filter.is_active());
    assert_eq!(filter.apply(&reports), reports);
}

#[test]
fn whitespace_search_excludes_nothing() {
    let reports = seed::reports();
    let filter = ReportFilter {
        search: "   ".into(),
        ..Default::default()
    };
    assert_eq!(filter.apply(&reports).len(), reports.len());
}

#[test]
fn search_is_case_insensitive_over_location() {
    let reports = seed::reports();
    let filter = ReportFilter {
        search: "CENTRAL".into(),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&reports)), vec!["RPT-002", "RPT-004"]);
}

#[test]
fn status_and_priority_combine() {
    let reports = seed::reports();
    let filter = ReportFilter {
        search: String::new(),
        status: FilterChoice::Only(ReportStatus::Open),
        priority: FilterChoice::Only(Priority::Medium),
    };
    assert_eq!(ids(&filter.apply(&reports)), vec!["RPT-005"]);
}

#[test]
fn status_update_changes_one_report() {
    let mut reports = seed::reports();
    let before = reports.clone();

    update_status(&mut reports, "RPT-001", ReportStatus::InProgress, Some("Crew dispatched")).unwrap();

    assert_eq!(reports[0].status, ReportStatus::InProgress);
    assert_eq!(&reports[1..], &before[1..]);

    let stats = ReportStats::from_reports(&reports);
    assert_eq!(stats.open, 1);
    assert_eq!(stats.in_progress, 2);
}

#[test]
fn unknown_report_is_not_found() {
    let mut reports = seed::reports();
    let err = update_status(&mut reports, "RPT-999", ReportStatus::Resolved, None).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn export_follows_the_filtered_view() {
    let reports = seed::reports();
    let filter = ReportFilter {
        status: FilterChoice::Only(ReportStatus::Open),
        ..Default::default()
    };
    let csv = export_csv(&filter.apply(&reports));
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID,Title,Location"));
    assert!(lines[1].starts_with("RPT-001,\"Broken Street Light on Main Road\""));
    assert!(lines[2].starts_with("RPT-005,"));
}

#[test]
fn dialog_default_always_changes_status() {
    for report in seed::reports() {
        let next = report.status.next_status(None);
        assert_ne!(next, report.status, "{}", report.id);
        assert_eq!(report.status.allowed_transitions()[0], next);
    }
}

#[test]
fn picking_current_status_falls_back_to_a_real_change() {
    let mut reports = seed::reports();
    let in_progress = reports[1].status;
    assert_eq!(in_progress, ReportStatus::InProgress);

    let next = in_progress.next_status(Some(ReportStatus::InProgress));
    update_status(&mut reports, "RPT-002", next, None).unwrap();
    assert_eq!(reports[1].status, ReportStatus::Resolved);
}
