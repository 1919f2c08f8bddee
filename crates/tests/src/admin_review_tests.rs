use pretty_assertions::assert_eq;
use shared_types::{
    approve, reject, seed, AppErrorKind, ApplicationFilter, ApplicationStats, ApplicationStatus,
    FilterChoice, DEFAULT_REVIEWER,
};

use crate::common;

#[test]
fn approving_touches_only_the_target() {
    let mut apps = seed::admin_applications();
    let before = apps.clone();

    approve(&mut apps, "2", None, common::review_time()).unwrap();

    let target = apps.iter().find(|a| a.id == "2").unwrap();
    assert_eq!(target.status, ApplicationStatus::Approved);
    assert_eq!(target.reviewed_at, Some(common::review_time()));
    assert_eq!(target.reviewed_by.as_deref(), Some(DEFAULT_REVIEWER));

    for (after, original) in apps.iter().zip(before.iter()).filter(|(a, _)| a.id != "2") {
        assert_eq!(after, original);
    }
}

#[test]
fn blank_rejection_reason_leaves_record_unchanged() {
    let mut apps = seed::admin_applications();
    let before = apps.clone();

    for reason in ["", " ", "\t \n"] {
        let err = reject(&mut apps, "5", Some("superadmin"), reason, common::review_time())
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.title(), "Missing Information");
        assert_eq!(
            err.field_error("reason"),
            Some("Please provide a reason for rejection")
        );
    }
    assert_eq!(apps, before);
}

#[test]
fn rejection_records_reason() {
    let mut apps = seed::admin_applications();
    reject(&mut apps, "3", Some("superadmin"), "Could not verify identity", common::review_time())
        .unwrap();

    let app = apps.iter().find(|a| a.id == "3").unwrap();
    assert_eq!(app.status, ApplicationStatus::Rejected);
    assert_eq!(app.reviewed_by.as_deref(), Some("superadmin"));
    assert_eq!(app.rejection_reason.as_deref(), Some("Could not verify identity"));
}

#[test]
fn unknown_application_is_not_found() {
    let mut apps = seed::admin_applications();
    let err = approve(&mut apps, "42", None, common::review_time()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn stats_track_decisions() {
    let mut apps = seed::admin_applications();
    assert_eq!(
        ApplicationStats::from_applications(&apps),
        ApplicationStats { total: 5, pending: 3, approved: 1, rejected: 1 }
    );

    approve(&mut apps, "2", None, common::review_time()).unwrap();
    reject(&mut apps, "3", None, "Duplicate", common::review_time()).unwrap();
    assert_eq!(
        ApplicationStats::from_applications(&apps),
        ApplicationStats { total: 5, pending: 1, approved: 2, rejected: 2 }
    );
}

#[test]
fn filter_by_status_and_search() {
    let apps = seed::admin_applications();

    let pending = ApplicationFilter {
        status: FilterChoice::Only(ApplicationStatus::Pending),
        ..Default::default()
    };
    let visible = pending.apply(&apps);
    let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "5"]);

    let by_name = ApplicationFilter {
        search: "wilson".into(),
        ..Default::default()
    };
    assert_eq!(by_name.apply(&apps)[0].id, "4");

    assert_eq!(ApplicationFilter::default().apply(&apps).len(), apps.len());
}

#[test]
fn whitespace_search_is_not_an_active_filter() {
    let blank = ApplicationFilter {
        search: "   ".into(),
        ..Default::default()
    };
    assert!(!blank.is_active());
    assert!(!ApplicationFilter::default().is_active());

    let pending = ApplicationFilter {
        status: FilterChoice::Only(ApplicationStatus::Pending),
        ..Default::default()
    };
    assert!(pending.is_active());
}
