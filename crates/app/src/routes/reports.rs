use crate::components::{PriorityBadge, ReportStatusBadge};
use crate::format_helpers::{format_date, format_datetime_human};
use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCircleAlert, LdCircleCheck, LdClock, LdDownload, LdEye, LdFileText, LdMapPin,
    LdSearch, LdStar, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::{
    export_csv, seed, update_status, AppConfig, FilterChoice, Priority, Report, ReportFilter,
    ReportStats, ReportStatus, ALL_PRIORITIES, ALL_REPORT_STATUSES, CSV_FILE_NAME,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    DetailGrid, DetailItem, DetailList, DetailSection, DialogContent, DialogDescription,
    DialogFooter, DialogRoot, DialogTitle, FilterBar, FormSelect, Input, PageActions, PageHeader,
    PageSubtitle, PageTitle, StatCard, StatTone, Textarea,
};

/// Script that hands `csv` to the browser as a file download.
pub fn csv_download_script(file_name: &str, csv: &str) -> String {
    let body = serde_json::Value::String(csv.to_string());
    let name = serde_json::Value::String(file_name.to_string());
    format!(
        "const blob = new Blob([{body}], {{ type: 'text/csv' }});\n\
         const url = URL.createObjectURL(blob);\n\
         const a = document.createElement('a');\n\
         a.href = url;\n\
         a.download = {name};\n\
         a.click();\n\
         URL.revokeObjectURL(url);"
    )
}

/// Reports list with filters, export and status changes.
#[component]
pub fn Reports() -> Element {
    let config: AppConfig = use_context();
    let toast = use_toast();

    let mut reports = use_signal(seed::reports);
    let mut filter = use_signal(ReportFilter::default);
    let mut viewing = use_signal(|| Option::<Report>::None);
    let mut updating = use_signal(|| Option::<Report>::None);

    let all = reports.read().clone();
    let stats = ReportStats::from_reports(&all);
    let current = filter.read().clone();
    let visible = current.apply(&all);
    let visible_count = visible.len();
    let total = all.len();

    let export_rows = visible.clone();
    let handle_export = move |_| {
        let csv = export_csv(&export_rows);
        document::eval(&csv_download_script(CSV_FILE_NAME, &csv));
        tracing::info!(rows = export_rows.len(), file = CSV_FILE_NAME, "reports exported");
        notify::success(&toast, "Export Complete", "Reports exported successfully");
    };

    let apply_status = move |(id, status, reason): (String, ReportStatus, String)| {
        let reason = reason.trim().to_string();
        let reason = (!reason.is_empty()).then_some(reason);
        let result = update_status(&mut reports.write(), &id, status, reason.as_deref());
        match result {
            Ok(()) => {
                notify::success(
                    &toast,
                    "Status Updated",
                    format!("Report {id} status changed to {}", status.label()),
                );
                updating.set(None);
                viewing.set(None);
            }
            Err(err) => notify::error(&toast, &err),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        PageHeader {
            div {
                PageTitle { "Reports Management" }
                PageSubtitle { "Review, approve, and manage civic issue reports from citizens" }
            }
            if config.features.csv_export {
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: visible_count == 0,
                        onclick: handle_export,
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Export CSV"
                    }
                }
            }
        }

        div { class: "stat-grid",
            StatCard { title: "Total Reports", value: "{stats.total}", tone: StatTone::Primary,
                Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
            }
            StatCard { title: "Open", value: "{stats.open}", tone: StatTone::Danger,
                Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 24, height: 24 }
            }
            StatCard { title: "In Progress", value: "{stats.in_progress}", tone: StatTone::Warning,
                Icon::<LdClock> { icon: LdClock, width: 24, height: 24 }
            }
            StatCard { title: "Resolved", value: "{stats.resolved}", tone: StatTone::Success,
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 24, height: 24 }
            }
        }

        Card {
            CardContent {
                FilterBar {
                    active: current.is_active(),
                    on_clear: move |_| filter.set(ReportFilter::default()),
                    div { class: "reports-search",
                        Input {
                            value: current.search.clone(),
                            placeholder: "Search reports by title, description, or location...",
                            on_input: move |evt: FormEvent| filter.write().search = evt.value(),
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        }
                    }
                    FormSelect {
                        value: "{current.status.key(ReportStatus::as_str)}",
                        onchange: move |evt: Event<FormData>| {
                            filter.write().status = FilterChoice::parse(&evt.value(), ReportStatus::parse);
                        },
                        option { value: "all", "All Status" }
                        for status in ALL_REPORT_STATUSES.iter() {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                    FormSelect {
                        value: "{current.priority.key(Priority::as_str)}",
                        onchange: move |evt: Event<FormData>| {
                            filter.write().priority = FilterChoice::parse(&evt.value(), Priority::parse);
                        },
                        option { value: "all", "All Priority" }
                        for priority in ALL_PRIORITIES.iter() {
                            option { key: "{priority.as_str()}", value: priority.as_str(), "{priority.label()}" }
                        }
                    }
                }
                p { class: "reports-count", "Showing {visible_count} of {total} reports" }
            }
        }

        if visible.is_empty() {
            Card {
                CardContent {
                    div { class: "empty-state",
                        Icon::<LdFileText> { icon: LdFileText, width: 48, height: 48 }
                        h3 { "No reports found" }
                        p { "Try adjusting your search criteria or filters" }
                    }
                }
            }
        } else {
            div { class: "reports-list",
                for report in visible {
                    ReportRow {
                        key: "{report.id}",
                        report: report.clone(),
                        on_view: move |r| viewing.set(Some(r)),
                        on_update: move |r| updating.set(Some(r)),
                    }
                }
            }
        }

        ReportDetailDialog {
            report: viewing(),
            on_close: move |_| viewing.set(None),
            on_update: move |r| {
                viewing.set(None);
                updating.set(Some(r));
            },
        }

        StatusUpdateDialog {
            report: updating(),
            on_close: move |_| updating.set(None),
            on_confirm: apply_status,
        }
    }
}

#[component]
fn ReportRow(report: Report, on_view: EventHandler<Report>, on_update: EventHandler<Report>) -> Element {
    let can_update = report.status != ReportStatus::Resolved;
    let for_view = report.clone();
    let for_update = report.clone();

    rsx! {
        Card { class: "report-row", "data-priority": report.priority.as_str(),
            CardContent {
                div { class: "report-row-body",
                    div { class: "report-row-main",
                        div { class: "report-row-meta",
                            span { class: "report-row-id", "{report.id}" }
                            ReportStatusBadge { status: report.status }
                            PriorityBadge { priority: report.priority }
                            Badge { variant: BadgeVariant::Outline, "{report.category}" }
                        }
                        h3 { class: "report-row-title", "{report.title}" }
                        p { class: "report-row-description", "{report.description}" }
                        div { class: "report-row-facts",
                            span {
                                Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                                "{report.location}"
                            }
                            span {
                                Icon::<LdUser> { icon: LdUser, width: 14, height: 14 }
                                "{report.submitted_by}"
                            }
                            span {
                                Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                "{format_date(&report.submitted_at)}"
                            }
                            span {
                                Icon::<LdStar> { icon: LdStar, width: 14, height: 14 }
                                "{report.votes} votes"
                            }
                        }
                        if let Some(team) = &report.assigned_to {
                            p { class: "report-row-assignee", "Assigned to: {team}" }
                        }
                    }
                    div { class: "report-row-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| on_view.call(for_view.clone()),
                            Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                            "View"
                        }
                        if can_update {
                            Button {
                                size: ButtonSize::Small,
                                onclick: move |_| on_update.call(for_update.clone()),
                                "Update Status"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportDetailDialog(
    report: Option<Report>,
    on_close: EventHandler<()>,
    on_update: EventHandler<Report>,
) -> Element {
    rsx! {
        DialogRoot {
            open: report.is_some(),
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent {
                if let Some(report) = report {
                    DialogTitle { "{report.title}" }
                    DialogDescription { "Report {report.id}" }

                    div { class: "report-detail-badges",
                        ReportStatusBadge { status: report.status }
                        PriorityBadge { priority: report.priority }
                    }

                    DetailSection { title: "Description",
                        p { "{report.description}" }
                    }

                    DetailGrid {
                        DetailItem { label: "Location", value: report.location.clone() }
                        DetailItem { label: "Category", value: report.category.clone() }
                        DetailItem { label: "Submitted By", value: report.submitted_by.clone() }
                        DetailItem { label: "Date", value: format_datetime_human(&report.submitted_at) }
                        DetailItem { label: "Votes", value: report.votes.to_string() }
                        DetailItem { label: "Comments", value: report.comments.to_string() }
                    }

                    if let Some(team) = &report.assigned_to {
                        DetailList {
                            DetailItem { label: "Assigned To", value: team.clone() }
                        }
                    }

                    if !report.attachments.is_empty() {
                        DetailSection { title: "Attachments",
                            ul { class: "report-detail-attachments",
                                for name in report.attachments.iter() {
                                    li { key: "{name}", "{name}" }
                                }
                            }
                        }
                    }

                    DialogFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                        if report.status != ReportStatus::Resolved {
                            Button {
                                onclick: {
                                    let report = report.clone();
                                    move |_| on_update.call(report.clone())
                                },
                                "Update Status"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Status picker with an optional reason. Emits `(id, status, reason)`.
#[component]
fn StatusUpdateDialog(
    report: Option<Report>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<(String, ReportStatus, String)>,
) -> Element {
    let mut choice = use_signal(|| Option::<ReportStatus>::None);
    let mut reason = use_signal(String::new);

    let report_id = report.as_ref().map(|r| r.id.clone()).unwrap_or_default();
    let report_title = report.as_ref().map(|r| r.title.clone()).unwrap_or_default();
    let current = report.as_ref().map(|r| r.status).unwrap_or(ReportStatus::Open);
    let options = current.allowed_transitions();
    let selected = current.next_status(choice());

    let mut reset = move || {
        choice.set(None);
        reason.set(String::new());
    };

    rsx! {
        DialogRoot {
            open: report.is_some(),
            on_open_change: move |v: bool| {
                if !v {
                    reset();
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Update Report Status" }
                DialogDescription { "Change the status of \"{report_title}\"" }

                div { class: "reports-dialog-form",
                    FormSelect {
                        label: "New Status",
                        id: "report-status",
                        value: "{selected.as_str()}",
                        onchange: move |evt: Event<FormData>| {
                            choice.set(ReportStatus::parse(&evt.value()));
                        },
                        for status in options {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                    Textarea {
                        label: "Reason (optional)",
                        id: "report-status-reason",
                        placeholder: "Add a note about this status change...",
                        value: reason(),
                        on_input: move |evt: FormEvent| reason.set(evt.value()),
                    }
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            reset();
                            on_close.call(());
                        },
                        "Cancel"
                    }
                    Button {
                        onclick: move |_| {
                            on_confirm.call((report_id.clone(), selected, reason()));
                            reset();
                        },
                        "Update Status"
                    }
                }
            }
        }
    }
}
