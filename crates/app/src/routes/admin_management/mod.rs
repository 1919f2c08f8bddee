mod dialogs;

use crate::access_gate::RoleGate;
use crate::auth::use_reviewer_name;
use crate::components::ApplicationStatusBadge;
use crate::format_helpers::{format_date, format_day};
use crate::notify;
use chrono::Utc;
use dialogs::{ApplicationDetailsDialog, ApproveDialog, RejectDialog};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCircleCheck, LdClock, LdCrown, LdEye, LdMail, LdMapPin, LdPhone, LdShield,
    LdUserCheck, LdUsers, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{
    approve, reject, seed, AdminApplication, ApplicationFilter, ApplicationStats,
    ApplicationStatus, Capability, FilterChoice, ALL_APPLICATION_STATUSES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, FilterBar, FormSelect, InitialsAvatar, Input,
    PageHeader, PageSubtitle, PageTitle, StatCard, StatTone,
};

/// Initials from a full name, e.g. "Rajesh Kumar" -> "RK".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Review queue for administrator applications. Super admins only.
#[component]
pub fn AdminManagement() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin_management.css") }
        RoleGate { capability: Capability::ManageAdmins,
            ApplicationReview {}
        }
    }
}

#[component]
fn ApplicationReview() -> Element {
    let toast = use_toast();
    let reviewer = use_reviewer_name();

    let mut applications = use_signal(seed::admin_applications);
    let mut filter = use_signal(ApplicationFilter::default);
    let mut details = use_signal(|| Option::<AdminApplication>::None);
    let mut approving = use_signal(|| Option::<AdminApplication>::None);
    let mut rejecting = use_signal(|| Option::<AdminApplication>::None);
    let mut reject_error = use_signal(|| Option::<String>::None);

    let all = applications.read().clone();
    let stats = ApplicationStats::from_applications(&all);
    let current = filter.read().clone();
    let visible = current.apply(&all);
    let filter_active = current.is_active();

    let approve_reviewer = reviewer.clone();
    let handle_approve = move |(id, note): (String, String)| {
        let result = approve(
            &mut applications.write(),
            &id,
            approve_reviewer.as_deref(),
            Utc::now(),
        );
        match result {
            Ok(()) => {
                if !note.trim().is_empty() {
                    tracing::debug!(application = %id, note = note.trim(), "approval note");
                }
                notify::success(&toast, "Admin Approved", "Admin application has been approved successfully");
                approving.set(None);
            }
            Err(err) => notify::error(&toast, &err),
        }
    };

    let handle_reject = move |(id, reason): (String, String)| {
        let result = reject(
            &mut applications.write(),
            &id,
            reviewer.as_deref(),
            &reason,
            Utc::now(),
        );
        match result {
            Ok(()) => {
                notify::success(&toast, "Admin Rejected", "Admin application has been rejected");
                reject_error.set(None);
                rejecting.set(None);
            }
            Err(err) => {
                reject_error.set(err.field_error("reason").map(str::to_string));
                notify::error(&toast, &err);
            }
        }
    };

    rsx! {
        PageHeader {
            div {
                PageTitle { "Admin Management" }
                PageSubtitle { "Review and manage administrator account applications" }
            }
            Badge { variant: BadgeVariant::Outline,
                Icon::<LdCrown> { icon: LdCrown, width: 14, height: 14 }
                "Super Admin Only"
            }
        }

        div { class: "stat-grid",
            StatCard { title: "Total Applications", value: "{stats.total}", tone: StatTone::Primary,
                Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
            }
            StatCard { title: "Pending Review", value: "{stats.pending}", tone: StatTone::Warning,
                Icon::<LdClock> { icon: LdClock, width: 24, height: 24 }
            }
            StatCard { title: "Approved Admins", value: "{stats.approved}", tone: StatTone::Success,
                Icon::<LdUserCheck> { icon: LdUserCheck, width: 24, height: 24 }
            }
            StatCard { title: "Rejected", value: "{stats.rejected}", tone: StatTone::Danger,
                Icon::<LdX> { icon: LdX, width: 24, height: 24 }
            }
        }

        Card {
            CardContent {
                FilterBar {
                    active: filter_active,
                    on_clear: move |_| filter.set(ApplicationFilter::default()),
                    div { class: "admin-search",
                        Input {
                            id: "admin-search",
                            label: "Search Applications",
                            value: current.search.clone(),
                            placeholder: "Search by name, email, or username...",
                            on_input: move |evt: FormEvent| filter.write().search = evt.value(),
                        }
                    }
                    FormSelect {
                        id: "admin-status",
                        label: "Status Filter",
                        value: "{current.status.key(ApplicationStatus::as_str)}",
                        onchange: move |evt: Event<FormData>| {
                            filter.write().status = FilterChoice::parse(&evt.value(), ApplicationStatus::parse);
                        },
                        option { value: "all", "All Statuses" }
                        for status in ALL_APPLICATION_STATUSES.iter() {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Admin Applications ({visible.len()})" }
                CardDescription { "Review administrator account requests and manage approvals" }
            }
            CardContent {
                if visible.is_empty() {
                    div { class: "empty-state",
                        Icon::<LdUsers> { icon: LdUsers, width: 48, height: 48 }
                        h3 { "No applications found" }
                        p { "Try adjusting your search criteria or filters" }
                    }
                } else {
                    div { class: "admin-list",
                        for app in visible {
                            ApplicationRow {
                                key: "{app.id}",
                                application: app.clone(),
                                on_details: move |a| details.set(Some(a)),
                                on_approve: move |a| approving.set(Some(a)),
                                on_reject: move |a| {
                                    reject_error.set(None);
                                    rejecting.set(Some(a));
                                },
                            }
                        }
                    }
                }
            }
        }

        ApplicationDetailsDialog {
            application: details(),
            on_close: move |_| details.set(None),
        }
        ApproveDialog {
            application: approving(),
            on_close: move |_| approving.set(None),
            on_confirm: handle_approve,
        }
        RejectDialog {
            application: rejecting(),
            error: reject_error(),
            on_close: move |_| {
                reject_error.set(None);
                rejecting.set(None);
            },
            on_confirm: handle_reject,
        }
    }
}

#[component]
fn ApplicationRow(
    application: AdminApplication,
    on_details: EventHandler<AdminApplication>,
    on_approve: EventHandler<AdminApplication>,
    on_reject: EventHandler<AdminApplication>,
) -> Element {
    let app = application;
    let pending = app.is_pending();
    let reviewed_on = app.reviewed_at.as_ref().map(format_date).unwrap_or_default();
    let reviewed_by = app.reviewed_by.clone().unwrap_or_default();
    let for_details = app.clone();
    let for_approve = app.clone();
    let for_reject = app.clone();

    rsx! {
        div { class: "admin-row",
            div { class: "admin-row-head",
                InitialsAvatar { initials: initials(&app.name) }
                div { class: "admin-row-identity",
                    h3 { "{app.name}" }
                    span { "@{app.username}" }
                }
                ApplicationStatusBadge { status: app.status }
            }

            div { class: "admin-row-facts",
                span {
                    Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                    "{app.email}"
                }
                span {
                    Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 }
                    "{app.phone}"
                }
                span {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                    "DOB: {format_day(&app.dob)}"
                }
                span {
                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                    "{app.address}"
                }
                span {
                    Icon::<LdShield> { icon: LdShield, width: 14, height: 14 }
                    "Aadhaar: {app.aadhaar}"
                }
                span {
                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                    "Applied: {format_date(&app.applied_at)}"
                }
            }

            div { class: "admin-row-departments",
                span { class: "admin-row-label", "Requested Departments:" }
                for dept in app.departments.iter() {
                    Badge { key: "{dept}", variant: BadgeVariant::Outline, "{dept}" }
                }
            }

            match app.status {
                ApplicationStatus::Approved => rsx! {
                    div { class: "admin-banner", "data-kind": "approved",
                        strong { "Approved" }
                        " by {reviewed_by} on {reviewed_on}"
                    }
                },
                ApplicationStatus::Rejected => rsx! {
                    div { class: "admin-banner", "data-kind": "rejected",
                        strong { "Rejected" }
                        " by {reviewed_by} on {reviewed_on}"
                        if let Some(reason) = &app.rejection_reason {
                            p {
                                strong { "Reason: " }
                                "{reason}"
                            }
                        }
                    }
                },
                ApplicationStatus::Pending => rsx! {},
            }

            div { class: "admin-row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| on_details.call(for_details.clone()),
                    Icon::<LdEye> { icon: LdEye, width: 14, height: 14 }
                    "View Details"
                }
                if pending {
                    Button {
                        variant: ButtonVariant::Success,
                        size: ButtonSize::Small,
                        onclick: move |_| on_approve.call(for_approve.clone()),
                        Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 14, height: 14 }
                        "Approve"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        size: ButtonSize::Small,
                        onclick: move |_| on_reject.call(for_reject.clone()),
                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                        "Reject"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use shared_types::UserRole;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("  priya   sharma "), "PS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn standard_admin_opening_route_sees_restricted_card() {
        fn app() -> Element {
            use_context_provider(|| AuthState::signed_in("admin1", UserRole::Admin));
            rsx! { AdminManagement {} }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Access Restricted"));
        assert!(!html.contains("Admin Management"));
        assert!(!html.contains("Admin Applications"));
        assert!(!html.contains("Total Applications"));
    }
}
