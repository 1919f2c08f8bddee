//! Domain-to-badge mappings used across the views.

use dioxus::prelude::*;
use shared_types::{ApplicationStatus, BadgeTier, Priority, ReportStatus, UserRole};
use shared_ui::{Badge, BadgeVariant};

pub fn report_status_variant(status: ReportStatus) -> BadgeVariant {
    match status {
        ReportStatus::Open => BadgeVariant::Destructive,
        ReportStatus::InProgress => BadgeVariant::Warning,
        ReportStatus::Resolved => BadgeVariant::Success,
        ReportStatus::Escalated => BadgeVariant::Info,
    }
}

pub fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Secondary,
    }
}

pub fn application_status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Pending => BadgeVariant::Warning,
        ApplicationStatus::Approved => BadgeVariant::Success,
        ApplicationStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn tier_variant(tier: BadgeTier) -> BadgeVariant {
    match tier {
        BadgeTier::Platinum => BadgeVariant::Info,
        BadgeTier::Gold => BadgeVariant::Warning,
        BadgeTier::Silver => BadgeVariant::Secondary,
        BadgeTier::Bronze => BadgeVariant::Outline,
    }
}

#[component]
pub fn ReportStatusBadge(status: ReportStatus) -> Element {
    rsx! {
        Badge { variant: report_status_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    rsx! {
        Badge { variant: priority_variant(priority), "{priority.label()}" }
    }
}

#[component]
pub fn ApplicationStatusBadge(status: ApplicationStatus) -> Element {
    rsx! {
        Badge { variant: application_status_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    let variant = match role {
        UserRole::SuperAdmin => BadgeVariant::Primary,
        UserRole::Admin => BadgeVariant::Secondary,
    };
    rsx! {
        Badge { variant, "{role.short_label()}" }
    }
}

#[component]
pub fn TierBadge(tier: BadgeTier) -> Element {
    rsx! {
        Badge { variant: tier_variant(tier), "{tier.label()}" }
    }
}
