//! Mock datasets. Every view seeds its local state from these on mount.

use chrono::{DateTime, NaiveDate, Utc};

use crate::admin::{AdminApplication, ApplicationStatus};
use crate::citizen::{BadgeTier, Citizen};
use crate::heatmap::HeatmapPoint;
use crate::report::{Priority, Report, ReportStatus};
use crate::user::{AccountStatus, User, UserRole};

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Operator accounts known to the login screen.
pub fn operators() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            username: "superadmin".into(),
            name: "Super Administrator".into(),
            role: UserRole::SuperAdmin,
            status: AccountStatus::Approved,
            aadhaar: None,
            dob: None,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        },
        User {
            id: "2".into(),
            username: "admin1".into(),
            name: "John Smith".into(),
            role: UserRole::Admin,
            status: AccountStatus::Approved,
            aadhaar: Some("1234-5678-9012".into()),
            dob: Some("1985-06-15".into()),
            approved_by: Some("Super Administrator".into()),
            approved_at: Some("2024-01-15".into()),
            rejection_reason: None,
        },
        User {
            id: "3".into(),
            username: "admin2".into(),
            name: "Sarah Johnson".into(),
            role: UserRole::Admin,
            status: AccountStatus::Pending,
            aadhaar: Some("9876-5432-1098".into()),
            dob: Some("1990-03-22".into()),
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    category: &str,
    status: ReportStatus,
    priority: Priority,
    submitted_by: &str,
    submitted_at: &str,
    votes: u32,
    comments: u32,
    assigned_to: Option<&str>,
    attachments: &[&str],
) -> Report {
    Report {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        location: location.into(),
        category: category.into(),
        status,
        priority,
        submitted_by: submitted_by.into(),
        submitted_at: ts(submitted_at),
        votes,
        comments,
        assigned_to: assigned_to.map(Into::into),
        attachments: strings(attachments),
    }
}

pub fn reports() -> Vec<Report> {
    vec![
        report(
            "RPT-001",
            "Broken Street Light on Main Road",
            "The street light near the intersection of Main Road and Oak Street has been flickering for days and is now completely out. This creates a safety hazard for pedestrians and drivers, especially during nighttime hours.",
            "Main Road & Oak Street, Downtown Zone A",
            "Infrastructure",
            ReportStatus::Open,
            Priority::High,
            "John Citizen",
            "2024-01-15T10:30:00Z",
            23,
            8,
            None,
            &["street-light-1.jpg", "street-light-2.jpg"],
        ),
        report(
            "RPT-002",
            "Large Pothole near City Park",
            "A significant pothole has formed on the road leading to City Park. It's causing damage to vehicles and creating dangerous driving conditions.",
            "Park Avenue, Central District",
            "Road Maintenance",
            ReportStatus::InProgress,
            Priority::Medium,
            "Sarah Johnson",
            "2024-01-14T14:20:00Z",
            15,
            5,
            Some("Road Maintenance Team A"),
            &[],
        ),
        report(
            "RPT-003",
            "Garbage Collection Delay in Residential Area",
            "Garbage has not been collected for over a week in Residential Block C. This is causing hygiene issues and attracting pests.",
            "Residential Block C, Sector 7",
            "Waste Management",
            ReportStatus::Resolved,
            Priority::Low,
            "Mike Davis",
            "2024-01-10T09:15:00Z",
            8,
            3,
            Some("Waste Management Department"),
            &[],
        ),
        report(
            "RPT-004",
            "Water Leak at Bus Stop",
            "Continuous water leak from underground pipe near the main bus stop. Water is pooling and creating slippery conditions.",
            "Central Bus Terminal, Main Square",
            "Water Infrastructure",
            ReportStatus::Escalated,
            Priority::High,
            "Anna Wilson",
            "2024-01-13T16:45:00Z",
            31,
            12,
            Some("Emergency Response Team"),
            &[],
        ),
        report(
            "RPT-005",
            "Playground Equipment Needs Repair",
            "Several pieces of playground equipment at Community Park are broken or unsafe. The swing set has loose chains and the slide has sharp edges.",
            "Community Park, Westside",
            "Recreation",
            ReportStatus::Open,
            Priority::Medium,
            "Parent Committee",
            "2024-01-12T11:30:00Z",
            19,
            7,
            None,
            &[],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    name: &str,
    email: &str,
    username: &str,
    aadhaar: &str,
    dob: &str,
    phone: &str,
    address: &str,
    status: ApplicationStatus,
    applied_at: &str,
    review: Option<(&str, &str)>,
    rejection_reason: Option<&str>,
    departments: &[&str],
) -> AdminApplication {
    AdminApplication {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        username: username.into(),
        aadhaar: aadhaar.into(),
        dob: day(dob),
        phone: phone.into(),
        address: address.into(),
        status,
        applied_at: ts(applied_at),
        reviewed_at: review.map(|(at, _)| ts(at)),
        reviewed_by: review.map(|(_, by)| by.to_string()),
        rejection_reason: rejection_reason.map(Into::into),
        departments: strings(departments),
    }
}

pub fn admin_applications() -> Vec<AdminApplication> {
    vec![
        application(
            "1",
            "John Smith",
            "john.smith@email.com",
            "admin1",
            "1234-5678-9012",
            "1985-06-15",
            "+1 (555) 123-4567",
            "123 Main Street, Downtown District",
            ApplicationStatus::Approved,
            "2024-01-15T10:30:00Z",
            Some(("2024-01-16T14:20:00Z", "Super Administrator")),
            None,
            &["Infrastructure", "Transportation"],
        ),
        application(
            "2",
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "admin2",
            "9876-5432-1098",
            "1990-03-22",
            "+1 (555) 987-6543",
            "456 Oak Avenue, Residential Zone B",
            ApplicationStatus::Pending,
            "2024-01-18T09:15:00Z",
            None,
            None,
            &["Waste Management", "Environment"],
        ),
        application(
            "3",
            "Michael Chen",
            "michael.chen@email.com",
            "admin3",
            "5555-4444-3333",
            "1988-11-08",
            "+1 (555) 444-5555",
            "789 Pine Street, Commercial District",
            ApplicationStatus::Pending,
            "2024-01-19T16:45:00Z",
            None,
            None,
            &["Public Safety", "Emergency Services"],
        ),
        application(
            "4",
            "Emma Wilson",
            "emma.wilson@email.com",
            "admin4",
            "7777-8888-9999",
            "1992-07-12",
            "+1 (555) 777-8888",
            "321 Elm Street, Suburban Area",
            ApplicationStatus::Rejected,
            "2024-01-10T11:20:00Z",
            Some(("2024-01-12T15:30:00Z", "Super Administrator")),
            Some("Incomplete documentation and failed background verification"),
            &["Parks & Recreation"],
        ),
        application(
            "5",
            "David Rodriguez",
            "david.rodriguez@email.com",
            "admin5",
            "2222-3333-4444",
            "1987-04-25",
            "+1 (555) 222-3333",
            "654 Maple Drive, Industrial Zone",
            ApplicationStatus::Pending,
            "2024-01-20T13:10:00Z",
            None,
            None,
            &["Water & Utilities", "Engineering"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn citizen(
    rank: u32,
    name: &str,
    email: &str,
    total_reports: u32,
    resolved_reports: u32,
    votes: u32,
    join_date: &str,
    badge: BadgeTier,
    recent_activity: &str,
) -> Citizen {
    Citizen {
        id: rank.to_string(),
        name: name.into(),
        email: email.into(),
        total_reports,
        resolved_reports,
        votes,
        rank,
        join_date: day(join_date),
        badge,
        recent_activity: recent_activity.into(),
    }
}

pub fn citizens() -> Vec<Citizen> {
    vec![
        citizen(1, "Sarah Johnson", "sarah.j@email.com", 47, 42, 234, "2023-03-15", BadgeTier::Platinum, "Submitted water leak report 2 hours ago"),
        citizen(2, "Michael Chen", "mike.chen@email.com", 38, 35, 198, "2023-05-20", BadgeTier::Gold, "Voted on street light issue 1 day ago"),
        citizen(3, "Emily Rodriguez", "emily.r@email.com", 32, 28, 167, "2023-04-10", BadgeTier::Gold, "Submitted park maintenance report 3 days ago"),
        citizen(4, "David Thompson", "david.t@email.com", 28, 24, 145, "2023-06-05", BadgeTier::Silver, "Commented on traffic signal issue 5 days ago"),
        citizen(5, "Lisa Anderson", "lisa.a@email.com", 25, 22, 132, "2023-07-12", BadgeTier::Silver, "Submitted noise complaint report 1 week ago"),
        citizen(6, "James Wilson", "james.w@email.com", 22, 19, 118, "2023-08-03", BadgeTier::Bronze, "Voted on garbage collection issue 2 weeks ago"),
        citizen(7, "Maria Garcia", "maria.g@email.com", 20, 17, 105, "2023-09-15", BadgeTier::Bronze, "Submitted pothole report 3 weeks ago"),
        citizen(8, "Robert Brown", "robert.b@email.com", 18, 15, 92, "2023-10-01", BadgeTier::Bronze, "Voted on playground safety issue 1 month ago"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn point(
    id: &str,
    lat: f64,
    lng: f64,
    intensity: f64,
    status: ReportStatus,
    category: &str,
    title: &str,
    report_count: u32,
) -> HeatmapPoint {
    HeatmapPoint {
        id: id.into(),
        lat,
        lng,
        intensity,
        status,
        category: category.into(),
        title: title.into(),
        report_count,
    }
}

pub fn heatmap_points() -> Vec<HeatmapPoint> {
    vec![
        point("1", 40.7128, -74.0060, 0.8, ReportStatus::Open, "Infrastructure", "Downtown Area Issues", 23),
        point("2", 40.7589, -73.9851, 0.6, ReportStatus::InProgress, "Transportation", "Central Park vicinity", 15),
        point("3", 40.6892, -74.0445, 0.9, ReportStatus::Escalated, "Emergency", "Brooklyn Bridge Area", 31),
        point("4", 40.7505, -73.9934, 0.4, ReportStatus::Resolved, "Waste Management", "Times Square District", 8),
        point("5", 40.7282, -73.7949, 0.7, ReportStatus::Open, "Public Safety", "Queens Boulevard", 19),
        point("6", 40.6501, -73.9496, 0.5, ReportStatus::InProgress, "Infrastructure", "Brooklyn Heights", 12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_parse() {
        let r = &reports()[0];
        assert_eq!(r.submitted_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert_eq!(citizens()[7].join_date, NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = reports().into_iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(admin_applications().len(), 5);
        assert_eq!(heatmap_points().len(), 6);
    }
}
