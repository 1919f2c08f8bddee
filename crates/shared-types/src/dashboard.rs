use serde::{Deserialize, Serialize};

use crate::report::{Priority, ReportStatus};

/// One labeled value in a chart series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    /// CSS colour; charts pick a palette colour when absent.
    pub color: Option<String>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Headline figure with its change since the previous period.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

impl QuickStat {
    pub fn trend(&self) -> Trend {
        if self.change.starts_with('-') {
            Trend::Down
        } else {
            Trend::Up
        }
    }
}

/// Condensed report row for the dashboard's recent activity card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentReport {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub status: ReportStatus,
    pub priority: Priority,
    pub votes: u32,
    pub time_ago: &'static str,
}

/// Reports by status for the distribution pie.
pub fn status_distribution() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Open", 45.0).with_color("var(--status-open)"),
        SeriesPoint::new("In Progress", 23.0).with_color("var(--status-in-progress)"),
        SeriesPoint::new("Resolved", 67.0).with_color("var(--status-resolved)"),
        SeriesPoint::new("Escalated", 8.0).with_color("var(--status-escalated)"),
    ]
}

/// Reports received per month for the trend bars.
pub fn monthly_trends() -> Vec<SeriesPoint> {
    [("Jan", 65.0), ("Feb", 78.0), ("Mar", 90.0), ("Apr", 87.0), ("May", 95.0), ("Jun", 112.0)]
        .into_iter()
        .map(|(label, value)| SeriesPoint::new(label, value))
        .collect()
}

pub fn quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat { title: "Total Reports", value: "1,234", change: "+12%" },
        QuickStat { title: "Active Citizens", value: "856", change: "+8%" },
        QuickStat { title: "Resolution Rate", value: "89%", change: "+3%" },
        QuickStat { title: "Avg Response Time", value: "2.4h", change: "-15%" },
    ]
}

pub fn recent_reports() -> Vec<RecentReport> {
    vec![
        RecentReport {
            id: "RPT-001",
            title: "Broken Street Light on Main Road",
            location: "Downtown, Zone A",
            status: ReportStatus::Open,
            priority: Priority::High,
            votes: 23,
            time_ago: "2 hours ago",
        },
        RecentReport {
            id: "RPT-002",
            title: "Pothole near City Park",
            location: "Central Park Area",
            status: ReportStatus::InProgress,
            priority: Priority::Medium,
            votes: 15,
            time_ago: "4 hours ago",
        },
        RecentReport {
            id: "RPT-003",
            title: "Garbage Collection Delay",
            location: "Residential Block C",
            status: ReportStatus::Resolved,
            priority: Priority::Low,
            votes: 8,
            time_ago: "1 day ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_sign() {
        let stats = quick_stats();
        assert_eq!(stats[0].trend(), Trend::Up);
        assert_eq!(stats[3].trend(), Trend::Down);
    }

    #[test]
    fn series_have_expected_shape() {
        assert_eq!(status_distribution().len(), 4);
        let months = monthly_trends();
        assert_eq!(months.len(), 6);
        assert_eq!(months[5].value, 112.0);
        assert!(months.iter().all(|p| p.color.is_none()));
    }
}
