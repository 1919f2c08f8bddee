use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recognition tier assigned to a citizen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl BadgeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "bronze",
            BadgeTier::Silver => "silver",
            BadgeTier::Gold => "gold",
            BadgeTier::Platinum => "platinum",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BadgeTier::Bronze => "Bronze",
            BadgeTier::Silver => "Silver",
            BadgeTier::Gold => "Gold",
            BadgeTier::Platinum => "Platinum",
        }
    }
}

/// A participating resident on the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Citizen {
    pub id: String,
    pub name: String,
    pub email: String,
    pub total_reports: u32,
    pub resolved_reports: u32,
    pub votes: u32,
    pub rank: u32,
    pub join_date: NaiveDate,
    pub badge: BadgeTier,
    pub recent_activity: String,
}

impl Citizen {
    pub fn resolution_rate(&self) -> u32 {
        resolution_rate(self.resolved_reports, self.total_reports)
    }

    /// Initials for the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// Percentage of reports resolved, rounded half away from zero. Zero when
/// nothing has been reported.
pub fn resolution_rate(resolved: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(resolved) / f64::from(total) * 100.0).round() as u32
}

/// Ordering selected in the leaderboard's category box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardSort {
    #[default]
    Overall,
    MostReports,
    MostVotes,
    ResolutionRate,
}

pub const ALL_LEADERBOARD_SORTS: &[LeaderboardSort] = &[
    LeaderboardSort::Overall,
    LeaderboardSort::MostReports,
    LeaderboardSort::MostVotes,
    LeaderboardSort::ResolutionRate,
];

impl LeaderboardSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardSort::Overall => "overall",
            LeaderboardSort::MostReports => "reports",
            LeaderboardSort::MostVotes => "votes",
            LeaderboardSort::ResolutionRate => "resolved",
        }
    }

    pub fn parse(s: &str) -> Self {
        ALL_LEADERBOARD_SORTS
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardSort::Overall => "Overall Score",
            LeaderboardSort::MostReports => "Most Reports",
            LeaderboardSort::MostVotes => "Most Votes",
            LeaderboardSort::ResolutionRate => "Resolution Rate",
        }
    }
}

/// Period selector. Display only: the mock dataset has no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimePeriod {
    #[default]
    AllTime,
    ThisYear,
    ThisMonth,
    ThisWeek,
}

pub const ALL_TIME_PERIODS: &[TimePeriod] = &[
    TimePeriod::AllTime,
    TimePeriod::ThisYear,
    TimePeriod::ThisMonth,
    TimePeriod::ThisWeek,
];

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::AllTime => "all_time",
            TimePeriod::ThisYear => "this_year",
            TimePeriod::ThisMonth => "this_month",
            TimePeriod::ThisWeek => "this_week",
        }
    }

    pub fn parse(s: &str) -> Self {
        ALL_TIME_PERIODS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::AllTime => "All Time",
            TimePeriod::ThisYear => "This Year",
            TimePeriod::ThisMonth => "This Month",
            TimePeriod::ThisWeek => "This Week",
        }
    }
}

/// Return the citizens ordered for display. Ties fall back to rank.
pub fn sort_citizens(citizens: &[Citizen], sort: LeaderboardSort) -> Vec<Citizen> {
    let mut sorted = citizens.to_vec();
    sorted.sort_by(|a, b| {
        let primary = match sort {
            LeaderboardSort::Overall => std::cmp::Ordering::Equal,
            LeaderboardSort::MostReports => b.total_reports.cmp(&a.total_reports),
            LeaderboardSort::MostVotes => b.votes.cmp(&a.votes),
            LeaderboardSort::ResolutionRate => b.resolution_rate().cmp(&a.resolution_rate()),
        };
        primary.then(a.rank.cmp(&b.rank))
    });
    sorted
}

/// Monthly active figure shown on the stat card; not derivable from the dataset.
pub const ACTIVE_THIS_MONTH: u32 = 42;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardStats {
    pub total_citizens: usize,
    pub active_this_month: u32,
    pub platinum_members: usize,
    pub total_reports: u32,
}

impl LeaderboardStats {
    pub fn from_citizens(citizens: &[Citizen]) -> Self {
        Self {
            total_citizens: citizens.len(),
            active_this_month: ACTIVE_THIS_MONTH,
            platinum_members: citizens
                .iter()
                .filter(|c| c.badge == BadgeTier::Platinum)
                .count(),
            total_reports: citizens.iter().map(|c| c.total_reports).sum(),
        }
    }
}
