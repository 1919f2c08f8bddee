use crate::components::TierBadge;
use crate::format_helpers::{format_count, format_joined};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCrown, LdFileText, LdStar, LdTrendingUp, LdTrophy, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    seed, sort_citizens, Citizen, LeaderboardSort, LeaderboardStats, TimePeriod,
    ALL_LEADERBOARD_SORTS, ALL_TIME_PERIODS,
};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect, InitialsAvatar,
    PageActions, PageHeader, PageSubtitle, PageTitle, Progress, StatCard, StatTone,
};

/// Podium placement: second on the left, first in the middle, third on the right.
pub fn podium_order(sorted: &[Citizen]) -> Vec<(usize, Citizen)> {
    [1usize, 0, 2]
        .into_iter()
        .filter_map(|i| sorted.get(i).map(|c| (i + 1, c.clone())))
        .collect()
}

/// Citizen rankings by participation.
#[component]
pub fn Leaderboard() -> Element {
    let citizens = use_hook(seed::citizens);
    let mut sort = use_signal(LeaderboardSort::default);
    let mut period = use_signal(TimePeriod::default);

    let stats = LeaderboardStats::from_citizens(&citizens);
    let order = sort();
    let sorted = sort_citizens(&citizens, order);
    let podium = podium_order(&sorted);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./leaderboard.css") }

        PageHeader {
            div {
                PageTitle { "Citizen Leaderboard" }
                PageSubtitle { "Recognizing our most active community members" }
            }
            PageActions {
                FormSelect {
                    id: "leaderboard-period",
                    value: "{period().as_str()}",
                    onchange: move |evt: Event<FormData>| period.set(TimePeriod::parse(&evt.value())),
                    for p in ALL_TIME_PERIODS.iter() {
                        option { key: "{p.as_str()}", value: p.as_str(), "{p.label()}" }
                    }
                }
                FormSelect {
                    id: "leaderboard-sort",
                    value: "{order.as_str()}",
                    onchange: move |evt: Event<FormData>| sort.set(LeaderboardSort::parse(&evt.value())),
                    for s in ALL_LEADERBOARD_SORTS.iter() {
                        option { key: "{s.as_str()}", value: s.as_str(), "{s.label()}" }
                    }
                }
            }
        }

        div { class: "stat-grid",
            StatCard { title: "Total Citizens", value: "{stats.total_citizens}", tone: StatTone::Primary,
                Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
            }
            StatCard { title: "Active This Month", value: "{stats.active_this_month}", tone: StatTone::Success,
                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 }
            }
            StatCard { title: "Platinum Members", value: "{stats.platinum_members}", tone: StatTone::Info,
                Icon::<LdCrown> { icon: LdCrown, width: 24, height: 24 }
            }
            StatCard { title: "Total Reports", value: "{format_count(stats.total_reports)}", tone: StatTone::Warning,
                Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
            }
        }

        Card { class: "leaderboard-podium-card",
            CardHeader {
                CardTitle {
                    Icon::<LdTrophy> { icon: LdTrophy, width: 20, height: 20 }
                    "Top Contributors"
                }
                CardDescription { "{order.label()} · {period().label()}" }
            }
            CardContent {
                div { class: "leaderboard-podium",
                    for (place, citizen) in podium {
                        PodiumSpot { key: "{citizen.id}", place, citizen: citizen.clone() }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Full Rankings" }
                CardDescription { "Complete list of citizen contributors" }
            }
            CardContent {
                div { class: "leaderboard-list",
                    for (i, citizen) in sorted.into_iter().enumerate() {
                        RankingRow { key: "{citizen.id}", position: i + 1, citizen: citizen.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PodiumSpot(place: usize, citizen: Citizen) -> Element {
    rsx! {
        div { class: "leaderboard-podium-spot", "data-place": "{place}",
            if place == 1 {
                Icon::<LdCrown> { icon: LdCrown, width: 28, height: 28, class: "leaderboard-crown" }
            }
            InitialsAvatar { initials: citizen.initials() }
            h3 { class: "leaderboard-podium-name", "{citizen.name}" }
            TierBadge { tier: citizen.badge }
            div { class: "leaderboard-podium-stats",
                span { "{citizen.total_reports} reports" }
                span { "{format_count(citizen.votes)} votes" }
            }
            div { class: "leaderboard-podium-block", "#{place}" }
        }
    }
}

#[component]
fn RankingRow(position: usize, citizen: Citizen) -> Element {
    let rate = citizen.resolution_rate();

    rsx! {
        div { class: "leaderboard-row",
            span { class: "leaderboard-row-rank", "#{position}" }
            InitialsAvatar { initials: citizen.initials() }
            div { class: "leaderboard-row-who",
                div { class: "leaderboard-row-name",
                    "{citizen.name}"
                    TierBadge { tier: citizen.badge }
                }
                span { class: "leaderboard-row-email", "{citizen.email}" }
                span { class: "leaderboard-row-activity",
                    "{citizen.recent_activity} · {format_joined(&citizen.join_date)}"
                }
            }
            div { class: "leaderboard-row-numbers",
                div {
                    strong { "{citizen.total_reports}" }
                    span { "Reports" }
                }
                div {
                    strong { "{citizen.resolved_reports}" }
                    span { "Resolved" }
                }
                div {
                    strong {
                        Icon::<LdStar> { icon: LdStar, width: 12, height: 12 }
                        "{format_count(citizen.votes)}"
                    }
                    span { "Votes" }
                }
            }
            div { class: "leaderboard-row-rate",
                span { "{rate}% resolved" }
                Progress { value: f64::from(rate) }
            }
        }
    }
}
