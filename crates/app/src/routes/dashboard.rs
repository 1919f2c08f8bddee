use crate::auth::use_auth;
use crate::components::{PriorityBadge, ReportStatusBadge};
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleAlert, LdCircleCheck, LdClock, LdFileText, LdFilter, LdMapPin, LdStar, LdTrendingUp,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    monthly_trends, quick_stats, recent_reports, status_distribution, AppConfig, SeriesPoint,
    Trend,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, ChartDatum, ChartKind, PageHeader, PageSubtitle, PageTitle, SimpleChart, StatCard,
    StatTone,
};

pub fn to_chart_data(points: Vec<SeriesPoint>) -> Vec<ChartDatum> {
    points
        .into_iter()
        .map(|p| ChartDatum {
            label: p.label,
            value: p.value,
            color: p.color,
        })
        .collect()
}

/// Summary view: headline numbers, two charts and the latest reports.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let config: AppConfig = use_context();
    let user = auth.current_user();
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let role_title = user.as_ref().map(|u| u.role.title()).unwrap_or("");

    let distribution = use_hook(|| to_chart_data(status_distribution()));
    let trends = use_hook(|| to_chart_data(monthly_trends()));
    let stats = use_hook(quick_stats);
    let recent = use_hook(recent_reports);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            div {
                PageTitle { "Welcome back, {name}" }
                PageSubtitle { "Here's what's happening with civic reports today" }
            }
            Badge { variant: BadgeVariant::Outline, class: "dashboard-role", "{role_title}" }
        }

        div { class: "stat-grid",
            for (i, stat) in stats.iter().enumerate() {
                StatCard {
                    key: "{stat.title}",
                    title: "{stat.title}",
                    value: "{stat.value}",
                    hint: "{stat.change} from last month",
                    tone: quick_stat_tone(i, stat.trend()),
                    QuickStatIcon { index: i }
                }
            }
        }

        div { class: "dashboard-charts",
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 20, height: 20 }
                        "Report Status Distribution"
                    }
                    CardDescription { "Current status breakdown of all reports" }
                }
                CardContent {
                    SimpleChart { data: distribution.clone(), kind: ChartKind::Pie, height: config.ui.chart_height }
                }
            }
            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 }
                        "Monthly Report Trends"
                    }
                    CardDescription { "Report submissions over the last 6 months" }
                }
                CardContent {
                    SimpleChart {
                        data: trends.clone(),
                        kind: ChartKind::Bar,
                        height: config.ui.chart_height,
                        ceiling: config.ui.bar_ceiling,
                    }
                }
            }
        }

        Card {
            CardHeader { class: "dashboard-recent-header",
                div {
                    CardTitle {
                        Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                        "Recent Reports"
                    }
                    CardDescription { "Latest civic issue reports requiring attention" }
                }
                Link { to: Route::Reports {},
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdFilter> { icon: LdFilter, width: 16, height: 16 }
                        "Filter"
                    }
                }
            }
            CardContent {
                div { class: "dashboard-recent",
                    for report in recent.iter() {
                        div {
                            key: "{report.id}",
                            class: "dashboard-recent-item",
                            "data-priority": report.priority.as_str(),
                            div { class: "dashboard-recent-meta",
                                span { class: "dashboard-recent-id", "{report.id}" }
                                ReportStatusBadge { status: report.status }
                                PriorityBadge { priority: report.priority }
                            }
                            h4 { class: "dashboard-recent-title", "{report.title}" }
                            div { class: "dashboard-recent-footer",
                                span {
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 14, height: 14 }
                                    "{report.location}"
                                }
                                span {
                                    Icon::<LdStar> { icon: LdStar, width: 14, height: 14 }
                                    "{report.votes} votes"
                                }
                                span { class: "dashboard-recent-time", "{report.time_ago}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A falling response time is good news, so it stays green.
fn quick_stat_tone(index: usize, trend: Trend) -> StatTone {
    match (index, trend) {
        (0, _) => StatTone::Primary,
        (1, _) => StatTone::Info,
        (_, Trend::Down) | (2, _) => StatTone::Success,
        _ => StatTone::Warning,
    }
}

#[component]
fn QuickStatIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 } },
        2 => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdClock> { icon: LdClock, width: 24, height: 24 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_convert_to_chart_data() {
        let data = to_chart_data(status_distribution());
        assert_eq!(data.len(), 4);
        assert_eq!(data[0].label, "Open");
        assert_eq!(data[0].color.as_deref(), Some("var(--status-open)"));
        assert!(to_chart_data(monthly_trends()).iter().all(|d| d.color.is_none()));
    }
}
