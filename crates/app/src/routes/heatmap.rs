use crate::components::ReportStatusBadge;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleAlert, LdCircleCheck, LdClock, LdFilter, LdMap, LdMapPin, LdTrendingUp, LdX,
};
use dioxus_free_icons::Icon;
use shared_types::{
    seed, status_color, FilterChoice, HeatmapFilter, HeatmapPoint, HeatmapStats, IntensityBand,
    MapView, ReportStatus, ALL_INTENSITY_BANDS, ALL_MAP_VIEWS, ALL_REPORT_STATUSES, HEATMAP_CATEGORIES,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DetailGrid, DetailItem, FormSelect, PageHeader, PageSubtitle,
    PageTitle, StatCard, StatTone,
};

/// Inline style for one hotspot on the mock map.
///
/// Heat map mode colours by intensity with a glow, markers mode by status,
/// and clusters mode scales the circle with the report count.
pub fn marker_style(point: &HeatmapPoint, view: MapView) -> String {
    let (left, top) = point.map_position();
    let intensity_color = point.band().color();
    let position = format!("left: {left:.1}%; top: {top:.1}%;");
    match view {
        MapView::Heatmap => format!(
            "{position} width: 3rem; height: 3rem; background: {intensity_color}; box-shadow: 0 0 {:.0}px {intensity_color}80;",
            point.intensity * 40.0
        ),
        MapView::Markers => format!(
            "{position} width: 1.75rem; height: 1.75rem; background: {};",
            status_color(point.status)
        ),
        MapView::Clusters => {
            let size = 2.0 + (point.report_count.min(30) as f64) / 10.0;
            format!("{position} width: {size:.1}rem; height: {size:.1}rem; background: {intensity_color};")
        }
    }
}

/// Geographic view of report density on a placeholder map.
#[component]
pub fn HeatMap() -> Element {
    let points = use_hook(seed::heatmap_points);
    let mut filter = use_signal(HeatmapFilter::default);
    let mut view = use_signal(MapView::default);
    let mut selected = use_signal(|| Option::<HeatmapPoint>::None);

    let current = filter.read().clone();
    let visible = current.apply(&points);
    let stats = HeatmapStats::from_points(&visible);
    let mode = view();
    let category_key = match &current.category {
        FilterChoice::All => "all".to_string(),
        FilterChoice::Only(category) => category.clone(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./heatmap.css") }

        PageHeader {
            div {
                PageTitle { "Interactive Heat Map" }
                PageSubtitle { "Geographic visualization of civic issues and report density" }
            }
            Badge { variant: BadgeVariant::Outline,
                Icon::<LdMap> { icon: LdMap, width: 14, height: 14 }
                "Live Data"
            }
        }

        div { class: "stat-grid",
            StatCard { title: "Total Hotspots", value: "{stats.hotspots}", tone: StatTone::Primary,
                Icon::<LdMapPin> { icon: LdMapPin, width: 24, height: 24 }
            }
            StatCard { title: "High Intensity", value: "{stats.high_intensity}", tone: StatTone::Danger,
                Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 }
            }
            StatCard { title: "Active Issues", value: "{stats.active}", tone: StatTone::Warning,
                Icon::<LdClock> { icon: LdClock, width: 24, height: 24 }
            }
            StatCard { title: "Resolved", value: "{stats.resolved}", tone: StatTone::Success,
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 24, height: 24 }
            }
        }

        div { class: "heatmap-layout",
            aside { class: "heatmap-controls",
                Card {
                    CardHeader {
                        CardTitle {
                            Icon::<LdFilter> { icon: LdFilter, width: 18, height: 18 }
                            "Filters"
                        }
                    }
                    CardContent { class: "heatmap-filter-body",
                        FormSelect {
                            label: "Category",
                            id: "heatmap-category",
                            value: category_key,
                            onchange: move |evt: Event<FormData>| {
                                let raw = evt.value();
                                filter.write().category = if raw == "all" {
                                    FilterChoice::All
                                } else {
                                    FilterChoice::Only(raw)
                                };
                            },
                            option { value: "all", "All Categories" }
                            for category in HEATMAP_CATEGORIES.iter() {
                                option { key: "{category}", value: *category, "{category}" }
                            }
                        }
                        FormSelect {
                            label: "Status",
                            id: "heatmap-status",
                            value: "{current.status.key(ReportStatus::as_str)}",
                            onchange: move |evt: Event<FormData>| {
                                filter.write().status = FilterChoice::parse(&evt.value(), ReportStatus::parse);
                            },
                            option { value: "all", "All Statuses" }
                            for status in ALL_REPORT_STATUSES.iter() {
                                option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                            }
                        }
                        FormSelect {
                            label: "View Mode",
                            id: "heatmap-view",
                            value: "{mode.as_str()}",
                            onchange: move |evt: Event<FormData>| view.set(MapView::parse(&evt.value())),
                            for option_view in ALL_MAP_VIEWS.iter() {
                                option { key: "{option_view.as_str()}", value: option_view.as_str(), "{option_view.label()}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "heatmap-reset",
                            onclick: move |_| filter.set(HeatmapFilter::default()),
                            "Reset Filters"
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Legend" }
                    }
                    CardContent {
                        h4 { class: "heatmap-legend-heading", "Intensity Levels" }
                        ul { class: "heatmap-legend",
                            for band in ALL_INTENSITY_BANDS.iter() {
                                li { key: "{band.legend()}",
                                    span { class: "heatmap-swatch", style: "background: {band.color()};" }
                                    "{band.legend()}"
                                }
                            }
                        }
                        h4 { class: "heatmap-legend-heading", "Status" }
                        ul { class: "heatmap-legend",
                            for status in ALL_REPORT_STATUSES.iter() {
                                li { key: "{status.as_str()}",
                                    span { class: "heatmap-swatch", style: "background: {status_color(*status)};" }
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "heatmap-map-card",
                CardHeader { class: "heatmap-map-header",
                    div {
                        CardTitle { "Civic Issues Heat Map" }
                        CardDescription { "Click on any hotspot to view detailed information" }
                    }
                    Badge { variant: BadgeVariant::Outline, "{visible.len()} Points Visible" }
                }
                CardContent {
                    div { class: "heatmap-canvas", "data-view": mode.as_str(),
                        svg {
                            class: "heatmap-streets",
                            view_box: "0 0 800 600",
                            preserve_aspect_ratio: "none",
                            for y in [100, 300, 500] {
                                line { key: "h{y}", x1: "0", y1: "{y}", x2: "800", y2: "{y}" }
                            }
                            for x in [200, 400, 600] {
                                line { key: "v{x}", x1: "{x}", y1: "0", x2: "{x}", y2: "600" }
                            }
                        }

                        div { class: "heatmap-placeholder",
                            Icon::<LdMap> { icon: LdMap, width: 64, height: 64 }
                            p { "Interactive Heat Map" }
                            span { "Click on hotspots to view details" }
                        }

                        for point in visible.iter() {
                            HotspotMarker {
                                key: "{point.id}",
                                point: point.clone(),
                                view: mode,
                                on_select: move |p| selected.set(Some(p)),
                            }
                        }
                    }

                    if let Some(point) = selected() {
                        SelectedPointPanel { point, on_close: move |_| selected.set(None) }
                    }
                }
            }
        }
    }
}

#[component]
fn HotspotMarker(point: HeatmapPoint, view: MapView, on_select: EventHandler<HeatmapPoint>) -> Element {
    let style = marker_style(&point, view);
    let badge_color = status_color(point.status);
    let clicked = point.clone();

    rsx! {
        button {
            class: "heatmap-marker",
            r#type: "button",
            style: "{style}",
            title: "{point.title}",
            onclick: move |_| on_select.call(clicked.clone()),
            if view != MapView::Markers {
                span { class: "heatmap-marker-status", style: "background: {badge_color};" }
            }
            span { class: "heatmap-marker-count", "{point.report_count}" }
            span { class: "heatmap-marker-tooltip",
                strong { "{point.title}" }
                span { "{point.category}" }
            }
        }
    }
}

#[component]
fn SelectedPointPanel(point: HeatmapPoint, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "heatmap-selected",
            div { class: "heatmap-selected-header",
                h3 { "{point.title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    onclick: move |_| on_close.call(()),
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
            DetailGrid {
                DetailItem { label: "Category", value: point.category.clone() }
                DetailItem { label: "Status",
                    ReportStatusBadge { status: point.status }
                }
                DetailItem { label: "Reports", value: format!("{} issues", point.report_count) }
                DetailItem { label: "Intensity", value: format!("{}%", point.intensity_percent()) }
            }
            if point.band() == IntensityBand::Critical {
                p { class: "heatmap-selected-alert",
                    Icon::<LdCircleAlert> { icon: LdCircleAlert, width: 14, height: 14 }
                    "Critical hotspot: prioritise dispatch to this area."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64, intensity: f64, status: ReportStatus, count: u32) -> HeatmapPoint {
        HeatmapPoint {
            id: "HP-T".into(),
            lat,
            lng,
            intensity,
            status,
            category: "Infrastructure".into(),
            title: "Test hotspot".into(),
            report_count: count,
        }
    }

    #[test]
    fn heatmap_marker_glows_with_intensity_colour() {
        let p = point(40.7589, -73.9851, 0.9, ReportStatus::Open, 15);
        let style = marker_style(&p, MapView::Heatmap);
        assert!(style.contains("background: #dc2626;"));
        assert!(style.contains("box-shadow: 0 0 36px #dc262680;"));
    }

    #[test]
    fn markers_mode_uses_status_colour() {
        let p = point(40.7589, -73.9851, 0.9, ReportStatus::Resolved, 15);
        let style = marker_style(&p, MapView::Markers);
        assert!(style.contains(&format!("background: {};", status_color(ReportStatus::Resolved))));
        assert!(!style.contains("box-shadow"));
    }

    #[test]
    fn cluster_size_is_capped() {
        let small = marker_style(&point(40.7, -74.0, 0.3, ReportStatus::Open, 0), MapView::Clusters);
        let huge = marker_style(&point(40.7, -74.0, 0.3, ReportStatus::Open, 500), MapView::Clusters);
        assert!(small.contains("width: 2.0rem;"));
        assert!(huge.contains("width: 5.0rem;"));
    }

    #[test]
    fn position_is_inside_canvas() {
        let p = point(40.7831, -73.9712, 0.5, ReportStatus::Open, 3);
        let (left, top) = p.map_position();
        assert!((0.0..80.0).contains(&left));
        assert!((0.0..60.0).contains(&top));
        assert!(marker_style(&p, MapView::Heatmap).starts_with(&format!("left: {left:.1}%; top: {top:.1}%;")));
    }
}
