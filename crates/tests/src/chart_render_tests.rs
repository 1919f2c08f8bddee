use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{bar_heights, pie_slices, ChartDatum, ChartKind, SimpleChart, DEFAULT_BAR_CEILING};

use crate::common;

fn zeros() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Open", 0.0),
        ChartDatum::new("In Progress", 0.0),
        ChartDatum::new("Resolved", 0.0),
    ]
}

#[test]
fn all_zero_bars_are_flat_and_finite() {
    let heights = bar_heights(&zeros(), DEFAULT_BAR_CEILING);
    assert_eq!(heights, vec![0.0, 0.0, 0.0]);
    assert!(heights.iter().all(|h| h.is_finite()));
}

#[test]
fn all_zero_pie_has_finite_slices() {
    let slices = pie_slices(&zeros());
    assert_eq!(slices.len(), 3);
    for slice in slices {
        assert!(slice.percentage.is_finite());
        assert!(slice.dash.is_finite());
        assert!(slice.offset.is_finite());
        assert!(!slice.dasharray().contains("NaN"));
    }
}

#[test]
fn empty_dataset_has_no_bars() {
    assert!(bar_heights(&[], DEFAULT_BAR_CEILING).is_empty());
    assert!(pie_slices(&[]).is_empty());
}

#[test]
fn ssr_bar_chart_scales_to_ceiling() {
    fn app() -> Element {
        rsx! {
            SimpleChart {
                kind: ChartKind::Bar,
                data: vec![ChartDatum::new("Jan", 50.0), ChartDatum::new("Feb", 100.0)],
            }
        }
    }

    let html = common::render(app);
    assert!(html.contains("chart-bar"));
    assert!(html.contains("height: 40%;"));
    assert!(html.contains("height: 80%;"));
    assert!(html.contains("Feb"));
}

#[test]
fn ssr_zero_pie_renders_without_nan() {
    fn app() -> Element {
        rsx! {
            SimpleChart { kind: ChartKind::Pie, data: zeros() }
        }
    }

    let html = common::render(app);
    assert!(html.contains("chart-pie"));
    assert!(!html.contains("NaN"));
    assert!(html.contains("Resolved"));
}

#[test]
fn ssr_empty_bar_chart_has_no_columns() {
    fn app() -> Element {
        rsx! {
            SimpleChart { kind: ChartKind::Bar, data: Vec::new() }
        }
    }

    let html = common::render(app);
    assert!(!html.contains("chart-bar-column"));
}

#[test]
fn ssr_line_chart_renders_nothing() {
    fn app() -> Element {
        rsx! {
            SimpleChart { kind: ChartKind::Line, data: zeros() }
        }
    }

    assert!(!common::render(app).contains("chart"));
}
