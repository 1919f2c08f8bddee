use dioxus::prelude::*;

/// Circumference of the r = 45 pie ring, rounded the way the dash math uses it.
const RING_SCALE: f64 = 2.83;
const RING_CIRCUMFERENCE: f64 = 283.0;
pub const DEFAULT_BAR_CEILING: f64 = 80.0;

/// One labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    /// Accepted but renders nothing.
    Line,
    Pie,
}

/// Geometry of one pie segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub percentage: f64,
    /// Visible stroke length on the ring.
    pub dash: f64,
    /// Negative distance along the ring where this segment starts.
    pub offset: f64,
}

impl PieSlice {
    pub fn dasharray(&self) -> String {
        format!("{} {}", self.dash, RING_CIRCUMFERENCE)
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Bar heights as a percentage of the plot area, in input order.
///
/// The tallest bar reaches `ceiling`. A non-positive or non-finite maximum
/// flattens every bar to zero.
pub fn bar_heights(data: &[ChartDatum], ceiling: f64) -> Vec<f64> {
    let max = data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter()
        .map(|d| finite_or_zero(d.value / max * ceiling))
        .collect()
}

/// Ring segments for a pie, accumulated in input order.
pub fn pie_slices(data: &[ChartDatum]) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value).sum();
    let usable = total.is_finite() && total > 0.0;

    let mut cumulative = 0.0;
    data.iter()
        .map(|d| {
            let percentage = if usable {
                finite_or_zero(d.value / total * 100.0)
            } else {
                0.0
            };
            let slice = PieSlice {
                percentage,
                dash: percentage * RING_SCALE,
                offset: -cumulative * RING_SCALE,
            };
            cumulative += percentage;
            slice
        })
        .collect()
}

/// Palette colour for the datum at `index` when it carries none.
pub fn default_color(index: usize) -> String {
    format!("hsl({}, 70%, 60%)", index * 60)
}

/// Render a value without a trailing `.0` for whole numbers.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

/// Bar or pie rendering of a small labelled dataset.
#[component]
pub fn SimpleChart(
    data: Vec<ChartDatum>,
    kind: ChartKind,
    #[props(default = 200)] height: u32,
    #[props(default = DEFAULT_BAR_CEILING)] ceiling: f64,
) -> Element {
    match kind {
        ChartKind::Bar => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            BarChart { data, height, ceiling }
        },
        ChartKind::Pie => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            PieChart { data, height }
        },
        ChartKind::Line => rsx! {},
    }
}

#[component]
fn BarChart(data: Vec<ChartDatum>, height: u32, ceiling: f64) -> Element {
    let heights = bar_heights(&data, ceiling);
    let fills: Vec<String> = data
        .iter()
        .map(|d| d.color.clone().unwrap_or_else(|| "var(--accent-strong)".to_string()))
        .collect();

    rsx! {
        div { class: "chart chart-bar", style: "height: {height}px;",
            for ((datum, pct), fill) in data.iter().zip(heights).zip(fills.iter()) {
                div { key: "{datum.label}", class: "chart-bar-column",
                    div { class: "chart-bar-track",
                        div {
                            class: "chart-bar-fill",
                            style: "height: {pct}%; background: {fill};",
                        }
                    }
                    span { class: "chart-label", "{datum.label}" }
                    span { class: "chart-value", "{format_value(datum.value)}" }
                }
            }
        }
    }
}

#[component]
fn PieChart(data: Vec<ChartDatum>, height: u32) -> Element {
    let slices = pie_slices(&data);
    let colors: Vec<String> = data
        .iter()
        .enumerate()
        .map(|(i, d)| d.color.clone().unwrap_or_else(|| default_color(i)))
        .collect();

    rsx! {
        div { class: "chart chart-pie",
            svg {
                class: "chart-pie-ring",
                width: "{height}",
                height: "{height}",
                view_box: "0 0 100 100",
                for ((datum, slice), color) in data.iter().zip(slices.iter()).zip(colors.iter()) {
                    circle {
                        key: "{datum.label}",
                        cx: "50",
                        cy: "50",
                        r: "45",
                        fill: "transparent",
                        stroke: "{color}",
                        stroke_width: "8",
                        stroke_dasharray: "{slice.dasharray()}",
                        stroke_dashoffset: "{slice.offset}",
                    }
                }
            }
            ul { class: "chart-legend",
                for (datum, color) in data.iter().zip(colors.iter()) {
                    li { key: "{datum.label}", class: "chart-legend-item",
                        span { class: "chart-legend-swatch", style: "background: {color};" }
                        span { class: "chart-legend-label", "{datum.label}" }
                        span { class: "chart-legend-value", "{format_value(datum.value)}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data(values: &[f64]) -> Vec<ChartDatum> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ChartDatum::new(format!("d{i}"), *v))
            .collect()
    }

    #[test]
    fn tallest_bar_hits_ceiling() {
        let h = bar_heights(&data(&[50.0, 100.0, 25.0]), 80.0);
        assert_eq!(h, vec![40.0, 80.0, 20.0]);
    }

    #[test]
    fn bars_flatten_without_positive_max() {
        assert_eq!(bar_heights(&data(&[0.0, 0.0]), 80.0), vec![0.0, 0.0]);
        assert_eq!(bar_heights(&data(&[-3.0, -1.0]), 80.0), vec![0.0, 0.0]);
        assert_eq!(bar_heights(&data(&[f64::NAN]), 80.0), vec![0.0]);
        assert!(bar_heights(&[], 80.0).is_empty());
    }

    #[test]
    fn pie_offsets_accumulate() {
        let slices = pie_slices(&data(&[25.0, 75.0]));
        assert_eq!(slices[0].percentage, 25.0);
        assert_eq!(slices[0].offset, 0.0);
        assert!((slices[1].offset + 25.0 * 2.83).abs() < 1e-9);
        assert!((slices[1].dash - 75.0 * 2.83).abs() < 1e-9);
        let sum: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_pie_is_all_zero() {
        for s in pie_slices(&data(&[0.0, 0.0, 0.0])) {
            assert_eq!(s.percentage, 0.0);
            assert_eq!(s.dash, 0.0);
            assert_eq!(s.offset, 0.0);
        }
    }

    #[test]
    fn values_format_without_trailing_zero() {
        assert_eq!(format_value(45.0), "45");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(default_color(2), "hsl(120, 70%, 60%)");
    }

    #[test]
    fn line_chart_renders_nothing() {
        fn app() -> Element {
            rsx! {
                SimpleChart { data: vec![ChartDatum::new("Jan", 1.0)], kind: ChartKind::Line }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("chart"));
        assert!(!html.contains("Jan"));
    }

    #[test]
    fn bar_chart_renders_labels_and_heights() {
        fn app() -> Element {
            rsx! {
                SimpleChart {
                    data: vec![ChartDatum::new("Jan", 40.0), ChartDatum::new("Feb", 80.0)],
                    kind: ChartKind::Bar,
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Jan"));
        assert!(html.contains("Feb"));
        assert!(html.contains("height: 40%"));
        assert!(html.contains("height: 80%"));
    }
}
