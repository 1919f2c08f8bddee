use dioxus::prelude::*;

/// Clamp a percentage into `0..=100`. Non-finite input is treated as empty.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn Progress(
    value: f64,
    /// CSS colour of the filled portion. Defaults to the primary colour.
    #[props(default)]
    color: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let pct = clamp_percent(value);
    let fill = color.unwrap_or_else(|| "var(--primary)".to_string());
    let base = vec![Attribute::new("class", "progress", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{pct:.0}",
            ..merged,
            div {
                class: "progress-indicator",
                style: "width: {pct}%; background: {fill};",
            }
        }
    }
}
