use dioxus::prelude::*;

/// Vertical list of label/value rows for a details panel.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One label/value row inside a [`DetailList`].
///
/// Pass `value` for plain text or children for badges and other markup.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}

/// Two-column grid of detail rows.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}

/// Titled block of free text, e.g. a report description.
#[component]
pub fn DetailSection(title: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "detail-section",
            h4 { class: "detail-section-title", "{title}" }
            div { class: "detail-section-body", {children} }
        }
    }
}
