use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Settings row: label and description on the left, switch on the right.
#[component]
pub fn SwitchField(
    label: String,
    #[props(default)] description: String,
    checked: bool,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-field", "data-disabled": disabled,
            div { class: "switch-field-text",
                span { class: "switch-field-label", "{label}" }
                if !description.is_empty() {
                    span { class: "switch-field-description", "{description}" }
                }
            }
            Switch {
                checked: Some(checked),
                disabled: disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
        }
    }
}
