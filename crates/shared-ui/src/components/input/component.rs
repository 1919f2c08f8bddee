use dioxus::prelude::*;

/// Labelled single-line text input.
///
/// `error` replaces `hint` under the field and marks it invalid. Children
/// render as a trailing adornment inside the field, e.g. a visibility toggle.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] hint: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_adornment = children != Ok(VNode::placeholder());
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            div { class: "input-field", "data-adorned": has_adornment,
                input {
                    id: "{id}",
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    "aria-invalid": invalid,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
                if has_adornment {
                    div { class: "input-adornment", {children} }
                }
            }
            if let Some(message) = error {
                p { class: "input-error", "{message}" }
            } else if !hint.is_empty() {
                p { class: "input-hint", "{hint}" }
            }
        }
    }
}
