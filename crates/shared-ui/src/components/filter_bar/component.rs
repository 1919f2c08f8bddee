use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Row of search and filter controls.
///
/// A "Clear Filters" button is appended while `on_clear` is set and
/// `active` is true.
#[component]
pub fn FilterBar(
    #[props(default = false)] active: bool,
    #[props(default)] on_clear: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar",
            {children}
            if active {
                if let Some(handler) = on_clear {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        class: "filter-bar-clear",
                        onclick: move |_| handler.call(()),
                        "Clear Filters"
                    }
                }
            }
        }
    }
}
