use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdHouse};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::routes::Route;

/// 404 page for any unmatched path.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    use_hook(|| {
        tracing::error!(path = %path, "404: user attempted to access non-existent route");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " doesn't exist or has been moved."
                }
                div { class: "not-found-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| navigator().go_back(),
                        Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                        "Go Back"
                    }
                    Button {
                        onclick: move |_| {
                            navigator().push(Route::Login {});
                        },
                        Icon::<LdHouse> { icon: LdHouse, width: 16, height: 16 }
                        "Home"
                    }
                }
            }
        }
    }
}
