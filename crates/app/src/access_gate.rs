use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::Capability;
use shared_ui::{Card, CardContent};
use dioxus_free_icons::icons::ld_icons::LdShieldAlert;
use dioxus_free_icons::Icon;

/// Render children only when the signed-in role holds `capability`.
/// Shows `fallback`, or the access-restricted card when none is given.
#[component]
pub fn RoleGate(
    capability: Capability,
    #[props(default)] fallback: Option<Element>,
    children: Element,
) -> Element {
    let auth = use_auth();

    if auth.can(capability) {
        return rsx! { {children} };
    }

    tracing::debug!(?capability, "role gate denied");
    match fallback {
        Some(fallback) => rsx! { {fallback} },
        None => rsx! { AccessRestricted {} },
    }
}

#[component]
pub fn AccessRestricted() -> Element {
    rsx! {
        Card { class: "access-restricted",
            CardContent {
                div { class: "access-restricted-body",
                    Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 48, height: 48 }
                    h2 { "Access Restricted" }
                    p { "Only Super Administrators can access this section." }
                }
            }
        }
    }
}
