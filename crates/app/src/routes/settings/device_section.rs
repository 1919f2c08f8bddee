use crate::format_helpers::format_datetime_human;
use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMonitor;
use dioxus_free_icons::Icon;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, DetailGrid, DetailItem};

/// First token of the browser's user agent, e.g. `Mozilla/5.0`.
#[cfg(feature = "web")]
fn browser_name() -> String {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .and_then(|ua| ua.split_whitespace().next().map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(not(feature = "web"))]
fn browser_name() -> String {
    "Native webview".to_string()
}

#[component]
pub fn DeviceSection() -> Element {
    let browser = use_hook(browser_name);
    let session_started = use_hook(|| format_datetime_human(&Utc::now()));

    rsx! {
        Card { class: "settings-device",
            CardHeader {
                CardTitle {
                    Icon::<LdMonitor> { icon: LdMonitor, width: 20, height: 20 }
                    "Device & Browser Information"
                }
            }
            CardContent {
                DetailGrid {
                    DetailItem { label: "Browser", value: browser }
                    DetailItem { label: "Platform", value: crate::client_platform().to_string() }
                    DetailItem { label: "Session Started", value: session_started }
                }
            }
        }
    }
}
