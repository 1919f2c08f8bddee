use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::theme::{ThemeMode, ThemeState};

pub mod access_gate;
mod auth;
mod components;
pub mod format_helpers;
pub mod notify;
mod routes;
mod storage;
use auth::AuthState;
use routes::Route;
use storage::AppStore;

const CONFIG_SOURCE: &str = include_str!("../civicvoice.toml");

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_LIGHT: Asset = asset!("/assets/themes/light.css");
const THEME_DARK: Asset = asset!("/assets/themes/dark.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| AppConfig::from_toml_or_default(CONFIG_SOURCE));

    let mut auth = use_context_provider(|| AuthState::new(&config));

    let mut theme_store = use_signal(AppStore::default);
    let default_theme = ThemeMode::parse(&config.ui.default_theme).unwrap_or_default();
    let theme = use_context_provider(|| {
        let saved = storage::load_theme(&*theme_store.peek(), &config.storage.theme_key, default_theme);
        ThemeState::new(saved)
    });

    use_hook(|| {
        tracing::info!(platform = client_platform(), "civicvoice admin starting");
    });

    // Restore the persisted session once mounted.
    use_effect(move || auth.initialize());

    // Persist every theme change.
    use_effect(move || {
        let mode = (theme.mode)();
        storage::save_theme(&mut *theme_store.write(), &config.storage.theme_key, mode);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_LIGHT }
        document::Link { rel: "stylesheet", href: THEME_DARK }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
