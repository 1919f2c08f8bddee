use dioxus::prelude::*;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Value stored in the key-value store and written to `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognised is `None` so the caller
    /// can fall back to its configured default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label for the switch that moves away from this mode.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        }
    }
}

/// Shared theme state provided as context.
///
/// The sidebar, login page and settings all toggle the same signal; the
/// app persists every change through its storage layer.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Signal::new(initial),
        }
    }

    pub fn current(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        self.apply();
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Write the current mode to the document root.
    pub fn apply(&self) {
        set_theme(self.current());
    }
}

/// Hook to access the theme state.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Apply the theme once the document is mounted.
///
/// Call this once in the top-level App component, below the
/// `ThemeState` provider.
#[component]
pub fn ThemeSeed() -> Element {
    let theme = use_theme();
    use_effect(move || theme.apply());

    rsx! {}
}

/// Set `data-theme` on `<html>` so the CSS variables switch palettes.
pub fn set_theme(mode: ThemeMode) {
    tracing::debug!(theme = mode.as_str(), "applying theme");
    document::eval(&format!(
        r#"document.documentElement.setAttribute('data-theme', '{}');"#,
        mode.as_str()
    ));
}
