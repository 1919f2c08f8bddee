use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdPalette, LdSun};
use dioxus_free_icons::Icon;
use shared_ui::theme::use_theme;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Switch, SwitchThumb};

#[component]
pub fn AppearanceSection() -> Element {
    let mut theme = use_theme();
    let mode = (theme.mode)();

    rsx! {
        Card { class: "settings-card",
            CardHeader {
                CardTitle {
                    Icon::<LdPalette> { icon: LdPalette, width: 20, height: 20 }
                    "Appearance"
                }
                CardDescription { "Customize the look and feel of your dashboard" }
            }
            CardContent {
                div { class: "settings-theme-row",
                    div {
                        h4 { "Theme Mode" }
                        p { "Switch between light and dark themes" }
                    }
                    div { class: "settings-theme-switch",
                        Icon::<LdSun> { icon: LdSun, width: 16, height: 16 }
                        span { "Light" }
                        Switch {
                            checked: Some(mode.is_dark()),
                            on_checked_change: move |_: bool| {
                                theme.toggle();
                            },
                            SwitchThumb {}
                        }
                        span { "Dark" }
                        Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 }
                    }
                }

                div { class: "settings-preview",
                    h4 { "Theme Preview" }
                    div { class: "settings-preview-grid",
                        for swatch in ["primary", "accent", "secondary"] {
                            div { key: "{swatch}", class: "settings-preview-tile",
                                div { class: "settings-preview-bar", "data-swatch": swatch }
                                div { class: "settings-preview-line" }
                                div { class: "settings-preview-line settings-preview-line-short" }
                            }
                        }
                    }
                }
            }
        }
    }
}
