use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDatabase, LdLock, LdShield};
use dioxus_free_icons::Icon;
use shared_types::{parse_positive_or, SystemSettings, DEFAULT_SESSION_TIMEOUT};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, SwitchField,
};

#[component]
pub fn SecuritySection(settings: Signal<SystemSettings>) -> Element {
    let toast = use_toast();
    let mut settings = settings;
    let current = settings.read().clone();

    rsx! {
        Card { class: "settings-card",
            CardHeader {
                CardTitle {
                    Icon::<LdShield> { icon: LdShield, width: 20, height: 20 }
                    "Security"
                }
                CardDescription { "Manage your account security and privacy settings" }
            }
            CardContent { class: "settings-fields",
                SwitchField {
                    label: "Two-Factor Authentication",
                    description: "Add an extra layer of security to your account",
                    checked: current.two_factor_auth,
                    on_change: move |enabled: bool| settings.write().two_factor_auth = enabled,
                }
                div { class: "settings-number",
                    Input {
                        id: "session-timeout",
                        label: "Session Timeout (minutes)",
                        input_type: "number",
                        value: "{current.session_timeout}",
                        hint: "Automatically log out after period of inactivity",
                        on_input: move |evt: FormEvent| {
                            settings.write().session_timeout = parse_positive_or(&evt.value(), DEFAULT_SESSION_TIMEOUT);
                        },
                    }
                }
            }
            CardFooter { class: "settings-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| notify::info(&toast, "Change Password", "A password reset link has been sent to your account"),
                    Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                    "Change Password"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| notify::info(&toast, "Data Export Started", "Your data export will be available for download shortly"),
                    Icon::<LdDatabase> { icon: LdDatabase, width: 16, height: 16 }
                    "Export Data"
                }
            }
        }
    }
}
