use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdSave};
use dioxus_free_icons::Icon;
use shared_types::{NotificationSettings, ALL_NOTIFICATION_KINDS};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    SwitchField,
};

/// Six channel switches, kept for the session only.
#[component]
pub fn NotificationsSection() -> Element {
    let toast = use_toast();
    let mut prefs = use_signal(NotificationSettings::default);

    rsx! {
        Card { class: "settings-card",
            CardHeader {
                CardTitle {
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                    "Notifications"
                }
                CardDescription { "Configure how you receive updates and alerts" }
            }
            CardContent { class: "settings-switches",
                for kind in ALL_NOTIFICATION_KINDS.iter().copied() {
                    SwitchField {
                        key: "{kind.label()}",
                        label: "{kind.label()}",
                        description: "{kind.description()}",
                        checked: prefs.read().get(kind),
                        on_change: move |enabled: bool| prefs.write().set(kind, enabled),
                    }
                }
            }
            CardFooter {
                Button {
                    onclick: move |_| {
                        tracing::debug!(prefs = ?prefs.read(), "notification preferences saved");
                        notify::success(&toast, "Notification Settings Updated", "Your notification preferences have been saved");
                    },
                    Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                    "Save Preferences"
                }
            }
        }
    }
}
