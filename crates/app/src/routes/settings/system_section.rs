use crate::auth::use_auth;
use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCrown, LdSave};
use dioxus_free_icons::Icon;
use shared_types::{
    parse_positive_or, save_system_settings, SystemSettings, ALL_SYSTEM_TOGGLES,
    DEFAULT_MAX_REPORTS_PER_DAY,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, Input, SwitchField,
};

/// Global switches. The parent only mounts this for super admins, and the
/// save re-checks the role.
#[component]
pub fn SystemSection(settings: Signal<SystemSettings>) -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut settings = settings;
    let current = settings.read().clone();

    let handle_save = move |_| match save_system_settings(auth.role(), &settings.read()) {
        Ok(()) => notify::success(
            &toast,
            "System Settings Updated",
            "System configuration has been updated successfully",
        ),
        Err(err) => notify::error(&toast, &err),
    };

    rsx! {
        Card { class: "settings-card settings-card-system",
            CardHeader {
                CardTitle {
                    Icon::<LdCrown> { icon: LdCrown, width: 20, height: 20 }
                    "System Configuration"
                    Badge { variant: BadgeVariant::Primary, "Super Admin" }
                }
                CardDescription { "Global system settings and administrative controls" }
            }
            CardContent { class: "settings-switches",
                for toggle in ALL_SYSTEM_TOGGLES.iter().copied() {
                    SwitchField {
                        key: "{toggle.label()}",
                        label: "{toggle.label()}",
                        description: "{toggle.description()}",
                        checked: current.get(toggle),
                        on_change: move |enabled: bool| settings.write().set(toggle, enabled),
                    }
                }
                div { class: "settings-number",
                    Input {
                        id: "max-reports",
                        label: "Max Reports Per Day",
                        input_type: "number",
                        value: "{current.max_reports_per_day}",
                        hint: "Limit on reports a single citizen can submit daily",
                        on_input: move |evt: FormEvent| {
                            settings.write().max_reports_per_day = parse_positive_or(&evt.value(), DEFAULT_MAX_REPORTS_PER_DAY);
                        },
                    }
                }
            }
            CardFooter {
                Button { onclick: handle_save,
                    Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                    "Save System Settings"
                }
            }
        }
    }
}
