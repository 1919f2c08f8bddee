use crate::auth::use_auth;
use crate::notify;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdSave, LdUser};
use dioxus_free_icons::Icon;
use shared_types::ProfileSettings;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Textarea,
};

#[component]
pub fn ProfileSection() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut profile = use_signal(|| ProfileSettings::for_user(auth.current_user().as_ref()));

    let current = profile.read().clone();

    rsx! {
        Card { class: "settings-card",
            CardHeader {
                CardTitle {
                    Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                    "Profile Settings"
                }
                CardDescription { "Manage your personal information and account details" }
            }
            CardContent { class: "settings-fields",
                div { class: "settings-field-row",
                    Input {
                        id: "profile-name",
                        label: "Full Name",
                        value: current.name,
                        on_input: move |evt: FormEvent| profile.write().name = evt.value(),
                    }
                    Input {
                        id: "profile-email",
                        label: "Email",
                        input_type: "email",
                        value: current.email,
                        on_input: move |evt: FormEvent| profile.write().email = evt.value(),
                    }
                }
                div { class: "settings-field-row",
                    Input {
                        id: "profile-phone",
                        label: "Phone",
                        value: current.phone,
                        on_input: move |evt: FormEvent| profile.write().phone = evt.value(),
                    }
                    Input {
                        id: "profile-department",
                        label: "Department",
                        value: current.department,
                        on_input: move |evt: FormEvent| profile.write().department = evt.value(),
                    }
                }
                Textarea {
                    id: "profile-bio",
                    label: "Bio",
                    rows: 3,
                    value: current.bio,
                    on_input: move |evt: FormEvent| profile.write().bio = evt.value(),
                }
            }
            CardFooter {
                Button {
                    onclick: move |_| {
                        tracing::info!(name = %profile.read().name, "profile saved");
                        notify::success(&toast, "Profile Updated", "Your profile settings have been saved successfully");
                    },
                    Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                    "Save Profile"
                }
            }
        }
    }
}
