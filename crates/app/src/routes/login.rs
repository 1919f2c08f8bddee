use crate::auth::use_auth;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCrown, LdEye, LdEyeOff, LdLogIn, LdMoon, LdShield, LdSun};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::theme::use_theme;
use shared_ui::{
    use_toast, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input,
};

/// Sign-in screen with role selection.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut theme = use_theme();
    let toast = use_toast();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut role = use_signal(|| UserRole::Admin);
    let mut submitting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    // Already signed in: skip straight to the dashboard.
    use_effect(move || {
        if !auth.is_loading() && auth.is_authenticated() {
            navigator().replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        error_msg.set(None);

        let selected = role();
        match auth.login(username(), password(), selected).await {
            Ok(_) => {
                notify::success(
                    &toast,
                    "Login Successful",
                    format!("Welcome to CivicVoice {} Panel", selected.panel_name()),
                );
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                error_msg.set(Some(err.friendly_message()));
                notify::error(&toast, &err);
            }
        }
        submitting.set(false);
    };

    let mode = (theme.mode)();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            button {
                class: "auth-theme-toggle",
                r#type: "button",
                "aria-label": "Toggle theme",
                onclick: move |_| {
                    theme.toggle();
                },
                if mode.is_dark() {
                    Icon::<LdSun> { icon: LdSun, width: 20, height: 20 }
                } else {
                    Icon::<LdMoon> { icon: LdMoon, width: 20, height: 20 }
                }
            }

            Card { class: "auth-card",
                CardHeader { class: "auth-card-header",
                    div { class: "auth-logo",
                        Icon::<LdShield> { icon: LdShield, width: 32, height: 32 }
                    }
                    CardTitle { class: "auth-title", "CivicVoice" }
                    CardDescription { "Administrative Portal Access" }

                    div { class: "auth-roles", role: "radiogroup",
                        RoleOption {
                            role: UserRole::Admin,
                            selected: role() == UserRole::Admin,
                            on_select: move |r| role.set(r),
                        }
                        RoleOption {
                            role: UserRole::SuperAdmin,
                            selected: role() == UserRole::SuperAdmin,
                            on_select: move |r| role.set(r),
                        }
                    }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "username",
                            label: "Username",
                            placeholder: "Enter your username",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "{password_type}",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            button {
                                r#type: "button",
                                "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                } else {
                                    Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                }
                            }
                        }
                        Button {
                            button_type: "submit",
                            size: ButtonSize::Large,
                            class: "auth-submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "auth-spinner" }
                            } else {
                                Icon::<LdLogIn> { icon: LdLogIn, width: 18, height: 18 }
                                "Sign In"
                            }
                        }
                    }

                    div { class: "auth-demo",
                        p { class: "auth-demo-title", "Demo Credentials:" }
                        div { class: "auth-demo-grid",
                            div { class: "auth-demo-item",
                                div { class: "auth-demo-role", "Super Admin" }
                                div { "superadmin / admin123" }
                            }
                            div { class: "auth-demo-item",
                                div { class: "auth-demo-role", "Admin" }
                                div { "admin1 / admin123" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleOption(role: UserRole, selected: bool, on_select: EventHandler<UserRole>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "auth-role",
            role: "radio",
            "aria-checked": selected,
            "data-selected": selected,
            onclick: move |_| on_select.call(role),
            if role == UserRole::SuperAdmin {
                Icon::<LdCrown> { icon: LdCrown, width: 16, height: 16 }
            } else {
                Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
            }
            "{role.short_label()}"
        }
    }
}
