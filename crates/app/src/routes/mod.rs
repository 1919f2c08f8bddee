pub mod admin_management;
pub mod dashboard;
pub mod heatmap;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod settings;

use crate::auth::use_auth;
use crate::components::RoleBadge;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdLayoutDashboard, LdLogOut, LdMap, LdMenu, LdMoon, LdSettings, LdShield, LdSun,
    LdTrophy,
};
use dioxus_free_icons::Icon;
use shared_types::{guard_outcome, visible_destinations, Destination, GuardOutcome};
use shared_ui::theme::use_theme;
use shared_ui::{
    Button, ButtonVariant, InitialsAvatar, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarSeparator, SidebarTrigger, SkeletonLines, Switch, SwitchThumb,
};

use admin_management::AdminManagement;
use dashboard::Dashboard;
use heatmap::HeatMap;
use leaderboard::Leaderboard;
use login::Login;
use not_found::NotFound;
use reports::Reports;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/reports")]
    Reports {},
    #[route("/heatmap")]
    HeatMap {},
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/admin-management")]
    AdminManagement {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn for_destination(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Route::Dashboard {},
            Destination::Reports => Route::Reports {},
            Destination::HeatMap => Route::HeatMap {},
            Destination::Leaderboard => Route::Leaderboard {},
            Destination::AdminManagement => Route::AdminManagement {},
            Destination::Settings => Route::Settings {},
        }
    }

    /// The navigation entry this route belongs to, if any.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Route::Dashboard {} => Some(Destination::Dashboard),
            Route::Reports {} => Some(Destination::Reports),
            Route::HeatMap {} => Some(Destination::HeatMap),
            Route::Leaderboard {} => Some(Destination::Leaderboard),
            Route::AdminManagement {} => Some(Destination::AdminManagement),
            Route::Settings {} => Some(Destination::Settings),
            Route::Login {} | Route::NotFound { .. } => None,
        }
    }
}

/// Gate every dashboard route behind the session.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let outcome = guard_outcome(auth.is_loading(), auth.is_authenticated());

    use_effect(move || {
        if guard_outcome(auth.is_loading(), auth.is_authenticated()) == GuardOutcome::Redirect {
            tracing::debug!("no session, redirecting to login");
            navigator().replace(Route::Login {});
        }
    });

    match outcome {
        GuardOutcome::Render => rsx! { Outlet::<Route> {} },
        GuardOutcome::Loading | GuardOutcome::Redirect => rsx! {
            div { class: "auth-guard-loading",
                div { class: "auth-guard-spinner" }
                p { "Loading..." }
                SkeletonLines { count: 4 }
            }
        },
    }
}

#[component]
fn DestinationIcon(destination: Destination) -> Element {
    match destination {
        Destination::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        Destination::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        Destination::HeatMap => rsx! { Icon::<LdMap> { icon: LdMap, width: 18, height: 18 } },
        Destination::Leaderboard => rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 18, height: 18 } },
        Destination::AdminManagement => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        Destination::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Sidebar shell around every signed-in view.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut theme = use_theme();

    let Some(user) = auth.current_user() else {
        return rsx! {};
    };
    let destinations = visible_destinations(user.role);
    let active = route.destination();
    let page_title = active.map(|d| d.label()).unwrap_or("");
    let initials: String = user
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    let mode = (theme.mode)();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        div { class: "sidebar-brand-mark", "CV" }
                        div {
                            span { class: "sidebar-brand-name", "CivicVoice" }
                            span { class: "sidebar-brand-tagline", "{user.role.panel_name()} Panel" }
                        }
                    }
                }

                div { class: "sidebar-user",
                    InitialsAvatar { initials: initials }
                    div { class: "sidebar-user-text",
                        span { class: "sidebar-user-name", "{user.name}" }
                        RoleBadge { role: user.role }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarMenu {
                        for destination in destinations {
                            SidebarMenuItem { key: "{destination.path()}",
                                Link { to: Route::for_destination(destination),
                                    SidebarMenuButton { active: active == Some(destination),
                                        DestinationIcon { destination }
                                        "{destination.label()}"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label",
                            if mode.is_dark() {
                                Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 }
                            } else {
                                Icon::<LdSun> { icon: LdSun, width: 16, height: 16 }
                            }
                            "{mode.toggle_label()}"
                        }
                        Switch {
                            checked: Some(!mode.is_dark()),
                            on_checked_change: move |_: bool| {
                                theme.toggle();
                            },
                            SwitchThumb {}
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-signout",
                        onclick: move |_| {
                            auth.logout();
                            navigator().push(Route::Login {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    span { class: "topbar-title", "{page_title}" }
                    div { class: "topbar-spacer" }
                    span { class: "topbar-user", "{user.username}" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
