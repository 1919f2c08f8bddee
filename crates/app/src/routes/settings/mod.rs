mod appearance_section;
mod device_section;
mod notifications_section;
mod profile_section;
mod security_section;
mod system_section;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{AppConfig, Capability, SystemSettings};
use shared_ui::{PageHeader, PageSubtitle, PageTitle};

use appearance_section::AppearanceSection;
use device_section::DeviceSection;
use notifications_section::NotificationsSection;
use profile_section::ProfileSection;
use security_section::SecuritySection;
use system_section::SystemSection;

/// Settings page: one card per section.
///
/// Security and system configuration edit the same `SystemSettings`
/// value, so it lives here and is handed down as a signal.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let config: AppConfig = use_context();
    let system = use_signal(SystemSettings::default);

    let show_system = config.features.system_settings && auth.can(Capability::ModifySystemSettings);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        PageHeader {
            div {
                PageTitle { "Settings" }
                PageSubtitle { "Manage your account preferences and system configuration" }
            }
        }

        div { class: "settings-grid",
            ProfileSection {}
            NotificationsSection {}
            AppearanceSection {}
            SecuritySection { settings: system }
            if show_system {
                SystemSection { settings: system }
            }
        }

        DeviceSection {}
    }
}
