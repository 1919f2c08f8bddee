use crate::format_helpers::{format_date_human, format_day};
use dioxus::prelude::*;
use shared_types::AdminApplication;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DetailGrid, DetailItem, DetailSection,
    DialogContent, DialogDescription, DialogFooter, DialogRoot, DialogTitle, Textarea,
};

#[component]
pub fn ApplicationDetailsDialog(
    application: Option<AdminApplication>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        DialogRoot {
            open: application.is_some(),
            on_open_change: move |v: bool| {
                if !v {
                    on_close.call(());
                }
            },
            DialogContent { class: "dialog-content admin-details-dialog",
                if let Some(app) = application {
                    DialogTitle { "{app.name} - Application Details" }
                    DialogDescription { "Complete information for administrator application" }

                    DetailGrid {
                        DetailItem { label: "Full Name", value: app.name.clone() }
                        DetailItem { label: "Username", value: app.username.clone() }
                        DetailItem { label: "Email", value: app.email.clone() }
                        DetailItem { label: "Phone", value: app.phone.clone() }
                        DetailItem { label: "Date of Birth", value: format_day(&app.dob) }
                        DetailItem { label: "Aadhaar Number", value: app.aadhaar.clone() }
                        DetailItem { label: "Applied", value: format_date_human(&app.applied_at) }
                    }
                    DetailSection { title: "Address",
                        p { "{app.address}" }
                    }
                    DetailSection { title: "Requested Departments",
                        div { class: "admin-departments",
                            for dept in app.departments.iter() {
                                Badge { key: "{dept}", variant: BadgeVariant::Outline, "{dept}" }
                            }
                        }
                    }

                    DialogFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

/// Confirmation with an optional note. Emits `(id, note)`.
#[component]
pub fn ApproveDialog(
    application: Option<AdminApplication>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<(String, String)>,
) -> Element {
    let mut note = use_signal(String::new);
    let id = application.as_ref().map(|a| a.id.clone()).unwrap_or_default();
    let name = application.as_ref().map(|a| a.name.clone()).unwrap_or_default();

    rsx! {
        DialogRoot {
            open: application.is_some(),
            on_open_change: move |v: bool| {
                if !v {
                    note.set(String::new());
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Approve Admin Application" }
                DialogDescription { "Approve {name}'s administrator account request" }

                p { class: "admin-dialog-text",
                    "Are you sure you want to approve this application? The user will gain administrator access to the system."
                }
                Textarea {
                    id: "approval-note",
                    label: "Approval Note (Optional)",
                    placeholder: "Add any notes about this approval...",
                    value: note(),
                    on_input: move |evt: FormEvent| note.set(evt.value()),
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            note.set(String::new());
                            on_close.call(());
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| {
                            on_confirm.call((id.clone(), note()));
                            note.set(String::new());
                        },
                        "Approve Application"
                    }
                }
            }
        }
    }
}

/// Rejection reason tied to the application it was typed for, so reopening
/// the dialog for someone else starts blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReasonDraft {
    application_id: String,
    text: String,
}

impl ReasonDraft {
    pub fn text_for(&self, application_id: &str) -> &str {
        if self.application_id == application_id {
            &self.text
        } else {
            ""
        }
    }

    pub fn edit(&mut self, application_id: &str, text: String) {
        self.application_id = application_id.to_string();
        self.text = text;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Rejection with a mandatory reason. Emits `(id, reason)`; the parent
/// validates and passes any message back through `error`.
#[component]
pub fn RejectDialog(
    application: Option<AdminApplication>,
    #[props(default)] error: Option<String>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<(String, String)>,
) -> Element {
    let mut draft = use_signal(ReasonDraft::default);
    let id = application.as_ref().map(|a| a.id.clone()).unwrap_or_default();
    let reason = draft.read().text_for(&id).to_string();
    let edit_id = id.clone();
    let submitted = reason.clone();
    let name = application.as_ref().map(|a| a.name.clone()).unwrap_or_default();

    rsx! {
        DialogRoot {
            open: application.is_some(),
            on_open_change: move |v: bool| {
                if !v {
                    draft.write().clear();
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Reject Admin Application" }
                DialogDescription { "Reject {name}'s administrator account request" }

                Textarea {
                    id: "rejection-reason",
                    label: "Rejection Reason (Required)",
                    placeholder: "Please provide a reason for rejection...",
                    value: reason,
                    error,
                    on_input: move |evt: FormEvent| draft.write().edit(&edit_id, evt.value()),
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            draft.write().clear();
                            on_close.call(());
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| {
                            on_confirm.call((id.clone(), submitted.clone()));
                            draft.write().clear();
                        },
                        "Reject Application"
                    }
                }
            }
        }
    }
}
