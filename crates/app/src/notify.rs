//! Toast helpers shared by the views.

use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

pub fn success(toasts: &Toasts, title: &str, description: impl Into<String>) {
    toasts.success(
        title.to_string(),
        ToastOptions::new().description(description.into()),
    );
}

pub fn info(toasts: &Toasts, title: &str, description: impl Into<String>) {
    toasts.info(
        title.to_string(),
        ToastOptions::new().description(description.into()),
    );
}

/// Show an error using its kind's title and user-facing message.
pub fn error(toasts: &Toasts, err: &AppError) {
    toasts.error(
        err.title().to_string(),
        ToastOptions::new().description(error_description(err)),
    );
}

/// Prefer the first field message over the generic one.
pub fn error_description(err: &AppError) -> String {
    err.field_errors
        .values()
        .next()
        .cloned()
        .unwrap_or_else(|| err.friendly_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_message_wins() {
        let err = AppError::field("reason", "Please provide a reason for rejection");
        assert_eq!(error_description(&err), "Please provide a reason for rejection");
    }

    #[test]
    fn internal_errors_are_softened() {
        let err = AppError::internal("storage exploded");
        assert_eq!(error_description(&err), err.friendly_message());
        assert!(!error_description(&err).contains("exploded"));
    }
}
