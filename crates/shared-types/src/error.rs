use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    ValidationError,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error returned by every fallible dashboard operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation error carrying a single field message.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Short heading for a toast describing this error.
    pub fn title(&self) -> &'static str {
        match self.kind {
            AppErrorKind::NotFound => "Not Found",
            AppErrorKind::ValidationError => "Missing Information",
            AppErrorKind::Unauthorized => "Login Failed",
            AppErrorKind::Forbidden => "Access Denied",
            AppErrorKind::InternalError => "Error",
        }
    }

    /// Message safe to show to the operator.
    ///
    /// Internal errors are replaced by a generic sentence so storage or
    /// serialization details never reach the screen.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::InternalError => "An unexpected error occurred".to_string(),
            _ => self.message.clone(),
        }
    }

    /// Message for one field, if the error carries one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing report");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing report");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn field_error_populates_map() {
        let err = AppError::field("reason", "Please provide a reason for rejection");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_error("reason"),
            Some("Please provide a reason for rejection")
        );
        assert_eq!(err.field_error("email"), None);
    }

    #[test]
    fn friendly_message_hides_internal_details() {
        let err = AppError::internal("storage quota exceeded");
        assert_eq!(err.friendly_message(), "An unexpected error occurred");

        let err = AppError::unauthorized("Invalid credentials or account not approved");
        assert_eq!(
            err.friendly_message(),
            "Invalid credentials or account not approved"
        );
    }

    #[test]
    fn titles_follow_kind() {
        assert_eq!(AppError::forbidden("").title(), "Access Denied");
        assert_eq!(AppError::unauthorized("").title(), "Login Failed");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(format!("{}", err), "Unauthorized: bad credentials");
    }

    #[test]
    fn json_error_converts_to_internal() {
        let parse = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: AppError = parse.into();
        assert_eq!(err.kind, AppErrorKind::InternalError);
    }
}
