//! Contract error types for crossref settings
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::ContextId;
use std::fmt;

/// Reason a validation check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field is empty
    Required,
    /// Value is not a valid email address
    InvalidEmail,
    /// Submission did not use POST
    NotPost,
    /// Anti-forgery token missing or wrong
    InvalidCsrf,
}

/// A failed check, attached to a field or to the whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field, `None` for request-level checks
    pub field: Option<&'static str>,
    pub kind: ValidationErrorKind,
    /// Locale key of the message shown to the user
    pub message_key: String,
}

impl FieldError {
    pub fn new(field: Option<&'static str>, kind: ValidationErrorKind, message_key: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message_key: message_key.into(),
        }
    }
}

/// All failed checks of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Errors attached to `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == Some(field))
    }

    pub fn has(&self, field: Option<&str>, kind: ValidationErrorKind) -> bool {
        self.0.iter().any(|e| e.field == field && e.kind == kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| match e.field {
                Some(field) => format!("{}: {}", field, e.message_key),
                None => e.message_key.clone(),
            })
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Settings form errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsFormError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Failed to load setting '{key}' for context {context_id}")]
    Load {
        context_id: ContextId,
        key: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to persist settings for context {context_id}")]
    Persistence {
        context_id: ContextId,
        #[source]
        source: anyhow::Error,
    },

    #[error("Form is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },
}

impl SettingsFormError {
    /// Validation errors carried by this error, if any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
