//! Validation checks for submitted settings
//!
//! Field checks are derived from the descriptor table, so "required" has a
//! single definition shared with `is_optional`.

use super::fields::form_fields;
use crate::contract::{FieldError, FieldRule, FieldValue, ValidationErrorKind, ValidationErrors};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const LOCALE_PREFIX: &str = "plugins.importexport.crossref.settings.form";

#[allow(clippy::unwrap_used)]
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

/// One registered check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCheck {
    /// Field must be non-empty
    Required(&'static str),
    /// Non-empty field must be a valid email address
    Email(&'static str),
    /// Submission must be a POST request
    Post,
    /// Submission must carry the expected anti-forgery token
    Csrf,
}

/// Request-level facts the checks need besides field values
#[derive(Debug, Clone, Copy)]
pub struct RequestFacts {
    pub is_post: bool,
    pub csrf_valid: bool,
}

/// Checks registered for the settings form, in evaluation order
pub fn form_checks() -> Vec<FormCheck> {
    let mut checks = field_checks();
    checks.push(FormCheck::Post);
    checks.push(FormCheck::Csrf);
    checks
}

/// Checks that only look at field values
pub fn field_checks() -> Vec<FormCheck> {
    let mut checks = Vec::new();
    for field in form_fields() {
        if field.required {
            checks.push(FormCheck::Required(field.name));
        }
        if field.rule == FieldRule::Email {
            checks.push(FormCheck::Email(field.name));
        }
    }
    checks
}

/// Syntactic email check
pub fn is_valid_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL_RE.is_match(value)
}

/// Run `checks` and collect every failure
///
/// An empty required field reports only the required error, not a format error.
pub fn run_checks(
    checks: &[FormCheck],
    values: &HashMap<&'static str, FieldValue>,
    request: Option<RequestFacts>,
) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    for check in checks {
        match *check {
            FormCheck::Required(field) => {
                if values.get(field).map_or(true, FieldValue::is_empty) {
                    errors.push(FieldError::new(
                        Some(field),
                        ValidationErrorKind::Required,
                        format!("{}.{}Required", LOCALE_PREFIX, field),
                    ));
                }
            }
            FormCheck::Email(field) => {
                let Some(text) = values.get(field).and_then(FieldValue::as_text) else {
                    continue;
                };
                let text = text.trim();
                if !text.is_empty() && !is_valid_email(text) {
                    errors.push(FieldError::new(
                        Some(field),
                        ValidationErrorKind::InvalidEmail,
                        format!("{}.{}Invalid", LOCALE_PREFIX, field),
                    ));
                }
            }
            FormCheck::Post => {
                if request.is_some_and(|r| !r.is_post) {
                    errors.push(FieldError::new(
                        None,
                        ValidationErrorKind::NotPost,
                        "form.postRequired",
                    ));
                }
            }
            FormCheck::Csrf => {
                if request.is_some_and(|r| !r.csrf_valid) {
                    errors.push(FieldError::new(
                        None,
                        ValidationErrorKind::InvalidCsrf,
                        "form.csrfInvalid",
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
