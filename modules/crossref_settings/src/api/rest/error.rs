//! HTTP error mapping to RFC-9457 Problem Details

use crate::contract::SettingsFormError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// RFC-9457 problem body returned by the settings routes
#[derive(Debug, Serialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Route of the failing request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: &str, detail: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP Problem Details
pub fn map_domain_error(error: SettingsFormError) -> Problem {
    match error {
        SettingsFormError::Validation(errors) => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Error",
            errors.to_string(),
        ),

        SettingsFormError::InvalidState { expected, actual } => Problem::new(
            StatusCode::CONFLICT,
            "Invalid Form State",
            format!("Form is {}, expected {}", actual, expected),
        ),

        SettingsFormError::Load { context_id, key, source } => {
            tracing::error!(context_id, key = %key, error = ?source, "Settings load failed");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Settings could not be loaded",
            )
        }

        SettingsFormError::Persistence { context_id, source } => {
            tracing::error!(context_id, error = ?source, "Settings persistence failed");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Settings could not be saved",
            )
        }
    }
}
