//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Settings form data, as handed to the template layer
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFormDto {
    /// Template to render
    #[schema(example = "settingsForm.tpl")]
    pub template: String,

    /// Owning plugin
    #[schema(example = "crossrefexportplugin")]
    pub plugin_name: String,

    /// Context ID
    pub context_id: i64,

    /// Current field values (strings and booleans)
    #[schema(value_type = Object)]
    pub fields: BTreeMap<String, serde_json::Value>,

    /// Launcher for the DOI plugin settings modal, when that plugin is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi_plugin_settings_link_action: Option<LinkActionDto>,

    /// Anti-forgery token to post back as `csrfToken`
    pub csrf_token: String,

    /// Validation errors of the last submission
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDto>,
}

/// Settings modal launcher DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkActionDto {
    #[schema(example = "settings")]
    pub id: String,

    #[schema(example = "DOI Plugin Settings")]
    pub label: String,

    /// URL loaded into the modal
    pub url: String,

    pub modal_title: String,
}

/// Validation error DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorDto {
    /// Offending field, absent for request-level errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Error kind (required, invalid_email, not_post, invalid_csrf)
    #[schema(example = "required")]
    pub kind: String,

    /// Locale key of the message
    pub message: String,
}

/// Response to a settings submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSettingsResponse {
    /// Whether the values were persisted
    pub saved: bool,

    /// Success notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,

    /// Form data for redisplay
    pub form: SettingsFormDto,
}
