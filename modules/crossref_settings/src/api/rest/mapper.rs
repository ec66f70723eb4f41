//! Domain to DTO mappers

use super::dto::{FieldErrorDto, LinkActionDto, SettingsFormDto, SubmitSettingsResponse};
use crate::contract::{FieldError, SettingsLinkAction, ValidationErrorKind};
use crate::domain::{SubmissionResult, TemplateData};

impl From<TemplateData> for SettingsFormDto {
    fn from(data: TemplateData) -> Self {
        Self {
            template: data.template,
            plugin_name: data.plugin_name,
            context_id: data.context_id,
            fields: data
                .fields
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_json()))
                .collect(),
            doi_plugin_settings_link_action: data.doi_plugin_settings_link_action.map(Into::into),
            csrf_token: data.csrf_token,
            errors: data.errors.iter().map(Into::into).collect(),
        }
    }
}

impl From<SettingsLinkAction> for LinkActionDto {
    fn from(link: SettingsLinkAction) -> Self {
        Self {
            id: link.id,
            label: link.label,
            url: link.url,
            modal_title: link.modal_title,
        }
    }
}

impl From<&FieldError> for FieldErrorDto {
    fn from(error: &FieldError) -> Self {
        Self {
            field: error.field.map(str::to_string),
            kind: kind_to_string(error.kind).to_string(),
            message: error.message_key.clone(),
        }
    }
}

impl From<SubmissionResult> for SubmitSettingsResponse {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Saved { notification, data } => Self {
                saved: true,
                notification: Some(notification.message),
                form: data.into(),
            },
            SubmissionResult::Invalid { data } => Self {
                saved: false,
                notification: None,
                form: data.into(),
            },
        }
    }
}

fn kind_to_string(kind: ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::Required => "required",
        ValidationErrorKind::InvalidEmail => "invalid_email",
        ValidationErrorKind::NotPost => "not_post",
        ValidationErrorKind::InvalidCsrf => "invalid_csrf",
    }
}
