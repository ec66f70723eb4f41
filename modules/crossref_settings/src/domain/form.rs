//! Crossref settings form
//!
//! Binds one plugin and context to the settings store and drives the six
//! descriptor-table fields through populate, read, validate and commit.

use super::csrf::CsrfVerifier;
use super::fields::{self, form_fields};
use super::lifecycle::{FormLifecycle, FormState, RequestMethod, Submission};
use super::link::{PubIdPlugins, SettingsLinkBuilder};
use super::repository::SettingsStore;
use super::validation::{field_checks, form_checks, run_checks, FormCheck, RequestFacts};
use crate::contract::{
    model::parse_flag, ContextId, CrossrefSettings, FieldKind, FieldValue, Notification,
    PluginHandle, SettingEntry, SettingsFormError, SettingsLinkAction, ValidationErrors,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

const SAVED_MESSAGE: &str = "Your changes have been saved.";

/// Everything the template layer needs to render the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateData {
    pub template: String,
    pub plugin_name: String,
    pub context_id: ContextId,
    /// Current values in display order
    pub fields: Vec<(&'static str, FieldValue)>,
    pub doi_plugin_settings_link_action: Option<SettingsLinkAction>,
    pub csrf_token: String,
    pub errors: ValidationErrors,
}

/// Settings form for depositor credentials and registration options
pub struct CrossrefSettingsForm {
    plugin: PluginHandle,
    context_id: ContextId,
    store: Arc<dyn SettingsStore>,
    csrf: Arc<dyn CsrfVerifier>,
    data: HashMap<&'static str, FieldValue>,
    doi_settings_link: Option<SettingsLinkAction>,
    checks: Vec<FormCheck>,
    request: Option<RequestFacts>,
    errors: ValidationErrors,
    state: FormState,
}

impl CrossrefSettingsForm {
    pub fn new(
        plugin: PluginHandle,
        context_id: ContextId,
        store: Arc<dyn SettingsStore>,
        csrf: Arc<dyn CsrfVerifier>,
    ) -> Self {
        let data = form_fields()
            .iter()
            .map(|d| (d.name, d.kind.default_value()))
            .collect();

        Self {
            plugin,
            context_id,
            store,
            csrf,
            data,
            doi_settings_link: None,
            checks: form_checks(),
            request: None,
            errors: ValidationErrors::default(),
            state: FormState::Unsubmitted,
        }
    }

    /// Stage the DOI plugin settings launcher when that plugin is active
    pub fn with_doi_settings_link(mut self, plugins: Option<&PubIdPlugins>, links: &SettingsLinkBuilder) -> Self {
        let Some(plugins) = plugins else {
            return self;
        };
        match links.doi_settings_link(plugins) {
            Ok(link) => self.doi_settings_link = link,
            Err(e) => tracing::warn!(
                context_id = self.context_id,
                error = %e,
                "Failed to build DOI plugin settings link"
            ),
        }
        self
    }

    pub fn context_id(&self) -> ContextId {
        self.context_id
    }

    pub fn plugin(&self) -> &PluginHandle {
        &self.plugin
    }

    /// Staged value of a form field
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.data.get(name)
    }

    /// Staged values in display order
    pub fn values(&self) -> Vec<(&'static str, FieldValue)> {
        form_fields()
            .iter()
            .map(|d| (d.name, self.staged(d.name, d.kind)))
            .collect()
    }

    pub fn doi_settings_link(&self) -> Option<&SettingsLinkAction> {
        self.doi_settings_link.as_ref()
    }

    /// Errors of the last validation pass
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Load every field from the store for display
    pub async fn init_data(&mut self) -> Result<(), SettingsFormError> {
        for field in form_fields() {
            let stored = self
                .store
                .get(self.context_id, field.name)
                .await
                .map_err(|source| SettingsFormError::Load {
                    context_id: self.context_id,
                    key: field.name.to_string(),
                    source,
                })?;
            let value = stored.map_or_else(|| field.kind.default_value(), |v| v.coerce(field.kind));
            self.data.insert(field.name, value);
        }

        self.errors = ValidationErrors::default();
        self.state = FormState::Populated;
        tracing::debug!(
            context_id = self.context_id,
            plugin = %self.plugin.name,
            "Settings form populated"
        );
        Ok(())
    }

    /// Stage every field from a submitted request; other parameters are ignored
    ///
    /// Text input is staged trimmed.
    pub fn read_input_data(&mut self, submission: &Submission) {
        for field in form_fields() {
            let raw = submission.param(field.name);
            let value = match field.kind {
                FieldKind::String => FieldValue::text(raw.unwrap_or_default().trim()),
                FieldKind::Bool => FieldValue::Bool(raw.is_some_and(parse_flag)),
            };
            self.data.insert(field.name, value);
        }

        let csrf_valid = submission
            .csrf_token
            .as_deref()
            .is_some_and(|token| self.csrf.verify(self.context_id, token));
        self.request = Some(RequestFacts {
            is_post: submission.method == RequestMethod::Post,
            csrf_valid,
        });
        self.checks = form_checks();
        self.state = FormState::Submitted;
    }

    /// Stage values handed over in-process; only field checks apply
    pub fn read_settings(&mut self, settings: &CrossrefSettings) {
        let values = [
            (fields::DEPOSITOR_NAME, FieldValue::text(settings.depositor_name.trim())),
            (fields::DEPOSITOR_EMAIL, FieldValue::text(settings.depositor_email.trim())),
            (fields::USERNAME, FieldValue::text(settings.username.trim())),
            (fields::PASSWORD, FieldValue::text(settings.password.trim())),
            (fields::AUTOMATIC_REGISTRATION, FieldValue::Bool(settings.automatic_registration)),
            (fields::TEST_MODE, FieldValue::Bool(settings.test_mode)),
        ];
        for (name, value) in values {
            self.data.insert(name, value);
        }

        self.request = None;
        self.checks = field_checks();
        self.state = FormState::Submitted;
    }

    /// Persist every field and complete the form
    ///
    /// All six values go to the store in a single `set_many` call.
    pub async fn execute(&mut self) -> Result<Notification, SettingsFormError> {
        if self.state != FormState::Valid {
            return Err(SettingsFormError::InvalidState {
                expected: FormState::Valid.as_str(),
                actual: self.state.as_str(),
            });
        }

        let entries: Vec<SettingEntry> = form_fields()
            .iter()
            .map(|d| SettingEntry {
                name: d.name,
                kind: d.kind,
                value: self.staged(d.name, d.kind),
            })
            .collect();

        self.store
            .set_many(self.context_id, &entries)
            .await
            .map_err(|source| {
                tracing::error!(
                    context_id = self.context_id,
                    plugin = %self.plugin.name,
                    error = %source,
                    "Failed to persist settings"
                );
                SettingsFormError::Persistence {
                    context_id: self.context_id,
                    source,
                }
            })?;

        self.state = FormState::Complete;
        tracing::info!(
            context_id = self.context_id,
            plugin = %self.plugin.name,
            "Settings saved"
        );
        Ok(Notification {
            context_id: self.context_id,
            message: SAVED_MESSAGE.to_string(),
        })
    }

    /// Typed view of the staged values
    pub fn settings(&self) -> CrossrefSettings {
        let text = |name: &str| match self.data.get(name) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        };
        let flag = |name: &str| matches!(self.data.get(name), Some(FieldValue::Bool(true)));

        CrossrefSettings {
            depositor_name: text(fields::DEPOSITOR_NAME),
            depositor_email: text(fields::DEPOSITOR_EMAIL),
            username: text(fields::USERNAME),
            password: text(fields::PASSWORD),
            automatic_registration: flag(fields::AUTOMATIC_REGISTRATION),
            test_mode: flag(fields::TEST_MODE),
        }
    }

    pub fn template_data(&self) -> TemplateData {
        TemplateData {
            template: self.plugin.template_resource.clone(),
            plugin_name: self.plugin.name.clone(),
            context_id: self.context_id,
            fields: self.values(),
            doi_plugin_settings_link_action: self.doi_settings_link.clone(),
            csrf_token: self.csrf.token_for(self.context_id),
            errors: self.errors.clone(),
        }
    }

    fn staged(&self, name: &str, kind: FieldKind) -> FieldValue {
        self.data
            .get(name)
            .cloned()
            .map_or_else(|| kind.default_value(), |v| v.coerce(kind))
    }
}

#[async_trait]
impl FormLifecycle for CrossrefSettingsForm {
    type Outcome = Notification;

    async fn populate(&mut self) -> Result<(), SettingsFormError> {
        self.init_data().await
    }

    fn read_submission(&mut self, submission: &Submission) {
        self.read_input_data(submission);
    }

    fn validate(&mut self) -> Result<(), SettingsFormError> {
        if !matches!(
            self.state,
            FormState::Submitted | FormState::Invalid | FormState::Valid
        ) {
            return Err(SettingsFormError::InvalidState {
                expected: FormState::Submitted.as_str(),
                actual: self.state.as_str(),
            });
        }

        match run_checks(&self.checks, &self.data, self.request) {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                self.state = FormState::Valid;
                Ok(())
            }
            Err(errors) => {
                tracing::debug!(
                    context_id = self.context_id,
                    errors = %errors,
                    "Settings form validation failed"
                );
                self.errors = errors.clone();
                self.state = FormState::Invalid;
                Err(SettingsFormError::Validation(errors))
            }
        }
    }

    async fn commit(&mut self) -> Result<Notification, SettingsFormError> {
        self.execute().await
    }

    fn state(&self) -> FormState {
        self.state
    }
}
