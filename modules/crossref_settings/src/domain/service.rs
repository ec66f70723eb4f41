//! Domain service - builds per-request forms and drives their lifecycle

use super::csrf::CsrfVerifier;
use super::form::{CrossrefSettingsForm, TemplateData};
use super::lifecycle::{FormLifecycle, Submission};
use super::link::{PubIdPlugins, SettingsLinkBuilder};
use super::repository::SettingsStore;
use crate::contract::{ContextId, CrossrefSettings, Notification, PluginHandle, SettingsFormError};
use std::sync::Arc;

/// Result of handling a submitted settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Values were persisted
    Saved {
        notification: Notification,
        data: TemplateData,
    },
    /// Validation failed; redisplay with errors attached
    Invalid { data: TemplateData },
}

/// Domain service for crossref settings
pub struct Service {
    plugin: PluginHandle,
    store: Arc<dyn SettingsStore>,
    csrf: Arc<dyn CsrfVerifier>,
    pub_id_plugins: Option<PubIdPlugins>,
    links: SettingsLinkBuilder,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        plugin: PluginHandle,
        store: Arc<dyn SettingsStore>,
        csrf: Arc<dyn CsrfVerifier>,
        pub_id_plugins: Option<PubIdPlugins>,
        links: SettingsLinkBuilder,
    ) -> Self {
        Self {
            plugin,
            store,
            csrf,
            pub_id_plugins,
            links,
        }
    }

    pub fn plugin(&self) -> &PluginHandle {
        &self.plugin
    }

    /// Fresh form for one request
    pub fn form(&self, context_id: ContextId) -> CrossrefSettingsForm {
        CrossrefSettingsForm::new(
            self.plugin.clone(),
            context_id,
            self.store.clone(),
            self.csrf.clone(),
        )
        .with_doi_settings_link(self.pub_id_plugins.as_ref(), &self.links)
    }

    /// Populated form data for display
    pub async fn display(&self, context_id: ContextId) -> Result<TemplateData, SettingsFormError> {
        let mut form = self.form(context_id);
        form.populate().await?;
        Ok(form.template_data())
    }

    /// Validate and persist a submission
    ///
    /// Validation failures are a normal outcome; only store failures are errors.
    pub async fn submit(
        &self,
        context_id: ContextId,
        submission: &Submission,
    ) -> Result<SubmissionResult, SettingsFormError> {
        let mut form = self.form(context_id);
        match form.submit(submission).await {
            Ok(notification) => Ok(SubmissionResult::Saved {
                notification,
                data: form.template_data(),
            }),
            Err(SettingsFormError::Validation(_)) => Ok(SubmissionResult::Invalid {
                data: form.template_data(),
            }),
            Err(e) => Err(e),
        }
    }

    pub async fn load_settings(&self, context_id: ContextId) -> Result<CrossrefSettings, SettingsFormError> {
        let mut form = self.form(context_id);
        form.populate().await?;
        Ok(form.settings())
    }

    /// Store settings handed over in-process, after field validation
    pub async fn save_settings(
        &self,
        context_id: ContextId,
        settings: CrossrefSettings,
    ) -> Result<(), SettingsFormError> {
        let mut form = self.form(context_id);
        form.read_settings(&settings);
        form.validate()?;
        form.commit().await?;
        Ok(())
    }
}
