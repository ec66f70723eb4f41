//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{ContextId, CrossrefSettings, CrossrefSettingsApi, SettingsFormError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used by export and deposit code to read depositor credentials without HTTP.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CrossrefSettingsApi for NativeClient {
    async fn load_settings(&self, context_id: ContextId) -> Result<CrossrefSettings, SettingsFormError> {
        self.service.load_settings(context_id).await
    }

    async fn save_settings(
        &self,
        context_id: ContextId,
        settings: CrossrefSettings,
    ) -> Result<(), SettingsFormError> {
        self.service.save_settings(context_id, settings).await
    }
}
