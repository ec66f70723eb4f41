//! Native client trait for inter-module communication
//!
//! Export and deposit code reads depositor credentials through this trait.
//! NO HTTP - direct function calls.

use super::{
    error::SettingsFormError,
    model::{ContextId, CrossrefSettings},
};
use async_trait::async_trait;

/// Crossref settings API for inter-module communication
#[async_trait]
pub trait CrossrefSettingsApi: Send + Sync {
    /// Load the settings of a context, with defaults for unset values
    async fn load_settings(&self, context_id: ContextId) -> Result<CrossrefSettings, SettingsFormError>;

    /// Validate field rules and store all settings of a context at once
    async fn save_settings(
        &self,
        context_id: ContextId,
        settings: CrossrefSettings,
    ) -> Result<(), SettingsFormError>;
}
