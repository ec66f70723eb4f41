//! Settings store trait
//!
//! Implementations are in infra/storage/repositories.rs and infra/memory.rs

use crate::contract::{ContextId, FieldKind, FieldValue, SettingEntry};
use anyhow::Result;
use async_trait::async_trait;

/// Per-context key/value store for plugin settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read one setting, `None` when it was never stored
    async fn get(&self, context_id: ContextId, key: &str) -> Result<Option<FieldValue>>;

    /// Write one setting, serialized according to `kind`
    async fn set(
        &self,
        context_id: ContextId,
        key: &str,
        value: &FieldValue,
        kind: FieldKind,
    ) -> Result<()>;

    /// Write several settings of one context
    ///
    /// The default writes one at a time and may stop half way; stores that
    /// can do better override it with an all-or-nothing write.
    async fn set_many(&self, context_id: ContextId, entries: &[SettingEntry]) -> Result<()> {
        for entry in entries {
            self.set(context_id, entry.name, &entry.value, entry.kind).await?;
        }
        Ok(())
    }
}
