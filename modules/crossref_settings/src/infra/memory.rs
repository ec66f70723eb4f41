//! In-memory settings store

use crate::contract::{ContextId, FieldKind, FieldValue, SettingEntry};
use crate::domain::repository::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type Key = (ContextId, String);

/// Settings kept in process memory, keyed by (context_id, setting name)
#[derive(Clone, Default)]
pub struct InMemorySettingsStore {
    data: Arc<RwLock<HashMap<Key, FieldValue>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// All settings of one context
    pub fn snapshot(&self, context_id: ContextId) -> HashMap<String, FieldValue> {
        self.data
            .read()
            .iter()
            .filter(|((cid, _), _)| *cid == context_id)
            .map(|((_, key), value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, context_id: ContextId, key: &str) -> Result<Option<FieldValue>> {
        Ok(self.data.read().get(&(context_id, key.to_string())).cloned())
    }

    async fn set(
        &self,
        context_id: ContextId,
        key: &str,
        value: &FieldValue,
        kind: FieldKind,
    ) -> Result<()> {
        self.data
            .write()
            .insert((context_id, key.to_string()), value.clone().coerce(kind));
        Ok(())
    }

    async fn set_many(&self, context_id: ContextId, entries: &[SettingEntry]) -> Result<()> {
        let mut data = self.data.write();
        for entry in entries {
            data.insert(
                (context_id, entry.name.to_string()),
                entry.value.clone().coerce(entry.kind),
            );
        }
        Ok(())
    }
}
