//! Common test utilities shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use crossref_settings::contract::{ContextId, FieldKind, FieldValue, PluginHandle, SettingEntry};
use crossref_settings::domain::{
    CsrfVerifier, PubIdPlugins, SecretCsrfVerifier, Service, SettingsLinkBuilder, SettingsStore,
    Submission,
};
use crossref_settings::infra::InMemorySettingsStore;
use std::sync::Arc;

pub const CSRF_SECRET: &str = "test-secret";
pub const BASE_URL: &str = "https://journal.example.org/index.php/jnl";
pub const DOI_LABEL: &str = "DOI Plugin Settings";

pub fn csrf() -> Arc<SecretCsrfVerifier> {
    Arc::new(SecretCsrfVerifier::new(CSRF_SECRET))
}

pub fn csrf_token(context_id: ContextId) -> String {
    csrf().token_for(context_id)
}

pub fn link_builder() -> SettingsLinkBuilder {
    SettingsLinkBuilder::new(BASE_URL, DOI_LABEL).unwrap()
}

pub fn service(store: Arc<dyn SettingsStore>, pub_id_plugins: Option<PubIdPlugins>) -> Service {
    Service::new(
        PluginHandle::crossref(),
        store,
        csrf(),
        pub_id_plugins,
        link_builder(),
    )
}

/// POST submission carrying the right anti-forgery token for `context_id`
pub fn submission(context_id: ContextId, params: &[(&str, &str)]) -> Submission {
    Submission::post(params.iter().map(|(k, v)| (k.to_string(), v.to_string())))
        .with_csrf_token(csrf_token(context_id))
}

pub fn valid_params() -> Vec<(&'static str, &'static str)> {
    vec![
        ("depositorName", "B"),
        ("depositorEmail", "b@c.com"),
        ("username", ""),
        ("password", ""),
        ("testMode", "1"),
    ]
}

/// Store the given values for a context
pub async fn seed(store: &InMemorySettingsStore, context_id: ContextId, values: &[(&str, FieldValue)]) {
    for (key, value) in values {
        let kind = match value {
            FieldValue::Text(_) => FieldKind::String,
            FieldValue::Bool(_) => FieldKind::Bool,
        };
        store.set(context_id, key, value, kind).await.unwrap();
    }
}

/// Store whose writes always fail; reads go to the wrapped store
#[derive(Clone, Default)]
pub struct FailingStore {
    pub inner: InMemorySettingsStore,
}

#[async_trait]
impl SettingsStore for FailingStore {
    async fn get(&self, context_id: ContextId, key: &str) -> anyhow::Result<Option<FieldValue>> {
        self.inner.get(context_id, key).await
    }

    async fn set(
        &self,
        _context_id: ContextId,
        key: &str,
        _value: &FieldValue,
        _kind: FieldKind,
    ) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("write of '{}' refused", key))
    }

    async fn set_many(&self, _context_id: ContextId, _entries: &[SettingEntry]) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("settings table is read-only"))
    }
}
