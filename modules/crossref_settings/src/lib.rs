//! Crossref Settings Module
//!
//! Settings form of the Crossref export plugin: depositor credentials and
//! registration options, stored per context as plugin settings.

// Public exports
pub mod contract;
pub use contract::{
    client::CrossrefSettingsApi, error::SettingsFormError, ContextId, CrossrefSettings,
    FieldDescriptor, FieldKind, FieldValue, PluginHandle,
};

pub mod module;
pub use module::CrossrefSettingsModule;

pub mod config;
pub mod domain;
pub mod infra;

// Transport adapters (hidden from public API)
#[doc(hidden)]
pub mod api;
