//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::CrossrefSettingsApi;
pub use error::{FieldError, SettingsFormError, ValidationErrorKind, ValidationErrors};
pub use model::{
    ContextId, CrossrefSettings, FieldDescriptor, FieldKind, FieldRule, FieldValue, Notification,
    PluginHandle, SettingEntry, SettingsLinkAction,
};
