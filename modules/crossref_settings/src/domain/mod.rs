//! Domain layer - form definition, validation and lifecycle

pub mod csrf;
pub mod fields;
pub mod form;
pub mod lifecycle;
pub mod link;
pub mod repository;
pub mod service;
pub mod validation;

pub use csrf::{CsrfVerifier, SecretCsrfVerifier};
pub use fields::{form_field_types, form_fields, is_optional};
pub use form::{CrossrefSettingsForm, TemplateData};
pub use lifecycle::{FormLifecycle, FormState, RequestMethod, Submission};
pub use link::{PubIdPlugins, SettingsLinkBuilder};
pub use repository::SettingsStore;
pub use service::{Service, SubmissionResult};
