//! Form lifecycle: populate for display, or read a submission, validate and commit

use crate::contract::SettingsFormError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;

/// HTTP method a submission arrived with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Other,
}

impl RequestMethod {
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            _ => Self::Other,
        }
    }
}

/// A submitted request: method, anti-forgery token and raw parameters
#[derive(Debug, Clone)]
pub struct Submission {
    pub method: RequestMethod,
    pub csrf_token: Option<String>,
    pub params: HashMap<String, String>,
}

impl Submission {
    /// A POST submission; `csrfToken` is taken out of `params` when present
    pub fn post<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(RequestMethod::Post, params)
    }

    pub fn new<I, K, V>(method: RequestMethod, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params: HashMap<String, String> = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let csrf_token = params.remove(CSRF_PARAM);
        Self {
            method,
            csrf_token,
            params,
        }
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Name of the anti-forgery token parameter
pub const CSRF_PARAM: &str = "csrfToken";

/// Where a form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Freshly constructed
    Unsubmitted,
    /// Loaded from the store for display
    Populated,
    /// Submitted input staged, not yet validated
    Submitted,
    /// Validation failed; the form can be resubmitted
    Invalid,
    /// Validation passed; commit is allowed
    Valid,
    /// Values persisted
    Complete,
}

impl FormState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsubmitted => "unsubmitted",
            Self::Populated => "populated",
            Self::Submitted => "submitted",
            Self::Invalid => "invalid",
            Self::Valid => "valid",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle every settings form implements
#[async_trait]
pub trait FormLifecycle: Send {
    /// Result of a successful commit
    type Outcome: Send;

    /// Load current values for display
    async fn populate(&mut self) -> Result<(), SettingsFormError>;

    /// Stage values from a submitted request
    fn read_submission(&mut self, submission: &Submission);

    /// Run all registered checks against the staged values
    fn validate(&mut self) -> Result<(), SettingsFormError>;

    /// Persist staged values; only reachable after successful validation
    async fn commit(&mut self) -> Result<Self::Outcome, SettingsFormError>;

    fn state(&self) -> FormState;

    /// Read, validate and, when valid, commit a submission
    async fn submit(&mut self, submission: &Submission) -> Result<Self::Outcome, SettingsFormError> {
        self.read_submission(submission);
        self.validate()?;
        self.commit().await
    }
}
