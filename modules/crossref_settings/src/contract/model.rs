//! Contract models for crossref settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use std::fmt;

/// Context (journal) identifier under which settings are namespaced
pub type ContextId = i64;

/// Storage type tag of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Bool,
}

impl FieldKind {
    /// Type tag as stored next to the serialized value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
        }
    }

    /// Parse a stored type tag
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Self::String),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// Value staged when nothing is stored or submitted
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::String => FieldValue::Text(String::new()),
            Self::Bool => FieldValue::Bool(false),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extra syntactic rule a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    None,
    Email,
}

/// Static description of one configurable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Setting name, also the POST parameter name
    pub name: &'static str,
    /// Storage type tag
    pub kind: FieldKind,
    /// Whether an empty value fails validation
    pub required: bool,
    /// Additional format rule
    pub rule: FieldRule,
}

/// Current value of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Borrow the text of a string value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// True for empty (or whitespace-only) text and for `false`
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(b) => !b,
        }
    }

    /// Convert the value to the representation selected by `kind`
    pub fn coerce(self, kind: FieldKind) -> Self {
        match (self, kind) {
            (v @ Self::Text(_), FieldKind::String) | (v @ Self::Bool(_), FieldKind::Bool) => v,
            (Self::Bool(b), FieldKind::String) => Self::Text(if b { "1" } else { "0" }.to_string()),
            (Self::Text(s), FieldKind::Bool) => Self::Bool(parse_flag(&s)),
        }
    }

    /// JSON form used in template data
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Text(s) => serde_json::Value::String(s.clone()),
            Self::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

/// Interpret a checkbox or stored flag
///
/// Absent, empty, "0", "false" and "off" are false; anything else is true.
pub fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off"
    )
}

/// One value to be written by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: FieldValue,
}

/// Opaque reference to the plugin that owns the settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginHandle {
    /// Registry name, used to namespace stored settings
    pub name: String,
    /// Human readable plugin name
    pub display_name: String,
    /// Template rendered for the settings form
    pub template_resource: String,
}

impl PluginHandle {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            template_resource: "settingsForm.tpl".to_string(),
        }
    }

    /// The Crossref export plugin
    pub fn crossref() -> Self {
        Self::new("crossrefexportplugin", "Crossref XML Export Plugin")
    }
}

/// Typed view of the Crossref settings of one context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossrefSettings {
    pub depositor_name: String,
    pub depositor_email: String,
    pub username: String,
    pub password: String,
    pub automatic_registration: bool,
    pub test_mode: bool,
}

/// Launcher for another plugin's settings modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLinkAction {
    /// Action identifier
    pub id: String,
    /// Link label
    pub label: String,
    /// URL of the settings grid to load in the modal
    pub url: String,
    /// Modal title
    pub modal_title: String,
}

/// Success notification emitted once settings are saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub context_id: ContextId,
    pub message: String,
}
