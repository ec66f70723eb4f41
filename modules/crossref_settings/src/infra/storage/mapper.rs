//! Entity to model mappers
//!
//! Values are serialized by type tag: strings as-is, bools as "1"/"0".

use super::entity;
use crate::contract::{model::parse_flag, ContextId, FieldKind, FieldValue};

/// Serialize a value for the `setting_value` column
pub fn serialize_value(value: &FieldValue, kind: FieldKind) -> String {
    match value.clone().coerce(kind) {
        FieldValue::Text(s) => s,
        FieldValue::Bool(b) => (if b { "1" } else { "0" }).to_string(),
    }
}

/// Deserialize a stored value according to its type tag
///
/// Unknown tags fall back to plain text.
pub fn deserialize_value(raw: Option<&str>, tag: &str) -> FieldValue {
    match FieldKind::parse(tag) {
        Some(FieldKind::Bool) => FieldValue::Bool(raw.is_some_and(parse_flag)),
        Some(FieldKind::String) | None => FieldValue::text(raw.unwrap_or_default()),
    }
}

impl From<entity::Model> for FieldValue {
    fn from(entity: entity::Model) -> Self {
        deserialize_value(entity.setting_value.as_deref(), &entity.setting_type)
    }
}

/// Active model for one setting row
pub fn to_active_model(
    plugin_name: &str,
    context_id: ContextId,
    key: &str,
    value: &FieldValue,
    kind: FieldKind,
) -> entity::ActiveModel {
    use sea_orm::ActiveValue::*;

    entity::ActiveModel {
        plugin_name: Set(plugin_name.to_string()),
        context_id: Set(context_id),
        setting_name: Set(key.to_string()),
        setting_value: Set(Some(serialize_value(value, kind))),
        setting_type: Set(kind.as_str().to_string()),
    }
}
