//! Field descriptor table
//!
//! Loading, input reading, validation and persistence all iterate this table;
//! no other key ever flows through the form.

use crate::contract::{FieldDescriptor, FieldKind, FieldRule};

pub const DEPOSITOR_NAME: &str = "depositorName";
pub const DEPOSITOR_EMAIL: &str = "depositorEmail";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const AUTOMATIC_REGISTRATION: &str = "automaticRegistration";
pub const TEST_MODE: &str = "testMode";

static FORM_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor {
        name: DEPOSITOR_NAME,
        kind: FieldKind::String,
        required: true,
        rule: FieldRule::None,
    },
    FieldDescriptor {
        name: DEPOSITOR_EMAIL,
        kind: FieldKind::String,
        required: true,
        rule: FieldRule::Email,
    },
    FieldDescriptor {
        name: USERNAME,
        kind: FieldKind::String,
        required: false,
        rule: FieldRule::None,
    },
    FieldDescriptor {
        name: PASSWORD,
        kind: FieldKind::String,
        required: false,
        rule: FieldRule::None,
    },
    FieldDescriptor {
        name: AUTOMATIC_REGISTRATION,
        kind: FieldKind::Bool,
        required: false,
        rule: FieldRule::None,
    },
    FieldDescriptor {
        name: TEST_MODE,
        kind: FieldKind::Bool,
        required: false,
        rule: FieldRule::None,
    },
];

/// All configurable fields, in display order
pub fn form_fields() -> &'static [FieldDescriptor] {
    &FORM_FIELDS
}

/// Field name to storage type, in display order
pub fn form_field_types() -> Vec<(&'static str, FieldKind)> {
    FORM_FIELDS.iter().map(|d| (d.name, d.kind)).collect()
}

pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FORM_FIELDS.iter().find(|d| d.name == name)
}

/// Whether a field may be left empty
///
/// Unknown names are not form fields and are never optional.
pub fn is_optional(name: &str) -> bool {
    descriptor(name).is_some_and(|d| !d.required)
}
