//! Custom type definitions: the desired draft and the platform's copy.

use crate::localized::LocalizedString;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Desired state of a custom type.
///
/// The `key` is the only value that correlates a draft with the remote
/// resource; no update action can change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDraft {
    pub key: String,
    pub name: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub resource_type_ids: Vec<String>,
    #[serde(default)]
    pub field_definitions: Vec<FieldDefinition>,
}

impl TypeDraft {
    /// Parses and validates a draft from its JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let draft: Self = serde_json::from_str(json)?;
        draft.validate()?;
        Ok(draft)
    }

    /// Checks that the key is set and field names are unique.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(Error::EmptyKey);
        }
        let mut seen = HashSet::new();
        for field in &self.field_definitions {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::DuplicateField {
                    key: self.key.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Looks up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.field_definitions.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.field_definitions.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A custom type as stored on the platform.
///
/// Same shape as [`TypeDraft`] plus the platform-assigned `id` and the
/// optimistic-concurrency `version`. Any other attributes the platform
/// returns (timestamps, audit data) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteType {
    pub id: String,
    pub version: u64,
    pub key: String,
    pub name: LocalizedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    #[serde(default)]
    pub resource_type_ids: Vec<String>,
    #[serde(default)]
    pub field_definitions: Vec<FieldDefinition>,
}

impl RemoteType {
    /// Builds the remote representation of a freshly created draft.
    pub fn from_draft(draft: &TypeDraft, id: impl Into<String>, version: u64) -> Self {
        Self {
            id: id.into(),
            version,
            key: draft.key.clone(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            resource_type_ids: draft.resource_type_ids.clone(),
            field_definitions: draft.field_definitions.clone(),
        }
    }

    /// The definition part of this resource, without `id` and `version`.
    pub fn as_draft(&self) -> TypeDraft {
        TypeDraft {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            resource_type_ids: self.resource_type_ids.clone(),
            field_definitions: self.field_definitions.clone(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.field_definitions.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.field_definitions.iter().map(|f| f.name.as_str()).collect()
    }
}

/// A named field of a custom type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    pub label: LocalizedString,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_hint: Option<InputHint>,
}

impl FieldDefinition {
    /// Shorthand for an optional single-line string field.
    pub fn string(name: impl Into<String>, label: LocalizedString) -> Self {
        Self {
            name: name.into(),
            label,
            required: false,
            field_type: FieldType::String,
            input_hint: Some(InputHint::SingleLine),
        }
    }

    /// Shorthand for an optional multi-line string field, used for
    /// serialized request and response payloads.
    pub fn text(name: impl Into<String>, label: LocalizedString) -> Self {
        Self {
            input_hint: Some(InputHint::MultiLine),
            ..Self::string(name, label)
        }
    }

    /// Shorthand for an optional field of any other type.
    pub fn of_type(name: impl Into<String>, label: LocalizedString, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label,
            required: false,
            field_type,
            input_hint: None,
        }
    }
}

/// Editor hint for string-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputHint {
    SingleLine,
    MultiLine,
}

/// The value type of a field definition, tagged by `name` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum FieldType {
    Boolean,
    String,
    LocalizedString,
    Number,
    Money,
    Date,
    Time,
    DateTime,
    Enum {
        values: Vec<EnumValue>,
    },
    LocalizedEnum {
        values: Vec<LocalizedEnumValue>,
    },
    Reference {
        #[serde(rename = "referenceTypeId")]
        reference_type_id: String,
    },
    Set {
        #[serde(rename = "elementType")]
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// The wire name of this type, ignoring any payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Boolean => "Boolean",
            FieldType::String => "String",
            FieldType::LocalizedString => "LocalizedString",
            FieldType::Number => "Number",
            FieldType::Money => "Money",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::DateTime => "DateTime",
            FieldType::Enum { .. } => "Enum",
            FieldType::LocalizedEnum { .. } => "LocalizedEnum",
            FieldType::Reference { .. } => "Reference",
            FieldType::Set { .. } => "Set",
        }
    }
}

/// A value of a plain `Enum` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub key: String,
    pub label: String,
}

/// A value of a `LocalizedEnum` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedEnumValue {
    pub key: String,
    pub label: LocalizedString,
}
