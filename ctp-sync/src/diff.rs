//! Diff engine for custom types.

use ctp_types::{
    EnumValue, FieldDefinition, FieldType, LocalizedEnumValue, RemoteType, TypeDraft,
    UpdateAction,
};
use std::collections::HashSet;

/// Computes the update actions that turn a remote type into a draft.
///
/// Implementations must be deterministic and free of side effects: the same
/// pair of inputs always yields the same action sequence.
pub trait DiffEngine: Send + Sync {
    fn build_actions(&self, desired: &TypeDraft, current: &RemoteType) -> Vec<UpdateAction>;
}

/// The standard diff for custom types.
///
/// Emits, in order: name and description changes, field removals (in remote
/// order), field additions (in draft order), per-field label, input hint
/// and enum value changes (in draft order), and finally a field order
/// change when the resulting order still differs from the draft.
///
/// Changes the platform cannot express produce no action: a field's value
/// type, its `required` flag and the type's `resourceTypeIds` are fixed
/// once created.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeDiff;

impl DiffEngine for TypeDiff {
    fn build_actions(&self, desired: &TypeDraft, current: &RemoteType) -> Vec<UpdateAction> {
        let mut actions = Vec::new();

        if desired.name != current.name {
            actions.push(UpdateAction::ChangeName {
                name: desired.name.clone(),
            });
        }
        if desired.description != current.description {
            actions.push(UpdateAction::SetDescription {
                description: desired.description.clone(),
            });
        }

        let desired_names: HashSet<&str> = desired.field_names().into_iter().collect();
        let current_names: HashSet<&str> = current.field_names().into_iter().collect();

        for field in &current.field_definitions {
            if !desired_names.contains(field.name.as_str()) {
                actions.push(UpdateAction::RemoveFieldDefinition {
                    field_name: field.name.clone(),
                });
            }
        }

        for field in &desired.field_definitions {
            if !current_names.contains(field.name.as_str()) {
                actions.push(UpdateAction::AddFieldDefinition {
                    field_definition: field.clone(),
                });
            }
        }

        for wanted in &desired.field_definitions {
            if let Some(existing) = current.field(&wanted.name) {
                field_actions(existing, wanted, &mut actions);
            }
        }

        let desired_order = desired.field_names();
        let mut resulting_order: Vec<&str> = current
            .field_names()
            .into_iter()
            .filter(|name| desired_names.contains(name))
            .collect();
        resulting_order.extend(
            desired_order
                .iter()
                .copied()
                .filter(|name| !current_names.contains(name)),
        );
        if resulting_order != desired_order {
            actions.push(UpdateAction::ChangeFieldDefinitionOrder {
                field_names: desired_order.iter().map(|n| n.to_string()).collect(),
            });
        }

        actions
    }
}

fn field_actions(existing: &FieldDefinition, wanted: &FieldDefinition, out: &mut Vec<UpdateAction>) {
    if existing.label != wanted.label {
        out.push(UpdateAction::ChangeLabel {
            field_name: wanted.name.clone(),
            label: wanted.label.clone(),
        });
    }

    if let Some(hint) = wanted.input_hint {
        if existing.input_hint != Some(hint) {
            out.push(UpdateAction::ChangeInputHint {
                field_name: wanted.name.clone(),
                input_hint: hint,
            });
        }
    }

    match (enum_values(&existing.field_type), enum_values(&wanted.field_type)) {
        (Some(EnumValues::Plain(have)), Some(EnumValues::Plain(want))) => {
            plain_enum_actions(&wanted.name, have, want, out);
        }
        (Some(EnumValues::Localized(have)), Some(EnumValues::Localized(want))) => {
            localized_enum_actions(&wanted.name, have, want, out);
        }
        _ => {}
    }
}

enum EnumValues<'a> {
    Plain(&'a [EnumValue]),
    Localized(&'a [LocalizedEnumValue]),
}

/// Enum values of a field, looking through one level of `Set`.
fn enum_values(field_type: &FieldType) -> Option<EnumValues<'_>> {
    match field_type {
        FieldType::Enum { values } => Some(EnumValues::Plain(values)),
        FieldType::LocalizedEnum { values } => Some(EnumValues::Localized(values)),
        FieldType::Set { element_type } => match element_type.as_ref() {
            FieldType::Enum { values } => Some(EnumValues::Plain(values)),
            FieldType::LocalizedEnum { values } => Some(EnumValues::Localized(values)),
            _ => None,
        },
        _ => None,
    }
}

fn plain_enum_actions(
    field_name: &str,
    have: &[EnumValue],
    want: &[EnumValue],
    out: &mut Vec<UpdateAction>,
) {
    for value in want {
        match have.iter().find(|v| v.key == value.key) {
            None => out.push(UpdateAction::AddEnumValue {
                field_name: field_name.to_string(),
                value: value.clone(),
            }),
            Some(existing) if existing.label != value.label => {
                out.push(UpdateAction::ChangeEnumValueLabel {
                    field_name: field_name.to_string(),
                    value: value.clone(),
                });
            }
            Some(_) => {}
        }
    }
}

fn localized_enum_actions(
    field_name: &str,
    have: &[LocalizedEnumValue],
    want: &[LocalizedEnumValue],
    out: &mut Vec<UpdateAction>,
) {
    for value in want {
        match have.iter().find(|v| v.key == value.key) {
            None => out.push(UpdateAction::AddLocalizedEnumValue {
                field_name: field_name.to_string(),
                value: value.clone(),
            }),
            Some(existing) if existing.label != value.label => {
                out.push(UpdateAction::ChangeLocalizedEnumValueLabel {
                    field_name: field_name.to_string(),
                    value: value.clone(),
                });
            }
            Some(_) => {}
        }
    }
}
