//! In-process [`TypeRepository`] with platform-like versioning.
//!
//! Types are kept per key. Every write bumps the version, updates are
//! rejected with a conflict when the supplied version is stale, and update
//! actions are applied all-or-nothing with the same validation the platform
//! performs. Every call is recorded so callers can assert on traffic.

use crate::error::{ClientError, ClientResult};
use crate::repository::{Lookup, TypeRepository};
use async_trait::async_trait;
use ctp_types::{
    ActionBatch, EnumValue, FieldType, LocalizedEnumValue, RemoteType, TypeDraft, UpdateAction,
};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

/// A call received by an [`InMemoryTypeRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    FetchByKey {
        key: String,
    },
    Create {
        key: String,
    },
    Update {
        id: String,
        version: u64,
        actions: Vec<UpdateAction>,
    },
}

/// Operation an injected failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePoint {
    Fetch,
    Create,
    Update,
}

#[derive(Default)]
struct State {
    types: BTreeMap<String, RemoteType>,
    calls: Vec<RecordedCall>,
    failures: HashMap<FailurePoint, (u16, String)>,
    next_id: u64,
}

impl State {
    fn injected(&self, point: FailurePoint) -> ClientResult<()> {
        match self.failures.get(&point) {
            Some((409, body)) => Err(ClientError::Conflict(body.clone())),
            Some((status, body)) => Err(ClientError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Versioned in-memory custom type store.
#[derive(Default)]
pub struct InMemoryTypeRepository {
    state: Mutex<State>,
}

impl InMemoryTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing remote type.
    pub async fn insert(&self, remote: RemoteType) {
        let mut state = self.state.lock().await;
        state.types.insert(remote.key.clone(), remote);
    }

    /// Current stored copy of the type with `key`.
    pub async fn get(&self, key: &str) -> Option<RemoteType> {
        self.state.lock().await.types.get(key).cloned()
    }

    /// All calls received so far, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of create and update calls received so far.
    pub async fn write_count(&self) -> usize {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| !matches!(c, RecordedCall::FetchByKey { .. }))
            .count()
    }

    pub async fn clear_calls(&self) {
        self.state.lock().await.calls.clear();
    }

    /// Makes every call at `point` fail with `status` until cleared.
    ///
    /// A 409 is reported as [`ClientError::Conflict`], anything else as
    /// [`ClientError::Status`].
    pub async fn fail_on(&self, point: FailurePoint, status: u16, body: impl Into<String>) {
        self.state
            .lock()
            .await
            .failures
            .insert(point, (status, body.into()));
    }

    pub async fn clear_failures(&self) {
        self.state.lock().await.failures.clear();
    }

    /// Simulates a write by another process: bumps the version of `key`
    /// without changing its definition.
    pub async fn touch(&self, key: &str) -> Option<u64> {
        let mut state = self.state.lock().await;
        let remote = state.types.get_mut(key)?;
        remote.version += 1;
        Some(remote.version)
    }
}

#[async_trait]
impl TypeRepository for InMemoryTypeRepository {
    async fn fetch_by_key(&self, key: &str) -> ClientResult<Lookup<RemoteType>> {
        let mut state = self.state.lock().await;
        state.calls.push(RecordedCall::FetchByKey {
            key: key.to_string(),
        });
        state.injected(FailurePoint::Fetch)?;

        Ok(match state.types.get(key) {
            Some(remote) => Lookup::Found(remote.clone()),
            None => Lookup::NotFound,
        })
    }

    async fn create(&self, draft: &TypeDraft) -> ClientResult<RemoteType> {
        let mut state = self.state.lock().await;
        state.calls.push(RecordedCall::Create {
            key: draft.key.clone(),
        });
        state.injected(FailurePoint::Create)?;

        if state.types.contains_key(&draft.key) {
            return Err(bad_request(
                "DuplicateValue",
                format!("A duplicate value '\"{}\"' exists for field 'key'.", draft.key),
            ));
        }

        state.next_id += 1;
        let remote = RemoteType::from_draft(draft, format!("type-{}", state.next_id), 1);
        state.types.insert(remote.key.clone(), remote.clone());
        Ok(remote)
    }

    async fn update(
        &self,
        id: &str,
        version: u64,
        actions: &ActionBatch,
    ) -> ClientResult<RemoteType> {
        let mut state = self.state.lock().await;
        state.calls.push(RecordedCall::Update {
            id: id.to_string(),
            version,
            actions: actions.actions().to_vec(),
        });
        state.injected(FailurePoint::Update)?;

        let stored = state
            .types
            .values_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ClientError::Status {
                status: 404,
                body: json!({
                    "statusCode": 404,
                    "message": format!("The Resource with ID '{id}' was not found."),
                })
                .to_string(),
            })?;

        if stored.version != version {
            return Err(ClientError::Conflict(
                json!({
                    "statusCode": 409,
                    "message": format!(
                        "Object {id} has a different version than expected. Expected: {version} - Actual: {}.",
                        stored.version
                    ),
                    "errors": [{ "code": "ConcurrentModification", "currentVersion": stored.version }],
                })
                .to_string(),
            ));
        }

        let mut next = stored.clone();
        for action in actions.actions() {
            apply_action(&mut next, action)?;
        }
        next.version += 1;
        *stored = next.clone();
        Ok(next)
    }
}

fn bad_request(code: &str, message: String) -> ClientError {
    ClientError::Status {
        status: 400,
        body: json!({
            "statusCode": 400,
            "message": message,
            "errors": [{ "code": code, "message": message }],
        })
        .to_string(),
    }
}

fn missing_field(name: &str) -> ClientError {
    bad_request(
        "InvalidOperation",
        format!("Field definition '{name}' does not exist."),
    )
}

/// Applies one action to a type, mirroring platform validation.
fn apply_action(remote: &mut RemoteType, action: &UpdateAction) -> ClientResult<()> {
    match action {
        UpdateAction::ChangeName { name } => remote.name = name.clone(),
        UpdateAction::SetDescription { description } => remote.description = description.clone(),
        UpdateAction::AddFieldDefinition { field_definition } => {
            if remote.field(&field_definition.name).is_some() {
                return Err(bad_request(
                    "DuplicateFieldDefinition",
                    format!("Field definition '{}' already exists.", field_definition.name),
                ));
            }
            remote.field_definitions.push(field_definition.clone());
        }
        UpdateAction::RemoveFieldDefinition { field_name } => {
            let before = remote.field_definitions.len();
            remote.field_definitions.retain(|f| &f.name != field_name);
            if remote.field_definitions.len() == before {
                return Err(missing_field(field_name));
            }
        }
        UpdateAction::ChangeLabel { field_name, label } => {
            field_mut(remote, field_name)?.label = label.clone();
        }
        UpdateAction::ChangeInputHint {
            field_name,
            input_hint,
        } => {
            field_mut(remote, field_name)?.input_hint = Some(*input_hint);
        }
        UpdateAction::AddEnumValue { field_name, value } => {
            match plain_values(&mut field_mut(remote, field_name)?.field_type) {
                Some(values) if values.iter().all(|v| v.key != value.key) => {
                    values.push(value.clone());
                }
                _ => return Err(invalid_enum_operation(field_name, &value.key)),
            }
        }
        UpdateAction::AddLocalizedEnumValue { field_name, value } => {
            match localized_values(&mut field_mut(remote, field_name)?.field_type) {
                Some(values) if values.iter().all(|v| v.key != value.key) => {
                    values.push(value.clone());
                }
                _ => return Err(invalid_enum_operation(field_name, &value.key)),
            }
        }
        UpdateAction::ChangeEnumValueLabel { field_name, value } => {
            let existing = plain_values(&mut field_mut(remote, field_name)?.field_type)
                .and_then(|values| values.iter_mut().find(|v| v.key == value.key));
            match existing {
                Some(existing) => existing.label = value.label.clone(),
                None => return Err(invalid_enum_operation(field_name, &value.key)),
            }
        }
        UpdateAction::ChangeLocalizedEnumValueLabel { field_name, value } => {
            let existing = localized_values(&mut field_mut(remote, field_name)?.field_type)
                .and_then(|values| values.iter_mut().find(|v| v.key == value.key));
            match existing {
                Some(existing) => existing.label = value.label.clone(),
                None => return Err(invalid_enum_operation(field_name, &value.key)),
            }
        }
        UpdateAction::ChangeFieldDefinitionOrder { .. } => {
            return Err(bad_request(
                "InvalidJsonInput",
                "Request body does not contain valid JSON. 'fieldNames' must be a list of field names."
                    .to_string(),
            ));
        }
    }
    Ok(())
}

fn field_mut<'a>(
    remote: &'a mut RemoteType,
    name: &str,
) -> ClientResult<&'a mut ctp_types::FieldDefinition> {
    remote
        .field_definitions
        .iter_mut()
        .find(|f| f.name == name)
        .ok_or_else(|| missing_field(name))
}

/// Plain enum values of a field, looking through one level of `Set`.
fn plain_values(field_type: &mut FieldType) -> Option<&mut Vec<EnumValue>> {
    match field_type {
        FieldType::Enum { values } => Some(values),
        FieldType::Set { element_type } => match element_type.as_mut() {
            FieldType::Enum { values } => Some(values),
            _ => None,
        },
        _ => None,
    }
}

fn localized_values(field_type: &mut FieldType) -> Option<&mut Vec<LocalizedEnumValue>> {
    match field_type {
        FieldType::LocalizedEnum { values } => Some(values),
        FieldType::Set { element_type } => match element_type.as_mut() {
            FieldType::LocalizedEnum { values } => Some(values),
            _ => None,
        },
        _ => None,
    }
}

fn invalid_enum_operation(field_name: &str, value_key: &str) -> ClientError {
    bad_request(
        "InvalidOperation",
        format!("Cannot apply enum value '{value_key}' to field '{field_name}'."),
    )
}
