use crate::action::{InteractionFields, PaymentAction, TypeResourceIdentifier};
use crate::error::{HandlerError, HandlerResult};
use crate::kind::InteractionKind;
use chrono::{DateTime, SecondsFormat, Utc};
use ctp_types::constants::INTERACTION_CUSTOM_TYPE_KEY;
use serde_json::Value;

/// Builds `addInterfaceInteraction` actions on the interaction custom type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecorder {
    type_key: String,
}

impl Default for InteractionRecorder {
    fn default() -> Self {
        Self::new(INTERACTION_CUSTOM_TYPE_KEY)
    }
}

impl InteractionRecorder {
    pub fn new(type_key: impl Into<String>) -> Self {
        Self {
            type_key: type_key.into(),
        }
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    /// Records an exchange timestamped now.
    pub fn record(
        &self,
        request: &Value,
        response: &Value,
        kind: InteractionKind,
    ) -> HandlerResult<PaymentAction> {
        self.record_at(request, response, kind, Utc::now())
    }

    /// Records an exchange with an explicit timestamp.
    pub fn record_at(
        &self,
        request: &Value,
        response: &Value,
        kind: InteractionKind,
        at: DateTime<Utc>,
    ) -> HandlerResult<PaymentAction> {
        Ok(PaymentAction::AddInterfaceInteraction {
            type_ref: TypeResourceIdentifier {
                key: self.type_key.clone(),
            },
            fields: InteractionFields {
                kind: kind.as_str().to_string(),
                request: to_json_string("request", request)?,
                response: to_json_string("response", response)?,
                created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        })
    }
}

pub(crate) fn to_json_string(what: &'static str, value: &Value) -> HandlerResult<String> {
    serde_json::to_string(value).map_err(|e| HandlerError::Serialization(what, e))
}
