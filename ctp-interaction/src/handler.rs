//! Table-driven payment handlers.

use crate::action::PaymentAction;
use crate::error::{HandlerError, HandlerResult};
use crate::gateway::PaymentGateway;
use crate::kind::InteractionKind;
use crate::payment::Payment;
use crate::recorder::{to_json_string, InteractionRecorder};
use ctp_types::constants::{
    FIELD_ADYEN_MERCHANT_ACCOUNT, FIELD_GET_CARBON_OFFSET_COSTS_REQUEST,
    FIELD_GET_CARBON_OFFSET_COSTS_RESPONSE, FIELD_GET_PAYMENT_METHODS_REQUEST,
    FIELD_GET_PAYMENT_METHODS_RESPONSE, FIELD_MAKE_PAYMENT_REQUEST, FIELD_MAKE_PAYMENT_RESPONSE,
    FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_REQUEST,
    FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_RESPONSE, INTERACTION_FIELD_CREATED_AT,
    INTERACTION_FIELD_REQUEST, INTERACTION_FIELD_RESPONSE, INTERACTION_FIELD_TYPE,
};
use ctp_types::TypeDraft;
use serde_json::Value;
use tracing::debug;

/// Payment update actions a handler wants applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOutput {
    pub actions: Vec<PaymentAction>,
}

/// Maps one request custom field to one gateway call and one response
/// custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMappingHandler {
    pub kind: InteractionKind,
    pub request_field: &'static str,
    pub response_field: &'static str,
}

impl FieldMappingHandler {
    pub const fn new(
        kind: InteractionKind,
        request_field: &'static str,
        response_field: &'static str,
    ) -> Self {
        Self {
            kind,
            request_field,
            response_field,
        }
    }

    pub const fn get_payment_methods() -> Self {
        Self::new(
            InteractionKind::GetPaymentMethods,
            FIELD_GET_PAYMENT_METHODS_REQUEST,
            FIELD_GET_PAYMENT_METHODS_RESPONSE,
        )
    }

    pub const fn make_payment() -> Self {
        Self::new(
            InteractionKind::MakePayment,
            FIELD_MAKE_PAYMENT_REQUEST,
            FIELD_MAKE_PAYMENT_RESPONSE,
        )
    }

    pub const fn submit_additional_payment_details() -> Self {
        Self::new(
            InteractionKind::SubmitAdditionalPaymentDetails,
            FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_REQUEST,
            FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_RESPONSE,
        )
    }

    pub const fn get_carbon_offset_costs() -> Self {
        Self::new(
            InteractionKind::GetCarbonOffsetCosts,
            FIELD_GET_CARBON_OFFSET_COSTS_REQUEST,
            FIELD_GET_CARBON_OFFSET_COSTS_RESPONSE,
        )
    }

    /// Runs the handler against `payment`.
    ///
    /// Makes exactly one gateway call. The output holds the interaction
    /// record followed by the response field update. A missing or malformed
    /// request field fails before the gateway is called.
    pub async fn execute(
        &self,
        payment: &Payment,
        gateway: &dyn PaymentGateway,
        recorder: &InteractionRecorder,
    ) -> HandlerResult<HandlerOutput> {
        let request = self.parse_request(payment)?;
        let merchant_account = string_field(payment, FIELD_ADYEN_MERCHANT_ACCOUNT)?;

        debug!(
            payment_id = %payment.id,
            kind = %self.kind,
            "calling payment gateway"
        );
        let exchange = gateway
            .call(self.kind, merchant_account, request)
            .await
            .map_err(|source| HandlerError::Gateway {
                kind: self.kind,
                source,
            })?;

        let interaction = recorder.record(&exchange.request, &exchange.response, self.kind)?;
        let response = to_json_string("response", &exchange.response)?;

        Ok(HandlerOutput {
            actions: vec![
                interaction,
                PaymentAction::SetCustomField {
                    name: self.response_field.to_string(),
                    value: response,
                },
            ],
        })
    }

    fn parse_request(&self, payment: &Payment) -> HandlerResult<Value> {
        let raw = string_field(payment, self.request_field)?;
        serde_json::from_str(raw).map_err(|source| HandlerError::InvalidRequest {
            field: self.request_field.to_string(),
            source,
        })
    }
}

fn string_field<'a>(payment: &'a Payment, name: &str) -> HandlerResult<&'a str> {
    if payment.custom.is_none() {
        return Err(HandlerError::NoCustomFields);
    }
    match payment.custom_field(name) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(HandlerError::NotAString(name.to_string())),
        None => Err(HandlerError::MissingField(name.to_string())),
    }
}

/// The handlers the extension ships with.
pub fn builtin_handlers() -> [FieldMappingHandler; 4] {
    [
        FieldMappingHandler::get_payment_methods(),
        FieldMappingHandler::make_payment(),
        FieldMappingHandler::submit_additional_payment_details(),
        FieldMappingHandler::get_carbon_offset_costs(),
    ]
}

/// Field names the handlers read or write that `payment_type` does not
/// define, in handler order and without duplicates.
///
/// The merchant account field is always required.
pub fn missing_custom_fields(
    handlers: &[FieldMappingHandler],
    payment_type: &TypeDraft,
) -> Vec<String> {
    let mut missing: Vec<String> = Vec::new();
    let wanted = std::iter::once(FIELD_ADYEN_MERCHANT_ACCOUNT).chain(
        handlers
            .iter()
            .flat_map(|h| [h.request_field, h.response_field]),
    );
    for name in wanted {
        if payment_type.field(name).is_none() && !missing.iter().any(|m| m == name) {
            missing.push(name.to_string());
        }
    }
    missing
}

/// Interaction fields the recorder writes that `interaction_type` does not
/// define.
pub fn missing_interaction_fields(interaction_type: &TypeDraft) -> Vec<String> {
    [
        INTERACTION_FIELD_TYPE,
        INTERACTION_FIELD_REQUEST,
        INTERACTION_FIELD_RESPONSE,
        INTERACTION_FIELD_CREATED_AT,
    ]
    .into_iter()
    .filter(|name| interaction_type.field(name).is_none())
    .map(str::to_string)
    .collect()
}
