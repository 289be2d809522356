use crate::error::GatewayError;
use crate::kind::InteractionKind;
use async_trait::async_trait;
use serde_json::Value;

/// The request actually sent to the payment processor and its response.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayExchange {
    pub request: Value,
    pub response: Value,
}

/// Payment processor collaborator.
///
/// Implementations make exactly one remote call per invocation and return
/// the request as sent (it may be enriched with the merchant account) along
/// with the response.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn call(
        &self,
        kind: InteractionKind,
        merchant_account: &str,
        request: Value,
    ) -> Result<GatewayExchange, GatewayError>;
}
