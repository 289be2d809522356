//! Keys and custom field names shared by the type drafts and the payment
//! handlers that write into them.

/// Identifier of this integration on the platform.
pub const CTP_ADYEN_INTEGRATION: &str = "ctp-adyen-integration";

/// Key of the custom type attached to payments.
pub const PAYMENT_CUSTOM_TYPE_KEY: &str = "ctp-adyen-integration-web-components-payment-type";

/// Key of the custom type attached to payment interface interactions.
pub const INTERACTION_CUSTOM_TYPE_KEY: &str = "ctp-adyen-integration-interaction-payment-type";

// Payment custom fields.
pub const FIELD_COMMERCETOOLS_PROJECT_KEY: &str = "commercetoolsProjectKey";
pub const FIELD_ADYEN_MERCHANT_ACCOUNT: &str = "adyenMerchantAccount";
pub const FIELD_GET_PAYMENT_METHODS_REQUEST: &str = "getPaymentMethodsRequest";
pub const FIELD_GET_PAYMENT_METHODS_RESPONSE: &str = "getPaymentMethodsResponse";
pub const FIELD_MAKE_PAYMENT_REQUEST: &str = "makePaymentRequest";
pub const FIELD_MAKE_PAYMENT_RESPONSE: &str = "makePaymentResponse";
pub const FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_REQUEST: &str =
    "submitAdditionalPaymentDetailsRequest";
pub const FIELD_SUBMIT_ADDITIONAL_PAYMENT_DETAILS_RESPONSE: &str =
    "submitAdditionalPaymentDetailsResponse";
pub const FIELD_GET_CARBON_OFFSET_COSTS_REQUEST: &str = "getCarbonOffsetCostsRequest";
pub const FIELD_GET_CARBON_OFFSET_COSTS_RESPONSE: &str = "getCarbonOffsetCostsResponse";

// Interface interaction custom fields.
pub const INTERACTION_FIELD_TYPE: &str = "type";
pub const INTERACTION_FIELD_REQUEST: &str = "request";
pub const INTERACTION_FIELD_RESPONSE: &str = "response";
pub const INTERACTION_FIELD_CREATED_AT: &str = "createdAt";
