use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of exchange an interface interaction records.
///
/// Stored verbatim in the interaction's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    CancelPayment,
    GetPaymentMethods,
    MakePayment,
    SubmitAdditionalPaymentDetails,
    ManualCapture,
    Refund,
    GetCarbonOffsetCosts,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 7] = [
        InteractionKind::CancelPayment,
        InteractionKind::GetPaymentMethods,
        InteractionKind::MakePayment,
        InteractionKind::SubmitAdditionalPaymentDetails,
        InteractionKind::ManualCapture,
        InteractionKind::Refund,
        InteractionKind::GetCarbonOffsetCosts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::CancelPayment => "cancelPayment",
            InteractionKind::GetPaymentMethods => "getPaymentMethods",
            InteractionKind::MakePayment => "makePayment",
            InteractionKind::SubmitAdditionalPaymentDetails => "submitAdditionalPaymentDetails",
            InteractionKind::ManualCapture => "manualCapture",
            InteractionKind::Refund => "refund",
            InteractionKind::GetCarbonOffsetCosts => "getCarbonOffsetCosts",
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
