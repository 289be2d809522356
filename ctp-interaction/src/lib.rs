//! Payment-side collaborators of the custom types.
//!
//! The reconciled types are only useful because payment handlers write into
//! them. This crate holds those writers:
//!
//! - [`InteractionRecorder`] turns a request/response exchange into an
//!   `addInterfaceInteraction` action on the interaction custom type
//! - [`FieldMappingHandler`] reads a request from a payment custom field,
//!   calls the [`PaymentGateway`] once and maps the exchange back onto the
//!   payment
//! - [`missing_custom_fields`] and [`missing_interaction_fields`] check that
//!   the bundled drafts define every field the handlers write

mod action;
mod error;
mod gateway;
mod handler;
mod kind;
mod payment;
mod recorder;

pub use action::{InteractionFields, PaymentAction, TypeResourceIdentifier};
pub use error::{GatewayError, HandlerError, HandlerResult};
pub use gateway::{GatewayExchange, PaymentGateway};
pub use handler::{
    builtin_handlers, missing_custom_fields, missing_interaction_fields, FieldMappingHandler,
    HandlerOutput,
};
pub use kind::InteractionKind;
pub use payment::{CustomFields, Payment};
pub use recorder::InteractionRecorder;
