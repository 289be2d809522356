//! Remote client for the commercetools `types` collection.
//!
//! The reconciler talks to the platform only through [`TypeRepository`],
//! whose lookup returns a tagged [`Lookup`] instead of signalling "not
//! found" through an error. Two implementations are provided:
//!
//! - [`CtpClient`]: reqwest-based HTTP client for the platform API
//! - [`InMemoryTypeRepository`]: a versioned in-process store that applies
//!   update actions the way the platform does, for tests and dry runs

mod config;
mod error;
mod http;
mod memory;
mod repository;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CtpClient;
pub use memory::{FailurePoint, InMemoryTypeRepository, RecordedCall};
pub use repository::{Lookup, TypeRepository};
