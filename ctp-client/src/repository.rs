use crate::error::ClientResult;
use async_trait::async_trait;
use ctp_types::{ActionBatch, RemoteType, TypeDraft};

/// Outcome of a lookup by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

/// Access to the platform's custom type collection.
#[async_trait]
pub trait TypeRepository: Send + Sync {
    /// Fetches the type with the given key.
    ///
    /// A missing resource is `Ok(Lookup::NotFound)`; every other failure is
    /// an error.
    async fn fetch_by_key(&self, key: &str) -> ClientResult<Lookup<RemoteType>>;

    /// Creates a type from a draft.
    async fn create(&self, draft: &TypeDraft) -> ClientResult<RemoteType>;

    /// Applies a batch of actions to the type `id`, guarded by `version`.
    async fn update(&self, id: &str, version: u64, actions: &ActionBatch)
        -> ClientResult<RemoteType>;
}
