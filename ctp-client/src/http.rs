//! HTTP implementation of [`TypeRepository`] against the platform API.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::repository::{Lookup, TypeRepository};
use async_trait::async_trait;
use ctp_types::{ActionBatch, RemoteType, TypeDraft, UpdateAction};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

const TYPES: &str = "types";

#[derive(Serialize)]
struct UpdateRequest<'a> {
    version: u64,
    actions: &'a [UpdateAction],
}

/// reqwest-based client for one platform project.
pub struct CtpClient {
    config: ClientConfig,
    client: Client,
}

impl CtpClient {
    /// Creates a client after validating the configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn project_key(&self) -> &str {
        &self.config.project_key
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.config.project_url(), collection)
    }

    async fn get_by_key<T: DeserializeOwned>(
        &self,
        collection: &str,
        key: &str,
    ) -> ClientResult<Lookup<T>> {
        let url = format!(
            "{}/key={}",
            self.collection_url(collection),
            urlencoding::encode(key)
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} with key {} not found", collection, key);
            return Ok(Lookup::NotFound);
        }
        self.handle_response(response).await.map(Lookup::Found)
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.access_token)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&body)
                .map_err(|e| ClientError::Decode(format!("failed to parse response: {e}")));
        }

        warn!("platform responded with {}", status);
        match status {
            StatusCode::CONFLICT => Err(ClientError::Conflict(body)),
            _ => Err(ClientError::Status {
                status: status.as_u16(),
                body: if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body
                },
            }),
        }
    }
}

#[async_trait]
impl TypeRepository for CtpClient {
    async fn fetch_by_key(&self, key: &str) -> ClientResult<Lookup<RemoteType>> {
        self.get_by_key(TYPES, key).await
    }

    async fn create(&self, draft: &TypeDraft) -> ClientResult<RemoteType> {
        self.post(&self.collection_url(TYPES), draft).await
    }

    async fn update(
        &self,
        id: &str,
        version: u64,
        actions: &ActionBatch,
    ) -> ClientResult<RemoteType> {
        let url = format!("{}/{}", self.collection_url(TYPES), urlencoding::encode(id));
        let body = UpdateRequest {
            version,
            actions: actions.actions(),
        };
        self.post(&url, &body).await
    }
}
