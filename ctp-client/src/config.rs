use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection settings for the platform API.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Project the types live in; also used as the logging correlation key.
    pub project_key: String,
    /// Base URL of the platform API, without the project segment.
    pub api_url: String,
    /// Bearer token sent with every request.
    pub access_token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            project_key: String::new(),
            api_url: "https://api.europe-west1.gcp.commercetools.com".to_string(),
            access_token: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Checks that every setting needed to reach the platform is present.
    pub fn validate(&self) -> ClientResult<()> {
        if self.project_key.trim().is_empty() {
            return Err(ClientError::Config("project key is required".to_string()));
        }
        if self.access_token.trim().is_empty() {
            return Err(ClientError::Config("access token is required".to_string()));
        }
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "api url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// `{api_url}/{project_key}` without a trailing slash, with the project
    /// key percent-encoded.
    pub fn project_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            urlencoding::encode(&self.project_key)
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_key", &self.project_key)
            .field("api_url", &self.api_url)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
