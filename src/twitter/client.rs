//! Twitter API client for posting status updates.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::oauth::OAuthSigner;
use super::{PostedStatus, StatusPublisher};
use crate::credentials::TwitterCredentials;
use crate::error::{PublishError, Result};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.twitter.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CREATE_TWEET_ENDPOINT: &str = "/2/tweets";

/// Client configuration
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// OAuth 1.0a user credentials
    pub credentials: TwitterCredentials,
    /// API base URL
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl TwitterConfig {
    /// Configuration for the public API with default timeout
    pub fn new(credentials: TwitterCredentials) -> Self {
        Self {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct CreateTweetRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

/// Posts status updates with OAuth 1.0a user authentication
#[derive(Debug)]
pub struct TwitterClient {
    client: Client,
    base_url: String,
    signer: OAuthSigner,
}

impl TwitterClient {
    /// Create a client from configuration
    pub fn new(config: TwitterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("release_tweet/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PublishError::from)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            signer: OAuthSigner::new(config.credentials),
        })
    }

    /// Post `text` as a new status update. Exactly one request is made.
    pub async fn create_tweet(&self, text: &str) -> Result<PostedStatus> {
        let url = format!("{}{}", self.base_url, CREATE_TWEET_ENDPOINT);
        let auth_header = self.signer.authorization("POST", &url, &[])?;

        log::debug!("POST {} ({} chars)", url, text.chars().count());

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, auth_header)
            .json(&CreateTweetRequest { text })
            .send()
            .await
            .map_err(PublishError::from)?;

        let created: CreateTweetResponse = handle_response(response).await?;
        Ok(PostedStatus {
            id: Some(created.data.id),
            text: created.data.text,
        })
    }
}

impl StatusPublisher for TwitterClient {
    async fn publish(&self, text: &str) -> Result<PostedStatus> {
        self.create_tweet(text).await
    }
}

async fn handle_response<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(PublishError::from)?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&bytes).map_err(PublishError::from)?);
    }

    let body: ApiErrorResponse = serde_json::from_slice(&bytes).unwrap_or_default();
    let message = body
        .detail
        .or(body.title)
        .or_else(|| body.errors.into_iter().find_map(|e| e.message))
        .unwrap_or_else(|| {
            let raw = String::from_utf8_lossy(&bytes).trim().to_string();
            if raw.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                raw
            }
        });

    log::debug!("Twitter API rejected request with {}: {}", status, message);

    Err(PublishError::Api {
        status: status.as_u16(),
        message,
    }
    .into())
}
