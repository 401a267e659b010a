//! Posting status updates to Twitter

mod client;
mod oauth;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT, TwitterClient, TwitterConfig};
pub use oauth::OAuthSigner;

use crate::error::Result;

/// A status update as accepted by the publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedStatus {
    /// Identifier assigned by the service; `None` when nothing was posted
    pub id: Option<String>,
    /// Text of the status
    pub text: String,
}

/// Destination for the announcement
#[allow(async_fn_in_trait)]
pub trait StatusPublisher {
    /// Publish `text` as a new status update
    async fn publish(&self, text: &str) -> Result<PostedStatus>;
}

/// Publisher that only reports what would be posted
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

impl StatusPublisher for DryRunPublisher {
    async fn publish(&self, text: &str) -> Result<PostedStatus> {
        log::info!("Dry run: not posting {} character status", text.chars().count());
        Ok(PostedStatus {
            id: None,
            text: text.to_string(),
        })
    }
}
