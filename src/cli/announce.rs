//! Announce command implementation.
//!
//! Loads the event, then either prints the tweet (dry run) or posts it with
//! the credentials from the environment.

use super::RuntimeConfig;
use crate::credentials::TwitterCredentials;
use crate::error::Result;
use crate::twitter::{DryRunPublisher, StatusPublisher, TwitterClient, TwitterConfig};
use crate::{Announcement, announce_release};

/// Execute the announcement for the configured event source
pub async fn execute_announce(config: &RuntimeConfig) -> Result<Announcement> {
    let event = config.event_source.load()?;

    // Credentials are only needed once there is something to post
    if config.dry_run || !event.is_published() {
        return announce_with(config, &event, &DryRunPublisher).await;
    }

    let credentials = TwitterCredentials::from_env(&config.credentials_var)?;
    let client = TwitterClient::new(
        TwitterConfig::new(credentials)
            .with_api_url(config.api_url.clone())
            .with_timeout(config.timeout),
    )?;

    announce_with(config, &event, &client).await
}

async fn announce_with<P: StatusPublisher>(
    config: &RuntimeConfig,
    event: &crate::ReleaseEvent,
    publisher: &P,
) -> Result<Announcement> {
    let announcement = announce_release(event, publisher).await?;
    let output = config.output();

    if let Announcement::Posted { slug, status } = &announcement {
        match &status.id {
            Some(id) => {
                let _ = output.success(&format!(
                    "Announced {}/{} release (tweet {})",
                    slug.owner, slug.repo, id
                ));
            }
            None => {
                let _ = output.info(&format!(
                    "Dry run: would announce {}/{} release ({} characters)",
                    slug.owner,
                    slug.repo,
                    status.text.chars().count()
                ));
            }
        }
        let _ = output.quote(&status.text);
    }

    Ok(announcement)
}
