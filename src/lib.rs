//! # release_tweet
//!
//! Announce published GitHub releases on Twitter from a CI workflow.
//!
//! The crate reads the `release` webhook payload the CI runner provides,
//! renders a short announcement and posts it as a single status update:
//!
//! ```text
//! New #{repo} release: v{tag_name}. {html_url}
//!
//! {body}
//! ```
//!
//! Text longer than 280 characters is cut to 279 and ends with `…`. Events
//! whose action is not `published` are ignored.
//!
//! ## Usage
//!
//! ```bash
//! release_tweet                       # uses GITHUB_EVENT_PATH and the TWITTER secret
//! release_tweet --example --dry-run   # print the tweet for the built-in payload
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod credentials;
pub mod error;
pub mod event;
pub mod tweet;
pub mod twitter;

pub use cli::Args;
pub use credentials::TwitterCredentials;
pub use error::{Result, TweetError};
pub use event::{EventSource, Release, ReleaseEvent, RepoSlug};
pub use twitter::{DryRunPublisher, PostedStatus, StatusPublisher, TwitterClient, TwitterConfig};

/// Outcome of processing one release event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// The event was not a publication; nothing was posted
    Skipped {
        /// The event's action
        action: String,
    },
    /// The announcement was handed to the publisher
    Posted {
        /// Repository the release belongs to
        slug: RepoSlug,
        /// Status returned by the publisher
        status: PostedStatus,
    },
}

/// Render the announcement for an event, or `None` if it is not a publication
pub fn prepare_announcement(event: &ReleaseEvent) -> Result<Option<(RepoSlug, String)>> {
    if !event.is_published() {
        return Ok(None);
    }

    let release = event.release()?;
    let slug = release.repo_slug()?;
    let text = tweet::release_tweet(&slug, release);
    Ok(Some((slug, text)))
}

/// Announce a release event through `publisher`.
///
/// The publisher is called at most once, and never for events whose action
/// is not `published`.
pub async fn announce_release<P: StatusPublisher>(
    event: &ReleaseEvent,
    publisher: &P,
) -> Result<Announcement> {
    let Some((slug, text)) = prepare_announcement(event)? else {
        log::info!("Ignoring release event with action '{}'", event.action);
        return Ok(Announcement::Skipped {
            action: event.action.clone(),
        });
    };

    log::info!("Announcing {}/{} release", slug.owner, slug.repo);
    let status = publisher.publish(&text).await?;
    Ok(Announcement::Posted { slug, status })
}
