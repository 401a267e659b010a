//! GitHub release event payloads.
//!
//! Only the handful of fields needed to announce a release are modelled;
//! everything else in the webhook document is ignored.

mod source;

pub use source::EventSource;

use crate::error::{EventError, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Action value that triggers an announcement
pub const PUBLISHED_ACTION: &str = "published";

/// A `release` webhook event
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    /// Event action (`published`, `created`, `edited`, ...)
    pub action: String,
    /// The release resource; absent on non-release events
    #[serde(default)]
    pub release: Option<Release>,
}

/// The release resource inside a release event
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// API URL, `https://api.github.com/repos/{owner}/{repo}/releases/{id}`
    pub url: String,
    /// Version tag
    pub tag_name: String,
    /// Public release page
    pub html_url: String,
    /// Release notes; GitHub sends `null` when empty
    #[serde(default)]
    pub body: Option<String>,
}

/// Repository coordinates extracted from a release URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl ReleaseEvent {
    /// Parse an event from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(EventError::from)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON document
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value).map_err(EventError::from)?)
    }

    /// Whether this event should be announced
    pub fn is_published(&self) -> bool {
        self.action == PUBLISHED_ACTION
    }

    /// The release resource, required once the event is known to be published
    pub fn release(&self) -> Result<&Release> {
        self.release.as_ref().ok_or_else(|| EventError::MissingRelease.into())
    }
}

impl Release {
    /// Extract the owner and repository name from the API URL
    pub fn repo_slug(&self) -> Result<RepoSlug> {
        RepoSlug::from_release_url(&self.url)
    }

    /// Release notes, with a missing body treated as empty
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

impl RepoSlug {
    /// Match the `repos/<owner>/<repo>/` segments of a release API URL.
    ///
    /// The host is not checked so GitHub Enterprise URLs
    /// (`https://ghe.example.com/api/v3/repos/...`) resolve as well.
    pub fn from_release_url(url: &str) -> Result<Self> {
        static RELEASE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"/repos/(?P<owner>[^/]+)/(?P<repo>[^/]+)/")
                .expect("release URL regex is valid")
        });

        let caps = RELEASE_URL_RE
            .captures(url)
            .ok_or_else(|| EventError::UnrecognizedReleaseUrl {
                url: url.to_string(),
            })?;

        Ok(Self {
            owner: caps["owner"].to_string(),
            repo: caps["repo"].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TweetError;

    #[test]
    fn extracts_owner_and_repo() {
        let slug =
            RepoSlug::from_release_url("https://api.github.com/repos/acme/widgets/releases/123")
                .unwrap();
        assert_eq!(
            slug,
            RepoSlug {
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
            }
        );
    }

    #[test]
    fn extracts_from_enterprise_urls() {
        let slug = RepoSlug::from_release_url(
            "https://ghe.example.com/api/v3/repos/team/tool/releases/9",
        )
        .unwrap();
        assert_eq!(slug.owner, "team");
        assert_eq!(slug.repo, "tool");
    }

    #[test]
    fn rejects_urls_without_repos_segment() {
        for url in [
            "https://api.github.com/acme/widgets/releases/123",
            "https://github.com/acme/widgets/releases/tag/1.0",
            "https://api.github.com/repos/acme",
            "",
        ] {
            let err = RepoSlug::from_release_url(url).unwrap_err();
            assert!(
                matches!(
                    err,
                    TweetError::Event(EventError::UnrecognizedReleaseUrl { .. })
                ),
                "{url} should not match"
            );
        }
    }

    #[test]
    fn parses_release_event_and_ignores_extra_fields() {
        let event = ReleaseEvent::from_json(
            r#"{
                "action": "published",
                "release": {
                    "url": "https://api.github.com/repos/x/foo/releases/1",
                    "tag_name": "1.2.3",
                    "html_url": "https://github.com/x/foo/releases/tag/1.2.3",
                    "body": "bugfixes",
                    "draft": false
                },
                "sender": { "login": "x" }
            }"#,
        )
        .unwrap();

        assert!(event.is_published());
        let release = event.release().unwrap();
        assert_eq!(release.tag_name, "1.2.3");
        assert_eq!(release.body(), "bugfixes");
    }

    #[test]
    fn null_body_reads_as_empty() {
        let event = ReleaseEvent::from_json(
            r#"{
                "action": "published",
                "release": {
                    "url": "https://api.github.com/repos/x/foo/releases/1",
                    "tag_name": "1.0",
                    "html_url": "https://github.com/x/foo/releases/tag/1.0",
                    "body": null
                }
            }"#,
        )
        .unwrap();
        assert_eq!(event.release().unwrap().body(), "");
    }

    #[test]
    fn other_actions_are_not_published() {
        for action in ["created", "edited", "prereleased", "deleted", "Published"] {
            let event = ReleaseEvent::from_json(&format!(r#"{{"action": "{action}"}}"#)).unwrap();
            assert!(!event.is_published());
        }
    }

    #[test]
    fn published_event_without_release_is_an_error() {
        let event = ReleaseEvent::from_json(r#"{"action": "published"}"#).unwrap();
        assert!(matches!(
            event.release(),
            Err(TweetError::Event(EventError::MissingRelease))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ReleaseEvent::from_json("{not json"),
            Err(TweetError::Event(EventError::Malformed(_)))
        ));
    }
}
