//! Error types for release_tweet operations.
//!
//! Every failure is fatal to the run. Each variant carries enough context to
//! explain what went wrong, and [`TweetError::recovery_suggestions`] turns the
//! common ones into actionable hints for the CI log.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release_tweet operations
pub type Result<T> = std::result::Result<T, TweetError>;

/// Main error type for all release_tweet operations
#[derive(Error, Debug)]
pub enum TweetError {
    /// Credential loading errors
    #[error("Credential error: {0}")]
    Credentials(#[from] CredentialError),

    /// Event payload errors
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// Posting errors
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
}

/// Errors raised while loading the Twitter credentials
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The secret variable is not set
    #[error("Environment variable '{var}' is not set")]
    MissingVariable {
        /// Variable name
        var: String,
    },

    /// The secret does not split into exactly four tokens
    #[error(
        "Expected 4 whitespace-separated credential tokens (consumer key, consumer secret, access token, access token secret), found {found}"
    )]
    WrongTokenCount {
        /// Number of tokens actually present
        found: usize,
    },
}

/// Errors raised while reading and interpreting the release event
#[derive(Error, Debug)]
pub enum EventError {
    /// Payload file could not be read
    #[error("Failed to read event payload at {path}: {source}")]
    ReadFailed {
        /// Payload path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Payload is not a valid release event document
    #[error("Malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A published event arrived without a release resource
    #[error("Event has action 'published' but no 'release' object")]
    MissingRelease,

    /// Release API URL lacks the `repos/<owner>/<repo>/` segments
    #[error("Release URL '{url}' does not match 'repos/<owner>/<repo>/'")]
    UnrecognizedReleaseUrl {
        /// The offending URL
        url: String,
    },
}

/// Errors raised while posting the status update
#[derive(Error, Debug)]
pub enum PublishError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request
    #[error("Twitter API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
    },

    /// The API answered with a body we could not decode
    #[error("Unexpected Twitter API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl TweetError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            TweetError::Credentials(CredentialError::MissingVariable { var }) => vec![
                format!("Expose the secret to this step: env: {var}: ${{{{ secrets.{var} }}}}"),
                "Use --dry-run to preview the tweet without credentials".to_string(),
            ],
            TweetError::Credentials(CredentialError::WrongTokenCount { .. }) => vec![
                "Store the secret as: <consumer key> <consumer secret> <access token> <access token secret>"
                    .to_string(),
            ],
            TweetError::Event(EventError::ReadFailed { .. }) => vec![
                "Check GITHUB_EVENT_PATH or pass --event-path".to_string(),
                "Use --example to run against the built-in release payload".to_string(),
            ],
            TweetError::Event(EventError::UnrecognizedReleaseUrl { .. }) => vec![
                "Ensure the workflow is triggered by a 'release' event".to_string(),
            ],
            TweetError::Publish(PublishError::Api { status: 401, .. }) => vec![
                "Regenerate the access token and secret for the posting account".to_string(),
                "Verify the app has read and write permissions".to_string(),
            ],
            TweetError::Publish(PublishError::Api { status: 403, .. }) => vec![
                "Twitter rejects duplicate statuses; check whether this release was already announced"
                    .to_string(),
                "Verify the app has read and write permissions".to_string(),
            ],
            TweetError::Publish(PublishError::Api { status: 429, .. }) => vec![
                "Rate limit exceeded; re-run the workflow later".to_string(),
            ],
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_count_message_does_not_leak_values() {
        let err = TweetError::from(CredentialError::WrongTokenCount { found: 3 });
        let msg = err.to_string();
        assert!(msg.contains("found 3"));
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn missing_variable_suggests_secret_mapping() {
        let err = TweetError::from(CredentialError::MissingVariable {
            var: "TWITTER".to_string(),
        });
        let suggestions = err.recovery_suggestions();
        assert!(suggestions[0].contains("${{ secrets.TWITTER }}"));
    }

    #[test]
    fn api_errors_map_to_suggestions_by_status() {
        let unauthorized = TweetError::from(PublishError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        });
        assert_eq!(unauthorized.recovery_suggestions().len(), 2);

        let server = TweetError::from(PublishError::Api {
            status: 500,
            message: "Internal".to_string(),
        });
        assert!(server.recovery_suggestions().is_empty());
    }
}
