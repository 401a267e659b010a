//! Command line argument parsing and validation.
//!
//! Every option has a default that works inside a GitHub Actions release
//! workflow, so the usual invocation takes no arguments at all.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::credentials::DEFAULT_CREDENTIALS_VAR;
use crate::event::EventSource;
use crate::twitter::DEFAULT_API_URL;

/// Announce a published GitHub release on Twitter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "release_tweet",
    version,
    about = "Announce a published GitHub release on Twitter",
    long_about = "Read the release event of the current GitHub Actions run and post an
announcement tweet when the release was published.

Usage:
  release_tweet
  release_tweet --dry-run
  release_tweet --example --dry-run
  release_tweet --event-path event.json --credentials-var TWITTER_SECRET"
)]
pub struct Args {
    /// Release event payload (defaults to the runner's event file)
    #[arg(long, value_name = "PATH", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Use the built-in example release payload
    #[arg(long)]
    pub example: bool,

    /// Print the tweet instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Environment variable holding the four credential tokens
    #[arg(long, value_name = "NAME", default_value = DEFAULT_CREDENTIALS_VAR)]
    pub credentials_var: String,

    /// Twitter API base URL
    #[arg(long, value_name = "URL", env = "TWITTER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.credentials_var.trim().is_empty() {
            return Err("--credentials-var must name an environment variable".to_string());
        }

        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second".to_string());
        }

        let url = url::Url::parse(&self.api_url)
            .map_err(|e| format!("Invalid --api-url '{}': {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Invalid --api-url '{}': scheme must be http or https",
                self.api_url
            ));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Where the release event is read from
    pub event_source: EventSource,
    /// Print instead of posting
    pub dry_run: bool,
    /// Environment variable holding the credentials
    pub credentials_var: String,
    /// Twitter API base URL
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            event_source: EventSource::resolve(args.event_path.clone(), args.example),
            dry_run: args.dry_run,
            credentials_var: args.credentials_var.clone(),
            api_url: args.api_url.clone(),
            timeout: Duration::from_secs(args.timeout),
            output: super::OutputManager::new(args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
