//! Command line interface for release_tweet.

mod announce;
mod args;
mod output;

pub use announce::execute_announce;
pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    execute_announce(&config).await?;
    Ok(0)
}
