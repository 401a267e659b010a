//! release_tweet - announce a published GitHub release on Twitter.
//!
//! Intended to run as a step of a workflow triggered by `release` events.

use release_tweet::cli;
use release_tweet::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.indent_err("Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent_err(&format!("  • {suggestion}"));
                }
            }

            process::exit(1);
        }
    }
}
