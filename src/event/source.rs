//! Event source resolution (CI payload file or built-in example)

use super::ReleaseEvent;
use crate::error::{EventError, Result};
use std::path::PathBuf;

/// Example `release` payload used outside a real release trigger
const RELEASE_EXAMPLE: &str = include_str!("release_example.json");

/// Where the release event comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// Webhook payload written by the CI runner
    File(PathBuf),
    /// Built-in example release payload
    Example,
}

impl EventSource {
    /// Pick the source from the configured payload path.
    ///
    /// Without a path, or when the example is forced, the built-in payload
    /// is used.
    pub fn resolve(event_path: Option<PathBuf>, force_example: bool) -> Self {
        match event_path {
            Some(path) if !force_example => Self::File(path),
            _ => Self::Example,
        }
    }

    /// Load and interpret the event.
    ///
    /// A payload carrying a top-level `workflow` key comes from a manual
    /// `workflow_dispatch` run and is replaced by the example release.
    pub fn load(&self) -> Result<ReleaseEvent> {
        match self {
            Self::Example => Self::example(),
            Self::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| {
                    EventError::ReadFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                let value: serde_json::Value =
                    serde_json::from_str(&raw).map_err(EventError::from)?;

                if value.get("workflow").is_some() {
                    log::info!(
                        "Event at {} is a workflow dispatch; using the example release payload",
                        path.display()
                    );
                    return Self::example();
                }

                ReleaseEvent::from_value(value)
            }
        }
    }

    /// The built-in example release event
    pub fn example() -> Result<ReleaseEvent> {
        ReleaseEvent::from_json(RELEASE_EXAMPLE)
    }
}
