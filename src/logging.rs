//! Tracing subscriber setup for binaries and tools embedding the crate.
//!
//! The library itself only emits events. Call [`init`] once at startup to see
//! them; the filter comes from `RUST_LOG` and falls back to `info`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Outcome of the first install attempt, shared by every later call
static INSTALLED: OnceLock<Result<(), LoggingError>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoggingError {
  /// Another global subscriber was installed first
  #[error("Failed to install global tracing subscriber: {0}")]
  SetGlobal(String),
}

/// Install a fmt subscriber. Subsequent and concurrent calls return the
/// result of the first attempt.
pub fn init() -> Result<(), LoggingError> {
  INSTALLED.get_or_init(install).clone()
}

fn install() -> Result<(), LoggingError> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .try_init()
    .map_err(|e| LoggingError::SetGlobal(e.to_string()))
}
