//! Environment-driven configuration for the routine API client

use std::env;
use std::time::Duration;

use url::Url;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const BASE_URL_VAR: &str = "ROUTINE_API_BASE_URL";
pub const TOKEN_VAR: &str = "ROUTINE_API_TOKEN";
pub const TIMEOUT_VAR: &str = "ROUTINE_API_TIMEOUT_SECS";
pub const HISTORY_DAYS_VAR: &str = "ROUTINE_HISTORY_DAYS";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_HISTORY_DAYS: u32 = 14;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid URL in {var}: {source}")]
  InvalidUrl {
    var: &'static str,
    source: url::ParseError,
  },

  #[error("Invalid number in {var}: {value}")]
  InvalidNumber { var: &'static str, value: String },
}

/// ---------------------------------------------------------------------------
/// Client Configuration
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub base_url: Url,
  /// Bearer token attached to every request when present
  pub token: Option<String>,
  pub timeout: Duration,
  /// Days of history the history-aware route should consider
  pub history_days: u32,
}

impl ClientConfig {
  /// Default timeout and history window against `base_url`
  pub fn new(base_url: Url) -> Self {
    Self {
      base_url,
      token: None,
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      history_days: DEFAULT_HISTORY_DAYS,
    }
  }

  /// Load `.env` if present, then read the environment
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let raw_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let defaults = Self::with_base_url(raw_url.trim())?;

    let token = env::var(TOKEN_VAR).ok().filter(|t| !t.trim().is_empty());

    let timeout = match read_number::<u64>(TIMEOUT_VAR)? {
      Some(secs) => Duration::from_secs(secs),
      None => defaults.timeout,
    };

    let history_days = read_number::<u32>(HISTORY_DAYS_VAR)?.unwrap_or(defaults.history_days);

    Ok(Self {
      token,
      timeout,
      history_days,
      ..defaults
    })
  }

  pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
    let url = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
      var: BASE_URL_VAR,
      source,
    })?;
    Ok(Self::new(url))
  }

  /// Append `path` to the base URL, keeping any path prefix the base carries
  pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
    let base = self.base_url.as_str().trim_end_matches('/');
    Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))
  }
}

fn read_number<T: std::str::FromStr>(var: &'static str) -> Result<Option<T>, ConfigError> {
  match env::var(var) {
    Ok(raw) => raw
      .trim()
      .parse::<T>()
      .map(Some)
      .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
    Err(_) => Ok(None),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_env_is_empty() {
    temp_env::with_vars_unset(
      [BASE_URL_VAR, TOKEN_VAR, TIMEOUT_VAR, HISTORY_DAYS_VAR],
      || {
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.history_days, 14);
      },
    );
  }

  #[test]
  #[serial]
  fn test_env_overrides() {
    temp_env::with_vars(
      [
        (BASE_URL_VAR, Some("https://gym.example.com/api")),
        (TOKEN_VAR, Some("secret")),
        (TIMEOUT_VAR, Some("30")),
        (HISTORY_DAYS_VAR, Some("21")),
      ],
      || {
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.history_days, 21);
        assert_eq!(
          config.endpoint("/ai/model-status").unwrap().as_str(),
          "https://gym.example.com/api/ai/model-status"
        );
      },
    );
  }

  #[test]
  #[serial]
  fn test_blank_token_is_ignored() {
    temp_env::with_vars(
      [(TOKEN_VAR, Some("  ")), (BASE_URL_VAR, None::<&str>)],
      || {
        assert!(ClientConfig::from_env().unwrap().token.is_none());
      },
    );
  }

  #[test]
  #[serial]
  fn test_invalid_values_are_rejected() {
    temp_env::with_vars([(BASE_URL_VAR, Some("not a url")), (TIMEOUT_VAR, None)], || {
      assert!(matches!(
        ClientConfig::from_env(),
        Err(ConfigError::InvalidUrl { .. })
      ));
    });

    temp_env::with_vars([(BASE_URL_VAR, None), (TIMEOUT_VAR, Some("ten"))], || {
      let err = ClientConfig::from_env().unwrap_err();
      assert_eq!(err.to_string(), "Invalid number in ROUTINE_API_TIMEOUT_SECS: ten");
    });
  }
}
