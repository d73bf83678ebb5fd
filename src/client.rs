//! HTTP collaborator for the routine backend
//!
//! Fetches raw payloads from the `/ai/*` endpoints and hands them to the
//! formatter. No data transformation happens here.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::formatter::RoutineFormatter;
use crate::models::{
  FormattedPlan, FormattedRestInfo, RawModelStatus, RawPlan, RawProfile, RawRestInfo, SystemStatus,
};
use crate::normalize::normalize_profile;
use crate::validation::{validate, ValidationFailure};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
  #[error(transparent)]
  Validation(#[from] ValidationFailure),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("{detail}")]
  Api { status: u16, detail: String },

  #[error("Parse error: {0}")]
  Parse(String),

  #[error("Invalid endpoint: {0}")]
  Endpoint(#[from] url::ParseError),

  #[error("Invalid client configuration: {0}")]
  Config(String),
}

impl ClientError {
  /// HTTP status of a backend rejection, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      ClientError::Api { status, .. } => Some(*status),
      ClientError::Validation(_) => Some(StatusCode::BAD_REQUEST.as_u16()),
      ClientError::Request(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }
}

impl Serialize for ClientError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  detail: serde_json::Value,
}

/// ---------------------------------------------------------------------------
/// Results
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineResult {
  pub plan: FormattedPlan,
  pub message: String,
  pub history_used: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingHistory {
  pub data: serde_json::Value,
  /// The backend analysed at least one booking
  pub found: bool,
}

/// ---------------------------------------------------------------------------
/// Routine Client
/// ---------------------------------------------------------------------------

pub struct RoutineClient {
  http: Client,
  config: ClientConfig,
  formatter: RoutineFormatter,
}

impl RoutineClient {
  pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = &config.token {
      let value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| ClientError::Config(e.to_string()))?;
      headers.insert(AUTHORIZATION, value);
    }

    let http = Client::builder()
      .timeout(config.timeout)
      .default_headers(headers)
      .build()?;

    Ok(Self {
      http,
      config,
      formatter: RoutineFormatter::new(),
    })
  }

  /// Replace the formatter, e.g. to pin the reference date
  pub fn with_formatter(mut self, formatter: RoutineFormatter) -> Self {
    self.formatter = formatter;
    self
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  /// Routine for a user without an account id, built from raw profile data
  pub async fn generate_for_profile(&self, raw: &RawProfile) -> Result<RoutineResult, ClientError> {
    let profile = normalize_profile(raw);
    validate(&profile)?;

    let mut url = self.config.endpoint("/ai/predict-routine")?;
    url.query_pairs_mut().extend_pairs(profile.query_pairs());

    info!(level = profile.level.as_str(), "Generating routine from profile data");
    let plan: RawPlan = self.send_json(self.http.post(url)).await?;

    Ok(RoutineResult {
      plan: self.formatter.format(&plan),
      message: "Rutina generada exitosamente".to_string(),
      history_used: false,
    })
  }

  /// Routine for a registered user, using the stored profile
  pub async fn generate_for_user(&self, user_id: i64) -> Result<RoutineResult, ClientError> {
    let url = self
      .config
      .endpoint(&format!("/ai/predict-routine-for-user/{}", user_id))?;

    info!(user_id, "Generating routine for registered user");
    let plan: RawPlan = self.send_json(self.http.post(url)).await?;

    Ok(RoutineResult {
      plan: self.formatter.format(&plan),
      message: "Rutina generada exitosamente usando tu perfil".to_string(),
      history_used: false,
    })
  }

  /// Routine adjusted by the user's recent training history
  pub async fn generate_with_history(
    &self,
    user_id: i64,
    history_days: u32,
  ) -> Result<RoutineResult, ClientError> {
    let mut url = self
      .config
      .endpoint(&format!("/ai/predict-routine-with-history/{}", user_id))?;
    url
      .query_pairs_mut()
      .append_pair("dias_historial", &history_days.to_string());

    info!(user_id, history_days, "Generating routine with history");
    let plan: RawPlan = self.send_json(self.http.post(url)).await?;

    Ok(RoutineResult {
      plan: self.formatter.format(&plan),
      message: "Rutina generada considerando tu historial de entrenamientos".to_string(),
      history_used: true,
    })
  }

  /// Routine for the logged-in user.
  ///
  /// With an account id and `use_history`, the history route is tried first
  /// and kept only if the history holds trainings. Any failure there falls
  /// back to the standard per-user route.
  pub async fn generate_for_logged_user(
    &self,
    raw: &RawProfile,
    use_history: bool,
  ) -> Result<RoutineResult, ClientError> {
    validate(&normalize_profile(raw))?;

    let Some(user_id) = raw.user_id else {
      return self.generate_for_profile(raw).await;
    };

    if use_history {
      match self
        .generate_with_history(user_id, self.config.history_days)
        .await
      {
        Ok(result) if has_trainings(&result.plan) => return Ok(result),
        Ok(_) => warn!(user_id, "No training history, using standard routine"),
        Err(e) => warn!(user_id, error = %e, "History routine failed, using standard routine"),
      }
    }

    let mut result = self.generate_for_user(user_id).await?;
    if use_history {
      result.message = "Rutina generada usando tu perfil (sin historial disponible)".to_string();
    }
    Ok(result)
  }

  /// Whether the backend has every field it needs for this user
  pub async fn verify_user(&self, user_id: i64) -> Result<serde_json::Value, ClientError> {
    let url = self
      .config
      .endpoint(&format!("/ai/verificar-usuario/{}", user_id))?;
    self.send_json(self.http.get(url)).await
  }

  /// Backend check that each level's weekly distribution respects rest rules
  pub async fn validate_rest_distribution(&self) -> Result<serde_json::Value, ClientError> {
    let url = self.config.endpoint("/ai/validar-descanso")?;
    self.send_json(self.http.get(url)).await
  }

  pub async fn training_history(
    &self,
    user_id: i64,
    days_back: u32,
  ) -> Result<TrainingHistory, ClientError> {
    let mut url = self
      .config
      .endpoint(&format!("/ai/historial-usuario/{}", user_id))?;
    url
      .query_pairs_mut()
      .append_pair("dias_atras", &days_back.to_string());

    let data: serde_json::Value = self.send_json(self.http.get(url)).await?;
    let found = data
      .get("total_reservas_analizadas")
      .and_then(|v| v.as_i64())
      .map_or(false, |n| n > 0);

    Ok(TrainingHistory { data, found })
  }

  pub async fn rest_info(&self) -> Result<FormattedRestInfo, ClientError> {
    let url = self.config.endpoint("/ai/descanso-info")?;
    let raw: RawRestInfo = self.send_json(self.http.get(url)).await?;
    Ok(self.formatter.format_rest_info(&raw))
  }

  pub async fn model_status(&self) -> Result<SystemStatus, ClientError> {
    let url = self.config.endpoint("/ai/model-status")?;
    let raw: RawModelStatus = self.send_json(self.http.get(url)).await?;
    Ok(SystemStatus::from(raw))
  }

  async fn send_json<T: DeserializeOwned>(
    &self,
    request: reqwest::RequestBuilder,
  ) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let url: Url = response.url().clone();
    let body = response.text().await?;

    if !status.is_success() {
      let detail = error_detail(&body).unwrap_or_else(|| format!("HTTP {}", status));
      warn!(%url, status = status.as_u16(), %detail, "Backend rejected request");
      return Err(ClientError::Api {
        status: status.as_u16(),
        detail,
      });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Parse(format!("{}: {}", url.path(), e)))
  }
}

fn has_trainings(plan: &FormattedPlan) -> bool {
  plan
    .history
    .as_ref()
    .map_or(false, |h| h.total_trainings > 0)
}

/// FastAPI puts the message in `detail`, either a string or a list of errors
fn error_detail(body: &str) -> Option<String> {
  let parsed: ErrorBody = serde_json::from_str(body).ok()?;
  match parsed.detail {
    serde_json::Value::String(s) => Some(s),
    serde_json::Value::Null => None,
    other => Some(other.to_string()),
  }
}
