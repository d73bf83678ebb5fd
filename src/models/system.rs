//! Payloads of the backend's informational endpoints (rest rules, model status)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Rest system info
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExerciseConfig {
  /// Inclusive [min, max] exercises per day
  pub total_dia: [u32; 2],
  /// Inclusive [min, max] exercises per muscle group
  pub por_grupo: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRestInfo {
  /// Muscle group -> required rest days
  #[serde(rename = "reglas_descanso", default)]
  pub rest_rules: BTreeMap<String, u32>,
  #[serde(rename = "musculos_grandes", default)]
  pub large_groups: Vec<String>,
  #[serde(rename = "musculos_medianos", default)]
  pub medium_groups: Vec<String>,
  #[serde(rename = "musculos_pequenos", default)]
  pub small_groups: Vec<String>,
  #[serde(rename = "config_ejercicios", default)]
  pub exercise_config: BTreeMap<String, RawExerciseConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestRuleView {
  pub muscle: String,
  pub days: u32,
  pub description: String,
  pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleView {
  pub name: String,
  pub color: &'static str,
  pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleClassification {
  pub large: Vec<MuscleView>,
  pub medium: Vec<MuscleView>,
  pub small: Vec<MuscleView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfigView {
  pub level: String,
  pub emoji: &'static str,
  pub exercises_per_day: String,
  pub exercises_per_group: String,
  pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRestInfo {
  pub rules: Vec<RestRuleView>,
  pub classification: MuscleClassification,
  pub level_config: Vec<LevelConfigView>,
}

/// ---------------------------------------------------------------------------
/// Model status
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawModelStatus {
  #[serde(rename = "modelo_entrenado", default)]
  pub model_trained: bool,
  #[serde(rename = "dataset_cargado", default)]
  pub dataset_loaded: bool,
  #[serde(rename = "sistema_descanso_activo", default)]
  pub rest_system_active: bool,
  #[serde(rename = "niveles_configurados", default)]
  pub configured_levels: Vec<String>,
  #[serde(rename = "grupos_musculares_disponibles", default)]
  pub available_muscle_groups: Vec<String>,
  #[serde(rename = "mensaje", default)]
  pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
  /// Trained model and loaded dataset
  pub ready: bool,
  pub rest_system_active: bool,
  pub available_levels: Vec<String>,
  pub muscle_groups: Vec<String>,
  pub message: Option<String>,
}

impl From<RawModelStatus> for SystemStatus {
  fn from(raw: RawModelStatus) -> Self {
    Self {
      ready: raw.model_trained && raw.dataset_loaded,
      rest_system_active: raw.rest_system_active,
      available_levels: raw.configured_levels,
      muscle_groups: raw.available_muscle_groups,
      message: raw.message,
    }
  }
}
