use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Raw backend payload for a generated routine
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawExercise {
  #[serde(rename = "musculo")]
  pub muscle_group: String,
  #[serde(rename = "ejercicio")]
  pub exercise_name: String,
  #[serde(rename = "series")]
  pub sets: u32,
  #[serde(rename = "repeticiones")]
  pub reps: u32,
}

impl RawExercise {
  /// Always recomputed from sets and reps, never read from upstream
  pub fn volume(&self) -> u32 {
    self.sets.saturating_mul(self.reps)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDay {
  #[serde(rename = "dia")]
  pub day_name: String,
  #[serde(rename = "grupos_musculares", default)]
  pub muscle_groups: Vec<String>,
  #[serde(rename = "ejercicios", default)]
  pub exercises: Vec<RawExercise>,
  #[serde(rename = "es_dia_descanso", default)]
  pub is_rest_day: bool,
  #[serde(rename = "ajustes_aplicados", default)]
  pub applied_adjustments: Vec<String>,
  #[serde(rename = "intensidad_modificada", default)]
  pub intensity_modified: bool,
}

impl RawDay {
  /// A day counts as training only when it carries at least one exercise
  pub fn is_training_day(&self) -> bool {
    !self.exercises.is_empty()
  }

  pub fn volume(&self) -> u32 {
    self
      .exercises
      .iter()
      .fold(0u32, |total, e| total.saturating_add(e.volume()))
  }
}

/// Profile block computed upstream (TMB/IMC are only displayed here)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawProfileBlock {
  #[serde(rename = "nivel", default)]
  pub level: String,
  #[serde(default)]
  pub tmb: f64,
  #[serde(default)]
  pub imc: f64,
  #[serde(rename = "rango_imc", default)]
  pub imc_range: String,
}

/// Present only when the backend considered the user's training history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
  #[serde(rename = "entrenamientos_por_semana", default)]
  pub trainings_per_week: f64,
  #[serde(rename = "asistencia_promedio", default)]
  pub average_attendance_pct: f64,
  #[serde(rename = "nivel_mas_frecuente", default)]
  pub most_frequent_level: String,
  #[serde(rename = "grupos_mas_trabajados", default)]
  pub most_trained_groups: Vec<String>,
  #[serde(rename = "total_entrenamientos", default)]
  pub total_trainings: i64,
  #[serde(rename = "ultimo_entrenamiento", default)]
  pub last_training_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlan {
  #[serde(rename = "usuario_id", default)]
  pub user_id: Option<i64>,
  #[serde(rename = "usuario_nombre", default)]
  pub user_name: Option<String>,
  /// The history endpoint omits the profile block entirely
  #[serde(rename = "perfil", default)]
  pub profile: RawProfileBlock,
  #[serde(rename = "plan_semanal")]
  pub weekly_plan: Vec<RawDay>,
  #[serde(rename = "mensaje", default)]
  pub message: String,
  #[serde(rename = "historial_analizado", default)]
  pub history_analysis: Option<HistorySummary>,
  #[serde(rename = "recomendaciones_personales", default)]
  pub personal_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_standard_payload_parses_with_defaults() {
    let json = r#"{
      "perfil": {"nivel": "intermedio", "tmb": 1712.4, "imc": 22.86, "rango_imc": "Normal"},
      "plan_semanal": [
        {"dia": "Lunes", "grupos_musculares": ["pecho"], "ejercicios": [
          {"musculo": "pecho", "ejercicio": "Flexiones", "series": 4, "repeticiones": 12}
        ]},
        {"dia": "Martes", "grupos_musculares": [], "ejercicios": []}
      ],
      "mensaje": "ok"
    }"#;

    let plan: RawPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.weekly_plan.len(), 2);
    assert_eq!(plan.weekly_plan[0].volume(), 48);
    assert!(plan.weekly_plan[0].is_training_day());
    assert!(!plan.weekly_plan[1].is_training_day());
    assert!(plan.weekly_plan[1].applied_adjustments.is_empty());
    assert!(plan.history_analysis.is_none());
    assert_eq!(plan.profile.imc_range, "Normal");
  }

  #[test]
  fn test_history_payload_parses_without_profile() {
    let json = r#"{
      "usuario_id": 3,
      "usuario_nombre": "Ana",
      "historial_analizado": {
        "entrenamientos_por_semana": 3,
        "asistencia_promedio": 85.5,
        "nivel_mas_frecuente": "intermedio",
        "grupos_mas_trabajados": ["pecho", "pierna"],
        "total_entrenamientos": 9,
        "ultimo_entrenamiento": "2026-10-10"
      },
      "plan_semanal": [
        {"dia": "Lunes", "grupos_musculares": [], "ejercicios": [], "es_dia_descanso": true,
         "ajustes_aplicados": ["Día de descanso según plan de entrenamiento"], "intensidad_modificada": false}
      ],
      "recomendaciones_personales": ["✅ Tienes una buena frecuencia de entrenamiento."],
      "mensaje": "con historial"
    }"#;

    let plan: RawPlan = serde_json::from_str(json).unwrap();
    let history = plan.history_analysis.unwrap();
    assert_eq!(history.trainings_per_week, 3.0);
    assert_eq!(history.last_training_date, NaiveDate::from_ymd_opt(2026, 10, 10));
    assert_eq!(plan.profile, RawProfileBlock::default());
    assert!(plan.weekly_plan[0].is_rest_day);
  }
}
