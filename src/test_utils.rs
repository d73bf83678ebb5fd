//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories for raw payloads
//! - JSON fixtures shaped like the backend responses
//! - Helper assertions

use chrono::NaiveDate;
use serde_json::json;

use crate::models::{
  HistorySummary, NumberLike, RawDay, RawExercise, RawPlan, RawProfile, RawProfileBlock,
};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A training day with `exercises` exercises of identical sets/reps, spread
/// round-robin over `groups`
pub fn mock_day(name: &str, groups: &[&str], exercises: usize, sets: u32, reps: u32) -> RawDay {
  let exercises = (0..exercises)
    .map(|i| RawExercise {
      muscle_group: groups
        .get(i % groups.len().max(1))
        .copied()
        .unwrap_or("pecho")
        .to_string(),
      exercise_name: format!("Ejercicio {}", i + 1),
      sets,
      reps,
    })
    .collect();

  RawDay {
    day_name: name.to_string(),
    muscle_groups: groups.iter().map(|g| g.to_string()).collect(),
    exercises,
    is_rest_day: false,
    applied_adjustments: vec![],
    intensity_modified: false,
  }
}

pub fn mock_rest_day(name: &str) -> RawDay {
  RawDay {
    day_name: name.to_string(),
    muscle_groups: vec![],
    exercises: vec![],
    is_rest_day: true,
    applied_adjustments: vec![],
    intensity_modified: false,
  }
}

pub fn mock_profile_block() -> RawProfileBlock {
  RawProfileBlock {
    level: "intermedio".to_string(),
    tmb: 1712.6,
    imc: 22.857,
    imc_range: "Normal".to_string(),
  }
}

pub fn mock_plan(days: Vec<RawDay>) -> RawPlan {
  RawPlan {
    user_id: None,
    user_name: None,
    profile: mock_profile_block(),
    weekly_plan: days,
    message: "Rutina generada".to_string(),
    history_analysis: None,
    personal_recommendations: vec![],
  }
}

pub fn mock_history() -> HistorySummary {
  HistorySummary {
    trainings_per_week: 3.0,
    average_attendance_pct: 85.0,
    most_frequent_level: "intermedio".to_string(),
    most_trained_groups: vec!["pecho".into(), "pierna".into(), "espalda".into()],
    total_trainings: 9,
    last_training_date: NaiveDate::from_ymd_opt(2026, 10, 12),
  }
}

pub fn mock_raw_profile() -> RawProfile {
  RawProfile {
    user_id: None,
    gender: Some("hombre".to_string()),
    age: Some(NumberLike::from("25")),
    weight: Some(NumberLike::from(70.0)),
    height: Some(NumberLike::from(175.0)),
    objective: Some("aumento de peso".to_string()),
    level: Some("intermedio".to_string()),
  }
}

/// ---------------------------------------------------------------------------
/// JSON Fixtures
/// ---------------------------------------------------------------------------

/// Body of a standard routine prediction response
pub fn mock_plan_json() -> serde_json::Value {
  json!({
    "usuario_id": 7,
    "usuario_nombre": "Carlos",
    "perfil": {"nivel": "intermedio", "tmb": 1712.6, "imc": 22.857, "rango_imc": "Normal"},
    "plan_semanal": [
      {"dia": "Lunes", "grupos_musculares": ["pecho", "espalda"], "ejercicios": [
        {"musculo": "pecho", "ejercicio": "Flexiones", "series": 4, "repeticiones": 10},
        {"musculo": "espalda", "ejercicio": "Dominadas", "series": 4, "repeticiones": 10},
        {"musculo": "pecho", "ejercicio": "Fondos", "series": 4, "repeticiones": 10}
      ]},
      {"dia": "Martes", "grupos_musculares": [], "ejercicios": [], "es_dia_descanso": true}
    ],
    "mensaje": "Rutina generada exitosamente"
  })
}

/// Body of a history-aware routine response
pub fn mock_history_plan_json(total_trainings: i64) -> serde_json::Value {
  json!({
    "usuario_id": 7,
    "usuario_nombre": "Carlos",
    "historial_analizado": {
      "entrenamientos_por_semana": 3,
      "asistencia_promedio": 85.0,
      "nivel_mas_frecuente": "intermedio",
      "grupos_mas_trabajados": ["pecho", "pierna", "abdomen"],
      "total_entrenamientos": total_trainings,
      "ultimo_entrenamiento": "2026-10-12"
    },
    "plan_semanal": [
      {"dia": "Lunes", "grupos_musculares": ["pierna"], "ejercicios": [
        {"musculo": "pierna", "ejercicio": "Sentadillas", "series": 3, "repeticiones": 15}
      ], "es_dia_descanso": false,
       "ajustes_aplicados": ["Series de pierna ajustadas por historial"], "intensidad_modificada": true}
    ],
    "recomendaciones_personales": ["✅ Tienes una buena frecuencia de entrenamiento."],
    "mensaje": "Rutina con historial"
  })
}

/// ---------------------------------------------------------------------------
/// Custom Assertions
/// ---------------------------------------------------------------------------

/// Assert that two floats are approximately equal within tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "assertion failed: `(left ≈ right)`\n  left: `{}`\n right: `{}`\n  diff: `{}` (tolerance: `{}`)",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let day = mock_day("Lunes", &["pecho", "tricep"], 3, 4, 10);
    assert_eq!(day.exercises.len(), 3);
    assert_eq!(day.exercises[1].muscle_group, "tricep");
    assert_eq!(day.exercises[2].muscle_group, "pecho");
    assert_eq!(day.volume(), 120);

    let rest = mock_rest_day("Domingo");
    assert!(rest.is_rest_day);
    assert!(!rest.is_training_day());
  }

  #[test]
  fn test_json_fixtures_parse_into_raw_plan() {
    let plan: RawPlan = serde_json::from_value(mock_plan_json()).unwrap();
    assert_eq!(plan.weekly_plan.len(), 2);

    let plan: RawPlan = serde_json::from_value(mock_history_plan_json(4)).unwrap();
    assert_eq!(plan.history_analysis.map(|h| h.total_trainings), Some(4));
  }
}
