//! Human-readable guidance derived from the group distribution and history

use chrono::NaiveDate;

use crate::aggregate::GroupDistribution;
use crate::models::HistorySummary;

/// Days without training after which the last session is considered stale
pub const STALE_TRAINING_DAYS: i64 = 7;

const BASELINE_REST_RECOMMENDATIONS: [&str; 4] = [
  "El sistema respeta automáticamente los tiempos de descanso muscular",
  "Músculos grandes (pecho, espalda, pierna) descansan 48-72h",
  "Músculos pequeños (bicep, tricep) descansan 24-48h",
  "Puedes entrenar abdomen diariamente si lo deseas",
];

const CHEST_TRICEP_NOTE: &str =
  "Pecho y tricep están distribuidos correctamente para evitar sobreentrenamiento";

/// Baseline rest policy plus the chest/tricep co-occurrence note
pub fn rest_recommendations(distribution: &GroupDistribution) -> Vec<String> {
  let mut recommendations: Vec<String> = BASELINE_REST_RECOMMENDATIONS
    .iter()
    .map(|s| s.to_string())
    .collect();

  if distribution.contains("pecho") && distribution.contains("tricep") {
    recommendations.push(CHEST_TRICEP_NOTE.to_string());
  }

  recommendations
}

/// Recommendations from the training history. Empty when the history holds no
/// trainings.
pub fn personal_recommendations(history: &HistorySummary, reference_date: NaiveDate) -> Vec<String> {
  if history.total_trainings <= 0 {
    return Vec::new();
  }

  let mut recommendations = Vec::new();

  // Frequency
  if history.trainings_per_week > 5.0 {
    recommendations.push(
      "⚠️ Entrenas muy frecuentemente. Considera agregar más días de descanso para mejor recuperación."
        .to_string(),
    );
  } else if history.trainings_per_week < 2.0 {
    recommendations
      .push("💪 Podrías aumentar la frecuencia de entrenamiento para mejores resultados.".to_string());
  } else {
    recommendations.push("✅ Tienes una buena frecuencia de entrenamiento.".to_string());
  }

  // Attendance
  if history.average_attendance_pct < 70.0 {
    recommendations.push(
      "📈 Tu asistencia promedio es baja. Considera rutinas más cortas pero consistentes.".to_string(),
    );
  } else if history.average_attendance_pct > 90.0 {
    recommendations.push("🏆 Excelente consistencia en tus entrenamientos!".to_string());
  }

  // Staleness
  if let Some(last) = history.last_training_date {
    let days_since = (reference_date - last).num_days();
    if days_since > STALE_TRAINING_DAYS {
      recommendations.push(format!(
        "⏰ Tu último entrenamiento fue hace {} días. Retoma con una sesión de menor intensidad.",
        days_since
      ));
    }
  }

  // Group coverage, top three only
  let top_groups: Vec<&str> = history
    .most_trained_groups
    .iter()
    .take(3)
    .map(String::as_str)
    .collect();

  if !top_groups.contains(&"pierna") {
    recommendations.push("🦵 Considera incluir más ejercicios de pierna en tu rutina.".to_string());
  }
  if !top_groups.contains(&"abdomen") {
    recommendations.push("💪 No olvides trabajar el core/abdomen regularmente.".to_string());
  }

  recommendations
}
