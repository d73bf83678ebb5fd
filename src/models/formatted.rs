use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{GroupCount, GroupDistribution};
use crate::classify::{DayType, IntensityTier};
use crate::models::plan::HistorySummary;

/// ---------------------------------------------------------------------------
/// View-model handed to the UI
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProfile {
  pub name: String,
  pub level: String,
  /// kcal/day, rounded
  pub tmb: i64,
  /// e.g. "1713 kcal/día"
  pub tmb_display: String,
  /// One decimal place
  pub imc: f64,
  pub imc_range: String,
  pub imc_color: &'static str,
  pub level_emoji: &'static str,
  pub level_description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedExercise {
  pub id: String,
  pub muscle_group: String,
  pub name: String,
  pub sets: u32,
  pub reps: u32,
  pub description: String,
  pub muscle_color: &'static str,
  pub intensity: IntensityTier,
  pub volume: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDay {
  pub day_name: String,
  /// Position in the canonical Monday-first week, if the name is recognized
  pub day_index: Option<usize>,
  pub muscle_groups: Vec<String>,
  pub exercises: Vec<FormattedExercise>,
  pub total_exercises: usize,
  pub groups_worked: usize,
  pub total_volume: u32,
  pub training_type: DayType,
  pub is_rest_day: bool,
  pub applied_adjustments: Vec<String>,
  pub intensity_modified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
  pub message: String,
  /// Every weekly-plan entry, rest days included
  pub total_days: usize,
  pub training_days: usize,
  pub rest_days: usize,
  pub total_exercises: usize,
  /// Exercises per training day (rest days excluded)
  pub average_exercises_per_day: f64,
  pub unique_groups: usize,
  pub weekly_volume: u32,
  pub distribution: GroupDistribution,
  pub most_worked_group: Option<GroupCount>,
  pub rest_system: bool,
  pub rest_recommendations: Vec<String>,
  pub history_considered: bool,
  /// The history held at least one training
  pub days_analyzed: bool,
  pub adjustments_applied: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
  pub trainings_per_week: f64,
  pub average_attendance_pct: f64,
  pub most_frequent_level: String,
  pub most_trained_groups: Vec<String>,
  pub total_trainings: i64,
  pub last_training_date: Option<NaiveDate>,
}

impl From<&HistorySummary> for HistoryView {
  fn from(history: &HistorySummary) -> Self {
    Self {
      trainings_per_week: history.trainings_per_week,
      average_attendance_pct: history.average_attendance_pct,
      most_frequent_level: history.most_frequent_level.clone(),
      most_trained_groups: history.most_trained_groups.clone(),
      total_trainings: history.total_trainings,
      last_training_date: history.last_training_date,
    }
  }
}

/// Fully decorated plan. Treated as immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPlan {
  pub profile: FormattedProfile,
  pub weekly_plan: Vec<FormattedDay>,
  pub summary: PlanSummary,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub history: Option<HistoryView>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub personal_recommendations: Vec<String>,
}
