//! Derived statistics over a weekly plan
//!
//! Rest-day rule: `total_days` counts every weekly-plan entry, while every
//! per-day average divides by `training_days` (entries with at least one
//! exercise). Rest days never dilute an average.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::classify::LoadBand;
use crate::models::{FormattedPlan, RawPlan};

/// ---------------------------------------------------------------------------
/// Muscle-group distribution
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
  pub group: String,
  pub count: usize,
}

/// Muscle group -> number of days it is trained, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDistribution {
  entries: Vec<GroupCount>,
}

impl GroupDistribution {
  pub fn record(&mut self, group: &str) {
    match self.entries.iter_mut().find(|e| e.group == group) {
      Some(entry) => entry.count += 1,
      None => self.entries.push(GroupCount {
        group: group.to_string(),
        count: 1,
      }),
    }
  }

  pub fn get(&self, group: &str) -> Option<usize> {
    self.entries.iter().find(|e| e.group == group).map(|e| e.count)
  }

  pub fn contains(&self, group: &str) -> bool {
    self.get(group).is_some()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &GroupCount> {
    self.entries.iter()
  }

  /// Highest count; ties go to the group seen first
  pub fn most_worked(&self) -> Option<&GroupCount> {
    self.entries.iter().fold(None, |best, entry| match best {
      Some(b) if b.count >= entry.count => Some(b),
      _ => Some(entry),
    })
  }
}

impl Serialize for GroupDistribution {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for entry in &self.entries {
      map.serialize_entry(&entry.group, &entry.count)?;
    }
    map.end()
  }
}

/// ---------------------------------------------------------------------------
/// Summary statistics
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
  pub total_days: usize,
  pub training_days: usize,
  pub rest_days: usize,
  pub total_exercises: usize,
  pub average_exercises_per_day: f64,
  pub unique_groups: usize,
  pub weekly_volume: u32,
  pub distribution: GroupDistribution,
  pub adjustments_applied: usize,
}

impl SummaryStats {
  pub fn most_worked_group(&self) -> Option<&GroupCount> {
    self.distribution.most_worked()
  }
}

pub fn aggregate(plan: &RawPlan) -> SummaryStats {
  let mut distribution = GroupDistribution::default();
  let mut unique: HashSet<&str> = HashSet::new();
  let mut training_days = 0;
  let mut total_exercises = 0;
  let mut weekly_volume: u32 = 0;
  let mut adjustments_applied = 0;

  for day in &plan.weekly_plan {
    if day.is_training_day() {
      training_days += 1;
    }
    total_exercises += day.exercises.len();
    weekly_volume = weekly_volume.saturating_add(day.volume());
    adjustments_applied += day.applied_adjustments.len();

    // A group listed twice on one day is still one day of work
    let mut seen_today: HashSet<&str> = HashSet::new();
    for group in &day.muscle_groups {
      unique.insert(group);
      if seen_today.insert(group) {
        distribution.record(group);
      }
    }
  }

  let total_days = plan.weekly_plan.len();

  SummaryStats {
    total_days,
    training_days,
    rest_days: total_days - training_days,
    total_exercises,
    average_exercises_per_day: per_training_day(total_exercises, training_days),
    unique_groups: unique.len(),
    weekly_volume,
    distribution,
    adjustments_applied,
  }
}

/// Average over training days, one decimal place; 0 when there are none
fn per_training_day(total: usize, training_days: usize) -> f64 {
  if training_days == 0 {
    return 0.0;
  }
  ((total as f64 / training_days as f64) * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Routine statistics (dashboard view)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoadDistribution {
  pub alta: usize,
  pub media: usize,
  pub baja: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStats {
  pub active_days_per_week: usize,
  pub average_exercises_per_day: f64,
  pub most_worked_group: Option<GroupCount>,
  /// Training days bucketed by total volume
  pub load_distribution: LoadDistribution,
  pub recommendations: Vec<String>,
}

impl RoutineStats {
  pub fn from_formatted(plan: &FormattedPlan) -> Self {
    let mut load_distribution = LoadDistribution::default();

    for day in plan.weekly_plan.iter().filter(|d| !d.exercises.is_empty()) {
      match LoadBand::from_volume(day.total_volume) {
        LoadBand::High => load_distribution.alta += 1,
        LoadBand::Medium => load_distribution.media += 1,
        LoadBand::Low => load_distribution.baja += 1,
      }
    }

    Self {
      active_days_per_week: plan.summary.training_days,
      average_exercises_per_day: plan.summary.average_exercises_per_day,
      most_worked_group: plan.summary.most_worked_group.clone(),
      load_distribution,
      recommendations: plan.summary.rest_recommendations.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::formatter::RoutineFormatter;
  use crate::test_utils::{mock_day, mock_plan, mock_rest_day};
  use chrono::NaiveDate;

  #[test]
  fn test_distribution_counts_days_not_exercises() {
    let plan = mock_plan(vec![
      mock_day("Lunes", &["pecho"], 3, 4, 10),
      mock_day("Martes", &["bicep"], 2, 3, 12),
      mock_day("Miércoles", &["pecho"], 1, 3, 10),
    ]);

    let stats = aggregate(&plan);
    assert_eq!(stats.distribution.get("pecho"), Some(2));
    assert_eq!(stats.distribution.get("bicep"), Some(1));
    assert_eq!(stats.distribution.len(), 2);
    assert_eq!(stats.most_worked_group().map(|g| g.group.as_str()), Some("pecho"));

    let json = serde_json::to_string(&stats.distribution).unwrap();
    assert_eq!(json, r#"{"pecho":2,"bicep":1}"#);
  }

  #[test]
  fn test_ties_go_to_first_seen_group() {
    let plan = mock_plan(vec![
      mock_day("Lunes", &["espalda", "bicep"], 2, 3, 10),
      mock_day("Martes", &["pierna"], 2, 3, 10),
      mock_day("Jueves", &["pierna", "espalda"], 2, 3, 10),
    ]);

    let stats = aggregate(&plan);
    let most = stats.most_worked_group().unwrap();
    assert_eq!(most.group, "espalda");
    assert_eq!(most.count, 2);
  }

  #[test]
  fn test_rest_days_count_toward_total_but_not_average() {
    let plan = mock_plan(vec![
      mock_day("Lunes", &["pecho", "espalda"], 3, 4, 10),
      mock_rest_day("Martes"),
      mock_day("Miércoles", &["pierna"], 2, 3, 10),
    ]);

    let stats = aggregate(&plan);
    assert_eq!(stats.total_days, 3);
    assert_eq!(stats.training_days, 2);
    assert_eq!(stats.rest_days, 1);
    assert_eq!(stats.total_exercises, 5);
    assert_eq!(stats.average_exercises_per_day, 2.5);
    assert_eq!(stats.unique_groups, 3);
    assert_eq!(stats.weekly_volume, 3 * 40 + 2 * 30);
  }

  #[test]
  fn test_duplicate_group_within_a_day_counts_once() {
    let mut day = mock_day("Lunes", &["pecho"], 1, 3, 10);
    day.muscle_groups.push("pecho".into());
    let stats = aggregate(&mock_plan(vec![day]));
    assert_eq!(stats.distribution.get("pecho"), Some(1));
  }

  #[test]
  fn test_empty_plan_and_no_mutation() {
    let plan = mock_plan(vec![mock_rest_day("Domingo")]);
    let before = plan.clone();
    let stats = aggregate(&plan);
    assert_eq!(plan, before);
    assert_eq!(stats.average_exercises_per_day, 0.0);
    assert!(stats.most_worked_group().is_none());
    assert!(stats.distribution.is_empty());
  }

  #[test]
  fn test_adjustments_are_summed() {
    let mut monday = mock_day("Lunes", &["pecho"], 1, 3, 10);
    monday.applied_adjustments = vec!["a".into(), "b".into()];
    let mut tuesday = mock_rest_day("Martes");
    tuesday.applied_adjustments = vec!["c".into()];
    let stats = aggregate(&mock_plan(vec![monday, tuesday]));
    assert_eq!(stats.adjustments_applied, 3);
  }

  #[test]
  fn test_routine_stats_load_bands_skip_rest_days() {
    let plan = mock_plan(vec![
      mock_day("Lunes", &["pecho"], 1, 10, 10),
      mock_day("Martes", &["pecho"], 1, 9, 11),
      mock_rest_day("Miércoles"),
      mock_day("Jueves", &["espalda"], 1, 5, 10),
      mock_day("Viernes", &["pierna"], 1, 7, 7),
    ]);
    let formatted = RoutineFormatter::with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
      .format(&plan);

    let stats = RoutineStats::from_formatted(&formatted);
    assert_eq!(
      stats.load_distribution,
      LoadDistribution {
        alta: 1,
        media: 2,
        baja: 1
      }
    );
    assert_eq!(stats.active_days_per_week, 4);
    assert_eq!(stats.average_exercises_per_day, 1.0);

    let most = stats.most_worked_group.unwrap();
    assert_eq!(most.group, "pecho");
    assert_eq!(most.count, 2);
    assert_eq!(stats.recommendations, formatted.summary.rest_recommendations);
  }
}
