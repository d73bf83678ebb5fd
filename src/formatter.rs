//! Composition root turning a raw backend plan into the UI view-model
//!
//! `RoutineFormatter` is pure: it never performs I/O and holds no mutable
//! state, so one instance can format any number of plans concurrently.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::classify::{
  day_index, imc_color, level_description, level_emoji, muscle_color, rest_rule_description,
  tmb_display, DayType, IntensityTier,
};
use crate::models::system::{LevelConfigView, MuscleClassification, MuscleView, RestRuleView};
use crate::models::{
  FormattedDay, FormattedExercise, FormattedPlan, FormattedProfile, FormattedRestInfo, HistoryView,
  PlanSummary, RawDay, RawExercise, RawPlan, RawProfileBlock, RawRestInfo,
};
use crate::recommendations::{personal_recommendations, rest_recommendations};

const DEFAULT_USER_NAME: &str = "Usuario";

#[derive(Debug, Clone)]
pub struct RoutineFormatter {
  /// "Today" for history staleness checks; `None` reads the clock per call
  reference_date: Option<NaiveDate>,
}

impl Default for RoutineFormatter {
  fn default() -> Self {
    Self::new()
  }
}

impl RoutineFormatter {
  /// Formatter that checks staleness against the UTC date at format time
  pub fn new() -> Self {
    Self {
      reference_date: None,
    }
  }

  pub fn with_reference_date(reference_date: NaiveDate) -> Self {
    Self {
      reference_date: Some(reference_date),
    }
  }

  /// The pinned date, or today's UTC date when unpinned
  pub fn reference_date(&self) -> NaiveDate {
    self
      .reference_date
      .unwrap_or_else(|| Utc::now().date_naive())
  }

  pub fn format(&self, raw: &RawPlan) -> FormattedPlan {
    let profile = format_profile(raw.user_name.as_deref(), &raw.profile);
    let weekly_plan: Vec<FormattedDay> = raw.weekly_plan.iter().map(format_day).collect();

    let stats = aggregate(raw);
    let rest_recommendations = rest_recommendations(&stats.distribution);

    let history = raw.history_analysis.as_ref();
    let personal = match history {
      Some(h) => merge_recommendations(
        &raw.personal_recommendations,
        personal_recommendations(h, self.reference_date()),
      ),
      None => raw.personal_recommendations.clone(),
    };

    debug!(
      days = stats.total_days,
      exercises = stats.total_exercises,
      weekly_volume = stats.weekly_volume,
      history = history.is_some(),
      "Formatted routine"
    );

    let summary = PlanSummary {
      message: raw.message.clone(),
      total_days: stats.total_days,
      training_days: stats.training_days,
      rest_days: stats.rest_days,
      total_exercises: stats.total_exercises,
      average_exercises_per_day: stats.average_exercises_per_day,
      unique_groups: stats.unique_groups,
      weekly_volume: stats.weekly_volume,
      most_worked_group: stats.most_worked_group().cloned(),
      distribution: stats.distribution,
      rest_system: true,
      rest_recommendations,
      history_considered: history.is_some(),
      days_analyzed: history.map_or(false, |h| h.total_trainings > 0),
      adjustments_applied: stats.adjustments_applied,
    };

    FormattedPlan {
      profile,
      weekly_plan,
      summary,
      history: history.map(HistoryView::from),
      personal_recommendations: personal,
    }
  }

  /// Decorate the backend's rest-system description
  pub fn format_rest_info(&self, raw: &RawRestInfo) -> FormattedRestInfo {
    let rules = raw
      .rest_rules
      .iter()
      .map(|(muscle, &days)| RestRuleView {
        muscle: muscle.clone(),
        days,
        description: rest_rule_description(days),
        color: muscle_color(muscle),
      })
      .collect();

    let classification = MuscleClassification {
      large: muscle_views(&raw.large_groups, "Músculo grande - 48-72h descanso"),
      medium: muscle_views(&raw.medium_groups, "Músculo mediano - 24-48h descanso"),
      small: muscle_views(&raw.small_groups, "Músculo pequeño - 24-48h descanso"),
    };

    let level_config = raw
      .exercise_config
      .iter()
      .map(|(level, config)| LevelConfigView {
        level: level.clone(),
        emoji: level_emoji(level),
        exercises_per_day: format!("{}-{}", config.total_dia[0], config.total_dia[1]),
        exercises_per_group: format!("{}-{}", config.por_grupo[0], config.por_grupo[1]),
        description: level_description(level),
      })
      .collect();

    FormattedRestInfo {
      rules,
      classification,
      level_config,
    }
  }
}

fn format_profile(user_name: Option<&str>, block: &RawProfileBlock) -> FormattedProfile {
  FormattedProfile {
    name: user_name.unwrap_or(DEFAULT_USER_NAME).to_string(),
    level: block.level.clone(),
    tmb: finite_or_zero(block.tmb).round() as i64,
    tmb_display: tmb_display(finite_or_zero(block.tmb)),
    imc: (finite_or_zero(block.imc) * 10.0).round() / 10.0,
    imc_range: block.imc_range.clone(),
    imc_color: imc_color(&block.imc_range),
    level_emoji: level_emoji(&block.level),
    level_description: level_description(&block.level),
  }
}

fn format_day(day: &RawDay) -> FormattedDay {
  let exercises: Vec<FormattedExercise> = day
    .exercises
    .iter()
    .map(|e| format_exercise(&day.day_name, e))
    .collect();

  FormattedDay {
    day_name: day.day_name.clone(),
    day_index: day_index(&day.day_name),
    muscle_groups: day.muscle_groups.clone(),
    total_exercises: exercises.len(),
    exercises,
    groups_worked: day.muscle_groups.len(),
    total_volume: day.volume(),
    training_type: DayType::from_groups(day.muscle_groups.as_slice()),
    is_rest_day: day.is_rest_day || !day.is_training_day(),
    applied_adjustments: day.applied_adjustments.clone(),
    intensity_modified: day.intensity_modified,
  }
}

fn format_exercise(day_name: &str, exercise: &RawExercise) -> FormattedExercise {
  FormattedExercise {
    id: format!("{}-{}", day_name, exercise.exercise_name),
    muscle_group: exercise.muscle_group.clone(),
    name: exercise.exercise_name.clone(),
    sets: exercise.sets,
    reps: exercise.reps,
    description: format!("{} series × {} reps", exercise.sets, exercise.reps),
    muscle_color: muscle_color(&exercise.muscle_group),
    intensity: IntensityTier::from_sets_reps(exercise.sets, exercise.reps),
    volume: exercise.volume(),
  }
}

fn muscle_views(groups: &[String], description: &'static str) -> Vec<MuscleView> {
  groups
    .iter()
    .map(|g| MuscleView {
      name: g.clone(),
      color: muscle_color(g),
      description,
    })
    .collect()
}

/// Upstream recommendations first, then generated ones not already present
fn merge_recommendations(upstream: &[String], generated: Vec<String>) -> Vec<String> {
  let mut merged = upstream.to_vec();
  for rec in generated {
    if !merged.contains(&rec) {
      merged.push(rec);
    }
  }
  merged
}

fn finite_or_zero(value: f64) -> f64 {
  if value.is_finite() {
    value
  } else {
    0.0
  }
}
