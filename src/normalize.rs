//! Normalization of raw profile input into the canonical request shape
//!
//! Nothing here fails: values that cannot be interpreted become sentinels
//! (0, NaN, `Unrecognized`) and are rejected later by `validation`.

use crate::models::{Gender, Level, Objective, ProfileInput, RawProfile};

/// Heights above this are taken as centimeters
const CENTIMETER_THRESHOLD: f64 = 10.0;

const MALE_SPELLINGS: &[&str] = &["masculino", "hombre"];
const FEMALE_SPELLINGS: &[&str] = &["femenino", "mujer"];
const GAIN_MUSCLE_SPELLINGS: &[&str] = &["aumento de peso"];
const LOSE_WEIGHT_SPELLINGS: &[&str] = &["perdida de peso"];

/// Lowercase and strip Spanish accents so lookups tolerate "Pérdida" / "perdida"
pub(crate) fn fold_key(value: &str) -> String {
  value
    .trim()
    .to_lowercase()
    .chars()
    .map(|c| match c {
      'á' => 'a',
      'é' => 'e',
      'í' => 'i',
      'ó' => 'o',
      'ú' | 'ü' => 'u',
      other => other,
    })
    .collect()
}

pub fn normalize_gender(raw: &str) -> Gender {
  let key = fold_key(raw);
  if MALE_SPELLINGS.contains(&key.as_str()) {
    Gender::Male
  } else if FEMALE_SPELLINGS.contains(&key.as_str()) {
    Gender::Female
  } else {
    Gender::Unrecognized(raw.to_string())
  }
}

pub fn normalize_objective(raw: &str) -> Objective {
  let key = fold_key(raw);
  if GAIN_MUSCLE_SPELLINGS.contains(&key.as_str()) {
    Objective::GainMuscle
  } else if LOSE_WEIGHT_SPELLINGS.contains(&key.as_str()) {
    Objective::LoseWeight
  } else {
    Objective::Unrecognized(raw.to_string())
  }
}

/// Missing or unknown levels fall back to intermediate, matching the backend
pub fn normalize_level(raw: Option<&str>) -> Level {
  match raw.map(fold_key).as_deref() {
    Some("principiante") => Level::Beginner,
    Some("avanzado") => Level::Advanced,
    _ => Level::Intermediate,
  }
}

/// Convert centimeters to meters when the value is clearly not meters
pub fn normalize_height(height: f64) -> f64 {
  if height > CENTIMETER_THRESHOLD {
    height / 100.0
  } else {
    height
  }
}

pub fn normalize_profile(raw: &RawProfile) -> ProfileInput {
  let age = raw
    .age
    .as_ref()
    .map(|a| a.as_f64())
    .filter(|a| a.is_finite())
    .map(|a| a.trunc() as i64)
    .unwrap_or(0);

  let weight_kg = raw.weight.as_ref().map(|w| w.as_f64()).unwrap_or(0.0);

  let height_meters = raw
    .height
    .as_ref()
    .map(|h| normalize_height(h.as_f64()))
    .unwrap_or(0.0);

  ProfileInput {
    gender: normalize_gender(raw.gender.as_deref().unwrap_or_default()),
    age,
    weight_kg,
    height_meters,
    objective: normalize_objective(raw.objective.as_deref().unwrap_or_default()),
    level: normalize_level(raw.level.as_deref()),
  }
}
