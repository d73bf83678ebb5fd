//! Static lookup tables mapping primitive values to presentation categories
//!
//! Every function here is total. Unknown muscle groups, IMC ranges and levels
//! resolve to a neutral default instead of failing, so a partially-describable
//! plan still renders.

use serde::{Deserialize, Serialize};

use crate::normalize::fold_key;

/// ---------------------------------------------------------------------------
/// Colors
/// ---------------------------------------------------------------------------

pub const DEFAULT_MUSCLE_COLOR: &str = "#607d8b";
pub const DEFAULT_IMC_COLOR: &str = "#757575";

const MUSCLE_COLORS: &[(&str, &str)] = &[
  ("pecho", "#e91e63"),
  ("espalda", "#2196f3"),
  ("pierna", "#4caf50"),
  ("bicep", "#ff9800"),
  ("tricep", "#ff5722"),
  ("hombro", "#9c27b0"),
  ("abdomen", "#795548"),
  ("bicep_tricep", "#ff9800"),
];

const IMC_COLORS: &[(&str, &str)] = &[
  ("Bajo peso", "#ff9800"),
  ("Normal", "#4caf50"),
  ("Sobrepeso", "#ff5722"),
  ("Obesidad", "#f44336"),
];

pub fn muscle_color(group: &str) -> &'static str {
  lookup(MUSCLE_COLORS, group).unwrap_or(DEFAULT_MUSCLE_COLOR)
}

pub fn imc_color(range: &str) -> &'static str {
  lookup(IMC_COLORS, range).unwrap_or(DEFAULT_IMC_COLOR)
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
  table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// ---------------------------------------------------------------------------
/// Levels
/// ---------------------------------------------------------------------------

pub const DEFAULT_LEVEL_EMOJI: &str = "⭐";
pub const DEFAULT_LEVEL_DESCRIPTION: &str = "Nivel personalizado";

pub fn level_emoji(level: &str) -> &'static str {
  match level {
    "principiante" => "🌱",
    "intermedio" => "🔥",
    "avanzado" => "💪",
    _ => DEFAULT_LEVEL_EMOJI,
  }
}

pub fn level_description(level: &str) -> &'static str {
  match level {
    "principiante" => "Enfoque en movimientos básicos y forma correcta",
    "intermedio" => "Combinación equilibrada de fuerza y resistencia",
    "avanzado" => "Entrenamiento intenso con técnicas avanzadas",
    _ => DEFAULT_LEVEL_DESCRIPTION,
  }
}

/// ---------------------------------------------------------------------------
/// Exercise intensity
/// ---------------------------------------------------------------------------

/// Volume (sets × reps) at or above which an exercise is high intensity
pub const HIGH_INTENSITY_VOLUME: u32 = 60;
/// Volume at or above which an exercise is medium intensity
pub const MEDIUM_INTENSITY_VOLUME: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityTier {
  #[serde(rename = "Baja")]
  Low,
  #[serde(rename = "Media")]
  Medium,
  #[serde(rename = "Alta")]
  High,
}

impl IntensityTier {
  pub fn from_volume(volume: u32) -> Self {
    match volume {
      v if v >= HIGH_INTENSITY_VOLUME => IntensityTier::High,
      v if v >= MEDIUM_INTENSITY_VOLUME => IntensityTier::Medium,
      _ => IntensityTier::Low,
    }
  }

  pub fn from_sets_reps(sets: u32, reps: u32) -> Self {
    Self::from_volume(sets.saturating_mul(reps))
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      IntensityTier::Low => "Baja",
      IntensityTier::Medium => "Media",
      IntensityTier::High => "Alta",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day type
/// ---------------------------------------------------------------------------

pub const LARGE_MUSCLE_GROUPS: [&str; 3] = ["pecho", "espalda", "pierna"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
  #[serde(rename = "Entrenamiento Intenso")]
  Intense,
  #[serde(rename = "Entrenamiento Balanceado")]
  Balanced,
  #[serde(rename = "Entrenamiento de Detalle")]
  Detail,
}

impl DayType {
  /// Counts distinct large groups among the day's groups
  pub fn from_groups<S: AsRef<str>>(groups: &[S]) -> Self {
    let large = LARGE_MUSCLE_GROUPS
      .iter()
      .filter(|large| groups.iter().any(|g| g.as_ref() == **large))
      .count();

    match large {
      n if n >= 2 => DayType::Intense,
      1 => DayType::Balanced,
      _ => DayType::Detail,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DayType::Intense => "Entrenamiento Intenso",
      DayType::Balanced => "Entrenamiento Balanceado",
      DayType::Detail => "Entrenamiento de Detalle",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Daily load
/// ---------------------------------------------------------------------------

pub const HIGH_LOAD_VOLUME: u32 = 100;
pub const MEDIUM_LOAD_VOLUME: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadBand {
  #[serde(rename = "baja")]
  Low,
  #[serde(rename = "media")]
  Medium,
  #[serde(rename = "alta")]
  High,
}

impl LoadBand {
  pub fn from_volume(day_volume: u32) -> Self {
    match day_volume {
      v if v >= HIGH_LOAD_VOLUME => LoadBand::High,
      v if v >= MEDIUM_LOAD_VOLUME => LoadBand::Medium,
      _ => LoadBand::Low,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Weekdays and rest rules
/// ---------------------------------------------------------------------------

pub const WEEKDAYS: [&str; 7] = [
  "Lunes",
  "Martes",
  "Miércoles",
  "Jueves",
  "Viernes",
  "Sábado",
  "Domingo",
];

/// Monday-first index; `None` for names outside the canonical seven
pub fn day_index(day_name: &str) -> Option<usize> {
  let key = fold_key(day_name);
  WEEKDAYS.iter().position(|d| fold_key(d) == key)
}

/// Basal metabolic rate label, rounded to whole kcal
pub fn tmb_display(tmb: f64) -> String {
  format!("{} kcal/día", tmb.round() as i64)
}

pub fn rest_rule_description(days: u32) -> String {
  match days {
    0 => "Puede entrenarse diario".to_string(),
    1 => "1 día de descanso".to_string(),
    n => format!("{} días de descanso", n),
  }
}
