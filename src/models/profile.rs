use serde::{Deserialize, Serialize, Serializer};

/// ---------------------------------------------------------------------------
/// Enumerations
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
  Male,
  Female,
  /// Passed through untouched by the normalizer so validation can report it
  Unrecognized(String),
}

impl Gender {
  pub fn as_str(&self) -> &str {
    match self {
      Gender::Male => "Masculino",
      Gender::Female => "Femenino",
      Gender::Unrecognized(raw) => raw,
    }
  }

  pub fn is_recognized(&self) -> bool {
    !matches!(self, Gender::Unrecognized(_))
  }
}

impl Serialize for Gender {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Objective {
  GainMuscle,
  LoseWeight,
  Unrecognized(String),
}

impl Objective {
  pub fn as_str(&self) -> &str {
    match self {
      Objective::GainMuscle => "aumento de peso",
      Objective::LoseWeight => "perdida de peso",
      Objective::Unrecognized(raw) => raw,
    }
  }

  pub fn is_recognized(&self) -> bool {
    !matches!(self, Objective::Unrecognized(_))
  }
}

impl Serialize for Objective {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
  #[serde(rename = "principiante")]
  Beginner,
  #[default]
  #[serde(rename = "intermedio")]
  Intermediate,
  #[serde(rename = "avanzado")]
  Advanced,
}

impl Level {
  pub fn as_str(&self) -> &'static str {
    match self {
      Level::Beginner => "principiante",
      Level::Intermediate => "intermedio",
      Level::Advanced => "avanzado",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Raw input (form fields or stored session user)
/// ---------------------------------------------------------------------------

/// A numeric form field that may arrive as a JSON number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
  Number(f64),
  Text(String),
}

impl NumberLike {
  /// Unparsable text yields NaN; rejecting it is the validator's job
  pub fn as_f64(&self) -> f64 {
    match self {
      NumberLike::Number(n) => *n,
      NumberLike::Text(s) => s.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN),
    }
  }
}

impl From<f64> for NumberLike {
  fn from(value: f64) -> Self {
    NumberLike::Number(value)
  }
}

impl From<&str> for NumberLike {
  fn from(value: &str) -> Self {
    NumberLike::Text(value.to_string())
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
  #[serde(default, rename = "id_usuario", alias = "user_id")]
  pub user_id: Option<i64>,
  #[serde(default, rename = "genero", alias = "gender")]
  pub gender: Option<String>,
  #[serde(default, rename = "edad", alias = "age")]
  pub age: Option<NumberLike>,
  #[serde(default, rename = "peso", alias = "weight")]
  pub weight: Option<NumberLike>,
  #[serde(default, rename = "altura", alias = "height")]
  pub height: Option<NumberLike>,
  #[serde(default, rename = "objetivo", alias = "objective")]
  pub objective: Option<String>,
  #[serde(default, rename = "nivel", alias = "level")]
  pub level: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Canonical request shape
/// ---------------------------------------------------------------------------

/// Normalized profile. `height_meters` is always in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileInput {
  pub gender: Gender,
  pub age: i64,
  pub weight_kg: f64,
  pub height_meters: f64,
  pub objective: Objective,
  pub level: Level,
}

impl ProfileInput {
  /// Query pairs expected by the routine prediction endpoint
  pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
    vec![
      ("genero", self.gender.as_str().to_string()),
      ("edad", self.age.to_string()),
      ("peso", self.weight_kg.to_string()),
      ("altura", self.height_meters.to_string()),
      ("objetivo", self.objective.as_str().to_string()),
      ("nivel", self.level.as_str().to_string()),
    ]
  }
}
