//! Domain validation of a normalized profile
//!
//! All rules are checked; the failure lists every violated field so the UI can
//! show a single consolidated message.

use serde::{Serialize, Serializer};

use crate::models::ProfileInput;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 80;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;
pub const MIN_HEIGHT_M: f64 = 1.2;
pub const MAX_HEIGHT_M: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
  Gender,
  Age,
  Weight,
  Height,
  Objective,
}

impl ProfileField {
  pub fn label(&self) -> &'static str {
    match self {
      ProfileField::Gender => "género",
      ProfileField::Age => "edad válida (16-80)",
      ProfileField::Weight => "peso válido (30-200 kg)",
      ProfileField::Height => "altura válida (1.2-2.5 m)",
      ProfileField::Objective => "objetivo",
    }
  }
}

impl Serialize for ProfileField {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.label())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Datos incompletos: {}", join_labels(.fields))]
pub struct ValidationFailure {
  pub fields: Vec<ProfileField>,
}

impl ValidationFailure {
  pub fn labels(&self) -> Vec<&'static str> {
    self.fields.iter().map(ProfileField::label).collect()
  }

  pub fn contains(&self, field: ProfileField) -> bool {
    self.fields.contains(&field)
  }
}

fn join_labels(fields: &[ProfileField]) -> String {
  fields.iter().map(ProfileField::label).collect::<Vec<_>>().join(", ")
}

pub fn validate(input: &ProfileInput) -> Result<(), ValidationFailure> {
  let mut fields = Vec::new();

  if !input.gender.is_recognized() {
    fields.push(ProfileField::Gender);
  }
  if !(MIN_AGE..=MAX_AGE).contains(&input.age) {
    fields.push(ProfileField::Age);
  }
  // NaN never falls inside a range
  if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&input.weight_kg) {
    fields.push(ProfileField::Weight);
  }
  if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&input.height_meters) {
    fields.push(ProfileField::Height);
  }
  if !input.objective.is_recognized() {
    fields.push(ProfileField::Objective);
  }

  if fields.is_empty() {
    Ok(())
  } else {
    Err(ValidationFailure { fields })
  }
}
