//! Normalization, classification and analytics for AI-suggested gym routines.
//!
//! Raw plan payloads from the backend go in through [`RoutineFormatter::format`]
//! and come out as a display-ready [`FormattedPlan`]. [`RoutineClient`] fetches
//! those payloads over HTTP.

pub mod aggregate;
pub mod classify;
pub mod client;
pub mod config;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod recommendations;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use aggregate::{aggregate, GroupDistribution, RoutineStats, SummaryStats};
pub use client::{ClientError, RoutineClient, RoutineResult, TrainingHistory};
pub use config::{ClientConfig, ConfigError};
pub use formatter::RoutineFormatter;
pub use models::{FormattedPlan, ProfileInput, RawPlan, RawProfile};
pub use normalize::normalize_profile;
pub use validation::{validate, ValidationFailure};
