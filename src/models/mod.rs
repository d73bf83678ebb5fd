pub mod formatted;
pub mod plan;
pub mod profile;
pub mod system;

pub use formatted::{
  FormattedDay, FormattedExercise, FormattedPlan, FormattedProfile, HistoryView, PlanSummary,
};
pub use plan::{HistorySummary, RawDay, RawExercise, RawPlan, RawProfileBlock};
pub use profile::{Gender, Level, NumberLike, Objective, ProfileInput, RawProfile};
pub use system::{FormattedRestInfo, RawModelStatus, RawRestInfo, SystemStatus};
