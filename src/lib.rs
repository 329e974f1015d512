//! ironplan - barbell workout generator
//!
//! Picks main lifts and accessories from a fixed catalog for a given
//! session length, experience level and training goal.

pub mod config;
pub mod error;
pub mod exercises;
pub mod notes;
pub mod planner;
pub mod random;
pub mod render;

pub use config::PlannerConfig;
pub use error::InvalidSelectionError;
pub use planner::{Experience, Goal, Selections, WorkoutPlan, WorkoutPlanner};
