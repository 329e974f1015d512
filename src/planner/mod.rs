//! Planner module - maps (duration, experience, goal) to a workout
//!
//! Steps:
//! - Compound lift selection by goal
//! - Accessory draw (uniform shuffle)
//! - Duration gating of accessories
//! - Summary text

pub mod accessory;
pub mod compound;
pub mod summary;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::error::{ConfigError, InvalidSelectionError};
use crate::exercises::{Category, ExerciseDef};
use crate::random::{RandomSource, RngSource};

pub use summary::Summary;

/// Sessions at or above this length get the full accessory draw
pub const FULL_ACCESSORY_MINUTES: u32 = 60;
/// Sessions at or above this length get a shortened accessory draw
pub const SHORT_ACCESSORY_MINUTES: u32 = 45;
const SHORT_ACCESSORY_COUNT: usize = 2;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Goal {
    Strength,
    Hypertrophy,
    Powerlifting,
}

impl Goal {
    /// Parse a goal label. Unknown labels get the hypertrophy rules.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            warn!("Unknown goal '{}', using hypertrophy rules", label);
            Goal::Hypertrophy
        })
    }
}

/// The three user selections; all must be set before planning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selections {
    pub duration: Option<u32>,
    pub experience: Option<Experience>,
    pub goal: Option<Goal>,
}

impl Selections {
    /// Build selections from raw labels as a UI would hand them over
    pub fn from_labels(
        duration: Option<u32>,
        experience: Option<&str>,
        goal: Option<&str>,
    ) -> Result<Self, InvalidSelectionError> {
        let experience = experience
            .map(|label| {
                label
                    .parse::<Experience>()
                    .map_err(|_| InvalidSelectionError::UnknownExperience(label.to_string()))
            })
            .transpose()?;
        Ok(Self {
            duration,
            experience,
            goal: goal.map(Goal::from_label),
        })
    }

    pub fn is_ready(&self) -> bool {
        self.duration.is_some() && self.experience.is_some() && self.goal.is_some()
    }
}

/// A catalog entry with its prescription for this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrescribedExercise {
    #[serde(flatten)]
    pub exercise: ExerciseDef,
    pub category: Category,
    pub sets: u32,
    pub reps: &'static str,
    pub intensity: &'static str,
    pub rest: &'static str,
}

impl PrescribedExercise {
    pub fn new(
        exercise: ExerciseDef,
        category: Category,
        sets: u32,
        reps: &'static str,
        intensity: &'static str,
        rest: &'static str,
    ) -> Self {
        Self { exercise, category, sets, reps, intensity, rest }
    }

    pub fn name(&self) -> &'static str {
        self.exercise.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutPlan {
    pub summary: Summary,
    pub exercises: Vec<PrescribedExercise>,
}

impl WorkoutPlan {
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &PrescribedExercise> {
        self.exercises.iter().filter(move |e| e.category == category)
    }

    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

/// How many drawn accessories a session of `minutes` keeps
pub fn accessory_allowance(minutes: u32, pool: usize) -> usize {
    if minutes >= FULL_ACCESSORY_MINUTES {
        pool
    } else if minutes >= SHORT_ACCESSORY_MINUTES {
        SHORT_ACCESSORY_COUNT.min(pool)
    } else {
        0
    }
}

/// Workout planner over the compiled-in catalog
pub struct WorkoutPlanner<R> {
    config: PlannerConfig,
    random: R,
}

impl<R: RandomSource> WorkoutPlanner<R> {
    /// Fails when the duration menu is empty or offers zero minutes
    pub fn new(config: PlannerConfig, random: R) -> Result<Self, ConfigError> {
        Ok(Self { config: config.validated()?, random })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan from possibly incomplete selections
    pub fn plan_selections(
        &mut self,
        selections: &Selections,
    ) -> Result<WorkoutPlan, InvalidSelectionError> {
        let duration = selections.duration.ok_or(InvalidSelectionError::MissingDuration)?;
        let experience = selections.experience.ok_or(InvalidSelectionError::MissingExperience)?;
        let goal = selections.goal.ok_or(InvalidSelectionError::MissingGoal)?;
        self.plan(duration, experience, goal)
    }

    /// Generate a workout plan
    pub fn plan(
        &mut self,
        duration: u32,
        experience: Experience,
        goal: Goal,
    ) -> Result<WorkoutPlan, InvalidSelectionError> {
        if duration == 0 || !self.config.offers(duration) {
            return Err(InvalidSelectionError::UnsupportedDuration {
                minutes: duration,
                offered: self.config.durations.clone(),
            });
        }

        let mut exercises = compound::select(goal, experience, &mut self.random);

        let accessories =
            accessory::select(goal, experience, accessory::ACCESSORY_DRAW, &mut self.random);
        let keep = accessory_allowance(duration, accessories.len());
        debug!("{} min session keeps {} of {} accessories", duration, keep, accessories.len());
        exercises.extend(accessories.into_iter().take(keep));

        let plan = WorkoutPlan {
            summary: Summary::compose(duration, experience, goal),
            exercises,
        };
        info!(
            "Planned {} {} workout: {} exercises, {} sets",
            plan.summary.experience,
            goal,
            plan.exercises.len(),
            plan.total_sets()
        );
        Ok(plan)
    }
}

impl WorkoutPlanner<Box<dyn RandomSource>> {
    /// Planner seeded from config, or from the thread RNG when no seed is set
    pub fn from_config(config: PlannerConfig) -> Result<Self, ConfigError> {
        let random: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::thread()),
        };
        Self::new(config, random)
    }
}
