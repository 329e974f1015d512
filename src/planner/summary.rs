//! Workout summary text

use serde::Serialize;

use super::{Experience, Goal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub principle: &'static str,
    pub goal: &'static str,
    pub duration: String,
    pub experience: String,
}

impl Summary {
    pub fn compose(duration: u32, experience: Experience, goal: Goal) -> Self {
        let level: &'static str = experience.into();
        Self {
            principle: principle(experience),
            goal: goal_description(goal),
            duration: format!("{} minute workout", duration),
            experience: capitalize(level),
        }
    }
}

/// Training principle for the experience level
pub fn principle(experience: Experience) -> &'static str {
    match experience {
        Experience::Beginner => {
            "Focus on movement quality and habit formation. Progressive overload through adding weight weekly. Stay 2-3 reps from failure."
        }
        Experience::Intermediate => {
            "Higher volume drives muscle growth. Latest research supports 15-25+ sets per muscle per week. Train 2-3x per week frequency."
        }
        Experience::Advanced => {
            "Periodized approach with high volumes. Research shows benefits up to 30+ sets per week. Focus on weak points and competition prep."
        }
    }
}

pub fn goal_description(goal: Goal) -> &'static str {
    match goal {
        Goal::Strength => {
            "Emphasizing heavy compound movements with lower reps for maximum strength gains."
        }
        Goal::Hypertrophy => {
            "Volume-focused training in moderate rep ranges for optimal muscle growth."
        }
        Goal::Powerlifting => {
            "Specific training for squat, bench press, and deadlift competition lifts."
        }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
