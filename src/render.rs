//! Plain-text and JSON rendering of a workout plan

use anyhow::Result;
use strum::IntoEnumIterator;

use crate::exercises::{Category, exercises_in};
use crate::notes::format_notes;
use crate::planner::{PrescribedExercise, WorkoutPlan};

const RULE_WIDTH: usize = 60;

fn exercise_block(index: usize, e: &PrescribedExercise) -> String {
    format!(
        "{}. {}\n   Sets: {} | Reps: {} | Intensity: {} | Rest: {}\n   {}\n   Muscles: {}",
        index + 1,
        e.name(),
        e.sets,
        e.reps,
        e.intensity,
        e.rest,
        e.exercise.notes,
        e.exercise.primary_muscles.join(", ")
    )
}

/// Summary, numbered exercises, then the research notes
pub fn render_text(plan: &WorkoutPlan) -> String {
    let rule = format!("{:-<width$}", "", width = RULE_WIDTH);
    let mut out = vec![
        "Workout Summary".to_string(),
        rule.clone(),
        format!("Experience Level: {}", plan.summary.experience),
        format!("Duration: {}", plan.summary.duration),
        format!("Focus: {}", plan.summary.goal),
        format!("Principle: {}", plan.summary.principle),
        String::new(),
    ];

    for (i, e) in plan.exercises.iter().enumerate() {
        out.push(exercise_block(i, e));
        out.push(String::new());
    }

    out.push(rule);
    out.push(format_notes());
    out.join("\n")
}

pub fn render_json(plan: &WorkoutPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Catalog listing grouped by category
pub fn render_catalog() -> String {
    let mut out = Vec::new();
    for category in Category::iter() {
        let entries = exercises_in(category);
        out.push(format!("{} ({})", category, entries.len()));
        for e in entries {
            out.push(format!("  {:18} {:28} {}", e.key, e.name, e.primary_muscles.join(", ")));
        }
    }
    out.join("\n")
}
