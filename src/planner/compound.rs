//! Compound lift selection

use tracing::debug;

use super::{Experience, Goal, PrescribedExercise};
use crate::exercises::{
    Category, ExerciseDef, BARBELL_ROW, BENCH_PRESS, DEADLIFT, FRONT_SQUAT, OVERHEAD_PRESS,
    ROMANIAN_DEADLIFT, SQUAT,
};
use crate::random::RandomSource;

fn lift(
    exercise: ExerciseDef,
    sets: u32,
    reps: &'static str,
    intensity: &'static str,
    rest: &'static str,
) -> PrescribedExercise {
    PrescribedExercise::new(exercise, Category::Compound, sets, reps, intensity, rest)
}

/// Main lifts for the goal. Never empty.
pub fn select(
    goal: Goal,
    experience: Experience,
    random: &mut impl RandomSource,
) -> Vec<PrescribedExercise> {
    match goal {
        Goal::Powerlifting => powerlifting(experience),
        Goal::Strength => strength(experience, random),
        Goal::Hypertrophy => hypertrophy(experience),
    }
}

/// Competition lifts; only volume and load scale with experience
fn powerlifting(experience: Experience) -> Vec<PrescribedExercise> {
    const REST: &str = "3-5 minutes";
    if experience == Experience::Beginner {
        return [SQUAT, BENCH_PRESS, DEADLIFT]
            .into_iter()
            .map(|e| lift(e, 3, "5", "75-80%", REST))
            .collect();
    }
    vec![
        lift(SQUAT, 4, "3-5", "80-87%", REST),
        lift(BENCH_PRESS, 4, "3-5", "80-87%", REST),
        lift(DEADLIFT, 4, "1-5", "80-90%", REST),
    ]
}

fn strength(experience: Experience, random: &mut impl RandomSource) -> Vec<PrescribedExercise> {
    let beginner = experience == Experience::Beginner;
    let mut lifts = vec![
        lift(SQUAT, 4, if beginner { "5-6" } else { "3-5" }, "80-85%", "3-4 minutes"),
        lift(OVERHEAD_PRESS, 3, if beginner { "6-8" } else { "5-6" }, "75-80%", "2-3 minutes"),
    ];

    let flip = random.next_f64();
    let third = if flip > 0.5 {
        lift(DEADLIFT, 3, "3-5", "80-85%", "3-4 minutes")
    } else {
        lift(BARBELL_ROW, 4, "6-8", "75-80%", "2-3 minutes")
    };
    debug!("Strength coin flip {:.3} -> {}", flip, third.name());
    lifts.push(third);
    lifts
}

/// Working sets per main lift
fn hypertrophy_volume(experience: Experience) -> u32 {
    match experience {
        Experience::Beginner => 3,
        Experience::Intermediate => 5,
        Experience::Advanced => 6,
    }
}

fn hypertrophy(experience: Experience) -> Vec<PrescribedExercise> {
    let sets = hypertrophy_volume(experience);
    vec![
        lift(FRONT_SQUAT, sets, "6-12", "65-80%", "2-3 minutes"),
        lift(BENCH_PRESS, sets, "6-12", "65-80%", "2-3 minutes"),
        lift(ROMANIAN_DEADLIFT, sets - 1, "8-15", "60-75%", "2-3 minutes"),
    ]
}
