//! Accessory draw - uniform shuffle of the accessory catalog

use super::{Experience, Goal, PrescribedExercise};
use crate::exercises::{ACCESSORY_EXERCISES, Category};
use crate::random::{shuffle, RandomSource};

/// Accessories drawn per plan before duration gating
pub const ACCESSORY_DRAW: usize = 4;

/// Uniform prescription applied to every drawn accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryPrescription {
    pub sets: u32,
    pub reps: &'static str,
    pub intensity: &'static str,
    pub rest: &'static str,
}

impl AccessoryPrescription {
    pub fn for_selection(goal: Goal, experience: Experience) -> Self {
        if goal == Goal::Strength {
            return Self { sets: 3, reps: "6-10", intensity: "RPE 8-9", rest: "2-3 minutes" };
        }
        let sets = match experience {
            Experience::Beginner => 3,
            Experience::Intermediate => 4,
            Experience::Advanced => 5,
        };
        Self { sets, reps: "8-20", intensity: "RPE 7-9", rest: "1-2 minutes" }
    }
}

/// Shuffle the accessory catalog and take the first `count` (capped at catalog size)
pub fn select(
    goal: Goal,
    experience: Experience,
    count: usize,
    random: &mut impl RandomSource,
) -> Vec<PrescribedExercise> {
    let mut pool: Vec<_> = ACCESSORY_EXERCISES.to_vec();
    shuffle(&mut pool, random);

    let p = AccessoryPrescription::for_selection(goal, experience);
    pool.into_iter()
        .take(count.min(ACCESSORY_EXERCISES.len()))
        .map(|e| PrescribedExercise::new(e, Category::Accessory, p.sets, p.reps, p.intensity, p.rest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_prescription_for_strength_ignores_experience() {
        let beginner = AccessoryPrescription::for_selection(Goal::Strength, Experience::Beginner);
        let advanced = AccessoryPrescription::for_selection(Goal::Strength, Experience::Advanced);
        assert_eq!(beginner, advanced);
        assert_eq!(beginner.sets, 3);
        assert_eq!(beginner.reps, "6-10");
        assert_eq!(beginner.intensity, "RPE 8-9");
        assert_eq!(beginner.rest, "2-3 minutes");
    }

    #[test]
    fn test_prescription_volume_by_experience() {
        for goal in [Goal::Hypertrophy, Goal::Powerlifting] {
            let sets: Vec<_> = [Experience::Beginner, Experience::Intermediate, Experience::Advanced]
                .into_iter()
                .map(|x| AccessoryPrescription::for_selection(goal, x).sets)
                .collect();
            assert_eq!(sets, vec![3, 4, 5]);
            let p = AccessoryPrescription::for_selection(goal, Experience::Intermediate);
            assert_eq!((p.reps, p.intensity, p.rest), ("8-20", "RPE 7-9", "1-2 minutes"));
        }
    }

    #[test]
    fn test_select_returns_distinct_accessories() {
        let mut random = RngSource::seeded(12);
        let picked = select(Goal::Hypertrophy, Experience::Advanced, 4, &mut random);
        assert_eq!(picked.len(), 4);
        let keys: HashSet<_> = picked.iter().map(|e| e.exercise.key).collect();
        assert_eq!(keys.len(), 4);
        assert!(picked.iter().all(|e| e.category == Category::Accessory && e.sets == 5));
    }

    #[test]
    fn test_draw_size_fits_catalog() {
        assert_eq!(ACCESSORY_DRAW, 4);
        assert!(ACCESSORY_DRAW <= ACCESSORY_EXERCISES.len());
        let picked = select(Goal::Powerlifting, Experience::Beginner, ACCESSORY_DRAW, &mut RngSource::seeded(9));
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_select_never_exceeds_catalog() {
        let mut random = RngSource::seeded(12);
        let picked = select(Goal::Strength, Experience::Beginner, 50, &mut random);
        assert_eq!(picked.len(), ACCESSORY_EXERCISES.len());
    }

    #[test]
    fn test_first_four_uniform_over_many_trials() {
        // Each of 15 accessories lands in the first 4 with probability 4/15
        const TRIALS: usize = 9000;
        let mut random = RngSource::seeded(31337);
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for _ in 0..TRIALS {
            for e in select(Goal::Hypertrophy, Experience::Beginner, 4, &mut random) {
                *counts.entry(e.exercise.key).or_insert(0) += 1;
            }
        }
        assert_eq!(counts.len(), ACCESSORY_EXERCISES.len());
        let expected = TRIALS * 4 / ACCESSORY_EXERCISES.len();
        for (key, count) in counts {
            let deviation = count.abs_diff(expected) as f64 / expected as f64;
            assert!(deviation < 0.1, "{} drawn {} times, expected ~{}", key, count, expected);
        }
    }

    #[test]
    fn test_first_slot_uniform_over_many_trials() {
        const TRIALS: usize = 15000;
        let mut random = RngSource::seeded(8);
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let first = select(Goal::Strength, Experience::Beginner, 1, &mut random);
            *counts.entry(first[0].exercise.key).or_insert(0) += 1;
        }
        for (key, count) in counts {
            assert!((800..1200).contains(&count), "{} first {} times", key, count);
        }
    }
}
