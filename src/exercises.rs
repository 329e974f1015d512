//! Exercise catalog - compound lifts and accessory work

use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Compound,  // Multi-joint main lifts
    Accessory, // Secondary / isolation work
}

/// Immutable catalog entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExerciseDef {
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub primary_muscles: &'static [&'static str],
    pub notes: &'static str,
}

pub const SQUAT: ExerciseDef = ExerciseDef {
    key: "squat",
    name: "Back Squat",
    primary_muscles: &["quadriceps", "glutes"],
    notes: "King of lower body exercises. Focus on depth and control.",
};

pub const FRONT_SQUAT: ExerciseDef = ExerciseDef {
    key: "frontSquat",
    name: "Front Squat",
    primary_muscles: &["quadriceps", "core"],
    notes: "Excellent for quad development and core strength.",
};

pub const DEADLIFT: ExerciseDef = ExerciseDef {
    key: "deadlift",
    name: "Conventional Deadlift",
    primary_muscles: &["hamstrings", "glutes", "back"],
    notes: "Hip hinge movement pattern. Keep spine neutral.",
};

pub const ROMANIAN_DEADLIFT: ExerciseDef = ExerciseDef {
    key: "romanianDeadlift",
    name: "Romanian Deadlift",
    primary_muscles: &["hamstrings", "glutes"],
    notes: "Focus on hip hinge with straight legs. Great for posterior chain.",
};

pub const BENCH_PRESS: ExerciseDef = ExerciseDef {
    key: "benchPress",
    name: "Barbell Bench Press",
    primary_muscles: &["chest", "triceps", "shoulders"],
    notes: "Retract shoulder blades, arch slightly, control descent.",
};

pub const OVERHEAD_PRESS: ExerciseDef = ExerciseDef {
    key: "overheadPress",
    name: "Standing Overhead Press",
    primary_muscles: &["shoulders", "triceps", "core"],
    notes: "Full body tension. Press in straight line overhead.",
};

pub const BARBELL_ROW: ExerciseDef = ExerciseDef {
    key: "barbellRow",
    name: "Bent-Over Barbell Row",
    primary_muscles: &["lats", "rhomboids", "rear delts"],
    notes: "Hinge at hips, squeeze shoulder blades together.",
};

pub const PULLUP: ExerciseDef = ExerciseDef {
    key: "pullup",
    name: "Pull-ups/Chin-ups",
    primary_muscles: &["lats", "biceps"],
    notes: "Full range of motion. Control both up and down phases.",
};

/// Main barbell lifts
pub const COMPOUND_EXERCISES: &[ExerciseDef] = &[
    SQUAT,
    FRONT_SQUAT,
    DEADLIFT,
    ROMANIAN_DEADLIFT,
    BENCH_PRESS,
    OVERHEAD_PRESS,
    BARBELL_ROW,
    PULLUP,
];

/// Supplementary work drawn after the main lifts
pub const ACCESSORY_EXERCISES: &[ExerciseDef] = &[
    ExerciseDef {
        key: "inclinePress",
        name: "Incline Dumbbell Press",
        primary_muscles: &["upper chest", "shoulders"],
        notes: "30-45 degree angle. Focus on stretch and contraction.",
    },
    ExerciseDef {
        key: "dumbbellRow",
        name: "Single-Arm Dumbbell Row",
        primary_muscles: &["lats", "rhomboids"],
        notes: "Support with bench. Focus on lat engagement.",
    },
    ExerciseDef {
        key: "bulgarianSplit",
        name: "Bulgarian Split Squats",
        primary_muscles: &["quadriceps", "glutes"],
        notes: "Unilateral strength. Focus on front leg work.",
    },
    ExerciseDef {
        key: "walkingLunges",
        name: "Walking Lunges",
        primary_muscles: &["quadriceps", "glutes"],
        notes: "Step into lunge, drive through front heel.",
    },
    ExerciseDef {
        key: "hipThrust",
        name: "Hip Thrusts",
        primary_muscles: &["glutes"],
        notes: "Squeeze glutes at top. Focus on hip extension.",
    },
    ExerciseDef {
        key: "latPulldown",
        name: "Lat Pulldown",
        primary_muscles: &["lats", "rhomboids"],
        notes: "Lean back slightly, pull to upper chest.",
    },
    ExerciseDef {
        key: "facePulls",
        name: "Cable Face Pulls",
        primary_muscles: &["rear delts", "rhomboids"],
        notes: "High rep exercise for rear delt health.",
    },
    ExerciseDef {
        key: "legPress",
        name: "Leg Press",
        primary_muscles: &["quadriceps", "glutes"],
        notes: "Great for high volume quad training. Control the descent.",
    },
    ExerciseDef {
        key: "legCurls",
        name: "Lying Leg Curls",
        primary_muscles: &["hamstrings"],
        notes: "Isolation for hamstrings. Squeeze at the top.",
    },
    ExerciseDef {
        key: "legExtensions",
        name: "Leg Extensions",
        primary_muscles: &["quadriceps"],
        notes: "Quad isolation. Can train to failure safely.",
    },
    ExerciseDef {
        key: "lateralRaises",
        name: "Lateral Raises",
        primary_muscles: &["side delts"],
        notes: "Essential for shoulder width. Control the negative.",
    },
    ExerciseDef {
        key: "bicepCurls",
        name: "Dumbbell Bicep Curls",
        primary_muscles: &["biceps"],
        notes: "Full range of motion. Avoid swinging.",
    },
    ExerciseDef {
        key: "tricepExtensions",
        name: "Overhead Tricep Extensions",
        primary_muscles: &["triceps"],
        notes: "Stretch the triceps. Keep elbows stable.",
    },
    ExerciseDef {
        key: "calfRaises",
        name: "Standing Calf Raises",
        primary_muscles: &["calves"],
        notes: "Full range of motion. Pause at the top.",
    },
    ExerciseDef {
        key: "plank",
        name: "Plank",
        primary_muscles: &["core"],
        notes: "Maintain straight line from head to heels.",
    },
];

pub fn exercises_in(category: Category) -> &'static [ExerciseDef] {
    match category {
        Category::Compound => COMPOUND_EXERCISES,
        Category::Accessory => ACCESSORY_EXERCISES,
    }
}

pub fn find_exercise(key: &str) -> Option<(Category, &'static ExerciseDef)> {
    Category::iter()
        .find_map(|c| exercises_in(c).iter().find(|e| e.key == key).map(|e| (c, e)))
}
