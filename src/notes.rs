//! Research notes shown under every plan

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteTopic {
    Volume,
    ProximityToFailure,
    Frequency,
    ProgressiveOverload,
    IndividualVariation,
}

impl NoteTopic {
    pub fn name(&self) -> &'static str {
        match self {
            NoteTopic::Volume => "Volume",
            NoteTopic::ProximityToFailure => "Proximity to Failure",
            NoteTopic::Frequency => "Frequency",
            NoteTopic::ProgressiveOverload => "Progressive Overload",
            NoteTopic::IndividualVariation => "Individual Variation",
        }
    }
}

pub struct Note {
    pub topic: NoteTopic,
    pub text: &'static str,
}

pub const NOTES_TITLE: &str = "2025 Research Updates";
pub const NOTES_SOURCE: &str = "Based on Stronger by Science 2025 research reviews";

pub const NOTES: &[Note] = &[
    Note {
        topic: NoteTopic::Volume,
        text: "Latest meta-analysis shows benefits up to 25+ sets per muscle per week",
    },
    Note {
        topic: NoteTopic::ProximityToFailure,
        text: "Training closer to failure (RPE 8-9) maximizes hypertrophy",
    },
    Note {
        topic: NoteTopic::Frequency,
        text: "2-3x per week optimal for most muscle groups",
    },
    Note {
        topic: NoteTopic::ProgressiveOverload,
        text: "Primary driver of both strength and muscle gains",
    },
    Note {
        topic: NoteTopic::IndividualVariation,
        text: "Optimal volume varies significantly between individuals",
    },
];

/// One bullet line
pub fn format_note(note: &Note) -> String {
    format!("• {}: {}", note.topic.name(), note.text)
}

/// Title, bullets and source line
pub fn format_notes() -> String {
    let mut lines = vec![NOTES_TITLE.to_string()];
    lines.extend(NOTES.iter().map(format_note));
    lines.push(NOTES_SOURCE.to_string());
    lines.join("\n")
}
