//! Error types for plan generation and configuration

/// A required selection is absent or not recognised. No plan is produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelectionError {
    #[error("please select a workout duration")]
    MissingDuration,
    #[error("please select an experience level")]
    MissingExperience,
    #[error("please select a training goal")]
    MissingGoal,
    #[error("unknown experience level: {0}")]
    UnknownExperience(String),
    #[error("unsupported duration: {minutes} minutes (offered: {offered:?})")]
    UnsupportedDuration { minutes: u32, offered: Vec<u32> },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duration menu is empty")]
    EmptyDurations,
    #[error("duration menu contains zero minutes")]
    ZeroDuration,
}
