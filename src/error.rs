use thiserror::Error;

/// Unified result type for the picscatter crate.
pub type Result<T> = std::result::Result<T, ScatterError>;

/// A single problem found while validating scatter params.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no container has been set")]
    MissingContainer,
    #[error("no source images have been set")]
    EmptyItemSet,
    #[error("can't take {requested} items from {available} sources without repetition")]
    RepetitionConflict { requested: usize, available: usize },
    #[error("invalid rotation config: {0}")]
    InvalidRotationConfig(String),
    #[error("invalid resize config: {0}")]
    InvalidSizeConfig(String),
    #[error("container bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },
}

/// Errors surfaced by the picscatter entry points.
#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("invalid scatter params: {}", join_messages(.0))]
    InvalidConfig(Vec<ConfigError>),
    #[error("invalid scatter params JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
