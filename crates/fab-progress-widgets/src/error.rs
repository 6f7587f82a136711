//! Error types for the FAB progress widgets.

use thiserror::Error;

/// Errors raised while building or configuring a [`crate::FabProgressCircle`].
#[derive(Debug, Error)]
pub enum FabProgressError {
    /// The host must wrap exactly one child.
    #[error("FabProgressCircle must have exactly one child, found {found}")]
    ChildCount {
        /// Number of children supplied
        found: usize,
    },

    /// Sweep bounds outside `0 <= min < max <= 360`.
    #[error("Invalid sweep range: min {min} must be below max {max}, both within [0, 360]")]
    InvalidSweepRange {
        /// Minimum sweep in degrees
        min: f32,
        /// Maximum sweep in degrees
        max: f32,
    },

    /// Circle size attribute other than 1 (normal) or 2 (mini).
    #[error("Invalid circle size attribute: {0} (expected 1 = normal or 2 = mini)")]
    InvalidCircleSize(i32),

    /// Final icon cannot be drawn.
    #[error("Invalid final icon: {0}")]
    InvalidIcon(String),

    /// Invalid value for a configuration field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// Style file could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result alias for widget construction and configuration.
pub type Result<T> = std::result::Result<T, FabProgressError>;
