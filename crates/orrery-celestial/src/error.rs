//! Registry error types.

/// Errors raised while loading or registering body definitions.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The body's orbital radius is negative or not a number.
    #[error("body '{id}' has invalid orbital radius {radius}")]
    NegativeOrbitalRadius {
        /// Offending body id.
        id: String,
        /// Configured orbital radius.
        radius: f32,
    },

    /// The body's visual radius is zero, negative, or not a number.
    #[error("body '{id}' has invalid radius {radius}")]
    NonPositiveRadius {
        /// Offending body id.
        id: String,
        /// Configured radius.
        radius: f32,
    },

    /// Two definitions share the same id.
    #[error("body '{0}' is defined more than once")]
    DuplicateId(String),

    /// Failed to read a body table from disk.
    #[error("failed to read body table: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse a RON body table.
    #[error("failed to parse body table: {0}")]
    Parse(#[source] ron::error::SpannedError),
}
