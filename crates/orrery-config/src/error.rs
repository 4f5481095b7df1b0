//! Configuration error types.

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The configured time-scale is zero, negative, or not finite.
    #[error("time scale must be a positive number, got {0}")]
    InvalidTimeScale(f32),

    /// Camera distance bounds are inverted or non-positive.
    #[error("camera distance range [{min}, {max}] is invalid")]
    InvalidDistanceRange {
        /// Configured minimum distance.
        min: f32,
        /// Configured maximum distance.
        max: f32,
    },

    /// Asteroid belt edges are negative or not finite.
    #[error("asteroid belt band [{inner}, {outer}] is invalid")]
    InvalidBeltBand {
        /// Configured inner radius.
        inner: f32,
        /// Configured outer radius.
        outer: f32,
    },

    /// Fly-to duration is negative or not finite.
    #[error("transition duration must be a finite non-negative number, got {0}")]
    InvalidTransitionDuration(f32),

    /// The easing name is not one of the known curves.
    #[error("unknown transition easing '{0}'")]
    UnknownEasing(String),
}
