/// Convenience result type used across the crate.
pub type ArtResult<T> = Result<T, ArtError>;

/// Error taxonomy for tree construction, remapping and rendering.
///
/// Every variant describes a caller-input problem detected before any pixel is
/// computed; nothing fails part-way through an evaluation.
#[derive(thiserror::Error, Debug)]
pub enum ArtError {
    /// `min_depth > max_depth`, checked against the values the caller passed.
    #[error("invalid depth range: min_depth {min_depth} is greater than max_depth {max_depth}")]
    InvalidRange {
        /// Requested minimum depth.
        min_depth: i32,
        /// Requested maximum depth.
        max_depth: i32,
    },

    /// Image width or height is zero.
    #[error("invalid dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A remap was asked to map from an interval of zero width.
    #[error("degenerate source interval [{min}, {max}]")]
    DegenerateInterval {
        /// Source interval lower bound.
        min: f64,
        /// Source interval upper bound.
        max: f64,
    },

    /// Invalid configuration or render options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArtError {
    /// Build an [`ArtError::InvalidRange`] value.
    pub fn invalid_range(min_depth: i32, max_depth: i32) -> Self {
        Self::InvalidRange {
            min_depth,
            max_depth,
        }
    }

    /// Build an [`ArtError::InvalidDimensions`] value.
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    /// Build an [`ArtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ArtError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
