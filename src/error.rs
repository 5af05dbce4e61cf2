use thiserror::Error;

/// Failures surfaced by the projection pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoleMapError {
    /// The caller passed something the computation cannot work with,
    /// e.g. an empty point set or a zero aspect ratio.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The hole has no polygon points and no vectors. This is an expected
    /// state; callers should suppress rendering rather than report a fault.
    #[error("hole has no renderable content")]
    NoContent,
}

pub type Result<T> = std::result::Result<T, HoleMapError>;
