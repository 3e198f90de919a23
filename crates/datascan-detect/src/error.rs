//! Detection error types.

use thiserror::Error;

/// Detection result type.
pub type DetectResult<T> = Result<T, DetectError>;

/// Detection errors.
///
/// The analysis path degrades gracefully and never surfaces these;
/// they cover library construction and configuration problems only.
#[derive(Error, Debug)]
pub enum DetectError {
    /// A library regex failed to compile.
    #[error("pattern compilation error: {0}")]
    PatternCompilation(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DetectError {
    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PatternCompilation(_) => "DETECT_PATTERN_COMPILATION",
            Self::InvalidConfig(_) => "DETECT_INVALID_CONFIG",
        }
    }

    /// Returns true if the error is recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PatternCompilation(_))
    }
}

impl From<regex::Error> for DetectError {
    fn from(e: regex::Error) -> Self {
        Self::PatternCompilation(e.to_string())
    }
}
