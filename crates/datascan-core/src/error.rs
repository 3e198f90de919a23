//! Core error types.

use thiserror::Error;

/// Core result type.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while assembling tabular structures.
///
/// Column analysis itself never fails; these errors only cover malformed
/// table construction at the ingestion boundary.
#[derive(Error, Debug)]
pub enum DataError {
    /// A column name is already present in the table.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Column lengths disagree where a rectangular table is required.
    #[error("column '{name}' has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Offending column name.
        name: String,
        /// Expected row count.
        expected: usize,
        /// Actual row count.
        actual: usize,
    },
}

impl DataError {
    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateColumn(_) => "DATA_DUPLICATE_COLUMN",
            Self::LengthMismatch { .. } => "DATA_LENGTH_MISMATCH",
        }
    }

    /// Returns true if the error is recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DuplicateColumn(_))
    }
}
