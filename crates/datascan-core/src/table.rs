//! Ordered tables of named columns.

use crate::{Column, DataError, DataResult};
use serde::{Deserialize, Serialize};

/// An ordered collection of uniquely named columns.
///
/// Column order is preserved exactly as inserted; analysis output follows
/// this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from columns, rejecting duplicate names.
    ///
    /// # Errors
    /// Returns [`DataError::DuplicateColumn`] if two columns share a name.
    pub fn with_columns(columns: Vec<Column>) -> DataResult<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push(column)?;
        }
        Ok(table)
    }

    /// Appends a column.
    ///
    /// # Errors
    /// Returns [`DataError::DuplicateColumn`] if a column with the same
    /// name is already present.
    pub fn push(&mut self, column: Column) -> DataResult<()> {
        if self.columns.iter().any(|c| c.name() == column.name()) {
            return Err(DataError::DuplicateColumn(column.name().to_string()));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Returns the columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the common row count for a rectangular table.
    ///
    /// # Errors
    /// Returns [`DataError::LengthMismatch`] naming the first column whose
    /// length differs from the first column's.
    pub fn row_count(&self) -> DataResult<usize> {
        let Some(first) = self.columns.first() else {
            return Ok(0);
        };
        let expected = first.len();
        for column in &self.columns[1..] {
            if column.len() != expected {
                return Err(DataError::LengthMismatch {
                    name: column.name().to_string(),
                    expected,
                    actual: column.len(),
                });
            }
        }
        Ok(expected)
    }
}
