//! Typed columns and cell values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declared element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Free-form text.
    Text,
    /// Signed integers.
    Integer,
    /// Floating point numbers.
    Float,
    /// Booleans.
    Boolean,
    /// Calendar dates.
    Date,
}

impl DataType {
    /// Returns true if values of this type are free-form text.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Returns the presentation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Float value.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Date value.
    Date(NaiveDate),
    /// Missing value.
    Null,
}

impl Value {
    /// Returns true if the value is missing.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value as text; `None` for missing values.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Date(d) => Some(d.to_string()),
            Self::Null => None,
        }
    }

}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

/// A named, read-only sequence of uniformly typed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data_type: DataType,
    values: Vec<Value>,
}

impl Column {
    /// Creates a column from a declared type and values.
    pub fn new(name: impl Into<String>, data_type: DataType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            data_type,
            values,
        }
    }

    /// Creates a text column where every value is present.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            DataType::Text,
            values.into_iter().map(|s| Value::Text(s.into())).collect(),
        )
    }

    /// Creates an integer column where every value is present.
    pub fn integers<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::new(
            name,
            DataType::Integer,
            values.into_iter().map(Value::Integer).collect(),
        )
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared element type.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the values in row order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the total value count, missing values included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of missing values.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Returns the number of distinct non-missing values.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.values
            .iter()
            .filter_map(Value::to_text)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Returns the fraction of distinct values in `[0, 1]`.
    ///
    /// Missing values count as regular values for this ratio: they form a
    /// single distinct bucket and contribute to the total. Empty columns
    /// yield 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniqueness(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        // Missing values render as None and share one bucket.
        let distinct = self
            .values
            .iter()
            .map(Value::to_text)
            .collect::<HashSet<Option<String>>>()
            .len();
        distinct as f64 / self.values.len() as f64
    }

    /// Returns the non-missing values rendered as text, in row order.
    #[must_use]
    pub fn text_values(&self) -> Vec<String> {
        self.values.iter().filter_map(Value::to_text).collect()
    }
}
