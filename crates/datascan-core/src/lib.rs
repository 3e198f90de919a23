//! # Datascan Core
//!
//! Core domain types for column-level privacy scanning.
//!
//! This crate provides the foundational types shared across the scanner:
//! - Cell values and declared column types
//! - Read-only named columns and tables
//! - PII type and risk category vocabularies
//! - Error types

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod column;
pub mod error;
pub mod pii;
pub mod table;

pub use column::{Column, DataType, Value};
pub use error::{DataError, DataResult};
pub use pii::{PiiType, RiskCategory};
pub use table::Table;
