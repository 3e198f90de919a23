//! # Datascan Detect
//!
//! Column-level PII detection and privacy risk scoring.
//!
//! The engine scans an already-parsed [`Table`](datascan_core::Table)
//! column by column: cell values are tested against a fixed pattern
//! library, column names against a keyword library, the two signals are
//! reconciled into a single detection, and flagged columns are scored by
//! severity weighted with re-identifiability. No I/O, rendering, or
//! export happens here; the sole output is an ordered findings list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod config;
pub mod detector;
pub mod error;
pub mod keywords;
pub mod patterns;
pub mod recommend;
pub mod risk;

pub use analyzer::{AnalysisReport, DatasetAnalyzer, Finding, ReportSummary};
pub use config::DetectorConfig;
pub use detector::{reconcile, DetectionMethod, NameHeuristic, PatternDetector, Signal};
pub use error::{DetectError, DetectResult};
pub use keywords::KeywordLibrary;
pub use patterns::{PatternLibrary, PATTERN_PRIORITY};
pub use recommend::{recommend, urgency_marker};
pub use risk::{categorize, impact_for, risk_score};

/// Re-export of the shared vocabulary types.
pub use datascan_core::{PiiType, RiskCategory};
