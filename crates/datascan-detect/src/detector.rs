//! The two per-column detectors and signal reconciliation.

use crate::config::DetectorConfig;
use crate::keywords::{is_excluded_name, BUILTIN_KEYWORDS};
use crate::patterns::{BUILTIN_PATTERNS, PATTERN_PRIORITY};
use datascan_core::{Column, PiiType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence when a keyword equals the whole normalized name.
pub const EXACT_MATCH_CONFIDENCE: f64 = 0.9;
/// Confidence when a keyword appears as a `_kw` / `kw_` token.
pub const TOKEN_MATCH_CONFIDENCE: f64 = 0.8;
/// Confidence when a keyword equals the first or last underscore segment.
pub const SEGMENT_MATCH_CONFIDENCE: f64 = 0.7;

/// Which detector produced the adopted signal for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Value patterns matched the cell contents.
    Pattern,
    /// The column name matched a keyword.
    NameHeuristic,
    /// No detection.
    None,
}

impl DetectionMethod {
    /// Returns the presentation label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "Pattern-Based",
            Self::NameHeuristic => "Column Name Heuristic",
            Self::None => "None",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detector's output for one column: the type it settled on and its
/// confidence in `[0, 1]`, or nothing.
pub type Signal = Option<(PiiType, f64)>;

/// Value-based detector: tests every library pattern against a column's
/// cell contents.
#[derive(Debug, Clone, Default)]
pub struct PatternDetector {
    config: DetectorConfig,
}

impl PatternDetector {
    /// Creates a detector with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector with custom thresholds.
    #[must_use]
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Detects the best-matching PII type for a column's values.
    ///
    /// Non-textual columns, empty columns, and columns whose mean value
    /// length exceeds the prose cutoff all yield no detection. A pattern
    /// becomes a candidate when its match ratio clears the candidate
    /// threshold and the first sampled value is short enough; adoption
    /// then follows the priority order, falling back to the highest
    /// ratio. Either way the adopted ratio must clear the adoption
    /// threshold.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn detect(&self, column: &Column) -> Signal {
        if !column.data_type().is_textual() {
            return None;
        }

        let values = column.text_values();
        if values.is_empty() {
            return None;
        }

        let total_chars: usize = values.iter().map(|v| v.chars().count()).sum();
        let mean_length = total_chars as f64 / values.len() as f64;
        if mean_length > self.config.max_mean_length {
            return None;
        }

        // Length guard sampled from the first value only.
        let sample_length = values[0].chars().count();

        let mut candidates: Vec<(PiiType, f64)> = Vec::new();
        for pattern in BUILTIN_PATTERNS.iter() {
            let hits = values.iter().filter(|v| pattern.is_match(v)).count();
            let ratio = hits as f64 / values.len() as f64;
            if ratio > self.config.min_candidate_ratio {
                if sample_length > self.config.max_sample_length {
                    continue;
                }
                candidates.push((pattern.pii_type(), ratio));
            }
        }

        if candidates.is_empty() {
            return None;
        }

        for priority_type in PATTERN_PRIORITY {
            if let Some(&(pii_type, ratio)) = candidates
                .iter()
                .find(|(candidate, _)| *candidate == priority_type)
            {
                if ratio > self.config.min_adopt_ratio {
                    return Some((pii_type, ratio));
                }
            }
        }

        // Fallback: highest ratio, first-encountered on exact ties.
        let mut best = candidates[0];
        for &candidate in &candidates[1..] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        (best.1 > self.config.min_adopt_ratio).then_some(best)
    }
}

/// Name-based detector: matches a column name against the keyword
/// library.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristic;

impl NameHeuristic {
    /// Creates the heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Detects a PII type from the column name alone.
    ///
    /// The exclusion list wins over every keyword. Keywords are tested
    /// longest first; the first one that qualifies under a confidence
    /// tier decides. A keyword that is merely a substring without
    /// qualifying under any tier does not match and scanning continues.
    #[must_use]
    pub fn detect(&self, column_name: &str) -> Signal {
        let normalized = column_name.trim().to_lowercase();

        if is_excluded_name(&normalized) {
            return None;
        }

        for &(pii_type, keyword) in BUILTIN_KEYWORDS.pairs() {
            if !normalized.contains(keyword) {
                continue;
            }
            if keyword == normalized {
                return Some((pii_type, EXACT_MATCH_CONFIDENCE));
            }
            if normalized.contains(&format!("_{keyword}"))
                || normalized.contains(&format!("{keyword}_"))
            {
                return Some((pii_type, TOKEN_MATCH_CONFIDENCE));
            }
            let mut segments = normalized.split('_');
            let first = segments.next();
            let last = normalized.rsplit('_').next();
            if first == Some(keyword) || last == Some(keyword) {
                return Some((pii_type, SEGMENT_MATCH_CONFIDENCE));
            }
        }

        None
    }
}

/// Reconciles the two signals into at most one adopted detection.
///
/// The pattern signal wins only on strictly greater confidence; the
/// heuristic wins whenever its confidence is positive. The asymmetry is
/// a deliberate precedence policy: on an exact confidence tie the
/// heuristic result is adopted.
#[must_use]
pub fn reconcile(pattern: Signal, heuristic: Signal) -> Option<(PiiType, f64, DetectionMethod)> {
    let pattern_confidence = pattern.map_or(0.0, |(_, c)| c);
    let heuristic_confidence = heuristic.map_or(0.0, |(_, c)| c);

    if pattern_confidence > heuristic_confidence {
        pattern.map(|(t, c)| (t, c, DetectionMethod::Pattern))
    } else if heuristic_confidence > 0.0 {
        heuristic.map(|(t, c)| (t, c, DetectionMethod::NameHeuristic))
    } else {
        None
    }
}
