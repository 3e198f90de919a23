//! Dataset-level orchestration.

use crate::config::DetectorConfig;
use crate::detector::{reconcile, DetectionMethod, NameHeuristic, PatternDetector};
use crate::recommend::recommend;
use crate::risk::{categorize, impact_for, risk_score};
use datascan_core::{Column, DataType, PiiType, RiskCategory, Table};
use serde::{Deserialize, Serialize};

/// The per-column analysis result for a flagged column.
///
/// Confidence and uniqueness are ratios in `[0, 1]`; render them as
/// percentages only at the presentation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Source column name.
    pub column_name: String,
    /// Detected PII type.
    pub pii_type: PiiType,
    /// Which detector produced the adopted signal.
    pub method: DetectionMethod,
    /// Adopted confidence, in `[0, 1]`.
    pub confidence: f64,
    /// Severity weight (1-5).
    pub impact: u8,
    /// Fraction of distinct values, in `[0, 1]`.
    pub uniqueness: f64,
    /// Risk score (0-100), rounded to two decimals.
    pub risk_score: f64,
    /// Risk category.
    pub risk_category: RiskCategory,
    /// Recommended anonymization action, marker-prefixed.
    pub recommended_action: String,
    /// Declared column data type.
    pub data_type: DataType,
    /// Count of distinct non-missing values.
    pub distinct_values: usize,
    /// Count of missing values.
    pub missing_values: usize,
}

impl Finding {
    /// Renders the confidence as a percentage string, e.g. `"80.00%"`.
    #[must_use]
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }

    /// Renders the uniqueness as a percentage string.
    #[must_use]
    pub fn uniqueness_percent(&self) -> String {
        format!("{:.2}%", self.uniqueness * 100.0)
    }
}

/// Ordered findings for one analyzed table.
///
/// Findings appear in source column order; columns with no detection
/// are absent entirely, never present as zero-confidence rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of columns scanned, flagged or not.
    pub columns_scanned: usize,
    /// One finding per flagged column, in source column order.
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    /// Returns true if no column was flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Looks up the finding for a column.
    #[must_use]
    pub fn finding(&self, column_name: &str) -> Option<&Finding> {
        self.findings.iter().find(|f| f.column_name == column_name)
    }

    /// Aggregates the findings into summary counts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            columns_scanned: self.columns_scanned,
            flagged: self.findings.len(),
            ..ReportSummary::default()
        };

        for finding in &self.findings {
            match finding.risk_category {
                RiskCategory::High => summary.high_risk += 1,
                RiskCategory::Medium => summary.medium_risk += 1,
                RiskCategory::Low => summary.low_risk += 1,
            }
            summary.max_risk = summary.max_risk.max(finding.risk_score);
        }
        if !self.findings.is_empty() {
            let total: f64 = self.findings.iter().map(|f| f.risk_score).sum();
            summary.average_risk = total / self.findings.len() as f64;
        }

        summary
    }
}

/// Aggregate counts over one report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Columns scanned.
    pub columns_scanned: usize,
    /// Columns flagged.
    pub flagged: usize,
    /// Flagged columns in the High tier.
    pub high_risk: usize,
    /// Flagged columns in the Medium tier.
    pub medium_risk: usize,
    /// Flagged columns in the Low tier.
    pub low_risk: usize,
    /// Mean risk score over flagged columns (0 when none).
    pub average_risk: f64,
    /// Maximum risk score over flagged columns (0 when none).
    pub max_risk: f64,
}

/// Scans a table column by column and assembles the findings.
#[derive(Debug, Clone, Default)]
pub struct DatasetAnalyzer {
    pattern_detector: PatternDetector,
    name_heuristic: NameHeuristic,
}

impl DatasetAnalyzer {
    /// Creates an analyzer with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom pattern thresholds.
    #[must_use]
    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            pattern_detector: PatternDetector::with_config(config),
            name_heuristic: NameHeuristic::new(),
        }
    }

    /// Analyzes every column in source order.
    #[must_use]
    pub fn analyze(&self, table: &Table) -> AnalysisReport {
        let findings: Vec<Finding> = table
            .columns()
            .iter()
            .filter_map(|column| self.analyze_column(column))
            .collect();

        tracing::debug!(
            columns = table.column_count(),
            flagged = findings.len(),
            "dataset analysis complete"
        );

        AnalysisReport {
            columns_scanned: table.column_count(),
            findings,
        }
    }

    /// Analyzes columns in parallel; output is identical to
    /// [`analyze`](Self::analyze), with order restored from the column
    /// index.
    #[cfg(feature = "rayon")]
    #[must_use]
    pub fn analyze_parallel(&self, table: &Table) -> AnalysisReport {
        use rayon::prelude::*;

        let mut indexed: Vec<(usize, Finding)> = table
            .columns()
            .par_iter()
            .enumerate()
            .filter_map(|(index, column)| self.analyze_column(column).map(|f| (index, f)))
            .collect();
        indexed.sort_by_key(|(index, _)| *index);

        AnalysisReport {
            columns_scanned: table.column_count(),
            findings: indexed.into_iter().map(|(_, f)| f).collect(),
        }
    }

    /// Analyzes one column; `None` when the column is unflagged.
    #[must_use]
    pub fn analyze_column(&self, column: &Column) -> Option<Finding> {
        let pattern_signal = self.pattern_detector.detect(column);
        let heuristic_signal = self.name_heuristic.detect(column.name());

        let (pii_type, confidence, method) = reconcile(pattern_signal, heuristic_signal)?;

        let uniqueness = column.uniqueness();
        let impact = impact_for(pii_type);
        // Categorize the raw score; rounding is display-only.
        let raw_score = risk_score(impact, uniqueness);
        let risk_category = categorize(raw_score);
        let score = round2(raw_score);

        Some(Finding {
            column_name: column.name().to_string(),
            pii_type,
            method,
            confidence,
            impact,
            uniqueness,
            risk_score: score,
            risk_category,
            recommended_action: recommend(pii_type, risk_category),
            data_type: column.data_type(),
            distinct_values: column.distinct_count(),
            missing_values: column.missing_count(),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
