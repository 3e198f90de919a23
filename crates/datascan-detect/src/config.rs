//! Detector configuration.

use crate::error::{DetectError, DetectResult};
use serde::{Deserialize, Serialize};

/// Pattern detector thresholds.
///
/// Defaults carry the canonical policy; adjusting them changes which
/// columns are flagged, not how findings are scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum match ratio for a pattern to become a candidate.
    pub min_candidate_ratio: f64,
    /// Minimum match ratio for a candidate to be adopted.
    pub min_adopt_ratio: f64,
    /// Mean value length above which a column is treated as prose and
    /// skipped entirely.
    pub max_mean_length: f64,
    /// Length cap on the first sampled value; a candidate whose column
    /// starts with a longer value is rejected.
    pub max_sample_length: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_candidate_ratio: 0.3,
            min_adopt_ratio: 0.5,
            max_mean_length: 500.0,
            max_sample_length: 200,
        }
    }
}

impl DetectorConfig {
    /// Creates a strict config (higher adoption bar).
    #[must_use]
    pub fn strict() -> Self {
        Self {
            min_candidate_ratio: 0.5,
            min_adopt_ratio: 0.8,
            ..Default::default()
        }
    }

    /// Creates a permissive config (lower adoption bar).
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            min_candidate_ratio: 0.2,
            min_adopt_ratio: 0.3,
            ..Default::default()
        }
    }

    /// Validates the thresholds.
    ///
    /// # Errors
    /// Returns [`DetectError::InvalidConfig`] when a ratio falls outside
    /// `[0, 1]` or a length cutoff is not positive.
    pub fn validate(&self) -> DetectResult<()> {
        for (name, ratio) in [
            ("min_candidate_ratio", self.min_candidate_ratio),
            ("min_adopt_ratio", self.min_adopt_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(DetectError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {ratio}"
                )));
            }
        }
        if self.max_mean_length <= 0.0 {
            return Err(DetectError::InvalidConfig(format!(
                "max_mean_length must be positive, got {}",
                self.max_mean_length
            )));
        }
        if self.max_sample_length == 0 {
            return Err(DetectError::InvalidConfig(
                "max_sample_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = DetectorConfig::default();
        assert!((config.min_candidate_ratio - 0.3).abs() < f64::EPSILON);
        assert!((config.min_adopt_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.max_mean_length - 500.0).abs() < f64::EPSILON);
        assert_eq!(config.max_sample_length, 200);
    }

    #[test]
    fn test_presets() {
        assert!(DetectorConfig::strict().min_adopt_ratio > DetectorConfig::default().min_adopt_ratio);
        assert!(DetectorConfig::permissive().min_adopt_ratio < DetectorConfig::default().min_adopt_ratio);
    }

    #[test]
    fn test_presets_validate() {
        assert!(DetectorConfig::default().validate().is_ok());
        assert!(DetectorConfig::strict().validate().is_ok());
        assert!(DetectorConfig::permissive().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_ratio() {
        let config = DetectorConfig {
            min_adopt_ratio: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "DETECT_INVALID_CONFIG");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_validate_rejects_zero_length_cutoffs() {
        let config = DetectorConfig {
            max_sample_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
