//! Impact weights and risk scoring.

use datascan_core::{PiiType, RiskCategory};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Impact assigned to PII types absent from the table.
pub const DEFAULT_IMPACT: u8 = 2;

/// Severity weight per PII type on a 1-5 scale.
static IMPACT_TABLE: Lazy<HashMap<PiiType, u8>> = Lazy::new(|| {
    HashMap::from([
        (PiiType::Ssn, 5),
        (PiiType::CreditCard, 5),
        (PiiType::NationalId, 5),
        (PiiType::Medical, 5),
        (PiiType::Email, 4),
        (PiiType::Phone, 4),
        (PiiType::Address, 4),
        (PiiType::GpsCoordinates, 4),
        (PiiType::Iban, 4),
        (PiiType::DateOfBirth, 3),
        (PiiType::Dob, 3),
        (PiiType::Name, 3),
        (PiiType::Salary, 3),
        (PiiType::Id, 2),
        (PiiType::Age, 2),
        (PiiType::Gender, 2),
        (PiiType::IpAddress, 2),
        (PiiType::Url, 1),
    ])
});

/// Returns the impact weight for a PII type, defaulting to
/// [`DEFAULT_IMPACT`] for unmapped types.
#[must_use]
pub fn impact_for(pii_type: PiiType) -> u8 {
    IMPACT_TABLE.get(&pii_type).copied().unwrap_or(DEFAULT_IMPACT)
}

/// Computes the risk score: `min(20 x impact x uniqueness, 100)`.
///
/// Severity of exposure amplified by re-identifiability: a fully
/// distinct column concentrates the type's inherent sensitivity, a
/// low-cardinality column dilutes it.
#[must_use]
pub fn risk_score(impact: u8, uniqueness: f64) -> f64 {
    (20.0 * f64::from(impact) * uniqueness).min(100.0)
}

/// Maps a risk score to its category.
///
/// Boundaries are closed on the lower side: exactly 30 is Low, exactly
/// 70 is Medium.
#[must_use]
pub fn categorize(score: f64) -> RiskCategory {
    if score <= 30.0 {
        RiskCategory::Low
    } else if score <= 70.0 {
        RiskCategory::Medium
    } else {
        RiskCategory::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_lookup() {
        assert_eq!(impact_for(PiiType::Ssn), 5);
        assert_eq!(impact_for(PiiType::Url), 1);
        assert_eq!(impact_for(PiiType::Id), 2);
    }

    #[test]
    fn test_risk_formula() {
        assert!((risk_score(5, 1.0) - 100.0).abs() < f64::EPSILON);
        assert!((risk_score(3, 0.5) - 30.0).abs() < f64::EPSILON);
        // Zero uniqueness is always zero risk.
        assert!((risk_score(5, 0.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_risk_capped_at_100() {
        // 20 x 5 x 1.0 already hits the cap exactly; anything above clamps.
        assert!((risk_score(5, 1.0) - 100.0).abs() < f64::EPSILON);
        assert!(risk_score(5, 0.999) < 100.0);
    }

    #[test]
    fn test_category_boundaries_closed_below() {
        assert_eq!(categorize(30.0), RiskCategory::Low);
        assert_eq!(categorize(30.01), RiskCategory::Medium);
        assert_eq!(categorize(70.0), RiskCategory::Medium);
        assert_eq!(categorize(70.01), RiskCategory::High);
        assert_eq!(categorize(100.0), RiskCategory::High);
    }
}
