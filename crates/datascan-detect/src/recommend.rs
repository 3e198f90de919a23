//! Anonymization action recommendations.

use datascan_core::{PiiType, RiskCategory};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback action for types with no specific suggestion.
pub const DEFAULT_ACTION: &str = "Apply appropriate anonymization technique";

/// Per-type anonymization suggestions.
static ACTION_TABLE: Lazy<HashMap<PiiType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (PiiType::Ssn, "Tokenization or full masking (e.g., ***-**-1234)"),
        (
            PiiType::CreditCard,
            "Tokenization or partial masking (e.g., ****-****-****-1234)",
        ),
        (PiiType::NationalId, "Tokenization or hashing with salt"),
        (
            PiiType::Email,
            "Hashing or partial masking (e.g., j***@example.com)",
        ),
        (PiiType::Phone, "Masking last 4 digits (e.g., ***-***-1234)"),
        (PiiType::Address, "Generalization to city/region level"),
        (
            PiiType::GpsCoordinates,
            "Reduce precision to neighborhood level",
        ),
        (PiiType::DateOfBirth, "Generalization to birth year only"),
        (PiiType::Dob, "Generalization to birth year only"),
        (PiiType::Name, "Pseudonymization or tokenization"),
        (PiiType::Id, "Tokenization or hashing"),
        (PiiType::Salary, "Generalization to salary ranges"),
        (
            PiiType::Medical,
            "Remove or encrypt; strict access control required",
        ),
        (PiiType::Iban, "Tokenization or partial masking"),
        (
            PiiType::IpAddress,
            "Remove last octet (e.g., 192.168.1.***)",
        ),
        (PiiType::Url, "Domain extraction only if needed"),
        (PiiType::Age, "Generalization to age ranges (e.g., 20-30)"),
        (
            PiiType::Gender,
            "Keep if necessary for analysis; consider aggregation",
        ),
    ])
});

/// Returns the urgency marker for a risk category.
#[must_use]
pub const fn urgency_marker(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::High => "\u{1f534} URGENT: ",
        RiskCategory::Medium => "\u{1f7e1} ",
        RiskCategory::Low => "\u{1f7e2} ",
    }
}

/// Builds the recommended action for a PII type at a risk category.
///
/// Pure function: a fixed per-type suggestion prefixed with the
/// category's urgency marker, with [`DEFAULT_ACTION`] standing in for
/// unmapped types.
#[must_use]
pub fn recommend(pii_type: PiiType, category: RiskCategory) -> String {
    let action = ACTION_TABLE
        .get(&pii_type)
        .copied()
        .unwrap_or(DEFAULT_ACTION);
    format!("{}{}", urgency_marker(category), action)
}
