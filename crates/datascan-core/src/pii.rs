//! PII type and risk category vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of personally identifiable information the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiType {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Social Security Number.
    Ssn,
    /// Credit card number.
    CreditCard,
    /// IP address.
    IpAddress,
    /// Web URL.
    Url,
    /// Date of birth (value-shaped).
    DateOfBirth,
    /// National ID number.
    NationalId,
    /// GPS coordinates.
    GpsCoordinates,
    /// International bank account number.
    Iban,
    /// Physical address.
    Address,
    /// Person's name.
    Name,
    /// Person-scoped identifier (employee ID, patient ID, ...).
    Id,
    /// Date of birth (name-derived).
    Dob,
    /// Gender.
    Gender,
    /// Age.
    Age,
    /// Salary or income.
    Salary,
    /// Medical information.
    Medical,
}

impl PiiType {
    /// Returns the presentation label, e.g. `CREDIT_CARD`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Ssn => "SSN",
            Self::CreditCard => "CREDIT_CARD",
            Self::IpAddress => "IP_ADDRESS",
            Self::Url => "URL",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::NationalId => "NATIONAL_ID",
            Self::GpsCoordinates => "GPS_COORDINATES",
            Self::Iban => "IBAN",
            Self::Address => "ADDRESS",
            Self::Name => "NAME",
            Self::Id => "ID",
            Self::Dob => "DOB",
            Self::Gender => "GENDER",
            Self::Age => "AGE",
            Self::Salary => "SALARY",
            Self::Medical => "MEDICAL",
        }
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk category for a scored column.
///
/// Ordered so that `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Score in (0, 30].
    Low,
    /// Score in (30, 70].
    Medium,
    /// Score above 70.
    High,
}

impl RiskCategory {
    /// Returns the presentation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
