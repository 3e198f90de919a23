//! The fixed PII pattern library.

use crate::error::DetectResult;
use datascan_core::PiiType;
use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in value patterns, constructed once at first use.
pub static BUILTIN_PATTERNS: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::builtin);

/// Tie-break order applied when several patterns clear the adoption bar.
///
/// More specific, higher-impact shapes come first: a 16-digit value
/// matches both the credit-card digit-group pattern and a generic long
/// digit run, and must resolve as a credit card.
pub const PATTERN_PRIORITY: [PiiType; 11] = [
    PiiType::CreditCard,
    PiiType::Ssn,
    PiiType::Iban,
    PiiType::Email,
    PiiType::Phone,
    PiiType::IpAddress,
    PiiType::GpsCoordinates,
    PiiType::DateOfBirth,
    PiiType::NationalId,
    PiiType::Address,
    PiiType::Url,
];

/// A compiled value pattern for one PII type.
pub struct CompiledPattern {
    pii_type: PiiType,
    regex: Regex,
}

impl CompiledPattern {
    /// Returns the PII type this pattern detects.
    #[must_use]
    pub const fn pii_type(&self) -> PiiType {
        self.pii_type
    }

    /// Returns true if the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// The immutable set of value patterns, in library order.
///
/// Library order matters: the fallback selection keeps the first of two
/// candidates with equal match ratios.
pub struct PatternLibrary {
    patterns: Vec<CompiledPattern>,
}

impl PatternLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Creates the built-in library.
    #[must_use]
    pub fn builtin() -> Self {
        let mut lib = Self::new();

        lib.add(
            PiiType::Email,
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        );
        lib.add(
            PiiType::Phone,
            r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
        );
        lib.add(PiiType::Ssn, r"\b\d{3}-\d{2}-\d{4}\b");
        lib.add(
            PiiType::CreditCard,
            r"\b(?:\d{4}[-\s]?){3}\d{4}\b|\b\d{13,19}\b",
        );
        lib.add(PiiType::IpAddress, r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b");
        lib.add(
            PiiType::Url,
            r"https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
        );
        lib.add(PiiType::DateOfBirth, r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b");
        lib.add(PiiType::NationalId, r"\b[A-Z0-9]{8,12}\b");
        lib.add(
            PiiType::GpsCoordinates,
            r"[-+]?\d{1,3}\.\d+,\s*[-+]?\d{1,3}\.\d+",
        );
        lib.add(PiiType::Iban, r"\b[A-Z]{2}\d{2}[A-Z0-9]{4,30}\b");
        lib.add(
            PiiType::Address,
            r"\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln)",
        );

        lib
    }

    /// Adds a pattern.
    ///
    /// # Errors
    /// Returns [`DetectError::PatternCompilation`](crate::DetectError::PatternCompilation)
    /// if the regex fails to compile.
    pub fn try_add(&mut self, pii_type: PiiType, pattern: &str) -> DetectResult<()> {
        let regex = Regex::new(pattern)?;
        self.patterns.push(CompiledPattern { pii_type, regex });
        Ok(())
    }

    /// Adds a pattern; a regex that fails to compile is skipped with a
    /// warning, never a failure.
    pub fn add(&mut self, pii_type: PiiType, pattern: &str) {
        if let Err(e) = self.try_add(pii_type, pattern) {
            tracing::warn!("skipping pattern for {pii_type}: {e}");
        }
    }

    /// Iterates patterns in library order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_for(lib: &PatternLibrary, pii_type: PiiType) -> &CompiledPattern {
        lib.iter().find(|p| p.pii_type() == pii_type).unwrap()
    }

    #[test]
    fn test_all_builtin_patterns_compile() {
        assert_eq!(BUILTIN_PATTERNS.len(), 11);
    }

    #[test]
    fn test_email() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Email);
        assert!(p.is_match("john.doe@example.com"));
        assert!(!p.is_match("not an email"));
    }

    #[test]
    fn test_ssn() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Ssn);
        assert!(p.is_match("123-45-6789"));
        assert!(!p.is_match("123456789"));
    }

    #[test]
    fn test_credit_card_both_shapes() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::CreditCard);
        assert!(p.is_match("4111-1111-1111-1111"));
        assert!(p.is_match("4111111111111111"));
    }

    #[test]
    fn test_phone() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Phone);
        assert!(p.is_match("(555) 123-4567"));
        assert!(p.is_match("+1-555-123-4567"));
    }

    #[test]
    fn test_ip_address() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::IpAddress);
        assert!(p.is_match("192.168.1.1"));
    }

    #[test]
    fn test_url() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Url);
        assert!(p.is_match("https://www.example.com/page?x=1"));
        assert!(!p.is_match("example.com"));
    }

    #[test]
    fn test_gps_coordinates() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::GpsCoordinates);
        assert!(p.is_match("26.3927, 50.1810"));
    }

    #[test]
    fn test_iban() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Iban);
        assert!(p.is_match("DE89370400440532013000"));
    }

    #[test]
    fn test_address() {
        let p = pattern_for(&BUILTIN_PATTERNS, PiiType::Address);
        assert!(p.is_match("742 Evergreen Street"));
    }

    #[test]
    fn test_bad_pattern_is_skipped() {
        let mut lib = PatternLibrary::new();
        lib.add(PiiType::Email, r"(unclosed");
        assert!(lib.is_empty());
    }

    #[test]
    fn test_try_add_reports_compile_error() {
        let mut lib = PatternLibrary::new();
        let err = lib.try_add(PiiType::Email, r"(unclosed").unwrap_err();
        assert_eq!(err.code(), "DETECT_PATTERN_COMPILATION");
        assert!(err.is_recoverable());
        assert!(lib.is_empty());
    }

    #[test]
    fn test_priority_starts_specific() {
        assert_eq!(PATTERN_PRIORITY[0], PiiType::CreditCard);
        assert_eq!(PATTERN_PRIORITY[10], PiiType::Url);
    }
}
