//! The fixed column-name keyword library.

use datascan_core::PiiType;
use once_cell::sync::Lazy;

/// Built-in keyword library, constructed once at first use.
pub static BUILTIN_KEYWORDS: Lazy<KeywordLibrary> = Lazy::new(KeywordLibrary::builtin);

/// Column-name keywords that mark a column as non-PII.
///
/// Exclusion takes precedence over every keyword match: a name that
/// equals one of these, or carries one as a delimited token, is never
/// flagged by the name heuristic.
pub const EXCLUDED_NAME_KEYWORDS: &[&str] = &[
    "essay",
    "description",
    "comment",
    "notes",
    "text",
    "content",
    "body",
    "message",
    "post",
    "article",
    "paragraph",
    "statement",
    "summary",
    "review",
    "feedback",
    "provider",
    "company",
    "organization",
    "department",
    "title",
    "category",
    "type",
    "status",
    "role",
];

/// Returns true if a normalized (lowercased, trimmed) column name hits
/// the exclusion list.
#[must_use]
pub fn is_excluded_name(normalized: &str) -> bool {
    EXCLUDED_NAME_KEYWORDS.iter().any(|kw| {
        *kw == normalized
            || normalized.contains(&format!("_{kw}"))
            || normalized.contains(&format!("{kw}_"))
    })
}

/// The immutable (PII type, keyword) pairs, longest keyword first.
///
/// Longer keywords are tested before shorter ones so that a specific
/// name like `employee_id` is not preempted by the generic `id`.
pub struct KeywordLibrary {
    pairs: Vec<(PiiType, &'static str)>,
}

impl KeywordLibrary {
    /// Creates the built-in library.
    #[must_use]
    pub fn builtin() -> Self {
        let groups: &[(PiiType, &[&'static str])] = &[
            (
                PiiType::Email,
                &["email", "e-mail", "mail", "email_address", "e_mail"],
            ),
            (
                PiiType::Phone,
                &[
                    "phone",
                    "telephone",
                    "mobile",
                    "cell",
                    "contact_number",
                    "phone_num",
                    "phone_number",
                ],
            ),
            (
                PiiType::Name,
                &[
                    "name",
                    "firstname",
                    "lastname",
                    "first_name",
                    "last_name",
                    "username",
                    "patient_name",
                    "customer_name",
                    "employee_name",
                ],
            ),
            (
                PiiType::Id,
                &[
                    "patient_id",
                    "customer_id",
                    "employee_id",
                    "user_id",
                    "person_id",
                    "id_number",
                    "national_id",
                ],
            ),
            (
                PiiType::Dob,
                &[
                    "dob",
                    "birth",
                    "birthdate",
                    "date_of_birth",
                    "birthday",
                    "birth_date",
                ],
            ),
            (
                PiiType::Address,
                &[
                    "address",
                    "street",
                    "location",
                    "residence",
                    "home_address",
                    "street_address",
                    "physical_address",
                ],
            ),
            (
                PiiType::Ssn,
                &["ssn", "social_security", "social_security_number"],
            ),
            (
                PiiType::CreditCard,
                &["credit_card", "cc", "card_number", "creditcard", "card_num"],
            ),
            (PiiType::Gender, &["gender", "sex"]),
            (PiiType::Age, &["age"]),
            (
                PiiType::Salary,
                &["salary", "income", "wage", "compensation", "pay"],
            ),
            (
                PiiType::Medical,
                &[
                    "medical_condition",
                    "diagnosis",
                    "medication",
                    "blood_type",
                    "medical",
                    "condition",
                    "disease",
                    "illness",
                ],
            ),
        ];

        let mut pairs: Vec<(PiiType, &'static str)> = groups
            .iter()
            .flat_map(|(pii_type, keywords)| keywords.iter().map(|kw| (*pii_type, *kw)))
            .collect();

        // Stable sort: ties keep library order.
        pairs.sort_by_key(|(_, kw)| std::cmp::Reverse(kw.len()));

        Self { pairs }
    }

    /// Returns the pairs, longest keyword first.
    #[must_use]
    pub fn pairs(&self) -> &[(PiiType, &'static str)] {
        &self.pairs
    }
}
