//! Company-name canonicalization used to compare user input with page text.

use std::fmt;

/// Canonical form of a company name: `.` and `,` removed, surrounding
/// whitespace trimmed, lowercased.
///
/// ```
/// use companieshouse_rs::normalize;
/// assert_eq!(normalize("PT. Buka Bumi"), normalize("pt buka bumi"));
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !matches!(c, '.' | ',')).collect();
    stripped.trim().to_lowercase()
}

/// A name already run through [`normalize`]. Equality is name equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    pub fn new(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `other` normalizes to the same value.
    pub fn matches(&self, other: &str) -> bool {
        normalize(other) == self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
