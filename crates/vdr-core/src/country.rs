//! # Country Codes & Alias Resolution
//!
//! Newtype for destination/citizenship country codes plus free-text alias
//! resolution. Questionnaire payloads and admin-edited rule data refer to
//! countries by ISO-style codes *and* by display names in any of the three
//! app locales (English, Russian, Uzbek Latin); everything is normalized to
//! a canonical uppercase code before it is used as a lookup key.
//!
//! ## Validation
//!
//! [`CountryCode`] must be 2–3 ASCII letters. It is uppercased at
//! construction, so `us`, `Us`, and `US` are the same key. A structurally
//! valid code (e.g. `ZZ`) may still be unknown to the rule set registry —
//! that is a registry-level absence, not a validation error.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A canonical country code, typically ISO 3166-1 alpha-2.
///
/// # Validation
///
/// Must be 2–3 ASCII letters. Stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code from a string, validating shape and
    /// normalizing case.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCountryCode`] if the trimmed input is
    /// not 2–3 ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let valid = (2..=3).contains(&trimmed.len())
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(CoreError::InvalidCountryCode(raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Construct from a compile-time literal known to be a valid code.
    ///
    /// Used by compiled rule tables and defaults where the code is a
    /// checked constant. Malformed literals are caught by debug builds.
    pub fn from_static(code: &'static str) -> Self {
        debug_assert!(
            (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_uppercase()),
            "malformed static country code: {code:?}"
        );
        Self(code.to_string())
    }

    /// Access the canonical code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Normalize a free-text country reference for alias matching:
/// lowercase, strip punctuation, collapse whitespace.
fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let cleaned: String = lower
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a free-text country reference to a canonical [`CountryCode`].
///
/// Accepts ISO-style codes directly, plus display-name aliases in the three
/// app locales. Returns `None` for anything unrecognized and not code-shaped;
/// callers treat `None` as a structured absence, never an error.
pub fn resolve_country(input: &str) -> Option<CountryCode> {
    let norm = normalize(input);
    if norm.is_empty() {
        return None;
    }

    // Display-name aliases across the three app locales (en / ru / uz-Latn).
    let code = match norm.as_str() {
        // United States
        "united states" | "united states of america" | "usa" | "u s a" | "america" | "сша"
        | "соединенные штаты" | "соединенные штаты америки" | "америка"
        | "aqsh" | "amerika" | "amerika qo shma shtatlari" => Some("US"),
        // Germany
        "germany" | "германия" | "germaniya" | "olmoniya" => Some("DE"),
        // United Kingdom
        "united kingdom" | "great britain" | "england" | "uk"
        | "великобритания" | "англия" | "соединенное королевство"
        | "buyuk britaniya" | "angliya" => Some("GB"),
        // Canada
        "canada" | "канада" | "kanada" => Some("CA"),
        // France
        "france" | "франция" | "fransiya" => Some("FR"),
        // Spain
        "spain" | "испания" | "ispaniya" => Some("ES"),
        // Italy
        "italy" | "италия" | "italiya" => Some("IT"),
        // Japan
        "japan" | "япония" | "yaponiya" => Some("JP"),
        // South Korea
        "south korea" | "korea" | "republic of korea" | "южная корея" | "корея"
        | "janubiy koreya" | "koreya" => Some("KR"),
        // United Arab Emirates
        "united arab emirates" | "uae" | "dubai" | "оаэ" | "эмираты" | "дубай"
        | "baa" | "birlashgan arab amirliklari" | "dubay" => Some("AE"),
        // Turkey
        "turkey" | "turkiye" | "турция" | "turkiya" => Some("TR"),
        // Uzbekistan (citizenship, not a destination in the built-in tables)
        "uzbekistan" | "узбекистан" | "o zbekiston" | "ozbekiston" => Some("UZ"),
        _ => None,
    };

    if let Some(code) = code {
        // Table entries are known-valid 2-letter codes.
        return CountryCode::new(code).ok();
    }

    // Fall through: accept anything already shaped like a code ("US", "de").
    CountryCode::new(input).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_valid() {
        let code = CountryCode::new("US").unwrap();
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn country_code_uppercases() {
        let code = CountryCode::new(" de ").unwrap();
        assert_eq!(code.as_str(), "DE");
    }

    #[test]
    fn country_code_rejects_bad_shapes() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("U").is_err());
        assert!(CountryCode::new("USAX").is_err());
        assert!(CountryCode::new("U1").is_err());
        assert!(CountryCode::new("Соединенные Штаты").is_err());
    }

    #[test]
    fn country_code_serde_roundtrip() {
        let code = CountryCode::new("GB").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        let deser: CountryCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deser);
    }

    #[test]
    fn country_code_deserialize_normalizes_case() {
        let deser: CountryCode = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(deser.as_str(), "US");
    }

    #[test]
    fn resolve_direct_codes() {
        assert_eq!(resolve_country("US").unwrap().as_str(), "US");
        assert_eq!(resolve_country("de").unwrap().as_str(), "DE");
        // Structurally valid but unknown codes pass through; absence is
        // the registry's concern.
        assert_eq!(resolve_country("ZZ").unwrap().as_str(), "ZZ");
    }

    #[test]
    fn resolve_english_aliases() {
        assert_eq!(resolve_country("United States").unwrap().as_str(), "US");
        assert_eq!(resolve_country("Great Britain").unwrap().as_str(), "GB");
        assert_eq!(resolve_country("Germany").unwrap().as_str(), "DE");
    }

    #[test]
    fn resolve_russian_aliases() {
        assert_eq!(resolve_country("США").unwrap().as_str(), "US");
        assert_eq!(resolve_country("Германия").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("Великобритания").unwrap().as_str(), "GB");
    }

    #[test]
    fn resolve_uzbek_aliases() {
        assert_eq!(resolve_country("AQSH").unwrap().as_str(), "US");
        assert_eq!(resolve_country("Germaniya").unwrap().as_str(), "DE");
        assert_eq!(resolve_country("O'zbekiston").unwrap().as_str(), "UZ");
    }

    #[test]
    fn resolve_handles_punctuation_and_case() {
        assert_eq!(resolve_country("  u.s.a.  ").unwrap().as_str(), "US");
        assert_eq!(resolve_country("GERMANIYA").unwrap().as_str(), "DE");
    }

    #[test]
    fn resolve_unknown_free_text_is_none() {
        assert!(resolve_country("Atlantis").is_none());
        assert!(resolve_country("").is_none());
        assert!(resolve_country("???").is_none());
    }
}
