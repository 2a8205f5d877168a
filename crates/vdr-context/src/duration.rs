//! # Duration Bucket Translation
//!
//! The two questionnaire generations encode trip duration with different
//! discrete buckets. This module owns the single translation table from
//! every known legacy and current token into the canonical
//! [`DurationBucket`]. Any token not in the table maps to
//! `DurationBucket::Unknown` at the call site — never an error, because a
//! stale app build must not break checklist resolution.

use vdr_core::DurationBucket;

/// Translate a duration token from either schema generation.
///
/// Returns `None` for unrecognized tokens; the mapper maps `None` to
/// [`DurationBucket::Unknown`] and records a diagnostic.
pub fn parse_duration_token(token: &str) -> Option<DurationBucket> {
    match token.trim().to_ascii_lowercase().as_str() {
        // Current generation.
        "up_to_30_days" => Some(DurationBucket::UpTo30Days),
        "31_to_90_days" => Some(DurationBucket::UpTo90Days),
        "91_to_180_days" => Some(DurationBucket::UpTo180Days),
        "181_to_365_days" => Some(DurationBucket::UpTo1Year),
        "over_1_year" => Some(DurationBucket::Over1Year),

        // Legacy generation.
        "less_than_month" => Some(DurationBucket::UpTo30Days),
        "1-3_months" | "one_to_three_months" => Some(DurationBucket::UpTo90Days),
        "3-6_months" | "three_to_six_months" => Some(DurationBucket::UpTo180Days),
        "6-12_months" | "six_to_twelve_months" => Some(DurationBucket::UpTo1Year),
        "more_than_year" => Some(DurationBucket::Over1Year),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_generation_tokens() {
        assert_eq!(
            parse_duration_token("up_to_30_days"),
            Some(DurationBucket::UpTo30Days)
        );
        assert_eq!(
            parse_duration_token("31_to_90_days"),
            Some(DurationBucket::UpTo90Days)
        );
        assert_eq!(
            parse_duration_token("over_1_year"),
            Some(DurationBucket::Over1Year)
        );
    }

    #[test]
    fn legacy_generation_tokens() {
        assert_eq!(
            parse_duration_token("less_than_month"),
            Some(DurationBucket::UpTo30Days)
        );
        assert_eq!(
            parse_duration_token("1-3_months"),
            Some(DurationBucket::UpTo90Days)
        );
        assert_eq!(
            parse_duration_token("six_to_twelve_months"),
            Some(DurationBucket::UpTo1Year)
        );
    }

    #[test]
    fn tokens_are_case_and_whitespace_lenient() {
        assert_eq!(
            parse_duration_token("  LESS_THAN_MONTH  "),
            Some(DurationBucket::UpTo30Days)
        );
    }

    #[test]
    fn unrecognized_token_is_none() {
        assert_eq!(parse_duration_token("forever"), None);
        assert_eq!(parse_duration_token(""), None);
        // Buckets that never existed in either generation.
        assert_eq!(parse_duration_token("2_weeks"), None);
    }
}
