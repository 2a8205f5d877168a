//! # Canonical Applicant Model
//!
//! The enumerations describing an applicant and the
//! [`CanonicalApplicantContext`] — the flat, fully-defaulted record the
//! checklist resolver reads. Upstream questionnaire payloads are messy and
//! partially optional; by the time data reaches this shape, every field has
//! a deterministic value and "unknown" is itself a representable value.
//!
//! Serialized field names follow the upstream camelCase context shape
//! (`sponsorType`, `riskTier`, ...) so stored contexts and rule data keep
//! their wire names; enum *values* are snake_case tokens.

use serde::{Deserialize, Serialize};

use crate::country::CountryCode;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Visa type for a destination application.
///
/// Unrecognized payload tokens default to `Tourist` during context mapping
/// (the upstream default), with a diagnostic recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    Tourist,
    Student,
    Work,
    Business,
    Family,
    Transit,
    Medical,
}

impl VisaType {
    /// String representation matching the stored wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tourist => "tourist",
            Self::Student => "student",
            Self::Work => "work",
            Self::Business => "business",
            Self::Family => "family",
            Self::Transit => "transit",
            Self::Medical => "medical",
        }
    }

    /// Parse a payload token leniently (trim, case-insensitive).
    /// Returns `None` for unrecognized tokens; the mapper decides the default.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "tourist" | "tourism" | "visitor" => Some(Self::Tourist),
            "student" | "study" => Some(Self::Student),
            "work" | "employment" => Some(Self::Work),
            "business" => Some(Self::Business),
            "family" | "family_reunion" => Some(Self::Family),
            "transit" => Some(Self::Transit),
            "medical" | "treatment" => Some(Self::Medical),
            _ => None,
        }
    }
}

impl std::fmt::Display for VisaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Requirement category of a checklist document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Required,
    HighlyRecommended,
    Optional,
}

impl DocumentCategory {
    /// String representation matching the stored wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::HighlyRecommended => "highly_recommended",
            Self::Optional => "optional",
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Risk tier level supplied by the upstream scoring service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// String representation matching the stored wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a payload token leniently.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "mid" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical trip-duration bucket.
///
/// The two questionnaire schema generations encode duration with different
/// discrete buckets; `vdr-context` owns the translation tables into this
/// single enumeration. Anything unrecognized maps to `Unknown`, never an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "up_to_30_days")]
    UpTo30Days,
    #[serde(rename = "up_to_90_days")]
    UpTo90Days,
    #[serde(rename = "up_to_180_days")]
    UpTo180Days,
    #[serde(rename = "up_to_1_year")]
    UpTo1Year,
    #[serde(rename = "over_1_year")]
    Over1Year,
    #[serde(rename = "unknown")]
    Unknown,
}

impl DurationBucket {
    /// String representation matching the stored wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo30Days => "up_to_30_days",
            Self::UpTo90Days => "up_to_90_days",
            Self::UpTo180Days => "up_to_180_days",
            Self::UpTo1Year => "up_to_1_year",
            Self::Over1Year => "over_1_year",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who funds the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SponsorType {
    /// Applicant funds the trip themselves. Wire value `"self"`.
    #[serde(rename = "self")]
    SelfSponsor,
    Parent,
    Spouse,
    Relative,
    Employer,
    Scholarship,
    Other,
}

impl SponsorType {
    /// String representation matching the stored wire values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfSponsor => "self",
            Self::Parent => "parent",
            Self::Spouse => "spouse",
            Self::Relative => "relative",
            Self::Employer => "employer",
            Self::Scholarship => "scholarship",
            Self::Other => "other",
        }
    }

    /// Parse a payload token leniently.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "self" | "self_funded" | "myself" => Some(Self::SelfSponsor),
            "parent" | "parents" => Some(Self::Parent),
            "spouse" => Some(Self::Spouse),
            "relative" | "family" => Some(Self::Relative),
            "employer" | "company" => Some(Self::Employer),
            "scholarship" | "grant" => Some(Self::Scholarship),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for SponsorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Marital status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Unknown,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a payload token leniently.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            "divorced" => Some(Self::Divorced),
            "widowed" | "widow" | "widower" => Some(Self::Widowed),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Unemployed,
    Student,
    Retired,
    Unknown,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self_employed",
            Self::Unemployed => "unemployed",
            Self::Student => "student",
            Self::Retired => "retired",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a payload token leniently.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "employed" | "full_time" | "part_time" => Some(Self::Employed),
            "self_employed" | "self-employed" | "freelancer" | "entrepreneur" => {
                Some(Self::SelfEmployed)
            }
            "unemployed" => Some(Self::Unemployed),
            "student" => Some(Self::Student),
            "retired" => Some(Self::Retired),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationStatus {
    Secondary,
    Bachelor,
    Master,
    Doctorate,
    Unknown,
}

impl EducationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Doctorate => "doctorate",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a payload token leniently.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "secondary" | "school" | "high_school" => Some(Self::Secondary),
            "bachelor" | "bachelors" | "undergraduate" => Some(Self::Bachelor),
            "master" | "masters" | "graduate" => Some(Self::Master),
            "doctorate" | "phd" => Some(Self::Doctorate),
            _ => None,
        }
    }
}

impl std::fmt::Display for EducationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Risk Tier
// ---------------------------------------------------------------------------

/// Risk tier summary supplied by the upstream scoring service.
///
/// The engine never computes this; it is input. An absent `level` means
/// "no tier assigned" — risk adjustments simply do not fire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskTier {
    /// Assigned tier level, if any.
    pub level: Option<RiskLevel>,
    /// Approval probability percent, clamped to 10–90 at ingest.
    pub probability_percent: Option<u8>,
    /// Factors counting against the applicant.
    pub risk_factors: Vec<String>,
    /// Factors counting in the applicant's favor.
    pub positive_factors: Vec<String>,
}

// ---------------------------------------------------------------------------
// CanonicalApplicantContext
// ---------------------------------------------------------------------------

/// The flat, fully-defaulted applicant record the resolver reads.
///
/// # Invariant
///
/// Every field has a deterministic default (see [`Default`]); "unknown" is
/// a representable value, never an implicit gap. Financial figures and age
/// are `Option` because they can be genuinely unknown, and predicates
/// treat that absence as a non-match (fail-closed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalApplicantContext {
    /// Citizenship country, if stated.
    pub citizenship: Option<CountryCode>,
    /// Destination country code.
    pub destination_country: CountryCode,
    /// Requested visa type.
    pub visa_type: VisaType,
    /// Canonical trip-duration bucket.
    pub duration: DurationBucket,
    /// Who funds the trip.
    pub sponsor_type: SponsorType,
    pub marital_status: MaritalStatus,
    pub employment_status: EmploymentStatus,
    pub education_status: EducationStatus,
    /// Monthly income in USD, if stated.
    pub monthly_income: Option<f64>,
    /// Total savings in USD, if stated.
    pub savings_amount: Option<f64>,
    /// Age in years, if stated.
    pub age: Option<u8>,
    /// Whether the applicant is under 18. Derived from `age` when present.
    pub is_minor: bool,
    pub has_travel_history: bool,
    pub previous_visa_rejections: u32,
    pub has_property_in_home_country: bool,
    pub has_family_in_home_country: bool,
    /// Risk tier summary from the upstream scoring service.
    pub risk_tier: RiskTier,
}

impl Default for CanonicalApplicantContext {
    fn default() -> Self {
        Self {
            citizenship: None,
            // Upstream default destination/visa pair.
            destination_country: CountryCode::from_static("US"),
            visa_type: VisaType::Tourist,
            duration: DurationBucket::Unknown,
            sponsor_type: SponsorType::SelfSponsor,
            marital_status: MaritalStatus::Unknown,
            employment_status: EmploymentStatus::Unknown,
            education_status: EducationStatus::Unknown,
            monthly_income: None,
            savings_amount: None,
            age: None,
            is_minor: false,
            has_travel_history: false,
            previous_visa_rejections: 0,
            has_property_in_home_country: false,
            has_family_in_home_country: false,
            risk_tier: RiskTier::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_fully_populated() {
        let ctx = CanonicalApplicantContext::default();
        assert_eq!(ctx.destination_country.as_str(), "US");
        assert_eq!(ctx.visa_type, VisaType::Tourist);
        assert_eq!(ctx.duration, DurationBucket::Unknown);
        assert_eq!(ctx.sponsor_type, SponsorType::SelfSponsor);
        assert_eq!(ctx.marital_status, MaritalStatus::Unknown);
        assert!(!ctx.has_travel_history);
        assert_eq!(ctx.previous_visa_rejections, 0);
        assert!(ctx.risk_tier.level.is_none());
    }

    #[test]
    fn sponsor_type_self_wire_value() {
        let json = serde_json::to_string(&SponsorType::SelfSponsor).unwrap();
        assert_eq!(json, "\"self\"");
        let deser: SponsorType = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(deser, SponsorType::SelfSponsor);
    }

    #[test]
    fn document_category_wire_values() {
        assert_eq!(
            serde_json::to_string(&DocumentCategory::HighlyRecommended).unwrap(),
            "\"highly_recommended\""
        );
        assert_eq!(
            serde_json::to_string(&DocumentCategory::Required).unwrap(),
            "\"required\""
        );
    }

    #[test]
    fn visa_type_lenient_parse() {
        assert_eq!(VisaType::parse_token(" Tourist "), Some(VisaType::Tourist));
        assert_eq!(VisaType::parse_token("STUDY"), Some(VisaType::Student));
        assert_eq!(VisaType::parse_token("pilgrimage"), None);
    }

    #[test]
    fn sponsor_type_lenient_parse() {
        assert_eq!(
            SponsorType::parse_token("Self"),
            Some(SponsorType::SelfSponsor)
        );
        assert_eq!(SponsorType::parse_token("parents"), Some(SponsorType::Parent));
        assert_eq!(SponsorType::parse_token("sugar daddy"), None);
    }

    #[test]
    fn context_serde_roundtrip() {
        let mut ctx = CanonicalApplicantContext::default();
        ctx.sponsor_type = SponsorType::Parent;
        ctx.risk_tier.level = Some(RiskLevel::High);
        let json = serde_json::to_string(&ctx).unwrap();
        let deser: CanonicalApplicantContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, deser);
    }

    #[test]
    fn context_serializes_camel_case() {
        let ctx = CanonicalApplicantContext::default();
        let value = serde_json::to_value(&ctx).unwrap();
        assert!(value.get("sponsorType").is_some());
        assert!(value.get("riskTier").is_some());
        assert!(value.get("hasTravelHistory").is_some());
    }

    #[test]
    fn risk_tier_defaults_empty() {
        let tier = RiskTier::default();
        assert!(tier.level.is_none());
        assert!(tier.risk_factors.is_empty());
        assert!(tier.positive_factors.is_empty());
    }
}
