//! # Payload → Canonical Context Mapping
//!
//! The normalization pass. Precedence per field: structured
//! (current-generation) value, then legacy flat scalar, then the
//! documented default. The pass is a total function — malformed or
//! unrecognized values become explicit `unknown` canonical values with a
//! diagnostic, never an error.

use tracing::warn;

use vdr_core::country::resolve_country;
use vdr_core::{
    CanonicalApplicantContext, DurationBucket, EducationStatus, EmploymentStatus, MaritalStatus,
    RiskLevel, RiskTier, SponsorType, VisaType,
};

use crate::duration::parse_duration_token;
use crate::payload::QuestionnairePayload;

/// Age below which an applicant is considered a minor.
const MINOR_AGE_LIMIT: u8 = 18;

/// Probability percent bounds enforced at ingest.
const PROBABILITY_MIN: i64 = 10;
const PROBABILITY_MAX: i64 = 90;

/// Per-invocation record of which canonical fields received a default and
/// which payload values were unrecognized.
///
/// Observability metadata only: resolution logic never reads this.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DefaultedFields {
    defaulted: Vec<&'static str>,
    unrecognized: Vec<UnrecognizedValue>,
}

/// A payload value that had no entry in the canonical translation tables.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct UnrecognizedValue {
    /// Canonical field name (camelCase wire name).
    pub field: &'static str,
    /// The raw token as received.
    pub value: String,
}

impl DefaultedFields {
    fn record_default(&mut self, field: &'static str) {
        self.defaulted.push(field);
    }

    fn record_unrecognized(&mut self, field: &'static str, value: &str) {
        warn!(field, value, "unrecognized questionnaire value, using canonical fallback");
        self.unrecognized.push(UnrecognizedValue {
            field,
            value: value.to_string(),
        });
    }

    /// Canonical field names that received the documented default.
    pub fn defaulted(&self) -> &[&'static str] {
        &self.defaulted
    }

    /// Payload values with no canonical translation.
    pub fn unrecognized(&self) -> &[UnrecognizedValue] {
        &self.unrecognized
    }

    /// Whether the canonical field received its default.
    pub fn was_defaulted(&self, field: &str) -> bool {
        self.defaulted.iter().any(|f| *f == field)
    }
}

/// Result of one mapping invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedContext {
    /// The fully-populated canonical context.
    pub context: CanonicalApplicantContext,
    /// Which fields were defaulted; metadata only.
    pub defaulted: DefaultedFields,
}

/// Normalize a questionnaire payload into the canonical applicant context.
///
/// Total function: never fails, never panics. See the module docs for the
/// precedence rules.
pub fn map_payload(payload: &QuestionnairePayload) -> MappedContext {
    let mut ctx = CanonicalApplicantContext::default();
    let mut defaulted = DefaultedFields::default();

    // -- Destination country -----------------------------------------------
    let destination = payload
        .travel
        .as_ref()
        .and_then(|t| t.destination_country.as_deref())
        .or(payload.country.as_deref());
    match destination {
        Some(raw) => match resolve_country(raw) {
            Some(code) => ctx.destination_country = code,
            None => {
                defaulted.record_unrecognized("destinationCountry", raw);
                defaulted.record_default("destinationCountry");
            }
        },
        None => defaulted.record_default("destinationCountry"),
    }

    // -- Visa type ----------------------------------------------------------
    let visa = payload
        .travel
        .as_ref()
        .and_then(|t| t.visa_type.as_deref())
        .or(payload.visa_type.as_deref());
    match visa {
        Some(raw) => match VisaType::parse_token(raw) {
            Some(parsed) => ctx.visa_type = parsed,
            None => {
                defaulted.record_unrecognized("visaType", raw);
                defaulted.record_default("visaType");
            }
        },
        None => defaulted.record_default("visaType"),
    }

    // -- Duration bucket ----------------------------------------------------
    let duration = payload
        .travel
        .as_ref()
        .and_then(|t| t.duration.as_deref())
        .or(payload.trip_duration.as_deref());
    match duration {
        Some(raw) => match parse_duration_token(raw) {
            Some(bucket) => ctx.duration = bucket,
            None => {
                // Explicit unknown bucket, not a failure.
                defaulted.record_unrecognized("durationBucket", raw);
                ctx.duration = DurationBucket::Unknown;
            }
        },
        None => defaulted.record_default("durationBucket"),
    }

    // -- Sponsor type -------------------------------------------------------
    let sponsor = payload
        .sponsor
        .as_ref()
        .and_then(|s| s.sponsor_type.as_deref())
        .or(payload.sponsor_type.as_deref());
    match sponsor {
        Some(raw) => match SponsorType::parse_token(raw) {
            Some(parsed) => ctx.sponsor_type = parsed,
            None => {
                defaulted.record_unrecognized("sponsorType", raw);
                defaulted.record_default("sponsorType");
            }
        },
        None => defaulted.record_default("sponsorType"),
    }

    // -- Personal details ---------------------------------------------------
    let citizenship = payload
        .personal
        .as_ref()
        .and_then(|p| p.citizenship.as_deref())
        .or(payload.citizenship.as_deref());
    if let Some(raw) = citizenship {
        match resolve_country(raw) {
            Some(code) => ctx.citizenship = Some(code),
            None => defaulted.record_unrecognized("citizenship", raw),
        }
    }

    ctx.age = payload
        .personal
        .as_ref()
        .and_then(|p| p.age)
        .or(payload.age);
    match ctx.age {
        Some(age) => ctx.is_minor = age < MINOR_AGE_LIMIT,
        None => defaulted.record_default("isMinor"),
    }

    let marital = payload
        .personal
        .as_ref()
        .and_then(|p| p.marital_status.as_deref())
        .or(payload.marital_status.as_deref());
    match marital {
        Some(raw) => match MaritalStatus::parse_token(raw) {
            Some(parsed) => ctx.marital_status = parsed,
            None => {
                defaulted.record_unrecognized("maritalStatus", raw);
                defaulted.record_default("maritalStatus");
            }
        },
        None => defaulted.record_default("maritalStatus"),
    }

    let employment = payload
        .personal
        .as_ref()
        .and_then(|p| p.employment_status.as_deref())
        .or(payload.employment_status.as_deref());
    match employment {
        Some(raw) => match EmploymentStatus::parse_token(raw) {
            Some(parsed) => ctx.employment_status = parsed,
            None => {
                defaulted.record_unrecognized("employmentStatus", raw);
                defaulted.record_default("employmentStatus");
            }
        },
        None => defaulted.record_default("employmentStatus"),
    }

    let education = payload
        .personal
        .as_ref()
        .and_then(|p| p.education_level.as_deref())
        .or(payload.education_level.as_deref());
    match education {
        Some(raw) => match EducationStatus::parse_token(raw) {
            Some(parsed) => ctx.education_status = parsed,
            None => {
                defaulted.record_unrecognized("educationStatus", raw);
                defaulted.record_default("educationStatus");
            }
        },
        None => defaulted.record_default("educationStatus"),
    }

    // -- Finances -----------------------------------------------------------
    // Genuinely-unknown amounts stay None; no synthetic zeros.
    ctx.monthly_income = payload
        .finances
        .as_ref()
        .and_then(|f| f.monthly_income)
        .or(payload.monthly_income);
    ctx.savings_amount = payload
        .finances
        .as_ref()
        .and_then(|f| f.savings)
        .or(payload.savings_amount);

    // -- Ties ---------------------------------------------------------------
    match payload
        .ties
        .as_ref()
        .and_then(|t| t.has_property_in_home_country)
        .or(payload.has_property)
    {
        Some(value) => ctx.has_property_in_home_country = value,
        None => defaulted.record_default("hasPropertyInHomeCountry"),
    }
    match payload
        .ties
        .as_ref()
        .and_then(|t| t.has_family_in_home_country)
        .or(payload.has_family)
    {
        Some(value) => ctx.has_family_in_home_country = value,
        None => defaulted.record_default("hasFamilyInHomeCountry"),
    }

    // -- History ------------------------------------------------------------
    match payload
        .history
        .as_ref()
        .and_then(|h| h.has_travel_history)
        .or(payload.has_travel_history)
    {
        Some(value) => ctx.has_travel_history = value,
        None => defaulted.record_default("hasTravelHistory"),
    }
    match payload
        .history
        .as_ref()
        .and_then(|h| h.previous_visa_rejections)
        .or(payload.previous_visa_rejections)
    {
        Some(value) => ctx.previous_visa_rejections = value,
        None => defaulted.record_default("previousVisaRejections"),
    }

    // -- Risk tier ----------------------------------------------------------
    match payload.risk_score.as_ref() {
        Some(score) => {
            let mut tier = RiskTier::default();
            if let Some(raw) = score.level.as_deref() {
                match RiskLevel::parse_token(raw) {
                    Some(level) => tier.level = Some(level),
                    None => defaulted.record_unrecognized("riskLevel", raw),
                }
            }
            tier.probability_percent = score.probability_percent.map(|p| {
                let clamped = p.clamp(PROBABILITY_MIN, PROBABILITY_MAX);
                if clamped != p {
                    warn!(percent = p, clamped, "probability percent out of range, clamping");
                }
                clamped as u8
            });
            tier.risk_factors = score.risk_factors.clone();
            tier.positive_factors = score.positive_factors.clone();
            ctx.risk_tier = tier;
        }
        None => defaulted.record_default("riskTier"),
    }

    MappedContext {
        context: ctx,
        defaulted,
    }
}
