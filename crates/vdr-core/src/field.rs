//! # Whitelisted Context Field Access
//!
//! Predicate evaluation reaches applicant fields only through
//! [`ContextField`] — the single, exhaustive whitelist of fields a stored
//! predicate may reference. Expression strings originate from persisted,
//! admin-editable rule data; restricting them to this enum (no property
//! traversal, no method calls) is what keeps them from becoming an
//! injection vector.
//!
//! ## Exhaustiveness Guarantee
//!
//! Adding a variant here is a compile error until every `match` over
//! [`ContextField`] — including value extraction below — is updated.

use serde::{Deserialize, Serialize};

use crate::applicant::CanonicalApplicantContext;

/// A typed snapshot of one canonical context field.
///
/// `Absent` is distinct from any concrete value: a field that is genuinely
/// unknown (e.g. unstated citizenship) compares unequal to everything, so
/// predicates over it fail closed.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(&'static str),
    Code(String),
    Bool(bool),
    Int(i64),
    Absent,
}

/// The whitelist of canonical context fields predicates may reference.
///
/// Wire names are the upstream camelCase tokens as they appear inside
/// stored predicates and expression strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextField {
    SponsorType,
    MaritalStatus,
    EmploymentStatus,
    EducationStatus,
    VisaType,
    Citizenship,
    DestinationCountry,
    DurationBucket,
    IsMinor,
    HasTravelHistory,
    HasPropertyInHomeCountry,
    HasFamilyInHomeCountry,
    PreviousVisaRejections,
    RiskLevel,
}

impl ContextField {
    /// Wire name of the field as referenced by stored predicates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SponsorType => "sponsorType",
            Self::MaritalStatus => "maritalStatus",
            Self::EmploymentStatus => "employmentStatus",
            Self::EducationStatus => "educationStatus",
            Self::VisaType => "visaType",
            Self::Citizenship => "citizenship",
            Self::DestinationCountry => "destinationCountry",
            Self::DurationBucket => "durationBucket",
            Self::IsMinor => "isMinor",
            Self::HasTravelHistory => "hasTravelHistory",
            Self::HasPropertyInHomeCountry => "hasPropertyInHomeCountry",
            Self::HasFamilyInHomeCountry => "hasFamilyInHomeCountry",
            Self::PreviousVisaRejections => "previousVisaRejections",
            Self::RiskLevel => "riskLevel",
        }
    }

    /// Resolve a wire name to a whitelisted field.
    ///
    /// Returns `None` for anything not on the whitelist — the caller
    /// treats that as a malformed predicate (fail-closed).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sponsorType" => Some(Self::SponsorType),
            "maritalStatus" => Some(Self::MaritalStatus),
            "employmentStatus" => Some(Self::EmploymentStatus),
            "educationStatus" => Some(Self::EducationStatus),
            "visaType" => Some(Self::VisaType),
            "citizenship" => Some(Self::Citizenship),
            "destinationCountry" => Some(Self::DestinationCountry),
            "durationBucket" => Some(Self::DurationBucket),
            "isMinor" => Some(Self::IsMinor),
            "hasTravelHistory" => Some(Self::HasTravelHistory),
            "hasPropertyInHomeCountry" => Some(Self::HasPropertyInHomeCountry),
            "hasFamilyInHomeCountry" => Some(Self::HasFamilyInHomeCountry),
            "previousVisaRejections" => Some(Self::PreviousVisaRejections),
            "riskLevel" => Some(Self::RiskLevel),
            _ => None,
        }
    }

    /// All whitelisted fields, for diagnostics and validation reports.
    pub fn all() -> &'static [ContextField] {
        &[
            Self::SponsorType,
            Self::MaritalStatus,
            Self::EmploymentStatus,
            Self::EducationStatus,
            Self::VisaType,
            Self::Citizenship,
            Self::DestinationCountry,
            Self::DurationBucket,
            Self::IsMinor,
            Self::HasTravelHistory,
            Self::HasPropertyInHomeCountry,
            Self::HasFamilyInHomeCountry,
            Self::PreviousVisaRejections,
            Self::RiskLevel,
        ]
    }

    /// Extract this field's value from a canonical context.
    ///
    /// EXHAUSTIVE match — every whitelisted field is read explicitly.
    pub fn value_in(&self, ctx: &CanonicalApplicantContext) -> FieldValue {
        match self {
            Self::SponsorType => FieldValue::Str(ctx.sponsor_type.as_str()),
            Self::MaritalStatus => FieldValue::Str(ctx.marital_status.as_str()),
            Self::EmploymentStatus => FieldValue::Str(ctx.employment_status.as_str()),
            Self::EducationStatus => FieldValue::Str(ctx.education_status.as_str()),
            Self::VisaType => FieldValue::Str(ctx.visa_type.as_str()),
            Self::Citizenship => match &ctx.citizenship {
                Some(code) => FieldValue::Code(code.as_str().to_string()),
                None => FieldValue::Absent,
            },
            Self::DestinationCountry => {
                FieldValue::Code(ctx.destination_country.as_str().to_string())
            }
            Self::DurationBucket => FieldValue::Str(ctx.duration.as_str()),
            Self::IsMinor => FieldValue::Bool(ctx.is_minor),
            Self::HasTravelHistory => FieldValue::Bool(ctx.has_travel_history),
            Self::HasPropertyInHomeCountry => {
                FieldValue::Bool(ctx.has_property_in_home_country)
            }
            Self::HasFamilyInHomeCountry => FieldValue::Bool(ctx.has_family_in_home_country),
            Self::PreviousVisaRejections => {
                FieldValue::Int(i64::from(ctx.previous_visa_rejections))
            }
            Self::RiskLevel => match ctx.risk_tier.level {
                Some(level) => FieldValue::Str(level.as_str()),
                None => FieldValue::Absent,
            },
        }
    }
}

impl std::fmt::Display for ContextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
