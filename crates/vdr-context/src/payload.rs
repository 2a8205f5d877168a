//! # Questionnaire Payload Shapes
//!
//! Loosely-typed questionnaire input as it arrives from the application
//! store. Every field is optional; a payload may carry the current
//! structured sections, the legacy flat scalars, or a mix of both. All
//! enum-ish values are raw strings here — token parsing and defaulting
//! happen in the mapper, never at deserialization time, so malformed
//! payloads still deserialize.

use serde::{Deserialize, Serialize};

/// Raw questionnaire payload, both schema generations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnairePayload {
    /// Schema generation marker; informational only. Generation is
    /// detected per-field by presence, not by this number.
    pub schema_version: Option<u32>,

    // -- Current generation: structured sections ---------------------------
    pub travel: Option<TravelSection>,
    pub sponsor: Option<SponsorSection>,
    pub personal: Option<PersonalSection>,
    pub finances: Option<FinanceSection>,
    pub ties: Option<TiesSection>,
    pub history: Option<HistorySection>,
    /// Risk score attached by the upstream scoring service.
    pub risk_score: Option<RiskScorePayload>,

    // -- Legacy generation: flat scalars -----------------------------------
    pub citizenship: Option<String>,
    pub country: Option<String>,
    pub visa_type: Option<String>,
    pub trip_duration: Option<String>,
    pub sponsor_type: Option<String>,
    pub marital_status: Option<String>,
    pub employment_status: Option<String>,
    pub education_level: Option<String>,
    pub monthly_income: Option<f64>,
    pub savings_amount: Option<f64>,
    pub age: Option<u8>,
    pub has_travel_history: Option<bool>,
    pub previous_visa_rejections: Option<u32>,
    pub has_property: Option<bool>,
    pub has_family: Option<bool>,
}

/// Destination and trip details (current generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelSection {
    /// Destination country: code or display name in any app locale.
    pub destination_country: Option<String>,
    pub visa_type: Option<String>,
    /// Duration bucket token (current-generation vocabulary).
    pub duration: Option<String>,
}

/// Trip funding details (current generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SponsorSection {
    pub sponsor_type: Option<String>,
}

/// Applicant personal details (current generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalSection {
    /// Citizenship: code or display name in any app locale.
    pub citizenship: Option<String>,
    pub age: Option<u8>,
    pub marital_status: Option<String>,
    pub employment_status: Option<String>,
    pub education_level: Option<String>,
}

/// Financial figures (current generation). USD amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinanceSection {
    pub monthly_income: Option<f64>,
    pub savings: Option<f64>,
}

/// Home-country ties (current generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TiesSection {
    pub has_property_in_home_country: Option<bool>,
    pub has_family_in_home_country: Option<bool>,
}

/// Travel and rejection history (current generation).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistorySection {
    pub has_travel_history: Option<bool>,
    pub previous_visa_rejections: Option<u32>,
}

/// Risk score attached by the upstream scoring service.
///
/// Mirrors the stored `riskScore` shape: `level`, `probabilityPercent`,
/// `riskFactors`, `positiveFactors`. The engine consumes this as input
/// and never computes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskScorePayload {
    pub level: Option<String>,
    /// Percent as stored; the mapper clamps to 10–90.
    pub probability_percent: Option<i64>,
    pub risk_factors: Vec<String>,
    pub positive_factors: Vec<String>,
}
