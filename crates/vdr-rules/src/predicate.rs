//! # Conditional Rule Predicates
//!
//! A stored predicate is either a structured field/value match object or a
//! restricted expression string (see [`crate::expr`]). Both forms are AND
//! semantics over the fields they mention; fields a structured predicate
//! leaves out are not constrained.
//!
//! Evaluation never fails: a malformed expression logs a warning and the
//! predicate is false, so a bad stored rule can only withhold documents it
//! would have added, never corrupt the checklist.

use serde::{Deserialize, Serialize};
use tracing::warn;

use vdr_core::{
    CanonicalApplicantContext, ContextField, DurationBucket, EducationStatus, EmploymentStatus,
    FieldValue, MaritalStatus, SponsorType, VisaType,
};

use crate::expr::Expression;

/// A stored conditional-rule predicate, either form.
///
/// Untagged: a JSON string is an expression, a JSON object is structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predicate {
    Expression(String),
    Structured(StructuredPredicate),
}

impl Predicate {
    /// Evaluate against a canonical context. Fail-closed on any error.
    pub fn evaluate(&self, ctx: &CanonicalApplicantContext) -> bool {
        match self {
            Self::Expression(src) => match Expression::parse(src) {
                Ok(expr) => expr.evaluate(ctx),
                Err(err) => {
                    warn!(expression = %src, error = %err, "unparseable predicate, treating as non-match");
                    false
                }
            },
            Self::Structured(structured) => structured.evaluate(ctx),
        }
    }
}

/// Structured predicate: every present field must match the context.
///
/// `citizenship` matches case-insensitively against the resolved country
/// code; an applicant with unstated citizenship never matches it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredPredicate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_type: Option<SponsorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<EmploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_status: Option<EducationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<VisaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_bucket: Option<DurationBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_minor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_travel_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_property_in_home_country: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_family_in_home_country: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_visa_rejections: Option<u32>,
}

impl StructuredPredicate {
    /// AND over present fields; an empty predicate matches everything.
    pub fn evaluate(&self, ctx: &CanonicalApplicantContext) -> bool {
        if let Some(expected) = self.sponsor_type {
            if ctx.sponsor_type != expected {
                return false;
            }
        }
        if let Some(expected) = self.marital_status {
            if ctx.marital_status != expected {
                return false;
            }
        }
        if let Some(expected) = self.employment_status {
            if ctx.employment_status != expected {
                return false;
            }
        }
        if let Some(expected) = self.education_status {
            if ctx.education_status != expected {
                return false;
            }
        }
        if let Some(expected) = self.visa_type {
            if ctx.visa_type != expected {
                return false;
            }
        }
        if let Some(expected) = self.duration_bucket {
            if ctx.duration != expected {
                return false;
            }
        }
        if let Some(expected) = self.citizenship.as_deref() {
            // Unstated citizenship never matches (fail-closed).
            match ContextField::Citizenship.value_in(ctx) {
                FieldValue::Code(code) => {
                    if !code.eq_ignore_ascii_case(expected) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        if let Some(expected) = self.is_minor {
            if ctx.is_minor != expected {
                return false;
            }
        }
        if let Some(expected) = self.has_travel_history {
            if ctx.has_travel_history != expected {
                return false;
            }
        }
        if let Some(expected) = self.has_property_in_home_country {
            if ctx.has_property_in_home_country != expected {
                return false;
            }
        }
        if let Some(expected) = self.has_family_in_home_country {
            if ctx.has_family_in_home_country != expected {
                return false;
            }
        }
        if let Some(expected) = self.previous_visa_rejections {
            if ctx.previous_visa_rejections != expected {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdr_core::country::CountryCode;

    fn ctx() -> CanonicalApplicantContext {
        CanonicalApplicantContext::default()
    }

    #[test]
    fn empty_structured_predicate_matches_everything() {
        assert!(StructuredPredicate::default().evaluate(&ctx()));
    }

    #[test]
    fn structured_predicate_is_conjunction() {
        let predicate = StructuredPredicate {
            visa_type: Some(VisaType::Student),
            sponsor_type: Some(SponsorType::Parent),
            ..Default::default()
        };
        let mut c = ctx();
        c.visa_type = VisaType::Student;
        assert!(!predicate.evaluate(&c));
        c.sponsor_type = SponsorType::Parent;
        assert!(predicate.evaluate(&c));
    }

    #[test]
    fn citizenship_match_is_code_based() {
        let predicate = StructuredPredicate {
            citizenship: Some("uz".into()),
            ..Default::default()
        };
        // Unstated citizenship never matches.
        assert!(!predicate.evaluate(&ctx()));

        let mut c = ctx();
        c.citizenship = Some(CountryCode::new("UZ").unwrap());
        assert!(predicate.evaluate(&c));
    }

    #[test]
    fn json_string_deserializes_as_expression() {
        let predicate: Predicate = serde_json::from_str(r#""sponsorType !== 'self'""#).unwrap();
        assert_eq!(
            predicate,
            Predicate::Expression("sponsorType !== 'self'".to_string())
        );
    }

    #[test]
    fn json_object_deserializes_as_structured() {
        let predicate: Predicate =
            serde_json::from_str(r#"{ "visaType": "student", "isMinor": true }"#).unwrap();
        match &predicate {
            Predicate::Structured(p) => {
                assert_eq!(p.visa_type, Some(VisaType::Student));
                assert_eq!(p.is_minor, Some(true));
            }
            Predicate::Expression(_) => panic!("expected structured form"),
        }
    }

    #[test]
    fn expression_predicate_evaluates() {
        let predicate = Predicate::Expression("sponsorType === 'self'".to_string());
        assert!(predicate.evaluate(&ctx()));
    }

    #[test]
    fn malformed_expression_is_non_match() {
        let predicate = Predicate::Expression("sponsorType ===".to_string());
        assert!(!predicate.evaluate(&ctx()));
        let predicate = Predicate::Expression("delete everything".to_string());
        assert!(!predicate.evaluate(&ctx()));
    }

    #[test]
    fn structured_rejections_count_must_match_exactly() {
        let predicate = StructuredPredicate {
            previous_visa_rejections: Some(0),
            ..Default::default()
        };
        assert!(predicate.evaluate(&ctx()));
        let mut c = ctx();
        c.previous_visa_rejections = 1;
        assert!(!predicate.evaluate(&c));
    }
}
