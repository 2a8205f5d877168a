//! Germany (Schengen short-stay) rule sets.
//!
//! High-risk applicants get the home-country-ties package as highly
//! recommended additions; none of them become mandatory.

use vdr_core::country::CountryCode;
use vdr_core::{RiskLevel, VisaType};

use crate::ruleset::{ConditionalRule, DocumentRule, RiskAdjustment, RuleSet, RuleSetState};

/// Schengen type-C visitor application.
pub fn tourist() -> RuleSet {
    RuleSet {
        country: CountryCode::from_static("DE"),
        visa_type: VisaType::Tourist,
        version: 0,
        state: RuleSetState::Approved,
        base_documents: vec![
            DocumentRule::required("passport"),
            DocumentRule::required("schengen_application_form"),
            DocumentRule::required("photo"),
            DocumentRule::required("travel_insurance"),
            DocumentRule::required("flight_reservation"),
            DocumentRule::required("accommodation_proof"),
            DocumentRule::required("bank_statement_main"),
        ],
        conditional_rules: vec![
            ConditionalRule::when(
                "sponsorType !== 'self'",
                vec![DocumentRule::required("sponsorship_declaration")],
            ),
            ConditionalRule::when(
                "isMinor === true",
                vec![
                    DocumentRule::required("birth_certificate"),
                    DocumentRule::required("parental_consent"),
                ],
            ),
        ],
        risk_adjustments: vec![RiskAdjustment {
            risk_level: RiskLevel::High,
            documents_to_add: vec![
                DocumentRule::recommended("employment_letter"),
                DocumentRule::recommended("property_documents"),
                DocumentRule::recommended("family_ties_proof"),
            ],
            category_upgrades: vec![],
        }],
    }
}
