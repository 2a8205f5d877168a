//! United Kingdom rule sets.

use vdr_core::country::CountryCode;
use vdr_core::{RiskLevel, VisaType};

use crate::ruleset::{ConditionalRule, DocumentRule, RiskAdjustment, RuleSet, RuleSetState};

/// Standard Visitor application.
pub fn tourist() -> RuleSet {
    RuleSet {
        country: CountryCode::from_static("GB"),
        visa_type: VisaType::Tourist,
        version: 0,
        state: RuleSetState::Approved,
        base_documents: vec![
            DocumentRule::required("passport"),
            DocumentRule::required("visitor_application_form"),
            DocumentRule::required("bank_statement_main"),
            DocumentRule::required("travel_itinerary"),
            DocumentRule::required("accommodation_proof"),
        ],
        conditional_rules: vec![
            ConditionalRule::when(
                "sponsorType !== 'self'",
                vec![
                    DocumentRule::required("sponsor_bank_statement"),
                    DocumentRule::required("sponsorship_letter"),
                ],
            ),
            ConditionalRule::when(
                "employmentStatus === 'employed'",
                vec![DocumentRule::required("employment_letter")],
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
                DocumentRule::recommended("property_documents"),
                DocumentRule::recommended("family_ties_proof"),
            ],
            category_upgrades: vec![],
        }],
    }
}
