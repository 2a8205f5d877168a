//! United States rule sets.
//!
//! Tourist (B-1/B-2) and student (F-1) applications. The student set
//! demonstrates category upgrades: academic transcripts become mandatory
//! at elevated risk tiers.

use vdr_core::country::CountryCode;
use vdr_core::{DocumentCategory, RiskLevel, VisaType};

use crate::ruleset::{
    CategoryUpgrade, ConditionalRule, DocumentRule, RiskAdjustment, RuleSet, RuleSetState,
};

/// B-1/B-2 visitor application.
pub fn tourist() -> RuleSet {
    RuleSet {
        country: CountryCode::from_static("US"),
        visa_type: VisaType::Tourist,
        version: 0,
        state: RuleSetState::Approved,
        base_documents: vec![
            DocumentRule::required("passport"),
            DocumentRule::required("ds160_confirmation"),
            DocumentRule::required("bank_statement_main"),
            DocumentRule::required("travel_itinerary"),
            DocumentRule::required("accommodation_proof"),
        ],
        conditional_rules: vec![
            ConditionalRule::when(
                "sponsorType !== 'self'",
                vec![DocumentRule::required("sponsor_bank_statement")],
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

/// F-1 student application.
pub fn student() -> RuleSet {
    RuleSet {
        country: CountryCode::from_static("US"),
        visa_type: VisaType::Student,
        version: 0,
        state: RuleSetState::Approved,
        base_documents: vec![
            DocumentRule::required("passport"),
            DocumentRule::required("ds160_confirmation"),
            DocumentRule::required("i20_form"),
            DocumentRule::required("sevis_fee_receipt"),
            DocumentRule::required("bank_statement_main"),
            DocumentRule::recommended("academic_transcripts"),
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
                "isMinor === true",
                vec![
                    DocumentRule::required("birth_certificate"),
                    DocumentRule::required("parental_consent"),
                ],
            ),
        ],
        risk_adjustments: vec![
            RiskAdjustment {
                risk_level: RiskLevel::Medium,
                documents_to_add: vec![],
                category_upgrades: vec![CategoryUpgrade::new(
                    "academic_transcripts",
                    DocumentCategory::Required,
                )],
            },
            RiskAdjustment {
                risk_level: RiskLevel::High,
                documents_to_add: vec![
                    DocumentRule::recommended("property_documents"),
                    DocumentRule::recommended("family_ties_proof"),
                ],
                category_upgrades: vec![CategoryUpgrade::new(
                    "academic_transcripts",
                    DocumentCategory::Required,
                )],
            },
        ],
    }
}
