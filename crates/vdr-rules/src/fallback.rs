//! # Baseline Fallback Checklist
//!
//! The minimal document set served when no rule set exists for a
//! (country, visa type) pair: the universal four documents, plus an
//! acceptance letter for student applications. Callers decide whether to
//! use this; [`crate::registry::RuleSetRegistry::lookup`] itself reports
//! absence honestly.

use vdr_core::country::CountryCode;
use vdr_core::VisaType;

use crate::ruleset::{DocumentRule, RuleSet, RuleSetState};

/// Build the baseline rule set for an unsupported destination.
pub fn baseline_rule_set(country: CountryCode, visa_type: VisaType) -> RuleSet {
    let mut base_documents = vec![
        DocumentRule::required("passport"),
        DocumentRule::required("application_form"),
        DocumentRule::required("photo"),
        DocumentRule::required("financial_proof"),
    ];
    if visa_type == VisaType::Student {
        base_documents.push(DocumentRule::required("acceptance_letter"));
    }
    RuleSet {
        country,
        visa_type,
        version: 0,
        state: RuleSetState::Approved,
        base_documents,
        conditional_rules: vec![],
        risk_adjustments: vec![],
    }
}
