//! # Rule-Set Validation
//!
//! Structural checks run before a rule set is approved. Errors make the
//! set unfit to serve; warnings flag suspicious but servable content.
//! Resolution itself never runs these checks — it tolerates everything
//! validation flags, by dropping or ignoring the offending entry.

use std::collections::HashSet;

use serde::Serialize;

use crate::expr::Expression;
use crate::predicate::Predicate;
use crate::ruleset::RuleSet;

/// Outcome of validating one rule set.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSetValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleSetValidation {
    fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
        self.is_valid = false;
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Validate a materialized rule set.
pub fn validate_rule_set(set: &RuleSet) -> RuleSetValidation {
    let mut result = RuleSetValidation::new();

    if set.base_documents.is_empty() {
        result.warning(format!("rule set {} has no base documents", set.key()));
    }

    // Duplicate base ids would make resolution order-dependent.
    let mut seen = HashSet::new();
    for rule in &set.base_documents {
        if !seen.insert(rule.id.as_str()) {
            result.error(format!("duplicate base document id '{}'", rule.id));
        }
    }

    // At most one adjustment bucket per risk level.
    let mut levels = HashSet::new();
    for adjustment in &set.risk_adjustments {
        if !levels.insert(adjustment.risk_level) {
            result.error(format!(
                "multiple risk adjustments declared for level '{}'",
                adjustment.risk_level
            ));
        }
    }

    // Every id the rule set can ever place on a checklist.
    let mut known_ids: HashSet<&str> = set
        .base_documents
        .iter()
        .map(|r| r.id.as_str())
        .collect();

    for (index, rule) in set.conditional_rules.iter().enumerate() {
        if rule.documents_to_add.is_empty() {
            result.warning(format!("conditional rule #{index} adds no documents"));
        }
        if let Predicate::Expression(src) = &rule.predicate {
            if let Err(err) = Expression::parse(src) {
                result.error(format!(
                    "conditional rule #{index} has unparseable predicate '{src}': {err}"
                ));
            }
        }
        known_ids.extend(rule.documents_to_add.iter().map(|r| r.id.as_str()));
    }

    for adjustment in &set.risk_adjustments {
        known_ids.extend(adjustment.documents_to_add.iter().map(|r| r.id.as_str()));
    }

    // An upgrade for an id the set never emits can never take effect.
    for adjustment in &set.risk_adjustments {
        for upgrade in &adjustment.category_upgrades {
            if !known_ids.contains(upgrade.id.as_str()) {
                result.warning(format!(
                    "category upgrade targets '{}', which no rule in the set emits",
                    upgrade.id
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::{
        CategoryUpgrade, ConditionalRule, DocumentRule, RiskAdjustment, RuleSetState,
    };
    use vdr_core::country::CountryCode;
    use vdr_core::{DocumentCategory, RiskLevel, VisaType};

    fn base_set() -> RuleSet {
        RuleSet {
            country: CountryCode::new("US").unwrap(),
            visa_type: VisaType::Tourist,
            version: 1,
            state: RuleSetState::Approved,
            base_documents: vec![
                DocumentRule::required("passport"),
                DocumentRule::required("photo"),
            ],
            conditional_rules: vec![],
            risk_adjustments: vec![],
        }
    }

    #[test]
    fn well_formed_set_is_valid() {
        let result = validate_rule_set(&base_set());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn duplicate_base_id_is_error() {
        let mut set = base_set();
        set.base_documents.push(DocumentRule::optional("passport"));
        let result = validate_rule_set(&set);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("passport"));
    }

    #[test]
    fn duplicate_risk_level_is_error() {
        let mut set = base_set();
        set.risk_adjustments = vec![
            RiskAdjustment {
                risk_level: RiskLevel::High,
                documents_to_add: vec![],
                category_upgrades: vec![],
            },
            RiskAdjustment {
                risk_level: RiskLevel::High,
                documents_to_add: vec![DocumentRule::recommended("property_documents")],
                category_upgrades: vec![],
            },
        ];
        let result = validate_rule_set(&set);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("high"));
    }

    #[test]
    fn unparseable_expression_is_error() {
        let mut set = base_set();
        set.conditional_rules = vec![ConditionalRule::when(
            "sponsorType ===",
            vec![DocumentRule::required("sponsor_bank_statement")],
        )];
        let result = validate_rule_set(&set);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("unparseable"));
    }

    #[test]
    fn empty_base_documents_is_warning_only() {
        let mut set = base_set();
        set.base_documents.clear();
        let result = validate_rule_set(&set);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn dead_upgrade_target_is_warning() {
        let mut set = base_set();
        set.risk_adjustments = vec![RiskAdjustment {
            risk_level: RiskLevel::Medium,
            documents_to_add: vec![],
            category_upgrades: vec![CategoryUpgrade::new(
                "academic_transcripts",
                DocumentCategory::Required,
            )],
        }];
        let result = validate_rule_set(&set);
        assert!(result.is_valid);
        assert!(result.warnings[0].contains("academic_transcripts"));
    }

    #[test]
    fn upgrade_target_from_conditional_rule_is_known() {
        let mut set = base_set();
        set.conditional_rules = vec![ConditionalRule::when(
            "visaType === 'student'",
            vec![DocumentRule::recommended("academic_transcripts")],
        )];
        set.risk_adjustments = vec![RiskAdjustment {
            risk_level: RiskLevel::High,
            documents_to_add: vec![],
            category_upgrades: vec![CategoryUpgrade::new(
                "academic_transcripts",
                DocumentCategory::Required,
            )],
        }];
        let result = validate_rule_set(&set);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }
}
