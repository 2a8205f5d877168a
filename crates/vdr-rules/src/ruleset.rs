//! # Rule-Set Model
//!
//! The versioned rule-set shape the resolver consumes: base documents,
//! conditional rules, and per-risk-level adjustments, keyed by destination
//! country and visa type. Serialized field names keep the stored camelCase
//! wire shape (`baseDocuments`, `conditionalRules`, ...).

use serde::{Deserialize, Serialize};

use vdr_core::country::CountryCode;
use vdr_core::{CanonicalApplicantContext, DocumentCategory, RiskLevel, VisaType};

use crate::predicate::Predicate;

/// Lookup key for a rule set: destination country plus visa type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetKey {
    pub country: CountryCode,
    pub visa_type: VisaType,
}

impl RuleSetKey {
    pub fn new(country: CountryCode, visa_type: VisaType) -> Self {
        Self { country, visa_type }
    }
}

impl std::fmt::Display for RuleSetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.country.as_str(), self.visa_type)
    }
}

/// Lifecycle state of a stored rule set. Only approved sets are served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetState {
    /// Being edited; never visible to resolution.
    #[default]
    Draft,
    Approved,
}

/// One base checklist entry of a rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRule {
    /// Stable document identifier, unique within the rule set.
    pub id: String,
    pub category: DocumentCategory,
    pub required: bool,
}

impl DocumentRule {
    pub fn new(id: &str, category: DocumentCategory, required: bool) -> Self {
        Self {
            id: id.to_string(),
            category,
            required,
        }
    }

    /// A `required`-category, mandatory document.
    pub fn required(id: &str) -> Self {
        Self::new(id, DocumentCategory::Required, true)
    }

    /// A `highly_recommended`, non-mandatory document.
    pub fn recommended(id: &str) -> Self {
        Self::new(id, DocumentCategory::HighlyRecommended, false)
    }

    /// An `optional`, non-mandatory document.
    pub fn optional(id: &str) -> Self {
        Self::new(id, DocumentCategory::Optional, false)
    }
}

/// A predicate-gated rule adding documents when its predicate matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub predicate: Predicate,
    pub documents_to_add: Vec<DocumentRule>,
}

impl ConditionalRule {
    /// Gate on an expression string.
    pub fn when(expression: &str, documents_to_add: Vec<DocumentRule>) -> Self {
        Self {
            predicate: Predicate::Expression(expression.to_string()),
            documents_to_add,
        }
    }

    /// Whether this rule fires for the given context.
    pub fn applies(&self, ctx: &CanonicalApplicantContext) -> bool {
        self.predicate.evaluate(ctx)
    }
}

/// Raise an already-listed document to a stricter category.
///
/// Upgrades never introduce documents; an id not already on the checklist
/// is ignored at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpgrade {
    pub id: String,
    pub to_category: DocumentCategory,
}

impl CategoryUpgrade {
    pub fn new(id: &str, to_category: DocumentCategory) -> Self {
        Self {
            id: id.to_string(),
            to_category,
        }
    }
}

/// Extra documents and upgrades applied for one assigned risk level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAdjustment {
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub documents_to_add: Vec<DocumentRule>,
    #[serde(default)]
    pub category_upgrades: Vec<CategoryUpgrade>,
}

/// A versioned rule set for one country/visa-type pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    pub country: CountryCode,
    pub visa_type: VisaType,
    /// Monotonic version; higher approved versions shadow lower ones.
    /// Builtin compiled tables are version 0.
    pub version: u32,
    #[serde(default)]
    pub state: RuleSetState,
    #[serde(default)]
    pub base_documents: Vec<DocumentRule>,
    #[serde(default)]
    pub conditional_rules: Vec<ConditionalRule>,
    #[serde(default)]
    pub risk_adjustments: Vec<RiskAdjustment>,
}

impl RuleSet {
    pub fn key(&self) -> RuleSetKey {
        RuleSetKey::new(self.country.clone(), self.visa_type)
    }

    /// The single adjustment bucket for a risk level, if declared.
    ///
    /// Exactly one bucket applies per resolution; validation rejects sets
    /// declaring more than one per level, and resolution takes the first.
    pub fn risk_adjustment_for(&self, level: RiskLevel) -> Option<&RiskAdjustment> {
        self.risk_adjustments
            .iter()
            .find(|adj| adj.risk_level == level)
    }
}
