//! # Document Catalog Indirection
//!
//! Catalog mode lets stored rule sets reference shared document
//! definitions by id instead of embedding them. A [`StoredRuleSet`] is the
//! persisted shape; [`StoredRuleSet::materialize`] resolves every catalog
//! reference through a [`DocumentCatalog`] and yields the plain
//! [`RuleSet`] the resolver consumes.
//!
//! Resolution of references is lenient: an id the catalog does not know is
//! dropped with a warning rather than failing the whole rule set, so one
//! stale reference cannot take a country offline.

use serde::{Deserialize, Serialize};
use tracing::warn;

use vdr_core::country::CountryCode;
use vdr_core::{DocumentCategory, VisaType};

use crate::predicate::Predicate;
use crate::ruleset::{
    CategoryUpgrade, ConditionalRule, DocumentRule, RiskAdjustment, RuleSet, RuleSetState,
};

/// A shared document definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub id: String,
    pub default_category: DocumentCategory,
    pub required_by_default: bool,
}

/// Source of shared document definitions.
pub trait DocumentCatalog: Send + Sync {
    /// Look up a catalog document by id.
    fn document(&self, catalog_id: &str) -> Option<CatalogDocument>;
}

/// A document entry as persisted: embedded inline or a catalog reference.
///
/// Untagged: an object with `id`/`category`/`required` is embedded, one
/// with `catalogId` is a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredDocumentRule {
    Embedded(DocumentRule),
    Catalog(CatalogRef),
}

/// Reference to a catalog document, with optional per-rule-set overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRef {
    pub catalog_id: String,
    /// Overrides the catalog's default category when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<DocumentCategory>,
    /// Overrides the catalog's default required flag when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Conditional rule as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredConditionalRule {
    pub predicate: Predicate,
    pub documents_to_add: Vec<StoredDocumentRule>,
}

/// Risk adjustment as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRiskAdjustment {
    pub risk_level: vdr_core::RiskLevel,
    #[serde(default)]
    pub documents_to_add: Vec<StoredDocumentRule>,
    #[serde(default)]
    pub category_upgrades: Vec<CategoryUpgrade>,
}

/// A rule set as persisted, possibly holding catalog references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRuleSet {
    pub country: CountryCode,
    pub visa_type: VisaType,
    pub version: u32,
    #[serde(default)]
    pub state: RuleSetState,
    #[serde(default)]
    pub base_documents: Vec<StoredDocumentRule>,
    #[serde(default)]
    pub conditional_rules: Vec<StoredConditionalRule>,
    #[serde(default)]
    pub risk_adjustments: Vec<StoredRiskAdjustment>,
}

impl StoredDocumentRule {
    /// Resolve to a concrete document rule, if possible.
    fn resolve(&self, catalog: Option<&dyn DocumentCatalog>) -> Option<DocumentRule> {
        match self {
            Self::Embedded(rule) => Some(rule.clone()),
            Self::Catalog(reference) => {
                let Some(catalog) = catalog else {
                    warn!(
                        catalog_id = %reference.catalog_id,
                        "catalog reference in rule set but no catalog configured, dropping entry"
                    );
                    return None;
                };
                match catalog.document(&reference.catalog_id) {
                    Some(doc) => Some(DocumentRule {
                        id: doc.id,
                        category: reference.category.unwrap_or(doc.default_category),
                        required: reference.required.unwrap_or(doc.required_by_default),
                    }),
                    None => {
                        warn!(
                            catalog_id = %reference.catalog_id,
                            "unresolvable catalog reference, dropping entry"
                        );
                        None
                    }
                }
            }
        }
    }
}

impl StoredRuleSet {
    /// Resolve all catalog references and yield the plain rule set.
    pub fn materialize(&self, catalog: Option<&dyn DocumentCatalog>) -> RuleSet {
        let resolve_all = |rules: &[StoredDocumentRule]| -> Vec<DocumentRule> {
            rules.iter().filter_map(|r| r.resolve(catalog)).collect()
        };
        RuleSet {
            country: self.country.clone(),
            visa_type: self.visa_type,
            version: self.version,
            state: self.state,
            base_documents: resolve_all(&self.base_documents),
            conditional_rules: self
                .conditional_rules
                .iter()
                .map(|rule| ConditionalRule {
                    predicate: rule.predicate.clone(),
                    documents_to_add: resolve_all(&rule.documents_to_add),
                })
                .collect(),
            risk_adjustments: self
                .risk_adjustments
                .iter()
                .map(|adj| RiskAdjustment {
                    risk_level: adj.risk_level,
                    documents_to_add: resolve_all(&adj.documents_to_add),
                    category_upgrades: adj.category_upgrades.clone(),
                })
                .collect(),
        }
    }
}

/// In-memory catalog backed by a fixed list. Useful for tests and for
/// stores that load the whole catalog at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    documents: Vec<CatalogDocument>,
}

impl StaticCatalog {
    pub fn new(documents: Vec<CatalogDocument>) -> Self {
        Self { documents }
    }
}

impl DocumentCatalog for StaticCatalog {
    fn document(&self, catalog_id: &str) -> Option<CatalogDocument> {
        self.documents.iter().find(|d| d.id == catalog_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            CatalogDocument {
                id: "passport".into(),
                default_category: DocumentCategory::Required,
                required_by_default: true,
            },
            CatalogDocument {
                id: "travel_insurance".into(),
                default_category: DocumentCategory::HighlyRecommended,
                required_by_default: false,
            },
        ])
    }

    fn stored(base: Vec<StoredDocumentRule>) -> StoredRuleSet {
        StoredRuleSet {
            country: CountryCode::new("DE").unwrap(),
            visa_type: VisaType::Tourist,
            version: 2,
            state: RuleSetState::Approved,
            base_documents: base,
            conditional_rules: vec![],
            risk_adjustments: vec![],
        }
    }

    #[test]
    fn untagged_forms_deserialize() {
        let json = r#"[
            { "id": "photo", "category": "required", "required": true },
            { "catalogId": "passport" },
            { "catalogId": "travel_insurance", "category": "required", "required": true }
        ]"#;
        let rules: Vec<StoredDocumentRule> = serde_json::from_str(json).unwrap();
        assert!(matches!(rules[0], StoredDocumentRule::Embedded(_)));
        assert!(matches!(rules[1], StoredDocumentRule::Catalog(_)));
    }

    #[test]
    fn catalog_reference_resolves_with_defaults() {
        let set = stored(vec![StoredDocumentRule::Catalog(CatalogRef {
            catalog_id: "travel_insurance".into(),
            category: None,
            required: None,
        })]);
        let materialized = set.materialize(Some(&catalog()));
        assert_eq!(
            materialized.base_documents,
            vec![DocumentRule::recommended("travel_insurance")]
        );
    }

    #[test]
    fn reference_overrides_beat_catalog_defaults() {
        let set = stored(vec![StoredDocumentRule::Catalog(CatalogRef {
            catalog_id: "travel_insurance".into(),
            category: Some(DocumentCategory::Required),
            required: Some(true),
        })]);
        let materialized = set.materialize(Some(&catalog()));
        assert_eq!(
            materialized.base_documents,
            vec![DocumentRule::required("travel_insurance")]
        );
    }

    #[test]
    fn unresolvable_reference_is_dropped() {
        let set = stored(vec![
            StoredDocumentRule::Catalog(CatalogRef {
                catalog_id: "no_such_document".into(),
                category: None,
                required: None,
            }),
            StoredDocumentRule::Embedded(DocumentRule::required("passport")),
        ]);
        let materialized = set.materialize(Some(&catalog()));
        // The bad reference goes away; the rest of the set survives.
        assert_eq!(
            materialized.base_documents,
            vec![DocumentRule::required("passport")]
        );
    }

    #[test]
    fn reference_without_catalog_is_dropped() {
        let set = stored(vec![StoredDocumentRule::Catalog(CatalogRef {
            catalog_id: "passport".into(),
            category: None,
            required: None,
        })]);
        let materialized = set.materialize(None);
        assert!(materialized.base_documents.is_empty());
    }

    #[test]
    fn conditional_and_risk_sections_materialize() {
        let mut set = stored(vec![]);
        set.conditional_rules = vec![StoredConditionalRule {
            predicate: Predicate::Expression("isMinor === true".into()),
            documents_to_add: vec![StoredDocumentRule::Catalog(CatalogRef {
                catalog_id: "passport".into(),
                category: None,
                required: None,
            })],
        }];
        set.risk_adjustments = vec![StoredRiskAdjustment {
            risk_level: vdr_core::RiskLevel::High,
            documents_to_add: vec![StoredDocumentRule::Embedded(DocumentRule::recommended(
                "property_documents",
            ))],
            category_upgrades: vec![CategoryUpgrade::new(
                "passport",
                DocumentCategory::Required,
            )],
        }];
        let materialized = set.materialize(Some(&catalog()));
        assert_eq!(
            materialized.conditional_rules[0].documents_to_add,
            vec![DocumentRule::required("passport")]
        );
        assert_eq!(materialized.risk_adjustments[0].category_upgrades.len(), 1);
    }
}
