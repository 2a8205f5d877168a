//! # vdr-rules — Rule Model and Registry
//!
//! Everything that decides WHICH rules apply to an application:
//!
//! - the versioned [`RuleSet`] model (base documents, conditional rules,
//!   risk adjustments) with its draft/approved lifecycle,
//! - stored-predicate evaluation, both structured matchers and the
//!   restricted expression grammar ([`expr`]),
//! - catalog-mode indirection resolving shared document references into
//!   the one [`RuleSet`] shape the resolver consumes,
//! - the [`RuleSetRegistry`]: country-text plus visa-type lookup over an
//!   optional persisted store, builtin compiled tables as the version-0
//!   floor, approved-only and highest-version-wins,
//! - structural validation gating rule-set approval, and the baseline
//!   fallback checklist for unsupported destinations.
//!
//! Applying the rules to a context is `vdr-resolver`'s job; this crate
//! only selects and evaluates them.

pub mod builtin;
pub mod catalog;
pub mod expr;
pub mod fallback;
pub mod predicate;
pub mod registry;
pub mod ruleset;
pub mod validation;

pub use catalog::{
    CatalogDocument, CatalogRef, DocumentCatalog, StaticCatalog, StoredConditionalRule,
    StoredDocumentRule, StoredRiskAdjustment, StoredRuleSet,
};
pub use expr::{ExprError, Expression};
pub use fallback::baseline_rule_set;
pub use predicate::{Predicate, StructuredPredicate};
pub use registry::{RuleSetRegistry, RuleSetStore};
pub use ruleset::{
    CategoryUpgrade, ConditionalRule, DocumentRule, RiskAdjustment, RuleSet, RuleSetKey,
    RuleSetState,
};
pub use validation::{validate_rule_set, RuleSetValidation};
