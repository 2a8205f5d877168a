//! Resolution algorithm.

use std::collections::HashMap;

use tracing::debug;

use vdr_core::{CanonicalApplicantContext, DocumentCategory};
use vdr_rules::{CategoryUpgrade, DocumentRule, RuleSet};

use crate::checklist::BaseChecklistItem;

/// Insertion-ordered checklist under construction.
///
/// Overwrites replace category and required wholesale but keep the
/// first-seen position, so declaration order in the rule set is the only
/// thing that determines output order.
struct ChecklistBuilder {
    items: Vec<BaseChecklistItem>,
    index: HashMap<String, usize>,
}

impl ChecklistBuilder {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn apply(&mut self, rule: &DocumentRule) {
        match self.index.get(&rule.id) {
            Some(&pos) => {
                let item = &mut self.items[pos];
                item.category = rule.category;
                item.required = rule.required;
            }
            None => {
                self.index.insert(rule.id.clone(), self.items.len());
                self.items.push(BaseChecklistItem {
                    document_type: rule.id.clone(),
                    category: rule.category,
                    required: rule.required,
                });
            }
        }
    }

    /// Upgrades touch only documents already on the checklist.
    fn upgrade(&mut self, upgrade: &CategoryUpgrade) {
        let Some(&pos) = self.index.get(&upgrade.id) else {
            debug!(id = %upgrade.id, "category upgrade targets absent document, skipping");
            return;
        };
        let item = &mut self.items[pos];
        item.category = upgrade.to_category;
        if upgrade.to_category == DocumentCategory::Required {
            item.required = true;
        }
    }

    fn finish(self) -> Vec<BaseChecklistItem> {
        self.items
    }
}

/// Resolve the document checklist for one applicant against one rule set.
///
/// Pure and deterministic; see the crate docs for the resolution order.
pub fn resolve(ctx: &CanonicalApplicantContext, rule_set: &RuleSet) -> Vec<BaseChecklistItem> {
    let mut builder = ChecklistBuilder::new();

    for rule in &rule_set.base_documents {
        builder.apply(rule);
    }

    let mut matched = 0usize;
    for conditional in &rule_set.conditional_rules {
        if conditional.applies(ctx) {
            matched += 1;
            for rule in &conditional.documents_to_add {
                builder.apply(rule);
            }
        }
    }

    // At most one bucket: the one declared for the assigned level.
    if let Some(level) = ctx.risk_tier.level {
        if let Some(adjustment) = rule_set.risk_adjustment_for(level) {
            for rule in &adjustment.documents_to_add {
                builder.apply(rule);
            }
            for upgrade in &adjustment.category_upgrades {
                builder.upgrade(upgrade);
            }
        }
    }

    let checklist = builder.finish();
    debug!(
        key = %rule_set.key(),
        version = rule_set.version,
        matched_conditionals = matched,
        items = checklist.len(),
        "resolved checklist"
    );
    checklist
}
