//! # Rule-Set Registry
//!
//! The single lookup surface for resolution: country text in any app
//! locale plus visa type, out comes the active rule set or an honest
//! absence. Absence is a normal outcome for unsupported destinations,
//! never an error.
//!
//! ## Precedence
//!
//! Stored rule sets come from an optional [`RuleSetStore`]; only approved
//! sets are eligible and the highest approved version wins. Builtin
//! compiled tables are version 0, so any approved stored set for the same
//! key shadows them.
//!
//! ## Caching
//!
//! Lookups populate a per-key snapshot cache behind a `parking_lot`
//! RwLock. Entries are immutable `Arc` snapshots replaced wholesale;
//! callers hold the `Arc` for the duration of one resolution and are
//! unaffected by concurrent refreshes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use vdr_core::country::resolve_country;
use vdr_core::VisaType;

use crate::builtin;
use crate::catalog::{DocumentCatalog, StoredRuleSet};
use crate::ruleset::{RuleSet, RuleSetKey, RuleSetState};

/// Source of persisted rule sets.
///
/// Returns every stored version for a key, any state; the registry
/// applies the approval and version-precedence rules itself.
pub trait RuleSetStore: Send + Sync {
    fn rule_sets_for(&self, key: &RuleSetKey) -> Vec<StoredRuleSet>;
}

#[derive(Clone)]
struct CacheEntry {
    rule_set: Option<Arc<RuleSet>>,
    refreshed_at: DateTime<Utc>,
}

/// Versioned rule-set lookup with builtin fallback tables.
pub struct RuleSetRegistry {
    store: Option<Arc<dyn RuleSetStore>>,
    catalog: Option<Arc<dyn DocumentCatalog>>,
    cache: RwLock<HashMap<RuleSetKey, CacheEntry>>,
}

impl Default for RuleSetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSetRegistry {
    /// Registry over the builtin tables only.
    pub fn new() -> Self {
        Self {
            store: None,
            catalog: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registry backed by a persisted store.
    pub fn with_store(store: Arc<dyn RuleSetStore>) -> Self {
        Self {
            store: Some(store),
            catalog: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Attach a document catalog for catalog-mode rule sets.
    pub fn with_catalog(mut self, catalog: Arc<dyn DocumentCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Look up the active rule set for free-form country text.
    ///
    /// The country text may be a code or a display name in any app
    /// locale. `None` means no active rule set exists — the caller
    /// decides whether to fall back to a baseline checklist.
    pub fn lookup(&self, country_text: &str, visa_type: VisaType) -> Option<Arc<RuleSet>> {
        let country = resolve_country(country_text)?;
        self.lookup_key(&RuleSetKey::new(country, visa_type))
    }

    /// Look up by an already-resolved key.
    pub fn lookup_key(&self, key: &RuleSetKey) -> Option<Arc<RuleSet>> {
        if let Some(entry) = self.cache.read().get(key) {
            return entry.rule_set.clone();
        }

        let rule_set = self.load(key).map(Arc::new);
        let entry = CacheEntry {
            rule_set: rule_set.clone(),
            refreshed_at: Utc::now(),
        };
        self.cache.write().insert(key.clone(), entry);
        rule_set
    }

    /// When the cached snapshot for a key was last computed.
    pub fn refreshed_at(&self, key: &RuleSetKey) -> Option<DateTime<Utc>> {
        self.cache.read().get(key).map(|e| e.refreshed_at)
    }

    /// Drop every cached snapshot. The next lookup per key recomputes.
    pub fn refresh(&self) {
        self.cache.write().clear();
    }

    /// Drop the cached snapshot for one key.
    pub fn invalidate(&self, key: &RuleSetKey) {
        self.cache.write().remove(key);
    }

    fn load(&self, key: &RuleSetKey) -> Option<RuleSet> {
        if let Some(store) = &self.store {
            let best = store
                .rule_sets_for(key)
                .into_iter()
                .filter(|set| set.state == RuleSetState::Approved)
                .max_by_key(|set| set.version);
            if let Some(stored) = best {
                debug!(key = %key, version = stored.version, "serving stored rule set");
                return Some(stored.materialize(self.catalog.as_deref()));
            }
        }
        let set = builtin::lookup(key);
        match &set {
            Some(_) => debug!(key = %key, "serving builtin rule set"),
            None => debug!(key = %key, "no active rule set"),
        }
        set
    }
}
