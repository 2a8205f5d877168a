//! # Builtin Compiled Rule-Set Tables
//!
//! Per-country rule sets compiled into the binary, one module per
//! destination. These are the version-0 floor: any approved stored rule
//! set (version >= 1) for the same key shadows them in the registry.
//!
//! Covered destinations:
//!   - United States (tourist, student)
//!   - Germany / Schengen (tourist)
//!   - United Kingdom (tourist)
//!   - Canada (tourist)

use vdr_core::VisaType;

use crate::ruleset::{RuleSet, RuleSetKey};

pub mod canada;
pub mod germany;
pub mod united_kingdom;
pub mod united_states;

/// Look up the builtin rule set for a key, if one is compiled in.
pub fn lookup(key: &RuleSetKey) -> Option<RuleSet> {
    match (key.country.as_str(), key.visa_type) {
        ("US", VisaType::Tourist) => Some(united_states::tourist()),
        ("US", VisaType::Student) => Some(united_states::student()),
        ("DE", VisaType::Tourist) => Some(germany::tourist()),
        ("GB", VisaType::Tourist) => Some(united_kingdom::tourist()),
        ("CA", VisaType::Tourist) => Some(canada::tourist()),
        _ => None,
    }
}

/// Every builtin rule set, for validation sweeps and diagnostics.
pub fn all() -> Vec<RuleSet> {
    vec![
        united_states::tourist(),
        united_states::student(),
        germany::tourist(),
        united_kingdom::tourist(),
        canada::tourist(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSetState;
    use crate::validation::validate_rule_set;
    use vdr_core::country::CountryCode;

    #[test]
    fn lookup_finds_compiled_tables() {
        let key = RuleSetKey::new(CountryCode::new("US").unwrap(), VisaType::Tourist);
        assert!(lookup(&key).is_some());
        let key = RuleSetKey::new(CountryCode::new("ZZ").unwrap(), VisaType::Tourist);
        assert!(lookup(&key).is_none());
        let key = RuleSetKey::new(CountryCode::new("DE").unwrap(), VisaType::Work);
        assert!(lookup(&key).is_none());
    }

    #[test]
    fn every_builtin_is_version_zero_and_approved() {
        for set in all() {
            assert_eq!(set.version, 0, "{}", set.key());
            assert_eq!(set.state, RuleSetState::Approved, "{}", set.key());
        }
    }

    #[test]
    fn every_builtin_passes_validation() {
        for set in all() {
            let result = validate_rule_set(&set);
            assert!(
                result.is_valid && result.warnings.is_empty(),
                "{}: {:?} {:?}",
                set.key(),
                result.errors,
                result.warnings
            );
        }
    }

    #[test]
    fn lookup_matches_table_key() {
        for set in all() {
            let found = lookup(&set.key()).unwrap();
            assert_eq!(found, set);
        }
    }
}
