//! # vdr-resolver — Checklist Resolution
//!
//! The pure core of the engine: given a canonical applicant context and
//! one rule set, produce the ordered document checklist. No I/O, no
//! clock, no randomness — the same inputs always yield the same output.
//!
//! Resolution order is fixed:
//!
//! 1. seed with the rule set's base documents,
//! 2. apply each matching conditional rule in declaration order,
//! 3. apply the single risk-adjustment bucket for the assigned risk
//!    level, if any,
//! 4. apply that bucket's category upgrades to already-listed documents.
//!
//! A re-added document id overwrites category and required wholesale but
//! keeps its first-seen position.

pub mod checklist;
pub mod resolve;

pub use checklist::BaseChecklistItem;
pub use resolve::resolve;
