//! # vdr-core — Foundational Types for the Requirements Engine
//!
//! This crate is the bedrock of the visa document requirements stack. It
//! defines the primitives every other crate depends on: validated country
//! codes with multi-locale alias resolution, the enumerations that describe
//! an applicant (visa type, sponsor, duration bucket, risk level), and the
//! [`CanonicalApplicantContext`] — the single normalized applicant shape the
//! resolver reads.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`CountryCode`] is a
//!    validated newtype; no bare strings for destination lookup keys.
//!
//! 2. **Fully-defaulted canonical context.** Every field the resolver reads
//!    has a deterministic default. "Unknown" is a representable value
//!    (`DurationBucket::Unknown`, `MaritalStatus::Unknown`), never an
//!    implicit gap.
//!
//! 3. **Whitelisted field access.** Predicate evaluation reaches applicant
//!    fields only through the exhaustive [`ContextField`] enum. Adding a
//!    field to the whitelist is a compile error until every consumer
//!    handles it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vdr-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod applicant;
pub mod country;
pub mod error;
pub mod field;

// Re-export primary types for ergonomic imports.
pub use applicant::{
    CanonicalApplicantContext, DocumentCategory, DurationBucket, EducationStatus,
    EmploymentStatus, MaritalStatus, RiskLevel, RiskTier, SponsorType, VisaType,
};
pub use country::CountryCode;
pub use error::CoreError;
pub use field::{ContextField, FieldValue};
