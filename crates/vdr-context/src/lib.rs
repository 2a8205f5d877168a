//! # vdr-context — Canonical Context Mapper
//!
//! Normalizes heterogeneous, partially-optional questionnaire payloads into
//! one strict, fully-populated [`CanonicalApplicantContext`](vdr_core::CanonicalApplicantContext).
//!
//! Questionnaires arrive in two schema generations: the current structured
//! form (nested `travel` / `personal` / `finances` / `ties` / `history`
//! sections) and the legacy flat form (top-level scalars). A single payload
//! may mix both. The mapping rules are:
//!
//! 1. **Structured wins.** When a structured field and its legacy scalar
//!    equivalent are both present, the structured value is used.
//! 2. **Documented defaults.** When neither is present, the documented
//!    default applies (sponsor type `self`, marital status `unknown`,
//!    boolean ties/history flags `false`).
//! 3. **Never throws.** Unrecognized enum tokens map to explicit `unknown`
//!    values with a diagnostic; the mapping is a total function.
//!
//! The mapper records which canonical fields were defaulted per invocation
//! ([`DefaultedFields`]) — observability metadata only, never read by
//! resolution logic.

pub mod duration;
pub mod mapper;
pub mod payload;

pub use duration::parse_duration_token;
pub use mapper::{map_payload, DefaultedFields, MappedContext};
pub use payload::{
    FinanceSection, HistorySection, PersonalSection, QuestionnairePayload, RiskScorePayload,
    SponsorSection, TiesSection, TravelSection,
};
