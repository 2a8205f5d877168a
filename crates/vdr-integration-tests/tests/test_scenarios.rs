//! Reference applicant scenarios over the builtin rule-set tables.

use vdr_core::{CanonicalApplicantContext, DocumentCategory, RiskLevel, SponsorType, VisaType};
use vdr_resolver::{resolve, BaseChecklistItem};
use vdr_rules::RuleSetRegistry;

fn item<'a>(checklist: &'a [BaseChecklistItem], id: &str) -> Option<&'a BaseChecklistItem> {
    checklist.iter().find(|i| i.document_type == id)
}

#[test]
fn us_tourist_self_sponsored() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("US", VisaType::Tourist).expect("builtin US tourist");
    let ctx = CanonicalApplicantContext::default();

    let checklist = resolve(&ctx, &rule_set);
    for id in [
        "passport",
        "ds160_confirmation",
        "bank_statement_main",
        "travel_itinerary",
        "accommodation_proof",
    ] {
        let entry = item(&checklist, id).unwrap_or_else(|| panic!("missing {id}"));
        assert_eq!(entry.category, DocumentCategory::Required, "{id}");
        assert!(entry.required, "{id}");
    }
    assert!(item(&checklist, "sponsor_bank_statement").is_none());
}

#[test]
fn us_tourist_parent_sponsored_adds_sponsor_statement() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("US", VisaType::Tourist).unwrap();
    let mut ctx = CanonicalApplicantContext::default();
    ctx.sponsor_type = SponsorType::Parent;

    let checklist = resolve(&ctx, &rule_set);
    let sponsor = item(&checklist, "sponsor_bank_statement").expect("sponsor statement");
    assert_eq!(sponsor.category, DocumentCategory::Required);
    assert!(sponsor.required);
}

#[test]
fn de_tourist_high_risk_gets_ties_package() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("DE", VisaType::Tourist).unwrap();
    let mut ctx = CanonicalApplicantContext::default();
    ctx.risk_tier.level = Some(RiskLevel::High);

    let checklist = resolve(&ctx, &rule_set);
    for id in ["employment_letter", "property_documents", "family_ties_proof"] {
        let entry = item(&checklist, id).unwrap_or_else(|| panic!("missing {id}"));
        assert_eq!(entry.category, DocumentCategory::HighlyRecommended, "{id}");
        assert!(!entry.required, "{id}");
    }
}

#[test]
fn unknown_destination_is_absent_before_resolution() {
    let registry = RuleSetRegistry::new();
    assert!(registry.lookup("ZZ", VisaType::Tourist).is_none());
}

#[test]
fn de_tourist_without_risk_tier_has_no_ties_package() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("DE", VisaType::Tourist).unwrap();
    let checklist = resolve(&CanonicalApplicantContext::default(), &rule_set);
    assert!(item(&checklist, "property_documents").is_none());
    assert!(item(&checklist, "family_ties_proof").is_none());
}

#[test]
fn us_student_risk_tier_upgrades_transcripts() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("US", VisaType::Student).unwrap();

    let mut ctx = CanonicalApplicantContext::default();
    ctx.visa_type = VisaType::Student;

    // Without a risk tier the transcripts stay highly recommended.
    let checklist = resolve(&ctx, &rule_set);
    let transcripts = item(&checklist, "academic_transcripts").unwrap();
    assert_eq!(transcripts.category, DocumentCategory::HighlyRecommended);
    assert!(!transcripts.required);

    // At medium risk they are upgraded, and the upgrade forces required.
    ctx.risk_tier.level = Some(RiskLevel::Medium);
    let checklist = resolve(&ctx, &rule_set);
    let transcripts = item(&checklist, "academic_transcripts").unwrap();
    assert_eq!(transcripts.category, DocumentCategory::Required);
    assert!(transcripts.required);
}

#[test]
fn minor_applicant_gets_guardian_documents() {
    let registry = RuleSetRegistry::new();
    let rule_set = registry.lookup("CA", VisaType::Tourist).unwrap();
    let mut ctx = CanonicalApplicantContext::default();
    ctx.age = Some(15);
    ctx.is_minor = true;

    let checklist = resolve(&ctx, &rule_set);
    assert!(item(&checklist, "birth_certificate").is_some());
    assert!(item(&checklist, "parental_consent").is_some());
}
