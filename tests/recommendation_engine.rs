//! Integration tests for the recommendation engine
//!
//! Covers the documented engine contract end to end through the public API:
//! fallback guarantee, block ordering, keyword matching and the multi-risk
//! consultation rule.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use vaxassist::engine::{self, catalog, RiskCategory, RiskLevel};
use vaxassist::{HealthProfile, Priority, QuestionId, VaccineRecommendation};

fn profile(pairs: &[(QuestionId, &str)]) -> HealthProfile {
    HealthProfile::from_responses(pairs.iter().copied())
}

fn names(recs: &[VaccineRecommendation]) -> Vec<&str> {
    recs.iter().map(|rec| rec.name.as_str()).collect()
}

fn has(recs: &[VaccineRecommendation], name: &str, priority: Priority) -> bool {
    recs.iter().any(|rec| rec.name == name && rec.priority == priority)
}

const MULTIPLE_RISKS: &str = "Multiple risk factors identified";

// Documented scenarios

#[test]
fn test_empty_profile_returns_exactly_fallback() {
    let recs = engine::recommend(&HealthProfile::default());

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0], catalog::tdap_booster());
    assert_eq!(recs[1], catalog::influenza_annual());
    assert!(recs.iter().all(|rec| rec.priority == Priority::Medium));
}

#[test]
fn test_age_70_gets_high_priority_without_fallback() {
    let recs = engine::recommend(&profile(&[(QuestionId::Age, "70")]));

    assert!(has(&recs, catalog::INFLUENZA, Priority::High));
    assert!(has(&recs, catalog::PNEUMOCOCCAL, Priority::High));
    assert!(!recs.contains(&catalog::tdap_booster()));
    assert!(!recs.contains(&catalog::influenza_annual()));
    assert_eq!(recs.len(), 2);
}

#[test]
fn test_age_55_gets_shingles_then_fallback() {
    let recs = engine::recommend(&profile(&[(QuestionId::Age, "55")]));

    let shingles: Vec<_> = recs
        .iter()
        .filter(|rec| rec.name == catalog::SHINGLES)
        .collect();
    assert_eq!(shingles.len(), 1);
    assert_eq!(shingles[0].priority, Priority::Medium);

    assert_eq!(
        names(&recs),
        vec![catalog::SHINGLES, catalog::TDAP, catalog::INFLUENZA]
    );
}

#[test]
fn test_age_boundaries() {
    let at_65 = engine::recommend(&profile(&[(QuestionId::Age, "65")]));
    assert!(has(&at_65, catalog::PNEUMOCOCCAL, Priority::High));

    let at_50 = engine::recommend(&profile(&[(QuestionId::Age, "50")]));
    assert!(has(&at_50, catalog::SHINGLES, Priority::Medium));

    let at_49 = engine::recommend(&profile(&[(QuestionId::Age, "49")]));
    assert_eq!(at_49, engine::recommend(&HealthProfile::default()));
}

#[test]
fn test_travel_sentence_matches_case_insensitively() {
    let recs = engine::recommend(&profile(&[
        (QuestionId::Travel, "yes"),
        (QuestionId::TravelDestination, "Trip to South America"),
    ]));

    assert!(has(&recs, catalog::YELLOW_FEVER, Priority::High));
    assert!(has(&recs, catalog::TYPHOID, Priority::Medium));
}

#[test]
fn test_destination_ignored_without_travel_yes() {
    let recs = engine::recommend(&profile(&[
        (QuestionId::Travel, "no"),
        (QuestionId::TravelDestination, "Africa"),
    ]));

    assert!(!recs.iter().any(|rec| rec.name == catalog::YELLOW_FEVER));
}

#[test]
fn test_pregnancy_and_immune_conditions_no_duplicate_consultation() {
    let assessment = engine::assess(&profile(&[
        (QuestionId::Pregnancy, "yes"),
        (QuestionId::HealthConditions, "yes"),
        (QuestionId::SpecificHealthConditions, "immunocompromised, hiv"),
    ]));

    assert_eq!(
        assessment.risk_factors.get(RiskCategory::Pregnancy),
        Some(RiskLevel::High)
    );
    assert_eq!(
        assessment.risk_factors.get(RiskCategory::Immunocompromised),
        Some(RiskLevel::High)
    );
    assert_eq!(assessment.risk_factors.high_risk_count(), 2);

    assert!(assessment
        .recommendations
        .iter()
        .any(|rec| rec.name == catalog::CONSULTATION_REQUIRED));
    assert!(!assessment
        .recommendations
        .iter()
        .any(|rec| rec.reason == MULTIPLE_RISKS));
}

#[test]
fn test_multiple_risks_adds_single_consultation_last() {
    let recs = engine::recommend(&profile(&[
        (QuestionId::Age, "80"),
        (QuestionId::Travel, "Yes"),
        (QuestionId::TravelDestination, "west africa"),
    ]));

    let last = recs.last().unwrap();
    assert_eq!(last.name, catalog::CONSULTATION_REQUIRED);
    assert_eq!(last.priority, Priority::High);
    assert_eq!(last.reason, MULTIPLE_RISKS);
    assert_eq!(recs.iter().filter(|rec| rec.reason == MULTIPLE_RISKS).count(), 1);
}

#[test]
fn test_empty_allergy_detail_skips_consultation() {
    let profile = HealthProfile::from_json(
        r#"{"allergies": "yes", "specificAllergies": ""}"#,
    )
    .unwrap();

    assert_eq!(
        engine::recommend(&profile),
        vec![catalog::tdap_booster(), catalog::influenza_annual()]
    );
}

#[test]
fn test_huge_age_counts_as_older_adult() {
    let profile = HealthProfile::from_json(r#"{"age": "99999999999999999999999"}"#).unwrap();
    let recs = engine::recommend(&profile);

    assert!(has(&recs, catalog::INFLUENZA, Priority::High));
    assert!(has(&recs, catalog::PNEUMOCOCCAL, Priority::High));
    assert_eq!(recs.len(), 2);
}

#[test]
fn test_duplicates_are_kept() {
    let recs = engine::recommend(&profile(&[
        (QuestionId::Age, "70"),
        (QuestionId::HealthConditions, "yes"),
        (QuestionId::SpecificHealthConditions, "Diabetes"),
    ]));

    let influenza = recs.iter().filter(|rec| rec.name == catalog::INFLUENZA).count();
    assert_eq!(influenza, 2);
}

#[test]
fn test_block_order_is_preserved() {
    let recs = engine::recommend(&profile(&[
        (QuestionId::Age, "70"),
        (QuestionId::Travel, "yes"),
        (QuestionId::TravelDestination, "Asia"),
        (QuestionId::Pregnancy, "yes"),
    ]));

    let position = |name: &str| recs.iter().position(|rec| rec.name == name).unwrap();
    assert!(position(catalog::PNEUMOCOCCAL) < position(catalog::HEPATITIS_A));
    assert!(position(catalog::HEPATITIS_A) < position(catalog::TDAP));
}

#[test]
fn test_profile_from_json_with_extra_keys() {
    let json = r#"{
        "age": "68",
        "travel": "yes",
        "travelDestination": "Kenya, Africa",
        "favouriteColour": "green"
    }"#;

    let profile = HealthProfile::from_json(json).unwrap();
    assert_eq!(profile.age_years(), Some(68));

    let recs = engine::recommend(&profile);
    assert!(has(&recs, catalog::YELLOW_FEVER, Priority::High));
}

#[test]
fn test_profile_from_json_rejects_non_object() {
    assert!(HealthProfile::from_json("[\"70\"]").is_err());
    assert!(HealthProfile::from_json("not json").is_err());
}

#[test]
fn test_recommendations_serialize_lowercase_priority() {
    let json = serde_json::to_value(engine::recommend(&HealthProfile::default())).unwrap();
    assert_eq!(json[0]["priority"], "medium");
    assert_eq!(json[0]["name"], catalog::TDAP);
}

// Properties

#[derive(Debug, Clone)]
struct AnyProfile(HealthProfile);

fn any_answer(g: &mut Gen) -> Option<String> {
    const POOL: [&str; 12] = [
        "yes", "YES", "no", "70", "55", " 49 years", "South America", "asia",
        "diabetes, asthma", "HIV", "immunocompromised", "",
    ];

    if bool::arbitrary(g) {
        return None;
    }
    if bool::arbitrary(g) {
        Some(String::arbitrary(g))
    } else {
        g.choose(&POOL).map(|answer| answer.to_string())
    }
}

impl Arbitrary for AnyProfile {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyProfile(HealthProfile {
            age: any_answer(g),
            travel: any_answer(g),
            travel_destination: any_answer(g),
            health_conditions: any_answer(g),
            specific_health_conditions: any_answer(g),
            recent_vaccines: any_answer(g),
            specific_vaccines: any_answer(g),
            pregnancy: any_answer(g),
            allergies: any_answer(g),
            specific_allergies: any_answer(g),
        })
    }
}

#[quickcheck]
fn prop_recommendations_never_empty(profile: AnyProfile) -> bool {
    !engine::recommend(&profile.0).is_empty()
}

#[quickcheck]
fn prop_fallback_when_nothing_high(profile: AnyProfile) -> bool {
    let recs = engine::recommend(&profile.0);
    recs.iter().any(VaccineRecommendation::is_high_priority)
        || recs.ends_with(&[catalog::tdap_booster(), catalog::influenza_annual()])
}

#[quickcheck]
fn prop_at_most_one_multiple_risk_consultation(profile: AnyProfile) -> bool {
    let recs = engine::recommend(&profile.0);
    recs.iter().filter(|rec| rec.reason == MULTIPLE_RISKS).count() <= 1
}

#[quickcheck]
fn prop_recommend_is_deterministic(profile: AnyProfile) -> bool {
    engine::recommend(&profile.0) == engine::recommend(&profile.0)
}
