//! Independent rule blocks
//!
//! Each profile rule is a pure function of the profile returning its own
//! recommendations and risk entries. Blocks never look at each other's
//! output; the two list-level rules (fallback, consultation check) run
//! afterwards over the combined result.

use crate::engine::catalog;
use crate::engine::risk::{RiskCategory, RiskFactor, RiskFactorMap, RiskLevel};
use crate::flow::QuestionId;
use crate::types::{HealthProfile, VaccineRecommendation};

const HIGH_RISK_DESTINATIONS: [&str; 3] = ["africa", "south america", "sudamerica"];
const MEDIUM_RISK_DESTINATIONS: [&str; 1] = ["asia"];
const CHRONIC_CONDITIONS: [&str; 3] = ["diabetes", "heart", "lung"];
const IMMUNE_CONDITIONS: [&str; 3] = ["immuno", "transplant", "hiv"];

/// Contribution of a single rule block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub recommendations: Vec<VaccineRecommendation>,
    pub risks: Vec<RiskFactor>,
}

impl RuleOutcome {
    fn skip() -> Self {
        Self::default()
    }

    fn risk(mut self, category: RiskCategory, level: RiskLevel) -> Self {
        self.risks.push(RiskFactor::new(category, level));
        self
    }

    fn recommend(mut self, recommendation: VaccineRecommendation) -> Self {
        self.recommendations.push(recommendation);
        self
    }

    fn merge(mut self, other: RuleOutcome) -> Self {
        self.recommendations.extend(other.recommendations);
        self.risks.extend(other.risks);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty() && self.risks.is_empty()
    }
}

/// Signature shared by the profile rule blocks
pub type Rule = fn(&HealthProfile) -> RuleOutcome;

/// Profile rule blocks in evaluation order
pub const PROFILE_RULES: [(&str, Rule); 5] = [
    ("age", age_rule),
    ("travel", travel_rule),
    ("healthConditions", health_conditions_rule),
    ("pregnancy", pregnancy_rule),
    ("allergies", allergy_rule),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Detail text for a yes/no question answered "yes", lower-cased
///
/// An empty detail counts as not given.
fn detail_if_yes(profile: &HealthProfile, flag: QuestionId, detail: QuestionId) -> Option<String> {
    if !profile.answered_yes(flag) {
        return None;
    }
    profile
        .answer(detail)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

pub fn age_rule(profile: &HealthProfile) -> RuleOutcome {
    let Some(age) = profile.age_years() else {
        return RuleOutcome::skip();
    };

    if age >= 65 {
        RuleOutcome::default()
            .risk(RiskCategory::Age, RiskLevel::High)
            .recommend(catalog::influenza_older_adult())
            .recommend(catalog::pneumococcal_older_adult())
    } else if age >= 50 {
        RuleOutcome::default()
            .risk(RiskCategory::Age, RiskLevel::Medium)
            .recommend(catalog::shingles())
    } else {
        RuleOutcome::skip()
    }
}

pub fn travel_rule(profile: &HealthProfile) -> RuleOutcome {
    let Some(destination) =
        detail_if_yes(profile, QuestionId::Travel, QuestionId::TravelDestination)
    else {
        return RuleOutcome::skip();
    };

    if contains_any(&destination, &HIGH_RISK_DESTINATIONS) {
        RuleOutcome::default()
            .risk(RiskCategory::Travel, RiskLevel::High)
            .recommend(catalog::yellow_fever())
            .recommend(catalog::typhoid())
    } else if contains_any(&destination, &MEDIUM_RISK_DESTINATIONS) {
        RuleOutcome::default()
            .risk(RiskCategory::Travel, RiskLevel::Medium)
            .recommend(catalog::hepatitis_a())
            .recommend(catalog::japanese_encephalitis())
    } else {
        RuleOutcome::skip()
    }
}

pub fn health_conditions_rule(profile: &HealthProfile) -> RuleOutcome {
    let Some(conditions) = detail_if_yes(
        profile,
        QuestionId::HealthConditions,
        QuestionId::SpecificHealthConditions,
    ) else {
        return RuleOutcome::skip();
    };

    let mut outcome = RuleOutcome::default();

    if contains_any(&conditions, &CHRONIC_CONDITIONS) {
        outcome = outcome.merge(
            RuleOutcome::default()
                .risk(RiskCategory::HealthConditions, RiskLevel::High)
                .recommend(catalog::influenza_chronic_condition())
                .recommend(catalog::pneumococcal_chronic_condition()),
        );
    }

    if contains_any(&conditions, &IMMUNE_CONDITIONS) {
        outcome = outcome.merge(
            RuleOutcome::default()
                .risk(RiskCategory::Immunocompromised, RiskLevel::High)
                .recommend(catalog::pneumococcal_immunocompromised())
                .recommend(catalog::consultation_immunocompromised()),
        );
    }

    outcome
}

pub fn pregnancy_rule(profile: &HealthProfile) -> RuleOutcome {
    if !profile.answered_yes(QuestionId::Pregnancy) {
        return RuleOutcome::skip();
    }

    RuleOutcome::default()
        .risk(RiskCategory::Pregnancy, RiskLevel::High)
        .recommend(catalog::tdap_pregnancy())
        .recommend(catalog::influenza_pregnancy())
        .recommend(catalog::consultation_pregnancy())
}

pub fn allergy_rule(profile: &HealthProfile) -> RuleOutcome {
    if detail_if_yes(profile, QuestionId::Allergies, QuestionId::SpecificAllergies).is_none() {
        return RuleOutcome::skip();
    }

    RuleOutcome::default().recommend(catalog::consultation_allergy())
}

/// General recommendations when nothing high priority was found
pub fn fallback(so_far: &[VaccineRecommendation]) -> Vec<VaccineRecommendation> {
    if so_far.iter().any(VaccineRecommendation::is_high_priority) {
        return Vec::new();
    }

    vec![catalog::tdap_booster(), catalog::influenza_annual()]
}

/// Consultation entry when two or more high risks were flagged
///
/// No-op if any rule already asked for a consultation.
pub fn consultation_check(
    so_far: &[VaccineRecommendation],
    risks: &RiskFactorMap,
) -> Option<VaccineRecommendation> {
    let already_present = so_far
        .iter()
        .any(|rec| rec.name == catalog::CONSULTATION_REQUIRED);

    if risks.high_risk_count() >= 2 && !already_present {
        Some(catalog::consultation_multiple_risks())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn names(outcome: &RuleOutcome) -> Vec<&str> {
        outcome.recommendations.iter().map(|r| r.name.as_str()).collect()
    }

    fn profile(pairs: &[(QuestionId, &str)]) -> HealthProfile {
        HealthProfile::from_responses(pairs.iter().copied())
    }

    #[test]
    fn test_age_senior() {
        let outcome = age_rule(&profile(&[(QuestionId::Age, "70")]));
        assert_eq!(names(&outcome), vec![catalog::INFLUENZA, catalog::PNEUMOCOCCAL]);
        assert_eq!(outcome.risks, vec![RiskFactor::new(RiskCategory::Age, RiskLevel::High)]);
    }

    #[test]
    fn test_age_boundaries() {
        assert_eq!(names(&age_rule(&profile(&[(QuestionId::Age, "65")]))).len(), 2);
        assert_eq!(names(&age_rule(&profile(&[(QuestionId::Age, "64")]))), vec![catalog::SHINGLES]);
        assert_eq!(names(&age_rule(&profile(&[(QuestionId::Age, "50")]))), vec![catalog::SHINGLES]);
        assert!(age_rule(&profile(&[(QuestionId::Age, "49")])).is_empty());
    }

    #[test]
    fn test_age_unparseable_skips() {
        assert!(age_rule(&profile(&[(QuestionId::Age, "seventy")])).is_empty());
        assert!(age_rule(&HealthProfile::default()).is_empty());
    }

    #[test]
    fn test_travel_requires_yes_and_destination() {
        assert!(travel_rule(&profile(&[(QuestionId::TravelDestination, "Africa")])).is_empty());
        assert!(travel_rule(&profile(&[(QuestionId::Travel, "yes")])).is_empty());
        assert!(travel_rule(&profile(&[
            (QuestionId::Travel, "no"),
            (QuestionId::TravelDestination, "Africa"),
        ]))
        .is_empty());
    }

    #[test]
    fn test_travel_high_risk_region() {
        let outcome = travel_rule(&profile(&[
            (QuestionId::Travel, "YES"),
            (QuestionId::TravelDestination, "Safari in East AFRICA"),
        ]));
        assert_eq!(names(&outcome), vec![catalog::YELLOW_FEVER, catalog::TYPHOID]);
        assert_eq!(outcome.recommendations[0].priority, Priority::High);
        assert_eq!(outcome.recommendations[1].priority, Priority::Medium);
    }

    #[test]
    fn test_travel_sudamerica_keyword() {
        let outcome = travel_rule(&profile(&[
            (QuestionId::Travel, "yes"),
            (QuestionId::TravelDestination, "Sudamerica"),
        ]));
        assert_eq!(outcome.risks[0].level, RiskLevel::High);
    }

    #[test]
    fn test_travel_asia() {
        let outcome = travel_rule(&profile(&[
            (QuestionId::Travel, "yes"),
            (QuestionId::TravelDestination, "Southeast Asia"),
        ]));
        assert_eq!(
            names(&outcome),
            vec![catalog::HEPATITIS_A, catalog::JAPANESE_ENCEPHALITIS]
        );
        assert_eq!(outcome.risks, vec![RiskFactor::new(RiskCategory::Travel, RiskLevel::Medium)]);
    }

    #[test]
    fn test_travel_high_risk_wins_over_asia() {
        let outcome = travel_rule(&profile(&[
            (QuestionId::Travel, "yes"),
            (QuestionId::TravelDestination, "Asia then Africa"),
        ]));
        assert_eq!(names(&outcome), vec![catalog::YELLOW_FEVER, catalog::TYPHOID]);
    }

    #[test]
    fn test_travel_other_destination() {
        let outcome = travel_rule(&profile(&[
            (QuestionId::Travel, "yes"),
            (QuestionId::TravelDestination, "Europe"),
        ]));
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_conditions_both_keyword_sets() {
        let outcome = health_conditions_rule(&profile(&[
            (QuestionId::HealthConditions, "yes"),
            (QuestionId::SpecificHealthConditions, "Heart disease, kidney transplant"),
        ]));
        assert_eq!(
            names(&outcome),
            vec![
                catalog::INFLUENZA,
                catalog::PNEUMOCOCCAL,
                catalog::PNEUMOCOCCAL,
                catalog::CONSULTATION_REQUIRED,
            ]
        );
        assert_eq!(outcome.risks.len(), 2);
    }

    #[test]
    fn test_conditions_flag_without_detail() {
        assert!(health_conditions_rule(&profile(&[(QuestionId::HealthConditions, "yes")])).is_empty());
    }

    #[test]
    fn test_pregnancy_rule() {
        let outcome = pregnancy_rule(&profile(&[(QuestionId::Pregnancy, "Yes")]));
        assert_eq!(
            names(&outcome),
            vec![catalog::TDAP, catalog::INFLUENZA, catalog::CONSULTATION_REQUIRED]
        );
        assert!(outcome.recommendations.iter().all(|r| r.priority == Priority::High));
        assert!(pregnancy_rule(&profile(&[(QuestionId::Pregnancy, "no")])).is_empty());
    }

    #[test]
    fn test_allergy_rule_records_no_risk() {
        let outcome = allergy_rule(&profile(&[
            (QuestionId::Allergies, "yes"),
            (QuestionId::SpecificAllergies, "egg protein"),
        ]));
        assert_eq!(names(&outcome), vec![catalog::CONSULTATION_REQUIRED]);
        assert!(outcome.risks.is_empty());
        assert!(allergy_rule(&profile(&[(QuestionId::Allergies, "yes")])).is_empty());
    }

    #[test]
    fn test_fallback() {
        assert_eq!(fallback(&[]).len(), 2);
        assert_eq!(fallback(&[catalog::shingles()]).len(), 2);
        assert!(fallback(&[catalog::yellow_fever()]).is_empty());
    }

    #[test]
    fn test_consultation_check() {
        let mut risks = RiskFactorMap::new();
        risks.record(RiskFactor::new(RiskCategory::Age, RiskLevel::High));
        assert!(consultation_check(&[], &risks).is_none());

        risks.record(RiskFactor::new(RiskCategory::Travel, RiskLevel::High));
        let added = consultation_check(&[], &risks).unwrap();
        assert_eq!(added.name, catalog::CONSULTATION_REQUIRED);
        assert_eq!(added.priority, Priority::High);

        assert!(consultation_check(&[catalog::consultation_allergy()], &risks).is_none());
    }
}
