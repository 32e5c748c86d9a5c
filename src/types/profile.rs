//! Health profile assembled from questionnaire answers

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::flow::QuestionId;
use crate::types::answer::{is_yes, parse_integer};

/// Flattened record of the user's raw answers
///
/// Every field is optional and holds the answer exactly as typed. Field
/// names match the question ids, so a JSON object of id -> answer
/// deserializes straight into a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_health_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_vaccines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_vaccines: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregnancy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_allergies: Option<String>,
}

impl HealthProfile {
    /// Build a profile from accumulated (question, answer) pairs
    ///
    /// Later pairs for the same question overwrite earlier ones.
    pub fn from_responses<'a, I>(responses: I) -> Self
    where
        I: IntoIterator<Item = (QuestionId, &'a str)>,
    {
        let mut profile = HealthProfile::default();
        for (id, answer) in responses {
            *profile.field_mut(id) = Some(answer.to_string());
        }
        profile
    }

    /// Parse a JSON object mapping question ids to answers
    ///
    /// Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw answer recorded for a question
    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        let field = match id {
            QuestionId::Age => &self.age,
            QuestionId::Travel => &self.travel,
            QuestionId::TravelDestination => &self.travel_destination,
            QuestionId::HealthConditions => &self.health_conditions,
            QuestionId::SpecificHealthConditions => &self.specific_health_conditions,
            QuestionId::RecentVaccines => &self.recent_vaccines,
            QuestionId::SpecificVaccines => &self.specific_vaccines,
            QuestionId::Pregnancy => &self.pregnancy,
            QuestionId::Allergies => &self.allergies,
            QuestionId::SpecificAllergies => &self.specific_allergies,
        };
        field.as_deref()
    }

    fn field_mut(&mut self, id: QuestionId) -> &mut Option<String> {
        match id {
            QuestionId::Age => &mut self.age,
            QuestionId::Travel => &mut self.travel,
            QuestionId::TravelDestination => &mut self.travel_destination,
            QuestionId::HealthConditions => &mut self.health_conditions,
            QuestionId::SpecificHealthConditions => &mut self.specific_health_conditions,
            QuestionId::RecentVaccines => &mut self.recent_vaccines,
            QuestionId::SpecificVaccines => &mut self.specific_vaccines,
            QuestionId::Pregnancy => &mut self.pregnancy,
            QuestionId::Allergies => &mut self.allergies,
            QuestionId::SpecificAllergies => &mut self.specific_allergies,
        }
    }

    /// Age in years, if the answer parses as an integer
    pub fn age_years(&self) -> Option<i64> {
        self.age.as_deref().and_then(parse_integer)
    }

    /// True when the yes/no answer for `id` is "yes"
    pub fn answered_yes(&self, id: QuestionId) -> bool {
        self.answer(id).map(is_yes).unwrap_or(false)
    }

    /// Number of answered questions
    pub fn answered_count(&self) -> usize {
        QuestionId::ALL
            .iter()
            .filter(|id| self.answer(**id).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_responses_maps_fields() {
        let profile = HealthProfile::from_responses(vec![
            (QuestionId::Age, "34"),
            (QuestionId::Travel, "yes"),
            (QuestionId::TravelDestination, "Kenya, Africa"),
        ]);
        assert_eq!(profile.age.as_deref(), Some("34"));
        assert_eq!(profile.travel_destination.as_deref(), Some("Kenya, Africa"));
        assert!(profile.pregnancy.is_none());
        assert_eq!(profile.answered_count(), 3);
    }

    #[test]
    fn test_from_responses_last_answer_wins() {
        let profile = HealthProfile::from_responses(vec![
            (QuestionId::Age, "old"),
            (QuestionId::Age, "71"),
        ]);
        assert_eq!(profile.age_years(), Some(71));
    }

    #[test]
    fn test_from_json_uses_question_ids() {
        let json = r#"{
            "age": "70",
            "healthConditions": "Yes",
            "specificHealthConditions": "Type 2 diabetes",
            "sessionToken": "ignored"
        }"#;
        let profile = HealthProfile::from_json(json).unwrap();
        assert_eq!(profile.age_years(), Some(70));
        assert!(profile.answered_yes(QuestionId::HealthConditions));
        assert_eq!(
            profile.specific_health_conditions.as_deref(),
            Some("Type 2 diabetes")
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(HealthProfile::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_empty_profile() {
        let profile = HealthProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.age_years(), None);
        assert!(!profile.answered_yes(QuestionId::Travel));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let profile = HealthProfile::from_responses(vec![(QuestionId::Pregnancy, "no")]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"pregnancy":"no"}"#);
    }
}
