//! Question nodes and their declarative transition rules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AdvisorError;
use crate::types::answer::{is_yes, parse_integer};

/// Keys of the questionnaire nodes
///
/// The string form (`as_str`) is the id used in response maps and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    Age,
    Travel,
    TravelDestination,
    HealthConditions,
    SpecificHealthConditions,
    RecentVaccines,
    SpecificVaccines,
    Pregnancy,
    Allergies,
    SpecificAllergies,
}

impl QuestionId {
    /// Every id, in questionnaire order
    pub const ALL: [QuestionId; 10] = [
        QuestionId::Age,
        QuestionId::Travel,
        QuestionId::TravelDestination,
        QuestionId::HealthConditions,
        QuestionId::SpecificHealthConditions,
        QuestionId::RecentVaccines,
        QuestionId::SpecificVaccines,
        QuestionId::Pregnancy,
        QuestionId::Allergies,
        QuestionId::SpecificAllergies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Age => "age",
            QuestionId::Travel => "travel",
            QuestionId::TravelDestination => "travelDestination",
            QuestionId::HealthConditions => "healthConditions",
            QuestionId::SpecificHealthConditions => "specificHealthConditions",
            QuestionId::RecentVaccines => "recentVaccines",
            QuestionId::SpecificVaccines => "specificVaccines",
            QuestionId::Pregnancy => "pregnancy",
            QuestionId::Allergies => "allergies",
            QuestionId::SpecificAllergies => "specificAllergies",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AdvisorError::UnknownQuestion { id: s.to_string() })
    }
}

/// How the user is expected to answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    FreeText,
    YesNo,
}

impl AnswerKind {
    /// Canned replies the front end may offer
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            AnswerKind::FreeText => &[],
            AnswerKind::YesNo => &["Yes", "No"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::FreeText => "free-text",
            AnswerKind::YesNo => "yes-no",
        }
    }
}

/// Answer-driven edge out of a question
///
/// `None` targets mean the dialogue ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same target whatever the answer
    Always(Option<QuestionId>),

    /// `yes` when the answer is "yes" (any case), otherwise `no`
    IfYes {
        yes: Option<QuestionId>,
        no: Option<QuestionId>,
    },

    /// `next` when the answer parses as an integer, otherwise ask again
    RequireInteger { next: Option<QuestionId> },
}

impl Transition {
    /// Next question for `answer`, given the question this edge leaves
    pub fn next(&self, current: QuestionId, answer: &str) -> Option<QuestionId> {
        match *self {
            Transition::Always(next) => next,
            Transition::IfYes { yes, no } => {
                if is_yes(answer) {
                    yes
                } else {
                    no
                }
            }
            Transition::RequireInteger { next } => {
                if parse_integer(answer).is_some() {
                    next
                } else {
                    Some(current)
                }
            }
        }
    }

    /// Every target this edge can produce, excluding self-loops
    pub fn targets(&self) -> Vec<Option<QuestionId>> {
        match *self {
            Transition::Always(next) => vec![next],
            Transition::IfYes { yes, no } => vec![yes, no],
            Transition::RequireInteger { next } => vec![next],
        }
    }
}

/// A node of the flow graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub kind: AnswerKind,
    pub transition: Transition,
}

impl Question {
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        kind: AnswerKind,
        transition: Transition,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind,
            transition,
        }
    }

    /// Evaluate this question's transition for a raw answer
    pub fn next(&self, answer: &str) -> Option<QuestionId> {
        self.transition.next(self.id, answer)
    }
}
