//! Question flow graph
//!
//! A mapping from question id to node, plus a start node. Advancing is a
//! pure lookup: the graph holds no dialogue state.
//!
//! Standard questionnaire (10 nodes):
//! 1.  age                      -> travel (re-ask until an integer is given)
//! 2.  travel                   -> travelDestination | healthConditions
//! 3.  travelDestination        -> healthConditions
//! 4.  healthConditions         -> specificHealthConditions | recentVaccines
//! 5.  specificHealthConditions -> recentVaccines
//! 6.  recentVaccines           -> specificVaccines | pregnancy
//! 7.  specificVaccines         -> pregnancy
//! 8.  pregnancy                -> allergies
//! 9.  allergies                -> specificAllergies | end
//! 10. specificAllergies        -> end

use std::collections::BTreeMap;

use crate::errors::{AdvisorError, Result};
use crate::flow::question::{AnswerKind, Question, QuestionId, Transition};

/// Directed graph of questionnaire nodes
#[derive(Debug, Clone)]
pub struct QuestionGraph {
    start: QuestionId,
    nodes: BTreeMap<QuestionId, Question>,
}

impl QuestionGraph {
    /// Empty graph starting at `start`; add nodes with `insert`
    pub fn new(start: QuestionId) -> Self {
        Self {
            start,
            nodes: BTreeMap::new(),
        }
    }

    /// The vaccine questionnaire
    pub fn standard() -> Self {
        use QuestionId::*;

        let mut graph = Self::new(Age);
        graph.insert(Question::new(
            Age,
            "Let's start with your age. How old are you?",
            AnswerKind::FreeText,
            Transition::RequireInteger { next: Some(Travel) },
        ));
        graph.insert(Question::new(
            Travel,
            "Are you planning to travel internationally in the next 6 months?",
            AnswerKind::YesNo,
            Transition::IfYes {
                yes: Some(TravelDestination),
                no: Some(HealthConditions),
            },
        ));
        graph.insert(Question::new(
            TravelDestination,
            "Which regions are you planning to visit? (e.g., South America, Africa, Asia, Europe)",
            AnswerKind::FreeText,
            Transition::Always(Some(HealthConditions)),
        ));
        graph.insert(Question::new(
            HealthConditions,
            "Do you have any pre-existing health conditions?",
            AnswerKind::YesNo,
            Transition::IfYes {
                yes: Some(SpecificHealthConditions),
                no: Some(RecentVaccines),
            },
        ));
        graph.insert(Question::new(
            SpecificHealthConditions,
            "Please specify your health conditions (e.g., diabetes, heart disease, immunocompromised)",
            AnswerKind::FreeText,
            Transition::Always(Some(RecentVaccines)),
        ));
        graph.insert(Question::new(
            RecentVaccines,
            "Have you received any vaccines in the last 6 months?",
            AnswerKind::YesNo,
            Transition::IfYes {
                yes: Some(SpecificVaccines),
                no: Some(Pregnancy),
            },
        ));
        graph.insert(Question::new(
            SpecificVaccines,
            "Which vaccines have you received in the last 6 months?",
            AnswerKind::FreeText,
            Transition::Always(Some(Pregnancy)),
        ));
        graph.insert(Question::new(
            Pregnancy,
            "Are you pregnant or planning to become pregnant in the next 3 months?",
            AnswerKind::YesNo,
            Transition::Always(Some(Allergies)),
        ));
        graph.insert(Question::new(
            Allergies,
            "Do you have any allergies to vaccines or their components?",
            AnswerKind::YesNo,
            Transition::IfYes {
                yes: Some(SpecificAllergies),
                no: None,
            },
        ));
        graph.insert(Question::new(
            SpecificAllergies,
            "Please specify your allergies",
            AnswerKind::FreeText,
            Transition::Always(None),
        ));
        graph
    }

    /// Add or replace a node
    pub fn insert(&mut self, question: Question) {
        self.nodes.insert(question.id, question);
    }

    /// First question of the dialogue
    pub fn start(&self) -> QuestionId {
        self.start
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.nodes.get(&id)
    }

    /// All nodes in id order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Next question for a raw answer, by string id
    ///
    /// `Ok(None)` is the terminal signal. An id that is not a node of this
    /// graph is a caller error.
    pub fn advance(&self, current: &str, answer: &str) -> Result<Option<QuestionId>> {
        let id: QuestionId = current.parse()?;
        self.advance_from(id, answer)
    }

    /// Next question for a raw answer, by typed id
    pub fn advance_from(&self, current: QuestionId, answer: &str) -> Result<Option<QuestionId>> {
        let question = self
            .question(current)
            .ok_or_else(|| AdvisorError::UnknownQuestion {
                id: current.as_str().to_string(),
            })?;

        let next = question.next(answer);
        tracing::debug!(
            from = %current,
            to = next.map(|id| id.as_str()).unwrap_or("end"),
            "question transition"
        );
        Ok(next)
    }

    /// Check that the start node and every transition target exist
    pub fn validate(&self) -> Result<()> {
        if !self.nodes.contains_key(&self.start) {
            return Err(AdvisorError::InvalidGraph(format!(
                "start question '{}' is not in the graph",
                self.start
            )));
        }

        for question in self.nodes.values() {
            for target in question.transition.targets().into_iter().flatten() {
                if !self.nodes.contains_key(&target) {
                    return Err(AdvisorError::InvalidGraph(format!(
                        "question '{}' leads to missing question '{}'",
                        question.id, target
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for QuestionGraph {
    fn default() -> Self {
        Self::standard()
    }
}
