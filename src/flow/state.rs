//! Per-session conversation state
//!
//! Owns the current question, the accumulated answers and the transcript.
//! The only mutating operation is `submit_answer`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AdvisorError, Result};
use crate::flow::graph::QuestionGraph;
use crate::flow::question::{Question, QuestionId};
use crate::types::HealthProfile;

/// Opening line of every dialogue
pub const GREETING: &str =
    "Hi there! I'm your vaccine assistant. I'll help you find the right vaccines based on your health profile.";

/// Closing line once the last question is answered
pub const CLOSING: &str =
    "Thanks for answering all the questions! I'll now analyze your responses to recommend appropriate vaccines.";

/// Who said a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    System,
    User,
}

/// One line of the dialogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// What happened after an answer was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved on to a new question
    Ask(QuestionId),

    /// The same question is asked again
    Reask(QuestionId),

    /// No questions remain
    Complete,
}

/// Dialogue state for a single user session
#[derive(Debug, Clone)]
pub struct ConversationState {
    session_id: Uuid,
    started_at: DateTime<Utc>,
    current: Option<QuestionId>,
    /// First-asked order; re-answers replace in place
    responses: Vec<(QuestionId, String)>,
    transcript: Vec<Turn>,
}

impl ConversationState {
    /// Start a dialogue at the graph's first question
    pub fn new(graph: &QuestionGraph) -> Result<Self> {
        let start = graph.start();
        let question = lookup(graph, start)?;

        let transcript = vec![
            Turn::new(Speaker::System, GREETING),
            Turn::new(Speaker::System, question.prompt.clone()),
        ];

        Ok(Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            current: Some(start),
            responses: Vec::new(),
            transcript,
        })
    }

    /// Record an answer to the current question and move the dialogue on
    ///
    /// Fails with `SessionComplete` once the terminal state is reached; the
    /// state is left untouched on any error.
    pub fn submit_answer(&mut self, graph: &QuestionGraph, answer: &str) -> Result<Step> {
        let current = self.current.ok_or(AdvisorError::SessionComplete)?;
        let next = graph.advance_from(current, answer)?;
        let next_prompt = match next {
            Some(id) => Some(lookup(graph, id)?.prompt.clone()),
            None => None,
        };

        self.transcript.push(Turn::new(Speaker::User, answer));
        self.record(current, answer);
        self.current = next;

        let step = match (next, next_prompt) {
            (Some(id), Some(prompt)) => {
                self.transcript.push(Turn::new(Speaker::System, prompt));
                if id == current {
                    Step::Reask(id)
                } else {
                    Step::Ask(id)
                }
            }
            _ => {
                self.transcript.push(Turn::new(Speaker::System, CLOSING));
                tracing::info!(
                    session = %self.session_id,
                    answers = self.responses.len(),
                    "questionnaire complete"
                );
                Step::Complete
            }
        };

        Ok(step)
    }

    fn record(&mut self, id: QuestionId, answer: &str) {
        match self.responses.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, value)) => *value = answer.to_string(),
            None => self.responses.push((id, answer.to_string())),
        }
    }

    /// Question awaiting an answer, `None` once terminated
    pub fn current(&self) -> Option<QuestionId> {
        self.current
    }

    pub fn current_question<'g>(&self, graph: &'g QuestionGraph) -> Option<&'g Question> {
        self.current.and_then(|id| graph.question(id))
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_none()
    }

    /// Answers in the order the questions were first asked
    pub fn responses(&self) -> &[(QuestionId, String)] {
        &self.responses
    }

    pub fn response(&self, id: QuestionId) -> Option<&str> {
        self.responses
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Health profile built from the answers so far
    pub fn profile(&self) -> HealthProfile {
        HealthProfile::from_responses(
            self.responses
                .iter()
                .map(|(id, answer)| (*id, answer.as_str())),
        )
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

fn lookup(graph: &QuestionGraph, id: QuestionId) -> Result<&Question> {
    graph.question(id).ok_or_else(|| {
        AdvisorError::InvalidGraph(format!("question '{}' is not in the graph", id))
    })
}
