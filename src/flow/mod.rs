//! Conversation flow
//!
//! The question graph decides what to ask next; the conversation state
//! accumulates answers and the transcript for one session.

pub mod graph;
pub mod question;
pub mod state;

pub use graph::QuestionGraph;
pub use question::{AnswerKind, Question, QuestionId, Transition};
pub use state::{ConversationState, Speaker, Step, Turn, CLOSING, GREETING};
