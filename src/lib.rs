//! vaxassist - Conversational Vaccine Questionnaire
//!
//! Walks a user through a fixed flow of health and travel questions and maps
//! the answers to prioritized vaccine recommendations.
//!
//! # Architecture
//!
//! - **flow**: question graph + per-session conversation state
//! - **engine**: pure rule blocks turning a health profile into recommendations
//! - **repl / cli**: terminal front end, configuration and argument parsing

// Core
pub mod errors;
pub mod types;
pub mod flow;
pub mod engine;

// Re-export commonly used types
pub use errors::{AdvisorError, Result};
pub use engine::{assess, recommend, Assessment};
pub use flow::{ConversationState, QuestionGraph, QuestionId};
pub use types::{HealthProfile, Priority, VaccineRecommendation};

// Interface layer
pub mod cli;
pub mod repl;
pub mod telemetry;
pub mod logging;
