//! REPL (Read-Eval-Print Loop) for the interactive questionnaire
//!
//! Ties the conversation state to the terminal: reads answers, routes slash
//! commands, renders the next question and, once the flow terminates, the
//! recommendations.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::{Context, Result};

use crate::cli::{Config, Verbosity};
use crate::engine::{self, Assessment};
use crate::flow::{ConversationState, QuestionGraph, QuestionId, Step, GREETING, CLOSING};
use crate::repl::commands::{is_command, CommandAction, CommandContext, CommandHandler};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputEvent, InputHandler};
use crate::telemetry::{SessionTelemetry, TelemetryDisplay, TelemetryEvent};

/// Result of handling one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading
    Continue,

    /// The questionnaire terminated and produced an assessment
    Finished(Assessment),

    /// User asked to leave; partial answers are dropped
    Exit,
}

/// REPL session coordinator
///
/// Manages the interactive loop with:
/// - Input handling (rustyline)
/// - Command processing
/// - Conversation state
/// - Display coordination
/// - Telemetry
pub struct ReplSession {
    graph: QuestionGraph,
    state: ConversationState,
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display_manager: DisplayManager,
    telemetry: SessionTelemetry,
    verbosity: Verbosity,
}

impl ReplSession {
    /// Create a session over the standard questionnaire
    pub fn new(config: &Config, verbosity: Verbosity) -> Result<Self> {
        Self::with_graph(QuestionGraph::standard(), config, verbosity)
    }

    /// Create a session over a custom question graph
    pub fn with_graph(graph: QuestionGraph, config: &Config, verbosity: Verbosity) -> Result<Self> {
        graph.validate().context("Question graph is invalid")?;
        let state = ConversationState::new(&graph)?;

        let mut input_handler = match config.history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };
        input_handler.set_prompt(config.repl.prompt.clone());

        let mut display = config.display.clone();
        display.show_disclaimer &= verbosity.show_chrome();

        let mut command_handler = CommandHandler::new();
        command_handler.set_verbose(verbosity.show_details());

        Ok(ReplSession {
            graph,
            state,
            input_handler,
            command_handler,
            display_manager: DisplayManager::from_config(&display),
            telemetry: SessionTelemetry::new(),
            verbosity,
        })
    }

    /// Show the banner, greeting and first question
    pub fn show_welcome(&mut self, version: &str) {
        if self.verbosity.show_chrome() {
            self.display_manager.show_banner(version);
        }
        self.greet();
    }

    /// Read a line of input from user
    pub fn read_input(&mut self) -> Result<InputEvent> {
        self.input_handler.read_line()
    }

    /// Handle user input (command or answer)
    pub fn handle_input(&mut self, input: &str) -> Result<Outcome> {
        if input.trim().is_empty() {
            return Ok(Outcome::Continue);
        }

        if is_command(input) {
            let command = self.command_handler.parse(input);
            let ctx = CommandContext {
                graph: &self.graph,
                state: &self.state,
                telemetry: &self.telemetry,
                display: &self.display_manager,
            };
            return match self.command_handler.execute(command, &ctx)? {
                CommandAction::Continue => Ok(Outcome::Continue),
                CommandAction::Exit => Ok(Outcome::Exit),
                CommandAction::Restart => {
                    self.restart()?;
                    Ok(Outcome::Continue)
                }
            };
        }

        self.answer(input)
    }

    fn answer(&mut self, input: &str) -> Result<Outcome> {
        let current = self.state.current();
        let step = self
            .state
            .submit_answer(&self.graph, input)
            .context("Failed to record answer")?;

        if let Some(question) = current {
            self.telemetry.record(TelemetryEvent::AnswerSubmitted { question });
        }

        match step {
            Step::Ask(next) => {
                self.ask(next);
                Ok(Outcome::Continue)
            }
            Step::Reask(same) => {
                self.telemetry.record(TelemetryEvent::Reprompted { question: same });
                self.display_manager.show_reask(same);
                self.ask(same);
                Ok(Outcome::Continue)
            }
            Step::Complete => {
                self.display_manager.show_system(CLOSING);
                Ok(Outcome::Finished(self.finish()))
            }
        }
    }

    /// Run the engine over the collected answers and render the result
    fn finish(&mut self) -> Assessment {
        let assessment = engine::assess(&self.state.profile());
        self.telemetry.record_recommendations(&assessment.recommendations);

        let verbose = self.is_verbose();
        self.display_manager.show_recommendations(&assessment.recommendations);
        self.display_manager.show_risk_factors(&assessment.risk_factors, verbose);

        let verbosity = if verbose { Verbosity::Verbose } else { self.verbosity };
        TelemetryDisplay::new(&self.telemetry, verbosity).display_summary();

        assessment
    }

    /// Drop all answers and start from the first question
    pub fn restart(&mut self) -> Result<()> {
        self.state = ConversationState::new(&self.graph)?;
        self.telemetry.record(TelemetryEvent::SessionRestarted);
        tracing::debug!(session = %self.state.session_id(), "session restarted");
        self.greet();
        Ok(())
    }

    fn greet(&mut self) {
        self.display_manager.show_system(GREETING);
        self.ask(self.graph.start());
    }

    fn ask(&mut self, id: QuestionId) {
        if let Some(question) = self.graph.question(id) {
            self.display_manager.show_question(question);
            self.telemetry.record(TelemetryEvent::QuestionAsked { question: id });
        }
    }

    /// Conversation state (immutable)
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    pub fn telemetry(&self) -> &SessionTelemetry {
        &self.telemetry
    }

    /// Get display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display_manager
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }

    /// Save answer history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}
