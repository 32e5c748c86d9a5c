//! Command handler for REPL built-in commands
//!
//! Slash commands never count as answers to the current question.

use anyhow::Result;
use colored::*;

use crate::flow::{ConversationState, QuestionGraph};
use crate::repl::display::DisplayManager;
use crate::telemetry::{format_duration, SessionTelemetry};

/// Events listed by `/status`
const RECENT_EVENTS: usize = 5;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Answers,
    Transcript,
    Status,
    Restart,
    Exit,
    Verbose { enable: bool },
    Clear,
    Unknown { input: String },
}

/// What the session should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Continue,
    Restart,
    Exit,
}

/// Read-only view of the session handed to commands
pub struct CommandContext<'a> {
    pub graph: &'a QuestionGraph,
    pub state: &'a ConversationState,
    pub telemetry: &'a SessionTelemetry,
    pub display: &'a DisplayManager,
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        let Some(body) = trimmed.strip_prefix('/') else {
            return Command::Unknown { input: input.to_string() };
        };

        let parts: Vec<&str> = body.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "answers" | "a" => Command::Answers,
            "transcript" | "t" => Command::Transcript,
            "status" => Command::Status,
            "restart" | "reset" => Command::Restart,
            "verbose" => {
                let enable = parts.get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    pub fn execute(&mut self, command: Command, ctx: &CommandContext<'_>) -> Result<CommandAction> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(CommandAction::Continue)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(CommandAction::Exit)
            }
            Command::Answers => {
                ctx.display.show_answers(ctx.state.responses());
                Ok(CommandAction::Continue)
            }
            Command::Transcript => {
                ctx.display.show_transcript(ctx.state.transcript());
                Ok(CommandAction::Continue)
            }
            Command::Status => {
                self.show_status(ctx);
                Ok(CommandAction::Continue)
            }
            Command::Restart => {
                println!("{}", "Starting over. Previous answers discarded.".yellow());
                Ok(CommandAction::Restart)
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(CommandAction::Continue)
            }
            Command::Clear => {
                ctx.display.clear_screen()?;
                Ok(CommandAction::Continue)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(CommandAction::Continue)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("/help, /h", "Show this help message"),
            ("/answers, /a", "Show the answers given so far"),
            ("/transcript, /t", "Show the full conversation"),
            ("/status", "Show session status and statistics"),
            ("/restart", "Discard answers and start over"),
            ("/verbose [on|off]", "Toggle risk factor and summary output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit without recommendations"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type your answer to the current question (no / prefix)");
        println!("  - Yes/no questions accept {} or {}", "yes".cyan(), "no".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display session status
    fn show_status(&self, ctx: &CommandContext<'_>) {
        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let stats = ctx.telemetry.stats();
        let current = ctx
            .state
            .current()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| "complete".to_string());

        println!("  Session:          {}", ctx.state.session_id().to_string().dimmed());
        println!("  Current Question: {}", current.green());
        println!("  Answers Recorded: {}", ctx.state.responses().len().to_string().green());
        println!("  Questions Total:  {}", ctx.graph.len().to_string().green());
        println!("  Re-asked:         {}", stats.reprompts.to_string().green());
        println!("  Duration:         {}", format_duration(ctx.telemetry.elapsed()).green());
        println!("  Verbose Mode:     {}", if self.verbose { "On".green() } else { "Off".red() });
        println!("  Events:           {}", ctx.telemetry.event_count().to_string().green());

        let recent = ctx.telemetry.recent_events(RECENT_EVENTS);
        if !recent.is_empty() {
            println!("\n{}", "Recent Activity:".bold());
            for event in recent {
                println!("  - {}", event.describe().dimmed());
            }
        }
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}
