//! Display manager for the questionnaire terminal UI
//!
//! Renders the dialogue, recommendation cards and status output.

use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

use crate::cli::config::DisplayConfig;
use crate::engine::RiskFactorMap;
use crate::flow::{AnswerKind, Question, QuestionId, Speaker, Turn};
use crate::types::{Priority, VaccineRecommendation};

/// Shown under the recommendation list
pub const DISCLAIMER: &str = "These recommendations are based on the information you provided and general guidelines.\nAlways consult with a healthcare professional before getting vaccinated.";

/// Shown if a list ever comes back empty
pub const NO_RECOMMENDATIONS: &str = "No recommendations available based on your profile.";

/// Display manager for the questionnaire REPL
pub struct DisplayManager {
    show_disclaimer: bool,
    show_risk_factors: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::from_config(&DisplayConfig::default())
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        DisplayManager {
            show_disclaimer: config.show_disclaimer,
            show_risk_factors: config.show_risk_factors,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let rule = "=".repeat(width).cyan();
        let title = format!("  vaxassist {} - Vaccine Questionnaire", version);

        println!("\n{}", rule);
        println!("{}", title.bold().cyan());
        println!("{}", "  Answer a few questions to get personalized recommendations".dimmed());
        println!("{}\n", rule);
        println!("Type your answers (or {} for commands, {} to quit)\n",
            "/help".green(), "/exit".green());
    }

    /// Line spoken by the assistant
    pub fn show_system(&self, text: &str) {
        println!("{} {}", "assistant>".cyan().bold(), text);
    }

    /// Question prompt, with reply options for yes/no questions
    pub fn show_question(&self, question: &Question) {
        println!("{} {}", "assistant>".cyan().bold(), format_question(question));
    }

    /// Nudge shown before re-asking a question
    pub fn show_reask(&self, question: QuestionId) {
        let hint = match question {
            QuestionId::Age => "Please enter your age as a number.",
            _ => "Let's try that one again.",
        };
        self.show_warning(hint);
    }

    /// Recommendation cards in engine order
    pub fn show_recommendations(&self, recommendations: &[VaccineRecommendation]) {
        self.show_section("Your Vaccine Recommendations");

        if recommendations.is_empty() {
            println!("  {}", NO_RECOMMENDATIONS.yellow());
            return;
        }

        for recommendation in recommendations {
            println!("{}", format_recommendation(recommendation));
        }

        if self.show_disclaimer {
            println!("{}", DISCLAIMER.dimmed());
        }
        println!();
    }

    /// Risk factors behind the recommendations
    pub fn show_risk_factors(&self, risks: &RiskFactorMap, force: bool) {
        if !(self.show_risk_factors || force) {
            return;
        }

        self.show_section("Risk Factors");
        if risks.is_empty() {
            println!("  {}", "None identified".dimmed());
        }
        for factor in risks.iter() {
            println!("  {:<20} {}", factor.category.as_str().green(), factor.level.severity());
        }
        println!();
    }

    /// Answers recorded so far
    pub fn show_answers(&self, responses: &[(QuestionId, String)]) {
        if responses.is_empty() {
            println!("{}", "No answers recorded yet.".yellow());
            return;
        }

        self.show_section(&format!("Your Answers ({}):", responses.len()));
        for (i, (id, answer)) in responses.iter().enumerate() {
            println!("  {}. {:<26} {}", (i + 1).to_string().cyan(), id.as_str(), answer);
        }
        println!();
    }

    /// Full dialogue so far
    pub fn show_transcript(&self, transcript: &[Turn]) {
        self.show_section("Transcript");
        for turn in transcript {
            println!("{}", format_turn(turn));
        }
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt text plus `[Yes/No]` for yes/no questions
pub fn format_question(question: &Question) -> String {
    match question.kind {
        AnswerKind::YesNo => format!(
            "{} {}",
            question.prompt,
            format!("[{}]", question.kind.options().join("/")).dimmed()
        ),
        AnswerKind::FreeText => question.prompt.clone(),
    }
}

/// Badge coloured by urgency
pub fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("[{}]", priority.label());
    match priority {
        Priority::High => label.red().bold(),
        Priority::Medium => label.yellow().bold(),
        Priority::Low => label.green().bold(),
    }
}

/// One recommendation card
pub fn format_recommendation(recommendation: &VaccineRecommendation) -> String {
    format!(
        "  {} {}\n    {}\n    {} {}\n",
        recommendation.name.bold(),
        priority_badge(recommendation.priority),
        recommendation.description,
        "Reason:".bold(),
        recommendation.reason.dimmed()
    )
}

fn format_turn(turn: &Turn) -> String {
    let speaker = match turn.speaker {
        Speaker::System => "assistant".cyan(),
        Speaker::User => "you".green(),
    };
    format!(
        "  {} {:>9}: {}",
        turn.at.format("%H:%M:%S").to_string().dimmed(),
        speaker,
        turn.text
    )
}
