//! Command-line argument parsing for vaxassist
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vaxassist - Find out which vaccines fit your health and travel plans
#[derive(Parser, Debug)]
#[command(name = "vaxassist")]
#[command(version)]
#[command(about = "Conversational vaccine questionnaire with personalized recommendations", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print recommendations)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand (defaults to the interactive questionnaire)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive questionnaire
    Start,

    /// Recommend vaccines from a JSON object of question id -> answer
    Recommend {
        /// Input file (reads stdin when omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the questionnaire flow
    Questions,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Subcommand to run, the questionnaire when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }

    /// Check flag combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet && self.verbose > 0 {
            return Err("Cannot combine --quiet with --verbose.".to_string());
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Log filter implied by the flag, `None` for the configured default
    pub fn log_level(&self) -> Option<&'static str> {
        match self {
            Verbosity::Quiet => Some("error"),
            Verbosity::Normal => None,
            Verbosity::Verbose => Some("debug"),
            Verbosity::VeryVerbose => Some("trace"),
        }
    }

    /// Check if should show banner, transcript hints and disclaimer
    pub fn show_chrome(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show risk factors and the session summary
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_default_command_is_start() {
        let args = parse(&["vaxassist"]);
        assert_eq!(args.command(), Commands::Start);
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["vaxassist", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["vaxassist", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["vaxassist", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_recommend_subcommand() {
        let args = parse(&["vaxassist", "recommend", "answers.json", "--json"]);
        assert_eq!(
            args.command(),
            Commands::Recommend {
                input: Some(PathBuf::from("answers.json")),
                json: true,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["vaxassist", "questions", "--no-color", "-c", "/tmp/c.toml"]);
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(args.command(), Commands::Questions);
    }

    #[test]
    fn test_validate_quiet_and_verbose() {
        assert!(parse(&["vaxassist", "-q", "-v"]).validate().is_err());
        assert!(parse(&["vaxassist", "-v"]).validate().is_ok());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_chrome());
        assert!(Verbosity::Normal.show_chrome());

        assert!(!Verbosity::Normal.show_details());
        assert!(Verbosity::Verbose.show_details());

        assert_eq!(Verbosity::Normal.log_level(), None);
        assert_eq!(Verbosity::VeryVerbose.log_level(), Some("trace"));
    }
}
