//! vaxassist - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::Path;

use vaxassist::{
    cli::{Args, Commands, Config, Verbosity},
    engine,
    flow::QuestionGraph,
    logging,
    repl::{DisplayManager, InputEvent, Outcome, ReplSession},
    types::HealthProfile,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the questionnaire in interactive REPL mode
fn run_repl(config: &Config, verbosity: Verbosity) -> Result<()> {
    let mut repl_session = ReplSession::new(config, verbosity)?;

    repl_session.show_welcome(VERSION);

    // Main REPL loop
    loop {
        match repl_session.read_input()? {
            InputEvent::Line(input) => match repl_session.handle_input(&input) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Finished(_)) | Ok(Outcome::Exit) => break,
                Err(e) => repl_session.display().show_error(&format!("{:#}", e)),
            },
            InputEvent::Interrupted => {
                repl_session.display().show_info("Use /exit to quit gracefully");
            }
            InputEvent::Eof => {
                // Ctrl-D leaves without recommendations
                break;
            }
        }
    }

    // Save answer history
    if let Err(e) = repl_session.save() {
        tracing::warn!(error = %e, "failed to save history");
    }

    Ok(())
}

/// Read a JSON object of answers from a file, or stdin for none / "-"
fn read_answers(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read answers from stdin")?;
            Ok(buffer)
        }
    }
}

/// Recommend vaccines for a stored set of answers
fn run_recommend(
    config: &Config,
    verbosity: Verbosity,
    input: Option<&Path>,
    json: bool,
) -> Result<()> {
    let raw = read_answers(input)?;
    let profile = HealthProfile::from_json(&raw).context("Answers must be a JSON object of question id to answer")?;
    tracing::debug!(answers = profile.answered_count(), "profile loaded");

    let assessment = engine::assess(&profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment.recommendations)?);
        return Ok(());
    }

    let mut display = config.display.clone();
    display.show_disclaimer &= verbosity.show_chrome();
    let display = DisplayManager::from_config(&display);

    display.show_recommendations(&assessment.recommendations);
    display.show_risk_factors(&assessment.risk_factors, verbosity.show_details());

    Ok(())
}

/// Print the questionnaire flow
fn show_questions() -> Result<()> {
    let graph = QuestionGraph::standard();
    graph.validate()?;

    println!("\n{}", "Questionnaire Flow".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("Start: {}\n", graph.start().as_str().green());

    for question in graph.questions() {
        let edges: Vec<&str> = question
            .transition
            .targets()
            .into_iter()
            .map(|target| target.map(|id| id.as_str()).unwrap_or("end"))
            .collect();

        println!(
            "{:<26} {:<9} -> {}",
            question.id.as_str().green(),
            question.kind.as_str(),
            edges.join(" | ")
        );
        println!("  {}", question.prompt.dimmed());
    }
    println!();

    Ok(())
}

/// Print the effective configuration
fn show_config(config: &Config, path: Option<&Path>) -> Result<()> {
    let source = match path {
        Some(path) => path.display().to_string(),
        None => Config::default_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string()),
    };

    println!("# vaxassist configuration ({})", source);
    print!("{}", config.to_toml()?);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate().map_err(anyhow::Error::msg)?;

    let config = Config::load(args.config.clone()).context("Failed to load configuration")?;
    if args.no_color || !config.display.color_output {
        colored::control::set_override(false);
    }

    let verbosity = args.verbosity();
    logging::init(verbosity, &config);

    match args.command() {
        Commands::Start => run_repl(&config, verbosity)?,
        Commands::Recommend { input, json } => {
            run_recommend(&config, verbosity, input.as_deref(), json)?
        }
        Commands::Questions => show_questions()?,
        Commands::Config => show_config(&config, args.config.as_deref())?,
    }

    Ok(())
}
