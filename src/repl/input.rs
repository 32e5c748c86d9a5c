//! Input handler for the questionnaire REPL using rustyline
//!
//! Provides readline functionality with history and line editing.

use rustyline::history::History;
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Default answer prompt
pub const DEFAULT_PROMPT: &str = "you> ";

/// What a read produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line with surrounding whitespace trimmed, possibly empty
    Line(String),

    /// Ctrl-C
    Interrupted,

    /// Ctrl-D
    Eof,
}

/// Input handler managing readline interface and answer history
///
/// Features:
/// - Line editing (Emacs-style by default)
/// - Persistent history (saved to disk)
/// - Graceful interrupt handling
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler without persistent history
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Create input handler with persistent history
    ///
    /// A missing or unreadable history file just starts an empty history.
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read a line of input from user
    pub fn read_line(&mut self) -> Result<InputEvent> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }

                Ok(InputEvent::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk
    ///
    /// Called on graceful shutdown
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Clear answer history
    pub fn clear_history(&mut self) {
        let _ = self.editor.history_mut().clear();
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}
