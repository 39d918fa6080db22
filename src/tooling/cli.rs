//! CLI Tooling
//!
//! Command-line interface for note extraction. Each command returns its
//! user-facing output as a string; the binary prints it.

use crate::config::{ConfigLoader, NotesConfig};
use crate::error::ApiError;
use crate::extract::NoteExtractor;
use crate::logging::LoggingConfig;
use crate::report::write_report;
use crate::tooling::format::format_preview_text;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::info;

/// Printed when the interactive prompt is left empty.
pub const NO_FILE_SELECTED: &str = "No file selected, exiting";

/// xmind-notes - extract topic notes from XMind mind-maps
#[derive(Parser)]
#[command(name = "xmind-notes")]
#[command(about = "Extract topic notes from XMind mind-maps into a Markdown report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags over `base`. Flags win over config values.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract notes and write <name>_notes.md next to the document
    Extract {
        /// Path to the .xmind document (prompted for when omitted)
        path: Option<PathBuf>,
    },
    /// Print the extracted notes without writing a report
    Preview {
        /// Path to the .xmind document (prompted for when omitted)
        path: Option<PathBuf>,
    },
}

/// CLI execution context
pub struct CliContext {
    config: NotesConfig,
    extractor: NoteExtractor,
}

impl CliContext {
    /// Create a context, loading `config_path` when given or the global config otherwise.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: NotesConfig) -> Self {
        Self {
            config,
            extractor: NoteExtractor::new(),
        }
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Extract { path } => match self.resolve_input(path.as_deref())? {
                Some(path) => self.handle_extract(&path),
                None => Ok(NO_FILE_SELECTED.to_string()),
            },
            Commands::Preview { path } => match self.resolve_input(path.as_deref())? {
                Some(path) => self.handle_preview(&path),
                None => Ok(NO_FILE_SELECTED.to_string()),
            },
        }
    }

    fn handle_extract(&self, path: &Path) -> Result<String, ApiError> {
        let records = self.extractor.extract(path)?;
        let mut out = format!("Processing file: {}\n", path.display());
        match write_report(path, &records)? {
            Some(report) => {
                out.push_str(&format!(
                    "Extracted {} notes\nNotes saved to: {}",
                    records.len(),
                    report.display()
                ));
            }
            None => {
                info!(path = %path.display(), "Skipped report for document without notes");
                out.push_str("No notes were extracted; nothing written");
            }
        }
        Ok(out)
    }

    fn handle_preview(&self, path: &Path) -> Result<String, ApiError> {
        let records = self.extractor.extract(path)?;
        Ok(format_preview_text(path, &records))
    }

    fn resolve_input(&self, path: Option<&Path>) -> Result<Option<PathBuf>, ApiError> {
        if let Some(path) = path {
            return Ok(Some(path.to_path_buf()));
        }
        if !std::io::stdin().is_terminal() {
            return Err(ApiError::Prompt(
                "no document path given and stdin is not a terminal".to_string(),
            ));
        }

        let answer: String = Input::new()
            .with_prompt("Path to XMind document")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ApiError::Prompt(e.to_string()))?;
        Ok(parse_prompt_answer(&answer))
    }
}

/// Strip whitespace and the quotes terminals add to dropped file paths.
fn parse_prompt_answer(answer: &str) -> Option<PathBuf> {
    let trimmed = answer
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
