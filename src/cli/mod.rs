//! CLI module for the Strict front end
//!
//! This module provides the command-line interface around the scanner and the parser.
//!
//! ## Commands
//!
//! - `tokenize <file>` - Print the token stream, one token per line
//! - `tree <file>` - Print the syntax tree (`--stats` for node counts per kind)
//! - `check <file>` - Report lexical and syntax errors
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::version::STRICT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Strict language front end
#[derive(Parser, Debug)]
#[command(name = "strict")]
#[command(version = STRICT_VERSION)]
#[command(about = "Scanner and parser for the Strict programming language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter directives (overrides RUST_LOG), e.g. `strict_syntax=debug`
    #[arg(long = "log", value_name = "FILTER", global = true)]
    pub log: Option<String>,

    /// Render diagnostics without colors
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Indent units per tab character
    #[arg(long = "tab-width", value_name = "N", global = true)]
    pub tab_width: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a file
    Tokenize {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the syntax tree of a file
    Tree {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print node counts per kind instead of the tree
        #[arg(long)]
        stats: bool,
        /// Print the structure stack history after the tree (debug)
        #[arg(long)]
        structures: bool,
    },

    /// Report lexical and syntax errors of a file
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    /// Driver configuration selected by the global flags.
    pub fn frontend_config(&self) -> FrontendConfig {
        let mut config = FrontendConfig::new().with_color(!self.no_color);
        if let Some(filter) = &self.log {
            config = config.with_log_filter(filter.as_str());
        }
        if let Some(width) = self.tab_width {
            config.scanner = config.scanner.with_tab_indent(width);
        }
        if let Command::Tree { structures: true, .. } = self.command {
            config = config.with_structure_history(true);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.frontend_config();
    init_logging(&config);

    match execute(cli, &config) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Initialize structured logging on stderr.
fn init_logging(config: &FrontendConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the CLI command and return result.
fn execute(cli: Cli, config: &FrontendConfig) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tokenize { file } => commands::tokenize_file(&file, config),
        Command::Tree { file, stats, .. } => commands::tree_file(&file, stats, config),
        Command::Check { file } => commands::check_file(&file, config),
    }
}

// ============================================================================
// Tests
// ============================================================================
