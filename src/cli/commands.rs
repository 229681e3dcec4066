//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Rendering lives in `render_*` functions that return strings, so it can be tested without files.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use miette::{GraphicalReportHandler, GraphicalTheme};
use strict_syntax::diagnostics::ResolvedDiagnostic;
use strict_syntax::lexer::{self, LexOutput, Scanner};
use strict_syntax::parser::{self, ParseOutput};
use strict_syntax::source::StringReader;
use strict_syntax::visit::{KindCounter, NodeRef, walk};

use super::{CliError, CliResult, ExitCode};
use crate::config::FrontendConfig;

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during scanning.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let display = path.display();
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    tracing::debug!(path = %path.display(), bytes = metadata.len(), "reading source");
    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Scan and parse `source` with the driver configuration.
pub fn parse_source(unit_name: &str, source: &str, config: &FrontendConfig) -> ParseOutput {
    let scanner = Scanner::with_config(StringReader::new(source), config.scanner.clone());
    parser::parse_with(scanner, config.parser_config(unit_name))
}

// ============================================================================
// Commands
// ============================================================================

/// Print the token stream of a file.
pub fn tokenize_file(path: &Path, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let unit_name = path.display().to_string();
    let lexed = lexer::lex_with(&source, config.scanner.clone());
    print!("{}", render_tokens(&lexed));

    if lexed.diagnostics.has_errors() {
        let resolved = lexed.diagnostics.resolve(&lexed.line_map);
        let message = render_diagnostics(resolved, &unit_name, &source, config.color);
        return Err(CliError::failure(message.trim_end()));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its syntax tree, or node counts per kind with `stats`.
pub fn tree_file(path: &Path, stats: bool, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let unit_name = path.display().to_string();
    let output = parse_source(&unit_name, &source, config);

    if stats {
        print!("{}", render_stats(&output));
    } else {
        println!("{:#?}", output.unit);
    }
    if let Some(history) = &output.structure_history {
        println!("Structure history:");
        print!("{history}");
    }

    if output.has_errors() {
        let message = render_diagnostics(output.resolve_diagnostics(), &unit_name, &source, config.color);
        return Err(CliError::failure(message.trim_end()));
    }
    Ok(ExitCode::SUCCESS)
}

/// Report lexical and syntax errors of a file.
pub fn check_file(path: &Path, config: &FrontendConfig) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let unit_name = path.display().to_string();
    let output = parse_source(&unit_name, &source, config);

    if output.has_errors() {
        let message = render_diagnostics(output.resolve_diagnostics(), &unit_name, &source, config.color);
        return Err(CliError::failure(message.trim_end()));
    }
    println!("✓ {unit_name}: no syntax errors");
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Rendering
// ============================================================================

/// One line per token: `<line>:<column> <Kind> '<value>' indent=<n>`.
pub fn render_tokens(lexed: &LexOutput) -> String {
    let mut out = String::new();
    for token in &lexed.tokens {
        let position = lexed.line_map.position_at_offset(token.region.begin);
        let _ = writeln!(
            out,
            "{}:{} {} '{}' indent={}",
            position.line.index,
            position.column + 1,
            token.kind.name(),
            token.value(),
            token.indent
        );
    }
    out
}

/// Node counts per kind, ordered by kind name, followed by the total.
pub fn render_stats(output: &ParseOutput) -> String {
    let mut counter = KindCounter::default();
    walk(NodeRef::TranslationUnit(&output.unit), &mut counter);
    let mut out = String::new();
    for (kind, count) in counter.sorted() {
        let _ = writeln!(out, "{kind}: {count}");
    }
    let _ = writeln!(out, "total: {}", counter.total());
    out
}

/// Render diagnostics as `miette` reports with `unit_name` as the named source.
pub fn render_diagnostics(diagnostics: Vec<ResolvedDiagnostic>, unit_name: &str, source: &str, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = diagnostic.into_report(unit_name, source);
        if handler.render_report(&mut out, &report).is_err() {
            tracing::warn!("failed to render diagnostic report");
            let _ = writeln!(out, "{}", report.diagnostic());
        }
    }
    out
}
