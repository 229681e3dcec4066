//! Diagnostics produced by the scanner and the parser.
//!
//! Both stages record into a [`DiagnosticBag`]. Entries carry offset-based [`Region`]s; once scanning is complete
//! the [`LineMap`] turns them into [`ResolvedDiagnostic`]s with line/column positions, which in turn can be rendered
//! as `miette` reports.
//!
//! ## Notes
//! - Lexical failures never abort scanning: the scanner records a [`LexicalError`] and yields an invalid token.
//! - Syntactic failures travel through `Result` as [`ParseError`] up to the top-level declaration loop, which
//!   records them and substitutes a placeholder.

use std::fmt;

use miette::{LabeledSpan, NamedSource, Severity, SourceCode};

use crate::ast::NodeKind;
use crate::line_map::{LineMap, Position};
use crate::source::Region;

// ============================================================================
// Entries and the bag
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Error,
    Warning,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "error"),
            DiagnosticKind::Warning => write!(f, "warning"),
        }
    }
}

/// Compilation stage a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lexical,
    Syntactic,
}

impl Stage {
    /// Stable diagnostic code used in rendered reports.
    pub fn code(self) -> &'static str {
        match self {
            Stage::Lexical => "strict::lexical",
            Stage::Syntactic => "strict::syntax",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lexical => write!(f, "lexical analysis"),
            Stage::Syntactic => write!(f, "syntactic analysis"),
        }
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub kind: DiagnosticKind,
    pub stage: Stage,
    pub region: Region,
    pub message: String,
    pub unit_name: String,
    /// Common reasons for this kind of failure, shown as help.
    pub hints: Vec<String>,
}

impl DiagnosticEntry {
    pub fn error(stage: Stage, region: Region, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            stage,
            region,
            message: message.into(),
            unit_name: String::new(),
            hints: Vec::new(),
        }
    }

    pub fn warning(stage: Stage, region: Region, message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            ..Self::error(stage, region, message)
        }
    }

    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = unit_name.into();
        self
    }

    pub fn with_hints(mut self, hints: impl IntoIterator<Item = String>) -> Self {
        self.hints.extend(hints);
        self
    }
}

/// Sink accumulating the diagnostics of one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticBag {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: DiagnosticEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DiagnosticEntry> {
        self.entries
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.kind == DiagnosticKind::Error)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move every entry of `other` into this bag, keeping their order.
    pub fn extend(&mut self, other: DiagnosticBag) {
        self.entries.extend(other.entries);
    }

    /// Set the unit name of every entry that has none yet.
    pub fn assign_unit_name(&mut self, unit_name: &str) {
        for entry in self.entries.iter_mut().filter(|e| e.unit_name.is_empty()) {
            entry.unit_name = unit_name.to_string();
        }
    }

    /// Order entries by region start; entries at the same offset keep their order.
    pub fn sort_by_position(&mut self) {
        self.entries.sort_by_key(|e| e.region.begin);
    }

    /// Attach line/column positions to every entry.
    pub fn resolve(&self, line_map: &LineMap) -> Vec<ResolvedDiagnostic> {
        self.entries
            .iter()
            .map(|entry| ResolvedDiagnostic::new(entry.clone(), line_map))
            .collect()
    }
}

// ============================================================================
// Resolved diagnostics
// ============================================================================

/// A diagnostic whose region has been translated to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDiagnostic {
    pub entry: DiagnosticEntry,
    pub begin: Position,
    pub end: Position,
}

impl ResolvedDiagnostic {
    pub fn new(entry: DiagnosticEntry, line_map: &LineMap) -> Self {
        let begin = line_map.position_at_offset(entry.region.begin);
        let end = line_map.position_at_offset(entry.region.end);
        Self { entry, begin, end }
    }

    /// 1-based line of the region start.
    pub fn line(&self) -> usize {
        self.begin.line.index
    }

    /// 1-based column of the region start.
    pub fn column(&self) -> usize {
        self.begin.column + 1
    }

    /// Attach the source text so the diagnostic can be rendered as a `miette` report.
    pub fn into_report(self, source_name: impl AsRef<str>, source: impl Into<String>) -> SourceReport {
        SourceReport {
            named_source: NamedSource::new(source_name, source.into()),
            diagnostic: self,
        }
    }
}

impl fmt::Display for ResolvedDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {}",
            self.entry.unit_name,
            self.line(),
            self.column(),
            self.entry.kind,
            self.entry.message
        )
    }
}

/// A resolved diagnostic bundled with its source, rendered through `miette`.
#[derive(Debug, thiserror::Error)]
#[error("{}", .diagnostic.entry.message)]
pub struct SourceReport {
    named_source: NamedSource<String>,
    diagnostic: ResolvedDiagnostic,
}

impl SourceReport {
    pub fn diagnostic(&self) -> &ResolvedDiagnostic {
        &self.diagnostic
    }
}

impl miette::Diagnostic for SourceReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.diagnostic.entry.stage.code()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.diagnostic.entry.kind {
            DiagnosticKind::Error => Severity::Error,
            DiagnosticKind::Warning => Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let hints = &self.diagnostic.entry.hints;
        if hints.is_empty() {
            return None;
        }
        Some(Box::new(format!("common reasons: {}", hints.join("; "))))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.named_source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(
            Some(self.diagnostic.entry.stage.to_string()),
            self.diagnostic.entry.region,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

// ============================================================================
// Failure taxonomy
// ============================================================================

/// Failure while scanning a single token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexicalError {
    #[error("unexpected char '{received}', expected '{expected}'")]
    UnexpectedChar { received: String, expected: String },
    #[error("there is no such operator: '{0}'")]
    UnknownOperator(char),
    #[error("string literal contains linefeed")]
    StringContainsLineFeed,
    #[error("literal contains invalid escaped char")]
    InvalidEscapedChar,
    #[error("string literal is not terminated")]
    UnterminatedString,
    #[error("string literal exceeds the limit of {0} characters")]
    StringTooLong(usize),
}

/// Cause of a syntactic failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected} but got: '{received}'")]
    UnexpectedToken { expected: String, received: String },
    #[error("unexpected token: '{received}'")]
    StrayToken { received: String },
    #[error("invalid indent of {indent}, expected {expected}")]
    InvalidIndentation { indent: usize, expected: String },
    #[error("could not parse operand: '{received}'")]
    InvalidOperand { received: String },
    #[error("name of the parameter is missing")]
    MissingParameterName,
    #[error("let binding has no variable names")]
    EmptyLetBinding,
    #[error("structure stack is empty while completing {expected}")]
    StructureUnderflow { expected: NodeKind },
}

/// A syntactic failure propagated through the parser.
///
/// ## Notes
/// - `structure` is the kind of the innermost production that failed, `region` runs from its begin offset to the
///   offset of the token the parser stopped at.
/// - The same failure has already been recorded into the parser's diagnostic bag when this value is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed parsing {structure}: {kind}")]
pub struct ParseError {
    pub structure: NodeKind,
    pub region: Region,
    #[source]
    pub kind: ParseErrorKind,
    pub hints: Vec<String>,
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_map::LineMapBuilder;

    #[test]
    fn test_error_messages() {
        let kind = ParseErrorKind::UnexpectedToken {
            expected: ")".to_string(),
            received: "end of file".to_string(),
        };
        assert_eq!(kind.to_string(), "expected ) but got: 'end of file'");
        let kind = ParseErrorKind::InvalidIndentation {
            indent: 4,
            expected: "indent level of 2".to_string(),
        };
        assert_eq!(kind.to_string(), "invalid indent of 4, expected indent level of 2");
        let lexical = LexicalError::UnexpectedChar {
            received: "g".to_string(),
            expected: "number with radix 16".to_string(),
        };
        assert_eq!(lexical.to_string(), "unexpected char 'g', expected 'number with radix 16'");
    }

    #[test]
    fn test_bag_resolves_positions() {
        let mut lines = LineMapBuilder::new();
        lines.append("a = 1", 0, 5);
        lines.append("b = ?", 6, 5);
        let map = lines.build();

        let mut bag = DiagnosticBag::new();
        bag.record(DiagnosticEntry::error(Stage::Syntactic, Region::new(10, 11), "unexpected token: '?'").with_unit_name("Main.strict"));
        bag.record(DiagnosticEntry::warning(Stage::Lexical, Region::new(0, 1), "noted"));
        assert!(bag.has_errors());
        assert_eq!(bag.len(), 2);

        let resolved = bag.resolve(&map);
        assert_eq!(resolved[0].line(), 2);
        assert_eq!(resolved[0].column(), 5);
        assert_eq!(resolved[0].to_string(), "Main.strict:2:5: error: unexpected token: '?'");
        assert_eq!(resolved[1].line(), 1);
    }

    #[test]
    fn test_warnings_are_not_errors() {
        let mut bag = DiagnosticBag::new();
        bag.record(DiagnosticEntry::warning(Stage::Syntactic, Region::UNKNOWN, "odd"));
        assert!(!bag.has_errors());
        assert!(!bag.is_empty());
    }

    #[test]
    fn test_merge_orders_by_position() {
        let mut lexical = DiagnosticBag::new();
        lexical.record(DiagnosticEntry::error(Stage::Lexical, Region::new(9, 10), "late").with_unit_name("Other"));
        let mut syntactic = DiagnosticBag::new();
        syntactic.record(DiagnosticEntry::error(Stage::Syntactic, Region::new(2, 4), "early"));
        lexical.extend(syntactic);
        lexical.assign_unit_name("Main");
        lexical.sort_by_position();
        let entries = lexical.into_entries();
        assert_eq!(entries[0].message, "early");
        assert_eq!(entries[0].unit_name, "Main");
        assert_eq!(entries[1].unit_name, "Other");
    }
}
