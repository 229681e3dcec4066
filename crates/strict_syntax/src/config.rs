//! Configuration for the scanner and the parser.

/// Scanner settings.
///
/// ## Notes
/// - Indent widths are counted per character of leading whitespace.
/// - `string_limit` counts characters of the literal body, escapes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Indent units contributed by one space (default: 1)
    pub space_indent: usize,
    /// Indent units contributed by one tab (default: 4)
    pub tab_indent: usize,
    /// Longest accepted string literal (default: 1024)
    pub string_limit: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            space_indent: 1,
            tab_indent: 4,
            string_limit: 1024,
        }
    }
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space_indent(mut self, width: usize) -> Self {
        self.space_indent = width;
        self
    }

    pub fn with_tab_indent(mut self, width: usize) -> Self {
        self.tab_indent = width;
        self
    }

    pub fn with_string_limit(mut self, limit: usize) -> Self {
        self.string_limit = limit;
        self
    }
}

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Name of the unit, usually the file path; the class name is derived from it.
    pub unit_name: String,
    /// Keep a textual history of structure pushes and pops for debugging.
    pub record_structure_history: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            unit_name: "Main".to_string(),
            record_structure_history: false,
        }
    }
}

impl ParserConfig {
    pub fn new(unit_name: impl Into<String>) -> Self {
        Self {
            unit_name: unit_name.into(),
            ..Self::default()
        }
    }

    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = unit_name.into();
        self
    }

    pub fn with_structure_history(mut self, record: bool) -> Self {
        self.record_structure_history = record;
        self
    }
}
