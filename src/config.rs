//! Front end configuration.
//!
//! Bundles the scanner and parser settings from `strict_syntax` with the settings that only the command line driver
//! cares about (report colors and the log filter).

use strict_syntax::config::{ParserConfig, ScannerConfig};
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub scanner: ScannerConfig,
    /// Record the structure stack history while parsing (debug)
    pub record_structure_history: bool,
    /// Render diagnostics with ANSI colors
    pub color: bool,
    /// Explicit log filter; overrides `RUST_LOG` when set
    pub log_filter: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            record_structure_history: false,
            color: true,
            log_filter: None,
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scanner(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_structure_history(mut self, record: bool) -> Self {
        self.record_structure_history = record;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Parser settings for the unit read from `unit_name`.
    pub fn parser_config(&self, unit_name: &str) -> ParserConfig {
        ParserConfig::new(unit_name).with_structure_history(self.record_structure_history)
    }

    /// Log filter directives in effect: `--log`, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
    pub fn env_filter(&self) -> EnvFilter {
        match &self.log_filter {
            Some(filter) => EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrontendConfig::default();
        assert!(config.color);
        assert!(!config.record_structure_history);
        assert_eq!(config.log_filter, None);
        assert_eq!(config.scanner, ScannerConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = FrontendConfig::new()
            .with_color(false)
            .with_log_filter("strict_syntax=debug")
            .with_scanner(ScannerConfig::new().with_tab_indent(2))
            .with_structure_history(true);
        assert!(!config.color);
        assert_eq!(config.log_filter.as_deref(), Some("strict_syntax=debug"));
        assert_eq!(config.scanner.tab_indent, 2);
        assert!(config.parser_config("Main.strict").record_structure_history);
    }

    #[test]
    fn test_parser_config_carries_unit_name() {
        let config = FrontendConfig::default().parser_config("shapes/Circle.strict");
        assert_eq!(config.unit_name, "shapes/Circle.strict");
    }

    #[test]
    fn test_explicit_log_filter_wins() {
        let filter = FrontendConfig::default().with_log_filter("debug").env_filter();
        assert_eq!(filter.to_string(), "debug");
    }
}
