//! Shareable metadata for `strict_core::lang` registries.
//!
//! The `strict_core::lang` module is a set of **registry-first** vocabularies. This submodule provides the small,
//! dependency-free metadata types that are reused across all registries.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling, docs and diagnostics; enforcement of syntax rules lives in the scanner and
//!   parser.

/// Language version a vocabulary item has been available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use strict_core::lang::registry::Since;
///
/// assert!(Since(0, 2) > Since(0, 1));
/// assert_eq!(Since(0, 1).to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// A small example snippet for documentation.
///
/// ## Examples
/// ```rust
/// use strict_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "for i from 0 to 10\n  log(i)",
///     note: Some("Ranged loop."),
/// };
/// assert!(ex.code.starts_with("for"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
