//! Stack of the syntax structures the parser is currently inside.
//!
//! Every production pushes its [`NodeKind`] together with the offset it begins at and pops it when it completes.
//! The begin offsets give node regions on success and the failing region when a production fails half way.
//!
//! ## Notes
//! - A production that is ambiguous when it starts (`for ...`, a type name that turns out to be a list access)
//!   pushes a provisional kind and reclassifies it with [`StructureStack::update_top_kind`].
//! - Completing a structure with an unexpected kind is logged, not reported: it indicates a parser bug.

use std::fmt::Write as _;

use crate::ast::NodeKind;
use crate::source::Offset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub kind: NodeKind,
    pub begin: Offset,
}

#[derive(Debug, Clone, Default)]
pub struct StructureStack {
    elements: Vec<Structure>,
    history: Option<String>,
}

impl StructureStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack that keeps a textual history of every push and pop.
    pub fn recording() -> Self {
        Self {
            elements: Vec::new(),
            history: Some(String::new()),
        }
    }

    pub fn push(&mut self, kind: NodeKind, begin: Offset) {
        let depth = self.elements.len();
        if let Some(history) = &mut self.history {
            let _ = writeln!(history, " | {} >> {kind} at offset {begin}", ".".repeat(depth));
        }
        self.elements.push(Structure { kind, begin });
    }

    /// Pop the top structure.
    ///
    /// ## Returns
    /// - The popped structure, whatever its kind. A kind other than `expected` is logged unless `expected` is
    ///   [`NodeKind::Wildcard`].
    /// - `None` if the stack is empty.
    pub fn pop(&mut self, expected: NodeKind) -> Option<Structure> {
        let structure = self.elements.pop()?;
        if expected != NodeKind::Wildcard && structure.kind != expected {
            tracing::warn!("Expected to complete {} but completed {}", expected, structure.kind);
        }
        self.record_pop(structure.kind);
        Some(structure)
    }

    /// Replace the kind of the top structure, keeping its begin offset.
    ///
    /// ## Returns
    /// - `false` if the stack is empty.
    pub fn update_top_kind(&mut self, kind: NodeKind) -> bool {
        match self.elements.last_mut() {
            Some(top) => {
                top.kind = kind;
                true
            }
            None => false,
        }
    }

    pub fn top(&self) -> Option<&Structure> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every structure above `len`, top first.
    pub fn truncate(&mut self, len: usize) {
        while self.elements.len() > len {
            if let Some(structure) = self.elements.pop() {
                self.record_pop(structure.kind);
            }
        }
    }

    /// Structures that have not been completed, innermost first.
    pub fn remaining_top_down(&self) -> Vec<Structure> {
        self.elements.iter().rev().copied().collect()
    }

    /// Recorded history, if this stack was created with [`StructureStack::recording`].
    pub fn history(&self) -> Option<&str> {
        self.history.as_deref()
    }

    fn record_pop(&mut self, kind: NodeKind) {
        let depth = self.elements.len();
        if let Some(history) = &mut self.history {
            let _ = writeln!(history, " | {} << {kind}", ".".repeat(depth));
        }
    }
}
