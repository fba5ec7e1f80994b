//! Non-fatal diagnostics for the expansion engine.
//!
//! Malformed directive usage never aborts a run: the engine records a warning
//! against the offending node, drops the directive, and keeps walking the
//! rest of the document. Warnings are collected in document order and never
//! deduplicated, so a document with two independent malformed directives
//! always yields exactly two warnings.

use serde::Serialize;

use crate::syntax::Span;

/// Classification of a directive usage problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// Directive names a utility that is not in the registry.
    UnknownUtility,
    /// Argument count is outside the utility's accepted range.
    ArityMismatch,
    /// An argument value the utility cannot interpret (bad direction, bad
    /// color, directive outside a rule, and similar).
    InvalidArgument,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::UnknownUtility => "unknown-utility",
            WarningKind::ArityMismatch => "arity-mismatch",
            WarningKind::InvalidArgument => "invalid-argument",
        }
    }
}

/// A single recorded warning, attached to the span of the offending node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    pub span: Span,
}

/// Ordered, per-run warning sink.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a warning. Never fails, never deduplicates.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>, span: Span) {
        self.warnings.push(Warning {
            kind,
            message: message.into(),
            span,
        });
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
