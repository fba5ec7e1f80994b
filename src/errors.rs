//! Weft error handling.
//!
//! There is exactly one fatal error tier: the host stylesheet failing to
//! parse (or the CLI failing to read it). Everything the expansion engine
//! itself detects — unknown utilities, bad arity, bad argument values — is a
//! non-fatal [`Warning`](crate::diagnostics::Warning) and never aborts a run.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use thiserror::Error;

use crate::syntax::Span;

/// Source context for error reporting: the stylesheet name and its content.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Converts to a NamedSource for miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

/// Converts a syntax span to a miette source span.
pub fn to_source_span(span: Span) -> SourceSpan {
    let len = span.end.saturating_sub(span.start).max(1);
    SourceSpan::new(span.start.into(), len)
}

/// Fatal failure modes of the weft pipeline.
#[derive(Debug, Error)]
pub enum WeftError {
    #[error("parse error: {message}")]
    Parse {
        message: String,
        src: Arc<NamedSource<String>>,
        span: Span,
    },
    #[error("io error: {message}")]
    Io { message: String },
}

impl WeftError {
    pub fn parse(message: impl Into<String>, ctx: &SourceContext, span: Span) -> Self {
        WeftError::Parse {
            message: message.into(),
            src: ctx.to_named_source(),
            span,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        WeftError::Io {
            message: message.into(),
        }
    }
}

impl Diagnostic for WeftError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self {
            WeftError::Parse { .. } => Some(Box::new("weft::parse")),
            WeftError::Io { .. } => Some(Box::new("weft::io")),
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            WeftError::Parse { src, .. } => Some(src.as_ref() as &dyn SourceCode),
            WeftError::Io { .. } => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            WeftError::Parse { message, span, .. } => {
                let len = if span.end > span.start {
                    span.end - span.start
                } else {
                    1
                };
                Some(Box::new(std::iter::once(LabeledSpan::new(
                    Some(message.clone()),
                    span.start,
                    len,
                ))))
            }
            WeftError::Io { .. } => None,
        }
    }
}
