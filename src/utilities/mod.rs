//! The utility registry and the generator output model.
//!
//! The utility set is fixed and known at build time, so dispatch is a closed
//! enum ([`UtilityKind`]) rather than open-ended dynamic lookup: arity and
//! argument checks stay exhaustive, and nothing in a stylesheet can register
//! new utilities at run time.

use std::collections::HashMap;

use crate::args::Arg;
use crate::diagnostics::WarningKind;

pub mod std_utilities;

pub use std_utilities::generate;

/// Every utility the engine knows how to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityKind {
    Truncate,
    ResetList,
    HideVisually,
    Clearfix,
    TextHide,
    Triangle,
    Size,
    WordWrap,
    StickyFooter,
    ResetText,
    BorderColor,
    BorderStyle,
    BorderWidth,
    Padding,
    Margin,
    BorderRadius,
    Position,
    TextStroke,
    Hd,
}

/// One entry in the registry: the utility's dispatch kind plus the argument
/// counts it accepts. Immutable after registration.
#[derive(Debug, Clone, Copy)]
pub struct UtilitySpec {
    pub name: &'static str,
    pub kind: UtilityKind,
    pub min_arity: usize,
    pub max_arity: usize,
}

impl UtilitySpec {
    pub fn accepts_arity(&self, n: usize) -> bool {
        n >= self.min_arity && n <= self.max_arity
    }
}

/// Fixed mapping from utility name to its spec. Built once at startup and
/// never mutated afterwards; safe to share read-only across concurrent runs.
#[derive(Debug, Default)]
pub struct UtilityRegistry {
    utilities: HashMap<&'static str, UtilitySpec>,
}

impl UtilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &'static str,
        kind: UtilityKind,
        min_arity: usize,
        max_arity: usize,
    ) {
        self.utilities.insert(
            name,
            UtilitySpec {
                name,
                kind,
                min_arity,
                max_arity,
            },
        );
    }

    /// Exact-match, case-sensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<&UtilitySpec> {
        self.utilities.get(name)
    }

    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }
}

// ============================================================================
// GENERATOR OUTPUT MODEL
// ============================================================================

/// A node produced by a generator, before it is grafted into the host tree.
///
/// Generators never touch the stylesheet directly; they return plain
/// property/value data and the splicer turns it into tree nodes with the
/// right trivia and position.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputNode {
    /// A declaration inserted at the directive's position.
    Declaration { prop: String, value: String },
    /// A new rule inserted as a sibling after the enclosing rule.
    Rule {
        selector: String,
        decls: Vec<(String, String)>,
    },
    /// Wraps the enclosing rule in an `@media` at-rule with these params.
    /// Only the hd breakpoint helper produces this.
    MediaWrap { params: String },
}

impl OutputNode {
    pub fn decl(prop: impl Into<String>, value: impl Into<String>) -> Self {
        OutputNode::Declaration {
            prop: prop.into(),
            value: value.into(),
        }
    }
}

/// A usage problem detected by a generator; the engine turns it into a
/// warning attached to the directive's span.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageError {
    pub kind: WarningKind,
    pub message: String,
}

impl UsageError {
    pub fn invalid(message: impl Into<String>) -> Self {
        UsageError {
            kind: WarningKind::InvalidArgument,
            message: message.into(),
        }
    }
}

/// What a generator returns: replacement nodes, or a non-fatal usage error.
pub type GenerationResult = Result<Vec<OutputNode>, UsageError>;

/// The context a generator sees: parsed arguments plus the selector of the
/// enclosing rule, used when generating sibling rules (`ul li`, `a:after`).
#[derive(Debug, Clone, Copy)]
pub struct GenerateCtx<'a> {
    pub args: &'a [Arg],
    pub parent_selector: &'a str,
}
