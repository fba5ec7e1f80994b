//! Syntax module for the weft engine.
//!
//! Provides the stylesheet tree the expansion engine operates on: rules,
//! declarations, and at-rules, each carrying source spans and the trivia
//! (whitespace, comments) needed to print an untouched tree byte-for-byte.
//!
//! The tree is deliberately dumb: it knows nothing about utilities or
//! directives. Child lists are plain vectors with stable indices, so the
//! splicer can insert and remove nodes by position without aliasing hazards.

use serde::{Deserialize, Serialize};

pub mod parser;

pub use parser::parse;

/// Represents a span in the source stylesheet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A single node in a stylesheet or rule body.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
    Declaration(Declaration),
}

/// The root of a parsed stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
    /// Trivia after the last node.
    pub after: String,
}

/// A style rule: selector plus a body of child nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
    pub span: Span,
    /// Trivia before the selector.
    pub before: String,
    /// Trivia between the selector and the opening brace.
    pub between: String,
    /// Trivia before the closing brace.
    pub after: String,
}

/// An at-rule: `@name params;` or `@name params { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    pub name: String,
    /// Parameter text with surrounding whitespace trimmed.
    pub params: String,
    /// Block body, if the at-rule has one.
    pub nodes: Option<Vec<Node>>,
    pub span: Span,
    /// Trivia before the `@`.
    pub before: String,
    /// Trivia between the name and the parameter text.
    pub after_name: String,
    /// Trivia between the parameter text and the `;` or opening brace.
    pub between: String,
    /// Trivia before the closing brace (block form only).
    pub after: String,
    /// Whether a trailing semicolon was present (blockless form only).
    pub semicolon: bool,
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub span: Span,
    /// Trivia before the property name.
    pub before: String,
    /// Trivia around the colon, colon included (usually `": "`).
    pub between: String,
    /// Trivia between the value and the `;` or closing brace.
    pub after: String,
    pub semicolon: bool,
}

impl Node {
    /// Returns the node's kind as a string, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Rule(_) => "Rule",
            Node::AtRule(_) => "AtRule",
            Node::Declaration(_) => "Declaration",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Rule(r) => r.span,
            Node::AtRule(a) => a.span,
            Node::Declaration(d) => d.span,
        }
    }
}

impl Declaration {
    /// Builds a declaration synthesized by a generator. The splicer stamps
    /// body trivia on it (a single leading space, `": "` around the colon,
    /// trailing semicolon), matching how hand-written one-line rules read.
    pub fn synthesized(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            prop: prop.into(),
            value: value.into(),
            span: Span::default(),
            before: " ".to_string(),
            between: ": ".to_string(),
            after: String::new(),
            semicolon: true,
        }
    }
}

impl Rule {
    /// Builds a rule synthesized by a generator, inserted as a sibling of an
    /// existing rule. `between` is cloned from the enclosing rule so the new
    /// rule inherits the document's selector/brace spacing.
    pub fn synthesized(selector: impl Into<String>, nodes: Vec<Node>, between: &str) -> Self {
        Rule {
            selector: selector.into(),
            nodes,
            span: Span::default(),
            before: "\n".to_string(),
            between: between.to_string(),
            after: " ".to_string(),
        }
    }
}

// ============================================================================
// PRINTER
// ============================================================================

impl Stylesheet {
    /// Serializes the tree back to CSS text.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            print_node(node, &mut out);
        }
        out.push_str(&self.after);
        out
    }
}

fn print_node(node: &Node, out: &mut String) {
    match node {
        Node::Rule(rule) => print_rule(rule, out),
        Node::AtRule(at) => print_at_rule(at, out),
        Node::Declaration(decl) => print_declaration(decl, out),
    }
}

fn print_rule(rule: &Rule, out: &mut String) {
    out.push_str(&rule.before);
    out.push_str(&rule.selector);
    out.push_str(&rule.between);
    out.push('{');
    for child in &rule.nodes {
        print_node(child, out);
    }
    out.push_str(&rule.after);
    out.push('}');
}

fn print_at_rule(at: &AtRule, out: &mut String) {
    out.push_str(&at.before);
    out.push('@');
    out.push_str(&at.name);
    out.push_str(&at.after_name);
    out.push_str(&at.params);
    out.push_str(&at.between);
    match &at.nodes {
        Some(children) => {
            out.push('{');
            for child in children {
                print_node(child, out);
            }
            out.push_str(&at.after);
            out.push('}');
        }
        None => {
            if at.semicolon {
                out.push(';');
            }
        }
    }
}

fn print_declaration(decl: &Declaration, out: &mut String) {
    out.push_str(&decl.before);
    out.push_str(&decl.prop);
    out.push_str(&decl.between);
    out.push_str(&decl.value);
    out.push_str(&decl.after);
    if decl.semicolon {
        out.push(';');
    }
}
