//! Weft stylesheet parser.
//!
//! Converts CSS source text into the stylesheet tree with source spans and
//! trivia preserved. The parser is purely syntactic: directives (`@util ...`)
//! come out as ordinary at-rules, and nothing here knows about utilities.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::errors::{SourceContext, WeftError};
use crate::syntax::{AtRule, Declaration, Node, Span, Stylesheet};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct CssParser;

/// Parses CSS source text into a stylesheet tree.
pub fn parse(source: &str, ctx: &SourceContext) -> Result<Stylesheet, WeftError> {
    let mut pairs = CssParser::parse(Rule::stylesheet, source)
        .map_err(|e| convert_parse_error(e, ctx))?;

    let stylesheet = pairs.next().expect("pest guarantees the stylesheet rule");

    let mut nodes = Vec::new();
    let mut pending_trivia = String::new();
    for pair in stylesheet.into_inner() {
        match pair.as_rule() {
            Rule::trivia => pending_trivia = pair.as_str().to_string(),
            Rule::item => {
                let before = std::mem::take(&mut pending_trivia);
                nodes.push(build_item(pair, before));
            }
            Rule::EOI => {}
            other => unreachable!("unexpected rule in stylesheet: {:?}", other),
        }
    }

    Ok(Stylesheet {
        nodes,
        after: pending_trivia,
    })
}

// ============================================================================
// TREE BUILDERS
// ============================================================================

fn build_item(pair: Pair<Rule>, before: String) -> Node {
    let inner = pair.into_inner().next().expect("item has exactly one child");
    match inner.as_rule() {
        Rule::rule => Node::Rule(build_rule(inner, before)),
        Rule::at_rule => Node::AtRule(build_at_rule(inner, before)),
        Rule::declaration => Node::Declaration(build_declaration(inner, before)),
        other => unreachable!("unexpected rule in item: {:?}", other),
    }
}

fn build_rule(pair: Pair<Rule>, before: String) -> crate::syntax::Rule {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();

    let prelude = inner.next().expect("rule has a prelude");
    let raw = prelude.as_str();
    let selector = raw.trim_end();
    let between = &raw[selector.len()..];

    let block = inner.next().expect("rule has a block");
    let (nodes, after) = build_block(block);

    crate::syntax::Rule {
        selector: selector.to_string(),
        nodes,
        span,
        before,
        between: between.to_string(),
        after,
    }
}

fn build_at_rule(pair: Pair<Rule>, before: String) -> AtRule {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();

    let name = inner.next().expect("at-rule has a name").as_str().to_string();
    let raw_params = inner.next().expect("at-rule has params").as_str();
    let (after_name, params, between) = split_surrounding_ws(raw_params);

    let mut nodes = None;
    let mut after = String::new();
    let mut semicolon = false;
    if let Some(tail) = inner.next() {
        match tail.as_rule() {
            Rule::block => {
                let (children, block_after) = build_block(tail);
                nodes = Some(children);
                after = block_after;
            }
            Rule::semi => semicolon = true,
            other => unreachable!("unexpected rule in at-rule: {:?}", other),
        }
    }

    AtRule {
        name,
        params: params.to_string(),
        nodes,
        span,
        before,
        after_name: after_name.to_string(),
        between: between.to_string(),
        after,
        semicolon,
    }
}

fn build_declaration(pair: Pair<Rule>, before: String) -> Declaration {
    let span = span_of(&pair);
    let mut inner = pair.into_inner();

    let prop = inner.next().expect("declaration has a prop").as_str();
    let between = inner.next().expect("declaration has a colon").as_str();
    let raw_value = inner.next().expect("declaration has a value").as_str();
    let value = raw_value.trim_end();
    let after = &raw_value[value.len()..];
    let semicolon = inner.next().is_some();

    Declaration {
        prop: prop.to_string(),
        value: value.to_string(),
        span,
        before,
        between: between.to_string(),
        after: after.to_string(),
        semicolon,
    }
}

fn build_block(pair: Pair<Rule>) -> (Vec<Node>, String) {
    let mut nodes = Vec::new();
    let mut pending_trivia = String::new();
    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::trivia => pending_trivia = child.as_str().to_string(),
            Rule::item => {
                let before = std::mem::take(&mut pending_trivia);
                nodes.push(build_item(child, before));
            }
            other => unreachable!("unexpected rule in block: {:?}", other),
        }
    }
    (nodes, pending_trivia)
}

// ============================================================================
// HELPERS
// ============================================================================

fn span_of(pair: &Pair<Rule>) -> Span {
    let s = pair.as_span();
    Span {
        start: s.start(),
        end: s.end(),
    }
}

/// Splits a raw text run into (leading whitespace, core, trailing whitespace).
fn split_surrounding_ws(raw: &str) -> (&str, &str, &str) {
    let trimmed_start = raw.trim_start();
    let leading = &raw[..raw.len() - trimmed_start.len()];
    let core = trimmed_start.trim_end();
    let trailing = &trimmed_start[core.len()..];
    (leading, core, trailing)
}

fn convert_parse_error(error: pest::error::Error<Rule>, ctx: &SourceContext) -> WeftError {
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => Span {
            start: pos,
            end: pos + 1,
        },
        pest::error::InputLocation::Span((start, end)) => Span { start, end },
    };
    WeftError::parse(format!("invalid stylesheet syntax: {}", error.variant.message()), ctx, span)
}
