//! The directive-expansion engine.
//!
//! Walks a stylesheet tree once, in document order, and replaces every
//! `@util <name>(<args>)` at-rule with the declarations and rules its
//! generator produces. Malformed usage degrades to "no-op plus warning":
//! the directive is dropped, a warning is recorded against its span, and
//! traversal continues. Nothing the engine detects is fatal.
//!
//! The engine is a pure function from (tree, options) to (mutated tree,
//! warning list): it performs no I/O and holds no state across runs beyond
//! the immutable utility registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::args;
use crate::diagnostics::{Diagnostics, Warning, WarningKind};
use crate::errors::{SourceContext, WeftError};
use crate::registry::default_registry;
use crate::syntax::{self, AtRule, Declaration, Node, Span, Stylesheet};
use crate::utilities::{GenerateCtx, OutputNode, UtilityRegistry};

/// The at-rule keyword the engine recognizes.
pub const DIRECTIVE_NAME: &str = "util";

/// Engine options. No toggles are recognized yet; unknown keys are accepted
/// and ignored, forming the compatibility surface for future utility
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Options {
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The result of expanding a stylesheet from source text.
#[derive(Debug)]
pub struct ExpandOutput {
    pub css: String,
    pub warnings: Vec<Warning>,
}

/// Expands every directive in the tree in place, returning the warnings
/// collected along the way.
pub fn expand(stylesheet: &mut Stylesheet, _options: &Options) -> Vec<Warning> {
    let mut expander = Expander::new(default_registry());
    expander.run(stylesheet);
    expander.diagnostics.into_warnings()
}

/// Parse, expand, and print in one step.
pub fn expand_str(css: &str, name: &str, options: &Options) -> Result<ExpandOutput, WeftError> {
    let ctx = SourceContext::from_file(name, css);
    let mut stylesheet = syntax::parse(css, &ctx)?;
    let warnings = expand(&mut stylesheet, options);
    Ok(ExpandOutput {
        css: stylesheet.to_css(),
        warnings,
    })
}

// ============================================================================
// EXPANDER
// ============================================================================

/// The selector and formatting of the innermost enclosing rule, threaded
/// through traversal so generators can build `ul li` / `a:after` selectors
/// and synthesized rules can clone the document's brace spacing.
#[derive(Debug, Clone)]
struct EnclosingRule {
    selector: String,
    between: String,
}

/// Nodes a container hands up to its parent: sibling rules to insert after
/// the container, and an `@media` wrap requested by the hd helper. `touched`
/// records whether a directive modified the container's body, which gates
/// empty-container removal.
#[derive(Debug, Default)]
struct Hoisted {
    siblings: Vec<Node>,
    media: Option<String>,
    touched: bool,
}

struct Expander<'a> {
    registry: &'a UtilityRegistry,
    diagnostics: Diagnostics,
}

impl<'a> Expander<'a> {
    fn new(registry: &'a UtilityRegistry) -> Self {
        Self {
            registry,
            diagnostics: Diagnostics::new(),
        }
    }

    fn run(&mut self, stylesheet: &mut Stylesheet) {
        let hoisted = self.expand_container(&mut stylesheet.nodes, None);
        // Top level has no enclosing rule, so nothing legitimate hoists out
        // of it; directives that tried have already been warned about.
        debug_assert!(hoisted.siblings.is_empty());
    }

    /// Expands one child list. `enclosing` is the innermost enclosing rule,
    /// passed through conditional at-rule blocks unchanged.
    fn expand_container(
        &mut self,
        nodes: &mut Vec<Node>,
        enclosing: Option<&EnclosingRule>,
    ) -> Hoisted {
        let mut hoisted = Hoisted::default();
        let mut i = 0;
        while i < nodes.len() {
            match &nodes[i] {
                Node::AtRule(at) if at.name == DIRECTIVE_NAME => {
                    let Node::AtRule(directive) = nodes.remove(i) else {
                        unreachable!("node kind checked above");
                    };
                    let inserted =
                        self.expand_directive(directive, nodes, i, enclosing, &mut hoisted);
                    i += inserted;
                }
                Node::Rule(_) => {
                    i += self.expand_rule_at(nodes, i);
                }
                Node::AtRule(at) if at.nodes.is_some() => {
                    i += self.expand_at_block_at(nodes, i, enclosing, &mut hoisted);
                }
                _ => i += 1,
            }
        }
        hoisted
    }

    /// Expands a child rule at `index`, then applies what its body hoisted:
    /// sibling rules insert right after it, a media wrap replaces it, and a
    /// rule emptied by expansion is dropped. Returns how many nodes of the
    /// parent list were consumed.
    fn expand_rule_at(&mut self, nodes: &mut Vec<Node>, index: usize) -> usize {
        let child = {
            let Node::Rule(rule) = &mut nodes[index] else {
                unreachable!("node kind checked by caller");
            };
            let info = EnclosingRule {
                selector: rule.selector.clone(),
                between: rule.between.clone(),
            };
            self.expand_container(&mut rule.nodes, Some(&info))
        };

        let mut next = index + 1;

        // A pending media wrap keeps the rule alive even with an empty body:
        // hd moves the enclosing rule into the query regardless of content.
        let emptied = child.touched
            && child.media.is_none()
            && matches!(&nodes[index], Node::Rule(rule) if rule.nodes.is_empty());
        if emptied {
            let Node::Rule(removed) = nodes.remove(index) else {
                unreachable!("node kind checked above");
            };
            next = index;
            // The first hoisted sibling takes over the removed rule's
            // leading trivia so the document does not start mid-line.
            let mut siblings = child.siblings;
            if let Some(first) = siblings.first_mut() {
                set_before(first, removed.before);
            }
            for sibling in siblings {
                nodes.insert(next, sibling);
                next += 1;
            }
            return next - index;
        }

        if let Some(params) = child.media {
            let rule_node = nodes.remove(index);
            nodes.insert(index, wrap_in_media(rule_node, params));
        }

        for sibling in child.siblings {
            nodes.insert(next, sibling);
            next += 1;
        }
        next - index
    }

    /// Recurses into a non-directive at-rule block (`@media`, `@supports`,
    /// ...), passing the enclosing rule through. Hoisted content bubbles up
    /// to the nearest rule boundary.
    fn expand_at_block_at(
        &mut self,
        nodes: &mut Vec<Node>,
        index: usize,
        enclosing: Option<&EnclosingRule>,
        hoisted: &mut Hoisted,
    ) -> usize {
        let child = {
            let Node::AtRule(at) = &mut nodes[index] else {
                unreachable!("node kind checked by caller");
            };
            let children = at.nodes.as_mut().expect("block presence checked by caller");
            self.expand_container(children, enclosing)
        };

        let emptied = child.touched
            && matches!(&nodes[index], Node::AtRule(at) if at.nodes.as_ref().is_some_and(Vec::is_empty));
        if emptied {
            nodes.remove(index);
        }

        // Sibling rules and media wraps generated inside a conditional
        // block belong to the enclosing rule, so they keep bubbling.
        hoisted.siblings.extend(child.siblings);
        if child.media.is_some() {
            hoisted.media = child.media;
        }
        hoisted.touched |= child.touched;

        usize::from(!emptied)
    }

    /// Expands a single directive that sat at `index` (already detached).
    /// Declarations are inserted back at `index`; rules and media wraps go
    /// into `hoisted`. Returns the number of nodes inserted at `index`.
    fn expand_directive(
        &mut self,
        directive: AtRule,
        nodes: &mut Vec<Node>,
        index: usize,
        enclosing: Option<&EnclosingRule>,
        hoisted: &mut Hoisted,
    ) -> usize {
        let span = directive.span;

        if directive.nodes.is_some() {
            self.diagnostics.warn(
                WarningKind::InvalidArgument,
                "'@util' does not take a block",
                span,
            );
            return 0;
        }

        let (name, raw_args) = split_directive(&directive.params);
        if name.is_empty() {
            self.diagnostics.warn(
                WarningKind::InvalidArgument,
                "'@util' is missing a utility name",
                span,
            );
            return 0;
        }

        let Some(enclosing) = enclosing else {
            self.diagnostics.warn(
                WarningKind::InvalidArgument,
                format!("utility '{}' used outside of a rule", name),
                span,
            );
            return 0;
        };

        let Some(spec) = self.registry.resolve(name) else {
            self.diagnostics.warn(
                WarningKind::UnknownUtility,
                format!("unknown utility '{}'", name),
                span,
            );
            return 0;
        };

        let parsed = args::parse(raw_args);
        if !spec.accepts_arity(parsed.len()) {
            self.diagnostics.warn(
                WarningKind::ArityMismatch,
                format!(
                    "utility '{}' expects {} arguments, got {}",
                    name,
                    arity_range(spec.min_arity, spec.max_arity),
                    parsed.len()
                ),
                span,
            );
            return 0;
        }

        let ctx = GenerateCtx {
            args: &parsed,
            parent_selector: &enclosing.selector,
        };
        let output = match crate::utilities::generate(spec.kind, ctx) {
            Ok(output) => output,
            Err(usage) => {
                self.diagnostics.warn(usage.kind, usage.message, span);
                return 0;
            }
        };

        // A failed directive leaves only a warning behind; successful
        // expansion marks the container so that a rule emptied in favor of
        // generated siblings (clearfix) can be dropped.
        hoisted.touched = true;

        let mut inserted = 0;
        for node in output {
            match node {
                OutputNode::Declaration { prop, value } => {
                    let mut decl = Declaration::synthesized(prop, value);
                    decl.before = directive.before.clone();
                    nodes.insert(index + inserted, Node::Declaration(decl));
                    inserted += 1;
                }
                OutputNode::Rule { selector, decls } => {
                    let children = decls
                        .into_iter()
                        .map(|(prop, value)| {
                            Node::Declaration(Declaration::synthesized(prop, value))
                        })
                        .collect();
                    hoisted.siblings.push(Node::Rule(syntax::Rule::synthesized(
                        selector,
                        children,
                        &enclosing.between,
                    )));
                }
                OutputNode::MediaWrap { params } => {
                    hoisted.media = Some(params);
                }
            }
        }
        inserted
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Splits directive parameter text into the utility name and its raw
/// argument text: `truncate (3, 1.5)` → (`truncate`, ` (3, 1.5)`).
fn split_directive(params: &str) -> (&str, &str) {
    match params.find(|c: char| c == '(' || c.is_ascii_whitespace()) {
        Some(i) => (&params[..i], &params[i..]),
        None => (params, ""),
    }
}

fn arity_range(min: usize, max: usize) -> String {
    if min == max {
        format!("{}", min)
    } else {
        format!("{} to {}", min, max)
    }
}

fn set_before(node: &mut Node, before: String) {
    match node {
        Node::Rule(rule) => rule.before = before,
        Node::AtRule(at) => at.before = before,
        Node::Declaration(decl) => decl.before = before,
    }
}

/// Wraps a rule in an `@media` at-rule, taking over the rule's position and
/// leading trivia.
fn wrap_in_media(node: Node, params: String) -> Node {
    let (before, between) = match &node {
        Node::Rule(rule) => (rule.before.clone(), rule.between.clone()),
        _ => ("\n".to_string(), String::new()),
    };
    let mut inner = node;
    set_before(&mut inner, " ".to_string());
    Node::AtRule(AtRule {
        name: "media".to_string(),
        params,
        nodes: Some(vec![inner]),
        span: Span::default(),
        before,
        after_name: " ".to_string(),
        between,
        after: " ".to_string(),
        semicolon: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_source(css: &str) -> ExpandOutput {
        expand_str(css, "test.css", &Options::default()).expect("stylesheet should parse")
    }

    #[test]
    fn splices_between_existing_declarations() {
        let out = expand_source("a{ top: 0; @util size(4px); bottom: 0; }");
        assert_eq!(
            out.css,
            "a{ top: 0; width: 4px; height: 4px; bottom: 0; }"
        );
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn unknown_utility_is_dropped_with_a_warning() {
        let out = expand_source("a{ color: red; @util shimmer; }");
        assert_eq!(out.css, "a{ color: red; }");
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].kind, WarningKind::UnknownUtility);
    }

    #[test]
    fn directive_outside_a_rule_warns() {
        let out = expand_source("@util truncate;\na{ color: red; }");
        assert_eq!(out.css, "\na{ color: red; }");
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].kind, WarningKind::InvalidArgument);
    }

    #[test]
    fn directive_split_tolerates_all_syntaxes() {
        assert_eq!(split_directive("truncate"), ("truncate", ""));
        assert_eq!(split_directive("truncate(3 1.5)"), ("truncate", "(3 1.5)"));
        assert_eq!(
            split_directive("truncate (3, 1.5)"),
            ("truncate", " (3, 1.5)")
        );
        assert_eq!(split_directive("truncate 3 1.5"), ("truncate", " 3 1.5"));
    }
}
