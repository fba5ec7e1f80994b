//! Diagnostics-channel tests: malformed directives degrade to warnings and
//! never disturb the valid parts of a document.

use weft::expand::{expand_str, ExpandOutput, Options};
use weft::WarningKind;

fn run(input: &str) -> ExpandOutput {
    expand_str(input, "test.css", &Options::default()).expect("stylesheet should parse")
}

#[test]
fn two_malformed_directives_yield_exactly_two_warnings() {
    let out = run("a{ @util shimmer; }\nb{ @util truncate(3); }\nc{ @util size(10px); }");
    assert_eq!(out.warnings.len(), 2);
    assert_eq!(out.warnings[0].kind, WarningKind::UnknownUtility);
    assert_eq!(out.warnings[1].kind, WarningKind::ArityMismatch);
    // The valid directive in the same document still expands.
    assert!(out.css.contains("c{ width: 10px; height: 10px; }"));
}

#[test]
fn unknown_utility_names_the_offender() {
    let out = run("a{ @util shimmer; }");
    assert_eq!(out.warnings[0].message, "unknown utility 'shimmer'");
    assert_eq!(out.css, "a{ }");
}

#[test]
fn lookup_is_case_sensitive() {
    let out = run("a{ @util Truncate; }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::UnknownUtility);
}

#[test]
fn out_of_range_arity_skips_expansion() {
    let out = run("a{ color: red; @util triangle(up, 10px); }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::ArityMismatch);
    assert_eq!(out.css, "a{ color: red; }");
}

#[test]
fn invalid_triangle_direction_warns() {
    let out = run("a{ @util triangle(sideways, 10px, #000); }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::InvalidArgument);
}

#[test]
fn invalid_triangle_color_warns() {
    let out = run("a{ @util triangle(up, 10px, pretty); }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::InvalidArgument);
}

#[test]
fn clearfix_rejects_unknown_variant() {
    let out = run("a{ @util clearfix(ie5); }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::InvalidArgument);
    assert_eq!(out.css, "a{ }");
}

#[test]
fn directive_outside_a_rule_warns_and_is_removed() {
    let out = run("@util clearfix;\na{ color: red; }");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].kind, WarningKind::InvalidArgument);
    assert_eq!(out.css, "\na{ color: red; }");
}

#[test]
fn warnings_carry_the_directive_span() {
    let source = "a{ @util shimmer; }";
    let out = run(source);
    let span = out.warnings[0].span;
    assert_eq!(&source[span.start..span.end], "@util shimmer;");
}

#[test]
fn earlier_expansions_survive_a_later_failure() {
    let out = run("a{ @util truncate; }\nb{ @util shimmer; }");
    assert_eq!(out.warnings.len(), 1);
    assert!(out
        .css
        .starts_with("a{ white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }"));
}
