//! End-to-end expansion tests: CSS source in, expanded CSS out.
//!
//! Each test drives the full pipeline (parse, expand, print) and asserts on
//! the exact output text, the way a stylesheet author would see it.

use weft::expand::{expand_str, ExpandOutput, Options};

fn run(input: &str) -> String {
    let ExpandOutput { css, warnings } =
        expand_str(input, "test.css", &Options::default()).expect("stylesheet should parse");
    assert!(
        warnings.is_empty(),
        "expected no warnings, got: {:?}",
        warnings
    );
    css
}

// ============================================================================
// TRUNCATE
// ============================================================================

#[test]
fn truncate_multiline() {
    assert_eq!(
        run("a{ @util truncate (3, 1.5); }"),
        "a{ display: block; display: -webkit-box; height: 4.5em; line-height: 1.5; \
         -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; \
         text-overflow: ellipsis; }"
    );
}

#[test]
fn truncate_multiline_no_space_before_parens() {
    assert_eq!(
        run("a{ @util truncate(3, 1.5); }"),
        "a{ display: block; display: -webkit-box; height: 4.5em; line-height: 1.5; \
         -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; \
         text-overflow: ellipsis; }"
    );
}

#[test]
fn truncate_multiline_space_separated() {
    assert_eq!(
        run("a{ @util truncate(3 1.5); }"),
        "a{ display: block; display: -webkit-box; height: 4.5em; line-height: 1.5; \
         -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden; \
         text-overflow: ellipsis; }"
    );
}

#[test]
fn truncate_argument_syntax_variants_are_byte_identical() {
    let a = run("a{ @util truncate(3, 1.5); }");
    let b = run("a{ @util truncate(3,1.5); }");
    let c = run("a{ @util truncate(3 1.5); }");
    let d = run("a{ @util truncate 3 1.5; }");
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
}

#[test]
fn truncate_single_line() {
    assert_eq!(
        run("a{ @util truncate; }"),
        "a{ white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }"
    );
}

// ============================================================================
// FIXED FRAGMENTS
// ============================================================================

#[test]
fn reset_list() {
    assert_eq!(
        run("ul{ @util reset-list; }"),
        "ul{ margin-top: 0; margin-bottom: 0; padding-left: 0; }\n\
         ul li{ list-style: none; }"
    );
}

#[test]
fn hide_visually() {
    assert_eq!(
        run("a{ @util hide-visually; }"),
        "a{ border: 0; clip: rect(0 0 0 0); height: 1px; margin: -1px; \
         overflow: hidden; padding: 0; position: absolute; width: 1px; }"
    );
}

#[test]
fn text_hide_appends_after_existing_declarations() {
    assert_eq!(
        run("a{ background: #000; color: #fff; @util text-hide; }"),
        "a{ background: #000; color: #fff; font: 0/0 a; color: transparent; \
         text-shadow: none; background-color: transparent; border: 0; }"
    );
}

#[test]
fn word_wrap_default() {
    assert_eq!(
        run("p{ @util word-wrap; }"),
        "p{ overflow-wrap: break-word; word-wrap: break-word; word-break: break-all; }"
    );
}

#[test]
fn word_wrap_explicit_mode() {
    assert_eq!(
        run("p{ @util word-wrap(normal); }"),
        "p{ overflow-wrap: normal; word-wrap: normal; word-break: normal; }"
    );
}

#[test]
fn reset_text_keeps_duplicate_text_align_fallback() {
    let css = run(".tooltip{ @util reset-text; }");
    let first = css.find("text-align: left;").expect("physical value first");
    let second = css.find("text-align: start;").expect("logical value second");
    assert!(first < second);
}

// ============================================================================
// CLEARFIX
// ============================================================================

#[test]
fn clearfix_replaces_an_otherwise_empty_rule() {
    assert_eq!(
        run("a{ @util clearfix; }"),
        "a:after{ content: ''; display: block; clear: both; }"
    );
}

#[test]
fn clearfix_keeps_a_rule_with_other_declarations() {
    assert_eq!(
        run("a{ color: red; @util clearfix; }"),
        "a{ color: red; }\na:after{ content: ''; display: block; clear: both; }"
    );
}

#[test]
fn clearfix_ie8_adds_the_zoom_trigger() {
    assert_eq!(
        run(".box{ @util clearfix(ie8); }"),
        ".box{ zoom: 1; }\n.box:after{ content: ''; display: block; clear: both; }"
    );
}

// ============================================================================
// TRIANGLE
// ============================================================================

#[test]
fn triangle_up() {
    assert_eq!(
        run(".tip{ @util triangle(up, 10px, #000); }"),
        ".tip{ width: 0; height: 0; border-style: solid; \
         border-width: 0 10px 10px 10px; \
         border-color: transparent transparent #000 transparent; }"
    );
}

#[test]
fn triangle_left_with_background() {
    assert_eq!(
        run(".tip{ @util triangle(left, 8px, red, white); }"),
        ".tip{ width: 0; height: 0; border-style: solid; \
         border-width: 8px 8px 8px 0; \
         border-color: white red white white; }"
    );
}

// ============================================================================
// SIZE / STICKY FOOTER / TEXT STROKE
// ============================================================================

#[test]
fn size_with_both_dimensions() {
    assert_eq!(
        run("img{ @util size(100px, 50px); }"),
        "img{ width: 100px; height: 50px; }"
    );
}

#[test]
fn size_height_defaults_to_width() {
    assert_eq!(run("img{ @util size(64px); }"), "img{ width: 64px; height: 64px; }");
}

#[test]
fn sticky_footer() {
    assert_eq!(
        run(".page{ @util sticky-footer(72px); }"),
        ".page{ min-height: 100%; margin-bottom: -72px; }\n\
         .page:after{ content: ''; display: block; height: 72px; }"
    );
}

#[test]
fn text_stroke() {
    assert_eq!(
        run("h1{ @util text-stroke(1px, #fff); }"),
        "h1{ -webkit-text-stroke: 1px #fff; text-stroke: 1px #fff; }"
    );
}

// ============================================================================
// SHORTHAND EXPANSION
// ============================================================================

#[test]
fn padding_two_values() {
    assert_eq!(
        run("a{ @util padding(10px, 5px); }"),
        "a{ padding-top: 10px; padding-right: 5px; padding-bottom: 10px; padding-left: 5px; }"
    );
}

#[test]
fn margin_three_values() {
    assert_eq!(
        run("a{ @util margin(1px 2px 3px); }"),
        "a{ margin-top: 1px; margin-right: 2px; margin-bottom: 3px; margin-left: 2px; }"
    );
}

#[test]
fn border_color_single_value() {
    assert_eq!(
        run("a{ @util border-color(red); }"),
        "a{ border-top-color: red; border-right-color: red; \
         border-bottom-color: red; border-left-color: red; }"
    );
}

#[test]
fn border_style_four_values() {
    assert_eq!(
        run("a{ @util border-style(solid, dashed, dotted, none); }"),
        "a{ border-top-style: solid; border-right-style: dashed; \
         border-bottom-style: dotted; border-left-style: none; }"
    );
}

#[test]
fn border_width_two_values() {
    assert_eq!(
        run("a{ @util border-width(1px 2px); }"),
        "a{ border-top-width: 1px; border-right-width: 2px; \
         border-bottom-width: 1px; border-left-width: 2px; }"
    );
}

#[test]
fn border_radius_corners() {
    assert_eq!(
        run("a{ @util border-radius(1px, 2px, 3px); }"),
        "a{ border-top-left-radius: 1px; border-top-right-radius: 2px; \
         border-bottom-right-radius: 3px; border-bottom-left-radius: 2px; }"
    );
}

#[test]
fn position_emits_offsets_only() {
    let css = run("a{ @util position(0, auto); }");
    assert_eq!(css, "a{ top: 0; right: auto; bottom: 0; left: auto; }");
    assert!(!css.contains("position:"));
}

// ============================================================================
// HD BREAKPOINT
// ============================================================================

#[test]
fn hd_wraps_the_enclosing_rule() {
    assert_eq!(
        run("a{ color: #000; @util hd; }"),
        "@media (-webkit-min-device-pixel-ratio: 2), (min-resolution: 192dpi){ \
         a{ color: #000; } }"
    );
}

#[test]
fn hd_wraps_a_rule_that_contains_only_the_directive() {
    assert_eq!(
        run("a{ @util hd; }"),
        "@media (-webkit-min-device-pixel-ratio: 2), (min-resolution: 192dpi){ a{ } }"
    );
}

#[test]
fn hd_accepts_an_explicit_resolution() {
    assert_eq!(
        run("a{ color: #000; @util hd(120dpi); }"),
        "@media (-webkit-min-device-pixel-ratio: 2), (min-resolution: 120dpi){ \
         a{ color: #000; } }"
    );
}

// ============================================================================
// VAR() PASS-THROUGH
// ============================================================================

#[test]
fn var_references_flow_into_values() {
    assert_eq!(
        run("footer{ @util size(var(--w), var(--h)); }"),
        "footer{ width: var(--w); height: var(--h); }"
    );
}

#[test]
fn sticky_footer_negates_var_through_calc() {
    assert_eq!(
        run(".page{ @util sticky-footer(var(--fh)); }"),
        ".page{ min-height: 100%; margin-bottom: calc(var(--fh) * -1); }\n\
         .page:after{ content: ''; display: block; height: var(--fh); }"
    );
}

// ============================================================================
// NESTING AND DOCUMENT ORDER
// ============================================================================

#[test]
fn nested_rule_uses_innermost_selector() {
    assert_eq!(
        run(".card{ .media{ @util clearfix; } }"),
        ".card{ .media:after{ content: ''; display: block; clear: both; } }"
    );
}

#[test]
fn nested_rule_declaration_expansion() {
    assert_eq!(
        run(".card{ .title{ @util truncate; } }"),
        ".card{ .title{ white-space: nowrap; overflow: hidden; text-overflow: ellipsis; } }"
    );
}

#[test]
fn expansion_preserves_surrounding_declarations() {
    assert_eq!(
        run("a{ top: 0; @util size(4px); bottom: 0; }"),
        "a{ top: 0; width: 4px; height: 4px; bottom: 0; }"
    );
}

#[test]
fn multiple_directives_expand_in_document_order() {
    assert_eq!(
        run("ul{ @util reset-list; @util size(10px); }"),
        "ul{ margin-top: 0; margin-bottom: 0; padding-left: 0; width: 10px; height: 10px; }\n\
         ul li{ list-style: none; }"
    );
}

#[test]
fn untouched_css_round_trips_unchanged() {
    let css = "/* banner */\na {\n    color: red;\n}\n\n@media print {\n    b { top: 0; }\n}\n";
    assert_eq!(run(css), css);
}

#[test]
fn combined_document() {
    let input = "\
ul{ @util reset-list; }
p{ @util word-wrap; }
img{ @util size(32px); }";
    let expected = "\
ul{ margin-top: 0; margin-bottom: 0; padding-left: 0; }
ul li{ list-style: none; }
p{ overflow-wrap: break-word; word-wrap: break-word; word-break: break-all; }
img{ width: 32px; height: 32px; }";
    assert_eq!(run(input), expected);
}
