//! The standard utility generators.
//!
//! One pure function per utility: parsed arguments plus the enclosing rule's
//! selector in, an ordered sequence of output nodes (or a usage error) out.
//! Generators never mutate the tree and never abort the run; argument
//! problems come back as [`UsageError`] values for the engine to report.

use crate::args::Arg;
use crate::diagnostics::WarningKind;
use crate::utilities::{GenerateCtx, GenerationResult, OutputNode, UsageError, UtilityKind};

/// Dispatches to the generator for `kind`.
pub fn generate(kind: UtilityKind, ctx: GenerateCtx<'_>) -> GenerationResult {
    match kind {
        UtilityKind::Truncate => truncate(ctx.args),
        UtilityKind::ResetList => reset_list(ctx.parent_selector),
        UtilityKind::HideVisually => hide_visually(),
        UtilityKind::Clearfix => clearfix(ctx.args, ctx.parent_selector),
        UtilityKind::TextHide => text_hide(),
        UtilityKind::Triangle => triangle(ctx.args),
        UtilityKind::Size => size(ctx.args),
        UtilityKind::WordWrap => word_wrap(ctx.args),
        UtilityKind::StickyFooter => sticky_footer(ctx.args, ctx.parent_selector),
        UtilityKind::ResetText => reset_text(),
        UtilityKind::BorderColor => side_expansion(ctx.args, "border-top-color", "border-right-color", "border-bottom-color", "border-left-color"),
        UtilityKind::BorderStyle => side_expansion(ctx.args, "border-top-style", "border-right-style", "border-bottom-style", "border-left-style"),
        UtilityKind::BorderWidth => side_expansion(ctx.args, "border-top-width", "border-right-width", "border-bottom-width", "border-left-width"),
        UtilityKind::Padding => side_expansion(ctx.args, "padding-top", "padding-right", "padding-bottom", "padding-left"),
        UtilityKind::Margin => side_expansion(ctx.args, "margin-top", "margin-right", "margin-bottom", "margin-left"),
        UtilityKind::BorderRadius => side_expansion(ctx.args, "border-top-left-radius", "border-top-right-radius", "border-bottom-right-radius", "border-bottom-left-radius"),
        UtilityKind::Position => side_expansion(ctx.args, "top", "right", "bottom", "left"),
        UtilityKind::TextStroke => text_stroke(ctx.args),
        UtilityKind::Hd => hd_breakpoint(ctx.args),
    }
}

// ============================================================================
// TEXT UTILITIES
// ============================================================================

/// `truncate` — single-line ellipsis truncation with no arguments, or a
/// multi-line `-webkit-line-clamp` fragment with `(max-lines, line-height)`.
fn truncate(args: &[Arg]) -> GenerationResult {
    match args {
        [] => Ok(vec![
            OutputNode::decl("white-space", "nowrap"),
            OutputNode::decl("overflow", "hidden"),
            OutputNode::decl("text-overflow", "ellipsis"),
        ]),
        [max_lines, line_height] => {
            let lines = max_lines
                .number()
                .filter(|n| *n > 0.0 && n.fract() == 0.0)
                .ok_or_else(|| {
                    UsageError::invalid(format!(
                        "truncate expects a positive integer line count, got '{}'",
                        max_lines.text()
                    ))
                })?;
            let height = line_height.number().filter(|n| *n > 0.0).ok_or_else(|| {
                UsageError::invalid(format!(
                    "truncate expects a positive line height, got '{}'",
                    line_height.text()
                ))
            })?;

            // The duplicated `display` is a browser-capability fallback
            // chain: older engines stop at `block`, capable ones honor
            // `-webkit-box`. It must never be deduplicated.
            Ok(vec![
                OutputNode::decl("display", "block"),
                OutputNode::decl("display", "-webkit-box"),
                OutputNode::decl("height", format!("{}em", lines * height)),
                OutputNode::decl("line-height", line_height.text()),
                OutputNode::decl("-webkit-line-clamp", max_lines.text()),
                OutputNode::decl("-webkit-box-orient", "vertical"),
                OutputNode::decl("overflow", "hidden"),
                OutputNode::decl("text-overflow", "ellipsis"),
            ])
        }
        _ => Err(UsageError {
            kind: WarningKind::ArityMismatch,
            message: format!("truncate expects zero or two arguments, got {}", args.len()),
        }),
    }
}

/// `text-hide` — the image-replacement idiom.
fn text_hide() -> GenerationResult {
    Ok(vec![
        OutputNode::decl("font", "0/0 a"),
        OutputNode::decl("color", "transparent"),
        OutputNode::decl("text-shadow", "none"),
        OutputNode::decl("background-color", "transparent"),
        OutputNode::decl("border", "0"),
    ])
}

/// `word-wrap` — the cross-browser wrap property set. Takes an optional wrap
/// mode, defaulting to `break-word`.
fn word_wrap(args: &[Arg]) -> GenerationResult {
    let mode = args.first().map(Arg::text).unwrap_or("break-word");
    let word_break = if mode == "break-word" { "break-all" } else { mode };
    Ok(vec![
        OutputNode::decl("overflow-wrap", mode),
        OutputNode::decl("word-wrap", mode),
        OutputNode::decl("word-break", word_break),
    ])
}

/// `reset-text` — neutralizes inherited text styling, for tooltip/popover
/// style components. The duplicated `text-align` is the same progressive
/// fallback pattern as truncate's `display` pair.
fn reset_text() -> GenerationResult {
    Ok(vec![
        OutputNode::decl("font-family", "sans-serif"),
        OutputNode::decl("font-style", "normal"),
        OutputNode::decl("font-weight", "normal"),
        OutputNode::decl("letter-spacing", "normal"),
        OutputNode::decl("line-break", "auto"),
        OutputNode::decl("line-height", "1.5"),
        OutputNode::decl("text-align", "left"),
        OutputNode::decl("text-align", "start"),
        OutputNode::decl("text-decoration", "none"),
        OutputNode::decl("text-shadow", "none"),
        OutputNode::decl("text-transform", "none"),
        OutputNode::decl("white-space", "normal"),
        OutputNode::decl("word-break", "normal"),
        OutputNode::decl("word-spacing", "normal"),
        OutputNode::decl("word-wrap", "normal"),
    ])
}

/// `text-stroke(width, color)` — the stroke declaration pair.
fn text_stroke(args: &[Arg]) -> GenerationResult {
    let value = format!("{} {}", args[0].text(), args[1].text());
    Ok(vec![
        OutputNode::decl("-webkit-text-stroke", value.clone()),
        OutputNode::decl("text-stroke", value),
    ])
}

// ============================================================================
// LAYOUT UTILITIES
// ============================================================================

/// `reset-list` — zeroes list chrome on the current rule and drops the
/// markers of descendant `li` elements via a sibling rule.
fn reset_list(parent_selector: &str) -> GenerationResult {
    Ok(vec![
        OutputNode::decl("margin-top", "0"),
        OutputNode::decl("margin-bottom", "0"),
        OutputNode::decl("padding-left", "0"),
        OutputNode::Rule {
            selector: format!("{} li", parent_selector),
            decls: vec![("list-style".to_string(), "none".to_string())],
        },
    ])
}

/// `hide-visually` — hides content visually while keeping it available to
/// assistive technology.
fn hide_visually() -> GenerationResult {
    Ok(vec![
        OutputNode::decl("border", "0"),
        OutputNode::decl("clip", "rect(0 0 0 0)"),
        OutputNode::decl("height", "1px"),
        OutputNode::decl("margin", "-1px"),
        OutputNode::decl("overflow", "hidden"),
        OutputNode::decl("padding", "0"),
        OutputNode::decl("position", "absolute"),
        OutputNode::decl("width", "1px"),
    ])
}

/// `clearfix` — generates the `:after` clearing rule. The `ie8` variant also
/// leaves a legacy `zoom` trigger on the original rule.
fn clearfix(args: &[Arg], parent_selector: &str) -> GenerationResult {
    let mut out = Vec::new();
    if let Some(variant) = args.first() {
        if variant.text() != "ie8" {
            return Err(UsageError::invalid(format!(
                "clearfix accepts only the 'ie8' variant, got '{}'",
                variant.text()
            )));
        }
        out.push(OutputNode::decl("zoom", "1"));
    }
    out.push(OutputNode::Rule {
        selector: format!("{}:after", parent_selector),
        decls: vec![
            ("content".to_string(), "''".to_string()),
            ("display".to_string(), "block".to_string()),
            ("clear".to_string(), "both".to_string()),
        ],
    });
    Ok(out)
}

/// `size(width, height?)` — height defaults to width.
fn size(args: &[Arg]) -> GenerationResult {
    let width = args[0].text();
    let height = args.get(1).map(Arg::text).unwrap_or(width);
    Ok(vec![
        OutputNode::decl("width", width),
        OutputNode::decl("height", height),
    ])
}

/// `sticky-footer(footer-height)` — the negative-offset wrapper pattern plus
/// an `:after` spacer rule.
fn sticky_footer(args: &[Arg], parent_selector: &str) -> GenerationResult {
    let height = args[0].text();
    Ok(vec![
        OutputNode::decl("min-height", "100%"),
        OutputNode::decl("margin-bottom", negate(height)),
        OutputNode::Rule {
            selector: format!("{}:after", parent_selector),
            decls: vec![
                ("content".to_string(), "''".to_string()),
                ("display".to_string(), "block".to_string()),
                ("height".to_string(), height.to_string()),
            ],
        },
    ])
}

/// `triangle(direction, size, color[, background])` — the border triangle.
/// The border opposite the pointing direction carries the color; the others
/// stay transparent (or the explicit background color).
fn triangle(args: &[Arg]) -> GenerationResult {
    let direction = args[0].text();
    let size = args[1].text();
    let color = color_text(&args[2], "triangle")?;
    let background = match args.get(3) {
        Some(arg) => color_text(arg, "triangle")?,
        None => "transparent",
    };

    let (widths, colors) = match direction {
        "up" => (
            ["0", size, size, size],
            [background, background, color, background],
        ),
        "down" => (
            [size, size, "0", size],
            [color, background, background, background],
        ),
        "right" => (
            [size, "0", size, size],
            [background, background, background, color],
        ),
        "left" => (
            [size, size, size, "0"],
            [background, color, background, background],
        ),
        other => {
            return Err(UsageError::invalid(format!(
                "unknown triangle direction '{}', expected up, down, left, or right",
                other
            )))
        }
    };

    Ok(vec![
        OutputNode::decl("width", "0"),
        OutputNode::decl("height", "0"),
        OutputNode::decl("border-style", "solid"),
        OutputNode::decl("border-width", widths.join(" ")),
        OutputNode::decl("border-color", colors.join(" ")),
    ])
}

/// `hd(resolution?)` — wraps the enclosing rule in a high-resolution media
/// query. The resolution defaults to `192dpi`.
fn hd_breakpoint(args: &[Arg]) -> GenerationResult {
    let resolution = args.first().map(Arg::text).unwrap_or("192dpi");
    Ok(vec![OutputNode::MediaWrap {
        params: format!(
            "(-webkit-min-device-pixel-ratio: 2), (min-resolution: {})",
            resolution
        ),
    }])
}

// ============================================================================
// SHORTHAND EXPANSION
// ============================================================================

/// Expands 1/2/3/4 values into per-side (or per-corner) declarations under
/// the standard CSS shorthand rule: 1 value covers everything, 2 splits
/// vertical/horizontal, 3 splits top/horizontal/bottom, 4 is explicit.
fn side_expansion(
    args: &[Arg],
    top: &str,
    right: &str,
    bottom: &str,
    left: &str,
) -> GenerationResult {
    let (t, r, b, l) = match args {
        [a] => (a.text(), a.text(), a.text(), a.text()),
        [a, b] => (a.text(), b.text(), a.text(), b.text()),
        [a, b, c] => (a.text(), b.text(), c.text(), b.text()),
        [a, b, c, d] => (a.text(), b.text(), c.text(), d.text()),
        // Arity is checked by the registry before dispatch.
        _ => unreachable!("side expansion called with invalid arity"),
    };
    Ok(vec![
        OutputNode::decl(top, t),
        OutputNode::decl(right, r),
        OutputNode::decl(bottom, b),
        OutputNode::decl(left, l),
    ])
}

// ============================================================================
// HELPERS
// ============================================================================

/// Accepts a color argument: a lexical color, or a `var(...)` reference that
/// resolves to one at runtime.
fn color_text<'a>(arg: &'a Arg, utility: &str) -> Result<&'a str, UsageError> {
    if arg.is_color() || arg.text().starts_with("var(") {
        Ok(arg.text())
    } else {
        Err(UsageError::invalid(format!(
            "{} expects a color, got '{}'",
            utility,
            arg.text()
        )))
    }
}

/// Negates a dimension textually: `30px` becomes `-30px`, `-30px` becomes
/// `30px`. `var(...)` references cannot be sign-flipped in place, so they
/// negate through `calc()`.
fn negate(text: &str) -> String {
    if text.starts_with("var(") {
        return format!("calc({} * -1)", text);
    }
    match text.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{}", text),
    }
}
