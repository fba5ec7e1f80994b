//! Directive argument parser.
//!
//! Tokenizes the raw parameter text of a `@util` directive into an ordered
//! sequence of scalar arguments. The directive grammar is deliberately loose:
//! `truncate(3, 1.5)`, `truncate(3 1.5)`, and `truncate 3 1.5` all tokenize
//! identically. Classification here is purely lexical; whether an argument
//! makes sense for a given utility is the generator's business.

use serde::Serialize;

/// A single parsed directive argument.
///
/// Every variant keeps the verbatim source text so generators can echo
/// tokens (including `var(...)` references) straight into declaration values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Arg {
    /// A bare number, e.g. `3` or `1.5`.
    Number { value: f64, text: String },
    /// A number with a unit, e.g. `20px` or `1.5em` or `192dpi`.
    Dimension {
        value: f64,
        unit: String,
        text: String,
    },
    /// A recognized color token: hex, color function, or named color.
    Color { text: String },
    /// Anything else, e.g. `up`, `ie8`, `break-word`, `var(--w)`.
    Keyword { text: String },
}

impl Arg {
    /// The argument's verbatim source text.
    pub fn text(&self) -> &str {
        match self {
            Arg::Number { text, .. }
            | Arg::Dimension { text, .. }
            | Arg::Color { text }
            | Arg::Keyword { text } => text,
        }
    }

    /// The numeric value, for `Number` and `Dimension` arguments.
    pub fn number(&self) -> Option<f64> {
        match self {
            Arg::Number { value, .. } | Arg::Dimension { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Arg::Color { .. })
    }
}

/// Parses raw directive parameter text into arguments.
///
/// Strips one optional enclosing parenthesis pair, then splits on top-level
/// commas if any are present, otherwise on runs of whitespace. Empty input
/// yields an empty sequence.
pub fn parse(raw: &str) -> Vec<Arg> {
    let inner = strip_enclosing_parens(raw.trim());
    if inner.is_empty() {
        return Vec::new();
    }

    let splitter = if has_top_level_comma(inner) {
        split_top_level(inner, |c| c == ',')
    } else {
        split_top_level(inner, |c| c.is_ascii_whitespace())
    };

    splitter
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(classify)
        .collect()
}

// ============================================================================
// TOKENIZATION
// ============================================================================

/// Strips one pair of enclosing parentheses, but only when the opening paren
/// actually closes at the end (so `(a) (b)` is left alone).
fn strip_enclosing_parens(text: &str) -> &str {
    if !(text.starts_with('(') && text.ends_with(')')) {
        return text;
    }
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return if i == text.len() - 1 {
                        &text[1..text.len() - 1]
                    } else {
                        text
                    };
                }
            }
            _ => {}
        }
    }
    text
}

fn has_top_level_comma(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

/// Splits at top-level occurrences of the separator, leaving parenthesized
/// groups (e.g. `rgba(0, 0, 0, .5)`) intact.
fn split_top_level(text: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_sep(c) => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

const COLOR_FUNCTIONS: &[&str] = &["rgb(", "rgba(", "hsl(", "hsla("];

const NAMED_COLORS: &[&str] = &[
    "aqua", "black", "blue", "currentColor", "fuchsia", "gray", "green", "lime", "maroon",
    "navy", "olive", "orange", "purple", "red", "silver", "teal", "transparent", "white",
    "yellow",
];

fn classify(token: &str) -> Arg {
    if let Some((value, unit)) = split_numeric(token) {
        if unit.is_empty() {
            return Arg::Number {
                value,
                text: token.to_string(),
            };
        }
        if unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic()) {
            return Arg::Dimension {
                value,
                unit: unit.to_string(),
                text: token.to_string(),
            };
        }
    }

    if is_color(token) {
        return Arg::Color {
            text: token.to_string(),
        };
    }

    Arg::Keyword {
        text: token.to_string(),
    }
}

/// Splits a token into a leading numeric value and the remainder.
/// Returns `None` when the token has no numeric prefix.
fn split_numeric(token: &str) -> Option<(f64, &str)> {
    let bytes = token.as_bytes();
    let mut i = 0usize;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            i = j;
        }
    }
    if i == digits_start {
        return None;
    }
    let value = token[..i].parse::<f64>().ok()?;
    Some((value, &token[i..]))
}

fn is_color(token: &str) -> bool {
    if let Some(hex) = token.strip_prefix('#') {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if COLOR_FUNCTIONS.iter().any(|f| token.starts_with(f)) && token.ends_with(')') {
        return true;
    }
    NAMED_COLORS.contains(&token)
}
