//! Handles all user-facing output for the CLI.
//!
//! Centralizes warning rendering (colorized text or JSON) so every command
//! reports diagnostics the same way.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::Warning;
use crate::errors::SourceContext;

/// Prints warnings to stderr as `warning: <message>` lines with the source
/// location appended, colorized when stderr is a terminal.
pub fn print_warnings(warnings: &[Warning], ctx: &SourceContext) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    for warning in warnings {
        let (line, col) = line_col(&ctx.content, warning.span.start);

        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        let _ = stderr.set_color(&spec);
        let _ = write!(stderr, "warning");
        let _ = stderr.reset();
        let _ = writeln!(
            stderr,
            "[{}]: {} ({}:{}:{})",
            warning.kind.as_str(),
            warning.message,
            ctx.name,
            line,
            col
        );
    }
}

/// Serializes warnings as a JSON array on stdout.
pub fn print_warnings_json(warnings: &[Warning]) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(warnings)?;
    println!("{}", json);
    Ok(())
}

/// Converts a byte offset into a 1-based (line, column) pair.
fn line_col(content: &str, offset: usize) -> (usize, usize) {
    let clamped = offset.min(content.len());
    let prefix = &content[..clamped];
    let line = prefix.matches('\n').count() + 1;
    let col = clamped - prefix.rfind('\n').map(|p| p + 1).unwrap_or(0) + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_is_one_based() {
        let content = "a{\n  top: 0;\n}";
        assert_eq!(line_col(content, 0), (1, 1));
        assert_eq!(line_col(content, 3), (2, 1));
        assert_eq!(line_col(content, 5), (2, 3));
    }
}
