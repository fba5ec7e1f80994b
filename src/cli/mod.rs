//! The weft command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions: read the stylesheet, expand directives, report
//! warnings, print or write the result. Expansion warnings never change the
//! exit code; only a stylesheet that fails to parse (or an I/O failure) is
//! fatal.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;
use miette::Report;

use crate::cli::args::{Command, WeftArgs};
use crate::errors::{SourceContext, WeftError};
use crate::expand::{expand_str, ExpandOutput, Options};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let cli = WeftArgs::parse();

    let result = match cli.command {
        Command::Expand { file, output } => handle_expand(&file, output.as_deref()),
        Command::Check { file, json } => handle_check(&file, json),
    };

    if let Err(e) = result {
        eprintln!("{:?}", Report::new(e));
        process::exit(1);
    }
}

fn handle_expand(path: &Path, out_path: Option<&Path>) -> Result<(), WeftError> {
    let (ctx, result) = expand_file(path)?;
    output::print_warnings(&result.warnings, &ctx);
    match out_path {
        Some(out) => fs::write(out, &result.css)
            .map_err(|e| WeftError::io(format!("cannot write {}: {}", out.display(), e)))?,
        None => print!("{}", result.css),
    }
    Ok(())
}

fn handle_check(path: &Path, json: bool) -> Result<(), WeftError> {
    let (ctx, result) = expand_file(path)?;
    if json {
        output::print_warnings_json(&result.warnings)
            .map_err(|e| WeftError::io(format!("cannot serialize warnings: {}", e)))?;
    } else {
        output::print_warnings(&result.warnings, &ctx);
        eprintln!("{} warning(s)", result.warnings.len());
    }
    Ok(())
}

fn expand_file(path: &Path) -> Result<(SourceContext, ExpandOutput), WeftError> {
    let source = fs::read_to_string(path)
        .map_err(|e| WeftError::io(format!("cannot read {}: {}", path.display(), e)))?;
    let name = path.display().to_string();
    let ctx = SourceContext::from_file(&name, &source);
    let result = expand_str(&source, &name, &Options::default())?;
    Ok((ctx, result))
}
