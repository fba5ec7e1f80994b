//! Command-line surface of the weft binary.
//!
//! Declared with clap's derive API; the doc comments below double as the
//! generated `--help` text.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments: one subcommand per operation.
#[derive(Debug, Parser)]
#[command(
    name = "weft",
    version,
    about = "Expand @util directives in CSS stylesheets."
)]
pub struct WeftArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// What the binary can do with a stylesheet.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand all directives and print (or write) the resulting CSS.
    Expand {
        /// The stylesheet to expand.
        #[arg(required = true)]
        file: PathBuf,
        /// Write the expanded CSS here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Expand in memory and report warnings without emitting CSS.
    Check {
        /// The stylesheet to check.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit warnings as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}
