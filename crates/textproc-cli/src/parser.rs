//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use textproc_fetch::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for the text-processing service.
#[derive(Parser)]
#[command(name = "textproc")]
#[command(about = "Generate band names, insults, drug names and more from the TextService")]
#[command(version)]
pub struct Cli {
    /// Base URL of the TextService REST resource
    #[arg(
        long = "base-url",
        env = "TEXTPROC_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
