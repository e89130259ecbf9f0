// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::exec::OutputMode;
use crate::extract::ExtractMode;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "page-mapper",
    version,
    about = "Fetch a web page and list the links and buttons on it",
    long_about = "page-mapper fetches a single page and prints every link target and button label \
                  it finds, in the order they appear. It does not follow links."
)]
pub struct Cli {
    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    ///
    /// RUST_LOG takes precedence when it is set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page and list its links and buttons
    ///
    /// Example: page-mapper map https://example.com
    Map {
        /// URL of the page to fetch
        ///
        /// Optional for clap so that a missing URL is reported by us,
        /// before anything touches the network
        url: Option<String>,

        /// Output results in JSON format instead of two lists
        #[arg(long)]
        json: bool,

        /// How to scan the page: flat regex scan or parsed HTML tree
        #[arg(long, value_enum, default_value_t = ExtractMode::Pattern)]
        mode: ExtractMode,

        /// Give up on the request after this many seconds (no limit by default)
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,

        /// User-Agent header to send (defaults to page-mapper/<version>)
        #[arg(long)]
        user_agent: Option<String>,
    },

    /// Run a command, capturing or passing through its output
    ///
    /// Example: page-mapper exec --output inherit -- ls -la
    Exec {
        /// Capture stdout and print it on success, or let it through as-is
        #[arg(long, value_enum, default_value_t = OutputMode::Capture)]
        output: OutputMode,

        /// Join the arguments with spaces and run them through the system shell
        ///
        /// No quoting is done: an argument containing spaces becomes several
        #[arg(long)]
        shell: bool,

        /// The program to run followed by its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}
