// src/exec/mod.rs
// =============================================================================
// This module runs an external command for the `exec` subcommand.
//
// Two independent choices, both explicit on the command line:
// - How the command is launched (Invocation): directly from the argument
//   vector, or as one space-joined line handed to the system shell
// - What happens to its output (OutputMode): captured and returned, or
//   passed straight through to our terminal
//
// Rust concepts:
// - tokio::process: Spawning child processes without blocking the runtime
// - ValueEnum: Lets clap parse these enums from --flags
// =============================================================================

mod runner;

use clap::ValueEnum;

pub use runner::run_command;

/// What to do with the child's standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Collect all of stdout and print it once the command succeeds
    #[default]
    Capture,
    /// Let the child write directly to our stdout and stderr
    Inherit,
}

/// How the command line is turned into a process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Invocation {
    /// First argument is the program, the rest are its arguments, no shell
    #[default]
    Direct,
    /// Arguments are joined with spaces (no quoting) and run by the shell
    Shell,
}

// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Everything the command wrote to stdout (OutputMode::Capture)
    Captured(String),
    /// The command ran to completion with its output on our terminal
    Exited,
}
