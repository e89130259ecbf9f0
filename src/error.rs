// src/error.rs
// =============================================================================
// The failures page-mapper reports to the user.
//
// Every failure is terminal for the invocation: we never retry and never print
// a partial result. main.rs turns these into a message on stderr and an exit
// code via `exit_code()`.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - Enums with named fields: Each failure carries the data needed to explain it
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    /// A required argument (URL or command) was not supplied
    #[error("missing argument: no {0} supplied")]
    MissingArgument(&'static str),

    /// The HTTP request could not be completed
    #[error("fetch of {url} failed: {reason}")]
    TransportFailure { url: String, reason: String },

    /// The subprocess could not be started or exited unsuccessfully
    #[error("command `{command}` failed: {reason}")]
    SubprocessFailure {
        command: String,
        code: Option<i32>,
        reason: String,
    },
}

impl MapperError {
    // The process exit code for this failure
    //
    // A failing subprocess passes its own code through, the way a shell would.
    // Everything else (and a child killed by a signal) exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            MapperError::SubprocessFailure { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}
