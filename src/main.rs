// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only carries results)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, non-zero = something failed)
//
// Rust concepts used:
// - async/await: The HTTP request and the child process are awaited
// - Result<T, E>: For error handling
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing
mod error;     // src/error.rs - the failures we report
mod exec;      // src/exec/ - running external commands
mod extract;   // src/extract/ - finding links and buttons in a page
mod fetch;     // src/fetch/ - downloading the page
mod pipeline;  // src/pipeline.rs - fetch then extract
mod report;    // src/report.rs - formatting results

use clap::Parser;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use cli::{Cli, Commands};
use error::MapperError;
use exec::{ExecOutcome, Invocation, OutputMode};
use extract::ExtractMode;
use fetch::{FetchConfig, HttpFetcher};

// One page, one request, no concurrency: a current-thread runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected errors (not one of the MapperError cases)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns the exit code for the process
//   Ok(0) = success
//   Ok(n) = a MapperError was reported on stderr
//   Err   = unexpected error
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Map {
            url,
            json,
            mode,
            timeout,
            user_agent,
        } => {
            let config = FetchConfig {
                timeout: timeout.map(Duration::from_secs),
                user_agent: user_agent.unwrap_or_else(fetch::default_user_agent),
            };
            handle_map(url.as_deref(), json, mode, &config).await
        }
        Commands::Exec {
            output,
            shell,
            command,
        } => {
            let invocation = if shell {
                Invocation::Shell
            } else {
                Invocation::Direct
            };
            handle_exec(&command, invocation, output).await
        }
    }
}

// Handles the 'map' subcommand
//
// Nothing is printed on stdout unless both the fetch and the extraction
// completed.
async fn handle_map(
    url: Option<&str>,
    json: bool,
    mode: ExtractMode,
    config: &FetchConfig,
) -> Result<i32> {
    // The client is only built inside fetch(), after the URL has been checked
    let fetcher = HttpFetcher::new(config);

    match pipeline::map_page(&fetcher, url, mode).await {
        Ok(result) => {
            print_stdout(&report::render(&result, json)?)?;
            Ok(0)
        }
        Err(e) => Ok(report_failure(&e)),
    }
}

// Handles the 'exec' subcommand
async fn handle_exec(command: &[String], invocation: Invocation, output: OutputMode) -> Result<i32> {
    match exec::run_command(command, invocation, output).await {
        Ok(ExecOutcome::Captured(stdout)) => {
            print_stdout(&stdout)?;
            Ok(0)
        }
        Ok(ExecOutcome::Exited) => Ok(0),
        Err(e) => Ok(report_failure(&e)),
    }
}

// Prints the failure on stderr and picks the exit code
fn report_failure(error: &MapperError) -> i32 {
    tracing::debug!(?error, "invocation failed");
    eprintln!("Error: {}", error);
    error.exit_code()
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

// Logs go to stderr. RUST_LOG wins over --log-level when set.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
