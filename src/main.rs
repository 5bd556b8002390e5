// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Stop early (exit 1) if no tokens were given
// 3. Scan every token in order: resolve -> find external links -> probe them
// 4. Print one "<token> <count>" line per token
// 5. Exit 0, even if some tokens failed along the way
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link extraction and liveness probes
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - timeouts and client settings
mod error; // src/error.rs - error types
mod scan; // src/scan.rs - the per-token driver
mod source; // src/source/ - reading files and fetching pages

use anyhow::Result;
use checker::{NoProgress, ProgressBar, ProgressObserver};
use clap::Parser;
use cli::Cli;
use config::ScanConfig;
use std::io;
use tracing_subscriber::EnvFilter;

const NO_INPUT_MESSAGE: &str = "No URLs provided. Stopping script.";

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Something went wrong outside of any single token
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = all tokens processed (individual failures count as 0)
//   Ok(1) = no tokens given
//   Err   = unexpected error (e.g. the HTTP client could not be built)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.tokens.is_empty() {
        eprintln!("{}", NO_INPUT_MESSAGE);
        return Ok(1);
    }

    let config = ScanConfig::default();
    let client = config.build_client()?;

    let rows = scan::scan_all(&client, &cli.tokens, || progress_observer(&config)).await;

    scan::print_summary(&mut io::stdout().lock(), &rows)?;

    Ok(0)
}

// One fresh observer per token; the bar is drawn unless the config turns it off
fn progress_observer(config: &ScanConfig) -> Box<dyn ProgressObserver> {
    if config.show_progress {
        Box::new(ProgressBar::stdout(config.progress_width))
    } else {
        Box::new(NoProgress)
    }
}

// Logs go to stderr so they never mix with the summary on stdout.
// Default level is "warn"; RUST_LOG=xurl=debug shows every probe.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
