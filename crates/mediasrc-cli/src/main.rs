//! # mediasrc
//!
//! Extracts media URLs from a single web page.
//!
//! ## Usage
//!
//! ```sh
//! mediasrc video  https://example.com/watch/42   # ["https://cdn.example.com/42.mp4"]
//! mediasrc iframe https://example.com/embeds     # one URL per line
//! ```
//!
//! Results go to stdout. Logs go to stderr and are filtered with
//! `RUST_LOG` (default `warn`).

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use mediasrc_core::MediaExtractor;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod output;

use cli::{Cli, Invocation, parse_exit_code};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Prints usage on failure, help/version text otherwise
            let _ = err.print();
            return ExitCode::from(parse_exit_code(err.kind()));
        }
    };
    debug!(?args, "Parsed CLI arguments");

    let invocation = match args.into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => {
            // Rejected arguments print the bare message, like a usage error
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(invocation).await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Extraction failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the requested extraction and format its output
async fn run(invocation: Invocation) -> Result<String, Box<dyn Error>> {
    let extractor = MediaExtractor::with_config(invocation.config)?;
    let sources = extractor
        .extract(invocation.content_type, &invocation.url)
        .await?;
    Ok(output::format_sources(invocation.content_type, &sources)?)
}
