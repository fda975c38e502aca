//! Binary crate for the `weather-dashboard` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Wiring configuration into the collector and notifier
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is the normal deployed case; the process environment
    // still applies.
    let _ = dotenvy::dotenv();
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
