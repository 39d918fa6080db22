//! xmind-notes CLI Binary
//!
//! Extracts topic notes from an XMind document into a Markdown report.

use anyhow::Context;
use clap::Parser;
use std::process;
use xmind_notes::logging::init_logging;
use xmind_notes::tooling::cli::{Cli, CliContext};

fn init(cli: &Cli) -> anyhow::Result<CliContext> {
    let context =
        CliContext::new(cli.config.clone()).context("Failed to load configuration")?;
    let logging = cli.logging_config(&context.config().logging);
    init_logging(&logging).context("Failed to initialize logging")?;
    Ok(context)
}

fn main() {
    let cli = Cli::parse();

    let context = match init(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
