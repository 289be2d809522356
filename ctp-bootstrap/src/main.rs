//! Custom type bootstrap for the commercetools Adyen extension.
//!
//! Usage:
//!   ctp-bootstrap --config ctp.json
//!   CTP_ACCESS_TOKEN=... ctp-bootstrap --project-key my-project
//!
//! Exits non-zero if any type could not be reconciled.

use anyhow::Result;
use clap::Parser;
use ctp_bootstrap::{run, Args};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = if args.verbose {
        EnvFilter::new(default_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let report = run(&args).await?;

    for entry in &report.reports {
        match &entry.result {
            Ok(outcome) => info!(
                key = %entry.key,
                outcome = outcome.label(),
                version = outcome.version(),
                "type reconciled"
            ),
            Err(e) => error!(key = %entry.key, "{e}"),
        }
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
