//! Fair RPS Verifier
//!
//! Recomputes `HMAC(key, move)` for a finished round and compares it with
//! the commitment printed before play.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use fair_rps::{
    cli::{init_logging, VerifyArgs},
    config::GameConfig,
    proof::verify::verify_reveal,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = VerifyArgs::parse();
    let config = GameConfig::from_env().context("reading configuration")?;
    init_logging(&config.log_filter);

    let record = args.record().context("building reveal record")?;
    debug!(hmac = %record.hmac, "verifying reveal");

    match verify_reveal(&record) {
        Ok(()) => {
            println!("OK: HMAC matches move '{}'", record.mv);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("FAILED: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
