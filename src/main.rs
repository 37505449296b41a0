//! Fair RPS
//!
//! Plays one round: prints the commitment, reads the player's move,
//! prints the result and the key.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use fair_rps::{
    VERSION,
    cli::{init_logging, render, PlayArgs, Session, SessionOutcome, USAGE},
    config::GameConfig,
    core::rng::os_rng,
};

fn main() -> anyhow::Result<ExitCode> {
    let args = PlayArgs::parse();

    let mut config = GameConfig::from_env().context("reading configuration")?;
    if args.json {
        config.json_receipt = true;
    }

    init_logging(&config.log_filter);
    info!("Fair RPS v{}", VERSION);

    let moves = match args.move_set() {
        Ok(moves) => moves,
        Err(e) => {
            error!(error = %e, "rejected move list");
            render::write_argument_error(&mut io::stderr().lock(), &e, USAGE)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);

    let outcome = session
        .play(moves, &mut os_rng())
        .context("round aborted")?;

    Ok(match outcome {
        SessionOutcome::Invalid(_) => ExitCode::FAILURE,
        SessionOutcome::Exited | SessionOutcome::Help | SessionOutcome::Revealed(_) => ExitCode::SUCCESS,
    })
}
