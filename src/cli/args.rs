//! Command Line Arguments

use clap::Parser;

use crate::game::moves::{MoveSet, MoveSetError};
use crate::proof::verify::{RevealRecord, VerificationError};

/// Usage text printed after an argument error.
pub const USAGE: &str = "Usage: fair-rps [--json] <MOVE> <MOVE> <MOVE> [MOVE...]\n\
                         Give an odd number (at least 3) of unique moves.\n\
                         Example: fair-rps Rock Paper Scissors";

/// Play one round against the computer.
#[derive(Debug, Parser)]
#[command(name = "fair-rps", version)]
pub struct PlayArgs {
    /// Print the reveal record as JSON after the result.
    #[arg(long)]
    pub json: bool,

    /// Move names, in cyclic order. Each beats the half before it.
    ///
    /// Everything from the first move on is a move name, so names may
    /// start with `-`. Options go first.
    #[arg(value_name = "MOVE", allow_hyphen_values = true, trailing_var_arg = true)]
    pub moves: Vec<String>,
}

impl PlayArgs {
    /// Validate the positional moves.
    pub fn move_set(&self) -> Result<MoveSet, MoveSetError> {
        MoveSet::new(self.moves.iter().cloned())
    }
}

/// Verify a finished round.
#[derive(Debug, Parser)]
#[command(name = "fair-rps-verify", version)]
pub struct VerifyArgs {
    /// JSON reveal record as printed by `fair-rps --json`.
    #[arg(long, conflicts_with_all = ["key", "mv", "hmac"])]
    pub receipt: Option<String>,

    /// Revealed key (hex).
    #[arg(long, required_unless_present = "receipt")]
    pub key: Option<String>,

    /// Computer move as disclosed.
    #[arg(long = "move", required_unless_present = "receipt")]
    pub mv: Option<String>,

    /// Commitment published before play (hex).
    #[arg(long, required_unless_present = "receipt")]
    pub hmac: Option<String>,
}

/// Errors turning verifier arguments into a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordArgsError {
    /// `--receipt` was not a valid record.
    #[error("invalid receipt: {0}")]
    Json(#[from] serde_json::Error),

    /// A field was malformed.
    #[error(transparent)]
    Field(#[from] VerificationError),

    /// Neither a receipt nor all three fields were given.
    #[error("give --receipt, or all of --key, --move and --hmac")]
    Missing,
}

impl VerifyArgs {
    /// Build the record to check.
    pub fn record(&self) -> Result<RevealRecord, RecordArgsError> {
        if let Some(json) = &self.receipt {
            return Ok(RevealRecord::from_json(json)?);
        }
        match (&self.mv, &self.key, &self.hmac) {
            (Some(mv), Some(key), Some(hmac)) => Ok(RevealRecord::from_parts(mv, key, hmac)?),
            _ => Err(RecordArgsError::Missing),
        }
    }
}
