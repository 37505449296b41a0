//! Console Session
//!
//! Runs one round over a line-oriented input and a text output:
//! commit, show the menu, block on one line, resolve, reveal.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::rng::SecureRng;
use crate::game::input::InputError;
use crate::game::moves::MoveSet;
use crate::game::round::{Round, RoundError, RoundReveal, Step};
use crate::cli::render;

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player chose exit.
    Exited,
    /// Player asked for help; table printed.
    Help,
    /// Player typed something invalid; error printed.
    Invalid(InputError),
    /// Round resolved and key revealed.
    Revealed(RoundReveal),
}

/// Session errors. All terminal.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Console read/write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Round could not proceed (e.g. randomness failure).
    #[error("round failed: {0}")]
    Round(#[from] RoundError),

    /// Reveal record could not be encoded.
    #[error("could not encode reveal record: {0}")]
    Json(#[from] serde_json::Error),
}

/// One interactive round.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given streams.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self { input, output, config }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one round.
    ///
    /// The commitment is written before the input is read. The key is
    /// written only on the `Revealed` path.
    pub fn play<G: SecureRng>(&mut self, moves: MoveSet, rng: &mut G) -> Result<SessionOutcome, SessionError> {
        let mut round = Round::new(moves);

        let commitment = round.commit(rng, self.config.key_len)?;
        render::write_commitment(&mut self.output, &commitment)?;
        render::write_menu(&mut self.output, round.moves())?;

        round.await_human_move()?;
        render::write_prompt(&mut self.output)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!("input closed before a move was entered");
        }

        let step = match round.submit(&line) {
            Ok(step) => step,
            Err(RoundError::Input(e)) => {
                writeln!(self.output, "Invalid input: {}", e)?;
                return Ok(SessionOutcome::Invalid(e));
            }
            Err(e) => return Err(e.into()),
        };

        match step {
            Step::Exited => {
                info!("player exited");
                Ok(SessionOutcome::Exited)
            }
            Step::Help => {
                render::write_help_table(&mut self.output, round.table())?;
                Ok(SessionOutcome::Help)
            }
            Step::Resolved(_) => {
                let reveal = round.reveal()?;
                render::write_resolution(&mut self.output, &reveal)?;
                if self.config.json_receipt {
                    writeln!(self.output, "{}", reveal.record().to_json()?)?;
                }
                Ok(SessionOutcome::Revealed(reveal))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::from_hex;
    use crate::game::round::Verdict;
    use crate::proof::commitment::Commitment;
    use crate::proof::verify::{verify_reveal, RevealRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    /// Seed whose round commits to `mv`, found by replaying the round.
    fn seed_for(mv: &str) -> u64 {
        (0..1000)
            .find(|&seed| {
                let mut round = Round::new(rps());
                round.commit(&mut StdRng::seed_from_u64(seed), 32).unwrap();
                round.moves().get(round.opponent_move.unwrap()) == Some(mv)
            })
            .unwrap()
    }

    fn run(input: &str, seed: u64, config: GameConfig) -> (SessionOutcome, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), config);
        let outcome = session.play(rps(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let text = String::from_utf8(session.into_output()).unwrap();
        (outcome, text)
    }

    fn published_hmac(text: &str) -> Commitment {
        let line = text.lines().next().unwrap();
        Commitment::from_hex(line.strip_prefix("HMAC: ").unwrap()).unwrap()
    }

    #[test]
    fn test_end_to_end_paper_beats_rock() {
        let (outcome, text) = run("2\n", seed_for("Rock"), GameConfig::default());

        let SessionOutcome::Revealed(reveal) = outcome else {
            panic!("expected reveal, got {:?}", outcome);
        };
        assert_eq!(reveal.resolution.verdict(), Verdict::HumanWins);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("HMAC: "));
        assert_eq!(lines[1], "Available moves:");
        assert_eq!(lines[2], "1 - Rock");
        assert_eq!(lines[5], "0 - exit");
        assert_eq!(lines[6], "? - help");
        assert_eq!(lines[7], "Enter your move: Your move: Paper");
        assert_eq!(lines[8], "Computer move: Rock");
        assert_eq!(lines[9], "YOU WIN!");

        // Key printed at the end verifies the HMAC printed at the start
        let key_hex = lines[10].strip_prefix("HMAC key: ").unwrap();
        let key = from_hex(key_hex).unwrap();
        assert_eq!(key.len(), 32);
        assert!(published_hmac(&text).verify(&key, "Rock"));
        assert!(!published_hmac(&text).verify(&key, "Paper"));
    }

    #[test]
    fn test_help_prints_matrix_without_key() {
        let (outcome, text) = run("?\n", 5, GameConfig::default());

        assert_eq!(outcome, SessionOutcome::Help);
        assert!(text.contains("| v PC\\User > | Rock | Paper | Scissors |"));
        assert!(!text.contains("HMAC key"));
        assert!(!text.contains("WIN"));
        assert!(!text.contains("DRAW"));
    }

    #[test]
    fn test_exit_prints_nothing_more() {
        let (outcome, text) = run("0\n", 5, GameConfig::default());

        assert_eq!(outcome, SessionOutcome::Exited);
        assert!(text.ends_with("Enter your move: "));
    }

    #[test]
    fn test_invalid_input_reports_and_hides_key() {
        for input in ["9\n", "banana\n", ""] {
            let (outcome, text) = run(input, 5, GameConfig::default());
            assert!(matches!(outcome, SessionOutcome::Invalid(_)), "{:?}", input);
            assert!(text.contains("Invalid input: "));
            assert!(!text.contains("HMAC key"));
        }
    }

    #[test]
    fn test_json_receipt() {
        let config = GameConfig { json_receipt: true, ..GameConfig::default() };
        let (outcome, text) = run("1\n", 7, config);

        let SessionOutcome::Revealed(reveal) = outcome else { panic!() };
        let record = RevealRecord::from_json(text.lines().last().unwrap()).unwrap();

        assert_eq!(record, reveal.record());
        assert_eq!(record.hmac, published_hmac(&text));
        assert_eq!(verify_reveal(&record), Ok(()));
    }

    #[test]
    fn test_longer_key_from_config() {
        let config = GameConfig { key_len: 64, ..GameConfig::default() };
        let (outcome, _) = run("3\n", 9, config);

        let SessionOutcome::Revealed(reveal) = outcome else { panic!() };
        assert_eq!(reveal.key.to_bytes().unwrap().len(), 64);
    }
}
