//! Round State Machine
//!
//! One round, one commitment, one resolution.
//!
//! ```text
//! Init ──commit──▶ Committed ──await──▶ AwaitingHumanMove ──move──▶ Resolved ──reveal──▶ Revealed
//!                                             │
//!                                             └── exit / help / invalid ──▶ Aborted
//! ```
//!
//! The key lives inside the round until `reveal` moves it out. Abort
//! paths never touch it, so nothing secret leaks when the human quits.

use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::rng::SecureRng;
use crate::game::input::{HumanInput, InputError};
use crate::game::moves::MoveSet;
use crate::game::rules::{build_outcome_table, Outcome, OutcomeTable};
use crate::proof::commitment::{self, Commitment, CommitmentError, RevealedKey, SecretKey};
use crate::proof::verify::RevealRecord;

// =============================================================================
// PHASES
// =============================================================================

/// Why a round ended without a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// Human typed the exit command.
    Exit,
    /// Human asked for the outcome matrix.
    Help,
    /// Human typed something that is not a move.
    InvalidInput,
}

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Move set known, nothing chosen yet.
    #[default]
    Init,
    /// Opponent move chosen and committed.
    Committed,
    /// Commitment published, waiting for the human.
    AwaitingHumanMove,
    /// Winner decided, key still secret.
    Resolved,
    /// Key disclosed. Terminal.
    Revealed,
    /// Ended without a result. Terminal.
    Aborted(AbortReason),
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aborted(reason) => write!(f, "Aborted({:?})", reason),
            other => write!(f, "{:?}", other),
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Round verdict as announced on the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Human won.
    HumanWins,
    /// Automated opponent won.
    ComputerWins,
    /// Same move.
    Draw,
}

impl From<Outcome> for Verdict {
    /// `outcome` is from the human's point of view.
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::HumanWins,
            Outcome::Lose => Self::ComputerWins,
            Outcome::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HumanWins => "YOU WIN!",
            Self::ComputerWins => "COMPUTER WIN!",
            Self::Draw => "DRAW",
        })
    }
}

/// Resolved pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Move the human played.
    pub human_move: String,
    /// Move the opponent committed to.
    pub opponent_move: String,
    /// Outcome from the human's point of view.
    pub outcome: Outcome,
}

impl Resolution {
    /// Console verdict.
    #[inline]
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.outcome)
    }
}

/// What a submitted line did to the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Human left. Round aborted.
    Exited,
    /// Human asked for help. Round aborted; show [`Round::table`].
    Help,
    /// Round resolved; call [`Round::reveal`] next.
    Resolved(Resolution),
}

/// Everything disclosed at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReveal {
    /// The result.
    pub resolution: Resolution,
    /// The key, now public.
    pub key: RevealedKey,
    /// The commitment published at the start.
    pub commitment: Commitment,
}

impl RoundReveal {
    /// Record for independent verification.
    pub fn record(&self) -> RevealRecord {
        RevealRecord::new(
            self.resolution.opponent_move.clone(),
            self.key.clone(),
            self.commitment.clone(),
        )
    }
}

/// Round errors.
#[derive(Debug, Error)]
pub enum RoundError {
    /// Operation not allowed in the current phase.
    #[error("cannot {operation} while round is {phase}")]
    InvalidPhase {
        /// Attempted operation.
        operation: &'static str,
        /// Phase at the time.
        phase: RoundPhase,
    },

    /// Human input was not a move. The round is aborted.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Commitment could not be produced. The round cannot start.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

// =============================================================================
// ROUND
// =============================================================================

/// A single game round.
#[derive(Debug)]
pub struct Round {
    table: OutcomeTable,
    phase: RoundPhase,
    pub(crate) opponent_move: Option<usize>,
    key: Option<SecretKey>,
    commitment: Option<Commitment>,
    resolution: Option<Resolution>,
}

impl Round {
    /// Start a round over a validated move set.
    pub fn new(moves: MoveSet) -> Self {
        Self {
            table: build_outcome_table(&moves),
            phase: RoundPhase::Init,
            opponent_move: None,
            key: None,
            commitment: None,
            resolution: None,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Moves in play.
    #[inline]
    pub fn moves(&self) -> &MoveSet {
        self.table.moves()
    }

    /// Outcome table for this round.
    #[inline]
    pub fn table(&self) -> &OutcomeTable {
        &self.table
    }

    /// Published commitment, once committed.
    #[inline]
    pub fn commitment(&self) -> Option<&Commitment> {
        self.commitment.as_ref()
    }

    fn expect_phase(&self, expected: RoundPhase, operation: &'static str) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase { operation, phase: self.phase })
        }
    }

    fn transition(&mut self, next: RoundPhase) {
        debug!(from = %self.phase, to = %next, "round phase change");
        self.phase = next;
    }

    /// Init → Committed.
    ///
    /// Chooses the opponent move, creates a `key_len`-byte key and commits.
    /// On failure the round stays in `Init` and nothing is published.
    pub fn commit<R: SecureRng>(&mut self, rng: &mut R, key_len: usize) -> Result<Commitment, RoundError> {
        self.expect_phase(RoundPhase::Init, "commit")?;

        let mv = commitment::choose_move(self.table.moves(), rng);
        let key = commitment::new_key(rng, key_len)?;
        let published = commitment::commit(&key, mv)?;
        let index = self.table.moves().index_of(mv);

        debug!(commitment = %published, key_len, "opponent move committed");

        self.opponent_move = index;
        self.key = Some(key);
        self.commitment = Some(published.clone());
        self.transition(RoundPhase::Committed);
        Ok(published)
    }

    /// Committed → AwaitingHumanMove.
    pub fn await_human_move(&mut self) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::Committed, "wait for a move")?;
        self.transition(RoundPhase::AwaitingHumanMove);
        Ok(())
    }

    /// Parse and apply one line of human input.
    ///
    /// Unparseable input aborts the round and returns the parse error.
    pub fn submit(&mut self, line: &str) -> Result<Step, RoundError> {
        self.expect_phase(RoundPhase::AwaitingHumanMove, "submit a move")?;

        match HumanInput::parse(line, self.table.moves()) {
            Ok(input) => self.apply(input),
            Err(e) => {
                warn!(error = %e, "invalid human input, aborting round");
                self.transition(RoundPhase::Aborted(AbortReason::InvalidInput));
                Err(RoundError::Input(e))
            }
        }
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, input: HumanInput) -> Result<Step, RoundError> {
        self.expect_phase(RoundPhase::AwaitingHumanMove, "submit a move")?;

        match input {
            HumanInput::Exit => {
                self.transition(RoundPhase::Aborted(AbortReason::Exit));
                Ok(Step::Exited)
            }
            HumanInput::Help => {
                self.transition(RoundPhase::Aborted(AbortReason::Help));
                Ok(Step::Help)
            }
            HumanInput::Move(human) => {
                let Some(human_move) = self.table.moves().get(human) else {
                    let index = i64::try_from(human)
                        .ok()
                        .and_then(|i| i.checked_add(1))
                        .unwrap_or(i64::MAX);
                    let e = InputError::OutOfRange { index, max: self.table.size() };
                    self.transition(RoundPhase::Aborted(AbortReason::InvalidInput));
                    return Err(RoundError::Input(e));
                };
                let Some(opponent) = self.opponent_move else {
                    return Err(RoundError::InvalidPhase { operation: "resolve", phase: self.phase });
                };

                let resolution = Resolution {
                    human_move: human_move.to_string(),
                    opponent_move: self.table.moves().get(opponent).unwrap_or_default().to_string(),
                    outcome: self.table.outcome_at(human, opponent),
                };

                info!(
                    human = %resolution.human_move,
                    opponent = %resolution.opponent_move,
                    verdict = %resolution.verdict(),
                    "round resolved"
                );

                self.resolution = Some(resolution.clone());
                self.transition(RoundPhase::Resolved);
                Ok(Step::Resolved(resolution))
            }
        }
    }

    /// Resolved → Revealed. Moves the key out of the round.
    pub fn reveal(&mut self) -> Result<RoundReveal, RoundError> {
        self.expect_phase(RoundPhase::Resolved, "reveal")?;

        let (Some(key), Some(published), Some(resolution)) =
            (self.key.take(), self.commitment.clone(), self.resolution.clone())
        else {
            return Err(RoundError::InvalidPhase { operation: "reveal", phase: self.phase });
        };

        let reveal = RoundReveal {
            resolution,
            key: commitment::reveal(key),
            commitment: published,
        };
        self.transition(RoundPhase::Revealed);
        Ok(reveal)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::verify::verify_reveal;
    use crate::DEFAULT_KEY_LEN;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    fn awaiting(seed: u64) -> Round {
        let mut round = Round::new(rps());
        round.commit(&mut StdRng::seed_from_u64(seed), DEFAULT_KEY_LEN).unwrap();
        round.await_human_move().unwrap();
        round
    }

    /// Seed whose first round commits to `mv`.
    fn seed_for(mv: &str) -> u64 {
        (0..1000)
            .find(|&seed| {
                let round = awaiting(seed);
                round.moves().get(round.opponent_move.unwrap()) == Some(mv)
            })
            .unwrap()
    }

    #[test]
    fn test_happy_path() {
        let mut round = Round::new(rps());
        assert_eq!(round.phase(), RoundPhase::Init);
        assert!(round.commitment().is_none());

        let published = round.commit(&mut StdRng::seed_from_u64(1), 32).unwrap();
        assert_eq!(round.phase(), RoundPhase::Committed);
        assert_eq!(round.commitment(), Some(&published));

        round.await_human_move().unwrap();
        assert_eq!(round.phase(), RoundPhase::AwaitingHumanMove);

        let step = round.submit("1").unwrap();
        assert!(matches!(step, Step::Resolved(_)));
        assert_eq!(round.phase(), RoundPhase::Resolved);

        let reveal = round.reveal().unwrap();
        assert_eq!(round.phase(), RoundPhase::Revealed);
        assert_eq!(reveal.commitment, published);
        assert_eq!(verify_reveal(&reveal.record()), Ok(()));
    }

    #[test]
    fn test_paper_beats_committed_rock() {
        let mut round = awaiting(seed_for("Rock"));

        let Step::Resolved(resolution) = round.submit("2").unwrap() else {
            panic!("expected resolution");
        };
        assert_eq!(resolution.human_move, "Paper");
        assert_eq!(resolution.opponent_move, "Rock");
        assert_eq!(resolution.verdict(), Verdict::HumanWins);
        assert_eq!(resolution.verdict().to_string(), "YOU WIN!");

        let reveal = round.reveal().unwrap();
        let key = reveal.key.to_bytes().unwrap();
        assert!(reveal.commitment.verify(&key, "Rock"));
        assert!(!reveal.commitment.verify(&key, "Paper"));
    }

    #[test]
    fn test_all_verdicts() {
        let seed = seed_for("Scissors");

        let mut draw = awaiting(seed);
        let Step::Resolved(r) = draw.submit("Scissors").unwrap() else { panic!() };
        assert_eq!(r.verdict(), Verdict::Draw);
        assert_eq!(r.verdict().to_string(), "DRAW");

        let mut lose = awaiting(seed);
        let Step::Resolved(r) = lose.submit("2").unwrap() else { panic!() };
        assert_eq!(r.verdict(), Verdict::ComputerWins);
        assert_eq!(r.verdict().to_string(), "COMPUTER WIN!");

        let mut win = awaiting(seed);
        let Step::Resolved(r) = win.submit("1").unwrap() else { panic!() };
        assert_eq!(r.verdict(), Verdict::HumanWins);
    }

    #[test]
    fn test_exit_aborts_without_reveal() {
        let mut round = awaiting(3);
        assert_eq!(round.submit("0").unwrap(), Step::Exited);
        assert_eq!(round.phase(), RoundPhase::Aborted(AbortReason::Exit));
        assert!(matches!(round.reveal(), Err(RoundError::InvalidPhase { .. })));
    }

    #[test]
    fn test_help_aborts_without_reveal() {
        let mut round = awaiting(3);
        assert_eq!(round.submit("?").unwrap(), Step::Help);
        assert_eq!(round.phase(), RoundPhase::Aborted(AbortReason::Help));
        assert!(round.resolution.is_none());
        assert!(matches!(round.reveal(), Err(RoundError::InvalidPhase { .. })));
    }

    #[test]
    fn test_invalid_input_aborts() {
        for bad in ["4", "-2", "lizard", ""] {
            let mut round = awaiting(3);
            assert!(matches!(round.submit(bad), Err(RoundError::Input(_))), "{:?}", bad);
            assert_eq!(round.phase(), RoundPhase::Aborted(AbortReason::InvalidInput));
            assert!(round.reveal().is_err());
            assert!(round.submit("1").is_err());
        }
    }

    #[test]
    fn test_huge_selection_aborts() {
        for index in [3, i64::MAX as usize, usize::MAX] {
            let mut round = awaiting(3);
            let err = round.apply(HumanInput::Move(index)).unwrap_err();
            assert!(
                matches!(err, RoundError::Input(InputError::OutOfRange { max: 3, .. })),
                "{}",
                index
            );
            assert_eq!(round.phase(), RoundPhase::Aborted(AbortReason::InvalidInput));
            assert!(round.reveal().is_err());
        }

        let mut round = awaiting(3);
        let err = round.apply(HumanInput::Move(usize::MAX)).unwrap_err();
        assert!(matches!(
            err,
            RoundError::Input(InputError::OutOfRange { index: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_out_of_order_calls_rejected() {
        let mut round = Round::new(rps());
        assert!(matches!(round.submit("1"), Err(RoundError::InvalidPhase { .. })));
        assert!(matches!(round.await_human_move(), Err(RoundError::InvalidPhase { .. })));
        assert!(matches!(round.reveal(), Err(RoundError::InvalidPhase { .. })));

        let mut rng = StdRng::seed_from_u64(8);
        round.commit(&mut rng, 32).unwrap();
        assert!(matches!(round.commit(&mut rng, 32), Err(RoundError::InvalidPhase { .. })));
        assert!(matches!(round.submit("1"), Err(RoundError::InvalidPhase { .. })));
    }

    #[test]
    fn test_reveal_only_once() {
        let mut round = awaiting(4);
        round.submit("1").unwrap();
        round.reveal().unwrap();
        assert!(matches!(round.reveal(), Err(RoundError::InvalidPhase { .. })));
    }

    #[test]
    fn test_short_key_leaves_round_in_init() {
        let mut round = Round::new(rps());
        let err = round.commit(&mut StdRng::seed_from_u64(1), 8).unwrap_err();
        assert!(matches!(err, RoundError::Commitment(CommitmentError::KeyTooShort { .. })));
        assert_eq!(round.phase(), RoundPhase::Init);
        assert!(round.commitment().is_none());
    }

    #[test]
    fn test_independent_rounds() {
        let a = awaiting(1);
        let b = awaiting(2);
        assert_ne!(a.commitment(), b.commitment());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(RoundPhase::AwaitingHumanMove.to_string(), "AwaitingHumanMove");
        assert_eq!(RoundPhase::Aborted(AbortReason::Help).to_string(), "Aborted(Help)");
    }
}
