//! Human Input Parsing
//!
//! Turns one console line into a command. The console shows moves as
//! `1..=N`, `0` to exit and `?` for help; an exact move name is also
//! accepted. Numeric selection wins over a name that happens to look
//! like a number.

use thiserror::Error;

use crate::game::moves::MoveSet;

/// Token that ends the round without a result.
pub const EXIT_TOKEN: &str = "0";

/// Token that prints the outcome matrix and ends the round.
pub const HELP_TOKEN: &str = "?";

/// A parsed console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanInput {
    /// Leave without playing.
    Exit,
    /// Show the outcome matrix.
    Help,
    /// Play the move at this 0-based index.
    Move(usize),
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was typed (or end of input).
    #[error("no move entered")]
    Empty,

    /// A number outside `1..=max`.
    #[error("selection {index} is out of range, choose 1-{max}")]
    OutOfRange {
        /// Number typed.
        index: i64,
        /// Highest valid selection.
        max: usize,
    },

    /// Neither a number, a command nor a move name.
    #[error("'{0}' is not a move")]
    NotAMove(String),
}

impl HumanInput {
    /// Parse a line against the current move set.
    ///
    /// Surrounding whitespace (including the trailing newline) is ignored.
    pub fn parse(line: &str, moves: &MoveSet) -> Result<Self, InputError> {
        let text = line.trim();

        match text {
            "" => return Err(InputError::Empty),
            EXIT_TOKEN => return Ok(Self::Exit),
            HELP_TOKEN => return Ok(Self::Help),
            _ => {}
        }

        if let Ok(index) = text.parse::<i64>() {
            return match usize::try_from(index) {
                Ok(i) if (1..=moves.len()).contains(&i) => Ok(Self::Move(i - 1)),
                _ => Err(InputError::OutOfRange { index, max: moves.len() }),
            };
        }

        moves
            .index_of(text)
            .map(Self::Move)
            .ok_or_else(|| InputError::NotAMove(text.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_commands() {
        let moves = rps();
        assert_eq!(HumanInput::parse("0", &moves), Ok(HumanInput::Exit));
        assert_eq!(HumanInput::parse("?\n", &moves), Ok(HumanInput::Help));
    }

    #[test]
    fn test_one_based_index() {
        let moves = rps();
        assert_eq!(HumanInput::parse("1", &moves), Ok(HumanInput::Move(0)));
        assert_eq!(HumanInput::parse(" 2 \r\n", &moves), Ok(HumanInput::Move(1)));
        assert_eq!(HumanInput::parse("3", &moves), Ok(HumanInput::Move(2)));
    }

    #[test]
    fn test_out_of_range() {
        let moves = rps();
        assert_eq!(
            HumanInput::parse("4", &moves),
            Err(InputError::OutOfRange { index: 4, max: 3 })
        );
        assert_eq!(
            HumanInput::parse("-1", &moves),
            Err(InputError::OutOfRange { index: -1, max: 3 })
        );
    }

    #[test]
    fn test_move_name() {
        let moves = rps();
        assert_eq!(HumanInput::parse("Scissors", &moves), Ok(HumanInput::Move(2)));
        assert_eq!(
            HumanInput::parse("scissors", &moves),
            Err(InputError::NotAMove("scissors".into()))
        );
    }

    #[test]
    fn test_garbage_and_empty() {
        let moves = rps();
        assert_eq!(HumanInput::parse("", &moves), Err(InputError::Empty));
        assert_eq!(HumanInput::parse("   \n", &moves), Err(InputError::Empty));
        assert!(matches!(HumanInput::parse("2x", &moves), Err(InputError::NotAMove(_))));
        assert!(matches!(
            HumanInput::parse("99999999999999999999", &moves),
            Err(InputError::NotAMove(_))
        ));
    }

    #[test]
    fn test_numeric_names_prefer_index() {
        let moves = MoveSet::new(["3", "1", "2"]).unwrap();
        assert_eq!(HumanInput::parse("1", &moves), Ok(HumanInput::Move(0)));
    }
}
