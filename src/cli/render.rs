//! Console Rendering
//!
//! Text shown to the player. Every function writes to any `Write` so the
//! whole transcript can be captured in tests.

use std::io::{self, Write};

use crate::game::input::{EXIT_TOKEN, HELP_TOKEN};
use crate::game::moves::{MoveSet, MoveSetError};
use crate::game::round::RoundReveal;
use crate::game::rules::OutcomeTable;
use crate::proof::commitment::Commitment;

/// Prompt shown before reading the human's move.
pub const PROMPT: &str = "Enter your move: ";

/// Corner cell of the help table.
const CORNER: &str = "v PC\\User >";

/// `HMAC: <hex>`
pub fn write_commitment<W: Write>(out: &mut W, commitment: &Commitment) -> io::Result<()> {
    writeln!(out, "HMAC: {}", commitment)
}

/// Numbered move list followed by the exit and help entries.
pub fn write_menu<W: Write>(out: &mut W, moves: &MoveSet) -> io::Result<()> {
    writeln!(out, "Available moves:")?;
    for (i, mv) in moves.iter().enumerate() {
        writeln!(out, "{} - {}", i + 1, mv)?;
    }
    writeln!(out, "{} - exit", EXIT_TOKEN)?;
    writeln!(out, "{} - help", HELP_TOKEN)
}

/// Prompt without newline, flushed so it shows before the read blocks.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Full outcome matrix from the computer's point of view.
///
/// Rows are the computer's move, columns the player's move.
pub fn write_help_table<W: Write>(out: &mut W, table: &OutcomeTable) -> io::Result<()> {
    let moves = table.moves();
    let cell = "Draw".len();

    let first = CORNER.chars().count().max(moves.max_name_width());
    let widths: Vec<usize> = moves.iter().map(|m| m.chars().count().max(cell)).collect();

    let rule = {
        let mut line = format!("+{}+", "-".repeat(first + 2));
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    writeln!(out, "{}", rule)?;
    write!(out, "| {:<first$} |", CORNER)?;
    for (mv, w) in moves.iter().zip(&widths) {
        write!(out, " {:<w$} |", mv, w = *w)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rule)?;

    for (row, pc_move) in moves.iter().enumerate() {
        write!(out, "| {:<first$} |", pc_move)?;
        for (outcome, w) in table.row(row).iter().zip(&widths) {
            write!(out, " {:<w$} |", outcome, w = *w)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}

/// Result lines and the revealed key.
pub fn write_resolution<W: Write>(out: &mut W, reveal: &RoundReveal) -> io::Result<()> {
    let r = &reveal.resolution;
    writeln!(out, "Your move: {}", r.human_move)?;
    writeln!(out, "Computer move: {}", r.opponent_move)?;
    writeln!(out, "{}", r.verdict())?;
    writeln!(out, "HMAC key: {}", reveal.key)
}

/// One message per argument error kind, then usage.
pub fn write_argument_error<W: Write>(out: &mut W, error: &MoveSetError, usage: &str) -> io::Result<()> {
    let message = match error {
        MoveSetError::TooFew { .. } => format!("Not enough moves: {}.", error),
        MoveSetError::EvenCount { .. } => format!("Wrong number of moves: {}.", error),
        MoveSetError::InvalidName { .. } => format!("Invalid move name: {}.", error),
        MoveSetError::Duplicate { .. } => format!("Duplicate move: {}.", error),
    };
    writeln!(out, "{}", message)?;
    writeln!(out, "{}", usage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::build_outcome_table;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn rps() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_menu() {
        let text = render(|out| write_menu(out, &rps()));
        assert_eq!(
            text,
            "Available moves:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - exit\n? - help\n"
        );
    }

    #[test]
    fn test_help_table_layout() {
        let table = build_outcome_table(&rps());
        let text = render(|out| write_help_table(out, &table));
        let lines: Vec<&str> = text.lines().collect();

        // rule, header, rule, then (row, rule) per move
        assert_eq!(lines.len(), 3 + 2 * 3);
        assert_eq!(lines[1], "| v PC\\User > | Rock | Paper | Scissors |");
        assert_eq!(lines[3], "| Rock        | Draw | Lose  | Win      |");
        assert_eq!(lines[5], "| Paper       | Win  | Draw  | Lose     |");
        assert_eq!(lines[7], "| Scissors    | Lose | Win   | Draw     |");

        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_argument_messages_distinct() {
        let usage = "usage";
        let too_few = render(|out| write_argument_error(out, &MoveSetError::TooFew { min: 3, got: 1 }, usage));
        let even = render(|out| write_argument_error(out, &MoveSetError::EvenCount { got: 4 }, usage));
        let dup = render(|out| write_argument_error(out, &MoveSetError::Duplicate { name: "a".into() }, usage));
        let blank = render(|out| write_argument_error(out, &MoveSetError::InvalidName { name: " a".into() }, usage));

        assert!(too_few.starts_with("Not enough moves"));
        assert!(even.starts_with("Wrong number of moves"));
        assert!(dup.starts_with("Duplicate move"));
        assert!(blank.starts_with("Invalid move name"));
        for text in [too_few, even, dup, blank] {
            assert!(text.ends_with("usage\n"));
        }
    }
}
