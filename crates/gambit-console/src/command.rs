//! Player command parsing.

use gambit_core::Square;

use crate::error::ConsoleError;

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<from> <to>` -- an ordinary move.
    Move { from: Square, to: Square },
    /// `<from> <to> <letter>` -- a pawn move naming its promotion piece.
    ///
    /// The letter is passed through as typed; the board rejects bad ones.
    Promote {
        from: Square,
        to: Square,
        letter: String,
    },
    /// `<from> <to> draw?` -- a move that also offers a draw.
    MoveOfferingDraw { from: Square, to: Square },
    /// `resign` -- the player gives up.
    Resign,
    /// `draw` -- accept the opponent's standing offer.
    AcceptDraw,
    /// Anything else.
    Unknown(String),
}

/// Parse a single line of player input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["resign"] => Ok(Command::Resign),
        ["draw"] => Ok(Command::AcceptDraw),
        [from, to] => Ok(Command::Move {
            from: from.parse()?,
            to: to.parse()?,
        }),
        [from, to, "draw?"] => Ok(Command::MoveOfferingDraw {
            from: from.parse()?,
            to: to.parse()?,
        }),
        [from, to, letter] => Ok(Command::Promote {
            from: from.parse()?,
            to: to.parse()?,
            letter: (*letter).to_string(),
        }),
        _ => Ok(Command::Unknown(line.trim().to_string())),
    }
}
