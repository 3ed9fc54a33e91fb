//! Turn-by-turn game session over a line-based reader and writer.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Board, Side, Status};

use crate::command::{Command, parse_command};
use crate::error::ConsoleError;

/// Session knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Draw the board before every prompt.
    pub render_board: bool,
    /// Print `Check` after a move that checks the opponent.
    pub announce_check: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            render_board: true,
            announce_check: true,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    /// Input ran out before the game was decided.
    Abandoned,
}

impl Outcome {
    /// The outcome in which `side` wins.
    pub const fn win_for(side: Side) -> Outcome {
        match side {
            Side::White => Outcome::WhiteWins,
            Side::Black => Outcome::BlackWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::WhiteWins => f.write_str("White wins"),
            Outcome::BlackWins => f.write_str("Black wins"),
            Outcome::Draw => f.write_str("Draw"),
            Outcome::Abandoned => f.write_str("Abandoned"),
        }
    }
}

/// What to do after one line of input.
enum Turn {
    /// The same side goes again.
    Retry,
    /// The other side is up.
    Next,
    Over(Outcome),
}

/// A game between two players at one console.
pub struct Session {
    board: Board,
    to_move: Side,
    /// The opponent of `to_move` offered a draw with their last move.
    draw_offered: bool,
    config: ConsoleConfig,
}

impl Session {
    /// A new game from the starting position, White to move.
    pub fn new(config: ConsoleConfig) -> Self {
        Self::from_board(Board::new(), Side::White, config)
    }

    /// Resume play on `board` with `to_move` up next.
    pub fn from_board(board: Board, to_move: Side, config: ConsoleConfig) -> Self {
        Self {
            board,
            to_move,
            draw_offered: false,
            config,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose move it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Play until the game is decided or `input` runs out.
    ///
    /// Prompts, the board and announcements go to `output`; nothing else does.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<Outcome, ConsoleError> {
        info!(to_move = %self.to_move, "game started");
        let mut lines = input.lines();

        let outcome = loop {
            if self.config.render_board {
                write!(output, "{}", self.board.pretty())?;
            }
            write!(output, "{}'s move: ", self.to_move)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break Outcome::Abandoned;
            };
            let line = line?;
            debug!(side = %self.to_move, input = %line.trim(), "received command");

            let turn = match parse_command(&line) {
                Ok(command) => self.dispatch(command, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "could not parse command");
                    writeln!(output, "Illegal move, try again")?;
                    Turn::Retry
                }
            };
            match turn {
                Turn::Retry => {}
                Turn::Next => self.to_move = self.to_move.flip(),
                Turn::Over(outcome) => break outcome,
            }
        };

        info!(%outcome, "game over");
        Ok(outcome)
    }

    /// Carry out one command for the side to move.
    fn dispatch<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Turn, ConsoleError> {
        let side = self.to_move;
        let (played, offers_draw) = match command {
            Command::Move { from, to } => (self.board.play(from, to, side), false),
            Command::Promote { from, to, letter } => {
                (self.board.promote(from, to, side, &letter), false)
            }
            Command::MoveOfferingDraw { from, to } => (self.board.play(from, to, side), true),
            Command::Resign => {
                let outcome = Outcome::win_for(side.flip());
                info!(%side, "resigned");
                writeln!(output, "{outcome}")?;
                return Ok(Turn::Over(outcome));
            }
            Command::AcceptDraw if self.draw_offered => {
                writeln!(output, "{}", Outcome::Draw)?;
                return Ok(Turn::Over(Outcome::Draw));
            }
            Command::AcceptDraw | Command::Unknown(_) => (false, false),
        };

        if !played {
            writeln!(output, "Illegal move, try again")?;
            return Ok(Turn::Retry);
        }
        self.draw_offered = offers_draw;

        match self.board.status(side.flip()) {
            Status::Checkmate => {
                let outcome = Outcome::win_for(side);
                writeln!(output, "Checkmate")?;
                writeln!(output, "{outcome}")?;
                return Ok(Turn::Over(outcome));
            }
            Status::Check if self.config.announce_check => writeln!(output, "Check")?,
            Status::Check | Status::Normal => {}
        }
        Ok(Turn::Next)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}
