//! Console errors.

use gambit_core::SquareError;

/// Errors that can occur while running a console game.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A square token in the player's input could not be parsed.
    #[error("bad move input: {0}")]
    InvalidSquare(#[from] SquareError),

    /// Reading input or writing the transcript failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
