//! Text console for two players sharing one terminal.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::ConsoleError;
pub use session::{ConsoleConfig, Outcome, Session};
