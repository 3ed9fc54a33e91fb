use std::io;

use anyhow::Result;
use tracing::info;

use gambit_console::{ConsoleConfig, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let mut session = Session::new(ConsoleConfig::default());
    let outcome = session.run(io::stdin().lock(), io::stdout().lock())?;
    info!(%outcome, "gambit exiting");
    Ok(())
}
