/// Line-by-line console presentation
pub mod prompt;
pub mod renderer;
pub mod runner;
pub mod stages;

pub use renderer::ConsoleRenderer;
pub use runner::ConsoleGame;

use anyhow::Result;

use crate::core::session::Session;
use crate::core::terminal::TerminalContext;
use crate::core::words::WordSource;

/// Plays on the process's stdin/stdout until the player stops.
pub fn run<S: WordSource>(session: Session<S>, color: bool) -> Result<()> {
    let stdin = std::io::stdin();
    ConsoleGame::new(session, stdin.lock(), TerminalContext::stdout(color)).run()?;
    Ok(())
}
