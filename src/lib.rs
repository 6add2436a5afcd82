pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod logging;
pub mod window;

// Re-export for convenience
pub use crate::core::game::{GameEngine, GuessOutcome, GuessResult, RoundStatus, RoundView, MAX_WRONG};
pub use crate::core::session::Session;
pub use crate::core::words::{FixedWordSource, RandomWordSource, WordList, WordSource};
pub use crate::error::Error;
