use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::core::words::{RandomWordSource, WordList};
use crate::error::Result;

/// Options shared by every mode
#[derive(Debug, Clone, Default, Args)]
pub struct Settings {
    /// JSON word list, e.g. {"words": ["rust", "cargo"]}
    #[arg(long = "words", env = "HANGTERM_WORDS", global = true, value_name = "FILE")]
    pub words_file: Option<PathBuf>,

    /// Seed for a reproducible word order
    #[arg(long, env = "HANGTERM_SEED", global = true)]
    pub seed: Option<u64>,

    /// Append logs to this file instead of the terminal
    #[arg(long, env = "HANGTERM_LOG", global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Plain console output without colours
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Settings {
    pub fn color(&self) -> bool {
        !self.no_color
    }

    /// The configured word list, or the built-in one.
    pub fn word_list(&self) -> Result<WordList> {
        match &self.words_file {
            Some(path) => WordList::from_json_file(path),
            None => Ok(WordList::builtin()),
        }
    }

    pub fn word_source(&self) -> Result<RandomWordSource> {
        let list = self.word_list()?;
        info!(words = list.len(), seeded = self.seed.is_some(), "word source ready");
        Ok(match self.seed {
            Some(seed) => RandomWordSource::seeded(list, seed),
            None => RandomWordSource::from_entropy(list),
        })
    }
}
