/// Secret word supply, kept apart from the rules so rounds stay deterministic in tests
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::game::normalize_word;
use crate::error::{Error, Result};

/// Words the game ships with.
pub const BUILTIN_WORDS: [&str; 15] = [
    "PROGRAMMING",
    "COMPUTER",
    "JAVA",
    "HANGMAN",
    "CHALLENGE",
    "DEVELOPER",
    "SOFTWARE",
    "ALGORITHM",
    "DATABASE",
    "NETWORK",
    "SECURITY",
    "FRAMEWORK",
    "INTERFACE",
    "VARIABLE",
    "FUNCTION",
];

/// Supplies the secret word of each new round
pub trait WordSource {
    fn next_word(&mut self) -> String;
}

/// A validated, non-empty list of uppercase words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

/// On-disk layout of a word list: `{"words": ["rust", "tokio"]}`
#[derive(Debug, Deserialize)]
struct WordListFile {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_word(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::WordListRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: WordListFile =
            serde_json::from_str(&raw).map_err(|source| Error::WordListParse {
                path: path.to_path_buf(),
                source,
            })?;
        let list = Self::new(&file.words).inspect_err(|err| {
            warn!(path = %path.display(), %err, "rejected word list");
        })?;
        debug!(path = %path.display(), count = list.len(), "word list loaded");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Picks a uniformly random word from a list for every round
#[derive(Debug, Clone)]
pub struct RandomWordSource<R = StdRng> {
    list: WordList,
    rng: R,
}

impl RandomWordSource<StdRng> {
    pub fn from_entropy(list: WordList) -> Self {
        Self::with_rng(list, StdRng::from_os_rng())
    }

    pub fn seeded(list: WordList, seed: u64) -> Self {
        Self::with_rng(list, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWordSource<R> {
    pub fn with_rng(list: WordList, rng: R) -> Self {
        Self { list, rng }
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn next_word(&mut self) -> String {
        let index = self.rng.random_range(0..self.list.words.len());
        self.list.words[index].clone()
    }
}

/// Hands out the given words in order, wrapping around at the end
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    words: Vec<String>,
    next: usize,
}

impl FixedWordSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

impl WordSource for FixedWordSource {
    /// An empty source yields an empty word, which the engine refuses.
    fn next_word(&mut self) -> String {
        if self.words.is_empty() {
            return String::new();
        }
        let word = self.words[self.next % self.words.len()].clone();
        self.next += 1;
        word
    }
}
