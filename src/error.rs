use std::path::PathBuf;

use thiserror::Error;

/// Configuration and programming errors. Player mistakes are never errors,
/// see [`crate::core::game::GuessResult`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("The secret word '{0}' must be a non-empty sequence of letters A-Z")]
    InvalidWord(String),
    #[error("The word list does not contain any word")]
    EmptyWordList,
    #[error("Failed to read the word list '{path}'")]
    WordListRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse the word list '{path}'")]
    WordListParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn invalid_word_message_names_the_word() {
        let message = Error::InvalidWord("R2D2".to_owned()).to_string();
        assert!(message.contains("'R2D2'"));
    }

    #[test]
    fn word_list_errors_keep_their_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::WordListRead {
            path: "words.json".into(),
            source: io,
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("words.json"));
    }
}
