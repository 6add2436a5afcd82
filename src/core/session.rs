use tracing::info;

use crate::core::game::{GameEngine, GuessOutcome, RoundView};
use crate::core::words::WordSource;
use crate::error::Result;

/// One player's sitting: an engine plus the source of its secret words.
/// Presentations ask the player whether to continue, then call [`Session::new_round`].
pub struct Session<S> {
    engine: GameEngine,
    source: S,
    rounds: u32,
}

impl<S: WordSource> Session<S> {
    pub fn new(mut source: S) -> Result<Self> {
        let engine = GameEngine::new(&source.next_word())?;
        Ok(Self {
            engine,
            source,
            rounds: 1,
        })
    }

    pub fn new_round(&mut self) -> Result<RoundView> {
        let view = self.engine.start_new_game(&self.source.next_word())?;
        self.rounds += 1;
        info!(round = self.rounds, "next round");
        Ok(view)
    }

    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        self.engine.submit_guess(letter)
    }

    pub fn view(&self) -> RoundView {
        self.engine.current_view()
    }

    /// Number of rounds started, the current one included.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::{GuessResult, RoundStatus};
    use crate::core::words::FixedWordSource;
    use crate::error::Error;

    #[test]
    fn rounds_draw_words_in_order() {
        let mut session = Session::new(FixedWordSource::new(["JAVA", "GO"])).unwrap();
        assert_eq!(session.view().word_len(), 4);

        for c in ['J', 'A', 'V'] {
            session.submit_guess(c);
        }
        assert_eq!(session.view().status, RoundStatus::Won);

        let view = session.new_round().unwrap();
        assert_eq!(view.word_len(), 2);
        assert_eq!(view.status, RoundStatus::InProgress);
        assert_eq!(session.submit_guess('G').result, GuessResult::Correct);
        assert_eq!(session.rounds(), 2);
    }

    #[test]
    fn bad_words_from_the_source_are_fatal() {
        assert!(matches!(
            Session::new(FixedWordSource::new(Vec::<String>::new())),
            Err(Error::InvalidWord(_))
        ));

        let mut session = Session::new(FixedWordSource::new(["JAVA", "C3PO"])).unwrap();
        assert!(session.new_round().is_err());
        assert_eq!(session.rounds(), 1);
    }
}
