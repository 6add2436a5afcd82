use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::console::prompt::{parse_answer, parse_guess, GuessInput};
use crate::console::renderer::ConsoleRenderer;
use crate::core::game::{GuessOutcome, GuessResult};
use crate::core::session::Session;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::core::words::WordSource;

/// Console game loop: print the round, read one line per turn
pub struct ConsoleGame<S, R, W: Write> {
    session: Session<S>,
    input: R,
    ctx: TerminalContext<W>,
    renderer: ConsoleRenderer,
}

impl<S, R, W> ConsoleGame<S, R, W>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    pub fn new(session: Session<S>, input: R, ctx: TerminalContext<W>) -> Self {
        Self {
            session,
            input,
            ctx,
            renderer: ConsoleRenderer,
        }
    }

    /// Plays rounds until the player declines or input ends, then hands back the output.
    pub fn run(mut self) -> Result<W> {
        self.renderer.welcome(&mut self.ctx)?;

        loop {
            self.renderer.new_round(&self.session.view(), &mut self.ctx)?;
            if !self.play_round()? {
                info!("input closed mid-round");
                break;
            }
            match self.ask_play_again()? {
                Some(true) => {
                    self.ctx.empty_line()?;
                    self.session
                        .new_round()
                        .context("could not start the next round")?;
                }
                _ => break,
            }
        }

        self.ctx.print_line("Thanks for playing Hangman! Goodbye!")?;
        self.ctx.flush()?;
        Ok(self.ctx.into_inner())
    }

    /// Returns false if input ran out before the round ended.
    fn play_round(&mut self) -> Result<bool> {
        while !self.session.view().status.is_over() {
            self.renderer.render(&self.session.view(), &mut self.ctx)?;
            let Some(outcome) = self.next_accepted_guess()? else {
                return Ok(false);
            };
            self.report(outcome)?;
        }

        let view = self.session.view();
        self.renderer.render(&view, &mut self.ctx)?;
        self.renderer.result(&view, &mut self.ctx)?;
        Ok(true)
    }

    /// Prompts until the engine accepts a letter.
    fn next_accepted_guess(&mut self) -> Result<Option<GuessOutcome>> {
        loop {
            self.ctx.prompt("Enter a letter: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let letter = match parse_guess(&line) {
                GuessInput::Letter(c) => c,
                GuessInput::NotOneCharacter => {
                    self.warn("Please enter exactly one letter!")?;
                    continue;
                }
                GuessInput::NotALetter => {
                    self.warn("Please enter a valid letter!")?;
                    continue;
                }
            };

            let outcome = self.session.submit_guess(letter);
            match outcome.result {
                GuessResult::Correct | GuessResult::Wrong => return Ok(Some(outcome)),
                GuessResult::AlreadyGuessed => {
                    self.warn("You already guessed that letter! Try again.")?
                }
                GuessResult::InvalidInput => self.warn("Please enter a valid letter!")?,
                GuessResult::RoundAlreadyOver => return Ok(Some(outcome)),
            }
        }
    }

    fn report(&mut self, outcome: GuessOutcome) -> Result<()> {
        match outcome.result {
            GuessResult::Correct => self.ctx.print_colored_line(
                &format!("Good guess! '{}' is in the word.", outcome.letter),
                TerminalColor::Green,
            )?,
            GuessResult::Wrong => self.ctx.print_colored_line(
                &format!("Sorry! '{}' is not in the word.", outcome.letter),
                TerminalColor::Red,
            )?,
            _ => {}
        }
        self.ctx.empty_line()?;
        Ok(())
    }

    /// `None` when input ended before a clear answer.
    fn ask_play_again(&mut self) -> Result<Option<bool>> {
        loop {
            self.ctx.prompt("Do you want to play again? (y/n): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_answer(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => self.warn("Please enter 'y' for yes or 'n' for no.")?,
            }
        }
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        self.ctx.print_colored_line(text, TerminalColor::Yellow)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from the console")?;
        if read == 0 {
            return Ok(None);
        }
        debug!(input = line.trim_end(), "console line");
        Ok(Some(line))
    }
}
