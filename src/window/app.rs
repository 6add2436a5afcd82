use anyhow::{Context as _, Result};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

use crate::console::prompt::{parse_guess, GuessInput};
use crate::core::game::{GuessResult, RoundStatus, RoundView};
use crate::core::session::Session;
use crate::core::words::WordSource;
use crate::window::board::LetterBoard;

/// Longest text the input line accepts.
const INPUT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

impl StatusLine {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Modal end-of-round question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndDialog {
    pub title: &'static str,
    pub message: String,
    pub yes_selected: bool,
}

/// Window state: the session plus everything the screen shows around it
pub struct WindowApp<S> {
    session: Session<S>,
    view: RoundView,
    board: LetterBoard,
    input: String,
    status: StatusLine,
    dialog: Option<EndDialog>,
    board_area: Rect,
    should_quit: bool,
}

impl<S: WordSource> WindowApp<S> {
    pub fn new(session: Session<S>) -> Self {
        let view = session.view();
        let mut board = LetterBoard::new();
        board.sync(&view);
        Self {
            session,
            view,
            board,
            input: String::new(),
            status: StatusLine::new("Welcome to Hangman! Guess the word.", Tone::Info),
            dialog: None,
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn view(&self) -> &RoundView {
        &self.view
    }

    pub fn board(&self) -> &LetterBoard {
        &self.board
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn dialog(&self) -> Option<&EndDialog> {
        self.dialog.as_ref()
    }

    pub fn rounds(&self) -> u32 {
        self.session.rounds()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Guesses are accepted only while the round runs and no dialog is up.
    pub fn input_enabled(&self) -> bool {
        !self.view.status.is_over() && self.dialog.is_none()
    }

    /// Where the renderer last put the letter board, used for mouse hit tests.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => {
                self.handle_mouse(*mouse);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') | KeyCode::Char('N') => return self.new_round(),
                KeyCode::Char('c') => self.should_quit = true,
                _ => {}
            }
            return Ok(());
        }

        if self.dialog.is_some() {
            return self.handle_dialog_key(key.code);
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            _ if !self.input_enabled() => {}
            KeyCode::Char(' ') if self.input.is_empty() => {
                self.submit(self.board.cursor_letter())
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < INPUT_LIMIT {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter if self.input.is_empty() => self.submit(self.board.cursor_letter()),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Left => self.board.move_cursor(-1, 0),
            KeyCode::Right => self.board.move_cursor(1, 0),
            KeyCode::Up => self.board.move_cursor(0, -1),
            KeyCode::Down => self.board.move_cursor(0, 1),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.input_enabled() {
            return;
        }
        if let Some(letter) = LetterBoard::letter_at(self.board_area, mouse.column, mouse.row) {
            self.submit(letter);
        }
    }

    pub fn new_round(&mut self) -> Result<()> {
        self.session
            .new_round()
            .context("could not start a new round")?;
        self.dialog = None;
        self.input.clear();
        self.refresh();
        self.status = StatusLine::new(
            format!("New game started! Word length: {} letters", self.view.word_len()),
            Tone::Info,
        );
        Ok(())
    }

    fn handle_dialog_key(&mut self, code: KeyCode) -> Result<()> {
        let Some(yes_selected) = self.dialog.as_ref().map(|d| d.yes_selected) else {
            return Ok(());
        };
        match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.yes_selected = !yes_selected;
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => return self.new_round(),
            KeyCode::Enter if yes_selected => return self.new_round(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Enter => {
                self.dialog = None
            }
            _ => {}
        }
        Ok(())
    }

    fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        match parse_guess(&text) {
            GuessInput::Letter(letter) => self.submit(letter),
            GuessInput::NotOneCharacter => {
                self.status = StatusLine::new("Please enter exactly one letter!", Tone::Failure)
            }
            GuessInput::NotALetter => {
                self.status = StatusLine::new("Please enter a valid letter!", Tone::Failure)
            }
        }
    }

    fn submit(&mut self, letter: char) {
        let outcome = self.session.submit_guess(letter);
        let letter = outcome.letter;
        let accepted = outcome.result.was_accepted();
        if accepted {
            self.refresh();
        }

        self.status = match outcome.result {
            GuessResult::Correct => {
                StatusLine::new(format!("Good guess! '{}' is in the word.", letter), Tone::Success)
            }
            GuessResult::Wrong => StatusLine::new(
                format!(
                    "Sorry! '{}' is not in the word. ({}/{})",
                    letter, self.view.wrong_guesses, self.view.max_wrong
                ),
                Tone::Failure,
            ),
            GuessResult::AlreadyGuessed => StatusLine::new(
                format!("You already guessed '{}'! Try another letter.", letter),
                Tone::Warning,
            ),
            GuessResult::InvalidInput => {
                StatusLine::new("Please enter a valid letter!", Tone::Failure)
            }
            GuessResult::RoundAlreadyOver => StatusLine::new(
                "The round is over. Press Ctrl+N for a new game.",
                Tone::Warning,
            ),
        };

        if accepted {
            self.finish_round(outcome.status);
        }
    }

    fn finish_round(&mut self, status: RoundStatus) {
        let word = self.view.solution().unwrap_or_default().to_owned();
        let (title, message) = match status {
            RoundStatus::InProgress => return,
            RoundStatus::Won => {
                self.status = StatusLine::new("🎉 CONGRATULATIONS! YOU WON! 🎉", Tone::Success);
                ("Congratulations!", format!("You won! The word was: {}", word))
            }
            RoundStatus::Lost => {
                self.status =
                    StatusLine::new(format!("💀 GAME OVER! The word was: {}", word), Tone::Failure);
                ("Game Over!", format!("You lost! The word was: {}", word))
            }
        };
        self.input.clear();
        self.dialog = Some(EndDialog {
            title,
            message,
            yes_selected: true,
        });
    }

    /// Pulls a fresh snapshot and re-syncs the board against it.
    fn refresh(&mut self) {
        self.view = self.session.view();
        let changed = self.board.sync(&self.view);
        debug!(?changed, "letter board updated");
    }
}
