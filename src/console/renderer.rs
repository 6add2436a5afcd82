use std::io::{self, Write};

use crate::console::stages::stage;
use crate::core::game::{RoundStatus, RoundView};
use crate::core::terminal::{TerminalColor, TerminalContext};

const RULE: &str = "=================================";

/// Renders round snapshots as plain text lines - no game logic
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn welcome<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(RULE, TerminalColor::Cyan)?;
        ctx.print_colored_line("    WELCOME TO HANGMAN GAME!    ", TerminalColor::Cyan)?;
        ctx.print_colored_line(RULE, TerminalColor::Cyan)?;
        ctx.empty_line()
    }

    pub fn new_round<W: Write>(&self, view: &RoundView, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line("New game started!", TerminalColor::Blue)?;
        ctx.print_line(&format!("Word length: {} letters", view.word_len()))?;
        ctx.empty_line()
    }

    pub fn render<W: Write>(&self, view: &RoundView, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_line(stage(view.wrong_guesses))?;
        ctx.empty_line()?;
        ctx.print_line(&format!("Word: {}", view.masked_word()))?;

        if !view.guessed.is_empty() {
            let letters: Vec<String> = view.guessed.iter().map(char::to_string).collect();
            ctx.print_line(&format!("Guessed letters: {}", letters.join(" ")))?;
        }

        ctx.print_line(&format!("Wrong guesses: {}/{}", view.wrong_guesses, view.max_wrong))?;
        ctx.empty_line()
    }

    pub fn result<W: Write>(&self, view: &RoundView, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        let word = view.solution().unwrap_or_default();
        ctx.print_line(RULE)?;
        match view.status {
            RoundStatus::Won => {
                ctx.print_colored_line("🎉 CONGRATULATIONS! YOU WON! 🎉", TerminalColor::Green)?;
                ctx.print_line(&format!("You guessed the word: {}", word))?;
                ctx.print_line(&format!("Wrong guesses: {}/{}", view.wrong_guesses, view.max_wrong))?;
            }
            RoundStatus::Lost => {
                ctx.print_colored_line("💀 GAME OVER! YOU LOST! 💀", TerminalColor::Red)?;
                ctx.print_line(&format!("The word was: {}", word))?;
            }
            RoundStatus::InProgress => {}
        }
        ctx.print_line(RULE)?;
        ctx.empty_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::GameEngine;

    fn rendered(view: &RoundView) -> String {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        ConsoleRenderer.render(view, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn fresh_round_hides_guessed_line() {
        let engine = GameEngine::new("JAVA").unwrap();
        let out = rendered(&engine.current_view());

        assert!(out.contains("Word: _ _ _ _\n"));
        assert!(out.contains("Wrong guesses: 0/6\n"));
        assert!(!out.contains("Guessed letters"));
    }

    #[test]
    fn guessed_letters_are_sorted() {
        let mut engine = GameEngine::new("JAVA").unwrap();
        for c in ['Z', 'A', 'M'] {
            engine.submit_guess(c);
        }
        let out = rendered(&engine.current_view());

        assert!(out.contains("Word: _ A _ A\n"));
        assert!(out.contains("Guessed letters: A M Z\n"));
        assert!(out.contains("Wrong guesses: 2/6\n"));
        assert!(out.contains("  O   |"));
        assert!(!out.contains("/|"));
    }
}
