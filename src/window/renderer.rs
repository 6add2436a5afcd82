/// Full-screen layout of the window presentation
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::core::words::WordSource;
use crate::window::app::{EndDialog, Tone, WindowApp};
use crate::window::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::window::figure::HangmanFigure;

const KEYS: &str =
    "[A-Z] + Enter Guess  [←↑↓→] + Enter Pick  [Click] Pick  [Ctrl+N] New Game  [Esc] Quit";

#[derive(Debug)]
pub struct WindowRenderer;

impl WindowRenderer {
    /// Draws the app and returns where the letter board ended up.
    pub fn render<S: WordSource>(frame: &mut Frame, app: &WindowApp<S>) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Play area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = Paragraph::new(format!("🎩 ═══ HANGMAN ═══ 🎩   Round {}", app.rounds()))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let play = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let view = app.view();
        frame.render_widget(
            HangmanFigure::new(view.wrong_guesses)
                .block(Block::default().borders(Borders::ALL).title(" Hangman ")),
            play[0],
        );

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Word
                Constraint::Length(3),                // Status
                Constraint::Length(BOARD_HEIGHT + 2), // Letters
                Constraint::Length(3),                // Guessed
                Constraint::Length(3),                // Input
                Constraint::Min(0),
            ])
            .split(play[1]);

        let word = Paragraph::new(view.masked_word())
            .block(Block::default().borders(Borders::ALL).title(" Word "))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(word, side[0]);

        let status = app.status();
        let status_widget = Paragraph::new(status.text.as_str())
            .block(Block::default().borders(Borders::ALL).title(" Status "))
            .style(Style::default().fg(tone_color(status.tone)))
            .alignment(Alignment::Center);
        frame.render_widget(status_widget, side[1]);

        let letters_block = Block::default().borders(Borders::ALL).title(" Click a Letter ");
        let letters_inner = letters_block.inner(side[2]);
        frame.render_widget(letters_block, side[2]);
        let [board_area] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
            .flex(Flex::Center)
            .areas(letters_inner);
        frame.render_widget(app.board().widget(app.input_enabled()), board_area);

        let guessed: Vec<String> = view.guessed.iter().map(char::to_string).collect();
        let guessed = Paragraph::new(format!(
            "Guessed: {}   Wrong: {}/{}",
            guessed.join(" "),
            view.wrong_guesses,
            view.max_wrong
        ))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(guessed, side[3]);

        let input_style = if app.input_enabled() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(format!("> {}", app.input()))
            .block(Block::default().borders(Borders::ALL).title(" Enter letter "))
            .style(input_style);
        frame.render_widget(input, side[4]);

        let footer = Paragraph::new(KEYS)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);

        if let Some(dialog) = app.dialog() {
            Self::render_dialog(frame, dialog);
        }

        board_area
    }

    fn render_dialog(frame: &mut Frame, dialog: &EndDialog) {
        let [row] = Layout::vertical([Constraint::Length(7)])
            .flex(Flex::Center)
            .areas(frame.area());
        let [area] = Layout::horizontal([Constraint::Length(46)])
            .flex(Flex::Center)
            .areas(row);

        let selected = Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let (yes, no) = if dialog.yes_selected {
            (selected, Style::default())
        } else {
            (Style::default(), selected)
        };

        let text = vec![
            Line::from(dialog.message.as_str()),
            Line::from(""),
            Line::from("Would you like to play again?"),
            Line::from(vec![
                Span::styled("[ Yes ]", yes),
                Span::raw("   "),
                Span::styled("[ No ]", no),
            ]),
        ];

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", dialog.title))
                        .style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Failure => Color::Red,
    }
}
