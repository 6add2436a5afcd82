/// On-screen letter board: 26 clickable cells kept in sync with round snapshots
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::core::game::{LetterMark, RoundView};

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const COLUMNS: usize = 9;
pub const ROWS: usize = 3;

const CELL_WIDTH: u16 = 3;
const COLUMN_STRIDE: u16 = CELL_WIDTH + 1;
const ROW_STRIDE: u16 = 2;

/// Terminal columns the board needs.
pub const BOARD_WIDTH: u16 = COLUMNS as u16 * COLUMN_STRIDE - 1;
/// Terminal rows the board needs.
pub const BOARD_HEIGHT: u16 = ROWS as u16 * ROW_STRIDE - 1;

fn index_of(letter: char) -> Option<usize> {
    let letter = letter.to_ascii_uppercase();
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    marks: [LetterMark; 26],
    cursor: usize,
}

impl Default for LetterBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterBoard {
    pub fn new() -> Self {
        Self {
            marks: [LetterMark::Unused; 26],
            cursor: 0,
        }
    }

    /// Applies a snapshot and returns the letters whose cell changed.
    pub fn sync(&mut self, view: &RoundView) -> Vec<char> {
        let mut changed = Vec::new();
        for (i, letter) in ALPHABET.iter().enumerate() {
            let mark = view.mark(*letter);
            if self.marks[i] != mark {
                self.marks[i] = mark;
                changed.push(*letter);
            }
        }
        changed
    }

    pub fn mark(&self, letter: char) -> LetterMark {
        index_of(letter).map_or(LetterMark::Unused, |i| self.marks[i])
    }

    pub fn cursor_letter(&self) -> char {
        ALPHABET[self.cursor]
    }

    /// Moves the highlight by whole cells, clamped to the board.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let col = (self.cursor % COLUMNS) as isize + dx;
        let row = (self.cursor / COLUMNS) as isize + dy;
        let col = col.clamp(0, COLUMNS as isize - 1) as usize;
        let row = row.clamp(0, ROWS as isize - 1) as usize;
        self.cursor = (row * COLUMNS + col).min(ALPHABET.len() - 1);
    }

    /// Screen area of the cell for `index`, relative to the board `area`.
    pub fn cell_rect(area: Rect, index: usize) -> Rect {
        let col = (index % COLUMNS) as u16;
        let row = (index / COLUMNS) as u16;
        Rect::new(
            area.x + col * COLUMN_STRIDE,
            area.y + row * ROW_STRIDE,
            CELL_WIDTH,
            1,
        )
        .intersection(area)
    }

    /// Hit test for a mouse position; gaps between cells hit nothing.
    pub fn letter_at(area: Rect, column: u16, row: u16) -> Option<char> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let dx = column - area.x;
        let dy = row - area.y;
        if dx % COLUMN_STRIDE >= CELL_WIDTH || dy % ROW_STRIDE != 0 {
            return None;
        }
        let col = (dx / COLUMN_STRIDE) as usize;
        let row = (dy / ROW_STRIDE) as usize;
        if col >= COLUMNS || row >= ROWS {
            return None;
        }
        ALPHABET.get(row * COLUMNS + col).copied()
    }

    pub fn widget(&self, enabled: bool) -> LetterBoardWidget<'_> {
        LetterBoardWidget {
            board: self,
            enabled,
        }
    }
}

pub struct LetterBoardWidget<'a> {
    board: &'a LetterBoard,
    enabled: bool,
}

impl Widget for LetterBoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, letter) in ALPHABET.iter().enumerate() {
            let cell = LetterBoard::cell_rect(area, i);
            if cell.is_empty() {
                continue;
            }

            let mut style = match self.board.marks[i] {
                LetterMark::Unused => Style::default().fg(Color::Black).bg(Color::Gray),
                LetterMark::Hit => Style::default().fg(Color::Black).bg(Color::Green),
                LetterMark::Miss => Style::default().fg(Color::White).bg(Color::Red),
            };
            if !self.enabled {
                style = style.add_modifier(Modifier::DIM);
            } else if i == self.board.cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            buf.set_stringn(cell.x, cell.y, format!(" {} ", letter), cell.width as usize, style);
        }
    }
}
