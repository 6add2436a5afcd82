/// Line-oriented terminal output with optional colour
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl TerminalContext<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print a line in `color`, or plain when colour is off
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.color && !matches!(color, TerminalColor::Default) {
            self.out.queue(SetForegroundColor(color.into()))?;
            write!(self.out, "{}", text)?;
            self.out.queue(ResetColor)?;
            writeln!(self.out)
        } else {
            self.print_line(text)
        }
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Print text without newline, flushed so prompts show before input is read
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Default,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Blue => Color::Blue,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Default => Color::Reset,
        }
    }
}
