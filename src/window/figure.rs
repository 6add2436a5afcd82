/// Vector drawing of the gallows and the hanged figure
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line, Points};
use ratatui::widgets::{Block, Widget};

use crate::core::game::MAX_WRONG;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

/// Order in which wrong guesses add parts to the figure.
pub const PARTS: [FigurePart; MAX_WRONG as usize] = [
    FigurePart::Head,
    FigurePart::Body,
    FigurePart::LeftArm,
    FigurePart::RightArm,
    FigurePart::LeftLeg,
    FigurePart::RightLeg,
];

pub fn visible_parts(wrong_guesses: u8) -> &'static [FigurePart] {
    &PARTS[..usize::from(wrong_guesses.min(MAX_WRONG))]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Alive,
    Dead,
}

pub fn face(wrong_guesses: u8) -> Face {
    if wrong_guesses >= MAX_WRONG {
        Face::Dead
    } else {
        Face::Alive
    }
}

/// Primitive in canvas coordinates, 0..100 on both axes with y pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Circle { x: f64, y: f64, radius: f64 },
    Dot { x: f64, y: f64 },
}

const fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Stroke {
    Stroke::Line { x1, y1, x2, y2 }
}

const GALLOWS: [Stroke; 4] = [
    line(5.0, 5.0, 45.0, 5.0),   // base
    line(20.0, 5.0, 20.0, 92.0), // pole
    line(20.0, 92.0, 60.0, 92.0), // arm
    line(60.0, 92.0, 60.0, 82.0), // rope
];

const HEAD_X: f64 = 60.0;
const HEAD_Y: f64 = 73.0;
const HEAD_RADIUS: f64 = 9.0;
const EYE_Y: f64 = HEAD_Y + 2.5;
const MOUTH_Y: f64 = HEAD_Y - 4.0;

fn part_strokes(part: FigurePart) -> Vec<Stroke> {
    match part {
        FigurePart::Head => vec![Stroke::Circle {
            x: HEAD_X,
            y: HEAD_Y,
            radius: HEAD_RADIUS,
        }],
        FigurePart::Body => vec![line(HEAD_X, 64.0, HEAD_X, 38.0)],
        FigurePart::LeftArm => vec![line(HEAD_X, 58.0, 50.0, 46.0)],
        FigurePart::RightArm => vec![line(HEAD_X, 58.0, 70.0, 46.0)],
        FigurePart::LeftLeg => vec![line(HEAD_X, 38.0, 51.0, 20.0)],
        FigurePart::RightLeg => vec![line(HEAD_X, 38.0, 69.0, 20.0)],
    }
}

fn face_strokes(face: Face) -> Vec<Stroke> {
    let (left, right) = (HEAD_X - 3.5, HEAD_X + 3.5);
    match face {
        Face::Alive => vec![
            Stroke::Dot { x: left, y: EYE_Y },
            Stroke::Dot { x: right, y: EYE_Y },
            line(HEAD_X - 3.0, MOUTH_Y, HEAD_X + 3.0, MOUTH_Y),
        ],
        // crossed eyes and a frown
        Face::Dead => vec![
            line(left - 1.5, EYE_Y - 1.5, left + 1.5, EYE_Y + 1.5),
            line(left - 1.5, EYE_Y + 1.5, left + 1.5, EYE_Y - 1.5),
            line(right - 1.5, EYE_Y - 1.5, right + 1.5, EYE_Y + 1.5),
            line(right - 1.5, EYE_Y + 1.5, right + 1.5, EYE_Y - 1.5),
            line(HEAD_X - 4.0, MOUTH_Y - 1.5, HEAD_X, MOUTH_Y + 1.0),
            line(HEAD_X, MOUTH_Y + 1.0, HEAD_X + 4.0, MOUTH_Y - 1.5),
        ],
    }
}

/// Everything drawn for `wrong_guesses`: gallows always, then the parts cumulatively.
pub fn strokes(wrong_guesses: u8) -> Vec<Stroke> {
    let parts = visible_parts(wrong_guesses);
    let mut strokes = GALLOWS.to_vec();
    for part in parts {
        strokes.extend(part_strokes(*part));
    }
    if !parts.is_empty() {
        strokes.extend(face_strokes(face(wrong_guesses)));
    }
    strokes
}

pub struct HangmanFigure<'a> {
    wrong_guesses: u8,
    block: Option<Block<'a>>,
}

impl<'a> HangmanFigure<'a> {
    pub fn new(wrong_guesses: u8) -> Self {
        Self {
            wrong_guesses,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for HangmanFigure<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let strokes = strokes(self.wrong_guesses);
        let color = if face(self.wrong_guesses) == Face::Dead {
            Color::Red
        } else {
            Color::White
        };

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(move |ctx| {
                for stroke in &strokes {
                    match *stroke {
                        Stroke::Line { x1, y1, x2, y2 } => ctx.draw(&Line {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        }),
                        Stroke::Circle { x, y, radius } => ctx.draw(&Circle {
                            x,
                            y,
                            radius,
                            color,
                        }),
                        Stroke::Dot { x, y } => ctx.draw(&Points {
                            coords: &[(x, y)],
                            color,
                        }),
                    }
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}
