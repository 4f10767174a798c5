//! Scales the 500×500 pixel world onto a grid of terminal cells.

use super::sprites::Sprite;
use crate::core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect as WorldRect;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A character grid the size of the play area.
pub struct Playfield {
    width: usize,
    height: usize,
    cells: Vec<(char, Style)>,
}

impl Playfield {
    /// New grid filled with the background sprite. The background glyph is
    /// drawn on a sparse lattice so the field reads as empty space.
    pub fn new(area: Rect, background: Sprite) -> Self {
        let width = area.width as usize;
        let height = area.height as usize;
        let mut cells = vec![(' ', Style::default()); width * height];
        for row in (0..height).step_by(4) {
            for col in (row % 8..width).step_by(8) {
                cells[row * width + col] = (background.glyph, Style::default().fg(background.color));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    fn col(&self, x: f64) -> isize {
        (x / WORLD_WIDTH * self.width as f64).floor() as isize
    }

    fn row(&self, y: f64) -> isize {
        (y / WORLD_HEIGHT * self.height as f64).floor() as isize
    }

    fn set(&mut self, col: isize, row: isize, sprite: Sprite) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        self.cells[row as usize * self.width + col as usize] =
            (sprite.glyph, Style::default().fg(sprite.color));
    }

    /// Draw a single glyph at a world point.
    pub fn plot(&mut self, x: f64, y: f64, sprite: Sprite) {
        let (col, row) = (self.col(x), self.row(y));
        self.set(col, row, sprite);
    }

    /// Fill every cell a world rectangle touches (at least one cell).
    pub fn fill(&mut self, rect: WorldRect, sprite: Sprite) {
        let left = self.col(rect.x);
        let top = self.row(rect.y);
        let right = self.col(rect.right() - f64::EPSILON).max(left);
        let bottom = self.row(rect.bottom() - f64::EPSILON).max(top);
        for row in top..=bottom {
            for col in left..=right {
                self.set(col, row, sprite);
            }
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let lines: Vec<Line> = self
            .cells
            .chunks(self.width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    #[cfg(test)]
    fn glyph_at(&self, col: usize, row: usize) -> char {
        self.cells[row * self.width + col].0
    }
}
