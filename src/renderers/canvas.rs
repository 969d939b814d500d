//! Canvas — 2D character grid for painting ASCII art.
//!
//! Coordinates are signed; anything outside the grid is silently clipped.

use super::charset::{Arms, BoxChars, CharSet};

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![' '; width]; height],
        }
    }

    fn cell(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let (c, r) = (usize::try_from(col).ok()?, usize::try_from(row).ok()?);
        (c < self.width && r < self.height).then_some((c, r))
    }

    pub fn get(&self, col: i64, row: i64) -> char {
        self.cell(col, row).map_or(' ', |(c, r)| self.cells[r][c])
    }

    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        if let Some((c, r)) = self.cell(col, row) {
            self.cells[r][c] = ch;
        }
    }

    /// Add `arms` to the junction at a cell, keeping whatever arms the cell
    /// already has. Non-line characters are replaced.
    pub fn merge_arms(&mut self, col: i64, row: i64, arms: Arms) {
        let Some((c, r)) = self.cell(col, row) else {
            return;
        };
        let merged = match Arms::from_char(self.cells[r][c]) {
            Some(existing) => existing.merge(arms),
            None => arms,
        };
        self.cells[r][c] = merged.to_char(self.charset);
    }

    /// Draw a horizontal run strictly between columns `x1` and `x2` at row `y`.
    pub fn hline_between(&mut self, y: i64, x1: i64, x2: i64) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for col in (lo + 1)..hi {
            self.merge_arms(col, y, Arms::new(false, false, true, true));
        }
    }

    /// Draw a vertical run strictly between rows `y1` and `y2` at column `x`.
    pub fn vline_between(&mut self, x: i64, y1: i64, y2: i64) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for row in (lo + 1)..hi {
            self.merge_arms(x, row, Arms::new(true, true, false, false));
        }
    }

    /// Draw a box outline using box-drawing characters from BoxChars.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
        for col in (x0 + 1)..x1 {
            self.set(col, y0, bc.horizontal);
            self.set(col, y1, bc.horizontal);
        }
        for row in (y0 + 1)..y1 {
            self.set(x0, row, bc.vertical);
            self.set(x1, row, bc.vertical);
        }
    }

    /// Write a string starting at (col, row), clipped at the right edge.
    pub fn write_str(&mut self, col: i64, row: i64, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.set(col + i as i64, row, ch);
        }
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
