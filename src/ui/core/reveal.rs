use unicode_segmentation::UnicodeSegmentation;

use super::geom::{CellRect, Vec2};
use super::painter::{self, RenderLayer};

/// Typewriter effect driven from the main loop.
///
/// Each [`TextReveal::step`] uncovers more graphemes; [`TextReveal::draw`]
/// repaints the uncovered prefix with the same slicing and bottom-row rule as
/// [`RenderLayer::draw_text`]. Nothing runs in the background.
#[derive(Clone, Debug)]
pub struct TextReveal {
    rect: CellRect,
    lines: Vec<String>,
    total: usize,
    shown: usize,
}

impl TextReveal {
    pub fn new(rect: CellRect, message: &str) -> Self {
        let width = rect.size.x.max(1) as usize;
        let lines: Vec<String> = painter::chunk_lines(message, width)
            .into_iter()
            .take(painter::text_rows(rect))
            .collect();
        let total = lines.iter().map(|line| line_len(line)).sum();
        Self {
            rect,
            lines,
            total,
            shown: 0,
        }
    }

    pub fn rect(&self) -> CellRect {
        self.rect
    }

    /// Rows the full message occupies once revealed.
    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Uncovers up to `n` more graphemes. Returns how many were uncovered.
    pub fn step(&mut self, n: usize) -> usize {
        let before = self.shown;
        self.shown = self.shown.saturating_add(n).min(self.total);
        self.shown - before
    }

    pub fn finish(&mut self) {
        self.shown = self.total;
    }

    pub fn draw(&self, layer: &mut RenderLayer) {
        let mut budget = self.shown;
        for (row, line) in self.lines.iter().enumerate() {
            if budget == 0 {
                break;
            }
            let len = line_len(line);
            let visible = if budget >= len {
                line.clone()
            } else {
                take_graphemes(line, budget)
            };
            budget = budget.saturating_sub(len);
            layer.text(self.rect.pos + Vec2::new(0, row as i32), visible);
        }
    }
}

fn line_len(line: &str) -> usize {
    line.graphemes(true).count()
}

fn take_graphemes(line: &str, n: usize) -> String {
    line.graphemes(true).take(n).collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/reveal.rs"]
mod tests;
