use std::io;

use unicode_segmentation::UnicodeSegmentation;

use super::geom::{CellRect, Vec2};
use super::grid::Grid;
use super::scene::View;
use crate::ui::backend::Backend;

pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';
pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';

/// One cursor-positioned write: move to `pos`, then emit `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintCmd {
    pub pos: Vec2,
    pub text: String,
}

/// Border glyph for the cell `p` of `rect`, or `None` for interior and
/// outside cells. Corners win over edges.
pub fn frame_glyph(rect: CellRect, p: Vec2) -> Option<char> {
    if !rect.contains(p) {
        return None;
    }
    let left = p.x == rect.pos.x;
    let right = p.x == rect.right() - 1;
    let top = p.y == rect.pos.y;
    let bottom = p.y == rect.bottom() - 1;

    let glyph = match (left, right, top, bottom) {
        (_, true, _, true) => BOTTOM_RIGHT,
        (true, _, _, true) => BOTTOM_LEFT,
        (_, true, true, _) => TOP_RIGHT,
        (true, _, true, _) => TOP_LEFT,
        (_, _, true, _) | (_, _, _, true) => HORIZONTAL,
        (true, _, _, _) | (_, true, _, _) => VERTICAL,
        _ => return None,
    };
    Some(glyph)
}

/// Splits `message` into `width`-grapheme slices. No word wrapping.
pub(crate) fn chunk_lines(message: &str, width: usize) -> Vec<String> {
    let graphemes: Vec<&str> = message.graphemes(true).collect();
    graphemes
        .chunks(width.max(1))
        .map(|chunk| chunk.concat())
        .collect()
}

/// Rows `draw_text` may use inside `rect`; the last row stays free.
pub(crate) fn text_rows(rect: CellRect) -> usize {
    (rect.size.y - 1).max(0) as usize
}

/// Accumulates one frame of draw commands.
///
/// Nothing reaches the display until [`RenderLayer::end`] hands the whole
/// frame to a backend in one call.
#[derive(Debug)]
pub struct RenderLayer {
    grid: Grid,
    cmds: Vec<PaintCmd>,
}

pub fn begin_layer(grid: Grid) -> RenderLayer {
    RenderLayer::begin(grid)
}

pub fn end_layer<B: Backend + ?Sized>(layer: RenderLayer, backend: &mut B) -> io::Result<()> {
    layer.end(backend)
}

impl RenderLayer {
    pub fn begin(grid: Grid) -> Self {
        Self {
            grid,
            cmds: Vec::new(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>) {
        debug_assert!(
            self.grid.bounds().contains(pos),
            "draw at ({}, {}) outside {}x{} grid",
            pos.x,
            pos.y,
            self.grid.width(),
            self.grid.height()
        );
        self.cmds.push(PaintCmd {
            pos,
            text: text.into(),
        });
    }

    /// Box-drawing border around `rect` with `title` written over the top
    /// edge starting one cell right of the corner. The title is not
    /// truncated, and is skipped when `rect` is a single column wide.
    pub fn draw_frame(&mut self, rect: CellRect, title: &str) {
        if rect.is_empty() {
            return;
        }
        let last_row = rect.bottom() - 1;
        for y in rect.pos.y..rect.bottom() {
            if y == rect.pos.y || y == last_row {
                let row: String = (rect.pos.x..rect.right())
                    .filter_map(|x| frame_glyph(rect, Vec2::new(x, y)))
                    .collect();
                self.text(Vec2::new(rect.pos.x, y), row);
                continue;
            }
            let left = Vec2::new(rect.pos.x, y);
            if let Some(glyph) = frame_glyph(rect, left) {
                self.text(left, glyph);
            }
            if rect.size.x > 1 {
                let right = Vec2::new(rect.right() - 1, y);
                if let Some(glyph) = frame_glyph(rect, right) {
                    self.text(right, glyph);
                }
            }
        }

        if !title.is_empty() && rect.size.x > 1 {
            self.text(rect.pos + Vec2::new(1, 0), title);
        }
    }

    /// Writes `message` in `rect.size.x`-wide slices, one per row from the
    /// top-left corner, dropping whatever would land on the bottom row.
    pub fn draw_text(&mut self, rect: CellRect, message: &str) {
        let width = rect.size.x.max(1) as usize;
        for (row, line) in chunk_lines(message, width)
            .into_iter()
            .take(text_rows(rect))
            .enumerate()
        {
            self.text(rect.pos + Vec2::new(0, row as i32), line);
        }
    }

    /// Frames every aligned view of the subtree, parents before children.
    pub fn draw_view(&mut self, view: &View) {
        view.walk(&mut |node: &View, depth: usize| match node.rect() {
            Some(rect) => self.draw_frame(rect, node.title()),
            None => tracing::debug!(title = node.title(), depth, "skip unaligned view"),
        });
    }

    /// Hands the frame to `backend` and discards the layer.
    pub fn end<B: Backend + ?Sized>(self, backend: &mut B) -> io::Result<()> {
        backend.draw(&self.cmds)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
