use super::error::LayoutError;
use super::geom::{self, CellRect, Vec2};

/// The fixed character matrix everything is laid out on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub const DEFAULT: Self = Self {
        width: 64,
        height: 32,
    };

    pub fn new(width: i32, height: i32) -> Result<Self, LayoutError> {
        if width <= 0 || height <= 0 {
            return Err(LayoutError::ZeroGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn bounds(&self) -> CellRect {
        CellRect::new(Vec2::ZERO, self.size())
    }

    /// `value` percent of the whole grid.
    pub fn percent_of(&self, value: Vec2) -> Vec2 {
        geom::percent_of(value, self.size())
    }

    /// Converts a row count into a roughly equivalent column count.
    ///
    /// A grid taller than it is wide has a ratio of 0; it is treated as 1 so
    /// this never divides by zero. A 0 result means a single column.
    pub fn aspect_scale(&self, v: i32) -> i32 {
        v / (self.width / self.height).max(1)
    }

    /// Passes `rect` through if it is non-empty and lies on the grid.
    pub fn check(&self, rect: CellRect) -> Result<CellRect, LayoutError> {
        if rect.is_empty() {
            return Err(LayoutError::NonPositiveExtent { size: rect.size });
        }
        if !self.bounds().encloses(rect) {
            return Err(LayoutError::OutOfBounds {
                rect,
                bounds: self.bounds(),
            });
        }
        Ok(rect)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/grid.rs"]
mod tests;
