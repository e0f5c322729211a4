use std::ops::{Add, AddAssign, Mul, Rem, Sub};

use super::error::LayoutError;

/// Integer pair used both as a position and as a size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Rem<i32> for Vec2 {
    type Output = Self;

    fn rem(self, rhs: i32) -> Self::Output {
        Self::new(self.x % rhs, self.y % rhs)
    }
}

/// Placement expressed in percent of some basis rectangle.
///
/// Nothing in here is a cell coordinate until it goes through [`resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PercentRect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl PercentRect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Full extent of the basis.
    pub const FULL: Self = Self::new(Vec2::ZERO, Vec2::new(100, 100));
}

/// Absolute rectangle on the character grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellRect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl CellRect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn contains(&self, p: Vec2) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn encloses(&self, other: CellRect) -> bool {
        other.pos.x >= self.pos.x
            && other.pos.y >= self.pos.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Moves the origin inward by `pad` and shrinks the extent by `pad` on
    /// both sides. Fails instead of clamping when nothing would be left.
    pub fn with_padding(self, pad: Vec2) -> Result<CellRect, LayoutError> {
        let rect = CellRect::new(self.pos + pad, self.size - pad * 2);
        if rect.is_empty() {
            return Err(LayoutError::NonPositiveExtent { size: rect.size });
        }
        Ok(rect)
    }
}

/// `value` percent of `base`, truncating.
///
/// Values above 100 scale past `base` without clamping.
pub fn percent_of(value: Vec2, base: Vec2) -> Vec2 {
    Vec2::new(value.x * base.x / 100, value.y * base.y / 100)
}

/// Maps a percent placement onto cells of `basis`.
pub fn resolve(rect: PercentRect, basis: CellRect) -> CellRect {
    CellRect::new(
        basis.pos + percent_of(rect.pos, basis.size),
        percent_of(rect.size, basis.size),
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
