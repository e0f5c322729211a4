use crate::ui::core::error::LayoutError;
use crate::ui::core::geom::{self, CellRect, PercentRect, Vec2};
use crate::ui::core::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn pick(self, v: Vec2) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(v.x, 0),
            Axis::Vertical => Vec2::new(0, v.y),
        }
    }
}

/// A titled region of the grid owning its nested regions.
///
/// A view starts out in percent units and is resolved to cells exactly once,
/// either against the grid ([`View::align`]) or against an aligned parent
/// ([`View::align_to`], [`View::push_aligned`], stacking). Resolution
/// overwrites `pos`/`size`, so resolving a second time scales the cell values
/// again as if they were percentages.
#[derive(Clone, Debug)]
pub struct View {
    title: String,
    pos: Vec2,
    size: Vec2,
    padding: Vec2,
    offset: Vec2,
    stack_axis: Option<Axis>,
    resolved: bool,
    children: Vec<View>,
}

impl View {
    pub fn new(title: impl Into<String>, placement: PercentRect, padding: Vec2) -> Self {
        Self {
            title: title.into(),
            pos: placement.pos,
            size: placement.size,
            padding,
            offset: Vec2::ZERO,
            stack_axis: None,
            resolved: false,
            children: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    /// Running stack cursor, relative to the view's own origin.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn stack_axis(&self) -> Option<Axis> {
        self.stack_axis
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn rect(&self) -> Option<CellRect> {
        self.resolved.then(|| CellRect::new(self.pos, self.size))
    }

    pub fn children(&self) -> &[View] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [View] {
        &mut self.children
    }

    fn placement(&self) -> PercentRect {
        PercentRect::new(self.pos, self.size)
    }

    fn warn_if_resolved(&self) {
        if self.resolved {
            tracing::warn!(title = %self.title, "view aligned twice, cells rescaled as percentages");
        }
    }

    fn settle(&mut self, rect: CellRect) {
        self.pos = rect.pos;
        self.size = rect.size;
        self.resolved = true;
    }

    /// Resolves this view against the whole grid. The resulting size is
    /// rounded down to even components so borders come out symmetric.
    pub fn align(&mut self, grid: &Grid) -> Result<CellRect, LayoutError> {
        self.warn_if_resolved();
        let mut rect = geom::resolve(self.placement(), grid.bounds()).with_padding(self.padding)?;
        rect.size = rect.size - rect.size % 2;
        let rect = grid.check(rect)?;
        self.settle(rect);
        Ok(rect)
    }

    /// Resolves this view against an already aligned parent rectangle.
    /// Unlike [`View::align`], no even rounding happens here.
    pub fn align_to(&mut self, parent: CellRect, grid: &Grid) -> Result<CellRect, LayoutError> {
        self.align_shifted(parent, Vec2::ZERO, grid)
    }

    fn align_shifted(
        &mut self,
        parent: CellRect,
        shift: Vec2,
        grid: &Grid,
    ) -> Result<CellRect, LayoutError> {
        self.warn_if_resolved();
        let mut rect = geom::resolve(self.placement(), parent).with_padding(self.padding)?;
        rect.pos += shift;
        let rect = grid.check(rect)?;
        self.settle(rect);
        Ok(rect)
    }

    fn resolved_rect(&self) -> Result<CellRect, LayoutError> {
        self.rect().ok_or_else(|| LayoutError::UnresolvedParent {
            title: self.title.clone(),
        })
    }

    fn adopt(&mut self, child: View) -> &mut View {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// Aligns `child` relative to this view and appends it.
    pub fn push_aligned(&mut self, mut child: View, grid: &Grid) -> Result<&mut View, LayoutError> {
        let parent = self.resolved_rect()?;
        child.align_to(parent, grid)?;
        Ok(self.adopt(child))
    }

    pub fn stack_horizontal(&mut self, child: View, grid: &Grid) -> Result<&mut View, LayoutError> {
        self.stack(child, Axis::Horizontal, grid)
    }

    pub fn stack_vertical(&mut self, child: View, grid: &Grid) -> Result<&mut View, LayoutError> {
        self.stack(child, Axis::Vertical, grid)
    }

    /// Places `child` after the previously stacked children along `axis`
    /// and advances the offset by the child's resolved size. A view stacks
    /// along one axis only.
    pub fn stack(&mut self, mut child: View, axis: Axis, grid: &Grid) -> Result<&mut View, LayoutError> {
        let parent = self.resolved_rect()?;
        if let Some(current) = self.stack_axis {
            if current != axis {
                return Err(LayoutError::MixedStackAxis {
                    current,
                    requested: axis,
                });
            }
        }

        let rect = child.align_shifted(parent, axis.pick(self.offset), grid)?;
        self.offset += axis.pick(rect.size);
        self.stack_axis = Some(axis);
        Ok(self.adopt(child))
    }

    /// Depth-first, parent before children. `visit` gets the nesting depth.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&View, usize),
    {
        self.walk_at(0, visit);
    }

    fn walk_at<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&View, usize),
    {
        visit(self, depth);
        for child in &self.children {
            child.walk_at(depth + 1, visit);
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/ui/core/tree.rs"]
mod tests;
