use super::geom::{CellRect, Vec2};
use super::scene::Axis;

/// Layout failures. Every variant means the requested layout is invalid;
/// nothing is clamped or corrected on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    ZeroGrid { width: i32, height: i32 },
    NonPositiveExtent { size: Vec2 },
    OutOfBounds { rect: CellRect, bounds: CellRect },
    UnresolvedParent { title: String },
    MixedStackAxis { current: Axis, requested: Axis },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::ZeroGrid { width, height } => {
                write!(f, "invalid layout: grid must be non-empty, got {}x{}", width, height)
            }
            LayoutError::NonPositiveExtent { size } => write!(
                f,
                "invalid layout: padding leaves a non-positive extent ({}x{})",
                size.x, size.y
            ),
            LayoutError::OutOfBounds { rect, bounds } => write!(
                f,
                "invalid layout: ({},{} {}x{}) falls outside ({},{} {}x{})",
                rect.pos.x,
                rect.pos.y,
                rect.size.x,
                rect.size.y,
                bounds.pos.x,
                bounds.pos.y,
                bounds.size.x,
                bounds.size.y
            ),
            LayoutError::UnresolvedParent { title } => {
                write!(f, "invalid layout: parent view {:?} is not aligned yet", title)
            }
            LayoutError::MixedStackAxis { current, requested } => write!(
                f,
                "invalid layout: view already stacks {:?}, cannot stack {:?}",
                current, requested
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
