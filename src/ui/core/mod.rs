//! Layout and drawing core: grid math, the view tree and the render layer.

pub mod error;
pub mod geom;
pub mod grid;
pub mod painter;
pub mod reveal;
pub mod scene;

pub use error::LayoutError;
pub use geom::{CellRect, PercentRect, Vec2};
pub use grid::Grid;
pub use painter::{begin_layer, end_layer, PaintCmd, RenderLayer};
pub use reveal::TextReveal;
pub use scene::{Axis, View};
