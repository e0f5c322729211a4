mod tree;

pub use tree::{Axis, View};
