//! Display sinks for a finished render layer.
//!
//! The core only knows how to produce positioned writes; a backend decides
//! where they end up (a terminal, or a cell buffer in tests).

use std::io;

use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    /// Applies one whole frame of commands.
    fn draw(&mut self, cmds: &[PaintCmd]) -> io::Result<()>;
}

pub mod ansi;
