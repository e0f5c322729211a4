//! Escape-sequence backend for any `Write` sink (normally stdout).

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::ui::backend::Backend;
use crate::ui::core::painter::PaintCmd;

const CSI: &str = "\x1b[";

/// Appends "move to (column, row)" for a zero-based cell position.
pub fn move_to(out: &mut String, x: i32, y: i32) {
    let _ = write!(out, "{CSI}{};{}H", y + 1, x + 1);
}

/// Encodes a frame into a single escape-sequence string.
pub fn encode(cmds: &[PaintCmd]) -> String {
    let mut out = String::with_capacity(cmds.iter().map(|c| c.text.len() + 10).sum());
    for cmd in cmds {
        move_to(&mut out, cmd.pos.x, cmd.pos.y);
        out.push_str(&cmd.text);
    }
    out
}

#[derive(Debug)]
pub struct AnsiBackend<W: Write> {
    out: W,
}

impl<W: Write> AnsiBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Backend for AnsiBackend<W> {
    fn draw(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        if cmds.is_empty() {
            return Ok(());
        }
        // One write per frame keeps partially drawn frames off the screen.
        self.out.write_all(encode(cmds).as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ansi.rs"]
mod tests;
