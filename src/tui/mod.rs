//! Terminal mode lifecycle (crossterm).
//!
//! Kept apart from `ui` so the layout and drawing core never depends on a
//! terminal crate.

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalOps, TerminalRestorer};
