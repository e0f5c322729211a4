//! panegrid - percent-based panel layout and evdev keyboard input for
//! full-screen terminal UIs.
//!
//! Modules:
//! - ui: grid math, view tree, render layer, backends, widgets
//! - input: raw device records, poll ticks, key snapshots
//! - config: settings file
//! - tui: terminal mode guard (feature `tui`)

pub mod config;
pub mod input;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
