//! UI layer.
//!
//! `core` resolves percent layouts into cells and records draw commands;
//! `backend` turns a finished frame into output; `widgets` are small panels
//! built on both.

pub mod core;

pub mod backend;

pub mod widgets;
