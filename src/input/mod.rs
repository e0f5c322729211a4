//! Keyboard input read straight from an evdev device.
//!
//! Each poll tick drains the device into an [`InputSnapshot`] which is then
//! queried for pressed / held / released keys.

pub mod device;
pub mod event;
pub mod poller;

pub use device::{EventSource, RawInputRecord};
pub use event::{InputEvent, InputSnapshot, KeyCode, KeyState};
pub use poller::Poller;

#[cfg(target_os = "linux")]
pub use device::EvdevDevice;
