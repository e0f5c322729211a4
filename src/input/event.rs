use super::device::{RawInputRecord, EV_KEY};

/// Linux evdev key code (`KEY_*` in `linux/input-event-codes.h`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u16);

impl KeyCode {
    pub const ESC: Self = Self(1);
    pub const Q: Self = Self(16);
    pub const I: Self = Self(23);
    pub const L: Self = Self(38);
}

/// Value field of an `EV_KEY` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    Released,
    Pressed,
    Held,
}

impl KeyState {
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(KeyState::Released),
            1 => Some(KeyState::Pressed),
            2 => Some(KeyState::Held),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub code: KeyCode,
    pub state: KeyState,
}

impl InputEvent {
    pub const fn new(code: KeyCode, state: KeyState) -> Self {
        Self { code, state }
    }

    /// Keeps key records with a known value; sync, relative, misc and other
    /// record kinds are ignored.
    pub fn from_raw(record: RawInputRecord) -> Option<Self> {
        if record.kind != EV_KEY {
            return None;
        }
        let state = KeyState::from_value(record.value)?;
        Some(Self::new(KeyCode(record.code), state))
    }
}

/// Key events drained during one poll tick.
///
/// Nothing carries over between ticks: a key that is still down only shows
/// up as held if the device reported it again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    events: Vec<InputEvent>,
}

impl InputSnapshot {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, code: KeyCode, state: KeyState) -> bool {
        self.events
            .iter()
            .any(|e| e.code == code && e.state == state)
    }

    pub fn pressed(&self, code: KeyCode) -> bool {
        self.contains(code, KeyState::Pressed)
    }

    pub fn held(&self, code: KeyCode) -> bool {
        self.contains(code, KeyState::Held)
    }

    pub fn released(&self, code: KeyCode) -> bool {
        self.contains(code, KeyState::Released)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/event.rs"]
mod tests;
