use std::time::Duration;

use super::device::EventSource;
use super::event::{InputEvent, InputSnapshot};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Fixed-cadence input poll: drain everything queued, then sleep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Poller {
    interval: Duration,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One tick. Blocks the calling thread for the poll interval.
    pub fn poll<S: EventSource + ?Sized>(&self, source: &mut S) -> InputSnapshot {
        let snapshot = self.drain(source);
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
        snapshot
    }

    /// Reads until the source is empty. A read error ends the drain and is
    /// otherwise treated like an empty source.
    pub fn drain<S: EventSource + ?Sized>(&self, source: &mut S) -> InputSnapshot {
        let mut events = Vec::new();
        loop {
            match source.read_record() {
                Ok(Some(record)) => events.extend(InputEvent::from_raw(record)),
                Ok(None) => break,
                Err(err) => {
                    tracing::debug!(error = %err, "input read failed, drain stopped");
                    break;
                }
            }
        }
        if !events.is_empty() {
            tracing::trace!(count = events.len(), "input drained");
        }
        InputSnapshot::new(events)
    }
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/poller.rs"]
mod tests;
