//! The fixed pause between rows.
//!
//! This is the only rate limiting the run does: one pause per row, whatever happened
//! to the row. Tests swap in [`RecordingPacer`] to count pauses without sleeping.

use std::time::Duration;

pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Remembers every requested pause instead of sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}
