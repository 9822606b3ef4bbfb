//! Input-change notification chain
//!
//! Devices that can report input changes proactively (instead of being
//! polled) feed them through one observer chain. Registration is LIFO and
//! returns the previous head: an observer that wants to compose with the
//! one it supersedes stores that head and calls through to it explicitly.

use crate::device::Vpin;

/// Observer callback for input state changes
pub type InputChangeCallback = fn(vpin: Vpin, state: bool);

/// Head of the observer chain
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyChain {
    head: Option<InputChangeCallback>,
}

impl NotifyChain {
    /// Create an empty chain
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Push a new observer to the head of the chain
    ///
    /// Returns the previous head (None on first registration) so the new
    /// observer can chain to it.
    pub fn register(&mut self, callback: InputChangeCallback) -> Option<InputChangeCallback> {
        self.head.replace(callback)
    }

    /// Report an input change to the current head observer
    ///
    /// Only the head is called; it is responsible for forwarding to any
    /// observer it superseded.
    pub fn notify(&self, vpin: Vpin, state: bool) {
        if let Some(callback) = self.head {
            callback(vpin, state);
        }
    }
}
