//! Device registry and dispatcher facade
//!
//! The registry owns every registered device as a boxed trait object in
//! one ordered chain. Insertion is LIFO: the most recently added device
//! sits at the chain head and is checked first, which lets a later device
//! deliberately shadow or extend an earlier device's address range —
//! overlapping ranges are a designed property, not an error.
//!
//! All higher layers (turnouts, sensors, outputs, protocol handlers) reach
//! hardware exclusively through this facade by vpin number. Failures are
//! boolean results or silent no-ops; nothing here ever halts the control
//! loop.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt;

use crate::device::{ConfigKind, Device, DeviceIdentity, Vpin};
use crate::notify::{InputChangeCallback, NotifyChain};
use crate::scheduler::LoopCursor;

/// Owner of the device chain, dispatcher of all vpin operations
pub struct DeviceRegistry {
    /// Ordered device chain, head first
    chain: VecDeque<Box<dyn Device>>,
    /// Round-robin cursor for background ticks
    cursor: LoopCursor,
    /// Input-change observer chain
    notify: NotifyChain,
    /// Shared change-notification line monitored by expanders, if any
    gpio_interrupt_pin: Option<u16>,
}

impl DeviceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            chain: VecDeque::new(),
            cursor: LoopCursor::new(),
            notify: NotifyChain::new(),
            gpio_interrupt_pin: None,
        }
    }

    /// Number of registered devices
    pub fn device_count(&self) -> usize {
        self.chain.len()
    }

    /// Register a device at the head of the chain
    ///
    /// The device's `init` runs exactly once, immediately after linking,
    /// so its address assignment is final before hardware setup.
    pub fn add_device(&mut self, device: Box<dyn Device>) {
        self.cursor.note_front_insert();
        self.chain.push_front(device);
        if let Some(device) = self.chain.front_mut() {
            device.init();
        }
    }

    /// First device in chain order owning `vpin`
    fn find_device(&mut self, vpin: Vpin) -> Option<&mut (dyn Device + 'static)> {
        self.chain
            .iter_mut()
            .find(|device| device.owns(vpin))
            .map(|device| device.as_mut())
    }

    /// Chain index of the first owner of `vpin` at or after `from`
    fn owner_position(&self, vpin: Vpin, from: usize) -> Option<usize> {
        self.chain
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, device)| device.owns(vpin))
            .map(|(index, _)| index)
    }

    /// Whether any device's range contains `vpin`
    pub fn exists(&self, vpin: Vpin) -> bool {
        self.chain.iter().any(|device| device.owns(vpin))
    }

    /// Whether the owning device proactively notifies changes on `vpin`
    ///
    /// False when the vpin is unowned.
    pub fn has_callback(&self, vpin: Vpin) -> bool {
        self.chain
            .iter()
            .find(|device| device.owns(vpin))
            .is_some_and(|device| device.supports_notification(vpin))
    }

    /// Forward a configuration request to the owning device
    ///
    /// Returns false when the vpin is unowned; otherwise the device's own
    /// validation result.
    pub fn configure(&mut self, vpin: Vpin, kind: ConfigKind, params: &[i16]) -> bool {
        match self.find_device(vpin) {
            Some(device) => device.configure(vpin, kind, params),
            None => false,
        }
    }

    /// Write an output value to the first owner of `vpin`
    ///
    /// Silent no-op when unowned: availability over correctness, the
    /// caller is never failed.
    pub fn write(&mut self, vpin: Vpin, value: i16) {
        if let Some(device) = self.find_device(vpin) {
            device.write(vpin, value);
        }
    }

    /// Write past the first owner to the next device owning `vpin`
    ///
    /// Issued on behalf of the chain-order-first owner: a device layered
    /// in front of another can defer a write for the same vpin number to
    /// the distinct physical device behind it. No-op when no further
    /// owner exists.
    pub fn write_downstream(&mut self, vpin: Vpin, value: i16) {
        let Some(first) = self.owner_position(vpin, 0) else {
            return;
        };
        if let Some(next) = self.owner_position(vpin, first + 1) {
            if let Some(device) = self.chain.get_mut(next) {
                device.write(vpin, value);
            }
        }
    }

    /// Sample the first owner of `vpin`
    ///
    /// Returns false when the vpin is unowned, indistinguishable from a
    /// genuine false reading; callers that care must check `exists`
    /// separately.
    pub fn read(&mut self, vpin: Vpin) -> bool {
        match self.find_device(vpin) {
            Some(device) => device.read(vpin),
            None => false,
        }
    }

    /// Unregister and destroy the first owner of `vpin`, if deletable
    ///
    /// No-op when the vpin is unowned or the owner is not deletable. The
    /// scheduler cursor is repositioned before the device is destroyed, so
    /// no later tick can reach freed state.
    pub fn remove(&mut self, vpin: Vpin) {
        let Some(index) = self.owner_position(vpin, 0) else {
            return;
        };
        let deletable = self
            .chain
            .get(index)
            .is_some_and(|device| device.is_deletable());
        if !deletable {
            return;
        }
        self.cursor.note_removed(index, self.chain.len());
        // Dropping the box is the device's one and only destruction
        self.chain.remove(index);
    }

    /// Run one scheduling round: exactly one device's background tick
    ///
    /// Call once per outer control-loop iteration. The cursor persists
    /// between calls and wraps to the chain head after the last device.
    pub fn tick(&mut self, now_micros: u64) {
        if let Some(index) = self.cursor.take_next(self.chain.len()) {
            if let Some(device) = self.chain.get_mut(index) {
                device.tick(now_micros);
            }
        }
    }

    /// Register an input-change observer, returning the previous head
    pub fn register_notification(
        &mut self,
        callback: InputChangeCallback,
    ) -> Option<InputChangeCallback> {
        self.notify.register(callback)
    }

    /// Report an input change to the observer chain
    pub fn notify_input_change(&self, vpin: Vpin, state: bool) {
        self.notify.notify(vpin, state);
    }

    /// Record the shared change-notification line expanders may monitor
    ///
    /// The seeding backend programs the line as a pulled-up input.
    pub fn set_gpio_interrupt_pin(&mut self, line: u16) {
        self.gpio_interrupt_pin = Some(line);
    }

    /// The recorded change-notification line, if any
    pub fn gpio_interrupt_pin(&self) -> Option<u16> {
        self.gpio_interrupt_pin
    }

    /// Diagnostic identities of all devices, in chain order
    pub fn identities(&self) -> impl Iterator<Item = DeviceIdentity> + '_ {
        self.chain.iter().map(|device| device.identity())
    }

    /// Write every device's identity to a diagnostic sink, one per line
    pub fn dump_all(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for identity in self.identities() {
            writeln!(out, "{identity}")?;
        }
        Ok(())
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
