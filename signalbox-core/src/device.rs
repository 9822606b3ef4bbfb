//! The device contract
//!
//! Every I/O backend, from the built-in direct-pin driver to external
//! expander drivers, implements [`Device`]. A device claims one contiguous
//! range of virtual pins at registration; the dispatcher only ever forwards
//! operations for vpins inside that range.

use core::fmt;

/// Virtual pin number
///
/// One integer address space shared by all backends. A vpin may fall
/// inside more than one device's range; chain order decides ownership.
pub type Vpin = u16;

/// Contiguous half-open vpin range `[first, first + count)`
///
/// Fixed at registration and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VpinRange {
    /// First vpin owned by the device
    pub first: Vpin,
    /// Number of vpins owned
    pub count: u16,
}

impl VpinRange {
    /// Create a new range
    pub const fn new(first: Vpin, count: u16) -> Self {
        Self { first, count }
    }

    /// Check whether a vpin falls inside the range
    pub const fn contains(&self, vpin: Vpin) -> bool {
        vpin >= self.first && (vpin as u32) < self.first as u32 + self.count as u32
    }

    /// Last vpin in the range (equal to `first` for an empty range)
    ///
    /// Saturates for a range running past the end of the address space.
    pub const fn last(&self) -> Vpin {
        let last = self.first as u32 + self.count.saturating_sub(1) as u32;
        if last > Vpin::MAX as u32 {
            Vpin::MAX
        } else {
            last as Vpin
        }
    }
}

/// Configuration kinds a device may accept
///
/// Each device validates the kind and the parameter arity locally;
/// anything it does not understand fails without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigKind {
    /// Configure a vpin as an input; one parameter (non-zero = pull-up)
    Input,
    /// Configure a vpin as an output
    Output,
}

/// Diagnostic description of a device, for operator visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    /// Device kind, e.g. "direct"
    pub kind: &'static str,
    /// Owned vpin range
    pub range: VpinRange,
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vpins {}-{}",
            self.kind,
            self.range.first,
            self.range.last()
        )
    }
}

/// Capability contract implemented by every I/O backend
///
/// Only [`kind`](Device::kind), [`range`](Device::range),
/// [`write`](Device::write) and [`read`](Device::read) are required; the
/// remaining operations default to safe no-ops so simple devices stay
/// simple.
pub trait Device {
    /// Short static name of the device kind
    fn kind(&self) -> &'static str;

    /// The vpin range this device claimed at registration
    fn range(&self) -> VpinRange;

    /// Check whether this device owns the given vpin
    fn owns(&self, vpin: Vpin) -> bool {
        self.range().contains(vpin)
    }

    /// One-time hardware setup
    ///
    /// Called exactly once, immediately after the device is linked into
    /// the chain and before any other operation reaches it.
    fn init(&mut self) {}

    /// Apply a configuration to one vpin
    ///
    /// Returns false for unsupported kinds or wrong parameter counts,
    /// in which case nothing changes.
    fn configure(&mut self, _vpin: Vpin, _kind: ConfigKind, _params: &[i16]) -> bool {
        false
    }

    /// Apply an output value to one vpin
    ///
    /// Never called for vpins outside the device's range.
    fn write(&mut self, vpin: Vpin, value: i16);

    /// Sample the current state of one vpin
    ///
    /// Polarity and pull-up handling are device-defined.
    fn read(&mut self, vpin: Vpin) -> bool;

    /// Incremental background work (animation, debounce, ...)
    ///
    /// Invoked by the round-robin scheduler at unpredictable intervals;
    /// must do a bounded amount of work per call.
    fn tick(&mut self, _now_micros: u64) {}

    /// Whether the device proactively notifies input changes on this vpin
    ///
    /// When true, polling `read` is unnecessary.
    fn supports_notification(&self, _vpin: Vpin) -> bool {
        false
    }

    /// Whether the device may be unregistered at runtime
    fn is_deletable(&self) -> bool {
        false
    }

    /// Diagnostic identity (kind + owned range)
    fn identity(&self) -> DeviceIdentity {
        DeviceIdentity {
            kind: self.kind(),
            range: self.range(),
        }
    }
}
