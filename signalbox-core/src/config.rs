//! Seed-table configuration types
//!
//! The well-known built-in devices and their default address ranges are
//! configuration data, not dispatch logic: the table below is the
//! firmware's default seeding policy and can be replaced wholesale without
//! touching the registry.

use heapless::Vec;

use crate::device::{Vpin, VpinRange};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum entries in a seed table
pub const MAX_SEED_ENTRIES: usize = 8;

/// Kind of backend a seed entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeedKind {
    /// Direct microcontroller lines (the built-in direct-pin driver)
    DirectLines,
    /// I2C PWM expander block
    PwmExpander,
    /// I2C port expander block
    PortExpander,
}

/// One device to register at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedEntry {
    /// Backend kind
    pub kind: SeedKind,
    /// First vpin of the claimed range
    pub first_vpin: Vpin,
    /// Number of vpins claimed
    pub pin_count: u16,
    /// 7-bit I2C address (expander entries only)
    pub bus_address: Option<u8>,
}

impl SeedEntry {
    /// Entry for the direct-pin driver
    pub const fn direct(first_vpin: Vpin, pin_count: u16) -> Self {
        Self {
            kind: SeedKind::DirectLines,
            first_vpin,
            pin_count,
            bus_address: None,
        }
    }

    /// Entry for a PWM expander block
    pub const fn pwm_expander(first_vpin: Vpin, pin_count: u16, bus_address: u8) -> Self {
        Self {
            kind: SeedKind::PwmExpander,
            first_vpin,
            pin_count,
            bus_address: Some(bus_address),
        }
    }

    /// Entry for a port expander block
    pub const fn port_expander(first_vpin: Vpin, pin_count: u16, bus_address: u8) -> Self {
        Self {
            kind: SeedKind::PortExpander,
            first_vpin,
            pin_count,
            bus_address: Some(bus_address),
        }
    }

    /// The vpin range this entry claims
    pub const fn range(&self) -> VpinRange {
        VpinRange::new(self.first_vpin, self.pin_count)
    }
}

/// Default seed table for this firmware
///
/// Direct lines on vpins 2-49, two PWM expander blocks on 100-131 and two
/// port expander blocks on 164-195.
pub const DEFAULT_SEED_TABLE: [SeedEntry; 5] = [
    SeedEntry::direct(2, 48),
    SeedEntry::pwm_expander(100, 16, 0x40),
    SeedEntry::pwm_expander(116, 16, 0x41),
    SeedEntry::port_expander(164, 16, 0x20),
    SeedEntry::port_expander(180, 16, 0x21),
];

/// Seed table: the devices to register at startup
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedConfig {
    /// Devices to register, in table order
    pub entries: Vec<SeedEntry, MAX_SEED_ENTRIES>,
}

impl SeedConfig {
    /// A table with no entries
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        let mut entries = Vec::new();
        for entry in DEFAULT_SEED_TABLE {
            let _ = entries.push(entry);
        }
        Self { entries }
    }
}
