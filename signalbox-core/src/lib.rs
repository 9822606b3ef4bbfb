//! Board-agnostic HAL dispatch core for the command station firmware
//!
//! Heterogeneous I/O backends (direct microcontroller lines, I2C port and
//! PWM expanders) are unified behind a single integer address space of
//! "virtual pins". This crate contains everything that does not depend on
//! specific hardware:
//!
//! - The device contract every backend implements
//! - The device registry and dispatcher facade
//! - The round-robin background-work scheduler
//! - The input-change notification chain
//! - Seed-table configuration types
//!
//! The chain of registered devices is owned as boxed trait objects, so the
//! crate requires `alloc` but not `std`.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod bitset;
pub mod config;
pub mod device;
pub mod notify;
pub mod registry;
pub mod scheduler;

pub use device::{ConfigKind, Device, DeviceIdentity, Vpin, VpinRange};
pub use registry::DeviceRegistry;
