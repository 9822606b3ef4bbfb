//! Signalbox Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that are implemented by
//! board-specific backends. The dispatch core and the device drivers only
//! ever talk to these traits, so the same firmware runs on any board that
//! can provide them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Dispatch core (signalbox-core)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  signalbox-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  board GPIO   │       │   I2C bus     │
//! │   backend     │       │   backend     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`lines::RawLines`] - Indexed bank of raw microcontroller I/O lines
//! - [`i2c::I2cBus`] - I2C bus operations (used by expander drivers)

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod lines;

// Re-export key traits at crate root for convenience
pub use i2c::I2cBus;
pub use lines::{LineMode, RawLines};
