//! Hardware driver implementations
//!
//! Concrete implementers of the device contract defined in signalbox-core:
//!
//! - The direct-pin driver over raw microcontroller lines (the reference
//!   leaf implementation, permanently built in)
//! - The default seeding routine that populates a registry from a seed
//!   table
//!
//! Expander drivers (I2C port/PWM chips) live outside this repository;
//! they implement the same contract and are handed to [`seed::seed`]
//! through its factory argument.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod pins;
pub mod seed;

pub use pins::DirectPins;
