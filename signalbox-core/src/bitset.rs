//! Packed per-pin bit set
//!
//! One bit per pin offset, used by drivers that record a flag for every
//! owned pin (the direct-pin driver keeps its pull-up configuration here).
//! Keeps the pin-to-bit mapping in one audited place instead of scattering
//! byte arithmetic through the drivers.

use alloc::vec;
use alloc::vec::Vec;

/// Fixed-size bit set indexed by pin offset
///
/// All bits start false. Out-of-range offsets read as false and ignore
/// writes; the set never panics.
#[derive(Debug, Clone)]
pub struct PinBitSet {
    bits: Vec<u8>,
    len: usize,
}

impl PinBitSet {
    /// Create a set of `len` bits, all false
    pub fn new(len: usize) -> Self {
        Self {
            bits: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// Number of bits in the set
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the set holds no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the bit at `index` (false when out of range)
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.bits[index / 8] & (1 << (index % 8)) != 0
    }

    /// Set or clear the bit at `index` (ignored when out of range)
    pub fn set(&mut self, index: usize, value: bool) {
        if index >= self.len {
            return;
        }
        let mask = 1 << (index % 8);
        if value {
            self.bits[index / 8] |= mask;
        } else {
            self.bits[index / 8] &= !mask;
        }
    }
}
