//! Host-side property tests for the dispatch core

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use signalbox_core::bitset::PinBitSet;
use signalbox_core::device::{Device, Vpin, VpinRange};
use signalbox_core::registry::DeviceRegistry;

struct StubDevice {
    id: usize,
    range: VpinRange,
    ticks: Rc<RefCell<Vec<usize>>>,
}

impl Device for StubDevice {
    fn kind(&self) -> &'static str {
        "stub"
    }

    fn range(&self) -> VpinRange {
        self.range
    }

    fn write(&mut self, _vpin: Vpin, _value: i16) {}

    fn read(&mut self, _vpin: Vpin) -> bool {
        false
    }

    fn tick(&mut self, _now_micros: u64) {
        self.ticks.borrow_mut().push(self.id);
    }
}

proptest! {
    /// exists(v) is true iff some registered range contains v, and
    /// overlapping ranges are never rejected
    #[test]
    fn exists_iff_some_range_contains(
        ranges in prop::collection::vec((0u16..1000, 1u16..100), 0..8),
        probes in prop::collection::vec(0u16..1200, 16),
    ) {
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DeviceRegistry::new();
        for (id, (first, count)) in ranges.iter().enumerate() {
            registry.add_device(Box::new(StubDevice {
                id,
                range: VpinRange::new(*first, *count),
                ticks: Rc::clone(&ticks),
            }));
        }

        for vpin in probes {
            let expected = ranges
                .iter()
                .any(|(first, count)| VpinRange::new(*first, *count).contains(vpin));
            prop_assert_eq!(registry.exists(vpin), expected);
        }
    }

    /// N consecutive scheduler invocations tick each of N devices exactly
    /// once, in chain order, for every full round
    #[test]
    fn round_robin_is_fair(device_count in 1usize..20, rounds in 1usize..4) {
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let mut registry = DeviceRegistry::new();
        for id in 0..device_count {
            registry.add_device(Box::new(StubDevice {
                id,
                range: VpinRange::new((id * 10) as u16, 10),
                ticks: Rc::clone(&ticks),
            }));
        }

        for _ in 0..device_count * rounds {
            registry.tick(0);
        }

        // LIFO chain: highest id first within each round
        let expected_round: Vec<usize> = (0..device_count).rev().collect();
        let seen = ticks.borrow();
        for round in 0..rounds {
            let slice = &seen[round * device_count..(round + 1) * device_count];
            prop_assert_eq!(slice, expected_round.as_slice());
        }
    }

    /// The packed bit set behaves like a plain boolean array
    #[test]
    fn bitset_matches_model(
        len in 0usize..128,
        ops in prop::collection::vec((0usize..160, any::<bool>()), 0..64),
    ) {
        let mut set = PinBitSet::new(len);
        let mut model = vec![false; len];
        for (index, value) in ops {
            set.set(index, value);
            if index < len {
                model[index] = value;
            }
        }

        for (index, expected) in model.iter().enumerate() {
            prop_assert_eq!(set.get(index), *expected);
        }
        // One past the end always reads false
        prop_assert!(!set.get(len));
    }
}
