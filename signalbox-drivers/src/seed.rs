//! Default registry seeding
//!
//! Walks a seed table and registers the devices it names. The table is
//! plain configuration data (see `signalbox_core::config`); only the
//! direct-pin driver is constructed here. Expander entries are offered to
//! a caller-supplied factory because expander drivers live outside this
//! repository — a factory returning `None` simply skips the entry.

use alloc::boxed::Box;

use signalbox_core::config::{SeedConfig, SeedEntry, SeedKind};
use signalbox_core::device::Device;
use signalbox_core::registry::DeviceRegistry;
use signalbox_hal::lines::{LineMode, RawLines};

use crate::pins::DirectPins;

/// Populate a registry from a seed table
///
/// The first `DirectLines` entry consumes the raw-line backend and
/// registers [`DirectPins`]; any further `DirectLines` entries are skipped.
/// If a shared change-notification line was recorded on the registry, it
/// is programmed as a pulled-up input before the backend is handed over.
pub fn seed<L, F>(registry: &mut DeviceRegistry, lines: L, config: &SeedConfig, mut expanders: F)
where
    L: RawLines + 'static,
    F: FnMut(&SeedEntry) -> Option<Box<dyn Device>>,
{
    let mut lines = Some(lines);
    for entry in &config.entries {
        match entry.kind {
            SeedKind::DirectLines => {
                if let Some(mut lines) = lines.take() {
                    if let Some(line) = registry.gpio_interrupt_pin() {
                        lines.set_mode(line, LineMode::InputPullup);
                    }
                    registry.add_device(Box::new(DirectPins::new(lines, entry.range())));
                }
            }
            SeedKind::PwmExpander | SeedKind::PortExpander => {
                if let Some(device) = expanders(entry) {
                    registry.add_device(device);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signalbox_core::device::{Vpin, VpinRange};

    struct NullLines;

    impl RawLines for NullLines {
        fn set_mode(&mut self, _line: u16, _mode: LineMode) {}
        fn write(&mut self, _line: u16, _high: bool) {}
        fn read(&mut self, _line: u16) -> bool {
            false
        }
    }

    struct StubExpander {
        range: VpinRange,
    }

    impl Device for StubExpander {
        fn kind(&self) -> &'static str {
            "stub-expander"
        }

        fn range(&self) -> VpinRange {
            self.range
        }

        fn write(&mut self, _vpin: Vpin, _value: i16) {}

        fn read(&mut self, _vpin: Vpin) -> bool {
            false
        }
    }

    #[test]
    fn test_seed_default_table_with_expander_factory() {
        let mut registry = DeviceRegistry::new();
        seed(
            &mut registry,
            NullLines,
            &SeedConfig::default(),
            |entry| -> Option<Box<dyn Device>> {
                Some(Box::new(StubExpander {
                    range: entry.range(),
                }))
            },
        );

        assert_eq!(registry.device_count(), 5);
        // Direct lines
        assert!(registry.exists(2));
        assert!(registry.exists(49));
        assert!(!registry.exists(50));
        // PWM expander blocks at 100-131
        assert!(registry.exists(100));
        assert!(registry.exists(131));
        assert!(!registry.exists(132));
        // Port expander blocks at 164-195
        assert!(registry.exists(164));
        assert!(registry.exists(195));
        assert!(!registry.exists(196));
    }

    #[test]
    fn test_seed_skips_declined_expanders() {
        let mut registry = DeviceRegistry::new();
        seed(&mut registry, NullLines, &SeedConfig::default(), |_| None);

        assert_eq!(registry.device_count(), 1);
        assert!(registry.exists(10));
        assert!(!registry.exists(105));
    }

    #[test]
    fn test_seed_programs_interrupt_line() {
        use core::sync::atomic::{AtomicBool, Ordering};

        // The backend is consumed by DirectPins, so the observation has
        // to escape through a static
        static IRQ_PROGRAMMED: AtomicBool = AtomicBool::new(false);

        struct SpyLines;

        impl RawLines for SpyLines {
            fn set_mode(&mut self, line: u16, mode: LineMode) {
                if line == 3 && mode == LineMode::InputPullup {
                    IRQ_PROGRAMMED.store(true, Ordering::Relaxed);
                }
            }
            fn write(&mut self, _line: u16, _high: bool) {}
            fn read(&mut self, _line: u16) -> bool {
                false
            }
        }

        let mut registry = DeviceRegistry::new();
        registry.set_gpio_interrupt_pin(3);
        seed(&mut registry, SpyLines, &SeedConfig::default(), |_| None);

        assert!(IRQ_PROGRAMMED.load(Ordering::Relaxed));
    }
}
