//! Direct-pin driver
//!
//! Drives the microcontroller's own I/O lines through the [`RawLines`]
//! bank. For this driver the vpin number and the raw line number coincide;
//! the claimed range simply reserves a block of the board's pins.
//!
//! A line's direction is not cached: every read re-programs the line as an
//! input (pulled-up or plain, from the recorded configuration bit) right
//! before sampling, and every write re-programs it as an output. Simplicity
//! is favoured over avoiding redundant mode writes.

use signalbox_core::bitset::PinBitSet;
use signalbox_core::device::{ConfigKind, Device, Vpin, VpinRange};
use signalbox_hal::lines::{LineMode, RawLines};

/// Built-in driver for directly addressable lines
///
/// Permanent: never deletable at runtime.
pub struct DirectPins<L> {
    range: VpinRange,
    lines: L,
    /// One pull-up bit per owned pin, default off
    pullups: PinBitSet,
}

impl<L: RawLines> DirectPins<L> {
    /// Create a driver claiming `range`, all pull-ups off
    pub fn new(lines: L, range: VpinRange) -> Self {
        Self {
            range,
            lines,
            pullups: PinBitSet::new(range.count as usize),
        }
    }

    /// Bit offset of a vpin within the claimed range
    ///
    /// The dispatcher never forwards a vpin outside the range; an
    /// out-of-range vpin wraps to an offset the bit set ignores.
    fn offset(&self, vpin: Vpin) -> usize {
        vpin.wrapping_sub(self.range.first) as usize
    }

    /// Input mode for a vpin, from its recorded pull-up bit
    fn input_mode(&self, vpin: Vpin) -> LineMode {
        if self.pullups.get(self.offset(vpin)) {
            LineMode::InputPullup
        } else {
            LineMode::Input
        }
    }
}

impl<L: RawLines> Device for DirectPins<L> {
    fn kind(&self) -> &'static str {
        "direct"
    }

    fn range(&self) -> VpinRange {
        self.range
    }

    fn configure(&mut self, vpin: Vpin, kind: ConfigKind, params: &[i16]) -> bool {
        // Only input configuration with exactly one parameter (pull-up
        // flag) is understood; anything else fails without side effects.
        if kind != ConfigKind::Input || params.len() != 1 {
            return false;
        }
        let pullup = params[0] != 0;
        let offset = self.offset(vpin);
        self.pullups.set(offset, pullup);
        self.lines.set_mode(vpin, self.input_mode(vpin));
        true
    }

    fn write(&mut self, vpin: Vpin, value: i16) {
        // Level first, then direction, so the line never glitches through
        // the wrong level while becoming an output
        self.lines.write(vpin, value != 0);
        self.lines.set_mode(vpin, LineMode::Output);
    }

    fn read(&mut self, vpin: Vpin) -> bool {
        self.lines.set_mode(vpin, self.input_mode(vpin));
        self.lines.read(vpin)
    }
}
