//! Raw I/O line abstractions
//!
//! A board backend exposes its directly addressable microcontroller lines
//! as one indexed bank rather than as individual pin objects: the dispatch
//! core addresses lines by number, and drivers switch a line between input
//! and output at runtime.

/// Electrical mode of a raw line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    /// High-impedance input
    Input,
    /// Input with the internal pull-up resistor enabled
    InputPullup,
    /// Push-pull output
    Output,
}

/// Indexed bank of raw I/O lines
///
/// Implementations map the line number directly onto the board's own pin
/// numbering. Line numbers outside the board's range must be ignored
/// (writes/mode changes do nothing, reads return false); the caller is
/// expected to stay within its registered range.
pub trait RawLines {
    /// Program the electrical mode of a line
    fn set_mode(&mut self, line: u16, mode: LineMode);

    /// Drive a line high (true) or low (false)
    ///
    /// Only meaningful for lines in [`LineMode::Output`].
    fn write(&mut self, line: u16, high: bool);

    /// Sample the current level of a line
    fn read(&mut self, line: u16) -> bool;
}
