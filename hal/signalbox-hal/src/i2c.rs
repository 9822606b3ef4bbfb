//! I2C bus abstractions
//!
//! Expander drivers (port and PWM expanders) translate device-contract
//! calls into bus transactions through this trait, so they stay independent
//! of any particular board's I2C peripheral.

/// I2C bus master
///
/// Provides the transactions expander chips need: plain writes, plain
/// reads, and register reads via repeated start.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given 7-bit address
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given 7-bit address
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// Commonly used to select a register and read it back.
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error>;
}
