//! Bus interface abstraction for the ADS1115 driver.

pub mod i2c;

/// Abstraction over the 16-bit register access required by the driver.
pub trait Ads1115Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a 16-bit register, most-significant byte first.
    fn write_register(&mut self, register: u8, value: u16) -> core::result::Result<(), Self::Error>;

    /// Reads a 16-bit register, most-significant byte first.
    fn read_register(&mut self, register: u8) -> core::result::Result<u16, Self::Error>;
}
