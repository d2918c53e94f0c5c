//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Ads1115Interface;
use crate::params::SlaveAddress;

/// I2C-based interface implementation for the ADS1115 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device strapped at `address`.
    pub const fn new(i2c: I2C, address: SlaveAddress) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the 7-bit address used for every transaction.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Ads1115Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u16) -> core::result::Result<(), Self::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c.write(self.address, &[register, msb, lsb])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::I2cInterface;
    use crate::interface::Ads1115Interface;
    use crate::params::SlaveAddress;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn write_register_sends_pointer_then_msb_first() {
        let expectations = [I2cTransaction::write(0x48, vec![0x01, 0x85, 0x83])];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), SlaveAddress::Gnd);

        interface.write_register(0x01, 0x8583).unwrap();
        i2c.done();
    }

    #[test]
    fn read_register_assembles_msb_first() {
        let expectations = [I2cTransaction::write_read(0x4B, vec![0x00], vec![0xAB, 0xCD])];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), SlaveAddress::Scl);

        assert_eq!(interface.read_register(0x00).unwrap(), 0xABCD);
        i2c.done();
    }

    #[test]
    fn bus_errors_pass_through() {
        let expectations = [
            I2cTransaction::write(0x49, vec![0x02, 0x00, 0x00]).with_error(ErrorKind::Other),
            I2cTransaction::write_read(0x49, vec![0x03], vec![0x00, 0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), SlaveAddress::Vdd);

        assert_eq!(interface.write_register(0x02, 0), Err(ErrorKind::Other));
        assert_eq!(interface.read_register(0x03), Err(ErrorKind::Other));
        i2c.done();
    }

    /// Register file that stores writes and serves them back on reads.
    struct EchoBus {
        registers: [u16; 4],
        pointer: u8,
        written: Vec<Vec<u8>>,
    }

    impl EchoBus {
        fn new() -> Self {
            Self {
                registers: [0; 4],
                pointer: 0,
                written: Vec::new(),
            }
        }
    }

    impl ErrorType for EchoBus {
        type Error = Infallible;
    }

    impl I2c for EchoBus {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            assert_eq!(address, 0x48, "unexpected device address");

            for operation in operations.iter_mut() {
                match operation {
                    Operation::Write(data) => {
                        self.written.push(data.to_vec());
                        let (pointer, payload) = data.split_first().expect("empty write");
                        self.pointer = *pointer;
                        if let [msb, lsb] = payload {
                            self.registers[*pointer as usize] = u16::from_be_bytes([*msb, *lsb]);
                        } else {
                            assert!(payload.is_empty(), "payload must be two bytes");
                        }
                    }
                    Operation::Read(buf) => {
                        assert_eq!(buf.len(), 2, "register reads are two bytes");
                        buf.copy_from_slice(&self.registers[self.pointer as usize].to_be_bytes());
                    }
                }
            }

            Ok(())
        }
    }

    #[test]
    fn register_round_trip_preserves_byte_order() {
        let mut interface = I2cInterface::new(EchoBus::new(), SlaveAddress::Gnd);

        interface.write_register(0x01, 0x8583).unwrap();
        assert_eq!(interface.read_register(0x01).unwrap(), 0x8583);

        let bus = interface.release();
        assert_eq!(bus.written, vec![vec![0x01, 0x85, 0x83], vec![0x01]]);
    }

    #[test]
    fn address_follows_strapping() {
        let expectations: [I2cTransaction; 0] = [];
        let mut i2c = I2cMock::new(&expectations);
        let interface = I2cInterface::new(i2c.clone(), SlaveAddress::Sda);
        assert_eq!(interface.address(), 0x4A);
        i2c.done();
    }
}
