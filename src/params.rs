//! Strongly typed parameter enumerations for the ADS1115 driver.
//!
//! These enums map directly to datasheet field encodings of the configuration
//! register and are used across [`Config`](crate::config::Config) and the
//! high-level driver APIs.
//!
//! # Examples
//!
//! ```rust
//! use ads1115::params::{DataRate, Gain};
//!
//! assert_eq!(Gain::Fsr4_096V.full_scale_volts(), 4.096);
//! assert_eq!(DataRate::Sps128.sps(), 128);
//! ```

use modular_bitfield::prelude::Specifier;

/// 7-bit I2C addresses selected by strapping the ADDR pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveAddress {
    /// ADDR tied to GND (0x48).
    #[default]
    Gnd,
    /// ADDR tied to VDD (0x49).
    Vdd,
    /// ADDR tied to SDA (0x4A).
    Sda,
    /// ADDR tied to SCL (0x4B).
    Scl,
}

impl SlaveAddress {
    /// Returns the 7-bit bus address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Gnd => 0x48,
            Self::Vdd => 0x49,
            Self::Sda => 0x4A,
            Self::Scl => 0x4B,
        }
    }
}

/// Input multiplexer selections encoded in `CONFIG[14:12]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Mux {
    /// AINP = AIN0, AINN = AIN1.
    Ain0Ain1 = 0b000,
    /// AINP = AIN0, AINN = AIN3.
    Ain0Ain3 = 0b001,
    /// AINP = AIN1, AINN = AIN3.
    Ain1Ain3 = 0b010,
    /// AINP = AIN2, AINN = AIN3.
    Ain2Ain3 = 0b011,
    /// AINP = AIN0, AINN = GND.
    Ain0Gnd = 0b100,
    /// AINP = AIN1, AINN = GND.
    Ain1Gnd = 0b101,
    /// AINP = AIN2, AINN = GND.
    Ain2Gnd = 0b110,
    /// AINP = AIN3, AINN = GND.
    Ain3Gnd = 0b111,
}

/// Programmable gain amplifier selections encoded in `CONFIG[11:9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum Gain {
    /// ±6.144 V full-scale range.
    Fsr6_144V = 0b000,
    /// ±4.096 V full-scale range.
    Fsr4_096V = 0b001,
    /// ±2.048 V full-scale range (power-on default).
    Fsr2_048V = 0b010,
    /// ±1.024 V full-scale range.
    Fsr1_024V = 0b011,
    /// ±0.512 V full-scale range.
    Fsr0_512V = 0b100,
    /// ±0.256 V full-scale range.
    Fsr0_256V = 0b101,
}

impl Gain {
    /// Returns the full-scale range in volts.
    pub const fn full_scale_volts(self) -> f32 {
        match self {
            Self::Fsr6_144V => 6.144,
            Self::Fsr4_096V => 4.096,
            Self::Fsr2_048V => 2.048,
            Self::Fsr1_024V => 1.024,
            Self::Fsr0_512V => 0.512,
            Self::Fsr0_256V => 0.256,
        }
    }

    /// Returns the size of one code in microvolts.
    pub fn lsb_microvolts(self) -> f32 {
        self.full_scale_volts() * 1_000_000.0 / 32_768.0
    }
}

impl Default for Gain {
    fn default() -> Self {
        Self::Fsr2_048V
    }
}

/// Operating mode bit `CONFIG[8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum Mode {
    /// Continuous-conversion mode.
    Continuous = 0,
    /// Single-shot mode or power-down state.
    SingleShot = 1,
}

/// Data rate selections encoded in `CONFIG[7:5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum DataRate {
    /// 8 samples per second.
    Sps8 = 0b000,
    /// 16 samples per second.
    Sps16 = 0b001,
    /// 32 samples per second.
    Sps32 = 0b010,
    /// 64 samples per second.
    Sps64 = 0b011,
    /// 128 samples per second (power-on default).
    Sps128 = 0b100,
    /// 250 samples per second.
    Sps250 = 0b101,
    /// 475 samples per second.
    Sps475 = 0b110,
    /// 860 samples per second.
    Sps860 = 0b111,
}

impl DataRate {
    /// Returns the nominal rate in samples per second.
    pub const fn sps(self) -> u32 {
        match self {
            Self::Sps8 => 8,
            Self::Sps16 => 16,
            Self::Sps32 => 32,
            Self::Sps64 => 64,
            Self::Sps128 => 128,
            Self::Sps250 => 250,
            Self::Sps475 => 475,
            Self::Sps860 => 860,
        }
    }

    /// Returns the nominal single-shot conversion time in microseconds, rounded up.
    pub const fn conversion_time_us(self) -> u32 {
        1_000_000u32.div_ceil(self.sps())
    }
}

impl Default for DataRate {
    fn default() -> Self {
        Self::Sps128
    }
}

/// Comparator mode bit `CONFIG[4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum ComparatorMode {
    /// Traditional comparator with hysteresis.
    Traditional = 0,
    /// Window comparator.
    Window = 1,
}

/// Comparator polarity bit `CONFIG[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum ComparatorPolarity {
    /// ALERT/RDY active low.
    ActiveLow = 0,
    /// ALERT/RDY active high.
    ActiveHigh = 1,
}

/// Latching comparator bit `CONFIG[2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 1]
pub enum ComparatorLatch {
    /// ALERT/RDY follows the comparator.
    NonLatching = 0,
    /// ALERT/RDY stays asserted until the conversion register is read.
    Latching = 1,
}

/// Comparator queue selections encoded in `CONFIG[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum ComparatorQueue {
    /// Assert after one conversion.
    AssertAfterOne = 0b00,
    /// Assert after two conversions.
    AssertAfterTwo = 0b01,
    /// Assert after four conversions.
    AssertAfterFour = 0b10,
    /// Comparator disabled, ALERT/RDY high impedance (power-on default).
    Disabled = 0b11,
}

/// Single-ended input channel measured against GND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// AIN0.
    A0,
    /// AIN1.
    A1,
    /// AIN2.
    A2,
    /// AIN3.
    A3,
}

impl Channel {
    /// Multiplexer setting routing this channel against GND.
    pub const fn mux(self) -> Mux {
        match self {
            Self::A0 => Mux::Ain0Gnd,
            Self::A1 => Mux::Ain1Gnd,
            Self::A2 => Mux::Ain2Gnd,
            Self::A3 => Mux::Ain3Gnd,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidInput;

    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::A0),
            1 => Ok(Self::A1),
            2 => Ok(Self::A2),
            3 => Ok(Self::A3),
            _ => Err(InvalidInput),
        }
    }
}

/// Input pairs supported for differential measurements (positive, negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DifferentialPair {
    /// AIN0 - AIN1.
    Ain0Ain1,
    /// AIN0 - AIN3.
    Ain0Ain3,
    /// AIN1 - AIN3.
    Ain1Ain3,
    /// AIN2 - AIN3.
    Ain2Ain3,
}

impl DifferentialPair {
    /// Multiplexer setting for this pair.
    pub const fn mux(self) -> Mux {
        match self {
            Self::Ain0Ain1 => Mux::Ain0Ain1,
            Self::Ain0Ain3 => Mux::Ain0Ain3,
            Self::Ain1Ain3 => Mux::Ain1Ain3,
            Self::Ain2Ain3 => Mux::Ain2Ain3,
        }
    }
}

impl TryFrom<(u8, u8)> for DifferentialPair {
    type Error = InvalidInput;

    fn try_from(value: (u8, u8)) -> core::result::Result<Self, Self::Error> {
        match value {
            (0, 1) => Ok(Self::Ain0Ain1),
            (0, 3) => Ok(Self::Ain0Ain3),
            (1, 3) => Ok(Self::Ain1Ain3),
            (2, 3) => Ok(Self::Ain2Ain3),
            _ => Err(InvalidInput),
        }
    }
}

/// Returned when a channel index or input pair has no multiplexer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidInput;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_indices_map_to_single_ended_mux() {
        let expected = [Mux::Ain0Gnd, Mux::Ain1Gnd, Mux::Ain2Gnd, Mux::Ain3Gnd];
        for (index, mux) in expected.iter().enumerate() {
            let channel = Channel::try_from(index as u8).unwrap();
            assert_eq!(channel.mux(), *mux);
        }
        assert_eq!(Channel::try_from(4u8), Err(InvalidInput));
        assert_eq!(Channel::try_from(u8::MAX), Err(InvalidInput));
    }

    #[test]
    fn only_supported_pairs_convert() {
        assert_eq!(DifferentialPair::try_from((0, 1)), Ok(DifferentialPair::Ain0Ain1));
        assert_eq!(DifferentialPair::try_from((2, 3)), Ok(DifferentialPair::Ain2Ain3));
        assert_eq!(DifferentialPair::try_from((1, 0)), Err(InvalidInput));
        assert_eq!(DifferentialPair::try_from((1, 2)), Err(InvalidInput));
    }

    #[test]
    fn conversion_time_scales_with_rate() {
        assert_eq!(DataRate::Sps8.conversion_time_us(), 125_000);
        assert_eq!(DataRate::Sps128.conversion_time_us(), 7_813);
        assert_eq!(DataRate::Sps860.conversion_time_us(), 1_163);
    }

    #[test]
    fn default_gain_lsb_is_62_5_microvolts() {
        assert!((Gain::default().lsb_microvolts() - 62.5).abs() < 1e-3);
    }

    #[test]
    fn slave_addresses_follow_addr_strapping() {
        assert_eq!(SlaveAddress::Gnd.addr(), 0x48);
        assert_eq!(SlaveAddress::Vdd.addr(), 0x49);
        assert_eq!(SlaveAddress::Sda.addr(), 0x4A);
        assert_eq!(SlaveAddress::Scl.addr(), 0x4B);
    }
}
