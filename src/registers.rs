//! Register map definitions for the ADS1115 converter.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{
    ComparatorLatch, ComparatorMode, ComparatorPolarity, ComparatorQueue, DataRate, Gain, Mode,
    Mux,
};

/// Register address of the conversion result.
pub const REG_CONVERSION: u8 = 0x00;
/// Register address of `CONFIG`.
pub const REG_CONFIG: u8 = 0x01;
/// Register address of `LO_THRESH`.
pub const REG_LO_THRESH: u8 = 0x02;
/// Register address of `HI_THRESH`.
pub const REG_HI_THRESH: u8 = 0x03;

/// Power-on reset value of `CONFIG`.
pub const CONFIG_RESET: u16 = 0x8583;

/// `HI_THRESH` value that turns ALERT/RDY into a conversion-ready strobe.
pub const READY_PIN_HI_THRESH: u16 = 0xFFFF;
/// `LO_THRESH` value that turns ALERT/RDY into a conversion-ready strobe.
pub const READY_PIN_LO_THRESH: u16 = 0x0000;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reset/default value defined by the datasheet.
    const RESET_VALUE: u16;
}

/// Bitfield representation of the `CONFIG` register (address `0x01`).
///
/// Fields are declared least-significant first; the bus carries the word
/// most-significant byte first, so convert through `u16` rather than
/// `into_bytes`.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigRegister {
    // Comparator queue and disable (bits 1:0).
    pub comp_queue: ComparatorQueue,
    // Latching comparator (bit 2).
    pub comp_latch: ComparatorLatch,
    // Comparator polarity (bit 3).
    pub comp_polarity: ComparatorPolarity,
    // Comparator mode (bit 4).
    pub comp_mode: ComparatorMode,
    // Data rate (bits 7:5).
    pub data_rate: DataRate,
    // Operating mode (bit 8).
    pub mode: Mode,
    // Programmable gain amplifier (bits 11:9).
    pub gain: Gain,
    // Input multiplexer (bits 14:12).
    pub mux: Mux,
    // Operational status: write 1 to start, reads 0 while converting (bit 15).
    pub os: bool,
}

impl ConfigRegister {
    /// Returns `true` once the device is idle (no conversion in progress).
    pub fn is_idle(&self) -> bool {
        self.os()
    }
}

impl Default for ConfigRegister {
    fn default() -> Self {
        Self::from(CONFIG_RESET)
    }
}

impl From<u16> for ConfigRegister {
    fn from(value: u16) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<ConfigRegister> for u16 {
    fn from(value: ConfigRegister) -> Self {
        u16::from_le_bytes(value.into_bytes())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigRegister {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ConfigRegister({=u16:#x})", u16::from(*self));
    }
}

impl Register for ConfigRegister {
    const ADDRESS: u8 = REG_CONFIG;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u16 = CONFIG_RESET;
}

/// Marker for the read-only conversion result register (address `0x00`).
pub struct Conversion;

impl Register for Conversion {
    const ADDRESS: u8 = REG_CONVERSION;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: u16 = 0x0000;
}

/// Marker for the `LO_THRESH` register (address `0x02`).
pub struct LoThresh;

impl Register for LoThresh {
    const ADDRESS: u8 = REG_LO_THRESH;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u16 = 0x8000;
}

/// Marker for the `HI_THRESH` register (address `0x03`).
pub struct HiThresh;

impl Register for HiThresh {
    const ADDRESS: u8 = REG_HI_THRESH;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: u16 = 0x7FFF;
}
