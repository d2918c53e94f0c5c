//! High-level ADS1115 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Ads1115Interface;
use crate::params::{
    Channel,
    ComparatorLatch,
    ComparatorMode,
    ComparatorPolarity,
    ComparatorQueue,
    DataRate,
    DifferentialPair,
    Gain,
    Mode,
    Mux,
    SlaveAddress,
};
use crate::registers::{
    ConfigRegister,
    Conversion,
    HiThresh,
    LoThresh,
    Register,
    READY_PIN_HI_THRESH,
    READY_PIN_LO_THRESH,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Codes spanning one half of the bipolar output range.
const HALF_SCALE_CODES: f32 = 32_768.0;

/// High-level synchronous driver for the ADS1115 converter.
///
/// The driver keeps a shadow of the `CONFIG` register. Gain and data rate
/// changes only touch the shadow and reach the device with the next write.
/// Every operation takes `&mut self`; sharing one device between threads
/// needs external serialization.
pub struct Ads1115<IFACE> {
    interface: IFACE,
    config: Config,
    shadow: ConfigRegister,
}

impl<IFACE> Ads1115<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    ///
    /// No bus traffic happens here; call [`init`](Self::init) to force the
    /// device into a known state.
    pub fn new(interface: IFACE, config: Config) -> Self {
        let shadow = ConfigRegister::default()
            .with_gain(config.gain)
            .with_data_rate(config.data_rate);

        Self {
            interface,
            config,
            shadow,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    // ==================================================================
    // == Local Configuration ===========================================
    // ==================================================================
    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the shadow `CONFIG` word as last built by the driver.
    pub fn config_word(&self) -> u16 {
        u16::from(self.shadow)
    }

    /// Returns the selected gain.
    pub fn gain(&self) -> Gain {
        self.config.gain
    }

    /// Selects the full-scale range used by the next conversion.
    pub fn set_gain(&mut self, gain: Gain) {
        self.config.gain = gain;
        self.shadow.set_gain(gain);
    }

    /// Returns the selected data rate.
    pub fn data_rate(&self) -> DataRate {
        self.config.data_rate
    }

    /// Selects the data rate used by the next conversion.
    pub fn set_data_rate(&mut self, data_rate: DataRate) {
        self.config.data_rate = data_rate;
        self.shadow.set_data_rate(data_rate);
    }

    /// Scales a raw conversion result to volts using the selected gain.
    pub fn raw_to_voltage(&self, raw: i16) -> f32 {
        raw as f32 * self.config.gain.full_scale_volts() / HALF_SCALE_CODES
    }
}

impl<I2C> Ads1115<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SlaveAddress, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Ads1115<IFACE>
where
    IFACE: Ads1115Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Forces the device into single-shot mode with the configured gain and
    /// data rate and the comparator disabled, then reads `CONFIG` back.
    ///
    /// Returns [`Error::DeviceUnresponsive`] when the read-back differs from
    /// the written word in any bit other than OS.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.config.validate().map_err(|_| Error::InvalidArgument)?;

        self.shadow.set_mode(Mode::SingleShot);
        self.shadow.set_comp_mode(ComparatorMode::Traditional);
        self.shadow.set_comp_polarity(ComparatorPolarity::ActiveLow);
        self.shadow.set_comp_latch(ComparatorLatch::NonLatching);
        self.shadow.set_comp_queue(ComparatorQueue::Disabled);
        self.write_config(false)?;

        let readback = self.read_config_register()?;
        if readback.with_os(false) != self.shadow {
            warn!(
                "CONFIG read back {=u16:#x}, wrote {=u16:#x}",
                u16::from(readback),
                u16::from(self.shadow)
            );
            return Err(Error::DeviceUnresponsive);
        }

        debug!("ADS1115 initialized with CONFIG {=u16:#x}", u16::from(self.shadow));
        Ok(())
    }

    // ==================================================================
    // == Conversions ===================================================
    // ==================================================================
    /// Measures single-ended channel `channel` (0-3) against GND.
    ///
    /// Any other index yields [`Error::InvalidArgument`] without touching the bus.
    pub fn read_channel(&mut self, channel: u8, delay: &mut impl DelayNs) -> Result<u16, CommE> {
        let channel = Channel::try_from(channel).map_err(|_| Error::InvalidArgument)?;
        self.read_single_ended(channel, delay)
    }

    /// Measures a single-ended channel against GND.
    pub fn read_single_ended(
        &mut self,
        channel: Channel,
        delay: &mut impl DelayNs,
    ) -> Result<u16, CommE> {
        self.convert(channel.mux(), delay)
    }

    /// Measures the voltage difference across a supported input pair.
    pub fn read_differential(
        &mut self,
        pair: DifferentialPair,
        delay: &mut impl DelayNs,
    ) -> Result<i16, CommE> {
        // Differential results are two's complement.
        self.convert(pair.mux(), delay).map(|raw| raw as i16)
    }

    /// Measures `AIN{positive} - AIN{negative}`.
    ///
    /// Only (0, 1), (0, 3), (1, 3) and (2, 3) exist on the multiplexer.
    pub fn read_differential_pins(
        &mut self,
        positive: u8,
        negative: u8,
        delay: &mut impl DelayNs,
    ) -> Result<i16, CommE> {
        let pair = DifferentialPair::try_from((positive, negative))
            .map_err(|_| Error::InvalidArgument)?;
        self.read_differential(pair, delay)
    }

    /// Measures a single-ended channel and scales the result to volts.
    pub fn read_channel_voltage(
        &mut self,
        channel: u8,
        delay: &mut impl DelayNs,
    ) -> Result<f32, CommE> {
        let raw = self.read_channel(channel, delay)?;
        Ok(self.raw_to_voltage(raw as i16))
    }

    /// Measures a differential pair and scales the result to volts.
    pub fn read_differential_voltage(
        &mut self,
        pair: DifferentialPair,
        delay: &mut impl DelayNs,
    ) -> Result<f32, CommE> {
        let raw = self.read_differential(pair, delay)?;
        Ok(self.raw_to_voltage(raw))
    }

    // ==================================================================
    // == ALERT/RDY Pin =================================================
    // ==================================================================
    /// Turns ALERT/RDY into a conversion-ready strobe.
    ///
    /// Sets the threshold registers so the comparator fires on every
    /// conversion and asserts after one conversion. Detecting the pin edge is
    /// left to the caller.
    pub fn enable_ready_pin(&mut self) -> Result<(), CommE> {
        self.write_register::<HiThresh>(READY_PIN_HI_THRESH)?;
        self.write_register::<LoThresh>(READY_PIN_LO_THRESH)?;

        self.shadow.set_comp_queue(ComparatorQueue::AssertAfterOne);
        self.write_config(false)
    }

    /// Disables the comparator and returns ALERT/RDY to high impedance.
    pub fn disable_ready_pin(&mut self) -> Result<(), CommE> {
        self.shadow.set_comp_queue(ComparatorQueue::Disabled);
        self.write_config(false)
    }

    // ==================================================================
    // == Register Access ===============================================
    // ==================================================================
    /// Reads the device `CONFIG` register without touching the shadow.
    pub fn read_config_register(&mut self) -> Result<ConfigRegister, CommE> {
        self.read_register::<ConfigRegister>().map(ConfigRegister::from)
    }

    /// Reads the `(LO_THRESH, HI_THRESH)` register pair.
    pub fn read_thresholds(&mut self) -> Result<(i16, i16), CommE> {
        let low = self.read_register::<LoThresh>()?;
        let high = self.read_register::<HiThresh>()?;
        Ok((low as i16, high as i16))
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================

    /// Single-shot handshake: trigger, wait for OS, fetch the result.
    fn convert(&mut self, mux: Mux, delay: &mut impl DelayNs) -> Result<u16, CommE> {
        self.config.validate().map_err(|_| Error::InvalidArgument)?;

        self.shadow.set_mux(mux);
        self.write_config(true)?;
        trace!("conversion started with CONFIG {=u16:#x}", u16::from(self.shadow));

        self.wait_until_idle(delay)?;

        let raw = self.read_register::<Conversion>()?;
        trace!("conversion result {=u16:#x}", raw);
        Ok(raw)
    }

    fn wait_until_idle(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let timeout_us = self.config.conversion_timeout_us();
        let interval_us = self.config.poll_interval_us;
        let mut waited_us: u32 = 0;

        loop {
            if self.read_config_register()?.is_idle() {
                return Ok(());
            }

            if waited_us >= timeout_us {
                warn!("conversion not done after {=u32} us", waited_us);
                return Err(Error::Timeout);
            }

            delay.delay_us(interval_us);
            waited_us = waited_us.saturating_add(interval_us);
        }
    }

    fn write_config(&mut self, start: bool) -> Result<(), CommE> {
        self.shadow.set_os(start);
        self.write_register::<ConfigRegister>(u16::from(self.shadow))
    }

    fn write_register<R: Register>(&mut self, value: u16) -> Result<(), CommE> {
        self
            .interface
            .write_register(R::ADDRESS, value)
            .map_err(Error::from)
    }

    fn read_register<R: Register>(&mut self) -> Result<u16, CommE> {
        self
            .interface
            .read_register(R::ADDRESS)
            .map_err(Error::from)
    }
}
