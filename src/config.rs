//! Configuration primitives for the ADS1115 driver.

use crate::params::{DataRate, Gain};

// Slack added on top of twice the nominal conversion time.
const TIMEOUT_MARGIN_US: u32 = 1_000;
// Default wait between two OS-bit polls.
const DEFAULT_POLL_INTERVAL_US: u32 = 100;

/// User-facing configuration for the ADS1115 converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Programmable gain amplifier (full-scale range) selection.
    pub gain: Gain,
    /// Data rate selection.
    pub data_rate: DataRate,
    /// Wait between two polls of the OS bit, in microseconds.
    pub poll_interval_us: u32,
    /// Upper bound on the wait for a conversion. `None` derives it from the data rate.
    pub conversion_timeout_us: Option<u32>,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is usable.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.poll_interval_us == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        if self.conversion_timeout_us == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }

    /// Returns the effective conversion timeout in microseconds.
    pub fn conversion_timeout_us(&self) -> u32 {
        self.conversion_timeout_us.unwrap_or_else(|| {
            self.data_rate
                .conversion_time_us()
                .saturating_mul(2)
                .saturating_add(TIMEOUT_MARGIN_US)
        })
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the gain.
    pub fn gain(mut self, gain: Gain) -> Self {
        self.config.gain = gain;
        self
    }

    /// Overrides the data rate.
    pub fn data_rate(mut self, data_rate: DataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Sets the wait between OS-bit polls.
    pub fn poll_interval_us(mut self, interval: u32) -> Self {
        self.config.poll_interval_us = interval;
        self
    }

    /// Sets a fixed conversion timeout instead of the rate-derived one.
    pub fn conversion_timeout_us(mut self, timeout: u32) -> Self {
        self.config.conversion_timeout_us = Some(timeout);
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gain: Gain::Fsr2_048V,
            data_rate: DataRate::Sps128,
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
            conversion_timeout_us: None,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The poll interval must be non-zero for the timeout to advance.
    ZeroPollInterval,
    /// An explicit timeout of zero would fail every conversion.
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_covers_twice_the_conversion_time() {
        let config = Config::default();
        assert_eq!(config.conversion_timeout_us(), 2 * 7_813 + 1_000);

        let slow = Config::new().data_rate(DataRate::Sps8).build();
        assert_eq!(slow.conversion_timeout_us(), 251_000);
    }

    #[test]
    fn explicit_timeout_overrides_rate() {
        let config = Config::new().conversion_timeout_us(500).build();
        assert_eq!(config.conversion_timeout_us(), 500);
    }

    #[test]
    fn validate_rejects_degenerate_polling() {
        assert_eq!(Config::new().build().validate(), Ok(()));
        assert_eq!(
            Config::new().poll_interval_us(0).build().validate(),
            Err(ConfigError::ZeroPollInterval)
        );
        assert_eq!(
            Config::new().conversion_timeout_us(0).build().validate(),
            Err(ConfigError::ZeroTimeout)
        );
    }
}
