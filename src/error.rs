//! Error handling primitives for the ADS1115 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A channel, differential pair, or configuration value is out of range.
    InvalidArgument,
    /// The OS bit never reported "idle" within the conversion timeout.
    Timeout,
    /// The configuration register did not read back what `init` wrote.
    DeviceUnresponsive,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
