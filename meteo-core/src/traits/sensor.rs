//! Climate sensor trait

use crate::measure::Measurement;

/// Errors that can occur when reading the climate sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer in time (missing presence pulse or a pulse
    /// that never ended)
    Timeout,
    /// Received frame failed checksum validation
    ChecksumMismatch,
}

/// Trait for combined temperature/humidity sensors
///
/// One exchange yields both metrics; a failed exchange invalidates both.
pub trait ClimateSensor {
    /// Read the current temperature and humidity
    ///
    /// Takes `&mut self` because the exchange drives the sensor bus.
    fn read(&mut self) -> Result<Measurement, SensorError>;
}
