//! Fixed-point measurement types
//!
//! The DHT22 frames temperature and humidity as integers in 0.1 units, so
//! the station keeps that representation instead of converting to floats.
//! Fahrenheit is derived in 0.01 units: a tenth of a degree Celsius maps to
//! exactly 18 hundredths of a degree Fahrenheit, so `F = C * 1.8 + 32`
//! holds without rounding.

/// One valid sensor reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Temperature in 0.1 °C units (e.g. 25.3 °C is 253)
    pub celsius_x10: i16,
    /// Relative humidity in 0.1 % units (e.g. 60.0 % is 600)
    pub humidity_x10: u16,
}

impl Measurement {
    /// Boot-time placeholder shown until the first successful sample
    pub const ZERO: Self = Self {
        celsius_x10: 0,
        humidity_x10: 0,
    };

    /// Temperature in 0.01 °C units
    pub fn celsius_x100(&self) -> i32 {
        self.celsius_x10 as i32 * 10
    }

    /// Temperature converted to 0.01 °F units
    pub fn fahrenheit_x100(&self) -> i32 {
        self.celsius_x10 as i32 * 18 + 3200
    }
}
