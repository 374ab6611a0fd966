//! GPIO pin abstractions
//!
//! Provides traits for the digital pins the station uses: the unit-select
//! push-button, the two status LEDs, and the single-wire sensor data line.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Open-drain line with a pull-up
///
/// Used for single-wire buses where both the host and the peripheral drive
/// the same line. The line is never driven high: `set_low` sinks it, and
/// `release` hands it back to the pull-up (and the peripheral).
pub trait OpenDrainPin {
    /// Actively drive the line low
    fn set_low(&mut self);

    /// Stop driving the line; the pull-up takes it high unless the
    /// peripheral holds it down
    fn release(&mut self);

    /// Read the current line level
    fn is_high(&self) -> bool;

    /// Check if the line currently reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
