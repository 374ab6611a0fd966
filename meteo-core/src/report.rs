//! Serial report formatting
//!
//! The report is line-oriented, human-readable text for a terminal; there
//! is no machine framing. Strings are fixed (French, like the deployed
//! station's labels) and values render with two decimals.

use core::fmt::Write;

use heapless::String;

use crate::station::{Frame, Unit};

/// Maximum length of one value line in bytes
pub const LINE_LEN: usize = 32;

/// First banner line, written before the sensor warm-up
pub const BANNER_INIT: &str = "Initialisation station météo...";

/// Second banner line, written once the sensor is ready
pub const BANNER_READY: &str = "Capteur DHT22 initialisé";

/// Separator written after the banner and after each display pass
pub const SEPARATOR: &str = "------------------";

/// Error line for a failed sensor read
pub const READ_ERROR: &str = "ERREUR: Lecture du capteur échouée!";

/// Temperature line for one display pass, e.g. `Temperature = 25.00 °C`
pub fn temperature_line(frame: &Frame) -> String<LINE_LEN> {
    let mut line = String::new();
    let _ = line.push_str("Temperature = ");
    write_fixed2(&mut line, frame.temperature_x100);
    let _ = line.push_str(match frame.unit {
        Unit::Celsius => " °C",
        Unit::Fahrenheit => " °F",
    });
    line
}

/// Humidity line, e.g. `Humidite = 60.00 %`
pub fn humidity_line(humidity_x10: u16) -> String<LINE_LEN> {
    let mut line = String::new();
    let _ = line.push_str("Humidite = ");
    write_fixed2(&mut line, i32::from(humidity_x10) * 10);
    let _ = line.push_str(" %");
    line
}

/// Render a 0.01-unit fixed-point value with two decimals
///
/// The sign is emitted separately so values in (-1, 0) keep it
/// (e.g. -50 renders as "-0.50").
fn write_fixed2(out: &mut String<LINE_LEN>, value_x100: i32) {
    if value_x100 < 0 {
        let _ = out.push('-');
    }
    let magnitude = value_x100.unsigned_abs();
    let _ = write!(out, "{}.{:02}", magnitude / 100, magnitude % 100);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::LedPattern;

    fn frame(unit: Unit, temperature_x100: i32) -> Frame {
        Frame {
            unit,
            temperature_x100,
            humidity_x10: 600,
            leds: LedPattern::for_unit(unit),
        }
    }

    #[test]
    fn celsius_line() {
        let line = temperature_line(&frame(Unit::Celsius, 2500));
        assert_eq!(line.as_str(), "Temperature = 25.00 °C");
    }

    #[test]
    fn fahrenheit_line() {
        let line = temperature_line(&frame(Unit::Fahrenheit, 7700));
        assert_eq!(line.as_str(), "Temperature = 77.00 °F");
    }

    #[test]
    fn humidity_line_renders_tenths() {
        assert_eq!(humidity_line(600).as_str(), "Humidite = 60.00 %");
        assert_eq!(humidity_line(505).as_str(), "Humidite = 50.50 %");
    }

    #[test]
    fn negative_temperatures_keep_their_sign() {
        let line = temperature_line(&frame(Unit::Celsius, -1010));
        assert_eq!(line.as_str(), "Temperature = -10.10 °C");

        // Sign survives even when the integer part is zero
        let line = temperature_line(&frame(Unit::Celsius, -50));
        assert_eq!(line.as_str(), "Temperature = -0.50 °C");
    }

    #[test]
    fn zero_renders_like_a_boot_value() {
        let line = temperature_line(&frame(Unit::Celsius, 0));
        assert_eq!(line.as_str(), "Temperature = 0.00 °C");
    }
}
