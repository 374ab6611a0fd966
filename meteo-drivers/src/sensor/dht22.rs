//! DHT22 temperature/humidity sensor
//!
//! Single-wire protocol: the host pulls the line low to request a reading,
//! the sensor answers with an 80 µs low / 80 µs high presence pulse and
//! then sends 40 data bits. Each bit starts with a ~50 µs low phase; the
//! length of the following high phase encodes the value (~26 µs for a 0,
//! ~70 µs for a 1).
//!
//! Frame layout: humidity (big-endian u16, 0.1 % units), temperature
//! (big-endian u16, 0.1 °C units, sign in the top bit), checksum (low byte
//! of the sum of the first four bytes).

use embedded_hal::delay::DelayNs;

use meteo_core::measure::Measurement;
use meteo_core::traits::{ClimateSensor, SensorError};
use meteo_hal::gpio::OpenDrainPin;

/// Host start signal: hold the line low at least 1 ms (datasheet: 1-20 ms)
const START_SIGNAL_LOW_US: u32 = 3_000;
/// Longest wait for the sensor to claim the line after release (~40 µs)
const RESPONSE_GAP_TIMEOUT_US: u32 = 45;
/// Longest plausible presence pulse phase (nominal 80 µs)
const RESPONSE_TIMEOUT_US: u32 = 85;
/// Longest plausible bit low phase (nominal 50 µs)
const BIT_LOW_TIMEOUT_US: u32 = 56;
/// Longest plausible bit high phase (nominal 70 µs for a 1)
const BIT_HIGH_TIMEOUT_US: u32 = 75;
/// High phases longer than this are ones
const BIT_ONE_THRESHOLD_US: u32 = 40;

/// Bit-banged DHT22 driver
///
/// Generic over the data line and a delay source. The line must behave as
/// open-drain with a pull-up: `release()` lets it float high, `set_low()`
/// sinks it.
pub struct Dht22<P, D> {
    line: P,
    delay: D,
}

impl<P, D> Dht22<P, D> {
    /// Create a driver over an idle (released) data line
    pub fn new(line: P, delay: D) -> Self {
        Self { line, delay }
    }
}

impl<P: OpenDrainPin, D: DelayNs> Dht22<P, D> {
    /// Poll at 1 µs until the line leaves `level`
    ///
    /// Returns the time spent at `level` in µs, or `Timeout` when the
    /// phase outlives `timeout_us`.
    fn wait_while(&mut self, level: bool, timeout_us: u32) -> Result<u32, SensorError> {
        let mut elapsed_us = 0;
        while self.line.is_high() == level {
            if elapsed_us > timeout_us {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed_us += 1;
        }
        Ok(elapsed_us)
    }

    /// Run one 40-bit exchange and return the raw frame
    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        // Start signal: drive low, then hand the line back to the sensor
        self.line.set_low();
        self.delay.delay_us(START_SIGNAL_LOW_US);
        self.line.release();

        // Presence pulse: the sensor claims the line, holds it low 80 µs,
        // then high 80 µs
        self.wait_while(true, RESPONSE_GAP_TIMEOUT_US)?;
        self.wait_while(false, RESPONSE_TIMEOUT_US)?;
        self.wait_while(true, RESPONSE_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            self.wait_while(false, BIT_LOW_TIMEOUT_US)?;
            let high_us = self.wait_while(true, BIT_HIGH_TIMEOUT_US)?;
            if is_one(high_us) {
                frame[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
        Ok(frame)
    }
}

impl<P: OpenDrainPin, D: DelayNs> ClimateSensor for Dht22<P, D> {
    fn read(&mut self) -> Result<Measurement, SensorError> {
        let frame = self.read_frame()?;
        decode_frame(&frame)
    }
}

/// Classify a bit by the length of its high phase
fn is_one(high_us: u32) -> bool {
    high_us > BIT_ONE_THRESHOLD_US
}

/// Decode a raw 5-byte frame into a measurement
///
/// Validates the checksum and applies the temperature sign bit.
pub fn decode_frame(frame: &[u8; 5]) -> Result<Measurement, SensorError> {
    let sum = frame[..4]
        .iter()
        .fold(0u8, |acc, byte| acc.wrapping_add(*byte));
    if sum != frame[4] {
        return Err(SensorError::ChecksumMismatch);
    }

    let humidity_x10 = u16::from_be_bytes([frame[0], frame[1]]);
    let magnitude = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]) as i16;
    let celsius_x10 = if frame[2] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(Measurement {
        celsius_x10,
        humidity_x10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill in the checksum byte for a hand-written frame
    fn with_checksum(mut frame: [u8; 5]) -> [u8; 5] {
        frame[4] = frame[..4]
            .iter()
            .fold(0u8, |acc, byte| acc.wrapping_add(*byte));
        frame
    }

    #[test]
    fn decode_nominal_frame() {
        // 60.0 % RH, 25.0 °C
        let frame = with_checksum([0x02, 0x58, 0x00, 0xFA, 0]);
        assert_eq!(frame[4], 0x54); // sum wraps past 0xFF

        let m = decode_frame(&frame).unwrap();
        assert_eq!(m.humidity_x10, 600);
        assert_eq!(m.celsius_x10, 250);
    }

    #[test]
    fn decode_negative_temperature() {
        // 50.0 % RH, -10.1 °C: sign lives in the top bit, not two's complement
        let frame = with_checksum([0x01, 0xF4, 0x80, 0x65, 0]);

        let m = decode_frame(&frame).unwrap();
        assert_eq!(m.humidity_x10, 500);
        assert_eq!(m.celsius_x10, -101);
    }

    #[test]
    fn corrupted_frame_is_rejected() {
        let mut frame = with_checksum([0x02, 0x58, 0x00, 0xFA, 0]);
        frame[1] ^= 0x01;

        assert_eq!(decode_frame(&frame), Err(SensorError::ChecksumMismatch));
    }

    #[test]
    fn bit_classification_thresholds() {
        // Nominal zero (26-28 µs) and one (~70 µs) pulses
        assert!(!is_one(26));
        assert!(!is_one(28));
        assert!(is_one(70));

        assert!(!is_one(BIT_ONE_THRESHOLD_US));
        assert!(is_one(BIT_ONE_THRESHOLD_US + 1));
    }
}
