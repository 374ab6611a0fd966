//! Sampler-reporter controller
//!
//! Owns the cached readings and the sampling gate. The firmware calls
//! [`Station::poll`] once per loop pass with the current time and button
//! level; the returned [`Cycle`] says what to put on the serial link and
//! the LEDs. All timing decisions live here so they can be tested with a
//! simulated clock.

use crate::config::StationConfig;
use crate::measure::Measurement;
use crate::traits::ClimateSensor;

/// Temperature unit selected by the push-button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

/// Desired LED levels for one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern {
    pub blue: bool,
    pub red: bool,
}

impl LedPattern {
    /// Sensor fault indication
    ///
    /// The red LED doubles as the Fahrenheit indicator; with two LEDs the
    /// fault pattern and the Fahrenheit pattern coincide.
    pub const FAULT: Self = Self {
        blue: false,
        red: true,
    };

    /// Pattern for the active display unit
    pub fn for_unit(unit: Unit) -> Self {
        match unit {
            Unit::Celsius => Self {
                blue: true,
                red: false,
            },
            Unit::Fahrenheit => Self {
                blue: false,
                red: true,
            },
        }
    }
}

/// Values to report on one normal pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Unit the temperature value is expressed in
    pub unit: Unit,
    /// Temperature in 0.01 units of `unit`
    pub temperature_x100: i32,
    /// Relative humidity in 0.1 % units
    pub humidity_x10: u16,
    /// LED levels for this pass
    pub leds: LedPattern,
}

/// Outcome of one loop pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Normal pass: write the value lines and apply the unit LEDs
    Report(Frame),
    /// This window's sensor read failed: write the error line, apply the
    /// fault LEDs and skip the value lines for this pass
    SensorFault,
}

/// Sampler-reporter controller state
///
/// The cached reading goes stale between sampling windows and is reported
/// as-is on every pass; a failed read leaves it untouched.
pub struct Station {
    cached: Measurement,
    /// Derived at sample time, 0.01 °F units; zero until the first valid
    /// Celsius reading exists
    fahrenheit_x100: i32,
    last_sample_ms: Option<u64>,
    sample_interval_ms: u64,
}

impl Station {
    /// Create a controller with zeroed cached readings
    pub fn new(config: &StationConfig) -> Self {
        Self {
            cached: Measurement::ZERO,
            fahrenheit_x100: 0,
            last_sample_ms: None,
            sample_interval_ms: config.sample_interval_ms,
        }
    }

    /// Has the current sampling window elapsed?
    fn sample_due(&self, now_ms: u64) -> bool {
        match self.last_sample_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.sample_interval_ms,
        }
    }

    /// Run one loop pass
    ///
    /// `now_ms` is a monotonic millisecond timestamp and `pressed` the
    /// button level (true = held down). The sensor is queried at most once
    /// per sampling window; the display path runs on every pass.
    pub fn poll<S: ClimateSensor>(
        &mut self,
        now_ms: u64,
        pressed: bool,
        sensor: &mut S,
    ) -> Cycle {
        if self.sample_due(now_ms) {
            // The window is consumed even when the read fails; the next
            // attempt happens one full interval later.
            self.last_sample_ms = Some(now_ms);

            match sensor.read() {
                Ok(measurement) => {
                    self.cached = measurement;
                    self.fahrenheit_x100 = measurement.fahrenheit_x100();
                }
                Err(_) => return Cycle::SensorFault,
            }
        }

        let unit = if pressed {
            Unit::Fahrenheit
        } else {
            Unit::Celsius
        };
        let temperature_x100 = match unit {
            Unit::Celsius => self.cached.celsius_x100(),
            Unit::Fahrenheit => self.fahrenheit_x100,
        };

        Cycle::Report(Frame {
            unit,
            temperature_x100,
            humidity_x10: self.cached.humidity_x10,
            leds: LedPattern::for_unit(unit),
        })
    }

    /// Last valid reading (zeroed until the first successful sample)
    pub fn cached(&self) -> Measurement {
        self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SensorError;
    use std::vec::Vec;

    const READING: Measurement = Measurement {
        celsius_x10: 250,
        humidity_x10: 600,
    };

    /// Sensor fed from a fixed script of results, counting reads
    struct ScriptedSensor {
        script: Vec<Result<Measurement, SensorError>>,
        reads: usize,
    }

    impl ScriptedSensor {
        fn new(script: &[Result<Measurement, SensorError>]) -> Self {
            Self {
                script: script.to_vec(),
                reads: 0,
            }
        }
    }

    impl ClimateSensor for ScriptedSensor {
        fn read(&mut self) -> Result<Measurement, SensorError> {
            let result = self.script[self.reads];
            self.reads += 1;
            result
        }
    }

    fn station() -> Station {
        Station::new(&StationConfig::default())
    }

    #[test]
    fn first_pass_samples_immediately() {
        let mut sensor = ScriptedSensor::new(&[Ok(READING)]);
        let mut station = station();

        let cycle = station.poll(0, false, &mut sensor);

        assert_eq!(sensor.reads, 1);
        match cycle {
            Cycle::Report(frame) => assert_eq!(frame.temperature_x100, 2500),
            Cycle::SensorFault => panic!("expected a report"),
        }
    }

    #[test]
    fn samples_at_most_once_per_window() {
        let mut sensor = ScriptedSensor::new(&[Ok(READING); 3]);
        let mut station = station();

        station.poll(0, false, &mut sensor);
        station.poll(1000, false, &mut sensor);
        station.poll(1999, false, &mut sensor);
        assert_eq!(sensor.reads, 1);

        station.poll(2000, false, &mut sensor);
        assert_eq!(sensor.reads, 2);

        station.poll(3999, false, &mut sensor);
        station.poll(4000, false, &mut sensor);
        assert_eq!(sensor.reads, 3);
    }

    #[test]
    fn button_selects_unit_and_leds() {
        let mut sensor = ScriptedSensor::new(&[Ok(READING)]);
        let mut station = station();

        // Released: Celsius, blue on
        match station.poll(0, false, &mut sensor) {
            Cycle::Report(frame) => {
                assert_eq!(frame.unit, Unit::Celsius);
                assert_eq!(frame.temperature_x100, 2500);
                assert_eq!(
                    frame.leds,
                    LedPattern {
                        blue: true,
                        red: false
                    }
                );
            }
            Cycle::SensorFault => panic!("expected a report"),
        }

        // Pressed: Fahrenheit, red on; same cached sample
        match station.poll(100, true, &mut sensor) {
            Cycle::Report(frame) => {
                assert_eq!(frame.unit, Unit::Fahrenheit);
                assert_eq!(frame.temperature_x100, 7700);
                assert_eq!(frame.humidity_x10, 600);
                assert_eq!(
                    frame.leds,
                    LedPattern {
                        blue: false,
                        red: true
                    }
                );
            }
            Cycle::SensorFault => panic!("expected a report"),
        }
        assert_eq!(sensor.reads, 1);
    }

    #[test]
    fn failed_read_keeps_cache_and_consumes_window() {
        let mut sensor = ScriptedSensor::new(&[
            Ok(READING),
            Err(SensorError::Timeout),
            Ok(Measurement {
                celsius_x10: 300,
                humidity_x10: 550,
            }),
        ]);
        let mut station = station();

        station.poll(0, false, &mut sensor);

        // The failed window reports a fault and leaves the cache alone
        assert_eq!(station.poll(2000, false, &mut sensor), Cycle::SensorFault);
        assert_eq!(station.cached(), READING);

        // Within the same window: no retry, prior values reported
        match station.poll(2500, false, &mut sensor) {
            Cycle::Report(frame) => {
                assert_eq!(frame.temperature_x100, 2500);
                assert_eq!(frame.humidity_x10, 600);
            }
            Cycle::SensorFault => panic!("expected a report"),
        }
        assert_eq!(sensor.reads, 2);

        // Next window recovers
        match station.poll(4000, false, &mut sensor) {
            Cycle::Report(frame) => assert_eq!(frame.temperature_x100, 3000),
            Cycle::SensorFault => panic!("expected a report"),
        }
        assert_eq!(sensor.reads, 3);
    }

    #[test]
    fn fahrenheit_is_zero_before_first_valid_sample() {
        let mut sensor = ScriptedSensor::new(&[Err(SensorError::ChecksumMismatch)]);
        let mut station = station();

        assert_eq!(station.poll(0, true, &mut sensor), Cycle::SensorFault);

        // No valid Celsius reading yet, so no derived Fahrenheit either
        match station.poll(100, true, &mut sensor) {
            Cycle::Report(frame) => assert_eq!(frame.temperature_x100, 0),
            Cycle::SensorFault => panic!("expected a report"),
        }
    }
}
