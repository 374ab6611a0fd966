//! Station configuration
//!
//! All tunables are compile-time constants; there is no config file and no
//! runtime configuration surface. The defaults match the deployed wiring
//! and the DHT22 datasheet timing.

/// Timing and serial parameters for the sampler-reporter loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationConfig {
    /// Minimum time between sensor reads (ms)
    ///
    /// The DHT22 needs about 2 s between conversions; reading faster
    /// returns stale data.
    pub sample_interval_ms: u64,
    /// Sensor warm-up delay after power-on (ms)
    pub warmup_ms: u64,
    /// Pause after a failed sensor read before the next pass (ms)
    pub fault_pause_ms: u64,
    /// Pause at the end of each display pass (ms)
    pub pass_pause_ms: u64,
    /// Serial report baud rate
    pub baudrate: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 2000,
            warmup_ms: 2000,
            fault_pause_ms: 1000,
            pass_pause_ms: 1000,
            baudrate: 9600,
        }
    }
}
