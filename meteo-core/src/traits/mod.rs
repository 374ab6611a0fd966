//! Hardware abstraction traits
//!
//! Traits implemented by the driver crate so the controller logic can be
//! exercised on the host with scripted implementations.

pub mod sensor;

pub use sensor::{ClimateSensor, SensorError};
