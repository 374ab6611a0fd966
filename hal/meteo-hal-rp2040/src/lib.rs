//! RP2040 implementations of the meteo-hal traits
//!
//! Thin wrappers over embassy-rp GPIO types. The firmware constructs the
//! embassy pins (choosing pull and initial level) and hands them to these
//! wrappers; drivers and tasks then only see the meteo-hal traits.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{RpInputPin, RpOpenDrainPin, RpOutputPin};
