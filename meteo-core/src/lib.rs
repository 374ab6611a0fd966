//! Board-agnostic core logic for the weather station firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Climate sensor trait
//! - Sampler-reporter controller (sampling gate, cached readings,
//!   unit selection)
//! - Serial report formatting
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod measure;
pub mod report;
pub mod station;
pub mod traits;
