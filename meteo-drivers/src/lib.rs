//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in meteo-core:
//!
//! - Climate sensors (DHT22 single-wire)

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
