//! Meteo - DHT22 weather station firmware
//!
//! RP2040 firmware that samples a DHT22 temperature/humidity sensor every
//! two seconds and reports the readings over UART0 as human-readable text.
//! A push-button selects Celsius or Fahrenheit; two LEDs mirror the active
//! unit, with red doubling as the sensor-fault indicator.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use meteo_core::config::StationConfig;
use meteo_drivers::sensor::Dht22;
use meteo_hal_rp2040::gpio::{RpInputPin, RpOpenDrainPin, RpOutputPin};

mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Meteo firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = StationConfig::default();

    // Setup UART0 for the serial report
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = config.baudrate;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 128]);
    let rx_buf = RX_BUF.init([0u8; 16]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("UART initialized for serial report");

    // Station I/O: button on GPIO13 (pulled up, pressed = low), blue LED
    // on GPIO14, red LED on GPIO12, DHT22 data line on GPIO4
    let button = RpInputPin::new(Input::new(p.PIN_13, Pull::Up));
    let blue_led = RpOutputPin::new(Output::new(p.PIN_14, Level::Low));
    let red_led = RpOutputPin::new(Output::new(p.PIN_12, Level::Low));

    let dht_line = RpOpenDrainPin::new(Flex::new(p.PIN_4));
    let sensor = Dht22::new(dht_line, Delay);

    info!("Station I/O initialized");

    spawner
        .spawn(tasks::station_task(
            config, button, blue_led, red_led, sensor, tx,
        ))
        .unwrap();

    info!("Station task spawned, firmware running");
}
