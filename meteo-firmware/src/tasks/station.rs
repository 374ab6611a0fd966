//! Weather station sampler-reporter task
//!
//! One strictly sequential loop: read the button, let the core controller
//! decide whether this pass samples the sensor, then write the report
//! lines and drive the LEDs. All waits are fixed-duration timer sleeps, so
//! per-pass ordering matches the controller's contract exactly.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Delay, Instant, Timer};
use embedded_io_async::Write;

use meteo_core::config::StationConfig;
use meteo_core::report;
use meteo_core::station::{Cycle, LedPattern, Station};
use meteo_drivers::sensor::Dht22;
use meteo_hal::gpio::{InputPin, OutputPin};
use meteo_hal_rp2040::gpio::{RpInputPin, RpOpenDrainPin, RpOutputPin};

type Sensor = Dht22<RpOpenDrainPin<'static>, Delay>;

/// Station task - runs the sampler-reporter loop
#[embassy_executor::task]
pub async fn station_task(
    config: StationConfig,
    button: RpInputPin<'static>,
    mut blue_led: RpOutputPin<'static>,
    mut red_led: RpOutputPin<'static>,
    mut sensor: Sensor,
    mut tx: BufferedUartTx<'static, UART0>,
) {
    info!("Station task started");

    let mut station = Station::new(&config);
    let boot = Instant::now();

    // Sensor warm-up before the first exchange
    send_line(&mut tx, report::BANNER_INIT).await;
    Timer::after_millis(config.warmup_ms).await;
    send_line(&mut tx, report::BANNER_READY).await;
    send_line(&mut tx, report::SEPARATOR).await;

    info!("Sensor warm-up complete");

    loop {
        let pressed = button.is_low();
        let now_ms = boot.elapsed().as_millis();

        match station.poll(now_ms, pressed, &mut sensor) {
            Cycle::Report(frame) => {
                send_line(&mut tx, report::temperature_line(&frame).as_str()).await;

                blue_led.set_state(frame.leds.blue);
                red_led.set_state(frame.leds.red);

                send_line(&mut tx, report::humidity_line(frame.humidity_x10).as_str()).await;
                send_line(&mut tx, report::SEPARATOR).await;

                Timer::after_millis(config.pass_pause_ms).await;
            }
            Cycle::SensorFault => {
                warn!("Sensor read failed, skipping this cycle");

                send_line(&mut tx, report::READ_ERROR).await;

                blue_led.set_state(LedPattern::FAULT.blue);
                red_led.set_state(LedPattern::FAULT.red);

                Timer::after_millis(config.fault_pause_ms).await;
            }
        }
    }
}

/// Write one CRLF-terminated report line
async fn send_line(tx: &mut BufferedUartTx<'static, UART0>, line: &str) {
    if let Err(e) = tx.write_all(line.as_bytes()).await {
        warn!("Report write failed: {:?}", e);
        return;
    }
    if let Err(e) = tx.write_all(b"\r\n").await {
        warn!("Report write failed: {:?}", e);
    }
}
