//! GPIO trait implementations for embassy-rp pins

use embassy_rp::gpio::{Flex, Input, Output, Pull};

use meteo_hal::gpio::{InputPin, OpenDrainPin, OutputPin};

/// Push-pull output pin (LEDs)
pub struct RpOutputPin<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

/// Digital input pin (push-button)
pub struct RpInputPin<'d> {
    pin: Input<'d>,
}

impl<'d> RpInputPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInputPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Open-drain line over a direction-switched Flex pin
///
/// Driving low switches the pin to output-low; releasing switches it back
/// to input with the internal pull-up enabled. The RP2040 pull-up (~50 kΩ)
/// is enough for a short sensor lead; longer runs want an external one.
pub struct RpOpenDrainPin<'d> {
    pin: Flex<'d>,
}

impl<'d> RpOpenDrainPin<'d> {
    /// Wrap a Flex pin, leaving the line released
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }
}

impl OpenDrainPin for RpOpenDrainPin<'_> {
    fn set_low(&mut self) {
        // Level before direction, so the line never glitches high
        self.pin.set_low();
        self.pin.set_as_output();
    }

    fn release(&mut self) {
        self.pin.set_as_input();
    }

    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
