//! GPIO adapters for STM32F0
//!
//! Thin newtypes that let embassy-stm32 pins satisfy the
//! `leafsupply-hal` pin traits.

use embassy_stm32::gpio::{Input, Output};
use leafsupply_hal::gpio::{InputPin, OutputPin};

/// Push-pull output (shift register lines, LCD bus)
pub struct PushPull<'d>(Output<'d>);

impl<'d> PushPull<'d> {
    /// Wrap a configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for PushPull<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Digital input (button sense line, encoder channels)
pub struct Sense<'d>(Input<'d>);

impl<'d> Sense<'d> {
    /// Wrap a configured embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for Sense<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
