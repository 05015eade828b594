//! GPIO pin abstractions
//!
//! Digital pins as the panel drivers see them. Writes are infallible:
//! on the supported chips a push-pull output can not fail to latch.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Emit one low-high-low pulse
    ///
    /// Used for clock and latch strobes. Timing is whatever two register
    /// writes take; callers that need a wider pulse delay explicitly.
    fn pulse(&mut self) {
        self.set_high();
        self.set_low();
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
