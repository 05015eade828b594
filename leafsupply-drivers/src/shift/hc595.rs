//! 74HC595 serial-in, parallel-out register
//!
//! Bit-banged over three push-pull pins. Bits are clocked MSB first, so
//! bit 7 of the byte ends up on Q7 after the eighth shift clock; the
//! storage latch then moves all eight bits to the outputs at once.

use leafsupply_core::traits::ShiftRegister;
use leafsupply_hal::OutputPin;

/// 74HC595 driver
pub struct Hc595<P> {
    /// Serial data (DS)
    data: P,
    /// Shift clock (SH_CP)
    shift_clock: P,
    /// Storage latch (ST_CP)
    latch: P,
}

impl<P: OutputPin> Hc595<P> {
    /// Take the three pins, all driven low
    pub fn new(mut data: P, mut shift_clock: P, mut latch: P) -> Self {
        data.set_low();
        shift_clock.set_low();
        latch.set_low();
        Self {
            data,
            shift_clock,
            latch,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (P, P, P) {
        (self.data, self.shift_clock, self.latch)
    }
}

impl<P: OutputPin> ShiftRegister for Hc595<P> {
    fn shift_out(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(byte & (1 << bit) != 0);
            self.shift_clock.pulse();
        }
        self.latch.pulse();
        self.data.set_low();
    }
}
