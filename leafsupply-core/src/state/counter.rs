//! Voltage counter
//!
//! Stored in 0.1 V units so that repeated steps accumulate exactly; the
//! floating-point value is derived on read.

/// Encoder-adjusted voltage setpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counter {
    /// Value in 0.1 V units
    tenths: u16,
}

impl Counter {
    /// Counter at 0.0 V
    pub const fn new() -> Self {
        Self { tenths: 0 }
    }

    /// Counter at `tenths` x 0.1 V
    pub const fn from_tenths(tenths: u16) -> Self {
        Self { tenths }
    }

    /// Value in 0.1 V units
    pub const fn tenths(&self) -> u16 {
        self.tenths
    }

    /// Value in volts
    pub fn volts(&self) -> f32 {
        self.tenths as f32 / 10.0
    }

    /// True at 0.0 V
    pub const fn is_zero(&self) -> bool {
        self.tenths == 0
    }

    /// Raise by `step` tenths, saturating at `max` tenths
    ///
    /// Returns false (and leaves the value alone) when already at `max`.
    pub fn step_up(&mut self, step: u16, max: u16) -> bool {
        if self.tenths >= max {
            return false;
        }
        self.tenths = self.tenths.saturating_add(step).min(max);
        true
    }

    /// Lower by `step` tenths, never below zero
    ///
    /// Returns false (and leaves the value alone) when already at zero.
    pub fn step_down(&mut self, step: u16) -> bool {
        if self.tenths == 0 {
            return false;
        }
        self.tenths = self.tenths.saturating_sub(step);
        true
    }
}
