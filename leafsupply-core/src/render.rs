//! Voltage readout rendering
//!
//! Formats the counter with one fractional digit and a `V` suffix, then
//! writes it right-aligned so its last character lands in the last
//! column of the readout row.
//!
//! ```text
//!  col  0         1
//!       0123456789012345
//!      ┌────────────────┐
//!      │LM317       1.0V│
//!      └────────────────┘
//! ```
//!
//! The text is space-padded to [`VALUE_WIDTH`] before writing so that a
//! shorter value overwrites every cell of a longer one ("10.0V" -> " 9.9V").

use core::fmt::Write;

use heapless::String;

use crate::config::FIELD_WIDTH;
use crate::state::Counter;
use crate::traits::TextDisplay;

/// Unit suffix appended to the value
pub const UNIT_SUFFIX: char = 'V';

/// Widest rendered value, `"99.9V"`
pub const VALUE_WIDTH: usize = 5;

/// Largest value that fits in [`VALUE_WIDTH`] (0.1 V units)
pub const MAX_RENDER_TENTHS: u16 = 999;

/// Column where the padded value starts
pub const VALUE_COLUMN: u8 = (FIELD_WIDTH - VALUE_WIDTH) as u8;

/// Formatted voltage, e.g. `"12.3V"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltageText {
    text: String<VALUE_WIDTH>,
}

impl VoltageText {
    /// Format a counter
    pub fn from_counter(counter: &Counter) -> Self {
        Self::from_tenths(counter.tenths())
    }

    /// Format a value in volts, rounded to the nearest tenth
    ///
    /// The value is clamped to `0.0..=99.9` first; NaN formats as `0.0V`.
    pub fn from_volts(volts: f32) -> Self {
        let tenths = volts.max(0.0) * 10.0 + 0.5;
        let tenths = if tenths >= MAX_RENDER_TENTHS as f32 {
            MAX_RENDER_TENTHS
        } else {
            tenths as u16
        };
        Self::from_tenths(tenths)
    }

    fn from_tenths(tenths: u16) -> Self {
        let tenths = tenths.min(MAX_RENDER_TENTHS);
        let mut text = String::new();
        // Bounded by MAX_RENDER_TENTHS, always fits
        let _ = write!(text, "{}.{}{}", tenths / 10, tenths % 10, UNIT_SUFFIX);
        Self { text }
    }

    /// The unpadded text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Column at which the unpadded text ends flush with the row
    pub fn column(&self) -> u8 {
        (FIELD_WIDTH - self.text.len()) as u8
    }

    /// Text left-padded with spaces to [`VALUE_WIDTH`]
    pub fn padded(&self) -> String<VALUE_WIDTH> {
        let mut padded = String::new();
        for _ in self.text.len()..VALUE_WIDTH {
            let _ = padded.push(' ');
        }
        let _ = padded.push_str(&self.text);
        padded
    }
}

/// Draw `counter` on `row` of `display`
pub fn render_voltage<D: TextDisplay>(display: &mut D, row: u8, counter: &Counter) {
    let text = VoltageText::from_counter(counter);
    display.write_text(row, VALUE_COLUMN, &text.padded());
}
