//! Output register mirror
//!
//! The 74HC595 on the panel drives two things from one byte:
//!
//! ```text
//!  bit  7     6     5     4     3    2    1    0
//!     ┌─────┬─────┬─────┬─────┬────┬────┬────┬────┐
//!     │ SW0 │ SW1 │ SW2 │ SW3 │ L3 │ L2 │ L1 │ L0 │
//!     └─────┴─────┴─────┴─────┴────┴────┴────┴────┘
//!       button select lines     LED outputs
//! ```
//!
//! The low nibble belongs to the caller (LED state) and must survive any
//! scan. The high nibble is only ever changed transiently while a scan
//! is sampling the sense line.

/// Number of keypad positions behind the shift register
pub const BUTTON_COUNT: usize = 4;

/// Caller-controlled LED bits
pub const LED_MASK: u8 = 0b0000_1111;

/// Button select bits
pub const SELECT_MASK: u8 = 0b1111_0000;

/// Select bit per button index, index 0 on Q7
const SELECT_BITS: [u8; BUTTON_COUNT] = [0b1000_0000, 0b0100_0000, 0b0010_0000, 0b0001_0000];

/// Last byte written to the shift register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputPattern(u8);

impl OutputPattern {
    /// Wrap a raw register byte
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw register byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// LED nibble
    pub const fn leds(self) -> u8 {
        self.0 & LED_MASK
    }

    /// Select nibble
    pub const fn select_lines(self) -> u8 {
        self.0 & SELECT_MASK
    }

    /// Same select lines with a new LED nibble
    ///
    /// Bits of `leds` outside the LED nibble are ignored.
    pub const fn with_leds(self, leds: u8) -> Self {
        Self(self.select_lines() | (leds & LED_MASK))
    }

    /// Transient pattern that drives only `index`'s select line
    ///
    /// LED bits are carried over unchanged. Returns `None` for an index
    /// outside the keypad.
    pub const fn select(self, index: usize) -> Option<Self> {
        if index < BUTTON_COUNT {
            Some(Self(SELECT_BITS[index] | self.leds()))
        } else {
            None
        }
    }
}
