//! Keypad button identities

use heapless::String;

use crate::state::BUTTON_COUNT;
use crate::traits::TextDisplay;

/// Label shown for an index outside the keypad
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

/// Width every label is padded to, so a short label covers a long one
pub const LABEL_WIDTH: usize = 7;

/// Buttons in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Output on/off
    Power,
    /// Left soft key
    Menu1,
    /// Encoder-side select
    Select,
    /// Right soft key
    Menu2,
}

/// Index with no button behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownButton(pub usize);

impl Button {
    /// All buttons, indexed by scan position
    pub const ALL: [Button; BUTTON_COUNT] =
        [Button::Power, Button::Menu1, Button::Select, Button::Menu2];

    /// Scan position
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Button::Power => "POWER",
            Button::Menu1 => "MENU1",
            Button::Select => "SELECT",
            Button::Menu2 => "MENU2",
        }
    }
}

impl TryFrom<usize> for Button {
    type Error = UnknownButton;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Button::ALL.get(index).copied().ok_or(UnknownButton(index))
    }
}

/// Label for a scan index, falling back to [`UNKNOWN_LABEL`]
pub fn button_label(index: usize) -> &'static str {
    Button::try_from(index).map_or(UNKNOWN_LABEL, Button::label)
}

/// [`button_label`] space-padded to [`LABEL_WIDTH`]
pub fn padded_label(index: usize) -> String<LABEL_WIDTH> {
    let label = button_label(index);
    let mut padded = String::new();
    let _ = padded.push_str(label);
    while padded.len() < LABEL_WIDTH {
        let _ = padded.push(' ');
    }
    padded
}

/// Show the label for scan position `index` at the start of `row`
pub fn write_label<L: TextDisplay>(display: &mut L, row: u8, index: usize) {
    display.write_text(row, 0, &padded_label(index));
}
