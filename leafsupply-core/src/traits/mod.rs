//! Port traits
//!
//! The panel logic consumes three collaborators through these traits.
//! Each is infallible by signature: writes to a shift register or an LCD
//! bus and reads of encoder pins can not fail on this hardware.

pub mod display;
pub mod encoder;
pub mod shift_register;

pub use display::TextDisplay;
pub use encoder::{Rotation, RotaryEncoder};
pub use shift_register::ShiftRegister;
