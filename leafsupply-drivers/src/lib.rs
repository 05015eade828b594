//! Peripheral drivers for the panel
//!
//! Concrete implementations of the port traits in leafsupply-core, written
//! against the pin traits in leafsupply-hal:
//!
//! - 74HC595 shift register (LEDs and keypad select lines)
//! - HD44780 16x2 character LCD on a 4-bit bus
//! - Rotary encoder sampled on channel A's edge

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod encoder;
pub mod shift;
