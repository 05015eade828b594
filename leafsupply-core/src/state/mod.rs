//! Shared panel state
//!
//! Both values are touched from interrupt context only; the main context
//! reads them once during setup. Whoever owns them (the [`Panel`]) is
//! expected to sit behind a critical-section mutex as soon as more than
//! one execution context can reach it.
//!
//! [`Panel`]: crate::panel::Panel

pub mod counter;
pub mod pattern;

pub use counter::Counter;
pub use pattern::{OutputPattern, BUTTON_COUNT, LED_MASK, SELECT_MASK};
