//! Board-agnostic panel logic for the leafSupply firmware
//!
//! This crate contains everything that runs in interrupt context and does
//! not depend on a specific chip:
//!
//! - Port traits for the shift register, character display and encoder
//! - Shared state (output pattern mirror, voltage counter)
//! - Keypad scanning over the shared shift register, with a bounded
//!   release debounce
//! - Rotation handling and voltage rendering
//! - The edge-interrupt dispatcher
//! - Compile-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod dispatch;
pub mod input;
pub mod panel;
pub mod render;
pub mod state;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::{ConfigError, PanelConfig};
pub use dispatch::{Dispatch, Dispatcher, EdgeHandler, InterruptLine};
pub use panel::Panel;
pub use state::{Counter, OutputPattern};
