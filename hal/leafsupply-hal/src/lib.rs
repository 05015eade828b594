//! leafSupply Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the panel logic is written
//! against. Chip-specific crates (STM32F0 today) implement them, and the
//! host test suites implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  leafsupply-firmware                    │
//! └─────────────────────────────────────────┘
//!          │                    │
//!          ▼                    ▼
//! ┌─────────────────┐  ┌─────────────────────┐
//! │ leafsupply-core │  │ leafsupply-drivers  │
//! └─────────────────┘  └─────────────────────┘
//!          │                    │
//!          └─────────┬──────────┘
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  leafsupply-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//!        ┌───────────────────────────┐
//!        │ leafsupply-hal-stm32f0    │
//!        └───────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`interrupt::EdgeInterrupts`] - Edge-triggered interrupt lines with
//!   a shared pending-flag register

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod interrupt;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use interrupt::{Edge, EdgeInterrupts, LineMask};
