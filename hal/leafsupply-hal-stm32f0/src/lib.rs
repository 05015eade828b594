//! STM32F0-specific HAL for the leafSupply firmware
//!
//! Implements the `leafsupply-hal` traits on top of embassy-stm32:
//!
//! - [`gpio::PushPull`], [`gpio::Sense`] - pin wrappers
//! - [`exti::ExtiPort`] - edge interrupts through the raw EXTI registers
//! - [`delay::CycleDelay`] - busy-wait delay usable with interrupts masked
//!
//! # Features
//!
//! - `stm32f042k6` - STM32F042K6T6 (panel MCU)
//! - `stm32f042f6` - STM32F042F6P6
//! - `defmt` - Enable debug formatting support
//!
//! The EXTI vectors are handled by the firmware itself, so embassy-stm32
//! must be built without its `exti` feature.

#![no_std]

pub mod delay;
pub mod exti;
pub mod gpio;

pub use delay::CycleDelay;
pub use exti::{ExtiPort, EXTI4_15_LINES};
pub use gpio::{PushPull, Sense};
