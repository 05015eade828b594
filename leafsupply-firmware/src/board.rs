//! Front-panel board wiring (STM32F042K6T6, LQFP32)
//!
//! ```text
//!  PA0  ── HC595 DS        PB3  ── LCD RS
//!  PA1  ── HC595 SH_CP     PB4  ── LCD E
//!  PA2  ── HC595 ST_CP     PB5  ── LCD D4
//!                          PB6  ── LCD D5
//!  PA7  ── encoder A       PB7  ── LCD D6
//!  PB1  ── encoder B       PA15 ── LCD D7
//!  PA8  ── keypad sense (wired-OR of the four keys)
//! ```
//!
//! Keypad sense and encoder A both land on the EXTI4_15 vector.

/// Core clock after `embassy_stm32::init` with the default config (HSI)
pub const SYSCLK_HZ: u32 = 8_000_000;

/// EXTI line of the keypad sense input (PA8)
pub const BUTTON_LINE: u8 = 8;

/// EXTI line of encoder channel A (PA7)
pub const ENCODER_A_LINE: u8 = 7;
