//! Shift register drivers

mod hc595;

pub use hc595::Hc595;
