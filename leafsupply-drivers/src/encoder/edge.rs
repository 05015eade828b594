//! Encoder decoded on channel A's rising edge
//!
//! The edge interrupt fires when A rises. By then B has either already
//! risen (counter-clockwise) or is still low (clockwise). If A has
//! dropped again by the time we look, the edge was contact bounce.

use leafsupply_core::traits::{Rotation, RotaryEncoder};
use leafsupply_hal::InputPin;

/// Two-channel encoder sampled on demand
pub struct EdgeSampledEncoder<A, B> {
    a: A,
    b: B,
}

impl<A: InputPin, B: InputPin> EdgeSampledEncoder<A, B> {
    /// Encoder on channel `a` (the edge source) and channel `b`
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: InputPin, B: InputPin> RotaryEncoder for EdgeSampledEncoder<A, B> {
    fn rotation(&mut self) -> Rotation {
        if self.a.is_low() {
            return Rotation::None;
        }
        if self.b.is_low() {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }
}
