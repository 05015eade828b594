//! Rotary encoder port

/// Direction of the most recent encoder transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// One detent clockwise
    Clockwise,
    /// One detent counter-clockwise
    CounterClockwise,
    /// No valid transition (bounce, or nothing happened)
    None,
}

/// Quadrature encoder decoder
pub trait RotaryEncoder {
    /// Sample the decoder
    ///
    /// Every call reads the hardware afresh, so two calls may disagree.
    /// Query once per event and branch on the result.
    fn rotation(&mut self) -> Rotation;
}
