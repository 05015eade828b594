//! Rotation to counter

use crate::state::Counter;
use crate::traits::Rotation;

/// What one encoder event did to the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationOutcome {
    /// Stepped up
    Increased,
    /// Stepped down
    Decreased,
    /// Counter-clockwise at zero, nothing changed
    AtZero,
    /// Clockwise at the ceiling, nothing changed
    AtMaximum,
    /// Decoder reported no rotation
    Idle,
}

impl RotationOutcome {
    /// The counter moved and the readout needs redrawing
    pub fn changed(self) -> bool {
        matches!(self, RotationOutcome::Increased | RotationOutcome::Decreased)
    }
}

/// Apply one decoded rotation to `counter`
pub fn apply_rotation(
    counter: &mut Counter,
    rotation: Rotation,
    step_tenths: u16,
    max_tenths: u16,
) -> RotationOutcome {
    match rotation {
        Rotation::Clockwise => {
            if counter.step_up(step_tenths, max_tenths) {
                RotationOutcome::Increased
            } else {
                RotationOutcome::AtMaximum
            }
        }
        Rotation::CounterClockwise => {
            if counter.step_down(step_tenths) {
                RotationOutcome::Decreased
            } else {
                RotationOutcome::AtZero
            }
        }
        Rotation::None => RotationOutcome::Idle,
    }
}
