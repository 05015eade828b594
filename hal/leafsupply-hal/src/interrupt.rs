//! Edge-triggered interrupt line abstractions
//!
//! Models a group of external interrupt lines that share one vector and
//! one pending-flag register (an MSP430 `P1IFG`, an STM32 `EXTI_PR`
//! slice). Lines are addressed with a bitmask so several can be
//! configured or cleared in one call.

use core::ops::{BitAnd, BitOr};

/// Set of interrupt lines, one bit per line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineMask(pub u32);

impl LineMask {
    /// No lines
    pub const NONE: LineMask = LineMask(0);

    /// Mask holding the single line `line`
    ///
    /// `line` must be below 32; GPIO EXTI lines only reach 15.
    pub const fn line(line: u8) -> Self {
        debug_assert!(line < 32);
        LineMask(1 << line)
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no line is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every line in `other` is also in `self`
    pub const fn contains(self, other: LineMask) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// True when `self` and `other` share at least one line
    pub const fn intersects(self, other: LineMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for LineMask {
    type Output = LineMask;

    fn bitor(self, rhs: LineMask) -> LineMask {
        LineMask(self.0 | rhs.0)
    }
}

impl BitAnd for LineMask {
    type Output = LineMask;

    fn bitand(self, rhs: LineMask) -> LineMask {
        LineMask(self.0 & rhs.0)
    }
}

/// Signal edge that latches a pending flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high transition
    Rising,
    /// High to low transition
    Falling,
}

/// Edge interrupt controller for one shared-vector port
///
/// Implementations own the register access; callers decide ordering.
/// A pending flag stays set until cleared, and a flag left set re-enters
/// the vector immediately after return.
pub trait EdgeInterrupts {
    /// Select the triggering edge for `lines`
    fn set_edge(&mut self, lines: LineMask, edge: Edge);

    /// Unmask `lines` so their pending flags raise the vector
    fn enable(&mut self, lines: LineMask);

    /// Snapshot of the pending-flag register
    fn pending(&self) -> LineMask;

    /// Clear the pending flags of `lines`
    fn clear(&mut self, lines: LineMask);

    /// Clear every pending flag routed to this port's vector
    fn clear_all(&mut self);
}
