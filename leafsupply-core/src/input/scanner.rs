//! Keypad scan over the shared shift register
//!
//! One scan walks the four select lines in index order. Each position is
//! driven alone (LED nibble intact) and the single sense line sampled
//! straight away. Every position is visited even after a hit, then the
//! plain default pattern is written back before anything else can see
//! the register.
//!
//! The release wait is a separate step so the caller decides what it holds
//! while spinning: [`scan_keys`] touches the register, [`ScanReport::await_release`]
//! only samples the sense line.

use embedded_hal::delay::DelayNs;
use leafsupply_hal::InputPin;

use super::release::{ReleaseDebounce, ReleaseTimeout};
use crate::state::{OutputPattern, BUTTON_COUNT};
use crate::traits::ShiftRegister;

/// Outcome of one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanReport {
    /// Bit `i` set when position `i` read asserted
    pub pressed: u8,
    /// Release wait result, `None` when nothing was pressed
    pub release: Option<Result<u16, ReleaseTimeout>>,
}

impl ScanReport {
    /// No position read asserted
    pub fn is_empty(&self) -> bool {
        self.pressed == 0
    }

    /// Position `index` read asserted
    pub fn is_pressed(&self, index: usize) -> bool {
        index < BUTTON_COUNT && self.pressed & (1 << index) != 0
    }

    /// Release wait ran out of budget
    pub fn timed_out(&self) -> bool {
        matches!(self.release, Some(Err(_)))
    }

    /// Wait for the keypad to be let go, if anything was pressed
    ///
    /// `asserted` samples the sense line once per poll and `delay` spins
    /// between samples. The outcome lands in [`release`](Self::release).
    pub fn await_release<F, D>(&mut self, debounce: &mut ReleaseDebounce, asserted: F, delay: &mut D)
    where
        F: FnMut() -> bool,
        D: DelayNs,
    {
        if !self.is_empty() {
            self.release = Some(debounce.block_until_released_with(asserted, delay));
        }
    }
}

/// Scan all positions, leaving `default` on the register
///
/// `on_press` runs once per asserted position, in index order, while the
/// scan is still in progress. The register holds `default` again before
/// this returns; waiting for release is the caller's next step
/// ([`ScanReport::await_release`]).
pub fn scan_keys<R, S, F>(register: &mut R, sense: &S, default: OutputPattern, mut on_press: F) -> ScanReport
where
    R: ShiftRegister,
    S: InputPin,
    F: FnMut(usize),
{
    let mut report = ScanReport::default();

    for index in 0..BUTTON_COUNT {
        let Some(transient) = default.select(index) else {
            continue;
        };
        register.shift_out(transient.bits());
        if sense.is_high() {
            report.pressed |= 1 << index;
            on_press(index);
        }
    }

    register.shift_out(default.bits());
    report
}
