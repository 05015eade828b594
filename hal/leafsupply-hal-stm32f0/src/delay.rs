//! Cycle-counting delay
//!
//! LCD transfers run inside interrupt context with the panel lock held,
//! so they can not depend on the embassy time driver's own interrupt.
//! This delay only spins the core.

use embedded_hal::delay::DelayNs;

/// Busy-wait delay calibrated to the core clock
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    sysclk_hz: u32,
}

impl CycleDelay {
    /// Delay for a core running at `sysclk_hz`
    pub const fn new(sysclk_hz: u32) -> Self {
        Self { sysclk_hz }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (ns as u64 * self.sysclk_hz as u64) / 1_000_000_000;
        // asm::delay spins for at least the given count
        cortex_m::asm::delay((cycles as u32).max(1));
    }
}
