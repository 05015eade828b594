//! EXTI edge interrupts for STM32F0
//!
//! The F0 groups its sixteen GPIO EXTI lines onto three vectors. An
//! [`ExtiPort`] covers one of those groups, so clearing "all pending
//! flags on the port" never touches lines that belong to another vector.
//!
//! `EXTI_PR` is write-one-to-clear: writing a mask only clears the lines
//! in that mask.

use embassy_stm32::pac;
use embassy_stm32::pac::exti::regs::Lines;
use leafsupply_hal::interrupt::{Edge, EdgeInterrupts, LineMask};

/// Lines 4 to 15 (vector `EXTI4_15`)
pub const EXTI4_15_LINES: LineMask = LineMask(0xFFF0);

/// GPIO port index as encoded in `SYSCFG_EXTICR`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    F = 5,
}

/// Edge interrupt controller for one EXTI vector group
pub struct ExtiPort {
    port_lines: LineMask,
}

impl ExtiPort {
    /// Controller for the lines in `port_lines`, e.g. [`EXTI4_15_LINES`]
    pub const fn new(port_lines: LineMask) -> Self {
        Self { port_lines }
    }

    /// Lines handled by this controller
    pub const fn lines(&self) -> LineMask {
        self.port_lines
    }

    /// Route EXTI `line` to GPIO `port`
    ///
    /// Requires the SYSCFG clock, which `embassy_stm32::init` enables.
    /// Port A is the reset routing.
    pub fn route(&mut self, line: u8, port: Port) {
        let line = line as usize;
        pac::SYSCFG
            .exticr(line / 4)
            .modify(|w| w.set_exti(line % 4, port as u8));
    }

    fn own(&self, lines: LineMask) -> u32 {
        lines.bits() & self.port_lines.bits()
    }
}

impl EdgeInterrupts for ExtiPort {
    fn set_edge(&mut self, lines: LineMask, edge: Edge) {
        let bits = self.own(lines);
        match edge {
            Edge::Rising => {
                pac::EXTI.rtsr(0).modify(|w| w.0 |= bits);
                pac::EXTI.ftsr(0).modify(|w| w.0 &= !bits);
            }
            Edge::Falling => {
                pac::EXTI.ftsr(0).modify(|w| w.0 |= bits);
                pac::EXTI.rtsr(0).modify(|w| w.0 &= !bits);
            }
        }
    }

    fn enable(&mut self, lines: LineMask) {
        let bits = self.own(lines);
        pac::EXTI.imr(0).modify(|w| w.0 |= bits);
    }

    fn pending(&self) -> LineMask {
        LineMask(pac::EXTI.pr(0).read().0 & self.port_lines.bits())
    }

    fn clear(&mut self, lines: LineMask) {
        pac::EXTI.pr(0).write_value(Lines(self.own(lines)));
    }

    fn clear_all(&mut self) {
        pac::EXTI.pr(0).write_value(Lines(self.port_lines.bits()));
    }
}
