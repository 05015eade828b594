//! Edge-interrupt dispatcher
//!
//! Both panel inputs share one interrupt vector. On entry the dispatcher
//! reads the pending flags, services at most one line in [`PRIORITY`]
//! order, then clears every pending flag on the port:
//!
//! ```text
//! pending ──▶ ButtonArray? ──yes──▶ clear(line) ─▶ on_button_array ─┐
//!                 │ no                                              │
//!                 ▼                                                 │
//!             EncoderA? ────yes──▶ clear(line) ─▶ on_encoder_a ────┤
//!                 │ no                                              │
//!                 ▼                                                 ▼
//!              Spurious ──────────────────────────────────────▶ clear_all
//! ```
//!
//! A second edge arriving while the first is serviced is dropped by the
//! final `clear_all`. Lines never stay pending, so the vector can not
//! lock up on a flag nobody clears.

use leafsupply_hal::interrupt::{Edge, EdgeInterrupts, LineMask};

use crate::input::{RotationOutcome, ScanReport};

/// Panel input lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptLine {
    /// Keypad sense line
    ButtonArray,
    /// Encoder channel A
    EncoderA,
}

/// Service order when several lines pend at once
pub const PRIORITY: [InterruptLine; 2] = [InterruptLine::ButtonArray, InterruptLine::EncoderA];

/// Work behind each line
pub trait EdgeHandler {
    /// Sense line rose
    ///
    /// Returns once the keypad is scanned and the register restored. The
    /// release wait is left to the caller, see [`ScanReport::await_release`].
    fn on_button_array(&mut self) -> ScanReport;

    /// Encoder channel A rose
    fn on_encoder_a(&mut self) -> RotationOutcome;
}

/// What one dispatch serviced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Keypad scanned
    Button(ScanReport),
    /// Encoder event handled
    Rotation(RotationOutcome),
    /// Nothing of ours was pending
    Spurious,
}

/// Line assignment for the two panel inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatcher {
    button: LineMask,
    encoder: LineMask,
}

impl Dispatcher {
    /// Dispatcher for the keypad on line `button` and encoder A on line `encoder`
    pub const fn new(button: u8, encoder: u8) -> Self {
        Self {
            button: LineMask::line(button),
            encoder: LineMask::line(encoder),
        }
    }

    /// Mask for `line`
    pub const fn mask(&self, line: InterruptLine) -> LineMask {
        match line {
            InterruptLine::ButtonArray => self.button,
            InterruptLine::EncoderA => self.encoder,
        }
    }

    /// Both lines
    pub fn lines(&self) -> LineMask {
        self.button | self.encoder
    }

    /// Rising edge on both lines, stale flags dropped, then unmasked
    pub fn configure<I: EdgeInterrupts>(&self, irq: &mut I) {
        let lines = self.lines();
        irq.set_edge(lines, Edge::Rising);
        irq.clear(lines);
        irq.enable(lines);
    }

    /// Service one interrupt
    ///
    /// The serviced line's flag is cleared before its handler runs.
    /// Every flag on the port is cleared on the way out, whichever
    /// branch was taken.
    pub fn dispatch<I, H>(&self, irq: &mut I, handler: &mut H) -> Dispatch
    where
        I: EdgeInterrupts,
        H: EdgeHandler,
    {
        let pending = irq.pending();
        let line = PRIORITY
            .into_iter()
            .find(|&line| pending.intersects(self.mask(line)));

        let serviced = match line {
            Some(line) => {
                irq.clear(self.mask(line));
                match line {
                    InterruptLine::ButtonArray => Dispatch::Button(handler.on_button_array()),
                    InterruptLine::EncoderA => Dispatch::Rotation(handler.on_encoder_a()),
                }
            }
            None => Dispatch::Spurious,
        };

        irq.clear_all();
        serviced
    }
}
