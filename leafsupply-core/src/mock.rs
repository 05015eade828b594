//! Test doubles for the port traits
//!
//! Built on `heapless` and `core::cell` so the crate stays `no_std`
//! under test.

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};
use leafsupply_hal::interrupt::{Edge, EdgeInterrupts, LineMask};
use leafsupply_hal::InputPin;

use crate::config::FIELD_WIDTH;
use crate::state::SELECT_MASK;
use crate::traits::{Rotation, RotaryEncoder, ShiftRegister, TextDisplay};

/// Display that records every write
pub struct RecordingDisplay {
    log: Vec<(u8, u8, String<FIELD_WIDTH>), 32>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self { log: Vec::new() }
    }

    pub fn writes(&self) -> usize {
        self.log.len()
    }

    pub fn write(&self, index: usize) -> Option<(u8, u8, &str)> {
        self.log
            .get(index)
            .map(|(row, col, text)| (*row, *col, text.as_str()))
    }

    pub fn last(&self) -> Option<(u8, u8, &str)> {
        self.log
            .last()
            .map(|(row, col, text)| (*row, *col, text.as_str()))
    }
}

impl TextDisplay for RecordingDisplay {
    fn write_text(&mut self, row: u8, col: u8, text: &str) {
        let mut stored = String::new();
        let _ = stored.push_str(text);
        let _ = self.log.push((row, col, stored));
    }
}

/// Keypad behind a shift register and one sense line
///
/// The sense line reads high while the last byte written drives the
/// select line of the held button. Once the register is back on a
/// pattern driving every select line, the held button is released after
/// `hold_polls` further reads.
pub struct Keypad {
    written: RefCell<Vec<u8, 32>>,
    held: Cell<Option<u8>>,
    hold_polls: Cell<u32>,
    sense_reads: Cell<u32>,
    release_reads: Cell<u32>,
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            held: Cell::new(None),
            hold_polls: Cell::new(0),
            sense_reads: Cell::new(0),
            release_reads: Cell::new(0),
        }
    }

    /// Hold the button whose select bit is `select_bit`
    pub fn hold(&self, select_bit: u8, hold_polls: u32) {
        self.held.set(Some(select_bit));
        self.hold_polls.set(hold_polls);
    }

    pub fn written(&self) -> Vec<u8, 32> {
        self.written.borrow().clone()
    }

    pub fn last_written(&self) -> Option<u8> {
        self.written.borrow().last().copied()
    }

    /// Sense reads taken while the register showed a transient pattern
    pub fn sense_reads(&self) -> u32 {
        self.sense_reads.get()
    }

    /// Sense reads taken after the register was restored
    pub fn release_reads(&self) -> u32 {
        self.release_reads.get()
    }

    pub fn register(&self) -> KeypadRegister<'_> {
        KeypadRegister(self)
    }

    pub fn sense(&self) -> KeypadSense<'_> {
        KeypadSense(self)
    }
}

pub struct KeypadRegister<'a>(&'a Keypad);

impl ShiftRegister for KeypadRegister<'_> {
    fn shift_out(&mut self, byte: u8) {
        let _ = self.0.written.borrow_mut().push(byte);
    }
}

pub struct KeypadSense<'a>(&'a Keypad);

impl InputPin for KeypadSense<'_> {
    fn is_high(&self) -> bool {
        let keypad = self.0;
        let last = keypad.last_written().unwrap_or(0);

        if last & SELECT_MASK != SELECT_MASK {
            // Transient pattern: only the driven select line can answer
            keypad.sense_reads.set(keypad.sense_reads.get() + 1);
            return keypad.held.get().is_some_and(|bit| last & bit != 0);
        }

        keypad.release_reads.set(keypad.release_reads.get() + 1);
        if keypad.held.get().is_none() {
            return false;
        }
        let remaining = keypad.hold_polls.get();
        if remaining == 0 {
            keypad.held.set(None);
            return false;
        }
        keypad.hold_polls.set(remaining - 1);
        true
    }
}

/// Encoder that replays a fixed answer and counts queries
pub struct ScriptedEncoder {
    pub next: Rotation,
    pub queries: u32,
}

impl ScriptedEncoder {
    pub fn new() -> Self {
        Self {
            next: Rotation::None,
            queries: 0,
        }
    }
}

impl RotaryEncoder for ScriptedEncoder {
    fn rotation(&mut self) -> Rotation {
        self.queries += 1;
        self.next
    }
}

/// Delay that returns immediately and counts calls
#[derive(Default)]
pub struct CountingDelay {
    pub calls: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
    }
}

/// Interrupt controller backed by plain fields
pub struct MockInterrupts {
    pub pending: LineMask,
    pub rising: LineMask,
    pub falling: LineMask,
    pub enabled: LineMask,
    /// Per-line count of targeted `clear` calls, indexed by line number
    pub clears: [u8; 16],
    pub clear_all_calls: u8,
    /// Lines `clear_all` acts on
    pub port_lines: LineMask,
}

impl MockInterrupts {
    pub fn new(port_lines: LineMask) -> Self {
        Self {
            pending: LineMask::NONE,
            rising: LineMask::NONE,
            falling: LineMask::NONE,
            enabled: LineMask::NONE,
            clears: [0; 16],
            clear_all_calls: 0,
            port_lines,
        }
    }

    pub fn clears_of(&self, line: u8) -> u8 {
        self.clears[line as usize]
    }
}

impl EdgeInterrupts for MockInterrupts {
    fn set_edge(&mut self, lines: LineMask, edge: Edge) {
        match edge {
            Edge::Rising => {
                self.rising = self.rising | lines;
                self.falling = LineMask(self.falling.bits() & !lines.bits());
            }
            Edge::Falling => {
                self.falling = self.falling | lines;
                self.rising = LineMask(self.rising.bits() & !lines.bits());
            }
        }
    }

    fn enable(&mut self, lines: LineMask) {
        self.enabled = self.enabled | lines;
    }

    fn pending(&self) -> LineMask {
        self.pending
    }

    fn clear(&mut self, lines: LineMask) {
        for line in 0..16u8 {
            if lines.contains(LineMask::line(line)) {
                self.clears[line as usize] += 1;
            }
        }
        self.pending = LineMask(self.pending.bits() & !lines.bits());
    }

    fn clear_all(&mut self) {
        self.clear_all_calls += 1;
        self.pending = LineMask(self.pending.bits() & !self.port_lines.bits());
    }
}
