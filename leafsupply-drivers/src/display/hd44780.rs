//! HD44780 character LCD driver
//!
//! 16x2 module on a write-only 4-bit bus (R/W tied to ground). Each byte
//! goes out as two nibbles, high first, latched on the falling edge of E.
//! Without busy-flag reads every transfer waits out the worst-case
//! execution time instead.

use embedded_hal::delay::DelayNs;
use leafsupply_core::traits::TextDisplay;
use leafsupply_hal::OutputPin;

/// Characters per row
pub const COLUMNS: u8 = 16;

/// Rows on the panel
pub const ROWS: u8 = 2;

/// DDRAM address of each row's first cell
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// Instruction set
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;

    pub const ENTRY_MODE: u8 = 0x04;
    pub const ENTRY_INCREMENT: u8 = 0x02;

    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    pub const FUNCTION_SET: u8 = 0x20;
    pub const TWO_LINES: u8 = 0x08;

    pub const SET_DDRAM: u8 = 0x80;

    /// Upper nibble of the 8-bit function set, sent during reset
    pub const RESET_NIBBLE: u8 = 0x3;
    /// Upper nibble of the 4-bit function set
    pub const FOUR_BIT_NIBBLE: u8 = 0x2;
}

/// Timing (microseconds)
mod timing {
    pub const POWER_ON: u32 = 15_000;
    pub const RESET_FIRST: u32 = 4_100;
    pub const RESET_NEXT: u32 = 100;
    pub const CLEAR: u32 = 1_520;
    pub const EXECUTE: u32 = 37;
    pub const ENABLE_PULSE: u32 = 1;
}

/// HD44780 on a 4-bit bus
pub struct Hd44780<P, D> {
    rs: P,
    enable: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take the bus pins; call [`init`](Self::init) before writing
    pub fn new(mut rs: P, mut enable: P, mut data: [P; 4], delay: D) -> Self {
        rs.set_low();
        enable.set_low();
        for pin in data.iter_mut() {
            pin.set_low();
        }
        Self {
            rs,
            enable,
            data,
            delay,
        }
    }

    /// Reset into 4-bit, two-line mode and clear the screen
    pub fn init(&mut self, cursor: bool, blink: bool) {
        self.delay.delay_us(timing::POWER_ON);
        self.rs.set_low();

        // Reset by instruction: works whatever mode the controller woke in
        self.write_nibble(cmd::RESET_NIBBLE);
        self.delay.delay_us(timing::RESET_FIRST);
        self.write_nibble(cmd::RESET_NIBBLE);
        self.delay.delay_us(timing::RESET_NEXT);
        self.write_nibble(cmd::RESET_NIBBLE);
        self.delay.delay_us(timing::RESET_NEXT);
        self.write_nibble(cmd::FOUR_BIT_NIBBLE);
        self.delay.delay_us(timing::EXECUTE);

        self.command(cmd::FUNCTION_SET | cmd::TWO_LINES);

        let mut control = cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON;
        if cursor {
            control |= cmd::CURSOR_ON;
        }
        if blink {
            control |= cmd::BLINK_ON;
        }
        self.command(control);

        self.clear();
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT);
    }

    /// Blank the screen and home the cursor
    pub fn clear(&mut self) {
        self.command(cmd::CLEAR);
        self.delay.delay_us(timing::CLEAR);
    }

    /// Move the cursor; rows and columns past the edge land on the last one
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        let row = row.min(ROWS - 1) as usize;
        let col = col.min(COLUMNS - 1);
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row] + col));
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn write_data(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(timing::EXECUTE);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(nibble & (1 << bit) != 0);
        }
        self.enable.set_high();
        self.delay.delay_us(timing::ENABLE_PULSE);
        self.enable.set_low();
    }
}

impl<P, D> TextDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn write_text(&mut self, row: u8, col: u8, text: &str) {
        if col >= COLUMNS {
            return;
        }
        self.set_cursor(row, col);
        for ch in text.chars().take((COLUMNS - col) as usize) {
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.write_data(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::vec::Vec;

    /// Transfer seen on the bus: (rs, nibble)
    type Transfer = (bool, u8);

    #[derive(Default)]
    struct Bus {
        rs: bool,
        data: u8,
        transfers: Vec<Transfer>,
    }

    impl Bus {
        /// Transfers after the reset nibbles, paired into bytes
        fn bytes(&self, skip_nibbles: usize) -> Vec<(bool, u8)> {
            self.transfers[skip_nibbles..]
                .chunks(2)
                .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
                .collect()
        }
    }

    #[derive(Clone, Copy)]
    enum Line {
        Rs,
        Enable,
        Data(u8),
    }

    struct BusPin<'a> {
        bus: &'a RefCell<Bus>,
        line: Line,
        high: bool,
    }

    impl OutputPin for BusPin<'_> {
        fn set_high(&mut self) {
            let mut bus = self.bus.borrow_mut();
            match self.line {
                Line::Rs => bus.rs = true,
                Line::Data(bit) => bus.data |= 1 << bit,
                Line::Enable => {}
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            let mut bus = self.bus.borrow_mut();
            match self.line {
                Line::Rs => bus.rs = false,
                Line::Data(bit) => bus.data &= !(1 << bit),
                // Controller latches on the falling edge of E
                Line::Enable if self.high => {
                    let transfer = (bus.rs, bus.data);
                    bus.transfers.push(transfer);
                }
                Line::Enable => {}
            }
            self.high = false;
        }
    }

    #[derive(Default)]
    struct TotalDelay {
        ns: u64,
    }

    impl DelayNs for TotalDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.ns += ns as u64;
        }
    }

    /// Nibbles sent before the first full byte during init
    const RESET_NIBBLES: usize = 4;

    fn lcd(bus: &RefCell<Bus>) -> Hd44780<BusPin<'_>, TotalDelay> {
        let pin = |line| BusPin {
            bus,
            line,
            high: false,
        };
        Hd44780::new(
            pin(Line::Rs),
            pin(Line::Enable),
            [pin(Line::Data(0)), pin(Line::Data(1)), pin(Line::Data(2)), pin(Line::Data(3))],
            TotalDelay::default(),
        )
    }

    #[test]
    fn test_init_sequence() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.init(true, true);

        let bus = bus.borrow();
        let reset: Vec<u8> = bus.transfers[..RESET_NIBBLES].iter().map(|t| t.1).collect();
        assert_eq!(reset, vec![0x3, 0x3, 0x3, 0x2]);
        assert!(bus.transfers.iter().all(|t| !t.0));
        assert_eq!(
            bus.bytes(RESET_NIBBLES),
            vec![(false, 0x28), (false, 0x0F), (false, 0x01), (false, 0x06)]
        );
        // Power-on wait alone is 15 ms
        assert!(lcd.delay.ns >= 15_000_000 + 4_100_000 + 1_520_000);
    }

    #[test]
    fn test_init_without_cursor() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.init(false, false);

        assert_eq!(bus.borrow().bytes(RESET_NIBBLES)[1], (false, 0x0C));
    }

    #[test]
    fn test_write_text_positions_cursor() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.write_text(1, 3, "OK");

        assert_eq!(
            bus.borrow().bytes(0),
            vec![(false, 0x80 | 0x43), (true, b'O'), (true, b'K')]
        );
    }

    #[test]
    fn test_write_text_clips_at_last_column() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.write_text(0, 11, " 12.3V");

        let bytes = bus.borrow().bytes(0);
        assert_eq!(bytes[0], (false, 0x80 | 11));
        let text: Vec<u8> = bytes[1..].iter().map(|b| b.1).collect();
        assert_eq!(text, b" 12.3".to_vec());
    }

    #[test]
    fn test_write_past_row_end_is_ignored() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.write_text(0, COLUMNS, "X");

        assert!(bus.borrow().transfers.is_empty());
    }

    #[test]
    fn test_non_ascii_and_row_wrap() {
        let bus = RefCell::new(Bus::default());
        let mut lcd = lcd(&bus);

        lcd.write_text(5, 0, "µ");

        assert_eq!(bus.borrow().bytes(0), vec![(false, 0xC0), (true, b'?')]);
    }
}
