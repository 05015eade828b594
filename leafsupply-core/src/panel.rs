//! The instrument panel
//!
//! [`Panel`] owns every collaborator and all shared state. The firmware
//! keeps exactly one behind a critical-section mutex and hands it to the
//! [`Dispatcher`](crate::Dispatcher) from the edge interrupt.
//!
//! A key edge only scans. The release wait that follows samples
//! [`Panel::sense_asserted`] and is run by the owner of the lock, outside it.

use leafsupply_hal::InputPin;

use crate::config::PanelConfig;
use crate::dispatch::EdgeHandler;
use crate::input::{apply_rotation, scan_keys, write_label, RotationOutcome, ScanReport};
use crate::render::render_voltage;
use crate::state::{Counter, OutputPattern};
use crate::traits::{RotaryEncoder, ShiftRegister, TextDisplay};

/// Panel state and hardware
pub struct Panel<R, S, E, L> {
    register: R,
    sense: S,
    encoder: E,
    display: L,
    config: PanelConfig,
    pattern: OutputPattern,
    counter: Counter,
}

impl<R, S, E, L> Panel<R, S, E, L>
where
    R: ShiftRegister,
    S: InputPin,
    E: RotaryEncoder,
    L: TextDisplay,
{
    /// Assemble a panel; nothing is written until [`start`](Self::start)
    pub fn new(register: R, sense: S, encoder: E, display: L, config: PanelConfig) -> Self {
        Self {
            register,
            sense,
            encoder,
            display,
            pattern: config.default_pattern,
            counter: Counter::new(),
            config,
        }
    }

    /// Write the idle pattern, the title and the initial readout
    pub fn start(&mut self) {
        self.register.shift_out(self.pattern.bits());
        self.display
            .write_text(self.config.readout_row, 0, self.config.title);
        render_voltage(&mut self.display, self.config.readout_row, &self.counter);
    }

    /// Replace the LED nibble and push it to the register
    pub fn set_leds(&mut self, leds: u8) {
        self.pattern = self.pattern.with_leds(leds);
        self.register.shift_out(self.pattern.bits());
    }

    /// Sense line still high with the idle pattern on the register
    pub fn sense_asserted(&self) -> bool {
        self.sense.is_high()
    }

    /// Current counter
    pub fn counter(&self) -> Counter {
        self.counter
    }

    /// Idle register pattern
    pub fn pattern(&self) -> OutputPattern {
        self.pattern
    }

    /// Display, for inspection
    pub fn display(&self) -> &L {
        &self.display
    }

    /// Encoder, for inspection and scripting
    pub fn encoder_mut(&mut self) -> &mut E {
        &mut self.encoder
    }
}

impl<R, S, E, L> EdgeHandler for Panel<R, S, E, L>
where
    R: ShiftRegister,
    S: InputPin,
    E: RotaryEncoder,
    L: TextDisplay,
{
    fn on_button_array(&mut self) -> ScanReport {
        let Self {
            register,
            sense,
            display,
            config,
            pattern,
            ..
        } = self;

        scan_keys(register, sense, *pattern, |index| {
            write_label(display, config.label_row, index)
        })
    }

    fn on_encoder_a(&mut self) -> RotationOutcome {
        let rotation = self.encoder.rotation();
        let outcome = apply_rotation(
            &mut self.counter,
            rotation,
            self.config.step_tenths,
            self.config.max_tenths,
        );
        if outcome.changed() {
            render_voltage(&mut self.display, self.config.readout_row, &self.counter);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Dispatch, Dispatcher};
    use crate::mock::{
        CountingDelay, Keypad, KeypadRegister, KeypadSense, MockInterrupts, RecordingDisplay,
        ScriptedEncoder,
    };
    use crate::traits::Rotation;
    use core::cell::RefCell;
    use embedded_hal::delay::DelayNs;
    use leafsupply_hal::interrupt::LineMask;

    type TestPanel<'a> = Panel<KeypadRegister<'a>, KeypadSense<'a>, ScriptedEncoder, RecordingDisplay>;

    fn panel(keypad: &Keypad) -> TestPanel<'_> {
        Panel::new(
            keypad.register(),
            keypad.sense(),
            ScriptedEncoder::new(),
            RecordingDisplay::new(),
            PanelConfig::DEFAULT,
        )
    }

    /// Delay that fails if the panel is borrowed while it spins
    struct UnlockedDelay<'a, T> {
        shared: &'a RefCell<T>,
        calls: u32,
    }

    impl<T> DelayNs for UnlockedDelay<'_, T> {
        fn delay_ns(&mut self, _ns: u32) {
            assert!(self.shared.try_borrow_mut().is_ok());
            self.calls += 1;
        }
    }

    #[test]
    fn test_start_draws_title_and_zero() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);

        panel.start();

        assert_eq!(keypad.written().as_slice(), &[0b1111_1000]);
        assert_eq!(panel.display().write(0), Some((0, 0, "LM317")));
        assert_eq!(panel.display().write(1), Some((0, 11, " 0.0V")));
    }

    #[test]
    fn test_ten_clockwise_steps_render_one_volt() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);
        panel.encoder_mut().next = Rotation::Clockwise;

        for _ in 0..10 {
            assert_eq!(panel.on_encoder_a(), RotationOutcome::Increased);
        }

        assert_eq!(panel.counter().volts(), 1.0);
        assert_eq!(panel.display().writes(), 10);
        assert_eq!(panel.display().last(), Some((0, 11, " 1.0V")));
    }

    #[test]
    fn test_counter_clockwise_at_zero_does_not_render() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);
        panel.encoder_mut().next = Rotation::CounterClockwise;

        assert_eq!(panel.on_encoder_a(), RotationOutcome::AtZero);
        assert!(panel.counter().is_zero());
        assert_eq!(panel.display().writes(), 0);
    }

    #[test]
    fn test_encoder_queried_once_per_event() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);

        panel.encoder_mut().next = Rotation::CounterClockwise;
        panel.on_encoder_a();
        panel.encoder_mut().next = Rotation::None;
        panel.on_encoder_a();

        assert_eq!(panel.encoder_mut().queries, 2);
    }

    #[test]
    fn test_select_press_shows_label() {
        let keypad = Keypad::new();
        keypad.hold(0b0010_0000, 2);
        let mut panel = panel(&keypad);

        let report = panel.on_button_array();

        assert!(report.is_pressed(2));
        assert_eq!(report.release, None);
        assert_eq!(panel.display().writes(), 1);
        assert_eq!(panel.display().last(), Some((1, 0, "SELECT ")));
        assert_eq!(keypad.last_written(), Some(0b1111_1000));
        assert_eq!(keypad.release_reads(), 0);
    }

    #[test]
    fn test_release_wait_runs_with_panel_unborrowed() {
        let keypad = Keypad::new();
        keypad.hold(0b0001_0000, 3);
        let shared = RefCell::new(panel(&keypad));
        let mut debounce = PanelConfig::DEFAULT.release_debounce();
        let mut delay = UnlockedDelay {
            shared: &shared,
            calls: 0,
        };

        let mut report = shared.borrow_mut().on_button_array();
        report.await_release(&mut debounce, || shared.borrow().sense_asserted(), &mut delay);

        assert!(report.is_pressed(3));
        assert_eq!(report.release, Some(Ok(3)));
        assert_eq!(delay.calls, 3);
        assert_eq!(keypad.release_reads(), 4);
        assert_eq!(shared.borrow().display().last(), Some((1, 0, "MENU2  ")));
    }

    #[test]
    fn test_stuck_key_gives_up_on_config_budget() {
        let keypad = Keypad::new();
        keypad.hold(0b1000_0000, u32::MAX);
        let mut panel = panel(&keypad);
        let mut delay = CountingDelay::default();
        let config = PanelConfig {
            release_timeout_polls: 5,
            ..PanelConfig::DEFAULT
        };

        let mut report = panel.on_button_array();
        report.await_release(&mut config.release_debounce(), || panel.sense_asserted(), &mut delay);

        assert!(report.timed_out());
        assert_eq!(delay.calls, 4);
    }

    #[test]
    fn test_set_leds_survives_scan() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);

        panel.set_leds(0b0101);
        assert_eq!(keypad.last_written(), Some(0b1111_0101));

        keypad.hold(0b1000_0000, 0);
        panel.on_button_array();

        assert_eq!(panel.pattern().bits(), 0b1111_0101);
        assert_eq!(keypad.last_written(), Some(0b1111_0101));
        assert_eq!(panel.display().last(), Some((1, 0, "POWER  ")));
    }

    #[test]
    fn test_dispatch_into_panel() {
        let keypad = Keypad::new();
        let mut panel = panel(&keypad);
        let dispatcher = Dispatcher::new(8, 7);
        let mut irq = MockInterrupts::new(LineMask(0xFFF0));

        panel.encoder_mut().next = Rotation::Clockwise;
        irq.pending = LineMask::line(7);
        let serviced = dispatcher.dispatch(&mut irq, &mut panel);

        assert_eq!(serviced, Dispatch::Rotation(RotationOutcome::Increased));
        assert_eq!(panel.counter().tenths(), 1);
        assert_eq!(panel.display().last(), Some((0, 11, " 0.1V")));
        assert!(irq.pending.is_empty());
    }
}
