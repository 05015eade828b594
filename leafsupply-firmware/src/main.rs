//! leafSupply - Bench Supply Front Panel
//!
//! Firmware for the LM317 supply's front panel (STM32F042K6). Everything
//! happens in the EXTI4_15 handler: a key edge scans the keypad and shows
//! the key's label, an encoder edge steps the voltage readout. The main
//! context sets up and then sleeps.
//!
//! The handler holds the panel lock (a PRIMASK critical section) only for
//! the scan or the rotation. Waiting for a key to be let go happens after
//! the lock is dropped, one short critical section per sample, so the time
//! driver keeps running during a long hold.

#![no_std]
#![no_main]

mod board;

use core::cell::RefCell;

use cortex_m_rt::entry;
use defmt::*;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use leafsupply_core::input::ScanReport;
use leafsupply_core::{Dispatch, Dispatcher, Panel, PanelConfig};
use leafsupply_drivers::display::Hd44780;
use leafsupply_drivers::encoder::EdgeSampledEncoder;
use leafsupply_drivers::shift::Hc595;
use leafsupply_hal::EdgeInterrupts;
use leafsupply_hal_stm32f0::exti::Port;
use leafsupply_hal_stm32f0::{CycleDelay, ExtiPort, PushPull, Sense, EXTI4_15_LINES};

use crate::board::{BUTTON_LINE, ENCODER_A_LINE, SYSCLK_HZ};

type FrontPanel = Panel<
    Hc595<PushPull<'static>>,
    Sense<'static>,
    EdgeSampledEncoder<Sense<'static>, Sense<'static>>,
    Hd44780<PushPull<'static>, CycleDelay>,
>;

const CONFIG: PanelConfig = PanelConfig::DEFAULT;

/// Everything the EXTI4_15 handler touches
struct Shared {
    panel: FrontPanel,
    exti: ExtiPort,
    dispatcher: Dispatcher,
}

static SHARED: Mutex<CriticalSectionRawMutex, RefCell<Option<Shared>>> =
    Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    let p = embassy_stm32::init(Default::default());
    info!("leafSupply panel starting...");

    if let Err(e) = CONFIG.validate() {
        defmt::panic!("invalid panel config: {}", e);
    }
    debug!("panel config: {}", CONFIG);

    let delay = CycleDelay::new(SYSCLK_HZ);

    // Inputs
    let sense = Sense::new(Input::new(p.PA8, Pull::Down));
    let encoder = EdgeSampledEncoder::new(
        Sense::new(Input::new(p.PA7, Pull::Up)),
        Sense::new(Input::new(p.PB1, Pull::Up)),
    );

    // Edge detection before anything can press a key
    let dispatcher = Dispatcher::new(BUTTON_LINE, ENCODER_A_LINE);
    let mut exti = ExtiPort::new(EXTI4_15_LINES);
    exti.route(BUTTON_LINE, Port::A);
    exti.route(ENCODER_A_LINE, Port::A);
    dispatcher.configure(&mut exti);

    // Outputs
    let register = Hc595::new(
        PushPull::new(Output::new(p.PA0, Level::Low, Speed::Low)),
        PushPull::new(Output::new(p.PA1, Level::Low, Speed::Low)),
        PushPull::new(Output::new(p.PA2, Level::Low, Speed::Low)),
    );
    let mut lcd = Hd44780::new(
        PushPull::new(Output::new(p.PB3, Level::Low, Speed::Low)),
        PushPull::new(Output::new(p.PB4, Level::Low, Speed::Low)),
        [
            PushPull::new(Output::new(p.PB5, Level::Low, Speed::Low)),
            PushPull::new(Output::new(p.PB6, Level::Low, Speed::Low)),
            PushPull::new(Output::new(p.PB7, Level::Low, Speed::Low)),
            PushPull::new(Output::new(p.PA15, Level::Low, Speed::Low)),
        ],
        delay,
    );
    lcd.init(true, true);

    let mut panel = Panel::new(register, sense, encoder, lcd, CONFIG);
    panel.start();
    info!(
        "panel ready at {} ms, pattern {=u8:08b}",
        Instant::now().as_millis(),
        panel.pattern().bits()
    );

    SHARED.lock(|cell| {
        *cell.borrow_mut() = Some(Shared {
            panel,
            exti,
            dispatcher,
        });
    });

    // Below the time driver, which preempts the release wait
    interrupt::EXTI4_15.set_priority(Priority::P3);
    interrupt::EXTI4_15.unpend();
    // SAFETY: SHARED is populated, the handler has everything it needs
    unsafe { interrupt::EXTI4_15.enable() };

    loop {
        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn EXTI4_15() {
    let pressed = SHARED.lock(|cell| {
        let mut shared = cell.borrow_mut();
        let Some(shared) = shared.as_mut() else {
            // Edge before setup finished; drop it so the vector settles
            ExtiPort::new(EXTI4_15_LINES).clear_all();
            return None;
        };

        match shared.dispatcher.dispatch(&mut shared.exti, &mut shared.panel) {
            Dispatch::Button(report) => return Some(report),
            Dispatch::Rotation(outcome) if outcome.changed() => {
                debug!("counter {} tenths", shared.panel.counter().tenths());
            }
            Dispatch::Rotation(outcome) => trace!("rotation ignored: {}", outcome),
            Dispatch::Spurious => trace!("spurious EXTI4_15"),
        }
        None
    });

    if let Some(report) = pressed {
        await_release(report);
    }
}

/// Spin until the keypad is let go, with interrupts open between samples
fn await_release(mut report: ScanReport) {
    let mut debounce = CONFIG.release_debounce();
    let sense_asserted = || {
        SHARED.lock(|cell| {
            cell.borrow()
                .as_ref()
                .is_some_and(|shared| shared.panel.sense_asserted())
        })
    };
    report.await_release(&mut debounce, sense_asserted, &mut CycleDelay::new(SYSCLK_HZ));

    if !report.is_empty() {
        // Edges latched while the key was held belong to the same press
        SHARED.lock(|cell| {
            if let Some(shared) = cell.borrow_mut().as_mut() {
                shared.exti.clear_all();
            }
        });
        interrupt::EXTI4_15.unpend();
    }
    log_scan(&report);
}

fn log_scan(report: &ScanReport) {
    match report.release {
        Some(Ok(polls)) => debug!("keys {=u8:04b} released after {} polls", report.pressed, polls),
        Some(Err(timeout)) => warn!(
            "keys {=u8:04b} still held after {} polls, giving up",
            report.pressed, timeout.polls
        ),
        None => trace!("key edge with nothing pressed"),
    }
}
