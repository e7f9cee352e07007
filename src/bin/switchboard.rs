//! Switchboard firmware for the Raspberry Pi Pico
//!
//! Producer agents feed switch messages through the shared slot queue and
//! consumer agents drive the green and red switch outputs. One producer
//! toggles periodically; two more are released by the ON/OFF buttons
//! through their trigger relays. All agents run on core 0, matching the
//! original single-core pinning; core 1 carries the supervisor.

#![no_std]
#![no_main]

use defmt::unwrap;
use defmt_rtt as _; // global logger
use embassy_executor::Executor;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::multicore::{spawn_core1, Stack};
use panic_halt as _;
use static_cell::StaticCell;

use switchboard::channels::{SWITCH_OFF_TRIGGER, SWITCH_ON_TRIGGER, SWITCH_QUEUE};
use switchboard::hardware;
use switchboard::supervisor::Supervisor;
use switchboard::types::Message;

// Multicore setup
static mut CORE1_STACK: Stack<4096> = Stack::new();
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let supervisor = Supervisor::new();
    supervisor.print_startup_banner();

    // Core 1: supervision only
    spawn_core1(
        p.CORE1,
        unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK) },
        move || {
            let executor1 = EXECUTOR1.init(Executor::new());
            executor1.run(|spawner| {
                unwrap!(spawner.spawn(supervisor_task(supervisor)));
            });
        },
    );

    // Core 0: every agent
    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| {
        unwrap!(spawner.spawn(hardware::toggle_producer_task(&SWITCH_QUEUE)));
        unwrap!(spawner.spawn(hardware::triggered_producer_task(
            &SWITCH_QUEUE,
            &SWITCH_ON_TRIGGER,
            Message::SwitchOn,
        )));
        unwrap!(spawner.spawn(hardware::triggered_producer_task(
            &SWITCH_QUEUE,
            &SWITCH_OFF_TRIGGER,
            Message::SwitchOff,
        )));
        unwrap!(spawner.spawn(hardware::trigger_input_task(
            Input::new(p.PIN_14, Pull::Up),
            &SWITCH_ON_TRIGGER,
        )));
        unwrap!(spawner.spawn(hardware::trigger_input_task(
            Input::new(p.PIN_15, Pull::Up),
            &SWITCH_OFF_TRIGGER,
        )));
        unwrap!(spawner.spawn(hardware::switch_consumer_task(
            &SWITCH_QUEUE,
            Output::new(p.PIN_18, Level::Low), // green switch
        )));
        unwrap!(spawner.spawn(hardware::switch_consumer_task(
            &SWITCH_QUEUE,
            Output::new(p.PIN_19, Level::Low), // red switch
        )));
        unwrap!(spawner.spawn(hardware::status_task(Output::new(p.PIN_25, Level::Low))));
    })
}

/// Core 1 task wrapping the supervisor loop
#[embassy_executor::task]
async fn supervisor_task(mut supervisor: Supervisor) {
    supervisor.run().await;
}
