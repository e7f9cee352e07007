//! Hardware layer for the RP2040 build
//!
//! Wraps the generic agent loops in Embassy tasks, bridges button edges
//! into the trigger relays and drives the status LED. Pin construction
//! happens in the firmware binary; this module only consumes the
//! resulting `Input`/`Output` handles.

use defmt::info;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Timer};

use crate::agents::{run_switch_consumer, run_toggle_producer, run_triggered_producer};
use crate::channels::{SwitchQueue, SwitchRelay};
use crate::config::{CONSUMER_CADENCE, PRODUCER_CADENCE, TRIGGER_HOLDOFF_MS};
use crate::types::Message;

// ===================================================================
// Agent Tasks
// ===================================================================

/// Periodic producer task, toggling between switch-on and switch-off
#[embassy_executor::task]
pub async fn toggle_producer_task(queue: &'static SwitchQueue) -> ! {
    info!("Toggle producer started");
    run_toggle_producer(queue, PRODUCER_CADENCE).await
}

/// Reactive producer task, released by its trigger relay
#[embassy_executor::task(pool_size = 2)]
pub async fn triggered_producer_task(
    queue: &'static SwitchQueue,
    relay: &'static SwitchRelay,
    message: Message,
) -> ! {
    run_triggered_producer(queue, relay, message).await
}

/// Consumer task driving one switch output
#[embassy_executor::task(pool_size = 2)]
pub async fn switch_consumer_task(queue: &'static SwitchQueue, switch: Output<'static>) -> ! {
    info!("Switch consumer started");
    run_switch_consumer(queue, switch, CONSUMER_CADENCE).await
}

// ===================================================================
// Trigger Input Bridge
// ===================================================================

/// Await falling edges on a button and set the paired relay. This is the
/// whole event path: no queue operations happen here, the paired producer
/// does the publish in task context.
#[embassy_executor::task(pool_size = 2)]
pub async fn trigger_input_task(mut button: Input<'static>, relay: &'static SwitchRelay) -> ! {
    info!("Trigger input armed");
    loop {
        button.wait_for_falling_edge().await;
        relay.signal_from_event();
        // Contact-bounce hold-off before re-arming
        Timer::after(Duration::from_millis(TRIGGER_HOLDOFF_MS)).await;
    }
}

// ===================================================================
// Status LED Task
// ===================================================================

/// Heartbeat pattern on the status LED
#[embassy_executor::task]
pub async fn status_task(mut status_led: Output<'static>) -> ! {
    info!("Status LED task started");

    loop {
        status_led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        status_led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
