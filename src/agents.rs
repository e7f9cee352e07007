//! Producer and consumer agent loops
//!
//! Agents are infinite async loops around the shared slot queue. They are
//! written against the queue and relay types plus the `OutputPin` trait so
//! the same loops run under an Embassy executor on target and under a
//! host executor in tests; the hardware layer wraps them in
//! `#[embassy_executor::task]` functions.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::OutputPin;

use crate::fmt::info;
use crate::queue::SlotQueue;
use crate::relay::TriggerRelay;
use crate::types::Message;

/// Periodic producer: alternates between switch-on and switch-off and
/// publishes each message. With `cadence` unset it publishes as fast as
/// the queue accepts, pacing itself only through free-slot availability.
pub async fn run_toggle_producer<M: RawMutex, const C: usize>(
    queue: &SlotQueue<M, C>,
    cadence: Option<Duration>,
) -> ! {
    let mut switched_on = false;
    loop {
        switched_on = !switched_on;
        let message = if switched_on {
            Message::SwitchOn
        } else {
            Message::SwitchOff
        };
        queue.publish(message).await;
        if let Some(period) = cadence {
            Timer::after(period).await;
        }
    }
}

/// Reactive producer: waits for its trigger relay, then publishes its
/// assigned message. One relay release results in exactly one publish.
pub async fn run_triggered_producer<M: RawMutex, const C: usize>(
    queue: &SlotQueue<M, C>,
    relay: &TriggerRelay<M>,
    message: Message,
) -> ! {
    info!("triggered producer armed: {}", message);
    loop {
        relay.released().await;
        queue.publish(message).await;
    }
}

/// Consumer: withdraws messages and drives the assigned output. The
/// message-to-level mapping is total; messages without a level (no-ops
/// and unknown codes) cause no output action.
pub async fn run_switch_consumer<M: RawMutex, const C: usize, P: OutputPin>(
    queue: &SlotQueue<M, C>,
    mut output: P,
    cadence: Option<Duration>,
) -> ! {
    loop {
        let message = queue.withdraw().await;
        if let Some(level) = message.pin_state() {
            let _ = output.set_state(level);
        }
        if let Some(period) = cadence {
            Timer::after(period).await;
        }
    }
}
