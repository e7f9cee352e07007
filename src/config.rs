//! Build-time configuration for the switchboard firmware
//! RP2040-based switch relay on a Raspberry Pi Pico

use embassy_time::Duration;

// ===================================================================
// Queue Configuration
// ===================================================================

/// Capacity of the shared slot queue between producers and consumers
pub const QUEUE_DEPTH: usize = 10;

/// Upper bound on agents that may block on one side of the queue at the
/// same time (sizes the semaphore wait queues)
pub const MAX_AGENTS: usize = 8;

// ===================================================================
// Agent Cadence
// ===================================================================

/// Pause inserted after each publish by the periodic producer.
/// `None` publishes as fast as the queue allows; the timed setting would
/// be `Some(Duration::from_millis(1250))`.
pub const PRODUCER_CADENCE: Option<Duration> = None;

/// Pause inserted after each withdrawal by the consumers.
/// `None` withdraws as fast as the queue allows; the timed setting would
/// be `Some(Duration::from_millis(2500))`.
pub const CONSUMER_CADENCE: Option<Duration> = None;

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

// Switch outputs - driven by the consumer agents
pub const GREEN_SWITCH_PIN: u8 = 18; // Green switch output
pub const RED_SWITCH_PIN: u8 = 19; // Red switch output

// Trigger buttons - falling edge releases the paired producer
pub const SWITCH_ON_BUTTON_PIN: u8 = 14; // ON button (pull-up)
pub const SWITCH_OFF_BUTTON_PIN: u8 = 15; // OFF button (pull-up)

// Status LED
pub const LED_STATUS_PIN: u8 = 25; // Built-in LED on Pico

// ===================================================================
// Trigger Input Options
// ===================================================================

/// Re-arm hold-off after a button edge, so contact bounce cannot signal
/// the relay again immediately
pub const TRIGGER_HOLDOFF_MS: u64 = 20;
