//! Shared queue and trigger relays wired between agent tasks
//!
//! This module owns the single slot queue and the per-producer trigger
//! relays. Tasks receive them as `&'static` references at spawn time;
//! nothing else touches them directly.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::config::QUEUE_DEPTH;
use crate::queue::SlotQueue;
use crate::relay::TriggerRelay;

/// Queue type shared by all agents. `CriticalSectionRawMutex` keeps the
/// primitives correct even when agents run on both cores.
pub type SwitchQueue = SlotQueue<CriticalSectionRawMutex, QUEUE_DEPTH>;

/// Relay type pairing one event source with one producer.
pub type SwitchRelay = TriggerRelay<CriticalSectionRawMutex>;

/// The slot queue between every producer and consumer agent.
pub static SWITCH_QUEUE: SwitchQueue = SwitchQueue::new();

/// Release signal for the switch-on producer, set from the ON button edge.
pub static SWITCH_ON_TRIGGER: SwitchRelay = SwitchRelay::new();

/// Release signal for the switch-off producer, set from the OFF button edge.
pub static SWITCH_OFF_TRIGGER: SwitchRelay = SwitchRelay::new();
