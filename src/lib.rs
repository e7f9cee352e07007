//! Switchboard - bounded-buffer switch relay for RP2040
//!
//! This library provides the synchronization core of a small dual-core
//! firmware: producer agents publish switch messages into a fixed-depth
//! slot queue, consumer agents withdraw them and drive output pins.
//! Reactive producers are released from button edges through trigger
//! relays so the event path never touches the queue directly.
//!
//! ## Architecture
//! - **Slot queue**: counting semaphores track free and filled slots,
//!   write and read cursors each sit behind their own mutex
//! - **Trigger relay**: saturating release signal bridging event context
//!   to a waiting producer task
//! - **Multi-core**: all agents pinned to core 0, supervision on core 1
//! - **Async**: Embassy framework with async/await
//!
//! The hardware layer is gated behind the `rp2040` feature so the core
//! builds and tests on a host toolchain.

#![cfg_attr(not(test), no_std)]

pub mod agents;
pub mod channels;
pub mod config;
#[cfg(feature = "rp2040")]
pub mod hardware;
pub mod queue;
pub mod relay;
pub mod supervisor;
pub mod types;

mod fmt;
