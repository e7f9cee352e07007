//! Trigger relay - hand-off from event context to a producer agent
//!
//! Button edges arrive in a restricted context that must not perform queue
//! operations (a publish may suspend). The relay defers the work: the
//! event side sets a saturating release signal and returns immediately,
//! the paired producer task awaits the signal and does the publish.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// A one-slot release signal between an event source and one producer.
pub struct TriggerRelay<M: RawMutex> {
    pending: Signal<M, ()>,
}

impl<M: RawMutex> TriggerRelay<M> {
    pub const fn new() -> Self {
        Self {
            pending: Signal::new(),
        }
    }

    /// Mark a release as pending. Never blocks and is safe to call from
    /// interrupt context; signalling an already-pending relay leaves a
    /// single pending release.
    pub fn signal_from_event(&self) {
        self.pending.signal(());
    }

    /// Suspend until a release is pending, then consume it. Task context
    /// only.
    pub async fn released(&self) {
        self.pending.wait().await;
    }
}

impl<M: RawMutex> Default for TriggerRelay<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::{block_on, poll_once};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    #[test]
    fn release_wakes_a_waiting_agent() {
        let relay: TriggerRelay<NoopRawMutex> = TriggerRelay::new();
        assert!(poll_once(relay.released()).is_pending());

        relay.signal_from_event();
        block_on(relay.released());
    }

    #[test]
    fn repeated_signals_collapse_into_one_release() {
        let relay: TriggerRelay<NoopRawMutex> = TriggerRelay::new();
        relay.signal_from_event();
        relay.signal_from_event();

        block_on(relay.released());
        assert!(poll_once(relay.released()).is_pending());
    }
}
