//! Fixed-capacity slot queue between producer and consumer agents
//!
//! The queue is a circular buffer of message slots guarded by two counting
//! semaphores and two cursor mutexes. The semaphores account for space
//! (free slots) and availability (filled slots); the mutexes serialize
//! cursor arithmetic among producers and among consumers respectively, so
//! one producer and one consumer can operate concurrently. A publish
//! blocks while the queue is full and a withdrawal blocks while it is
//! empty, with no timeout.

use core::cell::UnsafeCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::semaphore::{FairSemaphore, Semaphore};

use crate::config::MAX_AGENTS;
use crate::fmt::debug;
use crate::types::Message;

/// Bounded FIFO queue with capacity `C`.
///
/// Messages are delivered in publish order; when several producers publish
/// concurrently their messages are ordered by write-cursor acquisition.
/// Any waiting consumer may receive any message.
pub struct SlotQueue<M: RawMutex, const C: usize> {
    slots: [UnsafeCell<Message>; C],
    write_cursor: Mutex<M, usize>,
    read_cursor: Mutex<M, usize>,
    free_slots: FairSemaphore<M, MAX_AGENTS>,
    filled_slots: FairSemaphore<M, MAX_AGENTS>,
}

// Safety: a slot is written only while holding a free-slot permit plus the
// write-cursor mutex, and read only while holding a filled-slot permit plus
// the read-cursor mutex. The permit for the opposite side is not released
// until the access is complete, so no slot is ever aliased mutably.
unsafe impl<M: RawMutex, const C: usize> Sync for SlotQueue<M, C> {}

impl<M: RawMutex, const C: usize> SlotQueue<M, C> {
    /// Create an empty queue. `C` must be at least 1.
    pub const fn new() -> Self {
        Self {
            slots: [const { UnsafeCell::new(Message::NoOp) }; C],
            write_cursor: Mutex::new(0),
            read_cursor: Mutex::new(0),
            free_slots: FairSemaphore::new(C),
            filled_slots: FairSemaphore::new(0),
        }
    }

    /// Number of message slots.
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Store `message` in the next free slot, suspending while the queue
    /// is full. The filled-slot count is raised only after the slot and
    /// cursor updates are complete.
    pub async fn publish(&self, message: Message) {
        let permit = self.free_slots.acquire(1).await.unwrap();
        {
            let mut cursor = self.write_cursor.lock().await;
            // The free-slot permit plus the cursor lock make this slot
            // exclusively ours.
            unsafe { *self.slots[*cursor].get() = message };
            debug!("message written: {}", message);
            *cursor = (*cursor + 1) % C;
        }
        permit.disarm();
        self.filled_slots.release(1);
    }

    /// Take the oldest message out of the queue, suspending while the
    /// queue is empty. The free-slot count is raised only after the slot
    /// has been read out.
    pub async fn withdraw(&self) -> Message {
        let permit = self.filled_slots.acquire(1).await.unwrap();
        let message = {
            let mut cursor = self.read_cursor.lock().await;
            let message = unsafe { *self.slots[*cursor].get() };
            debug!("message read: {}", message);
            *cursor = (*cursor + 1) % C;
            message
        };
        permit.disarm();
        self.free_slots.release(1);
        message
    }
}

impl<M: RawMutex, const C: usize> Default for SlotQueue<M, C> {
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
    fn delivers_in_publish_order() {
        let queue: SlotQueue<NoopRawMutex, 4> = SlotQueue::new();
        block_on(async {
            queue.publish(Message::SwitchOn).await;
            queue.publish(Message::SwitchOff).await;
            queue.publish(Message::NoOp).await;
            assert_eq!(queue.withdraw().await, Message::SwitchOn);
            assert_eq!(queue.withdraw().await, Message::SwitchOff);
            assert_eq!(queue.withdraw().await, Message::NoOp);
        });
    }

    #[test]
    fn publish_blocks_at_capacity() {
        let queue: SlotQueue<NoopRawMutex, 1> = SlotQueue::new();
        block_on(queue.publish(Message::SwitchOn));

        // Queue full: a second publish must suspend.
        assert!(poll_once(queue.publish(Message::SwitchOff)).is_pending());

        // Exactly one withdrawal opens exactly one slot.
        assert_eq!(block_on(queue.withdraw()), Message::SwitchOn);
        block_on(queue.publish(Message::SwitchOff));
        assert!(poll_once(queue.publish(Message::NoOp)).is_pending());
        assert_eq!(block_on(queue.withdraw()), Message::SwitchOff);
    }

    #[test]
    fn withdraw_blocks_while_empty() {
        let queue: SlotQueue<NoopRawMutex, 4> = SlotQueue::new();
        assert!(poll_once(queue.withdraw()).is_pending());

        block_on(queue.publish(Message::NoOp));
        assert_eq!(block_on(queue.withdraw()), Message::NoOp);
        assert!(poll_once(queue.withdraw()).is_pending());
    }

    #[test]
    fn frees_and_fills_conserve_capacity() {
        let queue: SlotQueue<NoopRawMutex, 4> = SlotQueue::new();
        for _ in 0..queue.capacity() {
            block_on(queue.publish(Message::SwitchOn));
        }
        assert!(poll_once(queue.publish(Message::SwitchOff)).is_pending());

        block_on(queue.withdraw());
        block_on(queue.publish(Message::SwitchOff));
        assert!(poll_once(queue.publish(Message::NoOp)).is_pending());

        for _ in 0..queue.capacity() {
            block_on(queue.withdraw());
        }
        assert!(poll_once(queue.withdraw()).is_pending());
    }

    #[test]
    fn cursors_wrap_around() {
        let queue: SlotQueue<NoopRawMutex, 2> = SlotQueue::new();
        block_on(async {
            for _ in 0..5 {
                queue.publish(Message::SwitchOn).await;
                queue.publish(Message::SwitchOff).await;
                assert_eq!(queue.withdraw().await, Message::SwitchOn);
                assert_eq!(queue.withdraw().await, Message::SwitchOff);
            }
        });
    }
}
