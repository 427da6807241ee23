//! Logical clock and timer queue.
//!
//! Every delayed behaviour on the page (typewriter steps, cursor blink,
//! notification expiry, the simulated contact round trip) is a timer in this
//! queue. The queue never looks at wall time: the caller advances it, which
//! keeps every timed component testable without sleeping.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// A timer waiting in the queue.
#[derive(Debug)]
struct Pending<E> {
    due: Duration,
    seq: u64,
    event: E,
}

impl<E> PartialEq for Pending<E> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<E> Eq for Pending<E> {}

impl<E> PartialOrd for Pending<E> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Ord for Pending<E> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Timer queue ordered by due time, then by scheduling order.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Pending<E>>>,
}

impl<E> Scheduler<E> {
    /// Creates an empty queue with the clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current logical time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `event` to fire `delay` after the current logical time.
    pub fn after(&mut self, delay: Duration, event: E) {
        let due = self.now + delay;
        self.at(due, event);
    }

    /// Schedules `event` at an absolute logical time.
    pub fn at(&mut self, due: Duration, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Pending { due, seq, event }));
    }

    /// Pops the next timer due at or before `until`, moving the clock to its
    /// due time. Returns `None` (and moves the clock to `until`) once nothing
    /// else is due.
    ///
    /// Callers loop on this so that handlers can schedule follow-up timers
    /// that are themselves already due.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let is_due = self
            .queue
            .peek()
            .is_some_and(|Reverse(pending)| pending.due <= until);

        if !is_due {
            if until > self.now {
                self.now = until;
            }
            return None;
        }

        let Reverse(pending) = self.queue.pop()?;
        if pending.due > self.now {
            self.now = pending.due;
        }
        Some(pending.event)
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}
