// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered timer queue.
//!
//! Timers are registered with an absolute deadline and fired by polling with
//! the current time. Nothing here sleeps: the application feeds it ticks.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

/// Handle returned when a timer is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    at: Instant,
    handle: TimerHandle,
    task: T,
}

// Ordered by deadline, then registration order. The payload is ignored.
impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.handle == other.handle
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at
            .cmp(&other.at)
            .then_with(|| self.handle.cmp(&other.handle))
    }
}

/// A queue of tasks waiting for their deadline.
#[derive(Debug)]
pub struct Scheduler<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_handle: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_handle: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `task` to fire once `at` has been reached.
    pub fn schedule(&mut self, at: Instant, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.heap.push(Reverse(Entry { at, handle, task }));
        handle
    }

    /// Removes and returns the earliest task whose deadline is at or before `now`.
    ///
    /// Tasks sharing a deadline come out in the order they were registered.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerHandle, T)> {
        let due = self
            .heap
            .peek()
            .is_some_and(|Reverse(entry)| entry.at <= now);
        if !due {
            return None;
        }
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.handle, entry.task))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(entry)| entry.at)
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
