//! One-shot timer queue for the single-threaded UI loop.
//!
//! Hosts own the clock and pass the current time in; the queue only orders
//! tasks by deadline. Pure logic (no hardware, no threads) so it can be
//! unit-tested with a simulated clock.
//!
//! Timers cannot be cancelled once armed. Tasks sharing a deadline are
//! dispatched in the order they were scheduled.

extern crate alloc;

use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

/// Milliseconds on the host clock.
pub type Millis = u64;

/// Identifier handed out when a task is armed (scheduling order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerId(u64);

struct Entry<T> {
    deadline: Millis,
    id: TimerId,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: BinaryHeap is a max-heap, earliest (deadline, id) must pop first.
    fn cmp(&self, other: &Self) -> Ordering {
        (other.deadline, other.id).cmp(&(self.deadline, self.id))
    }
}

/// Delay-ordered queue of one-shot tasks.
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_id: u64,
}

impl<T> TimerQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_id: 0,
        }
    }

    /// Arm `task` to fire at the absolute time `deadline`.
    pub fn schedule_at(&mut self, deadline: Millis, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Entry { deadline, id, task });
        id
    }

    /// Arm `task` to fire `delay` ms after `now`.
    pub fn schedule_after(&mut self, now: Millis, delay: Millis, task: T) -> TimerId {
        self.schedule_at(now.saturating_add(delay), task)
    }

    /// Remove and return the earliest task whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, T)> {
        if self.next_deadline()? > now {
            return None;
        }
        self.heap.pop().map(|entry| (entry.deadline, entry.task))
    }

    /// Deadline of the next task to fire, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.heap.peek().map(|entry| entry.deadline)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn drain(queue: &mut TimerQueue<&'static str>, now: Millis) -> Vec<&'static str> {
        let mut fired = Vec::new();
        while let Some((_, task)) = queue.pop_due(now) {
            fired.push(task);
        }
        fired
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(0, 2000, "progress");

        assert!(queue.pop_due(1999).is_none());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(2000), Some((2000, "progress")));
        assert!(queue.is_empty());
    }

    #[test]
    fn fires_in_deadline_order_regardless_of_arming_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_at(4000, "notification");
        queue.schedule_at(2000, "progress");
        queue.schedule_at(3000, "well-being");

        assert_eq!(queue.next_deadline(), Some(2000));
        assert_eq!(
            drain(&mut queue, 10_000),
            ["progress", "well-being", "notification"]
        );
    }

    #[test]
    fn equal_deadlines_keep_scheduling_order() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule_at(500, "a");
        let second = queue.schedule_at(500, "b");
        queue.schedule_at(500, "c");

        assert!(first < second);
        assert_eq!(drain(&mut queue, 500), ["a", "b", "c"]);
    }

    #[test]
    fn late_tick_fires_everything_due() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(100, 2000, "progress");
        queue.schedule_after(100, 3000, "well-being");
        queue.schedule_after(100, 4000, "notification");

        assert_eq!(drain(&mut queue, 3100), ["progress", "well-being"]);
        assert_eq!(queue.next_deadline(), Some(4100));
    }

    #[test]
    fn schedule_after_saturates() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(Millis::MAX - 1, 10, "far");
        assert_eq!(queue.next_deadline(), Some(Millis::MAX));
    }
}
