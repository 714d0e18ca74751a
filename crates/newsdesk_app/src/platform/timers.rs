use std::cmp::Reverse;
use std::collections::BinaryHeap;

use newsdesk_core::Timer;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct PendingTimer {
    due_at: u64,
    order: u64,
    timer: Timer,
}

/// Virtual clock plus one-shot timers, fired in (due time, schedule order).
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_order: u64,
    pending: BinaryHeap<Reverse<PendingTimer>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, timer: Timer, after_ms: u64) -> u64 {
        let due_at = self.now_ms.saturating_add(after_ms);
        self.next_order += 1;
        self.pending.push(Reverse(PendingTimer {
            due_at,
            order: self.next_order,
            timer,
        }));
        due_at
    }

    /// Pops the next timer due at or before `limit_ms`, moving the clock to its due time.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<Timer> {
        let next = self.pending.peek()?;
        if next.0.due_at > limit_ms {
            return None;
        }
        let Reverse(task) = self.pending.pop()?;
        self.now_ms = self.now_ms.max(task.due_at);
        Some(task.timer)
    }

    /// Moves the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
