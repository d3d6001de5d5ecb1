//! Cancelable scheduled-callback queue.
//!
//! Timer effects are data, not closures: the session schedules them with a
//! due time and drains whatever has come due when the host advances time.
//! Deactivation clears the queue, so nothing scheduled before teardown can
//! fire after it. Effects drain in (due time, scheduling order), which keeps
//! the revealed order stable even if the host ticks in large jumps.

/// What a fired timer does to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// Reveal boot step `i`.
    BootStep(usize),
    /// Boot finished: enter Ready and emit the welcome banner.
    BootDone,
}

#[derive(Debug)]
struct Entry {
    due_ms: u64,
    seq: u64,
    effect: TimerEffect,
}

/// Ordered queue of pending timer effects.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an effect to fire once `now >= due_ms`.
    pub fn schedule(&mut self, due_ms: u64, effect: TimerEffect) {
        self.entries.push(Entry {
            due_ms,
            seq: self.next_seq,
            effect,
        });
        self.next_seq += 1;
    }

    /// Drain every effect due at `now_ms`, in scheduled order.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerEffect> {
        let mut due: Vec<Entry> = Vec::new();
        let mut pending: Vec<Entry> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due_ms <= now_ms {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        due.sort_by_key(|e| (e.due_ms, e.seq));
        due.into_iter().map(|e| e.effect).collect()
    }

    /// Discard every pending effect without firing it.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of effects still scheduled.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
