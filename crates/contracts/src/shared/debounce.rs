//! Delays propagation of rapidly changing input until it settles.
//!
//! The state machine knows nothing about timers: the caller pushes values with
//! a timestamp and either polls with the current time or settles a token when
//! its timer fires. A timer belonging to a superseded value settles nothing.

/// Handle returned by [`Debouncer::push`]; only the latest one can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay_ms: u64,
    seq: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
    seq: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            seq: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replaces any pending value and restarts the delay.
    pub fn push(&mut self, value: T, now_ms: u64) -> DebounceToken {
        self.seq += 1;
        self.pending = Some(Pending {
            value,
            deadline_ms: now_ms.saturating_add(self.delay_ms),
            seq: self.seq,
        });
        DebounceToken(self.seq)
    }

    /// Emits the pending value once its delay has fully elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.deadline_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Emits the pending value if `token` is still the latest push.
    pub fn settle(&mut self, token: DebounceToken) -> Option<T> {
        match &self.pending {
            Some(p) if p.seq == token.0 => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Emits the pending value immediately (clear button, Enter key).
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_then_cleared_emits_once() {
        let mut d = Debouncer::new(500);
        d.push("john".to_string(), 0);
        d.push(String::new(), 200);

        assert_eq!(d.poll(499), None);
        assert_eq!(d.poll(600), None);
        assert_eq!(d.poll(700), Some(String::new()));
        assert_eq!(d.poll(2_000), None);
    }

    #[test]
    fn test_superseded_timer_settles_nothing() {
        let mut d = Debouncer::new(500);
        let first = d.push("jo", 0);
        let second = d.push("john", 120);

        assert_eq!(d.settle(first), None);
        assert!(d.is_pending());
        assert_eq!(d.settle(second), Some("john"));
        assert_eq!(d.settle(second), None);
    }

    #[test]
    fn test_flush_and_cancel() {
        let mut d = Debouncer::new(500);
        d.push(1, 0);
        assert_eq!(d.flush(), Some(1));
        assert_eq!(d.poll(10_000), None);

        d.push(2, 0);
        d.cancel();
        assert_eq!(d.poll(10_000), None);
    }
}
