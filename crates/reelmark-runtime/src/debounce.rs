use std::time::{Duration, Instant};

/// Trailing-edge debouncer driven by caller-supplied instants
///
/// Each `push` replaces the pending value and restarts the quiet period; the
/// value becomes available from `fire` once the quiet period has elapsed with
/// no further push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value without waiting for the quiet period.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Take the pending value if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.flush()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_nothing_fires_before_the_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.push("a", start);

        assert_eq!(debouncer.fire(start + Duration::from_millis(499)), None);
        assert_eq!(debouncer.fire(start + DELAY), Some("a"));
        assert_eq!(debouncer.fire(start + DELAY * 2), None);
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        let mut fired = Vec::new();
        for (i, value) in ["a", "al", "ali", "alie", "alien"].into_iter().enumerate() {
            let now = start + Duration::from_millis(100 * i as u64);
            fired.extend(debouncer.fire(now));
            debouncer.push(value, now);
        }
        fired.extend(debouncer.fire(start + Duration::from_millis(400) + DELAY));

        assert_eq!(fired, vec!["alien"]);
    }

    #[test]
    fn test_cancel_and_flush() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.push(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.fire(start + DELAY), None);

        debouncer.push(2, start);
        assert_eq!(debouncer.deadline(), Some(start + DELAY));
        assert_eq!(debouncer.flush(), Some(2));
        assert_eq!(debouncer.deadline(), None);
    }
}
