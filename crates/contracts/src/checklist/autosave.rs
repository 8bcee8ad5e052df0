use super::surface::TimerHandle;

/// Debounces autosaves behind a single cancel-and-replace timer.
///
/// Each armed timer carries a generation number. A firing whose generation is
/// no longer current belongs to a replaced timer and is ignored.
#[derive(Debug)]
pub struct AutosaveScheduler<T: TimerHandle> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T: TimerHandle> AutosaveScheduler<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Cancel the pending timer, if any, and arm a new one through `arm`.
    pub fn reschedule(&mut self, arm: impl FnOnce(u32, u64) -> T) -> u64 {
        self.cancel();
        self.generation += 1;
        self.pending = Some(arm(self.delay_ms, self.generation));
        self.generation
    }

    /// Safe to call with nothing pending.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }

    /// Whether a firing with `generation` should save now.
    pub fn take_due(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(timer) => {
                timer.release();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingTimer(Rc<RefCell<u32>>);

    impl TimerHandle for CountingTimer {
        fn cancel(self) {
            *self.0.borrow_mut() += 1;
        }
    }

    /// Records how each timer left the scheduler.
    struct TrackedTimer(Rc<RefCell<Vec<&'static str>>>);

    impl TimerHandle for TrackedTimer {
        fn cancel(self) {
            self.0.borrow_mut().push("cancel");
        }

        fn release(self) {
            self.0.borrow_mut().push("release");
        }
    }

    #[test]
    fn test_reschedule_cancels_previous() {
        let cancelled = Rc::new(RefCell::new(0));
        let mut scheduler = AutosaveScheduler::new(2000);

        let first = scheduler.reschedule(|delay, _| {
            assert_eq!(delay, 2000);
            CountingTimer(cancelled.clone())
        });
        let second = scheduler.reschedule(|_, _| CountingTimer(cancelled.clone()));

        assert_eq!(*cancelled.borrow(), 1);
        assert!(!scheduler.take_due(first));
        assert!(scheduler.take_due(second));
        assert!(!scheduler.is_pending());
        // already consumed
        assert!(!scheduler.take_due(second));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let cancelled = Rc::new(RefCell::new(0));
        let mut scheduler = AutosaveScheduler::new(2000);
        let generation = scheduler.reschedule(|_, _| CountingTimer(cancelled.clone()));

        scheduler.cancel();
        scheduler.cancel();
        assert_eq!(*cancelled.borrow(), 1);
        assert!(!scheduler.take_due(generation));
    }

    #[test]
    fn test_due_timer_is_released_not_cancelled() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scheduler = AutosaveScheduler::new(2000);

        let stale = scheduler.reschedule(|_, _| TrackedTimer(log.clone()));
        let current = scheduler.reschedule(|_, _| TrackedTimer(log.clone()));
        assert!(!scheduler.take_due(stale));
        assert!(scheduler.take_due(current));

        assert_eq!(*log.borrow(), vec!["cancel", "release"]);
        assert!(!scheduler.is_pending());
    }
}
