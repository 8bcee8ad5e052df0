use contracts::checklist::TimerHandle;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

/// A scheduled `setTimeout` callback.
pub struct BrowserTimer(Timeout);

impl BrowserTimer {
    pub fn start<F>(delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self(Timeout::new(delay_ms, callback))
    }
}

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        // clearTimeout; the returned closure is dropped unused
        let _ = self.0.cancel();
    }

    fn release(self) {
        // Dropping the Timeout frees the callback that is running right now,
        // so the drop waits for the next task.
        let timeout = self.0;
        spawn_local(async move { drop(timeout) });
    }
}
