use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);

/// Coalesces bursts of values into a single delayed call of `sink`.
///
/// Each [`Debouncer::call`] restarts the quiet period; when it elapses the
/// sink receives the value of the latest call. Dropping the debouncer
/// cancels whatever is pending. Must be used inside a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    sink: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, sink: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            sink: Arc::new(sink),
            pending: None,
        }
    }

    pub fn call(&mut self, value: T) {
        self.cancel();

        let delay = self.delay;
        let sink = Arc::clone(&self.sink);

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sink(value);
        }));
    }

    /// Whether a call is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("Cancelling pending call");
            }
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_debouncer() -> (Debouncer<&'static str>, Arc<Mutex<Vec<&'static str>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&calls);
        let debouncer = Debouncer::new(DEFAULT_DELAY, move |value| {
            recorder.lock().unwrap().push(value);
        });

        (debouncer, calls)
    }

    async fn wait(millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn should_fire_once_with_latest_value_after_quiet_period() {
        let (mut debouncer, calls) = recording_debouncer();

        debouncer.call("y");
        wait(100).await;
        debouncer.call("yo");
        wait(100).await;
        debouncer.call("yoga");

        wait(249).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        wait(2).await;
        assert_eq!(*calls.lock().unwrap(), vec!["yoga"]);
        assert!(!debouncer.is_pending());
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn should_fire_again_for_edits_after_quiet_period() {
        let (mut debouncer, calls) = recording_debouncer();

        debouncer.call("music");
        wait(300).await;
        debouncer.call("art");
        wait(300).await;

        assert_eq!(*calls.lock().unwrap(), vec!["music", "art"]);
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn when_cancelled_should_never_fire() {
        let (mut debouncer, calls) = recording_debouncer();

        debouncer.call("food");
        wait(100).await;
        debouncer.cancel();
        wait(500).await;

        assert!(calls.lock().unwrap().is_empty());
    }

    #[test_log::test(tokio::test(start_paused = true))]
    async fn when_dropped_should_never_fire() {
        let (mut debouncer, calls) = recording_debouncer();

        debouncer.call("science");
        drop(debouncer);
        wait(500).await;

        assert!(calls.lock().unwrap().is_empty());
    }
}
