//! Delay-and-coalesce scheduling for input-driven triggers.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

struct Pending {
    generation: u64,
    token: CancellationToken,
}

/// Runs at most one scheduled task per quiet period.
///
/// Each [`schedule`](Debouncer::schedule) cancels the previously pending
/// task and starts a fresh delay. A task cancelled or replaced before it
/// claims its slot never runs, even when its deadline has already passed.
/// Once claimed it runs to completion.
pub struct Debouncer {
    delay: Duration,
    pending: Arc<Mutex<Option<Pending>>>,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Arc::new(Mutex::new(None)), generation: AtomicU64::new(0) }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task` to run after the delay, replacing any pending task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&self, task: F) -> CancellationToken
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let deadline = tokio::time::Instant::now() + self.delay;
        let previous = self
            .pending
            .lock()
            .replace(Pending { generation, token: token.clone() });
        if let Some(previous) = previous {
            previous.token.cancel();
            debug!(generation = previous.generation, "cancelled pending trigger");
        }

        let delay = self.delay;
        let pending = Arc::clone(&self.pending);
        let guard = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => return,
                _ = tokio::time::sleep_until(deadline) => {}
            }
            // The slot is the source of truth: a replaced or taken slot means
            // this task was superseded, even if the sleep won the poll.
            {
                let mut slot = pending.lock();
                if guard.is_cancelled() || !slot.as_ref().is_some_and(|p| p.generation == generation) {
                    return;
                }
                slot.take();
            }
            debug!(generation, delay_ms = delay.as_millis() as u64, "debounced trigger fired");
            task().await;
        });
        token
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(p) => {
                p.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether a task is waiting for its delay to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.lock().is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
