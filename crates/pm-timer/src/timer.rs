//! One-shot timers owned by a handle.
//!
//! A [`TimerHandle`] runs a callback once after a delay on the tokio runtime.
//! The timer belongs to the handle: cancelling or dropping the handle aborts
//! the timer, so a callback never fires after its owner is gone.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A scheduled one-shot callback.
///
/// # Runtime
///
/// [`TimerHandle::spawn`] must be called from within a tokio runtime.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
/// use pm_timer::TimerHandle;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// let mut timer = TimerHandle::spawn(Duration::from_millis(10), move || {
///     flag.store(true, Ordering::SeqCst);
/// });
/// timer.cancel();
///
/// tokio::time::sleep(Duration::from_millis(20)).await;
/// assert!(!fired.load(Ordering::SeqCst));
/// # }
/// ```
#[derive(Debug)]
pub struct TimerHandle {
    /// The sleeping task. `None` once cancelled.
    task: Option<JoinHandle<()>>,

    /// When the callback is due.
    deadline: Instant,
}

impl TimerHandle {
    /// Schedules `callback` to run once after `delay`.
    ///
    /// A zero delay fires on the next scheduler turn.
    pub fn spawn<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback();
        });

        Self {
            task: Some(task),
            deadline,
        }
    }

    /// Cancels the timer. Does nothing if it already fired or was cancelled.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Returns `true` while the callback has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Returns when the callback is due.
    #[must_use]
    pub const fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
