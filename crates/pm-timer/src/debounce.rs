//! Value debouncer.
//!
//! A [`Debouncer`] holds back a rapidly changing value until it has been
//! left alone for a quiet period, then commits it. Commits update the stable
//! value and are also delivered on a channel so an event loop can react.
//!
//! ```text
//!  observe("a")   observe("ab")   observe("abc")          commit "abc"
//!  ─────┬──────────────┬──────────────┬──────── delay ────────┬─────────►
//!       └─ timer ✗     └─ timer ✗     └─ timer ───────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::timer::TimerHandle;

/// State shared with the pending timer.
#[derive(Debug)]
struct Shared<T> {
    stable: T,

    /// Bumped on every observe and cancel. A timer commits only if the
    /// generation it was scheduled under is still current.
    generation: u64,
}

/// Delays a value until it stops changing.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pm_timer::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut search = Debouncer::new(String::new(), Duration::from_millis(50));
///
/// search.observe("l".to_owned());
/// search.observe("la".to_owned());
/// search.observe("lamp".to_owned());
/// assert_eq!(search.stable(), "");
///
/// let committed = search.recv().await;
/// assert_eq!(committed.as_deref(), Some("lamp"));
/// assert_eq!(search.stable(), "lamp");
/// # }
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    shared: Arc<Mutex<Shared<T>>>,
    delay: Duration,
    pending: Option<TimerHandle>,
    commit_tx: mpsc::UnboundedSender<T>,
    commit_rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + 'static,
{
    /// Creates a debouncer whose stable value starts as `initial`.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (commit_tx, commit_rx) = mpsc::unbounded_channel();
        Self {
            shared: Arc::new(Mutex::new(Shared {
                stable: initial,
                generation: 0,
            })),
            delay,
            pending: None,
            commit_tx,
            commit_rx,
        }
    }

    /// Records a new value and restarts the quiet period.
    ///
    /// Any commit scheduled by an earlier call is cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn observe(&mut self, value: T) {
        let generation = {
            let mut shared = self.shared.lock();
            shared.generation = shared.generation.wrapping_add(1);
            shared.generation
        };

        if let Some(mut previous) = self.pending.take() {
            previous.cancel();
            trace!("Restarted debounce timer");
        }

        let shared = Arc::clone(&self.shared);
        let commit_tx = self.commit_tx.clone();
        self.pending = Some(TimerHandle::spawn(self.delay, move || {
            let mut shared = shared.lock();
            if shared.generation != generation {
                return;
            }
            shared.stable = value.clone();
            drop(shared);

            debug!("Debounced value committed");
            // Send fails only once the debouncer is gone.
            let _ = commit_tx.send(value);
        }));
    }

    /// Returns a copy of the last committed value.
    #[must_use]
    pub fn stable(&self) -> T {
        self.shared.lock().stable.clone()
    }

    /// Returns the quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the quiet period used by subsequent calls to [`observe`].
    ///
    /// A commit already scheduled keeps its original deadline.
    ///
    /// [`observe`]: Debouncer::observe
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Returns `true` if a commit is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(TimerHandle::is_pending)
    }

    /// Waits for the next commit.
    ///
    /// Never resolves while nothing is pending, which makes it suitable as a
    /// `tokio::select!` branch.
    pub async fn recv(&mut self) -> Option<T> {
        self.commit_rx.recv().await
    }

    /// Returns the next commit if one is already waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.commit_rx.try_recv().ok()
    }

    /// Cancels the pending commit, if any. The stable value is unchanged.
    pub fn cancel(&mut self) {
        {
            let mut shared = self.shared.lock();
            shared.generation = shared.generation.wrapping_add(1);
        }
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
            debug!("Debounce cancelled");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        {
            let mut shared = self.shared.lock();
            shared.generation = shared.generation.wrapping_add(1);
        }
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
