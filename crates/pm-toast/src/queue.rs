//! The toast queue.
//!
//! [`ToastQueue`] stores the live toasts and tells subscribers about every
//! change. Each toast goes through a fixed lifecycle:
//!
//! ```text
//! enqueue ──► open ──update*──► dismiss ──► closed ──remove_delay──► removed
//!                │                                                     ▲
//!                └──────────────────── remove ────────────────────────┘
//! ```
//!
//! Clones of a queue share state. Removal timers only hold a weak reference
//! to that state, so dropping the last clone cancels everything.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use pm_core::ToastConfig;
use pm_timer::TimerHandle;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::toast::{Toast, ToastContent, ToastId, ToastPatch};

/// A subscriber callback. Receives the full list of toasts after a change.
pub type Listener = Arc<dyn Fn(&[Toast]) + Send + Sync>;

/// Token returned by [`ToastQueue::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct State {
    toasts: Vec<Toast>,
    listeners: Vec<(SubscriptionId, Listener)>,
    removal_timers: FxHashMap<ToastId, TimerHandle>,
    last_id: ToastId,
    next_subscription: u64,
}

impl State {
    fn new() -> Self {
        Self {
            toasts: Vec::new(),
            listeners: Vec::new(),
            removal_timers: FxHashMap::default(),
            last_id: ToastId::new(0),
            next_subscription: 0,
        }
    }
}

/// Holds the live toasts and notifies subscribers of changes.
///
/// Removal timers run on the tokio runtime, so [`ToastQueue::dismiss`] must
/// be called from within one.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use pm_core::ToastConfig;
/// use pm_toast::{ToastContent, ToastQueue};
///
/// let queue = ToastQueue::new(ToastConfig::default());
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// queue.subscribe(move |toasts| counter.store(toasts.len(), Ordering::SeqCst));
///
/// let handle = queue.enqueue(ToastContent::new().title("Product added"));
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// assert_eq!(queue.snapshot()[0].id, handle.id());
/// ```
#[derive(Clone)]
pub struct ToastQueue {
    state: Arc<Mutex<State>>,
    config: ToastConfig,
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ToastQueue")
            .field("toasts", &state.toasts.len())
            .field("listeners", &state.listeners.len())
            .field("pending_removals", &state.removal_timers.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::new())),
            config,
        }
    }

    /// Returns the queue configuration.
    #[must_use]
    pub const fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Adds a toast at the front of the queue.
    ///
    /// If this takes the queue past its limit, the oldest toasts are dropped
    /// immediately.
    pub fn enqueue(&self, content: ToastContent) -> ToastHandle {
        let id = {
            let mut state = self.state.lock();
            let id = state.last_id.next();
            state.last_id = id;

            state.toasts.insert(0, Toast::new(id, content));
            let limit = self.config.limit.max(1);
            if state.toasts.len() > limit {
                let dropped: Vec<ToastId> = state.toasts.drain(limit..).map(|t| t.id).collect();
                for old in dropped {
                    state.removal_timers.remove(&old);
                    trace!(id = %old, "Dropped toast over limit");
                }
            }
            id
        };

        debug!(%id, "Toast enqueued");
        self.notify();
        ToastHandle {
            id,
            queue: self.clone(),
        }
    }

    /// Merges `patch` into the toast with the given id.
    ///
    /// Unknown ids are ignored.
    pub fn update(&self, id: ToastId, patch: ToastPatch) {
        let found = {
            let mut state = self.state.lock();
            match state.toasts.iter_mut().find(|t| t.id == id) {
                Some(toast) => {
                    toast.apply(patch);
                    true
                }
                None => false,
            }
        };

        if found {
            debug!(%id, "Toast updated");
            self.notify();
        }
    }

    /// Closes one toast, or every toast when `id` is `None`, and schedules
    /// its removal after the configured delay.
    ///
    /// Dismissing a toast that already has a removal scheduled does not
    /// schedule another. Unknown ids are ignored.
    pub fn dismiss(&self, id: Option<ToastId>) {
        let changed = {
            let mut state = self.state.lock();
            let targets: Vec<ToastId> = state
                .toasts
                .iter()
                .filter(|t| id.is_none_or(|id| t.id == id))
                .map(|t| t.id)
                .collect();

            for target in &targets {
                if !state.removal_timers.contains_key(target) {
                    let timer = self.schedule_removal(*target);
                    state.removal_timers.insert(*target, timer);
                }
            }
            for toast in &mut state.toasts {
                if targets.contains(&toast.id) {
                    toast.open = false;
                }
            }
            !targets.is_empty()
        };

        if changed {
            debug!(id = ?id.map(ToastId::as_u64), "Toast dismissed");
            self.notify();
        }
    }

    /// Deletes one toast, or every toast when `id` is `None`, without
    /// waiting for a removal timer.
    ///
    /// Any pending removal timer for the deleted toasts is cancelled.
    pub fn remove(&self, id: Option<ToastId>) {
        let changed = {
            let mut state = self.state.lock();
            let before = state.toasts.len();
            match id {
                Some(id) => {
                    state.toasts.retain(|t| t.id != id);
                    state.removal_timers.remove(&id);
                }
                None => {
                    state.toasts.clear();
                    state.removal_timers.clear();
                }
            }
            state.toasts.len() != before
        };

        if changed {
            debug!(id = ?id.map(ToastId::as_u64), "Toast removed");
            self.notify();
        }
    }

    /// Registers a callback that receives the full toast list after every
    /// change.
    ///
    /// The callback runs without the queue lock held and may call back into
    /// the queue.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Toast]) + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.listeners.push((id, Arc::new(listener)));
        trace!(subscription = id.0, "Subscribed");
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.lock();
        let before = state.listeners.len();
        state.listeners.retain(|(sub, _)| *sub != id);
        state.listeners.len() != before
    }

    /// Returns a copy of the live toasts, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.state.lock().toasts.clone()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().toasts.len()
    }

    /// Returns `true` if there are no live toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().toasts.is_empty()
    }

    /// Returns the number of scheduled removals.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.state.lock().removal_timers.len()
    }

    /// Cancels every removal timer and drops all toasts and subscribers.
    ///
    /// Subscribers are not notified.
    pub fn dispose(&self) {
        let mut state = self.state.lock();
        let timers = state.removal_timers.len();
        state.removal_timers.clear();
        state.toasts.clear();
        state.listeners.clear();
        debug!(cancelled_timers = timers, "Toast queue disposed");
    }

    fn schedule_removal(&self, id: ToastId) -> TimerHandle {
        let weak: Weak<Mutex<State>> = Arc::downgrade(&self.state);
        let config = self.config;
        trace!(%id, delay_ms = config.remove_delay_ms, "Scheduled toast removal");
        TimerHandle::spawn(config.remove_delay(), move || {
            if let Some(state) = weak.upgrade() {
                ToastQueue { state, config }.remove(Some(id));
            }
        })
    }

    fn notify(&self) {
        let (toasts, listeners) = {
            let state = self.state.lock();
            let listeners: Vec<Listener> = state
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (state.toasts.clone(), listeners)
        };

        for listener in listeners {
            listener(&toasts);
        }
    }
}

/// Returned by [`ToastQueue::enqueue`] to act on the new toast.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: ToastId,
    queue: ToastQueue,
}

impl ToastHandle {
    /// Returns the toast id.
    #[must_use]
    pub const fn id(&self) -> ToastId {
        self.id
    }

    /// Merges `patch` into the toast. No-op once the toast is gone.
    pub fn update(&self, patch: ToastPatch) {
        self.queue.update(self.id, patch);
    }

    /// Dismisses the toast. No-op once the toast is gone.
    pub fn dismiss(&self) {
        self.queue.dismiss(Some(self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn config(limit: usize, remove_delay_ms: u64) -> ToastConfig {
        ToastConfig {
            limit,
            remove_delay_ms,
            ..ToastConfig::default()
        }
    }

    fn titled(title: &str) -> ToastContent {
        ToastContent::new().title(title)
    }

    fn titles(queue: &ToastQueue) -> Vec<String> {
        queue
            .snapshot()
            .into_iter()
            .filter_map(|t| t.title)
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueue_respects_limit() {
        let queue = ToastQueue::new(config(1, 1_000));
        queue.enqueue(titled("first"));
        let second = queue.enqueue(titled("second"));

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.snapshot()[0].id, second.id());
        assert_eq!(titles(&queue), vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enqueue_newest_first() {
        let queue = ToastQueue::new(config(3, 1_000));
        for title in ["a", "b", "c", "d"] {
            queue.enqueue(titled(title));
        }
        assert_eq!(titles(&queue), vec!["d", "c", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_fresh() {
        let queue = ToastQueue::new(config(5, 1_000));
        let a = queue.enqueue(titled("a")).id();
        let b = queue.enqueue(titled("b")).id();
        assert_ne!(a, b);
        assert_eq!(a, ToastId::new(1));
        assert_eq!(b.to_string(), "2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_id_counter_wraps() {
        let queue = ToastQueue::new(config(5, 1_000));
        queue.state.lock().last_id = ToastId::new(crate::toast::ID_WRAP - 1);
        assert_eq!(queue.enqueue(titled("wrapped")).id(), ToastId::new(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_merges() {
        let queue = ToastQueue::new(config(1, 1_000));
        let handle = queue.enqueue(ToastContent::new().title("Saving").description("…"));
        handle.update(ToastPatch::new().title("Saved"));

        let toast = &queue.snapshot()[0];
        assert_eq!(toast.title.as_deref(), Some("Saved"));
        assert_eq!(toast.description.as_deref(), Some("…"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_ids_are_noops() {
        let queue = ToastQueue::new(config(1, 1_000));
        queue.enqueue(titled("kept"));

        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        queue.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let ghost = ToastId::new(99);
        queue.update(ghost, ToastPatch::new().title("ghost"));
        queue.dismiss(Some(ghost));
        queue.remove(Some(ghost));

        assert_eq!(titles(&queue), vec!["kept"]);
        assert!(queue.snapshot()[0].open);
        assert_eq!(queue.pending_removals(), 0);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_closes_then_removes_after_delay() {
        let queue = ToastQueue::new(config(1, 1_000));
        let handle = queue.enqueue(titled("bye"));
        handle.dismiss();

        assert_eq!(queue.len(), 1);
        assert!(!queue.snapshot()[0].open);
        assert_eq!(queue.pending_removals(), 1);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(queue.len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(queue.is_empty());
        assert_eq!(queue.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let queue = ToastQueue::new(config(1, 1_000));
        let handle = queue.enqueue(titled("once"));
        handle.dismiss();
        tokio::time::sleep(Duration::from_millis(600)).await;
        handle.dismiss();
        assert_eq!(queue.pending_removals(), 1);

        // The first timer still governs removal.
        tokio::time::sleep(Duration::from_millis(401)).await;
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_all() {
        let queue = ToastQueue::new(config(3, 1_000));
        queue.enqueue(titled("a"));
        queue.enqueue(titled("b"));
        queue.dismiss(None);

        assert!(queue.snapshot().iter().all(|t| !t.open));
        assert_eq!(queue.pending_removals(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_cancels_timer() {
        let queue = ToastQueue::new(config(1, 1_000));
        let handle = queue.enqueue(titled("gone"));
        handle.dismiss();
        queue.remove(Some(handle.id()));

        assert!(queue.is_empty());
        assert_eq!(queue.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overflow_drops_pending_removal() {
        let queue = ToastQueue::new(config(1, 1_000));
        queue.enqueue(titled("old")).dismiss();
        queue.enqueue(titled("new"));

        assert_eq!(titles(&queue), vec!["new"]);
        assert_eq!(queue.pending_removals(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_get_full_snapshot() {
        let queue = ToastQueue::new(config(2, 1_000));
        let last = Arc::new(Mutex::new(Vec::<Toast>::new()));
        let sink = Arc::clone(&last);
        queue.subscribe(move |toasts| *sink.lock() = toasts.to_vec());

        queue.enqueue(titled("a"));
        queue.enqueue(titled("b"));
        assert_eq!(last.lock().len(), 2);

        queue.remove(None);
        assert!(last.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsubscribe_during_notification() {
        let queue = ToastQueue::new(config(1, 1_000));
        let calls = Arc::new(AtomicUsize::new(0));

        let own_id = Arc::new(Mutex::new(None::<SubscriptionId>));
        let inner_queue = queue.clone();
        let inner_id = Arc::clone(&own_id);
        let inner_calls = Arc::clone(&calls);
        let id = queue.subscribe(move |_| {
            inner_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *inner_id.lock() {
                inner_queue.unsubscribe(id);
            }
        });
        *own_id.lock() = Some(id);

        let other_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&other_calls);
        queue.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        queue.enqueue(titled("a"));
        queue.enqueue(titled("b"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(other_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribe_during_notification() {
        let queue = ToastQueue::new(config(1, 1_000));
        let late_calls = Arc::new(AtomicUsize::new(0));

        let inner_queue = queue.clone();
        let inner_calls = Arc::clone(&late_calls);
        let added = Arc::new(AtomicUsize::new(0));
        let added_flag = Arc::clone(&added);
        queue.subscribe(move |_| {
            if added_flag.fetch_add(1, Ordering::SeqCst) == 0 {
                let calls = Arc::clone(&inner_calls);
                inner_queue.subscribe(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        queue.enqueue(titled("a"));
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        queue.enqueue(titled("b"));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_listener_can_reenter_queue() {
        let queue = ToastQueue::new(config(1, 1_000));
        let inner = queue.clone();
        queue.subscribe(move |toasts| {
            if let Some(toast) = toasts.first().filter(|t| t.open) {
                inner.dismiss(Some(toast.id));
            }
        });

        queue.enqueue(titled("auto"));
        assert!(!queue.snapshot()[0].open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_timers() {
        let queue = ToastQueue::new(config(3, 1_000));
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        queue.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        queue.enqueue(titled("a")).dismiss();
        queue.enqueue(titled("b")).dismiss();
        let before = calls.load(Ordering::SeqCst);

        queue.dispose();
        assert!(queue.is_empty());
        assert_eq!(queue.pending_removals(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_does_not_outlive_queue() {
        let queue = ToastQueue::new(config(1, 1_000));
        queue.enqueue(titled("a")).dismiss();
        let weak = Arc::downgrade(&queue.state);
        drop(queue);

        assert!(weak.upgrade().is_none());
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}
