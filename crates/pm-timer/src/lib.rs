//! Cancellable timers and a value debouncer for the tokio runtime.
//!
//! # Overview
//!
//! - [`TimerHandle`]: a one-shot callback scheduled on the runtime. The
//!   handle owns the timer; cancelling or dropping it aborts the callback.
//! - [`Debouncer`]: holds back a changing value until it has been quiet for a
//!   configured delay, then commits it and reports the commit on a channel.
//!
//! # Usage with `tokio::select!`
//!
//! ```no_run
//! use std::time::Duration;
//! use pm_timer::Debouncer;
//! use tokio::sync::mpsc;
//!
//! # async fn example(mut keys: mpsc::Receiver<char>) {
//! let mut query = String::new();
//! let mut search = Debouncer::new(String::new(), Duration::from_millis(500));
//!
//! loop {
//!     tokio::select! {
//!         Some(ch) = keys.recv() => {
//!             query.push(ch);
//!             search.observe(query.clone());
//!         }
//!         Some(committed) = search.recv() => {
//!             println!("searching for {committed}");
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! # Crate Dependencies
//!
//! ```text
//! pm-cli ──► pm-tui ──► pm-toast ──► pm-timer
//!                   └─► pm-timer
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod debounce;
pub mod timer;

pub use debounce::Debouncer;
pub use timer::TimerHandle;
