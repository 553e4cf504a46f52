//! Toast notification queue.
//!
//! A [`ToastQueue`] is an explicit context object: create it once, hand
//! clones to whoever needs to raise notifications, and subscribe the UI to
//! its changes.
//!
//! # Usage
//!
//! ```
//! use pm_core::ToastConfig;
//! use pm_toast::{ToastContent, ToastPatch, ToastQueue, ToastVariant};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let queue = ToastQueue::new(ToastConfig::default());
//! let _subscription = queue.subscribe(|toasts| {
//!     for toast in toasts {
//!         let _ = (&toast.title, toast.open);
//!     }
//! });
//!
//! let handle = queue.enqueue(
//!     ToastContent::new()
//!         .title("Product added")
//!         .variant(ToastVariant::Success),
//! );
//! handle.update(ToastPatch::new().description("\"Desk Lamp\" has been added successfully."));
//! handle.dismiss();
//!
//! assert!(!queue.snapshot()[0].open);
//! queue.dispose();
//! # }
//! ```
//!
//! # Crate Dependencies
//!
//! ```text
//! pm-tui ──► pm-toast ──► pm-timer
//!                    └──► pm-core
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod queue;
pub mod toast;

pub use queue::{Listener, SubscriptionId, ToastHandle, ToastQueue};
pub use toast::{Toast, ToastContent, ToastId, ToastPatch, ToastVariant};
