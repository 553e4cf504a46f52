//! Terminal user interface for the product catalog, using Ratatui.
//!
//! This crate provides the interactive `prodman browse` screen: an async event
//! loop on tokio, a debounced search box, grid and table layouts with page
//! controls, a modal add/edit form and a toast overlay fed by
//! [`pm_toast::ToastQueue`].
//!
//! # Architecture
//!
//! ```text
//! crates/pm-tui/src/
//!   lib.rs              # Public API exports and the run loop
//!   app.rs              # Application state, key handling, updates
//!   event.rs            # Event types (Key, Mouse, Paste, Tick, Render)
//!   tui.rs              # Terminal wrapper with async event streaming
//!   action.rs           # User actions (commands from key bindings)
//!   form.rs             # Add/edit form state and parsing
//!   ui.rs               # Main layout rendering orchestration
//!   theme.rs            # Color scheme and styling constants
//!   error.rs            # TUI-specific error types
//!   components/
//!     header.rs         # Title and product count
//!     search_input.rs   # Search box with settling indicator
//!     product_grid.rs   # Card grid layout
//!     product_table.rs  # Table (list) layout
//!     empty_state.rs    # "No products found" placeholder
//!     pagination_bar.rs # Page window controls
//!     product_form.rs   # Add/edit modal
//!     toast_overlay.rs  # Notification stack
//!     help.rs           # Key binding overlay
//!     status_bar.rs     # Mode, status and page position
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use pm_core::{Catalog, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pm_tui::TuiError> {
//!     let catalog = Catalog::new();
//!     pm_tui::run(Config::default(), catalog, false).await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod form;
pub mod theme;
pub mod tui;
pub mod ui;

use pm_core::{Catalog, Config};
use pm_toast::{SubscriptionId, Toast, ToastQueue};
use ratatui::layout::Rect;
use tokio::sync::watch;
use tracing::{debug, info};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, SearchState, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use form::{FormField, ProductForm};
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI over `catalog` until the user quits.
///
/// This is the main entry point for the pm-tui crate. It:
///
/// 1. Creates the toast queue and forwards its snapshots to the event loop
/// 2. Initializes the terminal
/// 3. Runs the main event loop
/// 4. Restores the terminal and disposes the queue
///
/// Edits live in memory only; the catalog file is never written.
///
/// # Errors
///
/// Returns an error if the tick or frame rates are unusable, or if the
/// terminal cannot be initialized or drawn to.
pub async fn run(config: Config, catalog: Catalog, no_color: bool) -> Result<(), TuiError> {
    config.validate()?;

    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / config.tui.tick_rate_ms as f64;
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = config.tui.frame_rate as f64;

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);

    let toasts = ToastQueue::new(config.toast);
    let (subscription, mut toast_rx) = forward_toasts(&toasts);

    let theme = if no_color {
        Theme::monochrome()
    } else {
        Theme::from_scheme(config.tui.color_scheme)
    };

    let mut app = App::new(config, catalog, toasts.clone());

    tui.enter()?;
    app.set_terminal_size(tui.size());

    info!(products = app.catalog().len(), "Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app, &mut toast_rx, &theme).await;

    // Exit terminal (restore state)
    tui.exit()?;

    toasts.unsubscribe(subscription);
    toasts.dispose();

    result
}

/// Subscribes to `queue`, publishing every snapshot on a watch channel.
///
/// The channel keeps only the latest snapshot, so a burst of changes never
/// backs up and the newest state is always delivered.
fn forward_toasts(queue: &ToastQueue) -> (SubscriptionId, watch::Receiver<Vec<Toast>>) {
    let (tx, rx) = watch::channel(queue.snapshot());
    let subscription = queue.subscribe(move |snapshot| {
        tx.send_replace(snapshot.to_vec());
    });
    (subscription, rx)
}

/// Runs the main event loop.
async fn run_event_loop(
    tui: &mut Tui,
    app: &mut App,
    toast_rx: &mut watch::Receiver<Vec<Toast>>,
    theme: &Theme,
) -> Result<(), TuiError> {
    tui.draw(|frame| ui::render(app, frame, theme))?;

    loop {
        let action = tokio::select! {
            // Terminal, tick and render events
            event = tui.next_event() => match event {
                Some(event) => map_event(tui, app, event, theme)?,
                None => return Err(TuiError::ChannelClosed),
            },

            // Settled search queries
            Some(query) = app.next_search_commit() => {
                debug!(query = %query, "Search settled");
                Action::ApplySearch(query)
            }

            // Toast queue changes
            Ok(()) = toast_rx.changed() => {
                Action::SyncToasts(toast_rx.borrow_and_update().clone())
            }
        };

        let redraw = action.needs_render();
        app.update(action);
        if redraw {
            tui.draw(|frame| ui::render(app, frame, theme))?;
        }

        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}

/// Translates one event into an action, drawing on render events.
fn map_event(tui: &mut Tui, app: &mut App, event: Event, theme: &Theme) -> Result<Action, TuiError> {
    let action = match event {
        Event::Key(key) => app.handle_key(key),
        Event::Mouse(mouse) => app.handle_mouse(mouse),
        Event::Paste(text) => app.handle_paste(&text),
        Event::Resize { width, height } => {
            app.set_terminal_size(Rect::new(0, 0, width, height));
            Action::Render
        }
        Event::Tick => {
            app.tick();
            Action::Tick
        }
        Event::Render => {
            tui.draw(|frame| ui::render(app, frame, theme))?;
            Action::None
        }
        Event::FocusGained | Event::FocusLost => Action::None,
    };
    Ok(action)
}
