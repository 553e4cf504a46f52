//! Terminal wrapper with async event streaming.
//!
//! This module provides the [`Tui`] struct which wraps a Ratatui terminal
//! and bridges crossterm events to async tokio using channels.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────── event task ─────────────────────────┐
//! │  EventStream ─┐                                                 │
//! │  tick timer  ─┼─► select! ─► Event ─► mpsc::Sender ─────────┐   │
//! │  render timer ┘                                             │   │
//! └─────────────────────────────────────────────────────────────┼───┘
//!                                                               ▼
//!                                  Tui::next_event() ◄── mpsc::Receiver
//! ```
//!
//! Toast queue changes travel on their own watch channel (see
//! [`crate::run`]) so a burst of toasts never competes with key events
//! for space in this one.
//!
//! # Example
//!
//! ```ignore
//! use pm_tui::Tui;
//!
//! let mut tui = Tui::new(4.0)?.with_frame_rate(30.0);
//! tui.enter()?;
//!
//! while let Some(event) = tui.next_event().await {
//!     tui.draw(|frame| {
//!         // Render UI
//!     })?;
//! }
//!
//! tui.exit()?;
//! ```

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    EventStream, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace, warn};

use crate::error::TuiError;
use crate::event::Event;

/// Channel capacity for events.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Frame rate used until [`Tui::with_frame_rate`] is called.
const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Terminal wrapper with async event streaming.
///
/// Manages the terminal state (raw mode, alternate screen) and provides
/// an async interface for receiving terminal and application events.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,

    event_rx: mpsc::Receiver<Event>,

    /// Cloned into the event task on [`enter()`](Self::enter).
    event_tx: mpsc::Sender<Event>,

    task: Option<JoinHandle<()>>,

    cancellation_token: CancellationToken,

    /// Frames per second.
    frame_rate: f64,

    /// Ticks per second.
    tick_rate: f64,

    entered: bool,
}

impl Tui {
    /// Creates a new TUI with the specified tick rate.
    ///
    /// The terminal is not entered yet; call [`enter()`](Self::enter) to
    /// initialize raw mode and the alternate screen.
    ///
    /// # Arguments
    ///
    /// * `tick_rate` - Number of tick events per second
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new(tick_rate: f64) -> Result<Self, TuiError> {
        if !(tick_rate.is_finite() && tick_rate > 0.0) {
            return Err(TuiError::config("tick rate must be positive"));
        }

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        debug!(tick_rate, "Created TUI");

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            task: None,
            cancellation_token: CancellationToken::new(),
            frame_rate: DEFAULT_FRAME_RATE,
            tick_rate,
            entered: false,
        })
    }

    /// Sets the frame rate for rendering. Non-positive rates are ignored.
    #[must_use]
    pub fn with_frame_rate(mut self, fps: f64) -> Self {
        if fps.is_finite() && fps > 0.0 {
            self.frame_rate = fps;
        }
        self
    }

    /// Enters the terminal (raw mode, alternate screen).
    ///
    /// This must be called before drawing to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be changed.
    pub fn enter(&mut self) -> Result<(), TuiError> {
        debug!("Entering terminal");

        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        io::stdout().execute(EnableMouseCapture)?;
        io::stdout().execute(EnableBracketedPaste)?;
        self.entered = true;

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;

        self.start_event_loop();

        debug!("Terminal entered");
        Ok(())
    }

    /// Exits the terminal (restores normal mode).
    ///
    /// Calling this more than once is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal mode cannot be restored.
    pub fn exit(&mut self) -> Result<(), TuiError> {
        self.stop_event_loop();

        if !self.entered {
            return Ok(());
        }
        self.entered = false;

        debug!("Exiting terminal");
        self.terminal.show_cursor()?;

        io::stdout().execute(DisableBracketedPaste)?;
        io::stdout().execute(DisableMouseCapture)?;
        io::stdout().execute(LeaveAlternateScreen)?;
        disable_raw_mode()?;

        debug!("Terminal exited");
        Ok(())
    }

    /// Draws to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw<F>(&mut self, f: F) -> Result<(), TuiError>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Waits for the next event.
    ///
    /// Returns `None` if the event channel is closed.
    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    /// Returns the terminal size.
    #[must_use]
    pub fn size(&self) -> Rect {
        let size = self.terminal.size().unwrap_or_default();
        Rect::new(0, 0, size.width, size.height)
    }

    fn start_event_loop(&mut self) {
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);

        let event_tx = self.event_tx.clone();
        let cancellation_token = self.cancellation_token.clone();

        debug!(
            tick_delay_ms = tick_delay.as_millis(),
            render_delay_ms = render_delay.as_millis(),
            "Starting event loop"
        );

        let task = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            let mut render_interval = tokio::time::interval(render_delay);

            tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = cancellation_token.cancelled() => {
                        debug!("Event loop cancelled");
                        break;
                    }
                    _ = tick_interval.tick() => Some(Event::Tick),
                    _ = render_interval.tick() => Some(Event::Render),
                    event = Self::read_crossterm_event(&mut reader) => event,
                };

                if let Some(event) = event {
                    trace!(?event, "Sending event");
                    if event_tx.send(event).await.is_err() {
                        error!("Event channel closed");
                        break;
                    }
                }
            }

            debug!("Event loop ended");
        });

        self.task = Some(task);
    }

    fn stop_event_loop(&mut self) {
        self.cancellation_token.cancel();

        if let Some(task) = self.task.take() {
            debug!("Stopping event loop");
            task.abort();
        }
    }

    async fn read_crossterm_event(reader: &mut EventStream) -> Option<Event> {
        use futures_util::StreamExt;

        match reader.next().await {
            Some(Ok(event)) => convert_crossterm_event(event),
            Some(Err(e)) => {
                warn!(error = %e, "Error reading terminal event");
                None
            }
            None => {
                debug!("Event stream ended");
                None
            }
        }
    }
}

/// Converts a crossterm event to our [`Event`] type.
///
/// Key releases and repeats are dropped.
fn convert_crossterm_event(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::Event as CrosstermEvent;

    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Key(_) => None,
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal on drop");
        }
    }
}
