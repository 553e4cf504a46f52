//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct which manages the entire
//! application state: the catalog, the debounced search, pagination, the
//! product form, and the toast queue.
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── catalog: Catalog            # Products, newest first
//!  ├── search: SearchState         # Typed text and committed query
//!  ├── search_debouncer: Debouncer # Typed text → committed query
//!  ├── filtered: Vec<usize>        # Catalog positions matching the query
//!  ├── current_page / selected     # Page number and row on that page
//!  ├── form: Option<ProductForm>   # Add/edit modal
//!  ├── toasts: ToastQueue          # Notifications (shared with run loop)
//!  └── status: Option<StatusMessage>
//! ```

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pm_core::pagination::{clamp_page, page_range};
use pm_core::{Catalog, Config, PageControls, Product, ViewMode, total_pages};
use pm_timer::Debouncer;
use pm_toast::{Toast, ToastContent, ToastQueue, ToastVariant};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::form::{FormField, ProductForm};
use crate::ui;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode.
    #[default]
    Normal,

    /// Search input mode (typing a query).
    Searching,

    /// The add/edit product form is displayed.
    Form,

    /// Help panel is displayed.
    Help,
}

/// Search text as typed and as applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// What is in the search box right now.
    pub input: String,

    /// The query the product list is filtered by.
    pub committed: String,
}

impl SearchState {
    /// Returns `true` if the committed query filters anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.committed.trim().is_empty()
    }

    /// Returns `true` while typed text has not been applied yet.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.input != self.committed
    }
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` if the message should be auto-hidden.
    ///
    /// Messages are hidden after 5 seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    catalog: Catalog,

    /// Current UI mode.
    pub mode: AppMode,

    /// Grid or list layout.
    pub view: ViewMode,

    /// Search input and committed query.
    pub search: SearchState,

    search_debouncer: Debouncer<String>,

    toasts: ToastQueue,

    /// Latest toast list received from the queue subscription.
    visible_toasts: Vec<Toast>,

    /// Positions in `catalog.products()` matching the committed query.
    filtered: Vec<usize>,

    /// 1-based page number.
    current_page: usize,

    /// Selected row on the current page.
    pub selected: Option<usize>,

    /// The open add/edit form, if any.
    pub form: Option<ProductForm>,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,
}

impl App {
    /// Creates the application over a catalog.
    ///
    /// `toasts` is shared with whoever subscribes to it, usually the run loop.
    #[must_use]
    pub fn new(config: Config, catalog: Catalog, toasts: ToastQueue) -> Self {
        let search_debouncer = Debouncer::new(String::new(), config.catalog.search_debounce());
        let mut app = Self {
            view: config.tui.default_view,
            config,
            catalog,
            mode: AppMode::Normal,
            search: SearchState::default(),
            search_debouncer,
            toasts,
            visible_toasts: Vec::new(),
            filtered: Vec::new(),
            current_page: 1,
            selected: None,
            form: None,
            status: None,
            should_quit: false,
            terminal_size: Rect::default(),
        };
        app.refilter();
        app
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Searching => self.handle_search_key(key),
            AppMode::Form => self.handle_form_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    fn handle_normal_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::NextItem,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousItem,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => Action::NextPage,
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Action::PreviousPage,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstPage,
            KeyCode::Char('G') | KeyCode::End => Action::LastPage,
            KeyCode::Char(c @ '1'..='9') => {
                Action::GoToPage(c.to_digit(10).map_or(1, |d| d as usize))
            }
            KeyCode::Char('/') => Action::EnterSearchMode,
            KeyCode::Char('a') => Action::NewProduct,
            KeyCode::Char('e') | KeyCode::Enter => Action::EditSelected,
            KeyCode::Char('v') => Action::ToggleView,
            KeyCode::Char('x') => Action::DismissToast,
            KeyCode::Esc => {
                if self.search.input.is_empty() {
                    Action::None
                } else {
                    Action::ClearSearch
                }
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::ExitSearchMode,
            KeyCode::Backspace => {
                let mut text = self.search.input.clone();
                text.pop();
                Action::SetSearchInput(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.search.input.clone();
                text.push(c);
                Action::SetSearchInput(text)
            }
            _ => Action::None,
        }
    }

    fn handle_form_key(&self, key: KeyEvent) -> Action {
        let on_category = self
            .form
            .as_ref()
            .is_some_and(|form| form.active_field == FormField::Category);

        match key.code {
            KeyCode::Esc => Action::CancelForm,
            KeyCode::Enter => Action::SubmitForm,
            KeyCode::Tab | KeyCode::Down => Action::FormNextField,
            KeyCode::BackTab | KeyCode::Up => Action::FormPreviousField,
            KeyCode::Right if on_category => self
                .form
                .as_ref()
                .map_or(Action::None, |form| Action::FormSetCategory(form.category.next())),
            KeyCode::Left if on_category => self
                .form
                .as_ref()
                .map_or(Action::None, |form| {
                    Action::FormSetCategory(form.category.previous())
                }),
            KeyCode::Backspace => Action::FormBackspace,
            KeyCode::Char(c) => Action::FormInput(c),
            _ => Action::None,
        }
    }

    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Handles a mouse event and returns the resulting action.
    ///
    /// The wheel moves the selection. A left click on the page controls
    /// jumps to the clicked page, which also reaches pages the digit keys
    /// cannot.
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> Action {
        if self.mode != AppMode::Normal {
            return Action::None;
        }
        match event.kind {
            MouseEventKind::ScrollDown => Action::NextItem,
            MouseEventKind::ScrollUp => Action::PreviousItem,
            MouseEventKind::Down(MouseButton::Left) => {
                ui::page_at(self, self.terminal_size, event.column, event.row)
                    .map_or(Action::None, Action::GoToPage)
            }
            _ => Action::None,
        }
    }

    /// Handles pasted text and returns the resulting action.
    #[must_use]
    pub fn handle_paste(&mut self, text: &str) -> Action {
        match self.mode {
            AppMode::Searching => {
                let mut query = self.search.input.clone();
                query.extend(text.chars().filter(|c| !c.is_control()));
                Action::SetSearchInput(query)
            }
            AppMode::Form => {
                if let Some(form) = self.form.as_mut() {
                    form.paste(text);
                }
                Action::Render
            }
            AppMode::Normal | AppMode::Help => Action::None,
        }
    }

    /// Updates the application state based on an action.
    #[allow(clippy::match_same_arms)]
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::NextItem => self.select_next(),
            Action::PreviousItem => self.select_previous(),
            Action::SelectItem(idx) => {
                if idx < self.page_len() {
                    self.selected = Some(idx);
                }
            }

            Action::NextPage => {
                if let Some(page) = self.page_controls().next {
                    self.set_page(page);
                }
            }
            Action::PreviousPage => {
                if let Some(page) = self.page_controls().previous {
                    self.set_page(page);
                }
            }
            Action::FirstPage => {
                if let Some(page) = self.page_controls().first {
                    self.set_page(page);
                }
            }
            Action::LastPage => {
                if let Some(page) = self.page_controls().last {
                    self.set_page(page);
                }
            }
            Action::GoToPage(page) => {
                let page = clamp_page(page, self.total_pages());
                if page != self.current_page {
                    self.set_page(page);
                }
            }

            Action::EnterSearchMode => self.mode = AppMode::Searching,
            Action::ExitSearchMode => self.mode = AppMode::Normal,
            Action::SetSearchInput(text) => self.set_search_input(text),
            Action::ApplySearch(query) => self.apply_search(query),
            Action::ClearSearch => {
                self.set_search_input(String::new());
                self.mode = AppMode::Normal;
            }

            Action::NewProduct => {
                self.form = Some(ProductForm::new());
                self.mode = AppMode::Form;
            }
            Action::EditSelected => {
                if let Some(form) = self.selected_product().map(ProductForm::edit) {
                    self.form = Some(form);
                    self.mode = AppMode::Form;
                }
            }
            Action::FormNextField => self.with_form(ProductForm::focus_next),
            Action::FormPreviousField => self.with_form(ProductForm::focus_previous),
            Action::FormInput(c) => self.with_form(|form| form.input(c)),
            Action::FormBackspace => self.with_form(ProductForm::backspace),
            Action::FormSetCategory(category) => {
                self.with_form(|form| form.set_category(category));
            }
            Action::SubmitForm => self.submit_form(),
            Action::CancelForm => self.close_form(),

            Action::SyncToasts(toasts) => self.visible_toasts = toasts,
            Action::DismissToast => {
                if let Some(toast) = self.visible_toasts.iter().find(|t| t.open) {
                    self.toasts.dismiss(Some(toast.id));
                }
            }

            Action::ToggleView => {
                self.view = self.view.toggle();
                debug!(view = self.view.label(), "Switched view");
            }
            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => self.mode = AppMode::Normal,

            Action::ShowStatus(text) => self.status = Some(StatusMessage::info(text)),
            Action::ClearStatus => self.status = None,

            Action::Render | Action::Tick | Action::None => {}
        }
    }

    /// Handles a tick event (periodic update).
    ///
    /// Clears stale status messages and dismisses toasts that have been
    /// open longer than the configured display time.
    pub fn tick(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::should_hide) {
            self.status = None;
        }

        let display = self.config.toast.display_duration();
        let expired: Vec<_> = self
            .visible_toasts
            .iter()
            .filter(|t| t.open && t.created_at.elapsed() >= display)
            .map(|t| t.id)
            .collect();
        for id in expired {
            self.toasts.dismiss(Some(id));
        }
    }

    /// Waits for the debouncer to commit a search query.
    ///
    /// Never resolves while no search is settling, so it can sit in a
    /// `tokio::select!` next to the terminal events.
    pub async fn next_search_commit(&mut self) -> Option<String> {
        self.search_debouncer.recv().await
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the toast queue.
    #[must_use]
    pub const fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Returns the toasts to draw: open ones, newest first.
    pub fn open_toasts(&self) -> impl Iterator<Item = &Toast> {
        self.visible_toasts.iter().filter(|t| t.open)
    }

    /// Returns the number of products matching the committed query.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Returns the 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of pages for the filtered products.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.config.catalog.items_per_page)
    }

    /// Returns the page controls for the current page.
    #[must_use]
    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.current_page, self.total_pages())
    }

    /// Returns the products on the current page, in display order.
    #[must_use]
    pub fn page_products(&self) -> Vec<&Product> {
        let range = page_range(
            self.current_page,
            self.config.catalog.items_per_page,
            self.filtered.len(),
        );
        let products = self.catalog.products();
        self.filtered[range]
            .iter()
            .filter_map(|&idx| products.get(idx))
            .collect()
    }

    /// Returns the selected product, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected
            .and_then(|idx| self.page_products().get(idx).copied())
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    fn page_len(&self) -> usize {
        page_range(
            self.current_page,
            self.config.catalog.items_per_page,
            self.filtered.len(),
        )
        .len()
    }

    fn select_next(&mut self) {
        let len = self.page_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        });
    }

    fn select_previous(&mut self) {
        let len = self.page_len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    fn set_page(&mut self, page: usize) {
        debug!(from = self.current_page, to = page, "Changed page");
        self.current_page = page;
        self.selected = (self.page_len() > 0).then_some(0);
    }

    fn set_search_input(&mut self, text: String) {
        self.search.input.clone_from(&text);
        self.search_debouncer.observe(text);
    }

    fn apply_search(&mut self, query: String) {
        if query == self.search.committed {
            return;
        }
        debug!(query = %query, "Applying search");
        self.search.committed = query;
        self.current_page = 1;
        self.refilter();
        self.selected = (self.page_len() > 0).then_some(0);
    }

    /// Recomputes the filtered list and keeps page and selection in range.
    fn refilter(&mut self) {
        self.filtered = self.catalog.matching_indices(&self.search.committed);
        self.current_page = clamp_page(self.current_page, self.total_pages());

        let len = self.page_len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }

    fn with_form(&mut self, f: impl FnOnce(&mut ProductForm)) {
        if let Some(form) = self.form.as_mut() {
            f(form);
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.mode = AppMode::Normal;
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let editing = form.editing;
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                return;
            }
        };

        let name = draft.name.clone();
        match editing {
            Some(id) => {
                if self.catalog.update(id, draft).is_none() {
                    warn!(%id, "Edited product no longer exists");
                    self.toasts.enqueue(
                        ToastContent::new()
                            .title("Update failed")
                            .description(format!("Product {id} no longer exists."))
                            .variant(ToastVariant::Destructive),
                    );
                } else {
                    info!(%id, name = %name, "Product updated");
                    self.toasts.enqueue(
                        ToastContent::new()
                            .title("Product updated")
                            .description(format!("\"{name}\" has been updated successfully."))
                            .variant(ToastVariant::Success),
                    );
                }
            }
            None => {
                let id = self.catalog.add(draft).id;
                info!(%id, name = %name, "Product added");
                self.toasts.enqueue(
                    ToastContent::new()
                        .title("Product added")
                        .description(format!("\"{name}\" has been added successfully."))
                        .variant(ToastVariant::Success),
                );
            }
        }

        self.close_form();
        self.refilter();
    }
}
