//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of all UI components based on the current application state.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Product Manager │ 24 products │ a Add Product │ ? for help   [toast]|
//! +------------------------------------------------------------------+
//! | ⌕ Search products...                                             |
//! +------------------------------------------------------------------+
//! |  ┌ card ┐ ┌ card ┐ ┌ card ┐        (grid view)                    |
//! |  Name  Category  Price  Stock ...   (list view)                   |
//! +------------------------------------------------------------------+
//! |            « ‹ 1 … 4 [5] 6 … 10 › »   Showing 33-40 of 80         |
//! | NORMAL  Page 5 of 10 │ Grid view                                  |
//! +------------------------------------------------------------------+
//! ```

use std::rc::Rc;

use pm_core::pagination::page_range;
use pm_core::{PageControls, ViewMode};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::TableState;

use crate::app::{App, AppMode};
use crate::components::{
    EmptyState, HeaderBar, HelpPanel, PaginationBar, ProductFormModal, ProductGrid,
    ProductTable, SearchInput, StatusBar, ToastOverlay,
};
use crate::components::product_form::FORM_HEIGHT;
use crate::theme::Theme;

/// Width of the product form modal.
const FORM_WIDTH: u16 = 64;

/// Width of the help panel.
const HELP_WIDTH: u16 = 64;

/// Index of the page controls row in [`main_layout`].
const PAGE_CONTROLS_ROW: usize = 3;

/// Splits the screen into header, search, products, page controls and
/// status bar rows.
fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search
            Constraint::Min(5),    // Products
            Constraint::Length(1), // Page controls
            Constraint::Length(1), // Status bar
        ])
        .split(area)
}

/// Returns the page selected by a click at (`column`, `row`) on a screen of
/// size `area`, if the click lands on a page control.
#[must_use]
pub fn page_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    let bar_area = main_layout(area)[PAGE_CONTROLS_ROW];
    if !bar_area.contains(Position::new(column, row)) {
        return None;
    }
    // Styles do not affect layout.
    let theme = Theme::default();
    let controls = app.page_controls();
    pagination_bar(app, &controls, &theme).target_at(bar_area, column)
}

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let main_chunks = main_layout(area);

    let header = HeaderBar::new(app.filtered_count(), theme);
    frame.render_widget(&header, main_chunks[0]);

    let search = SearchInput::new(&app.search, app.mode == AppMode::Searching, theme);
    frame.render_widget(&search, main_chunks[1]);

    render_products(app, frame, main_chunks[2], theme);

    let controls = app.page_controls();
    let pagination = pagination_bar(app, &controls, theme);
    frame.render_widget(&pagination, main_chunks[PAGE_CONTROLS_ROW]);

    let status_bar = StatusBar::new(app, theme);
    frame.render_widget(&status_bar, main_chunks[4]);

    if let (AppMode::Form, Some(form)) = (app.mode, app.form.as_ref()) {
        let modal = ProductFormModal::new(form, theme);
        frame.render_widget(&modal, centered_fixed(FORM_WIDTH, FORM_HEIGHT, area));
    }

    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(theme);
        let help_area = centered_fixed(HELP_WIDTH, HelpPanel::required_height(), area);
        frame.render_widget(&help_panel, help_area);
    }

    let overlay = ToastOverlay::new(app.open_toasts().collect(), theme);
    let toast_area = overlay.area(area);
    frame.render_widget(&overlay, toast_area);
}

fn pagination_bar<'a>(app: &App, controls: &'a PageControls, theme: &'a Theme) -> PaginationBar<'a> {
    let shown = page_range(
        app.current_page(),
        app.config.catalog.items_per_page,
        app.filtered_count(),
    );
    PaginationBar::new(controls, shown, app.filtered_count(), theme)
}

/// Renders the product list in the current layout, or the empty state.
fn render_products(app: &App, frame: &mut Frame, area: Rect, theme: &Theme) {
    let products = app.page_products();

    if products.is_empty() {
        let empty = EmptyState::new(app.search.is_active(), theme);
        frame.render_widget(&empty, area);
        return;
    }

    match app.view {
        ViewMode::Grid => {
            let grid = ProductGrid::new(&products, app.selected, theme);
            frame.render_widget(&grid, area);
        }
        ViewMode::List => {
            let table = ProductTable::new(&products, theme);
            let mut state = TableState::default().with_selected(app.selected);
            frame.render_stateful_widget(&table, area, &mut state);
        }
    }
}

/// Creates a centered rectangle of a fixed size, shrunk to fit `area`.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use pm_core::{Catalog, Config};
    use pm_toast::{ToastContent, ToastQueue, ToastVariant};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn catalog(count: usize) -> Catalog {
        let products: Vec<String> = (1..=count)
            .map(|id| {
                format!(
                    r#"{{"id": {id}, "name": "Lamp {id}", "price": 999, "category": "Home", "stock": 3, "createdAt": "2024-02-01T00:00:00Z"}}"#
                )
            })
            .collect();
        Catalog::from_json_str(&format!("[{}]", products.join(","))).unwrap()
    }

    fn app(count: usize) -> App {
        let config = Config::default();
        let toasts = ToastQueue::new(config.toast);
        App::new(config, catalog(count), toasts)
    }

    fn draw(app: &App) -> String {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(app, frame, &theme)).unwrap();
        crate::components::buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_fixed(60, 20, area), Rect::new(20, 10, 60, 20));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_fixed(60, 20, small), small);
    }

    #[tokio::test]
    async fn test_renders_layout() {
        let app = app(20);
        let text = draw(&app);
        assert!(text.contains("Product Manager │ 20 products"));
        assert!(text.contains("Search products..."));
        assert!(text.contains("Showing 1-8 of 20"));
        assert!(text.contains("NORMAL"));
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let app = app(0);
        let text = draw(&app);
        assert!(text.contains("No products found"));
        assert!(!text.contains("Showing"));
    }

    #[tokio::test]
    async fn test_list_view_shows_columns() {
        let mut app = app(3);
        app.update(Action::ToggleView);
        let text = draw(&app);
        assert!(text.contains("Category"));
        assert!(text.contains("Created"));
    }

    #[tokio::test]
    async fn test_form_and_help_overlays() {
        let mut app = app(3);
        app.update(Action::NewProduct);
        assert!(draw(&app).contains("Add New Product"));

        app.update(Action::CancelForm);
        app.update(Action::ToggleHelp);
        assert!(draw(&app).contains("Help - Key Bindings"));
    }

    #[tokio::test]
    async fn test_toast_overlay() {
        let mut app = app(3);
        app.toasts().enqueue(ToastContent {
            title: Some("Product added".to_owned()),
            variant: ToastVariant::Success,
            ..ToastContent::default()
        });
        let snapshot = app.toasts().snapshot();
        app.update(Action::SyncToasts(snapshot));
        assert!(draw(&app).contains("Product added"));
    }

    #[tokio::test]
    async fn test_page_at_matches_rendered_controls() {
        let mut app = app(80);
        app.update(Action::GoToPage(5));
        let area = Rect::new(0, 0, 100, 40);
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(&app, frame, &theme)).unwrap();

        // Page controls sit two rows above the bottom edge.
        let row = 38;
        let buf = terminal.backend().buffer();
        let line: Vec<&str> = (0..100).map(|x| buf[(x, row)].symbol()).collect();
        assert_eq!(line.concat().trim(), "« ‹ 1 … 4 [5] 6 … 10 › »   Showing 33-40 of 80");
        let ten = line.windows(2).position(|w| w == ["1", "0"]).unwrap();
        let ten = u16::try_from(ten).unwrap();

        assert_eq!(page_at(&app, area, ten, row), Some(10));
        assert_eq!(page_at(&app, area, ten, row - 1), None);
        assert_eq!(page_at(&app, area, ten, row + 1), None);
    }
}
