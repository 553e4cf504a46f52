//! UI components for the TUI.
//!
//! This module contains all the widget implementations for rendering
//! different parts of the interface.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): Stateless rendering - `HeaderBar`, `SearchInput`,
//!   `ProductGrid`, `PaginationBar`, `StatusBar`, `EmptyState`
//! - **Stateful Widgets** (`StatefulWidget` trait): Selection state - `ProductTable`
//! - **Overlays**: Modal overlays - `ProductFormModal`, `HelpPanel`, `ToastOverlay`
//!
//! # Usage
//!
//! ```ignore
//! use pm_tui::components::{HeaderBar, ProductTable};
//! ```

mod empty_state;
mod header;
mod help;
mod pagination_bar;
pub(crate) mod product_form;
mod product_grid;
mod product_table;
mod search_input;
mod status_bar;
mod toast_overlay;

pub use empty_state::EmptyState;
pub use header::HeaderBar;
pub use help::HelpPanel;
pub use pagination_bar::PaginationBar;
pub use product_form::ProductFormModal;
pub use product_grid::ProductGrid;
pub use product_table::ProductTable;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;
pub use toast_overlay::ToastOverlay;

/// Flattens a buffer into text, one line per row, trailing spaces trimmed.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width.max(1))
        .map(|row| {
            let line: String = row.iter().map(ratatui::buffer::Cell::symbol).collect();
            line.trim_end().to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
