//! Product table component (list view).
//!
//! Displays one row per product with name, category, price, stock, status
//! and creation date. Low stock is highlighted.

use pm_core::Product;
use pm_core::format::{format_date, format_inr, status_label, truncate};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Row, StatefulWidget, Table, TableState,
};

use crate::theme::Theme;

/// Longest name shown before truncation.
const NAME_WIDTH: usize = 32;

/// A stateful product table widget.
///
/// Uses [`StatefulWidget`] with a [`TableState`] holding the selected row.
pub struct ProductTable<'a> {
    /// Products on the current page.
    products: &'a [&'a Product],
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> ProductTable<'a> {
    /// Creates a new product table.
    #[must_use]
    pub const fn new(products: &'a [&'a Product], theme: &'a Theme) -> Self {
        Self { products, theme }
    }

    fn build_row(&self, product: &Product) -> Row<'a> {
        let cells = vec![
            Cell::from(Span::styled(
                truncate(&product.name, NAME_WIDTH),
                self.theme.base_style().add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                product.category.label(),
                self.theme.dimmed_style(),
            )),
            Cell::from(Span::styled(
                format_inr(product.price),
                self.theme.price_style(),
            )),
            Cell::from(Span::styled(
                product.stock.to_string(),
                self.theme.stock_style(product.is_low_stock()),
            )),
            Cell::from(Span::styled(
                status_label(product.is_active),
                self.theme.status_style(product.is_active),
            )),
            Cell::from(Span::styled(
                format_date(&product.created_at),
                self.theme.dimmed_style(),
            )),
        ];
        Row::new(cells).height(1)
    }
}

impl StatefulWidget for &ProductTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = Row::new(
            ["Name", "Category", "Price", "Stock", "Status", "Created"]
                .into_iter()
                .map(|title| {
                    Cell::from(Span::styled(
                        title,
                        self.theme
                            .accent_style()
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    ))
                }),
        )
        .height(1);

        let rows: Vec<Row<'_>> = self.products.iter().map(|p| self.build_row(p)).collect();

        let widths = [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(12),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(" Products ", self.theme.header_style));

        let table = Table::new(rows, widths)
            .block(block)
            .header(header)
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        StatefulWidget::render(table, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;
    use chrono::{TimeZone, Utc};
    use pm_core::{Category, ProductId};

    fn product(id: u64, name: &str, price: u64, stock: u32, is_active: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price,
            category: Category::Electronics,
            stock,
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            is_active,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_table_renders_columns_and_rows() {
        let headphones = product(1, "Wireless Headphones", 123_456, 45, true);
        let watch = product(2, "Smart Watch", 8_999, 3, false);
        let products = [&headphones, &watch];

        let theme = Theme::dark();
        let table = ProductTable::new(&products, &theme);
        let mut state = TableState::default().with_selected(Some(1));
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 6));
        StatefulWidget::render(&table, buf.area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        for column in ["Name", "Category", "Price", "Stock", "Status", "Created"] {
            assert!(text.contains(column), "missing column {column}");
        }
        assert!(text.contains("Wireless Headphones"));
        assert!(text.contains("₹1,23,456"));
        assert!(text.contains("15 Jan 2024"));
        assert!(text.contains("Inactive"));

        let watch_line = text.lines().find(|l| l.contains("Smart Watch")).unwrap();
        assert!(watch_line.contains("▸"));
    }

    #[test]
    fn test_low_stock_is_highlighted() {
        let low = product(1, "Yoga Mat", 899, 4, true);
        let products = [&low];

        let theme = Theme::dark();
        let table = ProductTable::new(&products, &theme);
        let mut state = TableState::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 5));
        StatefulWidget::render(&table, buf.area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        let (row, line) = text
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains("Yoga Mat"))
            .unwrap();
        let col = line.chars().position(|c| c == '4').unwrap();
        let cell = &buf[(u16::try_from(col).unwrap(), u16::try_from(row).unwrap())];
        assert_eq!(cell.fg, theme.low_stock_fg);
    }
}
