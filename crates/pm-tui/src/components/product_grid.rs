//! Product grid component (card view).
//!
//! Lays products out as bordered cards, as many per row as the width allows.

use pm_core::Product;
use pm_core::format::{format_inr, status_label, truncate, visible_tags};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Minimum card width in columns.
const CARD_MIN_WIDTH: u16 = 30;

/// Maximum cards per row.
const MAX_COLUMNS: u16 = 4;

/// Card height including borders.
pub const CARD_HEIGHT: u16 = 7;

/// A grid of product cards.
pub struct ProductGrid<'a> {
    products: &'a [&'a Product],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ProductGrid<'a> {
    /// Creates a new product grid.
    #[must_use]
    pub const fn new(products: &'a [&'a Product], selected: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            products,
            selected,
            theme,
        }
    }

    /// Returns how many cards fit side by side in `width` columns.
    #[must_use]
    pub fn columns_for(width: u16) -> u16 {
        (width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
    }

    fn card_lines(&self, product: &Product, inner_width: usize) -> Vec<Line<'a>> {
        let status = status_label(product.is_active);
        let name_width = inner_width.saturating_sub(status.len() + 1);

        let description = if product.description.trim().is_empty() {
            Span::styled(
                "No description available",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(
                truncate(&product.description, inner_width),
                self.theme.dimmed_style(),
            )
        };

        let (tags, hidden) = visible_tags(&product.tags);
        let mut tag_spans: Vec<Span<'a>> = tags
            .iter()
            .map(|tag| Span::styled(format!("#{tag} "), Style::default().fg(self.theme.tag_fg)))
            .collect();
        if hidden > 0 {
            tag_spans.push(Span::styled(format!("+{hidden} more"), self.theme.dimmed_style()));
        }

        vec![
            Line::from(vec![
                Span::styled(
                    truncate(&product.name, name_width),
                    self.theme.base_style().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(status, self.theme.status_style(product.is_active)),
            ]),
            Line::from(Span::styled(product.category.label(), self.theme.accent_style())),
            Line::from(description),
            Line::from(vec![
                Span::styled(format_inr(product.price), self.theme.price_style()),
                Span::raw("  "),
                Span::styled(
                    format!("{} in stock", product.stock),
                    self.theme.stock_style(product.is_low_stock()),
                ),
            ]),
            Line::from(tag_spans),
        ]
    }
}

impl Widget for &ProductGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = ProductGrid::columns_for(area.width);
        let rows = self.products.len().div_ceil(usize::from(columns));

        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows]).split(area);
        let column_constraints = vec![Constraint::Ratio(1, u32::from(columns)); usize::from(columns)];

        for (idx, product) in self.products.iter().enumerate() {
            let row = idx / usize::from(columns);
            let col = idx % usize::from(columns);
            let Some(&row_area) = row_areas.get(row) else {
                break;
            };
            let cells = Layout::horizontal(column_constraints.clone()).split(row_area);
            let Some(&card_area) = cells.get(col) else {
                continue;
            };

            let is_selected = self.selected == Some(idx);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(if is_selected {
                    self.theme.focused_border_style.add_modifier(Modifier::BOLD)
                } else {
                    self.theme.border_style
                })
                .title(if is_selected { " ▸ " } else { "" });

            let inner_width = usize::from(card_area.width.saturating_sub(2));
            Paragraph::new(self.card_lines(product, inner_width))
                .block(block)
                .render(card_area, buf);
        }
    }
}
