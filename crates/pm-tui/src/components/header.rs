//! Header bar component.
//!
//! Displays the application title, the number of matching products, and the
//! add/help hints.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The header bar component.
pub struct HeaderBar<'a> {
    /// Products matching the current search.
    product_count: usize,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(product_count: usize, theme: &'a Theme) -> Self {
        Self {
            product_count,
            theme,
        }
    }
}

/// Formats a product count, e.g. `1 product` or `12 products`.
#[must_use]
pub fn product_count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_owned()
    } else {
        format!("{count} products")
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("Product Manager", self.theme.header_style),
            Span::raw(" │ "),
            Span::styled(
                product_count_label(self.product_count),
                self.theme.status_style(true),
            ),
            Span::raw(" │ "),
            Span::styled("a", self.theme.accent_style()),
            Span::styled(" Add Product", self.theme.base_style()),
            Span::raw(" │ "),
            Span::styled("? for help", self.theme.dimmed_style()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;

    #[test]
    fn test_product_count_label() {
        assert_eq!(product_count_label(0), "0 products");
        assert_eq!(product_count_label(1), "1 product");
        assert_eq!(product_count_label(24), "24 products");
    }

    #[test]
    fn test_header_render() {
        let theme = Theme::dark();
        let header = HeaderBar::new(24, &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 2));
        (&header).render(buf.area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.starts_with("Product Manager │ 24 products │ a Add Product │ ? for help"));
    }
}
