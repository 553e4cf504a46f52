//! Placeholder shown when no products match.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The empty-list placeholder.
pub struct EmptyState<'a> {
    /// Whether a search is narrowing the list.
    searching: bool,
    theme: &'a Theme,
}

impl<'a> EmptyState<'a> {
    /// Creates the placeholder.
    #[must_use]
    pub const fn new(searching: bool, theme: &'a Theme) -> Self {
        Self { searching, theme }
    }

    /// Returns the hint line under the headline.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        if self.searching {
            "Try adjusting your search query"
        } else {
            "Get started by adding your first product (press a)"
        }
    }
}

impl Widget for &EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top_padding = area.height.saturating_sub(4) / 2;
        let mut lines = vec![Line::raw(""); usize::from(top_padding)];
        lines.push(Line::styled(
            "No products found",
            self.theme.base_style().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(self.hint(), self.theme.dimmed_style()));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;

    #[test]
    fn test_hint_depends_on_search() {
        let theme = Theme::dark();
        assert_eq!(
            EmptyState::new(true, &theme).hint(),
            "Try adjusting your search query"
        );
        assert!(EmptyState::new(false, &theme).hint().starts_with("Get started"));
    }

    #[test]
    fn test_render() {
        let theme = Theme::dark();
        let empty = EmptyState::new(true, &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 8));
        (&empty).render(buf.area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("No products found"));
        assert!(text.contains("Try adjusting your search query"));
    }
}
