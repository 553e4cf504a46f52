//! Search input component.
//!
//! Displays the search box above the product list. While typing, the typed
//! text is shown immediately; the list only follows once the debouncer
//! commits it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use crate::app::SearchState;
use crate::theme::Theme;

/// Placeholder shown when the search box is empty.
pub const PLACEHOLDER: &str = "Search products...";

/// A search box widget.
pub struct SearchInput<'a> {
    /// Typed and committed search text.
    search: &'a SearchState,
    /// Whether keystrokes go to the search box.
    focused: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> SearchInput<'a> {
    /// Creates a new search input widget.
    #[must_use]
    pub const fn new(search: &'a SearchState, focused: bool, theme: &'a Theme) -> Self {
        Self {
            search,
            focused,
            theme,
        }
    }
}

/// Returns the longest suffix of `text` that fits in `max_width` columns.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}

impl Widget for &SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("⌕ ", self.theme.dimmed_style())];

        if self.search.input.is_empty() {
            spans.push(Span::styled(
                PLACEHOLDER,
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            // Borders, icon, cursor and the settling hint.
            let room = usize::from(area.width).saturating_sub(18);
            spans.push(Span::styled(
                visible_tail(&self.search.input, room),
                self.theme.base_style(),
            ));
        }
        if self.focused {
            spans.push(Span::styled("▌", self.theme.accent_style()));
        }
        if self.search.is_settling() {
            spans.push(Span::styled("  searching…", self.theme.dimmed_style()));
        }

        let (border_style, title) = if self.focused {
            (
                self.theme.focused_border_style,
                " Search (Enter/Esc to finish) ",
            )
        } else {
            (self.theme.border_style, " Search (/) ")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
