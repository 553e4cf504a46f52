//! Page controls component.
//!
//! Renders the first/previous/next/last controls around the numbered page
//! window, plus the "Showing a-b of n" summary. Disabled controls are dimmed.
//! [`PaginationBar::target_at`] maps a clicked column back to a page.

use pm_core::{PageControls, PageToken};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// The page controls bar.
pub struct PaginationBar<'a> {
    controls: &'a PageControls,
    /// Index range of the products on this page.
    shown: std::ops::Range<usize>,
    /// Number of products across all pages.
    total_items: usize,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Creates the bar.
    #[must_use]
    pub const fn new(
        controls: &'a PageControls,
        shown: std::ops::Range<usize>,
        total_items: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            controls,
            shown,
            total_items,
            theme,
        }
    }

    /// Returns the page a click at `column` selects, if any.
    ///
    /// `area` must be the area the bar is rendered into. Navigation symbols
    /// select their target page and numbered pages select themselves. Clicks
    /// on gaps, ellipses or the summary, and any click when the bar is wider
    /// than `area`, select nothing.
    #[must_use]
    pub fn target_at(&self, area: Rect, column: u16) -> Option<usize> {
        if !self.controls.is_visible() {
            return None;
        }
        let segments = self.segments();
        let line_width: usize = segments.iter().map(|(span, _)| span.width()).sum();
        let area_width = usize::from(area.width);
        if line_width > area_width {
            return None;
        }

        // Same offset Paragraph uses for centered lines.
        let mut x = usize::from(area.x) + (area_width / 2).saturating_sub(line_width / 2);
        let column = usize::from(column);
        for (span, target) in segments {
            let width = span.width();
            if (x..x + width).contains(&column) {
                return target;
            }
            x += width;
        }
        None
    }

    fn nav(&self, label: &'static str, target: Option<usize>) -> (Span<'a>, Option<usize>) {
        let style = if target.is_some() {
            self.theme.accent_style()
        } else {
            self.theme.dimmed_style()
        };
        (Span::styled(label, style), target)
    }

    /// The bar's spans, each paired with the page clicking it selects.
    fn segments(&self) -> Vec<(Span<'a>, Option<usize>)> {
        let gap = || (Span::raw(" "), None);
        let mut segments = vec![
            self.nav("«", self.controls.first),
            gap(),
            self.nav("‹", self.controls.previous),
        ];

        for token in &self.controls.window {
            segments.push(gap());
            segments.push(match *token {
                PageToken::Page(page) if page == self.controls.current => (
                    Span::styled(format!("[{page}]"), self.theme.current_page_style),
                    Some(page),
                ),
                PageToken::Page(page) => {
                    (Span::styled(page.to_string(), self.theme.base_style()), Some(page))
                }
                PageToken::Ellipsis => (Span::styled("…", self.theme.dimmed_style()), None),
            });
        }

        segments.push(gap());
        segments.push(self.nav("›", self.controls.next));
        segments.push(gap());
        segments.push(self.nav("»", self.controls.last));
        segments.push((
            Span::styled(
                format!(
                    "   Showing {}-{} of {}",
                    self.shown.start + 1,
                    self.shown.end,
                    self.total_items
                ),
                self.theme.dimmed_style(),
            ),
            None,
        ));
        segments
    }

    fn build_line(&self) -> Line<'a> {
        Line::from(
            self.segments()
                .into_iter()
                .map(|(span, _)| span)
                .collect::<Vec<_>>(),
        )
    }
}

impl Widget for &PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.controls.is_visible() {
            return;
        }
        Paragraph::new(self.build_line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;
    use ratatui::style::Color;

    fn render(current: usize, total: usize, width: u16) -> (Buffer, String) {
        let theme = Theme::dark();
        let controls = PageControls::new(current, total);
        let start = (current - 1) * 8;
        let bar = PaginationBar::new(&controls, start..start + 8, total * 8, &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, width, 1));
        (&bar).render(buf.area, &mut buf);
        let text = buffer_text(&buf);
        (buf, text)
    }

    #[test]
    fn test_middle_page_window() {
        let (_, text) = render(5, 10, 80);
        insta::assert_snapshot!(text.trim(), @"« ‹ 1 … 4 [5] 6 … 10 › »   Showing 33-40 of 80");
    }

    #[test]
    fn test_first_page_disables_back_controls() {
        let (buf, text) = render(1, 10, 60);
        let text = text.trim_start();
        assert!(text.starts_with("« ‹ [1] 2 … 10 › »"));

        let theme = Theme::dark();
        let col = buf
            .content()
            .iter()
            .position(|c| c.symbol() == "«")
            .unwrap();
        assert_eq!(buf.content()[col].fg, theme.dimmed_fg);
        let next = buf
            .content()
            .iter()
            .position(|c| c.symbol() == "›")
            .unwrap();
        assert_eq!(buf.content()[next].fg, theme.accent);
    }

    #[test]
    fn test_last_page() {
        let (_, text) = render(10, 10, 80);
        assert!(text.contains("1 … 9 [10] › »"));
    }

    /// Column of the first cell in `buf` whose symbols spell `text`.
    fn column_of(buf: &Buffer, text: &str) -> u16 {
        let symbols: Vec<&str> = buf.content().iter().map(|c| c.symbol()).collect();
        let needle: Vec<String> = text.chars().map(String::from).collect();
        let col = symbols
            .windows(needle.len())
            .position(|w| w.iter().zip(&needle).all(|(a, b)| a == b))
            .unwrap();
        u16::try_from(col).unwrap()
    }

    #[test]
    fn test_click_selects_any_numbered_page() {
        let theme = Theme::dark();
        let controls = PageControls::new(1, 12);
        let bar = PaginationBar::new(&controls, 0..8, 96, &theme);
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        (&bar).render(area, &mut buf);

        // Both digits of a two-digit page select it.
        let twelve = column_of(&buf, "12");
        assert_eq!(bar.target_at(area, twelve), Some(12));
        assert_eq!(bar.target_at(area, twelve + 1), Some(12));
        assert_eq!(bar.target_at(area, column_of(&buf, "2 ")), Some(2));
        assert_eq!(bar.target_at(area, column_of(&buf, "[1]")), Some(1));
    }

    #[test]
    fn test_click_on_navigation_symbols() {
        let theme = Theme::dark();
        let controls = PageControls::new(5, 10);
        let bar = PaginationBar::new(&controls, 32..40, 80, &theme);
        let area = Rect::new(3, 20, 70, 1);
        let mut buf = Buffer::empty(area);
        (&bar).render(area, &mut buf);

        let at = |text| bar.target_at(area, area.x + column_of(&buf, text));
        assert_eq!(at("«"), Some(1));
        assert_eq!(at("‹"), Some(4));
        assert_eq!(at("›"), Some(6));
        assert_eq!(at("»"), Some(10));
        assert_eq!(at("10"), Some(10));
        assert_eq!(at("…"), None);
        assert_eq!(at("Showing"), None);
        assert_eq!(bar.target_at(area, area.x), None);
    }

    #[test]
    fn test_click_on_disabled_or_hidden_controls() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 60, 1);

        let controls = PageControls::new(1, 3);
        let bar = PaginationBar::new(&controls, 0..8, 24, &theme);
        let mut buf = Buffer::empty(area);
        (&bar).render(area, &mut buf);
        assert_eq!(bar.target_at(area, column_of(&buf, "«")), None);
        assert_eq!(bar.target_at(area, column_of(&buf, "»")), Some(3));

        let single = PageControls::new(1, 1);
        let hidden = PaginationBar::new(&single, 0..3, 3, &theme);
        assert!((0..60).all(|col| hidden.target_at(area, col).is_none()));

        let narrow = Rect::new(0, 0, 10, 1);
        assert_eq!(bar.target_at(narrow, 0), None);
    }

    #[test]
    fn test_hidden_for_single_page() {
        let (buf, _) = render(1, 1, 40);
        assert!(buf.content().iter().all(|c| c.symbol() == " "));
        assert!(buf.content().iter().all(|c| c.fg == Color::Reset));
    }
}
