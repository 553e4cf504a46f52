//! Status bar component.
//!
//! Displays status messages, mode indicators, and help hints.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{App, AppMode};
use crate::theme::Theme;

/// The status bar component.
///
/// Displays:
/// - Current mode indicator
/// - Status message (if any)
/// - Committed search query (if any)
/// - Page position and layout
pub struct StatusBar<'a> {
    /// The application state.
    app: &'a App,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = Vec::new();

        let mode_text = match self.app.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Searching => "SEARCH",
            AppMode::Form => "FORM",
            AppMode::Help => "HELP",
        };
        spans.push(Span::styled(
            format!(" {mode_text} "),
            self.theme.current_page_style,
        ));
        spans.push(Span::raw(" "));

        if let Some(status) = &self.app.status {
            let style = if status.is_error {
                self.theme.error_style()
            } else {
                self.theme.base_style()
            };
            spans.push(Span::styled(status.text.clone(), style));
            spans.push(Span::raw(" │ "));
        }

        if self.app.search.is_active() {
            spans.push(Span::styled("Search: ", self.theme.dimmed_style()));
            spans.push(Span::styled(
                format!("\"{}\"", self.app.search.committed),
                self.theme.price_style(),
            ));
            spans.push(Span::raw(" │ "));
        }

        let total = self.app.total_pages();
        if total > 0 {
            spans.push(Span::styled(
                format!("Page {} of {total}", self.app.current_page()),
                self.theme.dimmed_style(),
            ));
            spans.push(Span::raw(" │ "));
        }

        spans.push(Span::styled(
            format!("{} view", self.app.view.label()),
            self.theme.dimmed_style(),
        ));

        Line::from(spans)
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::app::StatusMessage;
    use crate::components::buffer_text;
    use pm_core::{Catalog, Config};
    use pm_toast::ToastQueue;

    fn render(app: &App) -> String {
        let theme = Theme::dark();
        let bar = StatusBar::new(app, &theme);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 1));
        (&bar).render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"[
                {"id": 1, "name": "Desk Lamp", "price": 1299, "category": "Home", "stock": 12, "createdAt": "2024-01-15T00:00:00Z"},
                {"id": 2, "name": "Ceramic Mug", "price": 349, "category": "Kitchen", "stock": 40, "createdAt": "2024-01-16T00:00:00Z"}
            ]"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_normal_mode() {
        let app = App::new(Config::default(), catalog(), ToastQueue::new(Config::default().toast));
        assert_eq!(render(&app), " NORMAL  Page 1 of 1 │ Grid view");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_and_status() {
        let mut app = App::new(Config::default(), catalog(), ToastQueue::new(Config::default().toast));
        app.update(Action::ApplySearch("mug".to_owned()));
        app.update(Action::ToggleView);
        app.status = Some(StatusMessage::error("stock must be a whole number"));

        let text = render(&app);
        assert!(text.contains("stock must be a whole number │ Search: \"mug\""));
        assert!(text.ends_with("List view"));
    }

    #[tokio::test]
    async fn test_empty_catalog_hides_page() {
        let app = App::new(Config::default(), Catalog::new(), ToastQueue::new(Config::default().toast));
        assert!(!render(&app).contains("Page"));
    }
}
