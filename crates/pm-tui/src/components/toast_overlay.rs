//! Toast notification overlay.
//!
//! Stacks open toasts in the top-right corner, newest on top.

use pm_toast::Toast;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Width of a toast box.
pub const TOAST_WIDTH: u16 = 44;

/// Height of a toast box including borders.
pub const TOAST_HEIGHT: u16 = 4;

/// The toast stack overlay.
pub struct ToastOverlay<'a> {
    toasts: Vec<&'a Toast>,
    theme: &'a Theme,
}

impl<'a> ToastOverlay<'a> {
    /// Creates the overlay for the given open toasts, newest first.
    #[must_use]
    pub const fn new(toasts: Vec<&'a Toast>, theme: &'a Theme) -> Self {
        Self { toasts, theme }
    }

    /// Returns the area the stack occupies inside `screen`.
    #[must_use]
    pub fn area(&self, screen: Rect) -> Rect {
        let width = TOAST_WIDTH.min(screen.width);
        let count = u16::try_from(self.toasts.len()).unwrap_or(u16::MAX);
        let height = count.saturating_mul(TOAST_HEIGHT).min(screen.height);
        Rect::new(
            screen.x + screen.width - width,
            screen.y,
            width,
            height,
        )
    }

    fn render_toast(&self, toast: &Toast, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let accent = self.theme.toast_style(toast.variant);
        let mut lines = Vec::with_capacity(2);
        if let Some(title) = &toast.title {
            lines.push(Line::from(Span::styled(
                title.as_str(),
                accent.add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(description) = &toast.description {
            lines.push(Line::from(Span::styled(
                description.as_str(),
                self.theme.base_style(),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title_bottom(Line::from(Span::styled(" x dismiss ", self.theme.dimmed_style())).right_aligned());

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for &ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for toast in &self.toasts {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let slot = Rect::new(area.x, y, area.width, TOAST_HEIGHT);
            self.render_toast(toast, slot, buf);
            y += TOAST_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::buffer_text;
    use pm_core::ToastConfig;
    use pm_toast::{ToastContent, ToastQueue, ToastVariant};

    fn toasts(limit: usize, titles: &[&str]) -> Vec<Toast> {
        let queue = ToastQueue::new(ToastConfig {
            limit,
            ..ToastConfig::default()
        });
        for title in titles {
            queue.enqueue(
                ToastContent::new()
                    .title(*title)
                    .description(format!("\"{title}\" body"))
                    .variant(ToastVariant::Success),
            );
        }
        queue.snapshot()
    }

    #[tokio::test]
    async fn test_area_is_top_right() {
        let theme = Theme::dark();
        let list = toasts(3, &["a", "b"]);
        let overlay = ToastOverlay::new(list.iter().collect(), &theme);
        let area = overlay.area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(56, 0, TOAST_WIDTH, TOAST_HEIGHT * 2));

        let narrow = overlay.area(Rect::new(0, 0, 20, 5));
        assert_eq!(narrow, Rect::new(0, 0, 20, 5));
    }

    #[tokio::test]
    async fn test_renders_newest_first() {
        let theme = Theme::dark();
        let list = toasts(3, &["Product added", "Product updated"]);
        let overlay = ToastOverlay::new(list.iter().collect(), &theme);

        let screen = Rect::new(0, 0, TOAST_WIDTH, 12);
        let area = overlay.area(screen);
        let mut buf = Buffer::empty(screen);
        (&overlay).render(area, &mut buf);

        let text = buffer_text(&buf);
        let updated = text.find("Product updated").unwrap();
        let added = text.find("Product added").unwrap();
        assert!(updated < added);
        assert!(text.contains("x dismiss"));
    }

    #[tokio::test]
    async fn test_uses_variant_color() {
        let theme = Theme::dark();
        let list = toasts(1, &["Saved"]);
        let overlay = ToastOverlay::new(list.iter().collect(), &theme);

        let mut buf = Buffer::empty(Rect::new(0, 0, TOAST_WIDTH, TOAST_HEIGHT));
        (&overlay).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, theme.success_fg);
    }
}
