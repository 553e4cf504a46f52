//! Add/edit product modal.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use crate::form::{FormField, ProductForm};
use crate::theme::Theme;

/// Height the modal needs to show every field.
pub const FORM_HEIGHT: u16 = 16;

/// A product form overlay widget.
pub struct ProductFormModal<'a> {
    form: &'a ProductForm,
    theme: &'a Theme,
}

impl<'a> ProductFormModal<'a> {
    /// Creates a new form modal.
    #[must_use]
    pub const fn new(form: &'a ProductForm, theme: &'a Theme) -> Self {
        Self { form, theme }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let active = self.form.active_field == field;
        let label_style = if active {
            self.theme.accent_style().add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style()
        };
        let marker = if active { "▸ " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, self.theme.accent_style()),
            Span::styled(format!("{:<14}", field.label()), label_style),
        ];

        if field == FormField::Category {
            let value = self.form.category.label();
            if active {
                spans.push(Span::styled(format!("◂ {value} ▸"), self.theme.base_style()));
            } else {
                spans.push(Span::styled(value, self.theme.base_style()));
            }
        } else {
            spans.push(Span::styled(
                self.form.value(field).to_owned(),
                self.theme.base_style(),
            ));
            if active {
                spans.push(Span::styled("▌", self.theme.accent_style()));
            }
        }

        Line::from(spans)
    }
}

impl Widget for &ProductFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let mut lines = vec![
            Line::styled(self.form.subtitle(), self.theme.dimmed_style()),
            Line::raw(""),
        ];
        for field in FormField::ALL {
            lines.push(self.field_line(field));
            lines.push(Line::raw(""));
        }

        if let Some(error) = &self.form.error {
            lines.push(Line::styled(error.to_string(), self.theme.error_style()));
        } else {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::styled("Enter", self.theme.accent_style().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}  ", self.form.submit_label()), self.theme.base_style()),
            Span::styled("Esc", self.theme.accent_style().add_modifier(Modifier::BOLD)),
            Span::styled(" Cancel  ", self.theme.base_style()),
            Span::styled("Tab", self.theme.accent_style().add_modifier(Modifier::BOLD)),
            Span::styled(" Next field", self.theme.base_style()),
        ]));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                format!(" {} ", self.form.title()),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.theme.bg));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
