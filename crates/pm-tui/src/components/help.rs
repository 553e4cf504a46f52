//! Help panel component.
//!
//! Displays a modal overlay with key bindings and help information.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    /// Description of what the key does.
    description: &'static str,
    /// The mode(s) where this binding applies.
    mode: &'static str,
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    // Selection
    KeyBinding {
        key: "j / ↓",
        description: "Next product",
        mode: "Normal",
    },
    KeyBinding {
        key: "k / ↑",
        description: "Previous product",
        mode: "Normal",
    },
    // Pages
    KeyBinding {
        key: "l / → / PgDn",
        description: "Next page",
        mode: "Normal",
    },
    KeyBinding {
        key: "h / ← / PgUp",
        description: "Previous page",
        mode: "Normal",
    },
    KeyBinding {
        key: "g / Home",
        description: "First page",
        mode: "Normal",
    },
    KeyBinding {
        key: "G / End",
        description: "Last page",
        mode: "Normal",
    },
    KeyBinding {
        key: "1-9",
        description: "Go to page",
        mode: "Normal",
    },
    // Search
    KeyBinding {
        key: "/",
        description: "Search by name",
        mode: "Normal",
    },
    KeyBinding {
        key: "Enter / Esc",
        description: "Finish typing",
        mode: "Search",
    },
    KeyBinding {
        key: "Esc",
        description: "Clear search",
        mode: "Normal",
    },
    // Products
    KeyBinding {
        key: "a",
        description: "Add product",
        mode: "Normal",
    },
    KeyBinding {
        key: "e / Enter",
        description: "Edit selected product",
        mode: "Normal",
    },
    KeyBinding {
        key: "Tab / S-Tab",
        description: "Next / previous field",
        mode: "Form",
    },
    KeyBinding {
        key: "← / →",
        description: "Change category",
        mode: "Form",
    },
    KeyBinding {
        key: "Enter",
        description: "Save product",
        mode: "Form",
    },
    KeyBinding {
        key: "Esc",
        description: "Cancel",
        mode: "Form/Help",
    },
    // View
    KeyBinding {
        key: "v",
        description: "Toggle grid / list view",
        mode: "Normal",
    },
    KeyBinding {
        key: "x",
        description: "Dismiss notification",
        mode: "Normal",
    },
    KeyBinding {
        key: "?",
        description: "Toggle help panel",
        mode: "Normal",
    },
    KeyBinding {
        key: "q / Ctrl+c",
        description: "Quit",
        mode: "Any",
    },
];

/// A help panel overlay widget.
///
/// Displays key bindings in a table format as a modal overlay.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Rows needed to show every binding, including header and borders.
    #[must_use]
    pub fn required_height() -> u16 {
        u16::try_from(KEY_BINDINGS.len()).unwrap_or(u16::MAX).saturating_add(4)
    }

    fn build_rows(&self) -> Vec<Row<'static>> {
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(
                        binding.key,
                        self.theme.price_style(),
                    )),
                    Cell::from(Span::styled(
                        binding.description,
                        self.theme.base_style(),
                    )),
                    Cell::from(Span::styled(binding.mode, self.theme.dimmed_style())),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Help - Key Bindings ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));

        let heading = self
            .theme
            .accent_style()
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let header = Row::new(vec![
            Cell::from(Span::styled("Key", heading)),
            Cell::from(Span::styled("Action", heading)),
            Cell::from(Span::styled("Mode", heading)),
        ])
        .height(1)
        .bottom_margin(1);

        let widths = [
            Constraint::Length(15),
            Constraint::Min(25),
            Constraint::Length(10),
        ];

        Table::new(self.build_rows(), widths)
            .block(block)
            .header(header)
            .render(area, buf);
    }
}
