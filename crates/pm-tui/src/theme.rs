//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports dark and light color
//! schemes, plus a monochrome theme for `--no-color`.
//!
//! # Example
//!
//! ```
//! use pm_toast::ToastVariant;
//! use pm_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.toast_style(ToastVariant::Destructive);
//! assert_eq!(style.fg, Some(theme.error_fg));
//! ```

use pm_core::ColorScheme;
use pm_toast::ToastVariant;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles used throughout the interface.
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// or [`Theme::from_scheme()`] to create a theme based on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Product Colors
    // =========================================================================
    /// Foreground color for active products.
    pub active_fg: Color,

    /// Foreground color for inactive products.
    pub inactive_fg: Color,

    /// Foreground color for stock below the low-stock threshold.
    pub low_stock_fg: Color,

    /// Foreground color for prices.
    pub price_fg: Color,

    /// Foreground color for tag chips.
    pub tag_fg: Color,

    // =========================================================================
    // Selection Colors
    // =========================================================================
    /// Background color for selected items.
    pub selected_bg: Color,

    /// Foreground color for selected items.
    pub selected_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Success color.
    pub success_fg: Color,

    /// Error/warning color.
    pub error_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for highlighted/selected items.
    pub highlight_style: Style,

    /// Style for the header bar.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,

    /// Style for the current page in the page controls.
    pub current_page_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            active_fg: Color::Rgb(100, 220, 120),
            inactive_fg: Color::Rgb(128, 128, 128),
            low_stock_fg: Color::Rgb(255, 100, 100),
            price_fg: Color::Rgb(255, 200, 100),
            tag_fg: Color::Rgb(170, 150, 255),

            selected_bg: Color::Rgb(60, 60, 80),
            selected_fg: Color::White,

            fg: Color::Rgb(220, 220, 220),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            success_fg: Color::Rgb(100, 220, 120),
            error_fg: Color::Rgb(255, 80, 80),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
            current_page_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            active_fg: Color::Rgb(40, 140, 60),
            inactive_fg: Color::Rgb(110, 110, 110),
            low_stock_fg: Color::Rgb(180, 50, 50),
            price_fg: Color::Rgb(160, 100, 20),
            tag_fg: Color::Rgb(90, 60, 180),

            selected_bg: Color::Rgb(200, 200, 220),
            selected_fg: Color::Black,

            fg: Color::Rgb(30, 30, 30),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            success_fg: Color::Rgb(40, 140, 60),
            error_fg: Color::Rgb(180, 50, 50),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
            current_page_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Creates a theme without colors, relying on modifiers only.
    #[must_use]
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Self {
            active_fg: Color::Reset,
            inactive_fg: Color::Reset,
            low_stock_fg: Color::Reset,
            price_fg: Color::Reset,
            tag_fg: Color::Reset,
            selected_bg: Color::Reset,
            selected_fg: Color::Reset,
            fg: Color::Reset,
            bg: Color::Reset,
            dimmed_fg: Color::Reset,
            accent: Color::Reset,
            success_fg: Color::Reset,
            error_fg: Color::Reset,
            border_style: plain,
            focused_border_style: plain.add_modifier(Modifier::BOLD),
            highlight_style: plain.add_modifier(Modifier::REVERSED),
            header_style: plain.add_modifier(Modifier::BOLD),
            status_bar_style: plain,
            current_page_style: plain.add_modifier(Modifier::REVERSED | Modifier::BOLD),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the style for an active/inactive badge.
    #[must_use]
    pub fn status_style(&self, is_active: bool) -> Style {
        let color = if is_active { self.active_fg } else { self.inactive_fg };
        Style::default().fg(color)
    }

    /// Returns the style for a stock count.
    #[must_use]
    pub fn stock_style(&self, low_stock: bool) -> Style {
        if low_stock {
            Style::default()
                .fg(self.low_stock_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            self.base_style()
        }
    }

    /// Returns the accent style for a toast variant.
    #[must_use]
    pub fn toast_style(&self, variant: ToastVariant) -> Style {
        let color = match variant {
            ToastVariant::Destructive => self.error_fg,
            ToastVariant::Success => self.success_fg,
            ToastVariant::Default | _ => self.accent,
        };
        Style::default().fg(color)
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }

    /// Returns a style for prices.
    #[must_use]
    pub fn price_style(&self) -> Style {
        Style::default()
            .fg(self.price_fg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.fg, Color::Rgb(220, 220, 220));
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.fg, Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_theme_from_scheme() {
        assert_eq!(Theme::from_scheme(ColorScheme::Dark), Theme::dark());
        assert_eq!(Theme::from_scheme(ColorScheme::Light), Theme::light());
        assert_eq!(Theme::from_scheme(ColorScheme::Auto), Theme::dark());
    }

    #[test]
    fn test_status_style() {
        let theme = Theme::dark();
        assert_eq!(theme.status_style(true).fg, Some(theme.active_fg));
        assert_eq!(theme.status_style(false).fg, Some(theme.inactive_fg));
    }

    #[test]
    fn test_stock_style_highlights_low_stock() {
        let theme = Theme::light();
        let low = theme.stock_style(true);
        assert_eq!(low.fg, Some(theme.low_stock_fg));
        assert!(low.add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.stock_style(false), theme.base_style());
    }

    #[test]
    fn test_toast_style() {
        let theme = Theme::dark();
        assert_eq!(theme.toast_style(ToastVariant::Default).fg, Some(theme.accent));
        assert_eq!(theme.toast_style(ToastVariant::Success).fg, Some(theme.success_fg));
        assert_eq!(
            theme.toast_style(ToastVariant::Destructive).fg,
            Some(theme.error_fg)
        );
    }

    #[test]
    fn test_monochrome_has_no_colors() {
        let theme = Theme::monochrome();
        assert_eq!(theme.price_style().fg, Some(Color::Reset));
        assert!(theme.highlight_style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_theme_default() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
