//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all user-initiated
//! actions that can be performed in the TUI. Actions are the result of
//! processing input events (key presses, mouse scrolls, debounced search
//! commits, toast queue changes) and are used to update application state.
//!
//! # Action Flow
//!
//! ```text
//! Key/Mouse Event → App::handle_key → Action → App::update
//! ```

use pm_core::Category;
use pm_toast::Toast;

/// User-initiated actions in the TUI.
///
/// Actions represent commands that modify application state. They are
/// produced in response to input events and processed by the application's
/// update loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Selection
    // =========================================================================
    /// Move selection to the next product on the page.
    NextItem,

    /// Move selection to the previous product on the page.
    PreviousItem,

    /// Select a product on the current page by index.
    SelectItem(usize),

    // =========================================================================
    // Pagination
    // =========================================================================
    /// Go to the next page, if there is one.
    NextPage,

    /// Go to the previous page, if there is one.
    PreviousPage,

    /// Jump to page 1.
    FirstPage,

    /// Jump to the last page.
    LastPage,

    /// Jump to a specific page (1-based, clamped).
    GoToPage(usize),

    // =========================================================================
    // Search
    // =========================================================================
    /// Enter search mode (start typing a query).
    EnterSearchMode,

    /// Leave search mode, keeping the typed query.
    ExitSearchMode,

    /// The raw search text changed. Fed to the debouncer.
    SetSearchInput(String),

    /// The debouncer committed a query; filter the catalog with it.
    ApplySearch(String),

    /// Clear the search text.
    ClearSearch,

    // =========================================================================
    // Product Form
    // =========================================================================
    /// Open the form for a new product.
    NewProduct,

    /// Open the form prefilled with the selected product.
    EditSelected,

    /// Move form focus to the next field.
    FormNextField,

    /// Move form focus to the previous field.
    FormPreviousField,

    /// Type a character into the focused form field.
    FormInput(char),

    /// Delete the last character of the focused form field.
    FormBackspace,

    /// Set the category in the form.
    FormSetCategory(Category),

    /// Validate the form and create or update the product.
    SubmitForm,

    /// Close the form without saving.
    CancelForm,

    // =========================================================================
    // Notifications
    // =========================================================================
    /// Replace the visible toast list with a fresh queue snapshot.
    SyncToasts(Vec<Toast>),

    /// Dismiss the newest open toast.
    DismissToast,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Switch between grid and list layouts.
    ToggleView,

    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show a status message.
    ShowStatus(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// Tick (periodic update).
    Tick,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None | Self::Tick | Self::SetSearchInput(_))
    }

    /// Returns `true` if this action moves between pages.
    #[must_use]
    pub const fn is_page_change(&self) -> bool {
        matches!(
            self,
            Self::NextPage | Self::PreviousPage | Self::FirstPage | Self::LastPage | Self::GoToPage(_)
        )
    }

    /// Returns `true` if this is a search-related action.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::EnterSearchMode
                | Self::ExitSearchMode
                | Self::SetSearchInput(_)
                | Self::ApplySearch(_)
                | Self::ClearSearch
        )
    }

    /// Returns `true` if this action edits the open product form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormNextField
                | Self::FormPreviousField
                | Self::FormInput(_)
                | Self::FormBackspace
                | Self::FormSetCategory(_)
                | Self::SubmitForm
                | Self::CancelForm
        )
    }
}
