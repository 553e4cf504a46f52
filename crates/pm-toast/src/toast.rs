//! Toast records and the content used to create and patch them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Toast ids wrap back to zero when the counter reaches this value.
pub const ID_WRAP: u64 = (1 << 53) - 1;

/// Identifier of a toast, unique among live toasts.
///
/// Displays as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates an id from a raw counter value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw counter value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the id following this one, wrapping at [`ID_WRAP`].
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % ID_WRAP)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ToastVariant {
    /// Neutral information.
    #[default]
    Default,
    /// An operation succeeded.
    Success,
    /// Something went wrong.
    Destructive,
}

/// What a new toast shows.
///
/// # Examples
///
/// ```
/// use pm_toast::{ToastContent, ToastVariant};
///
/// let content = ToastContent::new()
///     .title("Product added")
///     .description("\"Desk Lamp\" has been added successfully.")
///     .variant(ToastVariant::Success);
/// assert_eq!(content.title.as_deref(), Some("Product added"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastContent {
    /// Headline.
    pub title: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Visual style.
    pub variant: ToastVariant,
}

impl ToastContent {
    /// Creates empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the variant.
    #[must_use]
    pub const fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Fields to merge into an existing toast. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement variant.
    pub variant: Option<ToastVariant>,
}

impl ToastPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the variant.
    #[must_use]
    pub const fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// A notification held by the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Queue-assigned id.
    pub id: ToastId,
    /// Headline.
    pub title: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Visual style.
    pub variant: ToastVariant,
    /// `false` once dismissed. A closed toast waits for its removal timer.
    pub open: bool,
    /// When the toast was enqueued.
    pub created_at: Instant,
}

impl Toast {
    pub(crate) fn new(id: ToastId, content: ToastContent) -> Self {
        Self {
            id,
            title: content.title,
            description: content.description,
            variant: content.variant,
            open: true,
            created_at: Instant::now(),
        }
    }

    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_wraps() {
        assert_eq!(ToastId::new(1).next(), ToastId::new(2));
        assert_eq!(ToastId::new(ID_WRAP - 1).next(), ToastId::new(0));
        assert_eq!(ToastId::new(9_007_199_254_740_990).to_string(), "9007199254740990");
    }

    #[tokio::test]
    async fn test_patch_merges_given_fields() {
        let mut toast = Toast::new(
            ToastId::new(1),
            ToastContent::new().title("Saving").description("Please wait"),
        );
        toast.apply(ToastPatch::new().title("Saved").variant(ToastVariant::Success));

        assert_eq!(toast.title.as_deref(), Some("Saved"));
        assert_eq!(toast.description.as_deref(), Some("Please wait"));
        assert_eq!(toast.variant, ToastVariant::Success);
        assert!(toast.open);
    }
}
