//! Product category types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// The category a product is filed under.
///
/// Serialized with the display name (`"Electronics"`), matching the seed
/// data format.
///
/// # Examples
///
/// ```
/// use pm_core::Category;
///
/// let category: Category = "kitchen".parse().unwrap();
/// assert_eq!(category, Category::Kitchen);
/// assert_eq!(category.to_string(), "Kitchen");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Phones, audio, computers.
    #[default]
    Electronics,
    /// Chairs, desks, shelving.
    Furniture,
    /// Cookware and appliances.
    Kitchen,
    /// Sporting goods.
    Sports,
    /// Clothing and accessories.
    Fashion,
    /// Household goods.
    Home,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Furniture,
        Self::Kitchen,
        Self::Sports,
        Self::Fashion,
        Self::Home,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Furniture => "Furniture",
            Self::Kitchen => "Kitchen",
            Self::Sports => "Sports",
            Self::Fashion => "Fashion",
            Self::Home => "Home",
        }
    }

    /// Returns the next category, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the previous category, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormError::UnknownCategory(trimmed.to_owned()))
    }
}
