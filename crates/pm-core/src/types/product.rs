//! Product records and editable drafts.
//!
//! A [`Product`] is a full catalog record. A [`ProductDraft`] is the subset
//! of fields a user edits in the product form; it is applied to the catalog
//! either as a new product or merged over an existing one.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::FormError;

/// Stock level below which a product is flagged as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A unique product identifier.
///
/// # Examples
///
/// ```
/// use pm_core::ProductId;
///
/// let id = ProductId::new(42);
/// assert_eq!(id.as_u64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Largest id a seed file may use: `2^53 - 1`, the largest integer a
    /// JSON number holds exactly.
    pub const MAX: Self = Self((1 << 53) - 1);

    /// Creates a new product ID.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product record in the catalog.
///
/// Serialized as camelCase JSON to match the seed data format:
///
/// ```
/// use pm_core::Product;
///
/// let json = r#"{
///     "id": 1,
///     "name": "Wireless Headphones",
///     "price": 2499,
///     "category": "Electronics",
///     "stock": 45,
///     "description": "Over-ear, noise cancelling",
///     "createdAt": "2024-01-15T10:30:00Z",
///     "isActive": true,
///     "tags": ["audio"]
/// }"#;
/// let product: Product = serde_json::from_str(json).unwrap();
/// assert_eq!(product.name, "Wireless Headphones");
/// assert!(product.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name, also the search key.
    pub name: String,

    /// Price in whole rupees.
    pub price: u64,

    /// Category the product is filed under.
    pub category: Category,

    /// Units in stock.
    pub stock: u32,

    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,

    /// When the product was added.
    pub created_at: DateTime<Utc>,

    /// Whether the product is currently listed.
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

const fn default_active() -> bool {
    true
}

impl Product {
    /// Creates an active product from a draft.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            category: draft.category,
            stock: draft.stock,
            description: draft.description,
            created_at,
            is_active: true,
            tags: Vec::new(),
        }
    }

    /// Merges the editable fields of a draft into this product.
    ///
    /// Identity, creation time, activity and tags are kept.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.category = draft.category;
        self.stock = draft.stock;
        self.description = draft.description;
    }

    /// Returns a draft holding this product's editable fields.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    /// Returns `true` if stock is below [`LOW_STOCK_THRESHOLD`].
    #[inline]
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Returns `true` if the name contains `query`, ignoring case.
    ///
    /// `query` must already be lowercased.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}

/// The user-editable fields of a product.
///
/// # Examples
///
/// ```
/// use pm_core::{Category, ProductDraft};
///
/// let draft = ProductDraft::parse("Desk Lamp", "1299", "home", "12", "").unwrap();
/// assert_eq!(draft.price, 1299);
/// assert_eq!(draft.category, Category::Home);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Price in whole rupees.
    pub price: u64,
    /// Category.
    pub category: Category,
    /// Units in stock.
    pub stock: u32,
    /// Description, possibly empty.
    pub description: String,
}

impl ProductDraft {
    /// Builds a draft from raw text input.
    ///
    /// Text fields are trimmed. Numeric fields accept an empty string as zero.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if a numeric field does not parse or the
    /// category is unknown.
    pub fn parse(
        name: &str,
        price: &str,
        category: &str,
        stock: &str,
        description: &str,
    ) -> Result<Self, FormError> {
        Ok(Self {
            name: name.trim().to_owned(),
            price: parse_number("price", price)?,
            category: category.parse()?,
            stock: parse_number("stock", stock)?,
            description: description.trim().to_owned(),
        })
    }
}

fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, FormError>
where
    T: std::str::FromStr + Default,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: trimmed.to_owned(),
    })
}
