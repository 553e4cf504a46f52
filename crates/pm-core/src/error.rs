//! Error types for the pm-core crate.
//!
//! This module provides:
//!
//! - [`ConfigError`] for configuration loading and validation
//! - [`CatalogError`] for loading product seed data
//! - [`FormError`] for converting raw form input into typed product fields

use camino::Utf8PathBuf;

use crate::types::ProductId;

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use pm_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "catalog.items_per_page".to_owned(),
///     reason: "must be positive".to_owned(),
/// };
/// assert!(error.to_string().contains("items_per_page"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[must_use]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading products into a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The seed file could not be read.
    #[error("failed to read product data '{path}': {source}")]
    Io {
        /// Path of the seed file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The seed data is not a valid product list.
    #[error("failed to parse product data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products in the seed data share an id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product id in the seed data is larger than [`ProductId::MAX`].
    #[error("product id {0} is out of range (max {max})", max = ProductId::MAX)]
    IdOutOfRange(ProductId),
}

/// Errors produced when converting raw form input into product fields.
///
/// Only type conversion happens here; content rules (length limits and
/// the like) belong to the form schema, which lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A numeric field holds text that is not a non-negative whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber {
        /// The field label.
        field: &'static str,
        /// The raw input.
        value: String,
    },

    /// The category is not one of the known categories.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl FormError {
    /// Returns the label of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. } => field,
            Self::UnknownCategory(_) => "category",
        }
    }
}
