//! Domain types for the prodman product manager.
//!
//! # Module Organization
//!
//! - [`category`] - Product categories
//! - [`product`] - Product records, identifiers and editable drafts
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use pm_core::{Category, Product, ProductDraft, ProductId};
//! ```

mod category;
mod product;

pub use category::Category;
pub use product::{Product, ProductDraft, ProductId};
