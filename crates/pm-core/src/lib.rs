//! Core types, errors, and utilities for the prodman product manager.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Error types for consistent error handling
//! - Configuration structures
//! - Domain types (`Product`, `ProductDraft`, `Category`)
//! - The in-memory [`Catalog`] with name search, create and update
//! - The pagination window calculator and page arithmetic
//! - Display formatting for prices and dates
//!
//! # Crate Dependencies
//!
//! ```text
//! pm-cli ──► pm-tui ──► pm-toast ──► pm-core
//!                   ├─► pm-timer
//!                   └─► pm-core
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod pagination;
pub mod types;

pub use catalog::Catalog;
pub use config::{CatalogConfig, ColorScheme, Config, ToastConfig, TuiConfig, ViewMode};
pub use error::{CatalogError, ConfigError, FormError};
pub use pagination::{PageControls, PageToken, PageWindow, compute_window, total_pages};
pub use types::{Category, Product, ProductDraft, ProductId};
