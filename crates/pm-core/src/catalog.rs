//! In-memory product catalog.
//!
//! [`Catalog`] owns the product collection and implements the three
//! operations the UI needs: name search, create, and update. New products are
//! inserted at the front so the most recently added product is listed first.
//!
//! # Examples
//!
//! ```
//! use pm_core::{Catalog, Category, ProductDraft};
//!
//! let mut catalog = Catalog::new();
//! let draft = ProductDraft::parse("Desk Lamp", "1299", "Home", "12", "").unwrap();
//! let id = catalog.add(draft).id;
//!
//! assert_eq!(catalog.search("lamp").len(), 1);
//! assert!(catalog.get(id).is_some());
//! ```

use camino::Utf8Path;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::error::CatalogError;
use crate::types::{Product, ProductDraft, ProductId};

/// An ordered, in-memory collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from an existing product list, keeping its order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id, or
    /// [`CatalogError::IdOutOfRange`] for an id above [`ProductId::MAX`].
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();
        for product in &products {
            if product.id > ProductId::MAX {
                return Err(CatalogError::IdOutOfRange(product.id));
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parses a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed JSON or a duplicate-id error.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Loads a JSON array of products from a file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        let catalog = Self::from_json_str(&content)?;
        info!(path = %path, products = catalog.len(), "Loaded product data");
        Ok(catalog)
    }

    /// Returns all products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products whose name contains `query`, ignoring case.
    ///
    /// A blank query matches every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.matching_indices(query)
            .into_iter()
            .map(|idx| &self.products[idx])
            .collect()
    }

    /// Like [`Catalog::search`], but returns positions in [`Catalog::products`].
    #[must_use]
    pub fn matching_indices(&self, query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..self.products.len()).collect();
        }

        let query = query.to_lowercase();
        self.products
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name_matches(&query))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns the id the next added product will receive.
    ///
    /// One more than the largest id in the catalog, or 1 when empty.
    #[must_use]
    pub fn next_id(&self) -> ProductId {
        let max = self.products.iter().map(|p| p.id.as_u64()).max().unwrap_or(0);
        ProductId::new(max.saturating_add(1))
    }

    /// Adds a product built from `draft`, created now.
    pub fn add(&mut self, draft: ProductDraft) -> &Product {
        self.add_at(draft, Utc::now())
    }

    /// Adds a product built from `draft` with an explicit creation time.
    ///
    /// The product is active, untagged, and inserted at the front.
    pub fn add_at(&mut self, draft: ProductDraft, created_at: DateTime<Utc>) -> &Product {
        let id = self.next_id();
        debug!(%id, name = %draft.name, "Adding product");
        self.products
            .insert(0, Product::from_draft(id, draft, created_at));
        &self.products[0]
    }

    /// Merges `draft` into the product with the given id.
    ///
    /// Returns `None` if no such product exists.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> Option<&Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        debug!(%id, name = %draft.name, "Updating product");
        product.apply(draft);
        Some(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::TimeZone;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            price: 100,
            category: Category::Home,
            stock: 5,
            description: String::new(),
        }
    }

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        catalog.add_at(draft("Ceramic Mug"), at);
        catalog.add_at(draft("Smart Watch"), at);
        catalog.add_at(draft("Coffee Maker"), at);
        catalog
    }

    #[test]
    fn test_add_inserts_at_front_with_next_id() {
        let catalog = seeded();
        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee Maker", "Smart Watch", "Ceramic Mug"]);
        assert_eq!(catalog.products()[0].id, ProductId::new(3));
        assert_eq!(catalog.next_id(), ProductId::new(4));
    }

    #[test]
    fn test_next_id_empty_catalog() {
        assert_eq!(Catalog::new().next_id(), ProductId::new(1));
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let json = r#"[
            {"id": 10, "name": "A", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 2, "name": "B", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.next_id(), ProductId::new(11));
    }

    #[test]
    fn test_search_case_insensitive() {
        let catalog = seeded();
        let hits = catalog.search("MA");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee Maker", "Smart Watch"]);
    }

    #[test]
    fn test_search_blank_returns_all() {
        let catalog = seeded();
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
    }

    #[test]
    fn test_matching_indices() {
        let catalog = seeded();
        assert_eq!(catalog.matching_indices("watch"), vec![1]);
        assert_eq!(catalog.matching_indices(""), vec![0, 1, 2]);
    }

    #[test]
    fn test_search_no_match() {
        assert!(seeded().search("laptop").is_empty());
    }

    #[test]
    fn test_update_merges() {
        let mut catalog = seeded();
        let mut edit = draft("Smart Watch 2");
        edit.stock = 99;
        let updated = catalog.update(ProductId::new(2), edit).unwrap();
        assert_eq!(updated.name, "Smart Watch 2");
        assert_eq!(updated.stock, 99);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut catalog = seeded();
        assert!(catalog.update(ProductId::new(42), draft("Ghost")).is_none());
        assert_eq!(catalog, seeded());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 1, "name": "B", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_ids_beyond_max_rejected() {
        let json = r#"[
            {"id": 18446744073709551615, "name": "A", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::IdOutOfRange(id)) if id == ProductId::new(u64::MAX)
        ));
    }

    #[test]
    fn test_next_id_after_largest_allowed_id() {
        let json = r#"[
            {"id": 9007199254740991, "name": "A", "price": 1, "category": "Home", "stock": 1, "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.next_id(), ProductId::new(1 << 53));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = Catalog::from_json_file(Utf8Path::new("/nonexistent/products.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
