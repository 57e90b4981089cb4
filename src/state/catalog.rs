/// The product catalog and its query operations
///
/// The catalog is parsed once at startup from a JSON asset embedded in
/// the binary and is immutable afterwards. Every query is a pure
/// function over the product list; the UI re-renders from the results.

use thiserror::Error;

use super::data::Product;

/// The sentinel category label that selects the entire catalog
pub const ALL_CATEGORIES: &str = "Semua";

/// Product list shipped with the binary
const PRODUCTS_JSON: &str = include_str!("../../assets/products.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product list asset could not be parsed
    #[error("failed to parse product list: {0}")]
    Parse(#[from] serde_json::Error),
    /// The product list parsed but contains no products
    #[error("product list is empty")]
    Empty,
}

/// The immutable product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from the embedded product list.
    ///
    /// The storefront cannot function without its products, so callers
    /// treat a failure here as fatal at startup.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(PRODUCTS_JSON)
    }

    /// Parse a catalog from a JSON array of products
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Catalog { products })
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Look up a product by its catalog ID
    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order, with the sentinel
    /// prepended so the first chip always shows the full catalog
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Products whose category matches the given label exactly.
    /// The sentinel label returns the full catalog.
    pub fn filter_by_category(&self, category: &str) -> Vec<Product> {
        if category == ALL_CATEGORIES {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products whose title, description, or category contains the
    /// query as a case-insensitive substring.
    ///
    /// The query is trimmed first; a query that is empty after trimming
    /// returns the full catalog.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.products.clone();
        }
        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"[
                {"id": 1, "title": "Skripsi A", "description": "Jasa pengecekan",
                 "price": 10000, "category": "Jasa", "image": "a.jpg"},
                {"id": 2, "title": "Tesis B", "description": "Paket lengkap",
                 "price": 150000, "category": "Lain", "image": "b.jpg"},
                {"id": 3, "title": "Skripsi C", "description": "Revisi cepat",
                 "price": 20000, "category": "Jasa", "image": "c.jpg"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.len() > 0);
        // Every product must belong to a category the chips will offer
        let categories = catalog.categories();
        for product in catalog.products() {
            assert!(categories.contains(&product.category));
        }
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let result = Catalog::from_json("[]");
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_list_is_an_error() {
        let result = Catalog::from_json("{ not a list");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_categories_first_seen_order_with_sentinel() {
        let categories = sample().categories();
        assert_eq!(categories, vec!["Semua", "Jasa", "Lain"]);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = sample();

        let jasa = catalog.filter_by_category("Jasa");
        assert_eq!(jasa.len(), 2);
        assert!(jasa.iter().all(|p| p.category == "Jasa"));

        // The sentinel restores the full catalog
        assert_eq!(catalog.filter_by_category(ALL_CATEGORIES).len(), 3);

        // An unknown label matches nothing
        assert!(catalog.filter_by_category("Nonexistent").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = sample();

        let results = catalog.search("tesis");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Tesis B");

        // Matches descriptions and categories too
        assert_eq!(catalog.search("revisi").len(), 1);
        assert_eq!(catalog.search("JASA").len(), 2);
    }

    #[test]
    fn test_blank_query_restores_full_catalog() {
        let catalog = sample();
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.search("   ").len(), 3);
    }

    #[test]
    fn test_product_lookup_by_id() {
        let catalog = sample();
        assert_eq!(catalog.product(2).unwrap().title, "Tesis B");
        assert!(catalog.product(99).is_none());
    }
}
