/// Ephemeral view state for the product section
///
/// Tracks which filter chip is active, the current search text, and the
/// product subset being shown. Filter and search are deliberately not
/// composed: each control recomputes its subset from the full catalog
/// and ignores the other control's state. Selecting a chip leaves the
/// search text in the box; typing a query leaves the chip marked active.

use super::catalog::{Catalog, ALL_CATEGORIES};
use super::data::Product;

/// View state for the product list, rebuilt from the full catalog on
/// every filter or search change. Nothing here survives a restart.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Label of the chip currently marked active (exactly one at a time)
    pub active_category: String,
    /// Raw text in the search box, untrimmed
    pub query: String,
    /// The subset currently rendered as cards
    pub shown: Vec<Product>,
}

impl ViewState {
    /// Initial state: sentinel chip active, empty query, full catalog shown
    pub fn new(catalog: &Catalog) -> Self {
        ViewState {
            active_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            shown: catalog.products().to_vec(),
        }
    }

    /// Activate a chip: show that category's subset and mark the chip
    /// active. The search text is left untouched and ignored.
    pub fn select_category(&mut self, catalog: &Catalog, category: &str) {
        self.shown = catalog.filter_by_category(category);
        self.active_category = category.to_string();
    }

    /// Apply a search query: show the matching subset computed from the
    /// full catalog. The active chip is left untouched and ignored.
    pub fn set_query(&mut self, catalog: &Catalog, query: String) {
        self.shown = catalog.search(&query);
        self.query = query;
    }
}
