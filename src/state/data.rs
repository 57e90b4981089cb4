/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog layer and the UI layer.

use serde::Deserialize;

/// Represents a single product in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique catalog ID
    pub id: u32,
    /// Display title (e.g., "Cek Turnitin Instan")
    pub title: String,
    /// Short description shown on the card
    pub description: String,
    /// Price in whole rupiah (no minor units)
    pub price: i64,
    /// Category label (denormalized string, not a foreign key)
    pub category: String,
    /// Path to the product image, relative to the working directory
    pub image: String,
}
