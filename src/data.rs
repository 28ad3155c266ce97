// src/data.rs
use serde::{Deserialize, Serialize};

/// One finished record, in output column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Stock")]
    pub stock: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl CatalogueItem {
    pub fn compose(entry: &ListingEntry, detail: DetailFields) -> Self {
        Self {
            name: entry.name.clone(),
            price: entry.price.clone(),
            rating: entry.rating.clone(),
            stock: detail.stock,
            description: detail.description,
        }
    }
}

/// One product card on a catalogue page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Raw `href`, relative to the catalogue root.
    pub link: Option<String>,
    pub name: String,
    pub price: String,
    pub rating: String,
}

/// Fields only the detail page carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailFields {
    pub stock: String,
    pub description: String,
}
