//! Catalog items and the validated, ordered catalog.
//!
//! Catalog order is significant: items of the same category are expected to
//! sit next to each other, and the view model only detects a new category by
//! comparing each item with its predecessor. Nothing here sorts or regroups.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CatalogError;

/// A single product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Grouping key
    pub category: String,
    /// Unique within the catalog; identifies the row
    pub name: String,
    /// Opaque display value, never parsed
    pub price: String,
    /// Whether the product is available
    pub stocked: bool,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        stocked: bool,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price: price.into(),
            stocked,
        }
    }
}

/// An ordered, validated sequence of catalog items.
///
/// Read-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Validate items and build a catalog, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty category or name, or for a name that
    /// appears more than once.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            if item.category.is_empty() {
                return Err(CatalogError::EmptyCategory { index });
            }
            if item.name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name.clone(),
                });
            }
        }

        let catalog = Self { items };
        let runs = catalog.category_runs();
        let distinct = catalog.distinct_categories();
        if runs != distinct {
            // Accepted: the table will show a repeated category header.
            debug!(runs, distinct, "Catalog categories are not contiguous");
        }
        Ok(catalog)
    }

    /// Parse a JSON array of items and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::from_items(items)
    }

    /// Read a JSON catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            items: vec![
                CatalogItem::new("Fruits", "Apple", "$1", true),
                CatalogItem::new("Fruits", "Dragonfruit", "$1", true),
                CatalogItem::new("Fruits", "Passionfruit", "$2", false),
                CatalogItem::new("Vegetables", "Spinach", "$2", true),
                CatalogItem::new("Vegetables", "Pumpkin", "$4", false),
                CatalogItem::new("Vegetables", "Peas", "$1", true),
            ],
        }
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of maximal runs of adjacent items sharing a category.
    fn category_runs(&self) -> usize {
        let mut runs = 0;
        let mut last: Option<&str> = None;
        for item in &self.items {
            if last != Some(item.category.as_str()) {
                runs += 1;
                last = Some(item.category.as_str());
            }
        }
        runs
    }

    fn distinct_categories(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}
