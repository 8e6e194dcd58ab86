//! Display rows produced by the view-model builder.

use serde::Serialize;

use crate::models::CatalogItem;

/// One renderable unit of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRow {
    /// Heading placed before the first visible item of a category.
    Category { category: String },

    /// A visible item.
    Item {
        item: CatalogItem,
        /// Draw the name in the alert style; true when the item is out of stock
        emphasis: bool,
    },
}

impl DisplayRow {
    pub fn category(category: impl Into<String>) -> Self {
        DisplayRow::Category {
            category: category.into(),
        }
    }

    /// Item row with emphasis derived from stock availability.
    pub fn item(item: CatalogItem) -> Self {
        let emphasis = !item.stocked;
        DisplayRow::Item { item, emphasis }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, DisplayRow::Category { .. })
    }

    /// Row identity: the category label for headers, the item name otherwise.
    pub fn key(&self) -> &str {
        match self {
            DisplayRow::Category { category } => category,
            DisplayRow::Item { item, .. } => &item.name,
        }
    }
}
