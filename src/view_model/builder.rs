//! Filtering and grouping pass over the catalog.

use crate::models::CatalogItem;
use crate::state::FilterCriteria;

use super::rows::DisplayRow;

/// Build the display rows for `catalog` under `criteria`.
///
/// Items are visited once, in catalog order. An item is skipped when its
/// name does not contain the filter text (case-insensitive) or when
/// in-stock-only is set and the item is not stocked. A skipped item emits
/// nothing, so a category header appears only right before the first
/// surviving item of that category. Headers are emitted whenever the
/// category differs from the previous surviving item's category; a category
/// that reappears later in the catalog gets a second header.
pub fn build(catalog: &[CatalogItem], criteria: &FilterCriteria) -> Vec<DisplayRow> {
    let needle = criteria.filter_text.to_lowercase();
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for item in catalog {
        let name_matches = item.name.to_lowercase().contains(&needle);
        let stock_ok = !criteria.in_stock_only || item.stocked;
        if !name_matches || !stock_ok {
            continue;
        }

        if last_category != Some(item.category.as_str()) {
            rows.push(DisplayRow::category(item.category.as_str()));
            last_category = Some(item.category.as_str());
        }
        rows.push(DisplayRow::item(item.clone()));
    }

    rows
}
