//! Behavioral tests for the view-model builder.
//!
//! Covers the four reference scenarios and the properties every build must
//! satisfy: purity, case-insensitivity, monotonicity of the stock filter,
//! and the category header rule.

mod common;

use common::{fixture_catalog, four_item_catalog, row_keys, with_peas};
use shelf::models::CatalogItem;
use shelf::state::FilterCriteria;
use shelf::view_model::{build, DisplayRow};

fn item_count(rows: &[DisplayRow]) -> usize {
    rows.iter().filter(|row| !row.is_category()).count()
}

/// Every header is followed by an item of the same category.
fn assert_headers_are_non_empty(rows: &[DisplayRow]) {
    for (i, row) in rows.iter().enumerate() {
        if let DisplayRow::Category { category } = row {
            match rows.get(i + 1) {
                Some(DisplayRow::Item { item, .. }) => assert_eq!(&item.category, category),
                other => panic!("header {:?} followed by {:?}", category, other),
            }
        }
    }
}

/// Every item sits under a header for its own category.
fn assert_items_are_under_their_header(rows: &[DisplayRow]) {
    let mut current: Option<&str> = None;
    for row in rows {
        match row {
            DisplayRow::Category { category } => current = Some(category),
            DisplayRow::Item { item, .. } => {
                assert_eq!(current, Some(item.category.as_str()), "{}", item.name)
            }
        }
    }
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_scenario_no_filter() {
    let rows = build(&four_item_catalog(), &FilterCriteria::new("", false));
    assert_eq!(
        row_keys(&rows),
        vec!["# Fruits", "Apple", "Dragonfruit", "Passionfruit", "# Vegetables", "Spinach"]
    );
}

#[test]
fn test_scenario_in_stock_only() {
    let rows = build(&four_item_catalog(), &FilterCriteria::new("", true));
    assert_eq!(
        row_keys(&rows),
        vec!["# Fruits", "Apple", "Dragonfruit", "# Vegetables", "Spinach"]
    );
}

#[test]
fn test_scenario_text_filter_pea() {
    let rows = build(&with_peas(), &FilterCriteria::new("pea", false));
    assert_eq!(row_keys(&rows), vec!["# Vegetables", "Peas"]);
}

#[test]
fn test_scenario_no_match() {
    let rows = build(&four_item_catalog(), &FilterCriteria::new("xyz", false));
    assert!(rows.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn criteria_grid() -> Vec<FilterCriteria> {
    let texts = ["", "a", "P", "apple", "BUTTER", "fruit", "e", "zzz", " "];
    texts
        .iter()
        .flat_map(|text| {
            [false, true]
                .into_iter()
                .map(move |flag| FilterCriteria::new(*text, flag))
        })
        .collect()
}

#[test]
fn test_build_is_pure() {
    let catalog = fixture_catalog();
    for criteria in criteria_grid() {
        assert_eq!(
            build(catalog.items(), &criteria),
            build(catalog.items(), &criteria)
        );
    }
}

#[test]
fn test_case_insensitive_matching() {
    let catalog = fixture_catalog();
    for text in ["apple", "Apple", "APPLE", "aPpLe"] {
        assert_eq!(
            build(catalog.items(), &FilterCriteria::new(text, false)),
            build(catalog.items(), &FilterCriteria::new("apple", false)),
        );
    }
}

#[test]
fn test_stock_filter_never_adds_items() {
    let catalog = fixture_catalog();
    for criteria in criteria_grid() {
        let all = build(catalog.items(), &FilterCriteria::new(criteria.filter_text.clone(), false));
        let stocked = build(catalog.items(), &FilterCriteria::new(criteria.filter_text.clone(), true));
        assert!(item_count(&stocked) <= item_count(&all), "{:?}", criteria);
    }
}

#[test]
fn test_header_rule_holds_for_all_criteria() {
    let catalog = fixture_catalog();
    for criteria in criteria_grid() {
        let rows = build(catalog.items(), &criteria);
        assert_headers_are_non_empty(&rows);
        assert_items_are_under_their_header(&rows);
    }
}

#[test]
fn test_every_surviving_item_matches_both_criteria() {
    let catalog = fixture_catalog();
    for criteria in criteria_grid() {
        let needle = criteria.filter_text.to_lowercase();
        for row in build(catalog.items(), &criteria) {
            if let DisplayRow::Item { item, emphasis } = row {
                assert!(item.name.to_lowercase().contains(&needle));
                assert!(!criteria.in_stock_only || item.stocked);
                assert_eq!(emphasis, !item.stocked);
            }
        }
    }
}

#[test]
fn test_items_keep_catalog_order() {
    let catalog = fixture_catalog();
    let rows = build(catalog.items(), &FilterCriteria::new("b", false));
    let names: Vec<&str> = rows
        .iter()
        .filter_map(|row| match row {
            DisplayRow::Item { item, .. } => Some(item.name.as_str()),
            DisplayRow::Category { .. } => None,
        })
        .collect();
    assert_eq!(names, vec!["Bagel", "Baguette", "Butter", "Buttermilk"]);
}

#[test]
fn test_category_with_only_unstocked_items_disappears() {
    let catalog = fixture_catalog();
    let rows = build(catalog.items(), &FilterCriteria::new("pineapple", true));
    assert!(rows.is_empty());

    let rows = build(catalog.items(), &FilterCriteria::new("p", true));
    assert_eq!(
        row_keys(&rows),
        vec!["# Fruits", "Apple", "# Vegetables", "Peas"]
    );
}

#[test]
fn test_repeated_category_gets_second_header() {
    let items = vec![
        CatalogItem::new("Fruits", "Apple", "$1", true),
        CatalogItem::new("Dairy", "Milk", "$2", true),
        CatalogItem::new("Fruits", "Kiwi", "$1", true),
    ];
    let rows = build(&items, &FilterCriteria::default());
    let headers: Vec<&str> = rows
        .iter()
        .filter(|row| row.is_category())
        .map(|row| row.key())
        .collect();
    assert_eq!(headers, vec!["Fruits", "Dairy", "Fruits"]);
}
