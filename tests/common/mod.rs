//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{fixture_catalog, TestAppBuilder};
//!
//! let app = TestAppBuilder::new().with_filter_text("pea").build();
//! ```

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use shelf::app::App;
use shelf::models::{Catalog, CatalogItem};
use shelf::state::FilterCriteria;
use shelf::view_model::DisplayRow;

/// The four-item catalog used by most scenarios.
pub fn four_item_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Fruits", "Apple", "$1", true),
        CatalogItem::new("Fruits", "Dragonfruit", "$1", true),
        CatalogItem::new("Fruits", "Passionfruit", "$2", false),
        CatalogItem::new("Vegetables", "Spinach", "$2", true),
    ]
}

/// The four-item catalog plus Peas.
pub fn with_peas() -> Vec<CatalogItem> {
    let mut items = four_item_catalog();
    items.push(CatalogItem::new("Vegetables", "Peas", "$1", true));
    items
}

/// A larger catalog with a mix of stock states and categories.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_items(vec![
        CatalogItem::new("Bakery", "Bagel", "$1", true),
        CatalogItem::new("Bakery", "Baguette", "$3", false),
        CatalogItem::new("Bakery", "Croissant", "$2", true),
        CatalogItem::new("Dairy", "Butter", "$4", true),
        CatalogItem::new("Dairy", "Buttermilk", "$3", false),
        CatalogItem::new("Dairy", "Cheddar", "$6", true),
        CatalogItem::new("Fruits", "Apple", "$1", true),
        CatalogItem::new("Fruits", "Pineapple", "$4", false),
        CatalogItem::new("Fruits", "Passionfruit", "$2", false),
        CatalogItem::new("Vegetables", "Peas", "$1", true),
        CatalogItem::new("Vegetables", "Pumpkin", "$4", false),
    ])
    .expect("fixture catalog is valid")
}

/// Rows flattened to strings: "# Category" for headers, the name for items.
pub fn row_keys(rows: &[DisplayRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match row {
            DisplayRow::Category { category } => format!("# {}", category),
            DisplayRow::Item { item, .. } => item.name.clone(),
        })
        .collect()
}

/// Builder for test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    catalog: Option<Catalog>,
    criteria: FilterCriteria,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_filter_text(mut self, text: &str) -> Self {
        self.criteria.filter_text = text.to_string();
        self
    }

    pub fn with_in_stock_only(mut self, flag: bool) -> Self {
        self.criteria.in_stock_only = flag;
        self
    }

    pub fn build(self) -> App {
        App::with_filter(self.catalog.unwrap_or_else(Catalog::sample), self.criteria)
    }
}

/// Send a plain key press.
pub fn press(app: &mut App, code: KeyCode) {
    app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

/// Send a key press with modifiers.
pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(Event::Key(KeyEvent::new(code, modifiers)));
}

/// Type each character of `text` as a separate key press.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw the app into a test backend and return the buffer.
pub fn draw(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test backend");
    terminal
        .draw(|f| shelf::ui::render(f, app))
        .expect("draw succeeds");
    terminal.backend().buffer().clone()
}

/// Buffer contents as one string per line.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
