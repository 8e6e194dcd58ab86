//! Line-based table output.
//!
//! ```text
//! Name           Price
//! ────────────────────
//! Fruits
//!   Apple        $1
//! * Passionfruit $2
//! ────────────────────
//! 3 of 6 products (* out of stock)
//! ```

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::view_model::{DisplayRow, ViewSummary};

/// Gap between the name and price columns.
const COLUMN_GAP: usize = 1;

/// Prefix for item names; emphasized items are marked.
const ITEM_INDENT: &str = "  ";
const EMPHASIS_MARK: &str = "* ";

/// Render rows as a plain-text table.
pub fn render_table(rows: &[DisplayRow], summary: &ViewSummary) -> String {
    let name_width = rows
        .iter()
        .map(|row| match row {
            DisplayRow::Category { category } => category.width(),
            DisplayRow::Item { item, .. } => ITEM_INDENT.len() + item.name.width(),
        })
        .chain(std::iter::once("Name".len()))
        .max()
        .unwrap_or(0);
    let price_width = rows
        .iter()
        .filter_map(|row| match row {
            DisplayRow::Item { item, .. } => Some(item.price.width()),
            DisplayRow::Category { .. } => None,
        })
        .chain(std::iter::once("Price".len()))
        .max()
        .unwrap_or(0);
    let rule = "─".repeat(name_width + COLUMN_GAP + price_width);

    let mut out = String::new();
    out.push_str(&pad_row("Name", "Price", name_width));
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        match row {
            DisplayRow::Category { category } => {
                out.push_str(category);
                out.push('\n');
            }
            DisplayRow::Item { item, emphasis } => {
                let prefix = if *emphasis { EMPHASIS_MARK } else { ITEM_INDENT };
                let name = format!("{}{}", prefix, item.name);
                out.push_str(&pad_row(&name, &item.price, name_width));
            }
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&summary.label());
    if rows
        .iter()
        .any(|row| matches!(row, DisplayRow::Item { emphasis: true, .. }))
    {
        out.push_str(" (* out of stock)");
    }
    out.push('\n');
    out
}

/// Write the plain-text table.
pub fn write_table<W: Write>(
    writer: &mut W,
    rows: &[DisplayRow],
    summary: &ViewSummary,
) -> io::Result<()> {
    writer.write_all(render_table(rows, summary).as_bytes())
}

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: &mut W, rows: &[DisplayRow]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows)?;
    writeln!(writer)
}

fn pad_row(name: &str, price: &str, name_width: usize) -> String {
    let padding = name_width.saturating_sub(name.width()) + COLUMN_GAP;
    format!("{}{}{}\n", name, " ".repeat(padding), price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;

    fn sample_rows() -> Vec<DisplayRow> {
        vec![
            DisplayRow::category("Fruits"),
            DisplayRow::item(CatalogItem::new("Fruits", "Apple", "$1", true)),
            DisplayRow::item(CatalogItem::new("Fruits", "Passionfruit", "$2", false)),
        ]
    }

    #[test]
    fn test_render_table_layout() {
        let rows = sample_rows();
        let summary = ViewSummary::from_rows(&rows, 6);
        let text = render_table(&rows, &summary);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name           Price");
        assert_eq!(lines[2], "Fruits");
        assert_eq!(lines[3], "  Apple        $1");
        assert_eq!(lines[4], "* Passionfruit $2");
        assert_eq!(lines[6], "2 of 6 products (* out of stock)");
    }

    #[test]
    fn test_render_empty_table() {
        let summary = ViewSummary::from_rows(&[], 6);
        let text = render_table(&[], &summary);
        assert_eq!(text, "Name Price\n──────────\n──────────\n0 of 6 products\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_rows()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["kind"], "category");
        assert_eq!(value[2]["emphasis"], true);
    }
}
