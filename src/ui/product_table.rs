//! Product table: category headings and item rows.
//!
//! Columns sit flush (no spacing) so a category heading can continue from
//! the name cell straight into the price cell and read as one label across
//! the whole row. Item prices carry their own leading gap.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::theme::{COLOR_BORDER, COLOR_CATEGORY, COLOR_DIM, COLOR_OUT_OF_STOCK, COLOR_TEXT};
use crate::view_model::DisplayRow;

/// Price column width, including its one-cell gap from the name column
const PRICE_COLUMN_WIDTH: u16 = 10;

/// Column widths for a table `inner_width` cells wide: (name, price).
///
/// The two always add up to `inner_width`.
pub fn column_widths(inner_width: u16) -> (u16, u16) {
    let price = PRICE_COLUMN_WIDTH.min(inner_width);
    (inner_width - price, price)
}

/// Map display rows to table rows.
///
/// A category row spans both columns: the label fills the name cell and
/// whatever does not fit continues in the price cell.
pub fn table_rows(rows: &[DisplayRow], name_width: u16) -> Vec<Row<'_>> {
    rows.iter()
        .map(|row| match row {
            DisplayRow::Category { category } => {
                let (head, tail) = split_at_width(category, name_width as usize);
                Row::new(vec![Cell::from(head), Cell::from(tail)]).style(
                    Style::default()
                        .fg(COLOR_CATEGORY)
                        .add_modifier(Modifier::BOLD),
                )
            }
            DisplayRow::Item { item, emphasis } => {
                let name_style = if *emphasis {
                    Style::default().fg(COLOR_OUT_OF_STOCK)
                } else {
                    Style::default().fg(COLOR_TEXT)
                };
                Row::new(vec![
                    Cell::from(item.name.as_str()).style(name_style),
                    Cell::from(format!(" {}", item.price)).style(Style::default().fg(COLOR_TEXT)),
                ])
            }
        })
        .collect()
}

/// Render the table, starting at row `offset`.
pub fn render_product_table(frame: &mut Frame, area: Rect, rows: &[DisplayRow], offset: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    if rows.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No products match",
            Style::default().fg(COLOR_DIM),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let (name_width, price_width) = column_widths(block.inner(area).width);

    let header = Row::new(vec!["Name", " Price"]).style(
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        table_rows(rows, name_width),
        [Constraint::Length(name_width), Constraint::Length(price_width)],
    )
    .column_spacing(0)
    .header(header)
    .block(block);

    let mut state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, area, &mut state);
}

/// Split `text` so the first part fits in `width` terminal cells.
///
/// A wide character that would straddle the boundary goes to the second part.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return text.split_at(idx);
        }
    }
    (text, "")
}
