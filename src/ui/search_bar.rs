//! Search bar: the text field and the in-stock checkbox.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::theme::{COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_TEXT};
use crate::app::Focus;

/// Rows used by the search bar: bordered field (3) + checkbox line (1)
pub const SEARCH_BAR_HEIGHT: u16 = 4;

const PLACEHOLDER: &str = "Search...";
const CHECKBOX_LABEL: &str = "Only show products in stock";
const CURSOR: char = '\u{2588}';

/// Values the search bar displays.
#[derive(Debug, Clone)]
pub struct SearchBarProps<'a> {
    pub filter_text: &'a str,
    pub in_stock_only: bool,
    pub focus: Focus,
}

/// Render the search field and checkbox into `area`.
pub fn render_search_bar(frame: &mut Frame, area: Rect, props: &SearchBarProps) {
    let field_area = Rect {
        height: area.height.min(3),
        ..area
    };
    render_search_field(frame, field_area, props);

    if area.height > 3 {
        let checkbox_area = Rect {
            x: area.x + 1,
            y: area.y + 3,
            width: area.width.saturating_sub(1),
            height: 1,
        };
        frame.render_widget(Paragraph::new(checkbox_line(props)), checkbox_area);
    }
}

fn render_search_field(frame: &mut Frame, area: Rect, props: &SearchBarProps) {
    let focused = props.focus == Focus::Search;
    let border_color = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    // Inner width minus one cell for the cursor
    let room = area.width.saturating_sub(3) as usize;

    let mut spans = Vec::new();
    if props.filter_text.is_empty() {
        if focused {
            spans.push(Span::styled(CURSOR.to_string(), Style::default().fg(COLOR_TEXT)));
        }
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM)));
    } else {
        spans.push(Span::styled(
            visible_tail(props.filter_text, room),
            Style::default().fg(COLOR_TEXT),
        ));
        if focused {
            spans.push(Span::styled(CURSOR.to_string(), Style::default().fg(COLOR_TEXT)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn checkbox_line<'a>(props: &SearchBarProps) -> Line<'a> {
    let mark = if props.in_stock_only { "[x]" } else { "[ ]" };
    let style = if props.focus == Focus::StockToggle {
        Style::default()
            .fg(COLOR_BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };

    Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(CHECKBOX_LABEL, style),
    ])
}

/// The longest suffix of `text` that fits in `max_width` terminal cells.
///
/// Keeps the end of a long query visible, where typing happens.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}
