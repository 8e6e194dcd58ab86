//! Footer: key hints on the left, result count on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_DIM, COLOR_TEXT};
use crate::view_model::ViewSummary;

const KEY_HINTS: &str = " Tab focus · Ctrl+S in stock · Ctrl+R reset · Esc clear/quit";

pub fn render_footer(frame: &mut Frame, area: Rect, summary: &ViewSummary) {
    let label = summary.label();
    let [hints_area, count_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(label_width(&label)),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(KEY_HINTS, Style::default().fg(COLOR_DIM))),
        hints_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(label, Style::default().fg(COLOR_TEXT))),
        count_area,
    );
}

/// Cells reserved for the count label, plus one for a gap.
fn label_width(label: &str) -> u16 {
    u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(1)
}
