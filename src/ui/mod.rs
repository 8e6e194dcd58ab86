//! UI rendering for the product table screen.
//!
//! ```text
//! ┌ Search ───────────────────────────┐
//! │ pea█                              │
//! └───────────────────────────────────┘
//!  [ ] Only show products in stock
//! ┌───────────────────────────────────┐
//! │ Name                 Price        │
//! │ Vegetables                        │
//! │ Peas                 $1           │
//! └───────────────────────────────────┘
//!  Tab focus · Ctrl+S in stock · Esc clear/quit      1 of 6 products
//! ```
//!
//! Every function here is a pure mapping from the app's current values and
//! rows to widgets. Styling decisions for items are already made in the rows.

mod footer;
mod product_table;
mod search_bar;
mod theme;

pub use product_table::{column_widths, render_product_table, table_rows};
pub use search_bar::{render_search_bar, SearchBarProps, SEARCH_BAR_HEIGHT};
pub use theme::{
    COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_CATEGORY, COLOR_DIM, COLOR_OUT_OF_STOCK, COLOR_TEXT,
};

use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::app::App;
use crate::error::{ShelfResult, UiError};

/// Draw one frame and clear the app's redraw flag.
///
/// The flag is cleared even when drawing fails, so a failing terminal is
/// retried on the next change instead of in a tight loop.
///
/// # Errors
///
/// Returns `UiError::RenderFailed` if the backend fails.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> ShelfResult<()> {
    app.needs_redraw = false;
    terminal
        .draw(|f| render(f, app))
        .map_err(|err| UiError::RenderFailed {
            message: err.to_string(),
        })?;
    Ok(())
}

/// Render the whole screen from the app's current state.
pub fn render(frame: &mut Frame, app: &App) {
    let [search_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let props = SearchBarProps {
        filter_text: app.filter().filter_text(),
        in_stock_only: app.filter().in_stock_only(),
        focus: app.focus,
    };
    render_search_bar(frame, search_area, &props);
    render_product_table(frame, table_area, app.rows(), app.scroll_offset);
    footer::render_footer(frame, footer_area, &app.summary());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use crate::state::FilterCriteria;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_full_catalog() {
        let app = App::new(Catalog::sample());
        let text = screen_text(&app, 60, 20);
        assert!(text.contains("Search..."));
        assert!(text.contains("Only show products in stock"));
        assert!(text.contains("Fruits"));
        assert!(text.contains("Passionfruit"));
        assert!(text.contains("6 of 6 products"));
    }

    #[test]
    fn test_render_filtered() {
        let app = App::with_filter(Catalog::sample(), FilterCriteria::new("pea", true));
        let text = screen_text(&app, 60, 20);
        assert!(text.contains("pea"));
        assert!(text.contains("[x]"));
        assert!(text.contains("Peas"));
        assert!(!text.contains("Fruits"));
        assert!(text.contains("1 of 6 products"));
    }

    #[test]
    fn test_draw_frame_clears_redraw_flag() {
        let mut app = App::new(Catalog::sample());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        assert!(app.needs_redraw);

        draw_frame(&mut terminal, &mut app).unwrap();

        assert!(!app.needs_redraw);
        let buffer = terminal.backend().buffer();
        let first_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert!(first_row.contains("Search"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let app = App::new(Catalog::sample());
        let _ = screen_text(&app, 10, 4);
    }
}
