//! Color theme constants
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Border color for unfocused controls and the table
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color for the focused control
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Regular text
pub const COLOR_TEXT: Color = Color::White;

/// Dim text: placeholders, column headings, hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Category header rows
pub const COLOR_CATEGORY: Color = Color::Cyan;

/// Alert color for names of out-of-stock products
pub const COLOR_OUT_OF_STOCK: Color = Color::Red;
