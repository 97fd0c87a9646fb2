//! Color constants for the dashboard UI.
//!
//! Minimal dark palette shared by every screen.

use ratatui::style::Color;

/// Border color for panels.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Headers and the active tab.
pub const COLOR_HEADER: Color = Color::White;

/// Highlight for the selected row.
pub const COLOR_ACCENT: Color = Color::LightCyan;

/// Secondary text (ids, hints, timestamps).
pub const COLOR_DIM: Color = Color::DarkGray;

/// Completed todos, success markers.
pub const COLOR_DONE: Color = Color::LightGreen;

/// Pending todos, warnings.
pub const COLOR_PENDING: Color = Color::LightYellow;

/// Error banner text.
pub const COLOR_ERROR: Color = Color::LightRed;

/// Chart bars.
pub const COLOR_CHART: Color = Color::LightBlue;
