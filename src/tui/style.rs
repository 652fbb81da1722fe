//! Color constants for the TUI.

use ratatui::style::Color;

/// Consumption bar color.
pub const CONSUMPTION_COLOR: Color = Color::Cyan;
/// Savings bar color.
pub const SAVINGS_COLOR: Color = Color::Green;
/// Focused form field.
pub const SELECTED_FG: Color = Color::Yellow;
/// Metric value color.
pub const METRIC_FG: Color = Color::White;
/// Error text color.
pub const ERROR_FG: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Converts a kWh value into a bar height; the widget only takes integers.
pub fn bar_height(kwh: f64) -> u64 {
    if kwh.is_finite() && kwh > 0.0 {
        kwh.round() as u64
    } else {
        0
    }
}
