//! Color theme constants for the mosaiq UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (key hints, counters)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Upload button face
pub const COLOR_BUTTON: Color = Color::Rgb(0, 122, 204);

/// Upload button face while hovered
pub const COLOR_BUTTON_HOVER: Color = Color::Rgb(40, 160, 240);
