//! To maintain a theme of colors, I will add colors here as constants so
//! the UI does not look bad at any point.
//!
//! - TABULA_TEAL: Main Color
//! - TABULA_AMBER: Warnings and refused operations

use colored::Color;

pub(crate) const TABULA_TEAL: Color = Color::TrueColor {
    r: 76,
    g: 228,
    b: 179,
};

pub(crate) const TABULA_AMBER: Color = Color::TrueColor {
    r: 255,
    g: 183,
    b: 77,
};
