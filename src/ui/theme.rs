// ChromaLog - ui/theme.rs
//
// Colour tables for the two fixed palettes, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Category;
use egui::Color32;

/// Foreground colour for a category under the active palette.
///
/// A pure function of (category, dark_mode): a fixed lookup table, nothing
/// derived or stateful. The Information colour doubles as the default text
/// colour for plain (uncategorised) insertions.
pub fn category_colour(category: Category, dark_mode: bool) -> Color32 {
    if dark_mode {
        match category {
            Category::FromTerminal => Color32::from_rgb(0, 255, 127), // Spring green
            Category::ToTerminal => Color32::from_rgb(30, 144, 255),  // Dodger blue
            Category::Debug => Color32::from_rgb(128, 128, 128),      // Grey
            Category::Information => Color32::from_rgb(245, 245, 245), // White smoke
            Category::Warning => Color32::from_rgb(255, 165, 0),      // Orange
            Category::Error => Color32::from_rgb(255, 0, 0),          // Red
        }
    } else {
        match category {
            Category::FromTerminal => Color32::from_rgb(0, 128, 0), // Green
            Category::ToTerminal => Color32::from_rgb(0, 0, 255),   // Blue
            Category::Debug => Color32::from_rgb(105, 105, 105),    // Dim grey
            Category::Information => Color32::BLACK,
            Category::Warning => Color32::from_rgb(255, 140, 0), // Dark orange
            Category::Error => Color32::from_rgb(139, 0, 0),     // Dark red
        }
    }
}

/// Console background for the active palette.
pub fn console_background(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(24, 24, 24)
    } else {
        Color32::WHITE
    }
}

/// Default foreground for plain insertions: the Information colour.
pub fn default_text_colour(dark_mode: bool) -> Color32 {
    category_colour(Category::Information, dark_mode)
}

/// Layout constants.
pub const BANNER_HEIGHT: f32 = 56.0;
pub const CONSOLE_MARGIN: i8 = 6;
