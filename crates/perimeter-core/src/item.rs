//! Decorative items.
//!
//! The placement engine only cares about how many items there are and in
//! which order. The name and color travel alongside to the renderer.

use crate::color::Color;

/// A decorative item, such as a technology logo.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    color: Color,
}

impl Item {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// Display name of the item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accent color used when drawing the item.
    pub fn color(&self) -> Color {
        self.color
    }
}
