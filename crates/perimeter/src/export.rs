//! Rendering of placement sets.
//!
//! The engine only produces percentages; an exporter maps each placement to
//! `(x vw, y vh)` on a concrete viewport.

pub mod svg;

use std::io;

use thiserror::Error;

/// Errors raised while exporting a placement set.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Pixel dimensions of the viewport a placement set is rendered onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Converts a horizontal percentage to pixels.
    pub fn x_to_px(self, percent: f32) -> f32 {
        self.width * percent / 100.0
    }

    /// Converts a vertical percentage to pixels.
    pub fn y_to_px(self, percent: f32) -> f32 {
        self.height * percent / 100.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 900.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_percent_to_px() {
        let viewport = Viewport::new(1280.0, 800.0);
        assert_approx_eq!(f32, viewport.x_to_px(50.0), 640.0);
        assert_approx_eq!(f32, viewport.y_to_px(25.0), 200.0);
        assert_approx_eq!(f32, viewport.x_to_px(0.0), 0.0);
    }
}
