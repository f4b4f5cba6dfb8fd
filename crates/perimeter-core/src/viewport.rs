//! Viewport classification.
//!
//! The viewport width in pixels is bucketed into a [`ViewportClass`], which
//! decides how far apart items must be and how large the central exclusion
//! zone is. Narrow screens get a wider zone and a larger separation.

use std::fmt;

use log::trace;
use serde::Deserialize;

use crate::geometry::ExclusionZone;

/// Widths below this are [`ViewportClass::Narrow`].
pub const NARROW_MAX_WIDTH: f32 = 640.0;

/// Widths below this (and not narrow) are [`ViewportClass::Medium`].
pub const MEDIUM_MAX_WIDTH: f32 = 1024.0;

/// Size bucket of the viewport the placements are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    /// Classifies a known viewport width in pixels.
    pub fn from_width(width_px: f32) -> Self {
        if width_px < NARROW_MAX_WIDTH {
            Self::Narrow
        } else if width_px < MEDIUM_MAX_WIDTH {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// Classifies an optional viewport width.
    ///
    /// Returns `None` when the width is unavailable, negative or not finite,
    /// leaving the fallback choice to the caller.
    pub fn classify(width_px: Option<f32>) -> Option<Self> {
        let class = width_px
            .filter(|width| width.is_finite() && *width >= 0.0)
            .map(Self::from_width);
        trace!(width_px:?, class:?; "Classified viewport");
        class
    }

    /// Minimum separation between two placements, in percent.
    pub fn min_distance(self) -> f32 {
        match self {
            Self::Narrow => 14.0,
            Self::Medium => 10.0,
            Self::Wide => 8.0,
        }
    }

    /// Central rectangle kept free of placements.
    pub fn exclusion_zone(self) -> ExclusionZone {
        match self {
            Self::Narrow => ExclusionZone::new(10.0, 90.0, 25.0, 75.0),
            Self::Medium => ExclusionZone::new(20.0, 80.0, 25.0, 75.0),
            Self::Wide => ExclusionZone::new(25.0, 75.0, 20.0, 70.0),
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Wide => "wide",
        };
        f.write_str(name)
    }
}
