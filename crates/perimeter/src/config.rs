//! Configuration types for perimeter placement and preview rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining placement, style and items.
//! - [`PlacementConfig`] - Overrides applied on top of the viewport-derived policy.
//! - [`StyleConfig`] - Options for the SVG preview.
//! - [`ItemConfig`] - A user-defined decorative item.
//!
//! # Example
//!
//! ```
//! # use perimeter::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.items().unwrap().len(), 13);
//! assert!(config.policy_for(Some(1280.0)).is_ok());
//! ```

use serde::Deserialize;

use perimeter_core::{catalog, color::Color, item::Item, viewport::ViewportClass};

use crate::{
    error::PerimeterError,
    policy::{AnimationRange, MAX_ATTEMPTS_PER_ITEM, PlacementPolicy},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Placement overrides.
    #[serde(default)]
    placement: PlacementConfig,

    /// Preview styling.
    #[serde(default)]
    style: StyleConfig,

    /// Items to place. Empty means the built-in catalog.
    #[serde(default)]
    items: Vec<ItemConfig>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(placement: PlacementConfig, style: StyleConfig, items: Vec<ItemConfig>) -> Self {
        Self {
            placement,
            style,
            items,
        }
    }

    pub fn placement(&self) -> &PlacementConfig {
        &self.placement
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Resolves the placement policy for a viewport width.
    ///
    /// The width picks the separation and exclusion zone. When the width is
    /// unavailable and a `fallback_class` is configured, that class is used
    /// instead of the built-in fallback. Explicit overrides apply last.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::InvalidPolicy`] if an override is out of range.
    pub fn policy_for(&self, viewport_width_px: Option<f32>) -> Result<PlacementPolicy, PerimeterError> {
        let placement = &self.placement;

        let mut policy = match (
            ViewportClass::classify(viewport_width_px),
            placement.fallback_class,
        ) {
            (None, Some(class)) => PlacementPolicy::for_class(class),
            _ => PlacementPolicy::for_viewport(viewport_width_px),
        };

        if let Some(min_distance) = placement.min_distance {
            policy = policy.with_min_distance(min_distance)?;
        }

        policy
            .with_max_attempts(placement.max_attempts)?
            .with_animation(placement.delay, placement.duration)
    }

    /// Returns the configured items, or the built-in catalog if none are set.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::Config`] if an item color cannot be parsed.
    pub fn items(&self) -> Result<Vec<Item>, PerimeterError> {
        if self.items.is_empty() {
            return Ok(catalog::default_items());
        }

        self.items
            .iter()
            .map(|item| -> Result<Item, PerimeterError> {
                let color = Color::new(&item.color)?;
                Ok(Item::new(item.name.clone(), color))
            })
            .collect()
    }
}

/// Overrides for the placement policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementConfig {
    /// Candidates generated per item before it is dropped.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Minimum separation replacing the viewport-derived one.
    #[serde(default)]
    min_distance: Option<f32>,

    /// Class used when the viewport width is unavailable.
    #[serde(default)]
    fallback_class: Option<ViewportClass>,

    /// Entrance delay range in seconds.
    #[serde(default = "default_delay")]
    delay: AnimationRange,

    /// Floating animation period range in seconds.
    #[serde(default = "default_duration")]
    duration: AnimationRange,
}

impl PlacementConfig {
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn min_distance(&self) -> Option<f32> {
        self.min_distance
    }

    pub fn fallback_class(&self) -> Option<ViewportClass> {
        self.fallback_class
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            min_distance: None,
            fallback_class: None,
            delay: default_delay(),
            duration: default_duration(),
        }
    }
}

fn default_max_attempts() -> usize {
    MAX_ATTEMPTS_PER_ITEM
}

fn default_delay() -> AnimationRange {
    AnimationRange::DEFAULT_DELAY
}

fn default_duration() -> AnimationRange {
    AnimationRange::DEFAULT_DURATION
}

/// Visual options for the SVG preview.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Draw the exclusion zone outline.
    #[serde(default)]
    show_exclusion_zone: bool,

    /// Radius of an item marker, in percent of the viewport width.
    #[serde(default = "default_icon_radius")]
    icon_radius: f32,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::Config`] if the color string is invalid.
    pub fn background_color(&self) -> Result<Option<Color>, PerimeterError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| PerimeterError::Config(format!("Invalid background color: {err}")))
    }

    pub fn show_exclusion_zone(&self) -> bool {
        self.show_exclusion_zone
    }

    pub fn icon_radius(&self) -> f32 {
        self.icon_radius
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            show_exclusion_zone: false,
            icon_radius: default_icon_radius(),
        }
    }
}

fn default_icon_radius() -> f32 {
    2.0
}

/// A decorative item declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    name: String,
    color: String,
}

impl ItemConfig {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}
