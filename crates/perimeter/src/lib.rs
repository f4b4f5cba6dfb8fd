//! Perimeter - decorative item placement around a viewport edge.
//!
//! Scatters a set of decorative items (logos, badges, icons) along the four
//! edges of a viewport by bounded rejection sampling. Items stay out of a
//! central exclusion zone and keep a minimum distance from each other; an
//! item that cannot be placed within its retry budget is left out.

pub mod config;
pub mod export;
pub mod random;

mod engine;
mod error;
mod placement;
mod policy;

pub use perimeter_core::{catalog, color, geometry, item, viewport};

pub use engine::{Engine, place_items};
pub use error::PerimeterError;
pub use placement::{Placement, PlacementSet};
pub use policy::{AnimationRange, FALLBACK_MIN_DISTANCE, MAX_ATTEMPTS_PER_ITEM, PlacementPolicy};

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::{Viewport, svg::SvgExporter};
use item::Item;
use random::RandomSource;

/// Builder for placing and rendering decorative items.
///
/// # Examples
///
/// ```rust
/// use perimeter::{PlacementBuilder, config::AppConfig, export::Viewport};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let builder = PlacementBuilder::new(AppConfig::default());
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let placements = builder
///     .place(Some(1280.0), &mut rng)
///     .expect("default configuration is valid");
///
/// let svg = builder
///     .render_svg(&placements, Viewport::new(1280.0, 800.0))
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct PlacementBuilder {
    config: AppConfig,
}

impl PlacementBuilder {
    /// Create a new placement builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The items that will be placed, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::Config`] if a configured item color is invalid.
    pub fn items(&self) -> Result<Vec<Item>, PerimeterError> {
        self.config.items()
    }

    /// Place the configured items for a viewport width in pixels.
    ///
    /// Each call is an independent trial; its result replaces any earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError`] only for invalid configuration. Items that
    /// cannot be placed are dropped, not reported as errors.
    pub fn place<R>(
        &self,
        viewport_width_px: Option<f32>,
        rng: &mut R,
    ) -> Result<PlacementSet, PerimeterError>
    where
        R: RandomSource + ?Sized,
    {
        let items = self.items()?;
        let policy = self.config.policy_for(viewport_width_px)?;
        info!(
            items_count = items.len(),
            viewport_width_px:?;
            "Placing items"
        );
        trace!(policy:?; "Resolved placement policy");

        let placements = Engine::new(policy).place(items.len(), rng);
        debug!(placed = placements.len(), dropped = placements.dropped(); "Items placed");

        Ok(placements)
    }

    /// Render a placement set to an SVG string.
    ///
    /// The exclusion zone outline, when enabled in the style configuration,
    /// is the zone the placements were kept out of.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError`] for invalid configuration or rendering errors.
    pub fn render_svg(
        &self,
        placements: &PlacementSet,
        viewport: Viewport,
    ) -> Result<String, PerimeterError> {
        let items = self.items()?;
        let svg = self
            .exporter(placements, viewport)?
            .render_to_string(placements, &items);
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a placement set and write the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError`] for invalid configuration or if the file
    /// cannot be written.
    pub fn write_svg(
        &self,
        placements: &PlacementSet,
        viewport: Viewport,
        path: impl AsRef<Path>,
    ) -> Result<(), PerimeterError> {
        let items = self.items()?;
        self.exporter(placements, viewport)?
            .write_to(path, placements, &items)?;
        Ok(())
    }

    fn exporter(
        &self,
        placements: &PlacementSet,
        viewport: Viewport,
    ) -> Result<SvgExporter, PerimeterError> {
        let style = self.config.style();
        let mut exporter = SvgExporter::new(viewport).with_style(style)?;
        if style.show_exclusion_zone() {
            exporter = exporter.with_exclusion_zone(placements.exclusion_zone());
        }
        Ok(exporter)
    }
}
