//! SVG preview of a placement set.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Circle, Group, Rectangle, Text},
};

use perimeter_core::{color::Color, geometry::ExclusionZone, item::Item};

use super::{Error, Viewport};
use crate::{config::StyleConfig, placement::PlacementSet};

/// Renders placements as circles with labels on a viewport-sized canvas.
pub struct SvgExporter {
    viewport: Viewport,
    background: Option<Color>,
    exclusion_zone: Option<ExclusionZone>,
    icon_radius: f32,
}

impl SvgExporter {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: None,
            exclusion_zone: None,
            icon_radius: 2.0,
        }
    }

    /// Applies background and marker size from the style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the background color is invalid.
    pub fn with_style(mut self, style: &StyleConfig) -> Result<Self, Error> {
        self.background = style
            .background_color()
            .map_err(|err| Error::Render(err.to_string()))?;
        self.icon_radius = style.icon_radius();
        Ok(self)
    }

    /// Outlines the exclusion zone in the preview.
    pub fn with_exclusion_zone(mut self, zone: ExclusionZone) -> Self {
        self.exclusion_zone = Some(zone);
        self
    }

    /// Builds the SVG document.
    ///
    /// `items` supplies names and colors; a placement whose index has no
    /// matching item is drawn with the default color and no label.
    pub fn render(&self, placements: &PlacementSet, items: &[Item]) -> Document {
        let (width, height) = (self.viewport.width(), self.viewport.height());
        let mut doc = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background),
            );
        }

        if let Some(zone) = self.exclusion_zone {
            doc = doc.add(self.render_exclusion_zone(zone));
        }

        let radius = self.viewport.x_to_px(self.icon_radius);
        for placement in placements {
            let item = items.get(placement.index());
            let color = item.map(Item::color).unwrap_or_default();
            let cx = self.viewport.x_to_px(placement.position().x());
            let cy = self.viewport.y_to_px(placement.position().y());

            let mut group = Group::new()
                .set("data-index", placement.index().to_string())
                .set("data-side", placement.side().to_string())
                .set("data-delay", placement.delay())
                .set("data-duration", placement.duration())
                .add(
                    Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", radius)
                        .set("fill", &color.with_alpha(0.2))
                        .set("stroke", &color),
                );

            if let Some(item) = item {
                group = group.add(
                    Text::new(item.name())
                        .set("x", cx)
                        .set("y", cy + radius * 1.8)
                        .set("text-anchor", "middle")
                        .set("font-family", "sans-serif")
                        .set("font-size", radius * 0.8)
                        .set("fill", &color),
                );
            }

            doc = doc.add(group);
        }

        debug!(placements = placements.len(); "SVG document rendered");
        doc
    }

    /// Renders the document into a string.
    pub fn render_to_string(&self, placements: &PlacementSet, items: &[Item]) -> String {
        self.render(placements, items).to_string()
    }

    /// Renders the document and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_to(
        &self,
        path: impl AsRef<Path>,
        placements: &PlacementSet,
        items: &[Item],
    ) -> Result<(), Error> {
        let path = path.as_ref();
        let file_name = path.display().to_string();
        let doc = self.render(placements, items);

        info!(file_name; "Creating SVG file");
        let mut file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(file, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }

    fn render_exclusion_zone(&self, zone: ExclusionZone) -> Rectangle {
        Rectangle::new()
            .set("x", self.viewport.x_to_px(zone.x_min()))
            .set("y", self.viewport.y_to_px(zone.y_min()))
            .set("width", self.viewport.x_to_px(zone.width()))
            .set("height", self.viewport.y_to_px(zone.height()))
            .set("fill", "none")
            .set("stroke", "gray")
            .set("stroke-dasharray", "6 4")
    }
}
