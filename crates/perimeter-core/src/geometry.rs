//! Geometric types for perimeter placement.
//!
//! All coordinates live in percentage space: `x` is a percentage of the
//! viewport width and `y` a percentage of the viewport height, both in
//! `[0, 100]`.

use std::{fmt, ops::Range};

/// Distance kept between a side band and the absolute viewport edge, in percent.
pub const SAFE_MARGIN: f32 = 5.0;

/// A point in percentage space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Creates a new position from viewport-relative percentages.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal percentage.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the vertical percentage.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}%, {:.2}%)", self.x, self.y)
    }
}

/// Central rectangle that no accepted position may fall into.
///
/// Bounds are inclusive: a position sitting exactly on an edge counts as
/// inside the zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

impl ExclusionZone {
    /// Creates a new exclusion zone from its four bounds.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn x_min(self) -> f32 {
        self.x_min
    }

    pub fn x_max(self) -> f32 {
        self.x_max
    }

    pub fn y_min(self) -> f32 {
        self.y_min
    }

    pub fn y_max(self) -> f32 {
        self.y_max
    }

    /// Width of the zone in percent.
    pub fn width(self) -> f32 {
        self.x_max - self.x_min
    }

    /// Height of the zone in percent.
    pub fn height(self) -> f32 {
        self.y_max - self.y_min
    }

    /// Returns true when all bounds are finite and not inverted.
    pub fn is_well_formed(self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|bound| bound.is_finite())
            && self.x_min <= self.x_max
            && self.y_min <= self.y_max
    }

    /// Returns true when the position lies inside the zone or on its edge.
    pub fn contains(self, position: Position) -> bool {
        position.x >= self.x_min
            && position.x <= self.x_max
            && position.y >= self.y_min
            && position.y <= self.y_max
    }
}

/// One of the four viewport edges a decorative item can be drawn near.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// All sides, in the order a unit draw selects them.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Selects a side from a uniform draw in `[0, 1)`.
    ///
    /// Values at or above `1.0` select the last side.
    pub fn from_unit(unit: f32) -> Self {
        let index = (unit.max(0.0) * Self::ALL.len() as f32) as usize;
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// The band candidates for this side are drawn from.
    pub fn band(self) -> SideBand {
        const FAR_EDGE: f32 = 90.0;

        match self {
            Side::Left => SideBand::new(SAFE_MARGIN..18.0, SAFE_MARGIN..FAR_EDGE),
            Side::Right => SideBand::new(82.0..100.0 - SAFE_MARGIN, SAFE_MARGIN..FAR_EDGE),
            Side::Top => SideBand::new(SAFE_MARGIN..FAR_EDGE, SAFE_MARGIN..15.0),
            Side::Bottom => SideBand::new(SAFE_MARGIN..FAR_EDGE, 85.0..100.0 - SAFE_MARGIN),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Rectangular strip along a viewport edge.
///
/// Sampling is half-open on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct SideBand {
    x: Range<f32>,
    y: Range<f32>,
}

impl SideBand {
    fn new(x: Range<f32>, y: Range<f32>) -> Self {
        Self { x, y }
    }

    /// Horizontal extent of the band.
    pub fn x_range(&self) -> Range<f32> {
        self.x.clone()
    }

    /// Vertical extent of the band.
    pub fn y_range(&self) -> Range<f32> {
        self.y.clone()
    }

    /// Maps two uniform draws in `[0, 1)` to a position inside the band.
    pub fn sample(&self, unit_x: f32, unit_y: f32) -> Position {
        Position::new(lerp(&self.x, unit_x), lerp(&self.y, unit_y))
    }

    /// Returns true when the position lies within the band.
    pub fn contains(&self, position: Position) -> bool {
        self.x.contains(&position.x()) && self.y.contains(&position.y())
    }
}

/// `min + u * span` rounds up to `end` in `f32` for the largest `u` below one.
fn lerp(range: &Range<f32>, unit: f32) -> f32 {
    (range.start + unit * (range.end - range.start)).min(range.end.next_down())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_approx_eq!(f32, a.distance_to(b), 5.0);
        assert_approx_eq!(f32, b.distance_to(a), 5.0);
        assert_approx_eq!(f32, a.distance_to(a), 0.0);
    }

    #[test]
    fn test_exclusion_zone_is_inclusive() {
        let zone = ExclusionZone::new(25.0, 75.0, 20.0, 70.0);
        assert!(zone.contains(Position::new(50.0, 50.0)));
        assert!(zone.contains(Position::new(25.0, 20.0)));
        assert!(zone.contains(Position::new(75.0, 70.0)));
        assert!(!zone.contains(Position::new(24.9, 50.0)));
        assert!(!zone.contains(Position::new(50.0, 70.1)));
    }

    #[test]
    fn test_exclusion_zone_well_formed() {
        assert!(ExclusionZone::new(10.0, 90.0, 25.0, 75.0).is_well_formed());
        assert!(ExclusionZone::new(50.0, 50.0, 50.0, 50.0).is_well_formed());
        assert!(!ExclusionZone::new(90.0, 10.0, 25.0, 75.0).is_well_formed());
        assert!(!ExclusionZone::new(10.0, f32::NAN, 25.0, 75.0).is_well_formed());
    }

    #[test]
    fn test_side_from_unit() {
        assert_eq!(Side::from_unit(0.0), Side::Left);
        assert_eq!(Side::from_unit(0.26), Side::Right);
        assert_eq!(Side::from_unit(0.5), Side::Top);
        assert_eq!(Side::from_unit(0.99), Side::Bottom);
        assert_eq!(Side::from_unit(1.0), Side::Bottom);
        assert_eq!(Side::from_unit(-3.0), Side::Left);
    }

    #[test]
    fn test_band_extents() {
        let left = Side::Left.band();
        assert_eq!(left.x_range(), 5.0..18.0);
        assert_eq!(left.y_range(), 5.0..90.0);

        let right = Side::Right.band();
        assert_eq!(right.x_range(), 82.0..95.0);

        let top = Side::Top.band();
        assert_eq!(top.y_range(), 5.0..15.0);

        let bottom = Side::Bottom.band();
        assert_eq!(bottom.x_range(), 5.0..90.0);
        assert_eq!(bottom.y_range(), 85.0..95.0);
    }

    #[test]
    fn test_band_sample_endpoints() {
        let band = Side::Right.band();
        let low = band.sample(0.0, 0.0);
        assert_approx_eq!(f32, low.x(), 82.0);
        assert_approx_eq!(f32, low.y(), 5.0);

        let mid = band.sample(0.5, 0.5);
        assert_approx_eq!(f32, mid.x(), 88.5);
        assert_approx_eq!(f32, mid.y(), 47.5);
    }

    #[test]
    fn test_band_sample_stays_below_upper_bound() {
        let largest_unit = 1.0 - f32::EPSILON / 2.0;

        let left = Side::Left.band().sample(largest_unit, 0.0);
        assert!(left.x() < 18.0, "left x reached {}", left.x());

        let right = Side::Right.band().sample(largest_unit, largest_unit);
        assert!(right.x() < 95.0, "right x reached {}", right.x());
        assert!(right.y() < 90.0, "right y reached {}", right.y());

        for side in Side::ALL {
            let band = side.band();
            assert!(band.contains(band.sample(largest_unit, largest_unit)));
        }
    }

    #[test]
    fn test_band_contains_is_half_open() {
        let left = Side::Left.band();
        assert!(left.contains(Position::new(5.0, 5.0)));
        assert!(!left.contains(Position::new(18.0, 50.0)));
        assert!(!left.contains(Position::new(10.0, 90.0)));
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Top.to_string(), "top");
        assert_eq!(Side::Bottom.to_string(), "bottom");
    }
}
