//! Placement results.

use std::slice;

use perimeter_core::geometry::{ExclusionZone, Position, Side};

use crate::policy::PlacementPolicy;

/// One accepted item: where it sits and how it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    index: usize,
    side: Side,
    position: Position,
    delay: f32,
    duration: f32,
}

impl Placement {
    pub(crate) fn new(
        index: usize,
        side: Side,
        position: Position,
        delay: f32,
        duration: f32,
    ) -> Self {
        Self {
            index,
            side,
            position,
            delay,
            duration,
        }
    }

    /// Index of the originating item in the input sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Side band the position was drawn from.
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Entrance delay in seconds.
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Period of the floating animation in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// The placements accepted by one engine invocation, in input order.
///
/// Items that could not be placed within the retry budget are absent, so
/// the set may be shorter than the number of items requested. The set also
/// records the exclusion zone its placements were kept out of.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSet {
    placements: Vec<Placement>,
    requested: usize,
    exclusion_zone: ExclusionZone,
}

impl PlacementSet {
    pub(crate) fn new(
        placements: Vec<Placement>,
        requested: usize,
        exclusion_zone: ExclusionZone,
    ) -> Self {
        Self {
            placements,
            requested,
            exclusion_zone,
        }
    }

    /// Number of accepted placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Number of items the engine was asked to place.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of items dropped after exhausting their attempts.
    pub fn dropped(&self) -> usize {
        self.requested - self.placements.len()
    }

    /// Returns true when every requested item was placed.
    pub fn is_complete(&self) -> bool {
        self.dropped() == 0
    }

    pub fn iter(&self) -> slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    /// Exclusion zone of the policy that produced this set.
    pub fn exclusion_zone(&self) -> ExclusionZone {
        self.exclusion_zone
    }
}

impl Default for PlacementSet {
    fn default() -> Self {
        Self::new(Vec::new(), 0, PlacementPolicy::default().exclusion_zone())
    }
}

impl<'a> IntoIterator for &'a PlacementSet {
    type Item = &'a Placement;
    type IntoIter = slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let placement = Placement::new(0, Side::Left, Position::new(10.0, 50.0), 0.5, 6.0);
        let zone = ExclusionZone::new(25.0, 75.0, 20.0, 70.0);
        let set = PlacementSet::new(vec![placement], 3, zone);

        assert_eq!(set.len(), 1);
        assert_eq!(set.requested(), 3);
        assert_eq!(set.dropped(), 2);
        assert!(!set.is_complete());
        assert_eq!(set.iter().next().map(Placement::index), Some(0));
        assert_eq!(set.exclusion_zone(), zone);
    }

    #[test]
    fn test_empty_set_is_complete() {
        let set = PlacementSet::default();
        assert!(set.is_empty());
        assert!(set.is_complete());
        assert_eq!((&set).into_iter().count(), 0);
    }
}
