//! Point placement engine.
//!
//! Items are placed one at a time, in input order, by bounded rejection
//! sampling: pick a side, draw a position inside that side's band, and keep
//! it only if it is outside the exclusion zone and far enough from every
//! position accepted so far. An item that runs out of attempts is left out
//! of the result; earlier placements are never revisited.

use log::{debug, info, trace};

use perimeter_core::geometry::{Position, Side};

use crate::{
    placement::{Placement, PlacementSet},
    policy::PlacementPolicy,
    random::RandomSource,
};

/// Why a candidate position was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Excluded,
    TooClose,
}

/// Placement engine for a fixed [`PlacementPolicy`].
///
/// The engine holds no state between calls; every call to [`Engine::place`]
/// is an independent trial whose result replaces any earlier one.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    policy: PlacementPolicy,
}

impl Engine {
    pub fn new(policy: PlacementPolicy) -> Self {
        Self { policy }
    }

    /// Places `count` items and returns the accepted placements.
    ///
    /// Evaluates at most `count * max_attempts` candidates. Never fails:
    /// items without a valid candidate are dropped.
    pub fn place<R>(&self, count: usize, rng: &mut R) -> PlacementSet
    where
        R: RandomSource + ?Sized,
    {
        let mut accepted: Vec<Position> = Vec::with_capacity(count);
        let mut placements = Vec::with_capacity(count);

        for index in 0..count {
            let Some((side, position, attempts)) = self.find_position(&accepted, rng) else {
                debug!(
                    index,
                    max_attempts = self.policy.max_attempts();
                    "Dropping item, no valid position found"
                );
                continue;
            };

            let delay = self.policy.delay().sample(rng.next_unit());
            let duration = self.policy.duration().sample(rng.next_unit());
            debug!(
                index,
                side = side.to_string(),
                x = position.x(),
                y = position.y(),
                attempts;
                "Item placed"
            );

            accepted.push(position);
            placements.push(Placement::new(index, side, position, delay, duration));
        }

        let set = PlacementSet::new(placements, count, self.policy.exclusion_zone());
        info!(
            requested = set.requested(),
            placed = set.len(),
            dropped = set.dropped();
            "Placement finished"
        );
        set
    }

    /// Draws candidates until one is accepted or the budget runs out.
    ///
    /// Returns the side, the position and the number of attempts used.
    fn find_position<R>(&self, accepted: &[Position], rng: &mut R) -> Option<(Side, Position, usize)>
    where
        R: RandomSource + ?Sized,
    {
        for attempt in 1..=self.policy.max_attempts() {
            let side = Side::from_unit(rng.next_unit());
            let band = side.band();
            let candidate = band.sample(rng.next_unit(), rng.next_unit());

            match self.check(candidate, accepted) {
                Ok(()) => return Some((side, candidate, attempt)),
                Err(reason) => {
                    trace!(attempt, reason:?, x = candidate.x(), y = candidate.y(); "Candidate rejected");
                }
            }
        }
        None
    }

    fn check(&self, candidate: Position, accepted: &[Position]) -> Result<(), Rejection> {
        if self.policy.exclusion_zone().contains(candidate) {
            return Err(Rejection::Excluded);
        }

        let min_distance = self.policy.min_distance();
        if accepted
            .iter()
            .any(|placed| candidate.distance_to(*placed) < min_distance)
        {
            return Err(Rejection::TooClose);
        }

        Ok(())
    }
}

/// Places every item for a viewport width in pixels.
///
/// `viewport_width_px` of `None` (for example outside a browser) uses the
/// fallback policy. Only the number and order of `items` matter; each
/// [`Placement::index`] points back into `items`.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let items = ["Rust", "Go", "Zig"];
/// let mut rng = StdRng::seed_from_u64(1);
/// let set = perimeter::place_items(&items, Some(1280.0), &mut rng);
/// assert!(set.len() <= items.len());
/// ```
pub fn place_items<T, R>(items: &[T], viewport_width_px: Option<f32>, rng: &mut R) -> PlacementSet
where
    R: RandomSource + ?Sized,
{
    Engine::new(PlacementPolicy::for_viewport(viewport_width_px)).place(items.len(), rng)
}
