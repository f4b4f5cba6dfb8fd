//! Placement policy.
//!
//! A [`PlacementPolicy`] bundles every constraint the engine checks: the
//! minimum separation, the exclusion zone, the per-item retry budget and
//! the ranges animation parameters are drawn from. Policies derived from a
//! viewport width are always valid; hand-built ones are validated on
//! construction.

use log::debug;
use serde::Deserialize;

use perimeter_core::{geometry::ExclusionZone, viewport::ViewportClass};

use crate::error::PerimeterError;

/// Default number of candidates generated per item before it is dropped.
pub const MAX_ATTEMPTS_PER_ITEM: usize = 100;

/// Minimum separation used when the viewport width is unknown.
pub const FALLBACK_MIN_DISTANCE: f32 = 10.0;

/// Half-open range `[min, max)` an animation scalar is drawn from, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnimationRange {
    min: f32,
    max: f32,
}

impl AnimationRange {
    pub const DEFAULT_DELAY: Self = Self { min: 0.0, max: 2.0 };
    pub const DEFAULT_DURATION: Self = Self { min: 5.0, max: 8.0 };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    /// Maps a uniform draw in `[0, 1)` onto the range.
    ///
    /// The result stays below `max` even when rounding would reach it.
    pub fn sample(self, unit: f32) -> f32 {
        (self.min + unit * (self.max - self.min)).min(self.max.next_down())
    }

    /// Returns true when `value` lies in `[min, max)`.
    pub fn contains(self, value: f32) -> bool {
        (self.min..self.max).contains(&value)
    }

    fn validate(self, name: &str) -> Result<(), PerimeterError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PerimeterError::InvalidPolicy(format!(
                "{name} range must be finite, got [{}, {})",
                self.min, self.max
            )));
        }
        if self.min < 0.0 || self.max <= self.min {
            return Err(PerimeterError::InvalidPolicy(format!(
                "{name} range must be non-negative and non-empty, got [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Constraints applied by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPolicy {
    min_distance: f32,
    exclusion_zone: ExclusionZone,
    max_attempts: usize,
    delay: AnimationRange,
    duration: AnimationRange,
}

impl PlacementPolicy {
    /// Creates a validated policy with default retry budget and animation ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::InvalidPolicy`] if `min_distance` is negative
    /// or not finite, or if the exclusion zone is inverted or not finite.
    pub fn new(min_distance: f32, exclusion_zone: ExclusionZone) -> Result<Self, PerimeterError> {
        Self {
            min_distance,
            exclusion_zone,
            max_attempts: MAX_ATTEMPTS_PER_ITEM,
            delay: AnimationRange::DEFAULT_DELAY,
            duration: AnimationRange::DEFAULT_DURATION,
        }
        .validated()
    }

    /// Derives the policy for a viewport width in pixels.
    ///
    /// An unavailable or nonsensical width falls back to the default
    /// classification: a separation of [`FALLBACK_MIN_DISTANCE`] and the wide
    /// exclusion zone.
    pub fn for_viewport(width_px: Option<f32>) -> Self {
        match ViewportClass::classify(width_px) {
            Some(class) => Self::for_class(class),
            None => {
                debug!(width_px:?; "Viewport width unavailable, using fallback policy");
                Self {
                    min_distance: FALLBACK_MIN_DISTANCE,
                    ..Self::for_class(ViewportClass::Wide)
                }
            }
        }
    }

    /// Derives the policy for a known viewport class.
    pub fn for_class(class: ViewportClass) -> Self {
        Self {
            min_distance: class.min_distance(),
            exclusion_zone: class.exclusion_zone(),
            max_attempts: MAX_ATTEMPTS_PER_ITEM,
            delay: AnimationRange::DEFAULT_DELAY,
            duration: AnimationRange::DEFAULT_DURATION,
        }
    }

    /// Replaces the minimum separation.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::InvalidPolicy`] if the distance is negative
    /// or not finite.
    pub fn with_min_distance(mut self, min_distance: f32) -> Result<Self, PerimeterError> {
        self.min_distance = min_distance;
        self.validated()
    }

    /// Replaces the retry budget.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::InvalidPolicy`] if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self, PerimeterError> {
        self.max_attempts = max_attempts;
        self.validated()
    }

    /// Replaces the delay and duration ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PerimeterError::InvalidPolicy`] if either range is empty,
    /// negative or not finite.
    pub fn with_animation(
        mut self,
        delay: AnimationRange,
        duration: AnimationRange,
    ) -> Result<Self, PerimeterError> {
        self.delay = delay;
        self.duration = duration;
        self.validated()
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn exclusion_zone(&self) -> ExclusionZone {
        self.exclusion_zone
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn delay(&self) -> AnimationRange {
        self.delay
    }

    pub fn duration(&self) -> AnimationRange {
        self.duration
    }

    fn validated(self) -> Result<Self, PerimeterError> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(PerimeterError::InvalidPolicy(format!(
                "minimum distance must be a non-negative number, got {}",
                self.min_distance
            )));
        }
        if !self.exclusion_zone.is_well_formed() {
            return Err(PerimeterError::InvalidPolicy(format!(
                "exclusion zone bounds are inverted or not finite: {:?}",
                self.exclusion_zone
            )));
        }
        if self.max_attempts == 0 {
            return Err(PerimeterError::InvalidPolicy(
                "attempts per item must be at least 1".to_string(),
            ));
        }
        self.delay.validate("delay")?;
        self.duration.validate("duration")?;
        Ok(self)
    }
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self::for_viewport(None)
    }
}
