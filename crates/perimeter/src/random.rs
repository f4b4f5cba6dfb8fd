//! Random source seam for the placement engine.
//!
//! The engine draws every random number through [`RandomSource`], so tests
//! can feed a fixed sequence and callers can pick any `rand` generator.

use rand::Rng;

/// Largest `f32` strictly below one.
const UNIT_MAX: f32 = 1.0 - f32::EPSILON / 2.0;

/// A generator of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f32;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Adapts a closure into a [`RandomSource`].
///
/// Values outside `[0, 1)` are clamped into range and NaN becomes `0.0`.
///
/// # Examples
///
/// ```
/// use perimeter::random::{FnSource, RandomSource};
///
/// let mut source = FnSource::new(|| 0.5);
/// assert_eq!(source.next_unit(), 0.5);
/// ```
pub struct FnSource<F> {
    next: F,
}

impl<F: FnMut() -> f32> FnSource<F> {
    pub fn new(next: F) -> Self {
        Self { next }
    }
}

impl<F: FnMut() -> f32> RandomSource for FnSource<F> {
    fn next_unit(&mut self) -> f32 {
        let value = (self.next)();
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, UNIT_MAX)
        }
    }
}
