//! Tier-scaled random draws: discrete choices, rounded uniform ranges and
//! inclusive integer ranges.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::util::round_to;

pub struct Sampler<'a, R: Rng> {
  rng: &'a mut R,
}

impl<'a, R: Rng> Sampler<'a, R> {
  pub fn new(rng: &'a mut R) -> Self {
    Self { rng }
  }

  /// One value from a fixed, non-empty set.
  pub fn choice<T: Copy>(&mut self, items: &[T]) -> T {
    *items.choose(&mut *self.rng).unwrap_or(&items[0])
  }

  /// Uniform draw in `[min, max]`, rounded to `decimals`.
  pub fn range(&mut self, min: f64, max: f64, decimals: u32) -> f64 {
    round_to(self.rng.gen_range(min..=max), decimals)
  }

  /// Inclusive integer draw, returned as f64 since every parameter is numeric.
  pub fn integer(&mut self, min: i64, max: i64) -> f64 {
    self.rng.gen_range(min..=max) as f64
  }

  pub fn rng(&mut self) -> &mut R {
    &mut *self.rng
  }
}
