//! Low-discrepancy point generators.
use crate::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::halton::HaltonGenerator;

pub mod halton;

/// A generator of points in the unit hypercube `[0, 1)^d`.
///
/// Implementations own their sequence state: successive calls continue the sequence,
/// so drawing `n` points in several batches yields the same points as a single call.
/// A generator is not shared between concurrent draws; callers serialize access
/// (e.g., one generator per worker).
pub trait QuasiRandom {
    /// Returns the dimensionality `d` of the generated points.
    fn dimension(&self) -> usize;

    /// Produces the next `n` points.
    ///
    /// The result is row-major: `n * self.dimension()` coordinates,
    /// the `i`-th point occupying `[i * d, (i + 1) * d)`.
    /// Every coordinate lies in `[0, 1)`.
    fn next_points(&mut self, n: usize) -> Result<Vec<f64>>;
}
impl<'a, T: QuasiRandom + ?Sized> QuasiRandom for &'a mut T {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_points(&mut self, n: usize) -> Result<Vec<f64>> {
        (**self).next_points(n)
    }
}
impl<T: QuasiRandom + ?Sized> QuasiRandom for Box<T> {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn next_points(&mut self, n: usize) -> Result<Vec<f64>> {
        (**self).next_points(n)
    }
}

/// Configuration of a low-discrepancy generator.
///
/// Reproducibility follows from these options alone:
/// an unscrambled sequence is always the same,
/// a scrambled sequence is the same for the same `seed`,
/// and a scrambled sequence without a seed differs from run to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorOptions {
    /// Dimensionality of the generated points.
    pub dimension: usize,

    /// Whether the sequence is randomly scrambled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scrambled: bool,

    /// Seed of the scrambling.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}
impl GeneratorOptions {
    /// Makes a new `GeneratorOptions` for an unscrambled, `dimension`-dimensional sequence.
    pub const fn new(dimension: usize) -> Self {
        Self {
            dimension,
            scrambled: false,
            seed: None,
        }
    }

    /// Sets whether the sequence is scrambled.
    pub fn scrambled(mut self, b: bool) -> Self {
        self.scrambled = b;
        self
    }

    /// Sets the scrambling seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
