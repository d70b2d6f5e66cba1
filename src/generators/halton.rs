//! Halton sequence generator.
use super::{GeneratorOptions, QuasiRandom};
use crate::{ErrorKind, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Largest `f64` strictly smaller than one.
const ONE_BELOW: f64 = 1.0 - std::f64::EPSILON / 2.0;

/// Bits of precision covered by the scrambled digits of a coordinate.
const PRECISION_BITS: f64 = 54.0;

/// Halton sequence, optionally scrambled with random digit permutations.
///
/// The `j`-th coordinate is the radical inverse of the point index in the `j`-th prime base.
/// The sequence starts at index zero, so the first unscrambled point is the origin.
///
/// When scrambled, every coordinate gets one random permutation of the digits `0..base`
/// per digit position, for as many positions as `f64` can resolve.
/// Leading zero digits are permuted as well.
///
/// # References
///
/// - J. H. Halton (1960), Numerische Mathematik 2, 84-90. "On the efficiency of certain quasi-random sequences of points in evaluating multi-dimensional integrals"
/// - A. B. Owen (2017), arXiv:1706.02808. "A randomized Halton algorithm in R"
#[derive(Debug, Clone)]
pub struct HaltonGenerator {
    axes: Vec<Axis>,
    index: u64,
}
impl HaltonGenerator {
    /// Makes a new `HaltonGenerator` instance.
    ///
    /// With `options.scrambled` and a `seed`, the permutations (and hence the whole sequence)
    /// are reproducible. Without a seed, they are drawn from OS entropy.
    /// The seed is ignored for an unscrambled sequence.
    ///
    /// # Errors
    ///
    /// If `options.dimension` is `0`, this function returns an `ErrorKind::InvalidInput` error.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        track_assert_ne!(options.dimension, 0, ErrorKind::InvalidInput);

        let bases = primes(options.dimension);
        let axes = if options.scrambled {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            bases
                .into_iter()
                .map(|base| Axis::scrambled(base, &mut rng))
                .collect()
        } else {
            bases.into_iter().map(Axis::plain).collect()
        };
        tracing::debug!(
            dimension = options.dimension,
            scrambled = options.scrambled,
            seeded = options.seed.is_some(),
            "halton generator initialized"
        );
        Ok(Self { axes, index: 0 })
    }

    /// Returns the index of the next point to be generated.
    pub fn position(&self) -> u64 {
        self.index
    }

    /// Returns the prime bases in coordinate order.
    pub fn bases(&self) -> Vec<u64> {
        self.axes.iter().map(|a| a.base).collect()
    }
}
impl QuasiRandom for HaltonGenerator {
    fn dimension(&self) -> usize {
        self.axes.len()
    }

    fn next_points(&mut self, n: usize) -> Result<Vec<f64>> {
        let len = track_assert_some!(n.checked_mul(self.axes.len()), ErrorKind::InvalidInput);
        let end = track_assert_some!(self.index.checked_add(n as u64), ErrorKind::InvalidInput);

        let mut points = Vec::with_capacity(len);
        for i in self.index..end {
            points.extend(self.axes.iter().map(|a| a.radical_inverse(i)));
        }
        self.index = end;
        Ok(points)
    }
}

#[derive(Debug, Clone)]
struct Axis {
    base: u64,
    // `digits * base` entries; the permutation of digit position `j` is `[j * base, (j + 1) * base)`.
    permutations: Option<Vec<u64>>,
}
impl Axis {
    fn plain(base: u64) -> Self {
        Self {
            base,
            permutations: None,
        }
    }

    fn scrambled<R: rand::Rng>(base: u64, rng: &mut R) -> Self {
        let digits = (PRECISION_BITS / (base as f64).log2()).ceil() as usize;
        let mut permutations = Vec::with_capacity(digits * base as usize);
        for _ in 0..digits {
            let start = permutations.len();
            permutations.extend(0..base);
            permutations[start..].shuffle(rng);
        }
        Self {
            base,
            permutations: Some(permutations),
        }
    }

    fn radical_inverse(&self, mut index: u64) -> f64 {
        let inv = 1.0 / self.base as f64;
        let mut weight = inv;
        let mut value = 0.0;
        match &self.permutations {
            None => {
                while index > 0 {
                    value += (index % self.base) as f64 * weight;
                    index /= self.base;
                    weight *= inv;
                }
            }
            Some(permutations) => {
                for perm in permutations.chunks_exact(self.base as usize) {
                    value += perm[(index % self.base) as usize] as f64 * weight;
                    index /= self.base;
                    weight *= inv;
                }
            }
        }
        value.min(ONE_BELOW)
    }
}

/// Returns the first `n` prime numbers.
fn primes(n: usize) -> Vec<u64> {
    let mut primes = Vec::with_capacity(n);
    let mut candidate = 2;
    while primes.len() < n {
        if primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0)
        {
            primes.push(candidate);
        }
        candidate += 1;
    }
    primes
}
