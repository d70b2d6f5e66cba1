//! Scaled quasi-random sampling.
use crate::generators::{GeneratorOptions, HaltonGenerator, QuasiRandom};
use crate::space::{Dimension, ParameterSpace};
use crate::{ErrorKind, Result};
use std::slice::ChunksExact;

/// A sampler that maps the points of a low-discrepancy generator into a `ParameterSpace`.
///
/// Coordinate `i` of every raw point is rescaled as `raw_i * (upper_i - lower_i) + lower_i`,
/// where `i` follows the declaration order of the space.
///
/// The sampler exclusively owns its generator.
/// Successive `draw` calls continue the underlying sequence,
/// so a large sample set may be drawn in batches and concatenated.
#[derive(Debug)]
pub struct ScaledSampler<G = HaltonGenerator> {
    space: ParameterSpace,
    transform: AffineTransform,
    generator: G,
}
impl ScaledSampler<HaltonGenerator> {
    /// Makes a new `ScaledSampler` backed by a `HaltonGenerator` built from `options`.
    ///
    /// # Errors
    ///
    /// If `options.dimension` differs from `space.dimension_count()`,
    /// this function returns an `ErrorKind::DimensionMismatch` error.
    pub fn halton(space: ParameterSpace, options: GeneratorOptions) -> Result<Self> {
        track_assert_eq!(
            options.dimension,
            space.dimension_count(),
            ErrorKind::DimensionMismatch
        );
        let generator = track!(HaltonGenerator::new(options))?;
        track!(Self::new(space, generator))
    }
}
impl<G: QuasiRandom> ScaledSampler<G> {
    /// Makes a new `ScaledSampler` instance.
    ///
    /// # Errors
    ///
    /// If `generator.dimension()` differs from `space.dimension_count()`,
    /// this function returns an `ErrorKind::DimensionMismatch` error.
    pub fn new(space: ParameterSpace, generator: G) -> Result<Self> {
        track_assert_eq!(
            generator.dimension(),
            space.dimension_count(),
            ErrorKind::DimensionMismatch
        );
        let transform = AffineTransform::new(&space);
        tracing::debug!(
            dimensions = ?space.names(),
            "scaled sampler initialized"
        );
        Ok(Self {
            space,
            transform,
            generator,
        })
    }

    /// Returns a reference to the parameter space.
    pub fn space(&self) -> &ParameterSpace {
        &self.space
    }

    /// Returns a reference to the generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Draws `n` points and rescales them into the parameter space.
    ///
    /// The generator is invoked once for all `n` points.
    /// Either the complete set of `n` samples is returned or nothing is.
    ///
    /// # Errors
    ///
    /// If `n` is `0` (or `n * d` is not representable),
    /// this function returns an `ErrorKind::InvalidCount` error.
    pub fn draw(&mut self, n: usize) -> Result<SampleSet> {
        track_assert_ne!(n, 0, ErrorKind::InvalidCount);
        let d = self.space.dimension_count();
        let len = track_assert_some!(n.checked_mul(d), ErrorKind::InvalidCount);

        let span = tracing::debug_span!("draw", n, d);
        let _enter = span.enter();

        tracing::trace!("requesting raw points");
        let mut values = track!(self.generator.next_points(n))?;
        track_assert_eq!(values.len(), len, ErrorKind::Bug);

        self.transform.apply(&mut values);
        tracing::debug!("sample set drawn");
        Ok(SampleSet {
            dimension: d,
            values,
        })
    }
}

/// Per-dimension affine coefficients derived from the bounds of a `ParameterSpace`.
#[derive(Debug, Clone)]
struct AffineTransform {
    scales: Vec<f64>,
    offsets: Vec<f64>,
}
impl AffineTransform {
    fn new(space: &ParameterSpace) -> Self {
        let dimensions = space.dimensions();
        Self {
            scales: dimensions.iter().map(Dimension::width).collect(),
            offsets: dimensions.iter().map(Dimension::lower).collect(),
        }
    }

    fn apply(&self, values: &mut [f64]) {
        for row in values.chunks_exact_mut(self.scales.len()) {
            for ((x, scale), offset) in row.iter_mut().zip(&self.scales).zip(&self.offsets) {
                *x = *x * scale + offset;
            }
        }
    }
}

/// An ordered, fixed-size set of points of a parameter space.
///
/// Coordinates follow the declaration order of the space the set was drawn from
/// (see `ParameterSpace::names` for the column labels).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    dimension: usize,
    values: Vec<f64>,
}
impl SampleSet {
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len() / self.dimension
    }

    /// Returns `true` if this set has no samples.
    ///
    /// Sets produced by `ScaledSampler::draw` are never empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of coordinates of each sample.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the `i`-th sample.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.values.get(start..end)
    }

    /// Returns an iterator over the samples.
    pub fn rows(&self) -> ChunksExact<f64> {
        self.values.chunks_exact(self.dimension)
    }

    /// Returns the `j`-th coordinate of every sample.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        if j < self.dimension {
            Some(self.rows().map(|row| row[j]).collect())
        } else {
            None
        }
    }

    /// Returns the coordinates of all samples, row by row.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Converts this set into one vector per sample.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use trackable::result::TestResult;

    /// Replays fixed raw points.
    #[derive(Debug)]
    struct FixedPoints {
        dimension: usize,
        points: Vec<f64>,
    }
    impl FixedPoints {
        fn new(points: &[&[f64]]) -> Self {
            Self {
                dimension: points[0].len(),
                points: points.iter().flat_map(|p| p.iter().copied()).collect(),
            }
        }
    }
    impl QuasiRandom for FixedPoints {
        fn dimension(&self) -> usize {
            self.dimension
        }

        fn next_points(&mut self, n: usize) -> Result<Vec<f64>> {
            let len = n * self.dimension;
            track_assert!(len <= self.points.len(), ErrorKind::Other; n);
            Ok(self.points.drain(..len).collect())
        }
    }

    /// Returns one coordinate too few.
    #[derive(Debug)]
    struct Truncating;
    impl QuasiRandom for Truncating {
        fn dimension(&self) -> usize {
            2
        }

        fn next_points(&mut self, n: usize) -> Result<Vec<f64>> {
            Ok(vec![0.0; n * 2 - 1])
        }
    }

    fn space(entries: &[(&str, (f64, f64))]) -> ParameterSpace {
        ParameterSpace::new(entries.iter().cloned()).unwrap()
    }

    #[test]
    fn fixed_points_are_rescaled() -> TestResult {
        let space = space(&[("spot", (0.8, 1.2)), ("vol", (0.1, 0.5))]);
        let generator = FixedPoints::new(&[&[0.0, 0.0], &[0.5, 0.5], &[0.25, 0.75]]);
        let mut sampler = track!(ScaledSampler::new(space, generator))?;

        let samples = track!(sampler.draw(3))?;
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.dimension(), 2);

        let expected = [[0.8, 0.1], [1.0, 0.3], [0.9, 0.4]];
        for (row, e) in samples.rows().zip(expected.iter()) {
            assert_relative_eq!(row[0], e[0], max_relative = 1e-12);
            assert_relative_eq!(row[1], e[1], max_relative = 1e-12);
        }

        // A raw zero maps exactly onto the lower bound.
        assert_eq!(samples.row(0), Some(&[0.8, 0.1][..]));
        Ok(())
    }

    #[test]
    fn midpoint_is_mapped_to_interval_center() -> TestResult {
        let space = space(&[("x", (-3.0, 7.0)), ("y", (1e-3, 2e-3)), ("z", (100.0, 101.0))]);
        let mut sampler = track!(ScaledSampler::new(
            space.clone(),
            FixedPoints::new(&[&[0.5, 0.5, 0.5]])
        ))?;

        let samples = track!(sampler.draw(1))?;
        let row = samples.row(0).unwrap();
        for (x, d) in row.iter().zip(space.dimensions()) {
            assert_relative_eq!(*x, (d.lower() + d.upper()) / 2.0, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn permuted_space_permutes_columns() -> TestResult {
        let ab = space(&[("a", (0.0, 1.0)), ("b", (10.0, 20.0))]);
        let ba = space(&[("b", (10.0, 20.0)), ("a", (0.0, 1.0))]);

        let mut sampler = track!(ScaledSampler::new(ab, FixedPoints::new(&[&[0.3, 0.6]])))?;
        let forward = track!(sampler.draw(1))?;

        let mut sampler = track!(ScaledSampler::new(ba, FixedPoints::new(&[&[0.6, 0.3]])))?;
        let backward = track!(sampler.draw(1))?;

        assert_eq!(forward.column(0), backward.column(1));
        assert_eq!(forward.column(1), backward.column(0));
        assert_eq!(forward.column(2), None);
        Ok(())
    }

    #[test]
    fn draw_returns_exactly_n_samples() -> TestResult {
        let space = space(&[("a", (0.0, 1.0)), ("b", (10.0, 20.0)), ("c", (-1.0, 0.0))]);
        let options = GeneratorOptions::new(3).scrambled(true).seed(0);
        let mut sampler = track!(ScaledSampler::halton(space, options))?;
        for &n in &[1, 2, 1000] {
            let samples = track!(sampler.draw(n))?;
            assert_eq!(samples.len(), n);
            assert_eq!(samples.rows().count(), n);
            assert_eq!(samples.as_slice().len(), n * 3);
            assert!(!samples.is_empty());
        }
        Ok(())
    }

    #[test]
    fn seeded_draws_are_reproducible() -> TestResult {
        let space = space(&[("a", (0.0, 1.0)), ("b", (10.0, 20.0))]);
        let options = GeneratorOptions::new(2).scrambled(true).seed(2020);

        let a = track!(track!(ScaledSampler::halton(space.clone(), options))?.draw(500))?;
        let b = track!(track!(ScaledSampler::halton(space, options))?.draw(500))?;
        let a_bits = a.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        let b_bits = b.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(a_bits, b_bits);
        Ok(())
    }

    #[test]
    fn batched_draws_concatenate_to_one_draw() -> TestResult {
        let space = space(&[("a", (0.0, 1.0)), ("b", (10.0, 20.0))]);
        let options = GeneratorOptions::new(2).scrambled(true).seed(9);

        let whole = track!(track!(ScaledSampler::halton(space.clone(), options))?.draw(64))?;

        let mut sampler = track!(ScaledSampler::halton(space, options))?;
        let mut rows = track!(sampler.draw(40))?.into_rows();
        rows.extend(track!(sampler.draw(24))?.into_rows());
        assert_eq!(rows, whole.into_rows());
        Ok(())
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let space = space(&[("a", (0.0, 1.0)), ("b", (0.0, 1.0)), ("c", (0.0, 1.0))]);

        let e = ScaledSampler::halton(space.clone(), GeneratorOptions::new(6))
            .err()
            .unwrap();
        assert_eq!(*e.kind(), ErrorKind::DimensionMismatch);

        let generator = HaltonGenerator::new(GeneratorOptions::new(6)).unwrap();
        let e = ScaledSampler::new(space, generator).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn zero_count_is_rejected() -> TestResult {
        let space = space(&[("a", (0.0, 1.0))]);
        let mut sampler = track!(ScaledSampler::halton(space, GeneratorOptions::new(1)))?;
        let e = sampler.draw(0).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::InvalidCount);
        Ok(())
    }

    #[test]
    fn broken_generator_is_detected() -> TestResult {
        let space = space(&[("a", (0.0, 1.0)), ("b", (0.0, 1.0))]);
        let mut sampler = track!(ScaledSampler::new(space, Truncating))?;
        let e = sampler.draw(4).err().unwrap();
        assert_eq!(*e.kind(), ErrorKind::Bug);
        Ok(())
    }

    #[test]
    fn sampler_accepts_borrowed_generator() -> TestResult {
        let space = space(&[("a", (0.0, 1.0))]);
        let mut generator = track!(HaltonGenerator::new(GeneratorOptions::new(1)))?;
        {
            let mut sampler = track!(ScaledSampler::new(space, &mut generator))?;
            track!(sampler.draw(10))?;
        }
        assert_eq!(generator.position(), 10);
        Ok(())
    }

    proptest! {
        #[test]
        fn samples_stay_within_bounds(
            bounds in prop::collection::vec((-1e3f64..1e3, 1e-6f64..1e3), 1..7),
            n in 1usize..300,
            seed in any::<u64>(),
        ) {
            let entries = bounds
                .iter()
                .enumerate()
                .map(|(i, &(lower, width))| (format!("x{}", i), (lower, lower + width)));
            let space = ParameterSpace::new(entries).unwrap();
            let options = GeneratorOptions::new(space.dimension_count()).scrambled(true).seed(seed);
            let mut sampler = ScaledSampler::halton(space.clone(), options).unwrap();

            let samples = sampler.draw(n).unwrap();
            prop_assert_eq!(samples.len(), n);
            for row in samples.rows() {
                for (x, d) in row.iter().zip(space.dimensions()) {
                    prop_assert!(d.lower() <= *x && *x <= d.upper());
                }
            }
        }
    }
}
