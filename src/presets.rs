//! Ready-made parameter spaces.
use crate::{ParameterSpace, Result};

/// Number of samples drawn for the pricing surrogate training set.
pub const PRICING_SURROGATE_SAMPLES: usize = 51_000_000;

/// Returns the input domain of the path-dependent option pricing surrogate.
///
/// | dimension       | lower | upper |
/// |-----------------|-------|-------|
/// | `spot`          | 0.8   | 1.2   |
/// | `path_integral` | 0.0   | 1.0   |
/// | `ttm`           | 0.2   | 1.0   |
/// | `t`             | 0.0   | 0.8   |
/// | `vol`           | 0.1   | 0.5   |
/// | `r`             | 0.0   | 0.1   |
///
/// The dimensions are independent; no relation such as `t <= ttm` is imposed.
pub fn pricing_surrogate_space() -> Result<ParameterSpace> {
    track!(ParameterSpace::new(vec![
        ("spot", (0.8, 1.2)),
        ("path_integral", (0.0, 1.0)),
        ("ttm", (0.2, 1.0)),
        ("t", (0.0, 0.8)),
        ("vol", (0.1, 0.5)),
        ("r", (0.0, 0.1)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorOptions;
    use crate::ScaledSampler;
    use trackable::result::TestResult;

    #[test]
    fn pricing_surrogate_space_works() -> TestResult {
        let space = track!(pricing_surrogate_space())?;
        assert_eq!(
            space.names(),
            vec!["spot", "path_integral", "ttm", "t", "vol", "r"]
        );
        assert_eq!(space.lower_bounds(), vec![0.8, 0.0, 0.2, 0.0, 0.1, 0.0]);
        assert_eq!(space.upper_bounds(), vec![1.2, 1.0, 1.0, 0.8, 0.5, 0.1]);

        let options = GeneratorOptions::new(6).scrambled(true).seed(51);
        let mut sampler = track!(ScaledSampler::halton(space, options))?;
        let samples = track!(sampler.draw(10_000))?;
        let spot = samples.column(0).unwrap();
        assert!(spot.iter().all(|&x| 0.8 <= x && x <= 1.2));
        let r = samples.column(5).unwrap();
        assert!(r.iter().all(|&x| 0.0 <= x && x <= 0.1));
        Ok(())
    }
}
