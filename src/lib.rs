//! Scaled quasi-random sampling of named, bounded parameter spaces.
//!
//! A [`ParameterSpace`] declares an ordered list of named dimensions, each bounded by `[lower, upper)`.
//! A [`ScaledSampler`] draws points of a low-discrepancy sequence from the unit hypercube and
//! maps every coordinate into the bounds of the corresponding dimension.
//!
//! ```
//! use hypersample::generators::GeneratorOptions;
//! use hypersample::{ParameterSpace, ScaledSampler};
//!
//! # fn main() -> hypersample::Result<()> {
//! let space = ParameterSpace::new(vec![("spot", (0.8, 1.2)), ("vol", (0.1, 0.5))])?;
//! let options = GeneratorOptions::new(2).scrambled(true).seed(42);
//! let mut sampler = ScaledSampler::halton(space, options)?;
//!
//! let samples = sampler.draw(1000)?;
//! assert_eq!(samples.len(), 1000);
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#[macro_use]
extern crate trackable;

pub use self::error::{Error, ErrorKind};
pub use self::sampler::{SampleSet, ScaledSampler};
pub use self::space::{Dimension, ParameterSpace};

pub mod generators;
pub mod presets;
pub mod sampler;
pub mod space;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
