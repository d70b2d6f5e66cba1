//! Parameter spaces.
use crate::{Error, ErrorKind, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::TryFrom;

/// A named axis of a parameter space.
///
/// The axis covers the half-closed interval `[lower, upper)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDimension"))]
pub struct Dimension {
    name: String,
    lower: f64,
    upper: f64,
}
impl Dimension {
    /// Makes a new `Dimension` instance.
    ///
    /// # Errors
    ///
    /// If one of the following conditions is satisfied, this function returns an `ErrorKind::InvalidBounds` error:
    ///
    /// - `name` is empty
    /// - `lower` or `upper` is not a finite number
    /// - `lower >= upper`
    /// - `upper - lower` is not a finite number
    pub fn new<S: Into<String>>(name: S, lower: f64, upper: f64) -> Result<Self> {
        let name = name.into();
        track_assert!(!name.is_empty(), ErrorKind::InvalidBounds; lower, upper);
        track_assert!(lower.is_finite(), ErrorKind::InvalidBounds; name, lower, upper);
        track_assert!(upper.is_finite(), ErrorKind::InvalidBounds; name, lower, upper);
        track_assert!(lower < upper, ErrorKind::InvalidBounds; name, lower, upper);
        track_assert!((upper - lower).is_finite(), ErrorKind::InvalidBounds; name, lower, upper);
        Ok(Self { name, lower, upper })
    }

    /// Returns the name of this dimension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inclusive lower bound of this dimension.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the exclusive upper bound of this dimension.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDimension {
    name: String,
    lower: f64,
    upper: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimension> for Dimension {
    type Error = Error;

    fn try_from(raw: RawDimension) -> Result<Self> {
        track!(Dimension::new(raw.name, raw.lower, raw.upper))
    }
}

/// An ordered collection of named, bounded dimensions.
///
/// The declaration order is fixed at construction.
/// It is the order of the coordinates of every point drawn from this space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Dimension>", into = "Vec<Dimension>")
)]
pub struct ParameterSpace {
    dimensions: Vec<Dimension>,
}
impl ParameterSpace {
    /// Makes a new `ParameterSpace` from `(name, (lower, upper))` entries.
    ///
    /// The iteration order of `entries` becomes the dimension order of the space.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorKind::InvalidBounds` error if `entries` is empty,
    /// if a name is duplicated, or if any bound pair is rejected by `Dimension::new`.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, (f64, f64))>,
        S: Into<String>,
    {
        let dimensions = entries
            .into_iter()
            .map(|(name, (lower, upper))| track!(Dimension::new(name, lower, upper)))
            .collect::<Result<Vec<_>>>()?;
        track!(Self::from_dimensions(dimensions))
    }

    /// Makes a new `ParameterSpace` from already built dimensions, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an `ErrorKind::InvalidBounds` error if `dimensions` is empty,
    /// if a name is duplicated, or if a dimension has an invalid interval.
    pub fn from_dimensions(dimensions: Vec<Dimension>) -> Result<Self> {
        track_assert!(!dimensions.is_empty(), ErrorKind::InvalidBounds);

        let mut names = HashSet::with_capacity(dimensions.len());
        for d in &dimensions {
            track!(Dimension::new(d.name.as_str(), d.lower, d.upper))?;
            track_assert!(names.insert(d.name()), ErrorKind::InvalidBounds; d.name);
        }
        Ok(Self { dimensions })
    }

    /// Returns the number of declared dimensions.
    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the dimensions in declaration order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns the dimension names in declaration order.
    ///
    /// This is the column labelling of any `SampleSet` drawn from this space.
    pub fn names(&self) -> Vec<&str> {
        self.dimensions.iter().map(Dimension::name).collect()
    }

    /// Returns the position of the dimension called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.dimensions.iter().position(|d| d.name == name)
    }

    /// Returns the lower bounds in declaration order.
    pub fn lower_bounds(&self) -> Vec<f64> {
        self.dimensions.iter().map(Dimension::lower).collect()
    }

    /// Returns the upper bounds in declaration order.
    pub fn upper_bounds(&self) -> Vec<f64> {
        self.dimensions.iter().map(Dimension::upper).collect()
    }
}
impl TryFrom<Vec<Dimension>> for ParameterSpace {
    type Error = Error;

    fn try_from(dimensions: Vec<Dimension>) -> Result<Self> {
        track!(Self::from_dimensions(dimensions))
    }
}
impl From<ParameterSpace> for Vec<Dimension> {
    fn from(space: ParameterSpace) -> Self {
        space.dimensions
    }
}
