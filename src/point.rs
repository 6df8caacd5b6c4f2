//! Points in n-dimensional space and the centroid derived from them.
//!
//! A [`Point`] is a value-like numeric vector: its dimension is fixed at
//! construction, equality is exact per component (no epsilon), and hashing is
//! consistent with equality. Points support the two operations clustering
//! needs to average a set of members: vector addition and scalar
//! multiplication.
//!
//! A [`Centroid`] is structurally just a point; the newtype records that it
//! was derived as the arithmetic mean of a point set.

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in n-dimensional space.
///
/// Coordinates are expected to be non-NaN; NaN coordinates break the
/// reflexivity `Eq` promises.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a point from its coordinate vector.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Create the origin of a `dim`-dimensional space.
    pub fn zeros(dim: usize) -> Self {
        Self {
            coords: vec![0.0; dim],
        }
    }

    /// Number of dimensions.
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate vector.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Component-wise addition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the points live in spaces of
    /// different dimension.
    pub fn try_add(&self, other: &Point) -> Result<Point> {
        if self.dimension() != other.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }

        let coords = self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Point::new(coords))
    }

    /// Multiply every component by a scalar.
    pub fn scale(&self, scalar: f64) -> Point {
        Point::new(self.coords.iter().map(|c| scalar * c).collect())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Point::new(coords)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.len().hash(state);
        for c in &self.coords {
            // +0.0 and -0.0 compare equal, so canonicalize before hashing.
            let canonical = if *c == 0.0 { 0.0f64 } else { *c };
            canonical.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// The arithmetic mean of a set of points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Centroid(Point);

impl Centroid {
    /// Tag an existing point as a centroid.
    pub fn from_point(point: Point) -> Self {
        Self(point)
    }

    /// Compute the component-wise mean of a set of points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedMean`] for an empty set (a mean over zero
    /// points is undefined) and [`Error::DimensionMismatch`] if the points do
    /// not all share one dimension.
    pub fn mean(points: &[Point]) -> Result<Centroid> {
        let Some((first, rest)) = points.split_first() else {
            return Err(Error::UndefinedMean);
        };

        let mut sum = first.clone();
        for p in rest {
            sum = sum.try_add(p)?;
        }

        Ok(Centroid(sum.scale(1.0 / points.len() as f64)))
    }

    /// The centroid's position.
    pub fn as_point(&self) -> &Point {
        &self.0
    }

    /// Unwrap into a plain point.
    pub fn into_point(self) -> Point {
        self.0
    }
}

impl fmt::Display for Centroid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(p: &Point) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_add() {
        let a = Point::new(vec![1.0, 2.0, 3.0]);
        let b = Point::new(vec![0.5, -2.0, 1.0]);

        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum, Point::new(vec![1.5, 0.0, 4.0]));
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = Point::new(vec![1.0, 2.0]);
        let b = Point::new(vec![1.0, 2.0, 3.0]);

        assert!(matches!(
            a.try_add(&b),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn test_scale() {
        let p = Point::new(vec![1.0, -2.0, 0.5]);
        assert_eq!(p.scale(2.0), Point::new(vec![2.0, -4.0, 1.0]));
        assert_eq!(p.scale(0.0), Point::zeros(3));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Point::new(vec![0.1, 0.2]);
        let b = Point::new(vec![0.1, 0.2]);
        let c = Point::new(vec![0.1, 0.2 + 1e-12]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        // Different dimension is never equal.
        assert_ne!(a, Point::new(vec![0.1]));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let a = Point::new(vec![1.0, 0.0]);
        let b = Point::new(vec![1.0, -0.0]);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_display() {
        let p = Point::new(vec![1.0, 2.5]);
        assert_eq!(p.to_string(), "[1,2.5]");
        assert_eq!(Point::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_mean() {
        let points = vec![
            Point::new(vec![0.0, 0.0]),
            Point::new(vec![2.0, 4.0]),
            Point::new(vec![4.0, 2.0]),
        ];

        let centroid = Centroid::mean(&points).unwrap();
        let coords = centroid.as_point().coords();
        assert_relative_eq!(coords[0], 2.0);
        assert_relative_eq!(coords[1], 2.0);
    }

    #[test]
    fn test_mean_of_single_point_is_identity() {
        let points = vec![Point::new(vec![3.0, -1.0])];
        let centroid = Centroid::mean(&points).unwrap();
        assert_eq!(centroid.as_point(), &points[0]);
    }

    #[test]
    fn test_mean_of_empty_set_is_undefined() {
        assert!(matches!(Centroid::mean(&[]), Err(Error::UndefinedMean)));
    }

    #[test]
    fn test_mean_dimension_mismatch() {
        let points = vec![Point::new(vec![1.0, 2.0]), Point::new(vec![1.0])];
        assert!(matches!(
            Centroid::mean(&points),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
