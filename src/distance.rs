//! Pluggable distance metrics.
//!
//! Two capability traits cover the two input shapes the crate works with:
//!
//! - [`PointDistance`] for numeric vectors ([`Point`]s of equal dimension)
//! - [`SymbolDistance`] for equal-length symbol sequences (strings)
//!
//! All provided metrics are stateless unit structs: pure, deterministic, and
//! safe to share across threads without synchronization. Shape validation
//! happens before any arithmetic, so a metric either fails fast with a
//! mismatch error or returns a finite, non-negative distance.

use crate::error::{Error, Result};
use crate::point::Point;

/// A distance metric over points of equal dimension.
pub trait PointDistance {
    /// Distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the points do not live in the
    /// same dimensional space.
    fn distance(&self, a: &Point, b: &Point) -> Result<f64>;
}

/// A distance metric over equal-length symbol sequences.
pub trait SymbolDistance {
    /// Distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    fn distance(&self, a: &str, b: &str) -> Result<f64>;
}

fn same_dimension<'a>(a: &'a Point, b: &'a Point) -> Result<(&'a [f64], &'a [f64])> {
    if a.dimension() != b.dimension() {
        return Err(Error::DimensionMismatch {
            expected: a.dimension(),
            found: b.dimension(),
        });
    }
    Ok((a.coords(), b.coords()))
}

/// Euclidean (L2) distance: `sqrt(Σ (a_i - b_i)²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl PointDistance for Euclidean {
    fn distance(&self, a: &Point, b: &Point) -> Result<f64> {
        let (xs, ys) = same_dimension(a, b)?;
        let sum: f64 = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| {
                let d = x - y;
                d * d
            })
            .sum();
        Ok(sum.sqrt())
    }
}

/// Manhattan (L1) distance: `Σ |a_i - b_i|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl PointDistance for Manhattan {
    fn distance(&self, a: &Point, b: &Point) -> Result<f64> {
        let (xs, ys) = same_dimension(a, b)?;
        Ok(xs.iter().zip(ys.iter()).map(|(x, y)| (x - y).abs()).sum())
    }
}

/// Hamming distance: the number of positions at which two equal-length
/// symbol sequences differ.
///
/// Compares Unicode scalar values position by position, so
/// `d("toned", "roses") = 3` and `d("10110", "11010") = 2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl SymbolDistance for Hamming {
    fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let len_a = a.chars().count();
        let len_b = b.chars().count();
        if len_a != len_b {
            return Err(Error::LengthMismatch {
                expected: len_a,
                found: len_b,
            });
        }

        let differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
        Ok(differing as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euclidean_pythagorean_triple() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![3.0, 4.0]);

        assert_relative_eq!(Euclidean.distance(&a, &b).unwrap(), 5.0);
    }

    #[test]
    fn test_manhattan_example() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![3.0, 4.0]);

        assert_relative_eq!(Manhattan.distance(&a, &b).unwrap(), 7.0);
    }

    #[test]
    fn test_euclidean_accumulates_all_dimensions() {
        // Every component differs; a fold that overwrote the running sum
        // instead of accumulating would report only the last term (6).
        let a = Point::new(vec![2.0, 7.0, 7.0]);
        let b = Point::new(vec![0.0, 4.0, 1.0]);

        assert_relative_eq!(Euclidean.distance(&a, &b).unwrap(), 7.0);
        assert_relative_eq!(Manhattan.distance(&a, &b).unwrap(), 11.0);
    }

    #[test]
    fn test_symmetry_and_identity() {
        let a = Point::new(vec![1.5, -2.0, 0.25]);
        let b = Point::new(vec![-4.0, 3.0, 9.5]);

        assert_eq!(
            Euclidean.distance(&a, &b).unwrap(),
            Euclidean.distance(&b, &a).unwrap()
        );
        assert_eq!(
            Manhattan.distance(&a, &b).unwrap(),
            Manhattan.distance(&b, &a).unwrap()
        );

        assert_eq!(Euclidean.distance(&a, &a).unwrap(), 0.0);
        assert_eq!(Manhattan.distance(&a, &a).unwrap(), 0.0);

        assert!(Euclidean.distance(&a, &b).unwrap() >= 0.0);
        assert!(Manhattan.distance(&a, &b).unwrap() >= 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Point::new(vec![1.0, 2.0]);
        let b = Point::new(vec![1.0, 2.0, 3.0]);

        assert!(matches!(
            Euclidean.distance(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Manhattan.distance(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_hamming_examples() {
        assert_relative_eq!(Hamming.distance("toned", "roses").unwrap(), 3.0);
        assert_relative_eq!(Hamming.distance("10110", "11010").unwrap(), 2.0);
    }

    #[test]
    fn test_hamming_identical_strings() {
        assert_eq!(Hamming.distance("kolmogorov", "kolmogorov").unwrap(), 0.0);
    }

    #[test]
    fn test_hamming_length_mismatch() {
        assert!(matches!(
            Hamming.distance("short", "longer"),
            Err(Error::LengthMismatch {
                expected: 5,
                found: 6
            })
        ));
    }
}
