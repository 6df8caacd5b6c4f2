//! Clustering algorithms for grouping points.
//!
//! Both algorithms implement the [`Clusterer`] capability: give them a slice
//! of [`Point`](crate::Point)s and get back a list of [`Cluster`]s.
//!
//! ## Algorithms
//!
//! ### K-means
//!
//! The classic centroid algorithm: assign each point to the nearest center,
//! then move each center to the mean of its points. Repeat until no center
//! moves.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - You know k in advance
//!
//! Initialization is random, so runs differ unless a seed is fixed.
//!
//! ### DBSCAN
//!
//! Density-based clustering that discovers non-convex clusters and leaves
//! outliers out as noise. DBSCAN does not require specifying the number of
//! clusters in advance, and is fully deterministic for a fixed input order.
//!
//! ## Usage
//!
//! ```rust
//! use huddle::{Clusterer, Dbscan, KMeans, Point};
//!
//! let points: Vec<Point> = vec![
//!     Point::new(vec![0.0, 0.0]),
//!     Point::new(vec![0.1, 0.1]),
//!     Point::new(vec![10.0, 10.0]),
//!     Point::new(vec![10.1, 10.1]),
//! ];
//!
//! // Centroid clustering with k-means: always exactly k clusters.
//! let clusters = KMeans::new(2).with_seed(42).cluster(&points).unwrap();
//! assert_eq!(clusters.len(), 2);
//! let total: usize = clusters.iter().map(|c| c.len()).sum();
//! assert_eq!(total, points.len());
//!
//! // Density clustering with DBSCAN: cluster count depends on the data.
//! let clusters = Dbscan::new(0.5, 1).cluster(&points).unwrap();
//! assert_eq!(clusters.len(), 2);
//! ```

mod dbscan;
mod kmeans;
mod traits;

pub use dbscan::{Dbscan, DbscanFit};
pub use kmeans::{KMeans, KMeansFit};
pub use traits::Clusterer;

use crate::point::Point;

/// An ordered bag of points produced by a clustering run.
///
/// Members keep their insertion order and duplicates are allowed: a cluster
/// records what the algorithm put into it, nothing more. Clusters are grown
/// by the algorithms and should be treated as frozen once returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cluster {
    points: Vec<Point>,
}

impl Cluster {
    /// Create an empty cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Member at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All members, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether `point` is a member (exact coordinate equality).
    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl IntoIterator for Cluster {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for Cluster {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut cluster = Cluster::new();
        cluster.push(Point::new(vec![2.0]));
        cluster.push(Point::new(vec![0.0]));
        cluster.push(Point::new(vec![1.0]));

        let order: Vec<f64> = cluster.iter().map(|p| p.coords()[0]).collect();
        assert_eq!(order, vec![2.0, 0.0, 1.0]);
        assert_eq!(cluster.get(1), Some(&Point::new(vec![0.0])));
    }

    #[test]
    fn test_duplicates_allowed() {
        let p = Point::new(vec![1.0, 1.0]);
        let mut cluster = Cluster::new();
        cluster.push(p.clone());
        cluster.push(p.clone());

        assert_eq!(cluster.len(), 2);
        assert!(cluster.contains(&p));
    }

    #[test]
    fn test_membership() {
        let cluster: Cluster = vec![Point::new(vec![1.0]), Point::new(vec![2.0])]
            .into_iter()
            .collect();

        assert!(cluster.contains(&Point::new(vec![2.0])));
        assert!(!cluster.contains(&Point::new(vec![3.0])));
        assert!(!cluster.is_empty());
    }
}
