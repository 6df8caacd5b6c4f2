//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters from the data
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Neighborhood radius. Two points are neighbors when
//!   their distance is *strictly less than* ε (a point at exactly ε is not a
//!   neighbor).
//! - **MinPts**: Minimum neighbor count for a point to be "core". The point
//!   itself is not counted among its neighbors.
//! - **Core point**: Has at least MinPts neighbors within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Precompute the symmetric distance matrix (upper triangle mirrored,
//!    zero diagonal).
//! 2. For each unvisited point P, in input order:
//!    - Find its neighbors within ε
//!    - If `|neighbors| < min_pts`, label P noise for now (it may still be
//!      absorbed into a cluster later as a border point)
//!    - Else P is core: start a new cluster and expand through its
//!      neighborhood frontier
//! 3. Expansion walks a FIFO work-list: unvisited frontier members get their
//!    own neighbor query, core members enqueue their not-yet-seen neighbors,
//!    and every frontier member not yet claimed by a cluster joins the
//!    current one. Border points join but never extend the frontier.
//!
//! Every point ends in exactly one cluster or in the noise set, never both.
//! Given a fixed input order the result is fully deterministic.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) for the distance matrix; that precomputation dominates.
//! - **Space**: O(n²) for the matrix. This is the scaling limit; a spatial
//!   index could replace the matrix without changing the contract.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::traits::Clusterer;
use super::Cluster;
use crate::distance::{Euclidean, PointDistance};
use crate::error::{Error, Result};
use crate::point::Point;
use std::collections::VecDeque;

/// DBSCAN clustering algorithm.
///
/// Generic over the distance metric; defaults to [`Euclidean`].
#[derive(Debug, Clone)]
pub struct Dbscan<D = Euclidean> {
    /// Neighborhood radius (strict upper bound on neighbor distance).
    eps: f64,
    /// Minimum neighbor count for core point classification.
    min_pts: usize,
    /// Metric used to fill the distance matrix.
    distance: D,
}

/// Result of a DBSCAN run.
#[derive(Debug, Clone)]
pub struct DbscanFit {
    /// Density-connected clusters, in discovery order.
    pub clusters: Vec<Cluster>,
    /// Points that ended up in no cluster, in input order.
    pub noise: Cluster,
}

impl Dbscan<Euclidean> {
    /// Create a new DBSCAN clusterer with the Euclidean metric.
    ///
    /// # Arguments
    ///
    /// * `eps` - Neighborhood radius; must be positive. Neighbors are
    ///   strictly closer than `eps`.
    /// * `min_pts` - Minimum number of neighbors (excluding the point
    ///   itself) for a core point.
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self {
            eps,
            min_pts,
            distance: Euclidean,
        }
    }
}

impl<D: PointDistance> Dbscan<D> {
    /// Swap in a different distance metric.
    pub fn with_distance<E: PointDistance>(self, distance: E) -> Dbscan<E> {
        Dbscan {
            eps: self.eps,
            min_pts: self.min_pts,
            distance,
        }
    }

    /// Set the neighborhood radius.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum neighbor count for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Run the clustering and return clusters plus the noise set.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyInput`] if `points` is empty.
    /// * [`Error::InvalidParameter`] if `eps` is not positive or `min_pts`
    ///   is zero.
    /// * [`Error::DimensionMismatch`] if the points do not all share one
    ///   dimension.
    pub fn fit(&self, points: &[Point]) -> Result<DbscanFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        if self.eps <= 0.0 || self.eps.is_nan() {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        let matrix = self.distance_matrix(points)?;

        let mut visited = vec![false; n];
        let mut mapped = vec![false; n];
        let mut clusters = Vec::new();

        for index in 0..n {
            if visited[index] {
                continue;
            }
            visited[index] = true;

            let neighbors = matrix.neighbors(index, self.eps);

            // Too sparse to seed a cluster: first-pass noise. The point can
            // still be claimed later as a border point of another cluster.
            if neighbors.len() < self.min_pts {
                continue;
            }

            clusters.push(self.expand_cluster(
                points,
                &matrix,
                index,
                neighbors,
                &mut visited,
                &mut mapped,
            ));
        }

        let noise = (0..n)
            .filter(|&i| !mapped[i])
            .map(|i| points[i].clone())
            .collect();

        Ok(DbscanFit { clusters, noise })
    }

    /// Grow a cluster outward from the core point `seed`.
    ///
    /// The frontier is an explicit FIFO queue with a membership array for
    /// duplicate suppression, so newly discovered neighbors of core points
    /// are processed in the same breadth-first order in which they were
    /// found.
    fn expand_cluster(
        &self,
        points: &[Point],
        matrix: &DistanceMatrix,
        seed: usize,
        neighbors: Vec<usize>,
        visited: &mut [bool],
        mapped: &mut [bool],
    ) -> Cluster {
        let mut cluster = Cluster::new();
        cluster.push(points[seed].clone());
        mapped[seed] = true;

        let mut enqueued = vec![false; points.len()];
        for &id in &neighbors {
            enqueued[id] = true;
        }
        let mut frontier: VecDeque<usize> = neighbors.into();

        while let Some(id) = frontier.pop_front() {
            if !visited[id] {
                visited[id] = true;

                let local = matrix.neighbors(id, self.eps);
                // Core neighbors extend the frontier; border points do not.
                if local.len() >= self.min_pts {
                    for neighbor in local {
                        if !enqueued[neighbor] {
                            enqueued[neighbor] = true;
                            frontier.push_back(neighbor);
                        }
                    }
                }
            }

            // The "already mapped" check keeps every point in at most one
            // cluster, and promotes first-pass noise to border membership.
            if !mapped[id] {
                mapped[id] = true;
                cluster.push(points[id].clone());
            }
        }

        cluster
    }

    /// Fill the full pairwise distance matrix.
    ///
    /// Only the upper triangle is computed; `d(a,b) = d(b,a)` supplies the
    /// rest, and the diagonal is zero.
    fn distance_matrix(&self, points: &[Point]) -> Result<DistanceMatrix> {
        let n = points.len();
        let mut distances = vec![0.0; n * n];

        for row in 0..n {
            for col in (row + 1)..n {
                let d = self.distance.distance(&points[row], &points[col])?;
                distances[row * n + col] = d;
                distances[col * n + row] = d;
            }
        }

        Ok(DistanceMatrix { n, distances })
    }
}

impl<D: PointDistance> Clusterer for Dbscan<D> {
    fn cluster(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self.fit(points)?.clusters)
    }
}

/// Dense symmetric pairwise-distance matrix, row-major.
#[derive(Debug, Clone)]
struct DistanceMatrix {
    n: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    fn get(&self, row: usize, col: usize) -> f64 {
        self.distances[row * self.n + col]
    }

    /// Ids of all points strictly closer than `eps` to `index`, excluding
    /// `index` itself, in ascending id order.
    fn neighbors(&self, index: usize, eps: f64) -> Vec<usize> {
        (0..self.n)
            .filter(|&other| other != index && self.get(index, other) < eps)
            .collect()
    }
}
