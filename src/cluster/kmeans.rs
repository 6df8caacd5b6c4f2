//! K-means: centroid-based partitioning into exactly `k` clusters.
//!
//! # The Algorithm (Lloyd's iteration)
//!
//! 1. **Initialize**: pick `k` centers by sampling input points uniformly at
//!    random (with replacement, so duplicate centers are possible when `k`
//!    approaches the population size).
//! 2. **Assign**: give every point to the cluster whose center is strictly
//!    closest. Exact ties go to the first center in enumeration order.
//! 3. **Update**: move every center to the component-wise mean of its
//!    members. A cluster that received no members keeps its previous center
//!    (a mean over zero points is undefined).
//! 4. Repeat from 2 until no center changed (exact coordinate equality), or
//!    the iteration cap is hit.
//!
//! Memberships are rebuilt from scratch every pass; nothing accumulates
//! across iterations.
//!
//! ## Termination
//!
//! Convergence by exact floating-point equality is the baseline contract but
//! is not mathematically guaranteed on degenerate inputs, so the iteration
//! count is capped (default 300, configurable via
//! [`with_max_iter`](KMeans::with_max_iter)).
//!
//! ## Complexity
//!
//! O(iterations · n · k) distance evaluations, O(n + k) memory per pass.

use super::traits::Clusterer;
use super::Cluster;
use crate::distance::{Euclidean, PointDistance};
use crate::error::{Error, Result};
use crate::point::{Centroid, Point};
use rand::prelude::*;

const DEFAULT_MAX_ITER: usize = 300;

/// K-means clustering algorithm.
///
/// Generic over the distance metric; defaults to [`Euclidean`].
#[derive(Debug, Clone)]
pub struct KMeans<D = Euclidean> {
    /// Number of clusters.
    k: usize,
    /// Metric used for the assignment step.
    distance: D,
    /// Safety bound on Lloyd iterations.
    max_iter: usize,
    /// Seed for center initialization; `None` draws from OS entropy.
    seed: Option<u64>,
}

/// Result of a k-means run.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Exactly `k` clusters, some possibly empty.
    pub clusters: Vec<Cluster>,
    /// Final center of each cluster, index-aligned with `clusters`.
    pub centroids: Vec<Centroid>,
    /// Number of assignment/update passes performed.
    pub iterations: usize,
    /// Whether the run reached a fixed point before the iteration cap.
    pub converged: bool,
}

impl KMeans<Euclidean> {
    /// Create a new k-means clusterer with the Euclidean metric.
    ///
    /// # Arguments
    ///
    /// * `k` - Number of clusters to produce. The input must contain at
    ///   least `k` points.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            distance: Euclidean,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
        }
    }
}

impl<D: PointDistance> KMeans<D> {
    /// Swap in a different distance metric.
    pub fn with_distance<E: PointDistance>(self, distance: E) -> KMeans<E> {
        KMeans {
            k: self.k,
            distance,
            max_iter: self.max_iter,
            seed: self.seed,
        }
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fix the random seed for center initialization.
    ///
    /// Unseeded runs sample from OS entropy and differ between invocations;
    /// a seeded run is fully deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the clustering and return clusters, centers, and run statistics.
    ///
    /// # Errors
    ///
    /// * [`Error::EmptyInput`] if `points` is empty.
    /// * [`Error::InvalidParameter`] if `k` or `max_iter` is zero.
    /// * [`Error::InvalidClusterCount`] if `k` exceeds the number of points.
    /// * [`Error::DimensionMismatch`] if the points do not all share one
    ///   dimension.
    pub fn fit(&self, points: &[Point]) -> Result<KMeansFit> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        if self.k > points.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: points.len(),
            });
        }

        let mut rng: StdRng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Sample initial centers uniformly, with replacement.
        let mut centers: Vec<Point> = (0..self.k)
            .map(|_| points[rng.random_range(0..points.len())].clone())
            .collect();

        let mut clusters: Vec<Cluster> = vec![Cluster::new(); self.k];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;

            // Assignment pass, from scratch.
            clusters = vec![Cluster::new(); self.k];
            for point in points {
                let target = self.nearest_center(point, &centers)?;
                clusters[target].push(point.clone());
            }

            // Update pass: every non-empty cluster moves its center to the
            // member mean; empty clusters keep their previous center.
            let mut changed = false;
            for (cluster, center) in clusters.iter().zip(centers.iter_mut()) {
                if cluster.is_empty() {
                    continue;
                }

                let mean = Centroid::mean(cluster.points())?.into_point();
                if mean != *center {
                    *center = mean;
                    changed = true;
                }
            }

            if !changed {
                converged = true;
                break;
            }
        }

        Ok(KMeansFit {
            clusters,
            centroids: centers.into_iter().map(Centroid::from_point).collect(),
            iterations,
            converged,
        })
    }

    /// Index of the center strictly closest to `point`.
    ///
    /// Exact ties keep the earlier center: only a strictly smaller distance
    /// replaces the current best.
    fn nearest_center(&self, point: &Point, centers: &[Point]) -> Result<usize> {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;

        for (index, center) in centers.iter().enumerate() {
            let d = self.distance.distance(point, center)?;
            if d < best_distance {
                best = index;
                best_distance = d;
            }
        }

        Ok(best)
    }
}

impl<D: PointDistance> Clusterer for KMeans<D> {
    fn cluster(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self.fit(points)?.clusters)
    }
}
