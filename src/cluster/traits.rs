use super::Cluster;
use crate::error::Result;
use crate::point::Point;

/// Common interface for clustering algorithms.
///
/// An implementation partitions the input into clusters. How many clusters
/// come back is the algorithm's business: k-means returns exactly `k`,
/// DBSCAN returns as many density-connected groups as it finds (points in no
/// returned cluster are noise).
pub trait Clusterer {
    /// Group `points` into clusters.
    fn cluster(&self, points: &[Point]) -> Result<Vec<Cluster>>;
}
