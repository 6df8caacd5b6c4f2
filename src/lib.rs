//! Points, distance metrics, and clustering.
//!
//! `huddle` is a small geometric/statistical toolkit: n-dimensional points,
//! pluggable distance metrics, and two unsupervised clustering algorithms.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-means (random seeding, Lloyd iterations, exactly `k` clusters)
//! - DBSCAN (density clustering with an explicit noise set)
//!
//! Distance metrics live in [`distance`]: [`Euclidean`] and [`Manhattan`]
//! over points, [`Hamming`] over equal-length strings. Both clusterers
//! accept any [`PointDistance`] implementation.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod distance;
pub mod error;
pub mod import;
pub mod point;

pub use cluster::{Cluster, Clusterer, Dbscan, DbscanFit, KMeans, KMeansFit};
pub use distance::{Euclidean, Hamming, Manhattan, PointDistance, SymbolDistance};
pub use error::{Error, Result};
pub use point::{Centroid, Point};
