//! K-means and DBSCAN on a simple 2D dataset.

use huddle::{Cluster, Clusterer, Dbscan, KMeans, Point};

fn print_clusters(clusters: &[Cluster]) {
    for (i, cluster) in clusters.iter().enumerate() {
        let members: Vec<String> = cluster.iter().map(Point::to_string).collect();
        println!("  cluster {}: {}", i, members.join(" "));
    }
}

fn main() {
    // Three well-separated groups in 2D, plus one outlier.
    let points: Vec<Point> = vec![
        // Group A (near origin)
        Point::new(vec![0.0, 0.0]),
        Point::new(vec![0.1, 0.2]),
        Point::new(vec![0.2, 0.1]),
        Point::new(vec![-0.1, 0.1]),
        // Group B (near (5, 5))
        Point::new(vec![5.0, 5.0]),
        Point::new(vec![5.1, 4.9]),
        Point::new(vec![4.9, 5.1]),
        Point::new(vec![5.2, 5.2]),
        // Group C (near (10, 0))
        Point::new(vec![10.0, 0.0]),
        Point::new(vec![10.1, 0.1]),
        Point::new(vec![9.9, -0.1]),
        Point::new(vec![10.2, 0.2]),
        // Outlier
        Point::new(vec![20.0, 20.0]),
    ];

    // --- K-means (k=3) ---
    let kmeans = KMeans::new(3).with_seed(42);
    let clusters = kmeans.cluster(&points).unwrap();
    println!("=== K-means (k=3) ===");
    print_clusters(&clusters);

    // --- DBSCAN (eps=1.0, min_pts=2) ---
    let dbscan = Dbscan::new(1.0, 2);
    let fit = dbscan.fit(&points).unwrap();
    println!("\n=== DBSCAN (eps=1.0, min_pts=2) ===");
    print_clusters(&fit.clusters);
    let noise: Vec<String> = fit.noise.iter().map(Point::to_string).collect();
    println!("  noise: {}", noise.join(" "));
}
