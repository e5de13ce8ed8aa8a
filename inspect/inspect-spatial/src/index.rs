//! KD-tree index with batched nearest-neighbor queries.

use kiddo::float::kdtree::KdTree;
use kiddo::SquaredEuclidean;
use nalgebra::Point3;
use rayon::prelude::*;

use crate::{SpatialError, SpatialResult};
use inspect_types::PointCloud;

/// A single nearest-neighbor answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the nearest point in the indexed cloud.
    pub index: usize,
    /// Euclidean distance to that point.
    pub distance: f64,
}

/// A KD-tree built once over a point cloud.
///
/// Queries never mutate the index, so a built index can be shared freely.
#[derive(Debug)]
pub struct PointIndex {
    tree: KdTree<f64, u64, 3, 128, u32>,
    len: usize,
}

impl PointIndex {
    /// Builds an index over the given cloud.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::EmptyCloud`] if the cloud has no points.
    pub fn build(cloud: &PointCloud) -> SpatialResult<Self> {
        if cloud.is_empty() {
            return Err(SpatialError::EmptyCloud);
        }

        let mut tree: KdTree<f64, u64, 3, 128, u32> = KdTree::new();
        for (i, p) in cloud.points.iter().enumerate() {
            tree.add(&[p.x, p.y, p.z], i as u64);
        }

        Ok(Self {
            tree,
            len: cloud.len(),
        })
    }

    /// Returns the number of indexed points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false: an index cannot be built over an empty cloud.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Finds the nearest indexed point to `query`.
    #[must_use]
    pub fn nearest(&self, query: &Point3<f64>) -> Neighbor {
        let found = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y, query.z]);

        #[allow(clippy::cast_possible_truncation)]
        let index = found.item as usize;

        Neighbor {
            index,
            distance: found.distance.sqrt(),
        }
    }

    /// Finds the nearest indexed point for every query in the batch.
    ///
    /// Queries run in parallel; the output order matches the input order.
    #[must_use]
    pub fn nearest_batch(&self, queries: &[Point3<f64>]) -> Vec<Neighbor> {
        queries.par_iter().map(|q| self.nearest(q)).collect()
    }

    /// Returns the nearest-neighbor distance for every query in the batch.
    #[must_use]
    pub fn nearest_distances(&self, queries: &[Point3<f64>]) -> Vec<f64> {
        queries.par_iter().map(|q| self.nearest(q).distance).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng};

    fn grid_cloud() -> PointCloud {
        let mut cloud = PointCloud::new();
        for i in 0..10 {
            for j in 0..10 {
                cloud.push_coords(f64::from(i), f64::from(j), 0.0);
            }
        }
        cloud
    }

    #[test]
    fn test_build_empty_fails() {
        let result = PointIndex::build(&PointCloud::new());
        assert!(matches!(result, Err(SpatialError::EmptyCloud)));
    }

    #[test]
    fn test_nearest_exact_hit() {
        let cloud = grid_cloud();
        let index = PointIndex::build(&cloud).unwrap();

        let hit = index.nearest(&Point3::new(3.0, 7.0, 0.0));
        assert_relative_eq!(hit.distance, 0.0, epsilon = 1e-12);
        assert_relative_eq!(cloud.points[hit.index].x, 3.0);
        assert_relative_eq!(cloud.points[hit.index].y, 7.0);
    }

    #[test]
    fn test_nearest_off_grid() {
        let index = PointIndex::build(&grid_cloud()).unwrap();
        let hit = index.nearest(&Point3::new(3.4, 7.0, 0.0));
        assert_relative_eq!(hit.distance, 0.4, epsilon = 1e-10);
    }

    #[test]
    fn test_batch_matches_single() {
        let index = PointIndex::build(&grid_cloud()).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let queries: Vec<Point3<f64>> = (0..200)
            .map(|_| {
                Point3::new(
                    rng.gen_range(-1.0..10.0),
                    rng.gen_range(-1.0..10.0),
                    rng.gen_range(-0.5..0.5),
                )
            })
            .collect();

        let batch = index.nearest_batch(&queries);
        assert_eq!(batch.len(), queries.len());
        for (q, n) in queries.iter().zip(&batch) {
            let single = index.nearest(q);
            assert_eq!(single.index, n.index);
            assert_relative_eq!(single.distance, n.distance, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_distances_are_euclidean() {
        let cloud = PointCloud::from_positions(&[Point3::new(0.0, 0.0, 0.0)]);
        let index = PointIndex::build(&cloud).unwrap();
        let dists = index.nearest_distances(&[Point3::new(3.0, 4.0, 0.0)]);
        assert_relative_eq!(dists[0], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_len() {
        let index = PointIndex::build(&grid_cloud()).unwrap();
        assert_eq!(index.len(), 100);
        assert!(!index.is_empty());
    }
}
