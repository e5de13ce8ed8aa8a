//! Convex hull triangulation.

use chull::ConvexHullWrapper;
use nalgebra::Point3;
use tracing::debug;

use crate::{ReconstructError, ReconstructResult, MIN_POINTS};
use inspect_types::{PointCloud, Triangle};

/// Triangulates the convex hull of a point cloud.
///
/// Returns a flat triangle list. The hull encloses the whole cloud, so
/// interior cavities and concave features are lost - use
/// [`crate::delaunay_2_5d`] when the footprint matters.
///
/// # Errors
///
/// Returns [`ReconstructError::InsufficientPoints`] for fewer than 4 points
/// and [`ReconstructError::HullFailed`] when the hull cannot be built
/// (e.g. all points coplanar).
pub fn convex_hull(cloud: &PointCloud) -> ReconstructResult<Vec<Triangle>> {
    if cloud.len() < MIN_POINTS {
        return Err(ReconstructError::InsufficientPoints {
            required: MIN_POINTS,
            actual: cloud.len(),
        });
    }

    let rows: Vec<Vec<f64>> = cloud.points.iter().map(|p| vec![p.x, p.y, p.z]).collect();
    let hull =
        ConvexHullWrapper::try_new(&rows, None).map_err(|_| ReconstructError::HullFailed)?;

    let (vertices, indices) = hull.vertices_indices();

    let triangles: Vec<Triangle> = indices
        .chunks(3)
        .map(|tri| {
            Triangle::new(
                vertex_point(&vertices[tri[0]]),
                vertex_point(&vertices[tri[1]]),
                vertex_point(&vertices[tri[2]]),
            )
        })
        .collect();

    debug!(triangle_count = triangles.len(), "convex hull built");
    Ok(triangles)
}

fn vertex_point(coords: &[f64]) -> Point3<f64> {
    Point3::new(coords[0], coords[1], coords[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspect_synth::{generate_surface, ShapeKind, SurfaceSpec};

    #[test]
    fn test_tetrahedron_hull() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);

        let triangles = convex_hull(&cloud).unwrap();
        assert_eq!(triangles.len(), 4);
        for tri in &triangles {
            assert!(tri.area() > 0.0);
        }
    }

    #[test]
    fn test_interior_points_ignored() {
        let mut cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ]);
        // Strictly inside the tetrahedron.
        cloud.push_coords(0.2, 0.2, 0.2);

        let triangles = convex_hull(&cloud).unwrap();
        assert_eq!(triangles.len(), 4);
    }

    #[test]
    fn test_cylinder_hull_non_empty() {
        let cloud = generate_surface(
            &SurfaceSpec::new(ShapeKind::Cylinder)
                .with_count(2500)
                .with_radius_mm(10.0)
                .with_height_mm(20.0)
                .with_seed(31),
        )
        .unwrap();

        let triangles = convex_hull(&cloud).unwrap();
        assert!(!triangles.is_empty());
        for tri in &triangles {
            assert!(!tri.is_degenerate(1e-6));
        }
    }

    #[test]
    fn test_too_few_points() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);

        let result = convex_hull(&cloud);
        assert!(matches!(
            result,
            Err(ReconstructError::InsufficientPoints {
                required: 4,
                actual: 3
            })
        ));
    }
}
