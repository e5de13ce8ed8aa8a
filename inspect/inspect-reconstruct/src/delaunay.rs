//! 2.5D Delaunay triangulation.

use tracing::debug;

use crate::{ReconstructError, ReconstructResult, MIN_POINTS};
use inspect_types::{PointCloud, Triangle};

/// Triangles with area at or below this threshold are discarded as
/// degenerate (mm^2).
pub const MIN_TRIANGLE_AREA: f64 = 1e-6;

/// Triangulates a point cloud by projecting to the XY plane, running a 2D
/// Delaunay triangulation, and lifting each triangle back to the original
/// 3D vertex coordinates.
///
/// Unlike the convex hull this keeps non-convex footprints intact, which
/// suits parts whose outline matters; true overhangs still cannot be
/// represented because the projection collapses them.
///
/// # Errors
///
/// Returns [`ReconstructError::InsufficientPoints`] for fewer than 4 points
/// and [`ReconstructError::NoValidTriangles`] when every candidate triangle
/// fails the area filter.
pub fn delaunay_2_5d(cloud: &PointCloud) -> ReconstructResult<Vec<Triangle>> {
    if cloud.len() < MIN_POINTS {
        return Err(ReconstructError::InsufficientPoints {
            required: MIN_POINTS,
            actual: cloud.len(),
        });
    }

    let projected: Vec<delaunator::Point> = cloud
        .points
        .iter()
        .map(|p| delaunator::Point { x: p.x, y: p.y })
        .collect();

    let triangulation = delaunator::triangulate(&projected);

    let mut triangles = Vec::with_capacity(triangulation.triangles.len() / 3);
    let mut discarded = 0usize;

    for tri in triangulation.triangles.chunks(3) {
        let candidate = Triangle::new(
            cloud.points[tri[0]],
            cloud.points[tri[1]],
            cloud.points[tri[2]],
        );
        if candidate.area() > MIN_TRIANGLE_AREA {
            triangles.push(candidate);
        } else {
            discarded += 1;
        }
    }

    if triangles.is_empty() {
        return Err(ReconstructError::NoValidTriangles);
    }

    debug!(
        triangle_count = triangles.len(),
        discarded, "2.5D Delaunay triangulation built"
    );
    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspect_synth::{generate_surface, ShapeKind, SurfaceSpec};
    use nalgebra::Point3;

    #[test]
    fn test_square_triangulates() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.5),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ]);

        let triangles = delaunay_2_5d(&cloud).unwrap();
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn test_triangles_lifted_to_3d() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(1.0, 1.0, 3.0),
            Point3::new(0.0, 1.0, 4.0),
        ]);

        let triangles = delaunay_2_5d(&cloud).unwrap();

        // Every output vertex must be one of the original 3D points, z
        // included.
        for tri in &triangles {
            for v in [tri.v0, tri.v1, tri.v2] {
                assert!(cloud.points.iter().any(|p| (*p - v).norm() < 1e-12));
            }
        }
    }

    #[test]
    fn test_cylinder_cloud_triangulates() {
        let cloud = generate_surface(
            &SurfaceSpec::new(ShapeKind::Cylinder)
                .with_count(2500)
                .with_radius_mm(10.0)
                .with_height_mm(20.0)
                .with_seed(41),
        )
        .unwrap();

        let triangles = delaunay_2_5d(&cloud).unwrap();
        assert!(!triangles.is_empty());
        for tri in &triangles {
            assert!(tri.area() > MIN_TRIANGLE_AREA);
        }
    }

    #[test]
    fn test_too_few_points() {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]);
        let result = delaunay_2_5d(&cloud);
        assert!(matches!(
            result,
            Err(ReconstructError::InsufficientPoints { .. })
        ));
    }

    #[test]
    fn test_collinear_points_yield_no_triangles() {
        let cloud: PointCloud = (0..6)
            .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
            .collect();
        let result = delaunay_2_5d(&cloud);
        assert!(matches!(result, Err(ReconstructError::NoValidTriangles)));
    }
}
