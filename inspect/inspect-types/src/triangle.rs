//! Triangle type for export meshes.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Export meshes are flat, unindexed lists of these triangles; each vertex
/// carries its own coordinates. Winding is counter-clockwise when viewed
/// from the front.
///
/// # Example
///
/// ```
/// use inspect_types::Triangle;
/// use nalgebra::Point3;
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Creates a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Computes the (unnormalized) face normal via cross product.
    ///
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Computes the unit face normal.
    ///
    /// Returns `None` for degenerate triangles (zero area).
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len = n.norm();
        if len > 0.0 {
            Some(n / len)
        } else {
            None
        }
    }

    /// Computes the triangle's area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        0.5 * self.normal_unnormalized().norm()
    }

    /// Returns true if the triangle's area is at or below `epsilon`.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.area() <= epsilon
    }

    /// Computes the centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_area() {
        assert_relative_eq!(unit_right_triangle().area(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_points_up() {
        let n = unit_right_triangle().normal().unwrap();
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_has_no_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(tri.normal().is_none());
        assert!(tri.is_degenerate(1e-6));
        assert_relative_eq!(tri.area(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid() {
        let c = unit_right_triangle().centroid();
        assert_relative_eq!(c.x, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.y, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-12);
    }
}
