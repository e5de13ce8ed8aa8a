//! Rigid transformation type for registration results.

use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};

use inspect_types::PointCloud;

/// A rigid transformation: proper rotation plus translation.
///
/// Applied as rotate-then-translate. Chained transforms accumulate by
/// matrix composition; [`RigidTransform::to_matrix4`] yields the equivalent
/// 4x4 homogeneous matrix.
///
/// # Example
///
/// ```
/// use inspect_registration::RigidTransform;
/// use nalgebra::{Point3, UnitQuaternion, Vector3};
/// use std::f64::consts::PI;
///
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), PI / 2.0);
/// let transform = RigidTransform::new(rotation, Vector3::new(1.0, 0.0, 0.0));
///
/// let p = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
/// assert!((p.x - 1.0).abs() < 1e-10);
/// assert!((p.y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    /// Rotation as a unit quaternion (determinant +1 by construction).
    pub rotation: UnitQuaternion<f64>,
    /// Translation vector.
    pub translation: Vector3<f64>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    /// Creates a new rigid transform from rotation and translation.
    #[must_use]
    pub const fn new(rotation: UnitQuaternion<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates an identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Creates a transform with only translation.
    #[must_use]
    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    /// Creates a transform with only rotation.
    #[must_use]
    pub fn from_rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Transforms a 3D point: rotate, then translate.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation * point.coords + self.translation)
    }

    /// Transforms a direction vector (rotation only).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }

    /// Applies this transform to every point of a cloud, producing a new cloud.
    #[must_use]
    pub fn transform_cloud(&self, cloud: &PointCloud) -> PointCloud {
        cloud
            .points
            .iter()
            .map(|p| self.transform_point(p))
            .collect()
    }

    /// Composes this transform with another (`self * other`).
    ///
    /// The result applies `other` first, then `self` - the same semantics
    /// as multiplying the corresponding homogeneous matrices.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.translation + self.rotation * other.translation,
        }
    }

    /// Computes the inverse of this transform.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv_rotation = self.rotation.inverse();
        Self {
            rotation: inv_rotation,
            translation: inv_rotation * (-self.translation),
        }
    }

    /// Converts to a 4x4 homogeneous transformation matrix.
    #[must_use]
    pub fn to_matrix4(&self) -> Matrix4<f64> {
        let mut mat = Matrix4::identity();

        let rot = self.rotation.to_rotation_matrix();
        for i in 0..3 {
            for j in 0..3 {
                mat[(i, j)] = rot[(i, j)];
            }
        }

        mat[(0, 3)] = self.translation.x;
        mat[(1, 3)] = self.translation.y;
        mat[(2, 3)] = self.translation.z;

        mat
    }

    /// Returns true if this transform is approximately the identity.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.rotation.angle().abs() < epsilon && self.translation.norm() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_identity() {
        let transform = RigidTransform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(transform.transform_point(&p).coords, p.coords, epsilon = 1e-12);
        assert!(transform.is_identity(1e-12));
    }

    #[test]
    fn test_translation_only() {
        let t = Vector3::new(1.0, 2.0, 3.0);
        let transform = RigidTransform::from_translation(t);
        let result = transform.transform_point(&Point3::origin());
        assert_relative_eq!(result.coords, t, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_90_degrees_z() {
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), PI / 2.0);
        let transform = RigidTransform::from_rotation(rotation);
        let result = transform.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_compose_matches_matrix_product() {
        let a = RigidTransform::new(
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), PI / 6.0),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let b = RigidTransform::new(
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI / 4.0),
            Vector3::new(-2.0, 0.5, 1.0),
        );

        let composed = a.compose(&b);
        let matrix_product = a.to_matrix4() * b.to_matrix4();

        assert_relative_eq!(composed.to_matrix4(), matrix_product, epsilon = 1e-10);
    }

    #[test]
    fn test_compose_applies_other_first() {
        let rotate = RigidTransform::from_rotation(UnitQuaternion::from_axis_angle(
            &Vector3::z_axis(),
            PI / 2.0,
        ));
        let translate = RigidTransform::from_translation(Vector3::new(1.0, 0.0, 0.0));

        // translate then rotate: (0,0,0) -> (1,0,0) -> (0,1,0)
        let composed = rotate.compose(&translate);
        let result = composed.transform_point(&Point3::origin());
        assert_relative_eq!(result.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_inverse_round_trip() {
        let transform = RigidTransform::new(
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI / 3.0),
            Vector3::new(4.0, -1.0, 2.0),
        );

        let p = Point3::new(1.0, 2.0, 3.0);
        let back = transform.inverse().transform_point(&transform.transform_point(&p));
        assert_relative_eq!(back.coords, p.coords, epsilon = 1e-10);
    }

    #[test]
    fn test_transform_cloud() {
        let cloud = PointCloud::from_positions(&[Point3::origin(), Point3::new(1.0, 0.0, 0.0)]);
        let transform = RigidTransform::from_translation(Vector3::new(0.0, 5.0, 0.0));
        let moved = transform.transform_cloud(&cloud);

        assert_eq!(moved.len(), 2);
        assert_relative_eq!(moved.points[0].y, 5.0, epsilon = 1e-12);
        assert_relative_eq!(moved.points[1].x, 1.0, epsilon = 1e-12);
        // Input is untouched.
        assert_relative_eq!(cloud.points[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_matrix4_translation_column() {
        let transform = RigidTransform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let mat = transform.to_matrix4();
        assert_relative_eq!(mat[(0, 3)], 1.0);
        assert_relative_eq!(mat[(1, 3)], 2.0);
        assert_relative_eq!(mat[(2, 3)], 3.0);
        assert_relative_eq!(mat[(3, 3)], 1.0);
    }
}
