//! Kabsch algorithm for optimal rigid transform estimation.
//!
//! Given paired point sets, finds the rotation and translation minimizing
//! the root mean square deviation between them.

use nalgebra::{Matrix3, Point3, Rotation3, UnitQuaternion, Vector3};

use crate::{RegistrationError, RegistrationResult, RigidTransform};

/// Computes the optimal rigid transform aligning `source` onto `target`.
///
/// Both slices must be the same length; `source[i]` corresponds to
/// `target[i]`. The rotation is derived from the SVD of the cross-covariance
/// matrix of the centered point sets and corrected for reflection so its
/// determinant is exactly +1.
///
/// # Errors
///
/// Returns an error if either set is empty, the lengths differ, or the SVD
/// fails on a degenerate configuration.
///
/// # Example
///
/// ```
/// use inspect_registration::estimate_rigid_transform;
/// use nalgebra::Point3;
///
/// let source = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let target: Vec<_> = source
///     .iter()
///     .map(|p| Point3::new(p.x + 1.0, p.y + 2.0, p.z + 3.0))
///     .collect();
///
/// let transform = estimate_rigid_transform(&source, &target).unwrap();
/// let aligned = transform.transform_point(&source[0]);
/// assert!((aligned.coords - target[0].coords).norm() < 1e-10);
/// ```
pub fn estimate_rigid_transform(
    source: &[Point3<f64>],
    target: &[Point3<f64>],
) -> RegistrationResult<RigidTransform> {
    if source.is_empty() || target.is_empty() {
        return Err(RegistrationError::EmptyCloud);
    }
    if source.len() != target.len() {
        return Err(RegistrationError::LengthMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    let source_centroid = centroid(source);
    let target_centroid = centroid(target);

    // Cross-covariance H = sum((s_i - c_s)(t_i - c_t)^T)
    let mut h = Matrix3::zeros();
    for (s, t) in source.iter().zip(target.iter()) {
        h += (s.coords - source_centroid) * (t.coords - target_centroid).transpose();
    }

    let svd = h.svd(true, true);
    let u = svd.u.ok_or(RegistrationError::SvdFailed)?;
    let v_t = svd.v_t.ok_or(RegistrationError::SvdFailed)?;

    // R = V * U^T, with the last column of V flipped when the product
    // would be a reflection, so det(R) is exactly +1.
    let mut rotation_matrix = v_t.transpose() * u.transpose();
    if rotation_matrix.determinant() < 0.0 {
        let mut v = v_t.transpose();
        for i in 0..3 {
            v[(i, 2)] = -v[(i, 2)];
        }
        rotation_matrix = v * u.transpose();
    }

    let rotation =
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation_matrix));

    let translation = target_centroid - rotation * source_centroid;

    Ok(RigidTransform::new(rotation, translation))
}

fn centroid(points: &[Point3<f64>]) -> Vector3<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    sum / n
}
