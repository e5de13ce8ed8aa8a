//! Parametric geometric defects.

use inspect_types::PointCloud;
use nalgebra::Point3;

/// Half-angle of the wedge removed by [`DefectKind::LateralHole`] (radians).
const LATERAL_WEDGE_HALF_ANGLE: f64 = 0.3;
/// Half-height of the band removed by [`DefectKind::LateralHole`] (mm).
const LATERAL_BAND_HALF_HEIGHT: f64 = 3.0;
/// Squared radius of the region removed by [`DefectKind::TopHole`] (mm^2).
const TOP_HOLE_RADIUS_SQ: f64 = 9.0;
/// Points at or below this X survive [`DefectKind::Broken`] removal (mm).
const BROKEN_X_THRESHOLD: f64 = -2.0;

/// The closed set of geometric defects available for simulation.
///
/// Dispatch is an exhaustive `match`; adding a variant forces every
/// consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefectKind {
    /// No mutation; the cloud is returned unchanged.
    None,
    /// Material missing from an angular wedge of the wall near z = 0.
    LateralHole,
    /// Material missing near the axis at the top cap.
    TopHole,
    /// Part compressed along Z to half height.
    Dented,
    /// Part stretched along Z to 1.5x height.
    Stretched,
    /// Everything above the median Z removed.
    MissingCap,
    /// One side sheared off below a fixed X threshold.
    Broken,
}

impl DefectKind {
    /// All defect kinds, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::LateralHole,
        Self::TopHole,
        Self::Dented,
        Self::Stretched,
        Self::MissingCap,
        Self::Broken,
    ];
}

/// Applies a defect to a cloud, returning a new cloud.
///
/// The input is never mutated. Removal defects shrink the cloud; scaling
/// defects preserve the point count.
///
/// # Example
///
/// ```
/// use inspect_synth::{apply_defect, generate_surface, DefectKind, ShapeKind, SurfaceSpec};
///
/// let cloud = generate_surface(&SurfaceSpec::new(ShapeKind::Cylinder).with_seed(5)).unwrap();
/// let dented = apply_defect(&cloud, DefectKind::Dented);
///
/// assert_eq!(dented.len(), cloud.len());
/// assert!(dented.points.iter().zip(&cloud.points).all(|(d, o)| d.z == o.z * 0.5));
/// ```
#[must_use]
pub fn apply_defect(cloud: &PointCloud, defect: DefectKind) -> PointCloud {
    match defect {
        DefectKind::None => cloud.clone(),

        DefectKind::LateralHole => filter(cloud, |p| {
            let angle = p.y.atan2(p.x);
            !(angle.abs() < LATERAL_WEDGE_HALF_ANGLE
                && p.z > -LATERAL_BAND_HALF_HEIGHT
                && p.z < LATERAL_BAND_HALF_HEIGHT)
        }),

        DefectKind::TopHole => {
            filter(cloud, |p| !(p.x * p.x + p.y * p.y < TOP_HOLE_RADIUS_SQ && p.z > 0.0))
        }

        DefectKind::Dented => scale_z(cloud, 0.5),

        DefectKind::Stretched => scale_z(cloud, 1.5),

        DefectKind::MissingCap => {
            let cutoff = median_z(cloud);
            filter(cloud, |p| p.z < cutoff)
        }

        DefectKind::Broken => filter(cloud, |p| p.x > BROKEN_X_THRESHOLD),
    }
}

fn filter(cloud: &PointCloud, keep: impl Fn(&Point3<f64>) -> bool) -> PointCloud {
    cloud.points.iter().copied().filter(keep).collect()
}

fn scale_z(cloud: &PointCloud, factor: f64) -> PointCloud {
    cloud
        .points
        .iter()
        .map(|p| Point3::new(p.x, p.y, p.z * factor))
        .collect()
}

/// Median of the Z coordinates; the mean of the two middle values when the
/// count is even. Returns 0.0 for an empty cloud.
fn median_z(cloud: &PointCloud) -> f64 {
    if cloud.is_empty() {
        return 0.0;
    }

    let mut zs: Vec<f64> = cloud.points.iter().map(|p| p.z).collect();
    zs.sort_by(f64::total_cmp);

    let mid = zs.len() / 2;
    if zs.len() % 2 == 0 {
        (zs[mid - 1] + zs[mid]) / 2.0
    } else {
        zs[mid]
    }
}
