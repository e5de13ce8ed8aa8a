//! Point cloud data structure.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A collection of 3D points sampling a physical surface.
///
/// Coordinates are in millimeters and must be finite. Point order carries no
/// meaning. Operations elsewhere in the workspace produce new clouds rather
/// than mutating shared ones; the only in-place update is the per-iteration
/// step inside ICP, which works on its own copy.
///
/// # Example
///
/// ```
/// use inspect_types::PointCloud;
/// use nalgebra::Point3;
///
/// let cloud = PointCloud::from_positions(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ]);
///
/// assert_eq!(cloud.len(), 2);
/// let centroid = cloud.centroid().unwrap();
/// assert!((centroid.x - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// The points in this cloud.
    pub points: Vec<Point3<f64>>,
}

impl PointCloud {
    /// Creates an empty point cloud.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a point cloud with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Creates a point cloud from a slice of positions.
    #[must_use]
    pub fn from_positions(positions: &[Point3<f64>]) -> Self {
        Self {
            points: positions.to_vec(),
        }
    }

    /// Returns the number of points in the cloud.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point to the cloud.
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    /// Adds a point with the given coordinates.
    pub fn push_coords(&mut self, x: f64, y: f64, z: f64) {
        self.points.push(Point3::new(x, y, z));
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns the centroid (center of mass) of the cloud.
    ///
    /// Returns `None` if the cloud is empty.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.points.is_empty() {
            return None;
        }

        let sum: Vector3<f64> = self.points.iter().map(|p| p.coords).sum();

        #[allow(clippy::cast_precision_loss)]
        let centroid = sum / self.points.len() as f64;

        Some(Point3::from(centroid))
    }

    /// Returns the axis-aligned bounds of the cloud as `(min, max)`.
    ///
    /// Returns `None` if the cloud is empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;

        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }

    /// Translates all points by the given offset.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for point in &mut self.points {
            *point += offset;
        }
    }

    /// Returns true if every coordinate in the cloud is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
    }
}

impl FromIterator<Point3<f64>> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point3<f64>> for PointCloud {
    fn extend<I: IntoIterator<Item = Point3<f64>>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
