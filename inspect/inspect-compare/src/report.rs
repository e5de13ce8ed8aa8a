//! Inspection result types.

use serde::{Deserialize, Serialize};

/// Two-class tolerance label for a single point.
///
/// Retained per point so that downstream rendering can color-code the
/// clouds without recomputing distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointLabel {
    /// Deviation within tolerance.
    Within,
    /// Deviation beyond tolerance; the point is defective.
    OutOfTolerance,
}

/// Complete outcome of a reference/test comparison.
///
/// The full per-point distance arrays and labels are kept for both
/// directions, so reporting and visualization never need to re-query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Out-of-tolerance test points (test cloud queried against reference).
    pub defect_count_test: usize,
    /// Out-of-tolerance reference points (reference queried against test).
    pub defect_count_ref: usize,
    /// Total out-of-tolerance points across both directions.
    pub defect_count: usize,
    /// Percentage of the combined point count that is out of tolerance.
    pub defect_percentage: f64,
    /// Mean of the combined distances (mm).
    pub mean_distance: f64,
    /// Maximum of the combined distances (mm).
    pub max_distance: f64,
    /// Population standard deviation of the combined distances (mm).
    pub std_distance: f64,
    /// Residual mean error reported by ICP, or 0.0 when alignment was
    /// skipped.
    pub icp_residual: f64,
    /// False when ICP exhausted its iteration limit - the comparison is
    /// still valid but alignment quality is degraded. True when ICP was
    /// skipped.
    pub icp_converged: bool,
    /// True when no point in either direction exceeded the tolerance.
    pub passed: bool,
    /// Distance of every test point to its nearest reference point (mm).
    pub dist_test: Vec<f64>,
    /// Distance of every reference point to its nearest test point (mm).
    pub dist_ref: Vec<f64>,
    /// Tolerance label for every test point.
    pub labels_test: Vec<PointLabel>,
    /// Tolerance label for every reference point.
    pub labels_ref: Vec<PointLabel>,
}
