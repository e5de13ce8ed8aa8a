//! Caller-owned configuration for the inspection core.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration consumed by the inspection core.
///
/// Constructed once at the application boundary and passed explicitly into
/// each entry point; there is no global mutable configuration. Parameter
/// structs such as `IcpParams` provide `from_config` constructors so callers
/// can derive per-operation settings from this one value.
///
/// Serial port settings (baud rate, timeout) belong to the external
/// acquisition collaborator and are deliberately absent.
///
/// # Example
///
/// ```
/// use inspect_types::InspectionConfig;
///
/// let config = InspectionConfig::default()
///     .with_tolerance_mm(1.5)
///     .with_icp_max_iterations(100);
///
/// assert!((config.tolerance_mm - 1.5).abs() < 1e-12);
/// assert_eq!(config.icp_max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionConfig {
    /// Maximum permitted deviation before a point is defective (mm).
    pub tolerance_mm: f64,
    /// Maximum number of ICP iterations.
    pub icp_max_iterations: u32,
    /// ICP convergence threshold on the change in mean distance.
    pub icp_convergence: f64,
    /// Point count for synthetic surface generation.
    pub synthetic_point_count: usize,
    /// Number of vertices sampled when loading an external mesh.
    pub mesh_sample_count: usize,
    /// Default shape radius for synthetic surfaces (mm).
    pub default_radius_mm: f64,
    /// Default cylinder height for synthetic surfaces (mm).
    pub default_height_mm: f64,
    /// Distance from the sensor to the empty turntable (mm).
    pub sensor_offset_mm: f64,
    /// Path of the persisted reference cloud.
    pub reference_path: PathBuf,
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            tolerance_mm: 3.0,
            icp_max_iterations: 50,
            icp_convergence: 1e-6,
            synthetic_point_count: 2500,
            mesh_sample_count: 8000,
            default_radius_mm: 10.0,
            default_height_mm: 20.0,
            sensor_offset_mm: 103.44,
            reference_path: PathBuf::from("reference.xyz"),
        }
    }
}

impl InspectionConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inspection tolerance in millimeters.
    #[must_use]
    pub fn with_tolerance_mm(mut self, tolerance_mm: f64) -> Self {
        self.tolerance_mm = tolerance_mm;
        self
    }

    /// Sets the maximum number of ICP iterations.
    #[must_use]
    pub fn with_icp_max_iterations(mut self, max_iterations: u32) -> Self {
        self.icp_max_iterations = max_iterations;
        self
    }

    /// Sets the ICP convergence threshold.
    #[must_use]
    pub fn with_icp_convergence(mut self, convergence: f64) -> Self {
        self.icp_convergence = convergence;
        self
    }

    /// Sets the synthetic surface point count.
    #[must_use]
    pub fn with_synthetic_point_count(mut self, count: usize) -> Self {
        self.synthetic_point_count = count;
        self
    }

    /// Sets the mesh vertex sample count.
    #[must_use]
    pub fn with_mesh_sample_count(mut self, count: usize) -> Self {
        self.mesh_sample_count = count;
        self
    }

    /// Sets the sensor-to-table calibration offset in millimeters.
    #[must_use]
    pub fn with_sensor_offset_mm(mut self, offset_mm: f64) -> Self {
        self.sensor_offset_mm = offset_mm;
        self
    }

    /// Sets the reference file path.
    #[must_use]
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }
}
