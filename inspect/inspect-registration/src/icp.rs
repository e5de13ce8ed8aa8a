//! Iterative Closest Point alignment.
//!
//! ICP iteratively refines the alignment between two point clouds by:
//! 1. Finding nearest-neighbor correspondences in the target
//! 2. Testing convergence on the mean correspondence distance
//! 3. Estimating the optimal rigid transform for those correspondences
//! 4. Applying the transform and repeating
//!
//! Nearest-neighbor search uses the shared KD-tree index, built once over
//! the target cloud.

use nalgebra::Point3;
use tracing::{debug, warn};

use crate::kabsch::estimate_rigid_transform;
use crate::{RegistrationError, RegistrationResult, RigidTransform};
use inspect_spatial::PointIndex;
use inspect_types::{InspectionConfig, PointCloud};

/// Parameters for ICP alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcpParams {
    /// Maximum number of iterations (default: 50).
    pub max_iterations: u32,
    /// Convergence threshold on the change in mean correspondence
    /// distance between iterations (default: 1e-6).
    pub convergence: f64,
}

impl Default for IcpParams {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            convergence: 1e-6,
        }
    }
}

impl IcpParams {
    /// Creates new ICP parameters with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters from the caller's configuration.
    #[must_use]
    pub fn from_config(config: &InspectionConfig) -> Self {
        Self {
            max_iterations: config.icp_max_iterations,
            convergence: config.icp_convergence,
        }
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence threshold.
    #[must_use]
    pub const fn with_convergence(mut self, convergence: f64) -> Self {
        self.convergence = convergence;
        self
    }
}

/// Result of an ICP run.
#[derive(Debug, Clone)]
pub struct IcpOutcome {
    /// The source cloud after alignment.
    pub aligned: PointCloud,
    /// The accumulated rigid transform mapping the original source onto
    /// the target.
    pub transform: RigidTransform,
    /// Mean correspondence distance from the last executed iteration (mm).
    pub residual: f64,
    /// Number of iterations executed.
    pub iterations: u32,
    /// Whether the convergence criterion was satisfied. False after
    /// exhausting the iteration limit - a degraded-quality outcome, not an
    /// error.
    pub converged: bool,
}

/// Aligns `source` onto `target` using point-to-point ICP.
///
/// Without prior alignment, a rotated or shifted part would produce false
/// positives during inspection; ICP removes that pose difference. The
/// returned transform accumulates every per-iteration step by composition,
/// so applying it to the original source reproduces the aligned cloud.
///
/// Correspondence sets smaller than three points are not specially guarded;
/// a degenerate configuration surfaces as [`RegistrationError::SvdFailed`].
///
/// # Errors
///
/// Returns [`RegistrationError::EmptyCloud`] if either cloud is empty.
pub fn icp_align(
    source: &PointCloud,
    target: &PointCloud,
    params: &IcpParams,
) -> RegistrationResult<IcpOutcome> {
    if source.is_empty() || target.is_empty() {
        return Err(RegistrationError::EmptyCloud);
    }

    let index = PointIndex::build(target).map_err(|_| RegistrationError::EmptyCloud)?;

    let mut working: Vec<Point3<f64>> = source.points.clone();
    let mut accumulated = RigidTransform::identity();
    let mut previous_mean = f64::INFINITY;
    let mut residual = 0.0;
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 0..params.max_iterations {
        iterations = iteration + 1;

        // 1 - Correspondences.
        let neighbors = index.nearest_batch(&working);

        #[allow(clippy::cast_precision_loss)]
        let mean = neighbors.iter().map(|n| n.distance).sum::<f64>() / working.len() as f64;
        residual = mean;

        // 2 - Convergence on the change in mean distance.
        if (previous_mean - mean).abs() < params.convergence {
            converged = true;
            debug!(iterations, residual = mean, "ICP converged");
            break;
        }
        previous_mean = mean;

        // 3 - Optimal rigid transform for the current correspondences.
        let matched: Vec<Point3<f64>> = neighbors
            .iter()
            .map(|n| target.points[n.index])
            .collect();
        let step = estimate_rigid_transform(&working, &matched)?;

        // 4 - Apply and accumulate.
        for point in &mut working {
            *point = step.transform_point(point);
        }
        accumulated = step.compose(&accumulated);
    }

    if !converged {
        warn!(
            max_iterations = params.max_iterations,
            residual, "ICP reached the iteration limit without converging"
        );
    }

    Ok(IcpOutcome {
        aligned: PointCloud { points: working },
        transform: accumulated,
        residual,
        iterations,
        converged,
    })
}
