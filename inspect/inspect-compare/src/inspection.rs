//! Bidirectional comparison and classification.

use tracing::{debug, info};

use crate::report::{InspectionReport, PointLabel};
use crate::{CompareError, CompareResult};
use inspect_registration::{icp_align, IcpParams};
use inspect_spatial::PointIndex;
use inspect_types::{InspectionConfig, PointCloud};

/// Parameters for a single inspection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectionParams {
    /// Maximum permitted deviation in millimeters.
    pub tolerance_mm: f64,
    /// Whether to ICP-align the test cloud onto the reference before
    /// comparing (default: true).
    pub use_icp: bool,
    /// ICP settings used when `use_icp` is set.
    pub icp: IcpParams,
}

impl InspectionParams {
    /// Creates parameters with the given tolerance, ICP enabled.
    #[must_use]
    pub fn new(tolerance_mm: f64) -> Self {
        Self {
            tolerance_mm,
            use_icp: true,
            icp: IcpParams::default(),
        }
    }

    /// Creates parameters from the caller's configuration.
    #[must_use]
    pub fn from_config(config: &InspectionConfig) -> Self {
        Self {
            tolerance_mm: config.tolerance_mm,
            use_icp: true,
            icp: IcpParams::from_config(config),
        }
    }

    /// Disables ICP pre-alignment.
    #[must_use]
    pub const fn without_icp(mut self) -> Self {
        self.use_icp = false;
        self
    }

    /// Sets the ICP settings.
    #[must_use]
    pub const fn with_icp_params(mut self, icp: IcpParams) -> Self {
        self.icp = icp;
        self
    }
}

/// Compares a test cloud against a reference cloud.
///
/// When `params.use_icp` is set the test cloud is first rigidly aligned
/// onto the reference, eliminating false positives from part pose on the
/// inspection table. Distances are then computed in both directions,
/// classified against the tolerance, and aggregated.
///
/// # Errors
///
/// Returns [`CompareError::EmptyCloud`] if either cloud is empty and
/// [`CompareError::InvalidTolerance`] if the tolerance is not strictly
/// positive - both checked before any algorithmic work.
pub fn inspect(
    reference: &PointCloud,
    test: &PointCloud,
    params: &InspectionParams,
) -> CompareResult<InspectionReport> {
    if reference.is_empty() || test.is_empty() {
        return Err(CompareError::EmptyCloud);
    }
    if params.tolerance_mm <= 0.0 {
        return Err(CompareError::InvalidTolerance {
            tolerance_mm: params.tolerance_mm,
        });
    }

    // Optional rigid pre-alignment of the test cloud.
    let mut icp_residual = 0.0;
    let mut icp_converged = true;
    let aligned;
    let test = if params.use_icp {
        debug!("aligning test cloud onto reference");
        let outcome = icp_align(test, reference, &params.icp)?;
        icp_residual = outcome.residual;
        icp_converged = outcome.converged;
        aligned = outcome.aligned;
        &aligned
    } else {
        test
    };

    // One index per cloud; queries run in both directions.
    let reference_index =
        PointIndex::build(reference).map_err(|_| CompareError::EmptyCloud)?;
    let test_index = PointIndex::build(test).map_err(|_| CompareError::EmptyCloud)?;

    let dist_test = reference_index.nearest_distances(test.as_slice());
    let dist_ref = test_index.nearest_distances(reference.as_slice());

    let labels_test = classify(&dist_test, params.tolerance_mm);
    let labels_ref = classify(&dist_ref, params.tolerance_mm);

    let defect_count_test = count_defects(&labels_test);
    let defect_count_ref = count_defects(&labels_ref);
    let defect_count = defect_count_test + defect_count_ref;

    let total_points = dist_test.len() + dist_ref.len();
    #[allow(clippy::cast_precision_loss)]
    let defect_percentage = 100.0 * defect_count as f64 / total_points as f64;

    let (mean_distance, max_distance, std_distance) =
        combined_statistics(&dist_test, &dist_ref);

    let passed = defect_count == 0;

    info!(
        defect_count,
        defect_percentage,
        mean_distance,
        max_distance,
        passed,
        "inspection complete"
    );

    Ok(InspectionReport {
        defect_count_test,
        defect_count_ref,
        defect_count,
        defect_percentage,
        mean_distance,
        max_distance,
        std_distance,
        icp_residual,
        icp_converged,
        passed,
        dist_test,
        dist_ref,
        labels_test,
        labels_ref,
    })
}

fn classify(distances: &[f64], tolerance_mm: f64) -> Vec<PointLabel> {
    distances
        .iter()
        .map(|&d| {
            if d > tolerance_mm {
                PointLabel::OutOfTolerance
            } else {
                PointLabel::Within
            }
        })
        .collect()
}

fn count_defects(labels: &[PointLabel]) -> usize {
    labels
        .iter()
        .filter(|&&l| l == PointLabel::OutOfTolerance)
        .count()
}

/// Mean, max, and population standard deviation over the concatenation of
/// both distance arrays.
fn combined_statistics(dist_test: &[f64], dist_ref: &[f64]) -> (f64, f64, f64) {
    let all = dist_test.iter().chain(dist_ref.iter());

    #[allow(clippy::cast_precision_loss)]
    let n = (dist_test.len() + dist_ref.len()) as f64;

    let mean = all.clone().sum::<f64>() / n;
    let max = all.clone().fold(0.0_f64, |acc, &d| acc.max(d));
    let variance = all.map(|&d| (d - mean).powi(2)).sum::<f64>() / n;

    (mean, max, variance.sqrt())
}
