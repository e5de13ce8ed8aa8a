//! End-to-end inspection pipeline: generate, align, compare.

use inspect_compare::{inspect, InspectionParams};
use inspect_registration::{icp_align, IcpParams};
use inspect_synth::{apply_defect, generate_surface, DefectKind, ShapeKind, SurfaceSpec};
use inspect_types::InspectionConfig;

#[test]
fn healthy_part_passes_full_pipeline() {
    let config = InspectionConfig::default();

    let spec = SurfaceSpec::from_config(ShapeKind::Cylinder, &config).with_seed(1234);
    let reference = generate_surface(&spec).unwrap();
    assert_eq!(reference.len(), 2500);

    // Self-alignment converges immediately with a negligible residual.
    let outcome = icp_align(&reference, &reference, &IcpParams::from_config(&config)).unwrap();
    assert!(outcome.converged);
    assert!(outcome.residual < 1e-9);
    assert!(outcome.transform.is_identity(1e-6));

    // Inspection against itself at the default 3 mm tolerance.
    let report = inspect(
        &reference,
        &outcome.aligned,
        &InspectionParams::from_config(&config),
    )
    .unwrap();

    assert_eq!(report.defect_count, 0);
    assert!(report.passed);
    assert!(report.icp_residual < 1e-6);
    assert!(report.max_distance < 1e-6);
}

#[test]
fn defective_part_fails_full_pipeline() {
    let config = InspectionConfig::default();

    let spec = SurfaceSpec::from_config(ShapeKind::Cylinder, &config).with_seed(1234);
    let reference = generate_surface(&spec).unwrap();
    let defective = apply_defect(&reference, DefectKind::MissingCap);

    // A tight tolerance exposes the removed cap even after alignment is
    // skipped; the reference-direction distances reveal the missing
    // material.
    let params = InspectionParams::new(0.5).without_icp();
    let report = inspect(&reference, &defective, &params).unwrap();

    assert!(!report.passed);
    assert!(report.defect_count_ref > 0);
    assert!(report.defect_percentage > 0.0);
}
