//! Canonical-surface point cloud generation.

use nalgebra::{Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use tracing::debug;

use crate::{SynthError, SynthResult};
use inspect_types::{InspectionConfig, PointCloud};

/// Canonical surface shapes available for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Open cylinder shell around the Z axis.
    Cylinder,
    /// Sphere centered at the origin.
    Sphere,
}

/// Specification for a synthetic surface cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSpec {
    /// Shape to sample.
    pub shape: ShapeKind,
    /// Number of points to generate.
    pub count: usize,
    /// Shape radius in millimeters.
    pub radius_mm: f64,
    /// Cylinder height in millimeters (ignored for spheres, but still
    /// validated).
    pub height_mm: f64,
    /// RNG seed for reproducible clouds; `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl SurfaceSpec {
    /// Creates a spec for the given shape with default dimensions
    /// (2500 points, radius 10 mm, height 20 mm).
    #[must_use]
    pub const fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            count: 2500,
            radius_mm: 10.0,
            height_mm: 20.0,
            seed: None,
        }
    }

    /// Creates a spec from the caller's configuration.
    #[must_use]
    pub fn from_config(shape: ShapeKind, config: &InspectionConfig) -> Self {
        Self {
            shape,
            count: config.synthetic_point_count,
            radius_mm: config.default_radius_mm,
            height_mm: config.default_height_mm,
            seed: None,
        }
    }

    /// Sets the point count.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the radius in millimeters.
    #[must_use]
    pub const fn with_radius_mm(mut self, radius_mm: f64) -> Self {
        self.radius_mm = radius_mm;
        self
    }

    /// Sets the cylinder height in millimeters.
    #[must_use]
    pub const fn with_height_mm(mut self, height_mm: f64) -> Self {
        self.height_mm = height_mm;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates a point cloud sampling the specified canonical surface.
///
/// Sphere sampling uses cube rejection: vectors drawn uniformly in the
/// enclosing cube are kept when `0 < |v| <= 1`, then normalized and scaled.
/// Spherical-angle sampling is deliberately not used - it clusters density
/// near the poles, and uniform surface density is a correctness requirement
/// for the density tests downstream.
///
/// # Errors
///
/// Returns [`SynthError::InvalidParameter`] when `count` is zero or radius
/// or height is not strictly positive.
pub fn generate_surface(spec: &SurfaceSpec) -> SynthResult<PointCloud> {
    if spec.count == 0 {
        return Err(SynthError::InvalidParameter {
            reason: "point count must be positive".to_string(),
        });
    }
    if spec.radius_mm <= 0.0 {
        return Err(SynthError::InvalidParameter {
            reason: format!("radius must be positive, got {}", spec.radius_mm),
        });
    }
    if spec.height_mm <= 0.0 {
        return Err(SynthError::InvalidParameter {
            reason: format!("height must be positive, got {}", spec.height_mm),
        });
    }

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cloud = match spec.shape {
        ShapeKind::Cylinder => {
            cylinder_shell(&mut rng, spec.count, spec.radius_mm, spec.height_mm)
        }
        ShapeKind::Sphere => sphere_shell(&mut rng, spec.count, spec.radius_mm),
    };

    debug!(
        count = cloud.len(),
        shape = ?spec.shape,
        "generated synthetic surface"
    );
    Ok(cloud)
}

/// Uniform sampling of an open cylinder shell around the Z axis.
fn cylinder_shell(rng: &mut StdRng, count: usize, radius: f64, height: f64) -> PointCloud {
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            let z = rng.gen_range(-height / 2.0..height / 2.0);
            Point3::new(radius * theta.cos(), radius * theta.sin(), z)
        })
        .collect()
}

/// Uniform sampling of a sphere surface via cube rejection.
fn sphere_shell(rng: &mut StdRng, count: usize, radius: f64) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(count);
    while cloud.len() < count {
        let v = Vector3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        let norm = v.norm();
        if norm > 0.0 && norm <= 1.0 {
            cloud.push(Point3::from(v * (radius / norm)));
        }
    }
    cloud
}
