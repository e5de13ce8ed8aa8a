//! Rigid-body registration of point clouds.
//!
//! This crate aligns one point cloud onto another:
//!
//! - **Kabsch** - Optimal rigid transform from paired points (SVD-based)
//! - **ICP (Iterative Closest Point)** - Automatic alignment via repeated
//!   correspondence/transform steps
//!
//! Registration is strictly rigid: rotation plus translation, never scale
//! or shear. The estimated rotation is always proper (determinant +1);
//! reflections produced by the SVD are corrected before use.
//!
//! # Quick Start
//!
//! ```
//! use inspect_registration::{icp_align, IcpParams, RigidTransform};
//! use inspect_types::PointCloud;
//! use nalgebra::{Point3, Vector3};
//!
//! let target = PointCloud::from_positions(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//!     Point3::new(1.0, 1.0, 1.0),
//! ]);
//!
//! // Source is the target shifted by a small offset.
//! let mut source = target.clone();
//! source.translate(Vector3::new(0.4, 0.2, 0.1));
//!
//! let outcome = icp_align(&source, &target, &IcpParams::default()).unwrap();
//! assert!(outcome.converged);
//! assert!(outcome.residual < 1e-6);
//! ```
//!
//! # Non-convergence
//!
//! Exhausting the iteration limit is a degraded-quality outcome, not an
//! error: [`IcpOutcome::converged`] is false, a warning is logged, and the
//! best transform found is still returned so that downstream comparison can
//! proceed honestly.

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod icp;
mod kabsch;
mod transform;

pub use error::{RegistrationError, RegistrationResult};
pub use icp::{icp_align, IcpOutcome, IcpParams};
pub use kabsch::estimate_rigid_transform;
pub use transform::RigidTransform;
