//! Synthetic test-data generation for the inspection pipeline.
//!
//! Two halves:
//!
//! - [`generate_surface`] - Samples point clouds from canonical surfaces
//!   (cylinder shell, sphere) with uniform surface density
//! - [`apply_defect`] - Mutates a cloud with one of a closed set of
//!   parametric defects, producing a new cloud
//!
//! # Reproducibility
//!
//! Supplying a seed in [`SurfaceSpec`] makes generation deterministic;
//! omitting it draws fresh entropy per call. Each invocation owns its RNG,
//! so concurrent callers never share randomness state.
//!
//! # Quick Start
//!
//! ```
//! use inspect_synth::{apply_defect, generate_surface, DefectKind, ShapeKind, SurfaceSpec};
//!
//! let spec = SurfaceSpec::new(ShapeKind::Cylinder)
//!     .with_count(500)
//!     .with_seed(42);
//! let cloud = generate_surface(&spec).unwrap();
//! assert_eq!(cloud.len(), 500);
//!
//! let defective = apply_defect(&cloud, DefectKind::LateralHole);
//! assert!(defective.len() < cloud.len());
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod defect;
mod error;
mod surface;

pub use defect::{apply_defect, DefectKind};
pub use error::{SynthError, SynthResult};
pub use surface::{generate_surface, ShapeKind, SurfaceSpec};
