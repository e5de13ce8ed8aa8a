//! Defect comparison between reference and test point clouds.
//!
//! The comparator measures how far a captured test cloud deviates from a
//! reference cloud, classifies every point against a tolerance, and
//! aggregates the result into an [`InspectionReport`].
//!
//! # Bidirectionality
//!
//! Distances are computed in both directions: every test point against the
//! reference, and every reference point against the test cloud. This is
//! mandatory - a unidirectional query cannot detect removed material, since
//! a missing test point leaves no query to flag the hole.
//!
//! # Quick Start
//!
//! ```
//! use inspect_compare::{inspect, InspectionParams};
//! use inspect_types::PointCloud;
//! use nalgebra::Point3;
//!
//! let reference = PointCloud::from_positions(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//!
//! let params = InspectionParams::new(0.5).without_icp();
//! let report = inspect(&reference, &reference, &params).unwrap();
//!
//! assert!(report.passed);
//! assert_eq!(report.defect_count, 0);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod inspection;
mod report;

pub use error::{CompareError, CompareResult};
pub use inspection::{inspect, InspectionParams};
pub use report::{InspectionReport, PointLabel};
