//! Nearest-neighbor spatial index over point clouds.
//!
//! This crate wraps a KD-tree behind a small interface: build an index over
//! a reference cloud once, then answer nearest-neighbor queries for single
//! points or whole batches. It is the performance-critical primitive shared
//! by the ICP aligner and the defect comparator; batched queries are
//! parallelized and stay sub-second for clouds of tens of thousands of
//! points.
//!
//! # Quick Start
//!
//! ```
//! use inspect_spatial::PointIndex;
//! use inspect_types::PointCloud;
//! use nalgebra::Point3;
//!
//! let reference = PointCloud::from_positions(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//! ]);
//!
//! let index = PointIndex::build(&reference).unwrap();
//! let hit = index.nearest(&Point3::new(1.0, 0.0, 0.0));
//!
//! assert_eq!(hit.index, 0);
//! assert!((hit.distance - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod index;

pub use error::{SpatialError, SpatialResult};
pub use index::{Neighbor, PointIndex};
