//! Point-cloud and mesh file I/O.
//!
//! Formats:
//!
//! - **XYZ** - Plain text, one point per line, three space-separated
//!   decimals written with 6-decimal precision; reading is permissive
//!   (blank lines and comments skipped, extra columns ignored)
//! - **STL** - ASCII and binary import (vertex positions only, sampled
//!   without replacement) and binary export of flat triangle lists
//!
//! The on-disk reference file is the only persisted state in the system;
//! saves overwrite it wholesale. Concurrent writers must serialize
//! externally.
//!
//! # Quick Start
//!
//! ```no_run
//! use inspect_io::{load_points, save_points};
//! use inspect_types::PointCloud;
//! use nalgebra::Point3;
//!
//! let cloud = PointCloud::from_positions(&[Point3::new(1.0, 2.0, 3.0)]);
//! save_points("reference.xyz", &cloud).unwrap();
//! let back = load_points("reference.xyz").unwrap();
//! assert_eq!(back.len(), 1);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;
mod xyz;

pub use error::{IoError, IoResult};
pub use stl::{load_mesh_samples, save_mesh};
pub use xyz::{load_points, save_points};
