//! Export-mesh reconstruction from point clouds.
//!
//! Two reconstruction strategies, both producing a flat triangle list
//! suitable for STL export:
//!
//! - [`convex_hull`] - Fast, robust, but cannot represent concavities
//! - [`delaunay_2_5d`] - Delaunay triangulation of the XY projection with
//!   each triangle lifted back to the original 3D vertices; preserves
//!   non-convex footprints but cannot represent true overhangs
//!
//! Both limitations are stated behavior, not defects. For watertight
//! reconstruction of complex cavities a full surface-reconstruction
//! pipeline is required, which is out of scope here.
//!
//! # Quick Start
//!
//! ```
//! use inspect_reconstruct::convex_hull;
//! use inspect_types::PointCloud;
//! use nalgebra::Point3;
//!
//! let cloud = PointCloud::from_positions(&[
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ]);
//!
//! let triangles = convex_hull(&cloud).unwrap();
//! assert_eq!(triangles.len(), 4); // tetrahedron
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod delaunay;
mod error;
mod hull;

pub use delaunay::{delaunay_2_5d, MIN_TRIANGLE_AREA};
pub use error::{ReconstructError, ReconstructResult};
pub use hull::convex_hull;

/// Minimum number of points either reconstruction strategy accepts.
pub const MIN_POINTS: usize = 4;
