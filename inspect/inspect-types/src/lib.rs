//! Core data model for the dimensional inspection engine.
//!
//! This crate defines the types shared by every stage of the inspection
//! pipeline:
//!
//! - [`PointCloud`] - A collection of 3D points in millimeters
//! - [`Triangle`] - A triangle with concrete vertex positions, used for
//!   export meshes
//! - [`InspectionConfig`] - Caller-owned configuration passed explicitly
//!   into the core entry points
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with no dependencies beyond math and serde. It
//! holds no algorithmic logic; registration, comparison, and reconstruction
//! live in their own crates.
//!
//! # Quick Start
//!
//! ```
//! use inspect_types::{InspectionConfig, PointCloud};
//! use nalgebra::Point3;
//!
//! let mut cloud = PointCloud::new();
//! cloud.push_coords(0.0, 0.0, 0.0);
//! cloud.push_coords(1.0, 0.0, 0.0);
//!
//! assert_eq!(cloud.len(), 2);
//!
//! // Configuration is a plain value constructed once at the boundary.
//! let config = InspectionConfig::default().with_tolerance_mm(0.5);
//! assert!((config.tolerance_mm - 0.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cloud;
mod config;
mod triangle;

pub use cloud::PointCloud;
pub use config::InspectionConfig;
pub use triangle::Triangle;

// Math types used throughout the workspace.
pub use nalgebra::{Point3, Vector3};
