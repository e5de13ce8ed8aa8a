//! Acquisition boundary between the sensor hardware and the inspection core.
//!
//! The serial subsystem itself (port detection, connection lifecycle,
//! framing) is an external collaborator. This crate owns the two pure
//! halves of the boundary:
//!
//! - [`decode_record`] / [`collect_points`] - Decoding newline-terminated
//!   sensor records into Cartesian points, terminated by the
//!   end-of-transmission marker
//! - [`capture_channel`] - A one-shot message channel through which the
//!   collaborator's worker thread delivers a single point cloud (or
//!   failure) for the core's synchronous pipeline to consume
//!
//! The core holds no thread or callback state; a capture is a value that
//! arrives exactly once.
//!
//! # Protocol
//!
//! Records have the shape `layer|distance|table_angle|spindle_height`, one
//! per line; the line `FIM` marks end-of-transmission. Any record not
//! matching the 4-field numeric shape is silently discarded. Conversion to
//! Cartesian coordinates uses the fixed sensor calibration offset:
//! `radius = sensor_offset_mm - distance`, `x = radius * cos(angle)`,
//! `y = radius * sin(angle)`, `z = spindle_height` (angle is received in
//! degrees).
//!
//! # Example
//!
//! ```
//! use inspect_acquire::{collect_points, CalibrationParams};
//!
//! let lines = [
//!     "1|3.44|0|5.0",
//!     "garbage line",
//!     "1|3.44|90|5.0",
//!     "FIM",
//!     "1|3.44|180|5.0", // after the marker, ignored
//! ];
//!
//! let cloud = collect_points(
//!     lines.iter().map(|s| s.to_string()),
//!     &CalibrationParams::default(),
//! );
//! assert_eq!(cloud.len(), 2);
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod capture;
mod error;
mod protocol;

pub use capture::{capture_channel, CaptureReceiver, CaptureSender};
pub use error::{AcquisitionError, AcquisitionResult};
pub use protocol::{
    collect_points, decode_record, is_end_of_transmission, CalibrationParams,
    END_OF_TRANSMISSION,
};
