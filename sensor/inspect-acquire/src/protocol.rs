//! Sensor record decoding.

use nalgebra::Point3;
use tracing::debug;

use inspect_types::{InspectionConfig, PointCloud};

/// Line marking the end of a sensor transmission (case-insensitive).
pub const END_OF_TRANSMISSION: &str = "FIM";

/// Sensor-to-table calibration used for polar-to-Cartesian conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationParams {
    /// Distance from the sensor to the empty turntable (mm).
    pub sensor_offset_mm: f64,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            sensor_offset_mm: 103.44,
        }
    }
}

impl CalibrationParams {
    /// Creates calibration from the caller's configuration.
    #[must_use]
    pub fn from_config(config: &InspectionConfig) -> Self {
        Self {
            sensor_offset_mm: config.sensor_offset_mm,
        }
    }

    /// Sets the sensor offset in millimeters.
    #[must_use]
    pub const fn with_sensor_offset_mm(mut self, offset_mm: f64) -> Self {
        self.sensor_offset_mm = offset_mm;
        self
    }
}

/// Returns true if the line is the end-of-transmission marker.
#[must_use]
pub fn is_end_of_transmission(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(END_OF_TRANSMISSION)
}

/// Decodes one sensor record into a Cartesian point.
///
/// The record shape is `layer|distance|table_angle|spindle_height`, with
/// the table angle in degrees. The layer field is carried by the protocol
/// but not needed for the conversion. Returns `None` for any line that does
/// not match the 4-field numeric shape - malformed records are discarded,
/// never errors.
#[must_use]
pub fn decode_record(line: &str, calibration: &CalibrationParams) -> Option<Point3<f64>> {
    let line = line.trim();
    if !line.contains('|') {
        return None;
    }

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 4 {
        return None;
    }

    let distance: f64 = fields[1].trim().parse().ok()?;
    let table_angle_deg: f64 = fields[2].trim().parse().ok()?;
    let spindle_height: f64 = fields[3].trim().parse().ok()?;

    let radius = calibration.sensor_offset_mm - distance;
    let theta = table_angle_deg.to_radians();

    Some(Point3::new(
        radius * theta.cos(),
        radius * theta.sin(),
        spindle_height,
    ))
}

/// Collects decoded points from a stream of lines until the
/// end-of-transmission marker (or the stream's end).
///
/// Blank lines and malformed records are silently discarded; the discard
/// count is logged for diagnostics.
pub fn collect_points(
    lines: impl IntoIterator<Item = String>,
    calibration: &CalibrationParams,
) -> PointCloud {
    let mut cloud = PointCloud::new();
    let mut discarded = 0usize;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_end_of_transmission(trimmed) {
            break;
        }
        match decode_record(trimmed, calibration) {
            Some(point) => cloud.push(point),
            None => discarded += 1,
        }
    }

    debug!(
        points = cloud.len(),
        discarded, "sensor transmission decoded"
    );
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_golden_values() {
        let calibration = CalibrationParams::default();

        // distance 3.44 -> radius 100; angle 90 degrees.
        let point = decode_record("1|3.44|90|5.0", &calibration).unwrap();
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(point.z, 5.0, epsilon = 1e-12);

        let point = decode_record("2|3.44|0|1.5", &calibration).unwrap();
        assert_relative_eq!(point.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_decode_respects_calibration() {
        let calibration = CalibrationParams::default().with_sensor_offset_mm(50.0);
        let point = decode_record("0|10|0|0", &calibration).unwrap();
        assert_relative_eq!(point.x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_malformed_records_discarded() {
        let calibration = CalibrationParams::default();

        assert!(decode_record("no pipes here", &calibration).is_none());
        assert!(decode_record("1|2|3", &calibration).is_none());
        assert!(decode_record("1|2|3|4|5", &calibration).is_none());
        assert!(decode_record("1|abc|3|4", &calibration).is_none());
        assert!(decode_record("", &calibration).is_none());
    }

    #[test]
    fn test_end_of_transmission_marker() {
        assert!(is_end_of_transmission("FIM"));
        assert!(is_end_of_transmission("fim"));
        assert!(is_end_of_transmission("  FIM  "));
        assert!(!is_end_of_transmission("FIMx"));
    }

    #[test]
    fn test_collect_stops_at_marker() {
        let lines = [
            "1|3.44|0|0.0",
            "1|3.44|90|0.0",
            "FIM",
            "1|3.44|180|0.0",
        ];
        let cloud = collect_points(
            lines.iter().map(|s| (*s).to_string()),
            &CalibrationParams::default(),
        );
        assert_eq!(cloud.len(), 2);
    }

    #[test]
    fn test_collect_skips_garbage() {
        let lines = ["", "noise", "1|3.44|45|2.0", "   ", "also|bad"];
        let cloud = collect_points(
            lines.iter().map(|s| (*s).to_string()),
            &CalibrationParams::default(),
        );
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = InspectionConfig::default().with_sensor_offset_mm(77.0);
        let calibration = CalibrationParams::from_config(&config);
        assert_relative_eq!(calibration.sensor_offset_mm, 77.0);
    }
}
