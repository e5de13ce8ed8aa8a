//! XYZ plain-text point files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use tracing::{debug, info};

use crate::{IoError, IoResult};
use inspect_types::PointCloud;

/// Saves a point cloud as plain text, one point per line.
///
/// Coordinates are written as three space-separated decimals with fixed
/// 6-decimal precision. An existing file is overwritten wholesale.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_points<P: AsRef<Path>>(path: P, cloud: &PointCloud) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for p in &cloud.points {
        writeln!(writer, "{:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    writer.flush()?;

    info!(points = cloud.len(), path = %path.display(), "saved XYZ");
    Ok(())
}

/// Loads a point cloud from a plain-text XYZ file.
///
/// Parsing is permissive about layout: blank lines and `#`/`//` comments
/// are skipped, whitespace runs are collapsed, and columns beyond the
/// third are ignored. A single-row file yields a one-point cloud. A data
/// row that does not begin with three parseable decimals is an error.
///
/// # Errors
///
/// Returns [`IoError::Format`] (with the 1-based line number) on a
/// malformed row, or an I/O error if the file cannot be read.
pub fn load_points<P: AsRef<Path>>(path: P) -> IoResult<PointCloud> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut cloud = PointCloud::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let line_number = line_index + 1;
        let mut fields = trimmed.split_whitespace();
        let x = parse_field(fields.next(), trimmed, line_number)?;
        let y = parse_field(fields.next(), trimmed, line_number)?;
        let z = parse_field(fields.next(), trimmed, line_number)?;

        cloud.push(Point3::new(x, y, z));
    }

    debug!(points = cloud.len(), path = %path.display(), "loaded XYZ");
    Ok(cloud)
}

fn parse_field(field: Option<&str>, row: &str, line: usize) -> IoResult<f64> {
    let text = field.ok_or_else(|| IoError::Format {
        line,
        reason: format!("expected three coordinates, got `{row}`"),
    })?;
    text.parse::<f64>().map_err(|_| IoError::Format {
        line,
        reason: format!("invalid coordinate `{text}`"),
    })
}
