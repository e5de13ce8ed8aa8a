//! STL mesh import and export.
//!
//! Import consumes only vertex positions - the inspection core treats an
//! externally-supplied mesh as a pool of surface samples, not as topology.
//! Export writes a flat triangle list as binary STL.
//!
//! Binary layout:
//!
//! ```text
//! UINT8[80]    - Header (ignored)
//! UINT32       - Number of triangles
//! foreach triangle
//!     REAL32[3] - Normal vector
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count
//! end
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use nalgebra::Point3;
use rand::seq::index;
use tracing::{debug, info};

use crate::{IoError, IoResult};
use inspect_types::{PointCloud, Triangle};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
const TRIANGLE_SIZE: usize = 50;

/// Loads an STL file and samples `sample_count` of its triangle vertices
/// without replacement.
///
/// Every vertex of every triangle enters the pool (shared vertices appear
/// once per incident triangle, mirroring the flat STL structure). When the
/// pool holds fewer than `sample_count` vertices the whole pool is
/// returned. Sampling uses fresh entropy per call.
///
/// # Errors
///
/// Returns [`IoError::EmptyMesh`] when the file parses but contains no
/// vertices, [`IoError::MalformedStl`] when it cannot be parsed, or an I/O
/// error if it cannot be read.
pub fn load_mesh_samples<P: AsRef<Path>>(path: P, sample_count: usize) -> IoResult<PointCloud> {
    let path = path.as_ref();
    let vertices = load_stl_vertices(path)?;

    if vertices.is_empty() {
        return Err(IoError::EmptyMesh);
    }

    let n = sample_count.min(vertices.len());
    let cloud = if n == vertices.len() {
        PointCloud { points: vertices }
    } else {
        let mut rng = rand::thread_rng();
        index::sample(&mut rng, vertices.len(), n)
            .into_iter()
            .map(|i| vertices[i])
            .collect()
    };

    debug!(sampled = cloud.len(), path = %path.display(), "sampled STL vertices");
    Ok(cloud)
}

/// Writes a flat triangle list as binary STL.
///
/// Triangle ordering follows the input list; face normals are recomputed
/// from the vertices, with degenerate triangles written with a zero
/// normal.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_mesh<P: AsRef<Path>>(path: P, triangles: &[Triangle]) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut header = [0u8; HEADER_SIZE];
    let tag = b"inspect-io binary STL";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    let count = triangles.len() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for tri in triangles {
        let normal = tri.normal().unwrap_or_else(nalgebra::Vector3::zeros);
        write_vec3(&mut writer, normal.x, normal.y, normal.z)?;
        write_vec3(&mut writer, tri.v0.x, tri.v0.y, tri.v0.z)?;
        write_vec3(&mut writer, tri.v1.x, tri.v1.y, tri.v1.z)?;
        write_vec3(&mut writer, tri.v2.x, tri.v2.y, tri.v2.z)?;
        writer.write_all(&0u16.to_le_bytes())?;
    }
    writer.flush()?;

    info!(triangles = triangles.len(), path = %path.display(), "saved STL");
    Ok(())
}

fn write_vec3<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    for value in [x as f32, y as f32, z as f32] {
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Reads all triangle vertices from an STL file, auto-detecting ASCII vs
/// binary.
fn load_stl_vertices(path: &Path) -> IoResult<Vec<Point3<f64>>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; HEADER_SIZE + 4];
    let bytes_read = read_up_to(&mut reader, &mut header)?;

    if bytes_read < 6 {
        return Err(IoError::MalformedStl {
            reason: "file too small to be valid STL".to_string(),
        });
    }

    let header_str = String::from_utf8_lossy(&header[..bytes_read.min(HEADER_SIZE)]);
    let looks_ascii = header_str.trim_start().starts_with("solid")
        && !header[..bytes_read.min(HEADER_SIZE)].contains(&0);

    if looks_ascii {
        // Re-read from the start for line-based parsing.
        drop(reader);
        let file = File::open(path)?;
        load_ascii_vertices(BufReader::new(file))
    } else {
        load_binary_vertices(&header[..bytes_read], reader)
    }
}

/// Reads as many bytes as available, up to the buffer size.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = reader.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}

fn load_ascii_vertices<R: BufRead>(reader: R) -> IoResult<Vec<Point3<f64>>> {
    let mut vertices = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.starts_with("vertex") {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(IoError::Format {
                line: line_index + 1,
                reason: format!("malformed vertex line `{trimmed}`"),
            });
        }

        let mut coords = [0.0f64; 3];
        for (slot, text) in coords.iter_mut().zip(&fields[1..]) {
            *slot = text.parse().map_err(|_| IoError::Format {
                line: line_index + 1,
                reason: format!("invalid vertex coordinate `{text}`"),
            })?;
        }
        vertices.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(vertices)
}

fn load_binary_vertices<R: Read>(header: &[u8], mut reader: R) -> IoResult<Vec<Point3<f64>>> {
    if header.len() < HEADER_SIZE + 4 {
        return Err(IoError::MalformedStl {
            reason: format!(
                "binary header truncated: expected {} bytes, got {}",
                HEADER_SIZE + 4,
                header.len()
            ),
        });
    }

    let face_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut vertices = Vec::with_capacity(face_count as usize * 3);
    let mut record = [0u8; TRIANGLE_SIZE];

    for _ in 0..face_count {
        reader
            .read_exact(&mut record)
            .map_err(|_| IoError::MalformedStl {
                reason: "unexpected end of file in triangle data".to_string(),
            })?;

        // Skip the 12-byte normal; read the three vertices.
        for v in 0..3 {
            let base = 12 + v * 12;
            let x = f32::from_le_bytes([
                record[base],
                record[base + 1],
                record[base + 2],
                record[base + 3],
            ]);
            let y = f32::from_le_bytes([
                record[base + 4],
                record[base + 5],
                record[base + 6],
                record[base + 7],
            ]);
            let z = f32::from_le_bytes([
                record[base + 8],
                record[base + 9],
                record[base + 10],
                record[base + 11],
            ]);
            vertices.push(Point3::new(f64::from(x), f64::from(y), f64::from(z)));
        }
    }

    Ok(vertices)
}
