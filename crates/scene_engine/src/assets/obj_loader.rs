//! OBJ file loader for 3D models
//!
//! Reads positions, normals and texture coordinates. Every `o`/`g`
//! statement starts a new mesh part, faces are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::assets::AssetError;
use crate::render::{Mesh, Vertex};

/// Stateless OBJ parser
pub struct ObjLoader;

#[derive(Default)]
struct PartBuilder {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl PartBuilder {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn finish(self, parts: &mut Vec<Mesh>) {
        if !self.indices.is_empty() {
            parts.push(Mesh::new(self.vertices, self.indices).with_name(self.name));
        }
    }
}

impl ObjLoader {
    /// Load an OBJ file, one mesh per group
    pub fn load_obj<P: AsRef<Path>>(path: P, flip_uv: bool) -> Result<Vec<Mesh>, AssetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let parts = Self::parse(BufReader::new(file), flip_uv)?;
        log::debug!("Parsed {} mesh part(s) from {}", parts.len(), path.display());
        Ok(parts)
    }

    /// Parse OBJ text from any reader
    pub fn parse<R: BufRead>(reader: R, flip_uv: bool) -> Result<Vec<Mesh>, AssetError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut normals: Vec<[f32; 3]> = Vec::new();
        let mut tex_coords: Vec<[f32; 2]> = Vec::new();

        let mut parts = Vec::new();
        let mut current = PartBuilder::named("default");

        for (line_index, line) in reader.lines().enumerate() {
            let line_no = line_index + 1;
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };
            let args: Vec<&str> = tokens.collect();

            match keyword {
                "v" => positions.push(parse_floats::<3>(&args, line_no)?),
                "vn" => normals.push(parse_floats::<3>(&args, line_no)?),
                "vt" => {
                    let [u, v] = parse_floats::<2>(&args, line_no)?;
                    tex_coords.push(if flip_uv { [u, 1.0 - v] } else { [u, v] });
                }
                "o" | "g" => {
                    let name = args.first().copied().unwrap_or("unnamed");
                    let previous = std::mem::replace(&mut current, PartBuilder::named(name));
                    previous.finish(&mut parts);
                }
                "f" => {
                    if args.len() < 3 {
                        return Err(parse_error(line_no, "face needs at least 3 vertices"));
                    }
                    let first = current.vertices.len() as u32;
                    for corner in &args {
                        let vertex = resolve_corner(corner, &positions, &tex_coords, &normals, line_no)?;
                        current.vertices.push(vertex);
                    }
                    for i in 1..(args.len() as u32 - 1) {
                        current.indices.extend_from_slice(&[first, first + i, first + i + 1]);
                    }
                }
                _ => {}
            }
        }
        current.finish(&mut parts);

        if parts.is_empty() {
            return Err(AssetError::LoadFailed("No faces found in OBJ data".to_string()));
        }
        Ok(parts)
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> AssetError {
    AssetError::Parse {
        line,
        message: message.into(),
    }
}

fn parse_floats<const N: usize>(args: &[&str], line: usize) -> Result<[f32; N], AssetError> {
    if args.len() < N {
        return Err(parse_error(line, format!("expected {} components, found {}", N, args.len())));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| parse_error(line, format!("invalid number '{}'", arg)))?;
    }
    Ok(out)
}

/// OBJ indices are 1-based; negative values count back from the end
fn resolve_index(raw: &str, len: usize, line: usize) -> Result<usize, AssetError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| parse_error(line, format!("invalid index '{}'", raw)))?;
    let index = match value {
        v if v > 0 => v as usize - 1,
        v if v < 0 => len
            .checked_sub(v.unsigned_abs() as usize)
            .ok_or_else(|| parse_error(line, format!("index {} out of range", v)))?,
        _ => return Err(parse_error(line, "index 0 is not valid")),
    };
    if index >= len {
        return Err(parse_error(line, format!("index {} out of range", value)));
    }
    Ok(index)
}

fn resolve_corner(
    corner: &str,
    positions: &[[f32; 3]],
    tex_coords: &[[f32; 2]],
    normals: &[[f32; 3]],
    line: usize,
) -> Result<Vertex, AssetError> {
    let mut fields = corner.split('/');
    let position_raw = fields.next().unwrap_or_default();
    let tex_raw = fields.next().filter(|s| !s.is_empty());
    let normal_raw = fields.next().filter(|s| !s.is_empty());

    let position = positions[resolve_index(position_raw, positions.len(), line)?];
    let tex_coord = match tex_raw {
        Some(raw) => tex_coords[resolve_index(raw, tex_coords.len(), line)?],
        None => [0.0, 0.0],
    };
    let normal = match normal_raw {
        Some(raw) => normals[resolve_index(raw, normals.len(), line)?],
        None => [0.0, 1.0, 0.0],
    };

    Ok(Vertex::new(position, normal, tex_coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUAD: &str = "\
# two groups
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 0.25
vn 0 0 1
o body
f 1/1/1 2/2/1 3/3/1 4/1/1
g head
f -4 -3 -2
";

    #[test]
    fn test_groups_become_parts() {
        let parts = ObjLoader::parse(Cursor::new(QUAD), false).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "body");
        assert_eq!(parts[0].triangle_count(), 2);
        assert_eq!(parts[0].indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(parts[1].name, "head");
        assert_eq!(parts[1].vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(parts[1].vertices[0].normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_flip_uv_inverts_v() {
        let parts = ObjLoader::parse(Cursor::new(QUAD), true).unwrap();
        assert_eq!(parts[0].vertices[2].tex_coord, [1.0, 0.75]);
    }

    #[test]
    fn test_out_of_range_index_reports_line() {
        let data = "v 0 0 0\nv 1 0 0\nf 1 2 7\n";
        let result = ObjLoader::parse(Cursor::new(data), false);
        assert!(matches!(result, Err(AssetError::Parse { line: 3, .. })));
    }

    #[test]
    fn test_no_faces_is_an_error() {
        let result = ObjLoader::parse(Cursor::new("v 0 0 0\n"), false);
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
