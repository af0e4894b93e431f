//! glTF / GLB model loader
//!
//! Walks the default scene and emits one mesh part per triangle primitive,
//! with node transforms baked into the vertices. Documents without a scene
//! contribute every mesh untransformed.

use std::path::Path;

use crate::assets::AssetError;
use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::render::{Mesh, Vertex};

/// Stateless glTF loader
pub struct GltfLoader;

impl GltfLoader {
    /// Load a `.gltf` (with external or embedded buffers) or `.glb` file
    pub fn load_gltf<P: AsRef<Path>>(path: P, flip_uv: bool) -> Result<Vec<Mesh>, AssetError> {
        let path = path.as_ref();
        let (document, buffers, _images) = gltf::import(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;

        let mut parts = Vec::new();
        match document.default_scene().or_else(|| document.scenes().next()) {
            Some(scene) => {
                for node in scene.nodes() {
                    collect_node(&node, &Mat4::identity(), &buffers, flip_uv, &mut parts)?;
                }
            }
            None => {
                for mesh in document.meshes() {
                    collect_mesh(&mesh, &Mat4::identity(), &buffers, flip_uv, &mut parts)?;
                }
            }
        }

        if parts.is_empty() {
            return Err(AssetError::LoadFailed(format!(
                "No triangle meshes in {}",
                path.display()
            )));
        }
        log::debug!("Read {} mesh part(s) from {}", parts.len(), path.display());
        Ok(parts)
    }
}

fn collect_node(
    node: &gltf::Node<'_>,
    parent: &Mat4,
    buffers: &[gltf::buffer::Data],
    flip_uv: bool,
    parts: &mut Vec<Mesh>,
) -> Result<(), AssetError> {
    let world = parent * Mat4::from(node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        collect_mesh(&mesh, &world, buffers, flip_uv, parts)?;
    }
    for child in node.children() {
        collect_node(&child, &world, buffers, flip_uv, parts)?;
    }
    Ok(())
}

fn collect_mesh(
    mesh: &gltf::Mesh<'_>,
    world: &Mat4,
    buffers: &[gltf::buffer::Data],
    flip_uv: bool,
    parts: &mut Vec<Mesh>,
) -> Result<(), AssetError> {
    let base_name = mesh
        .name()
        .map_or_else(|| format!("mesh{}", mesh.index()), str::to_string);
    let primitive_count = mesh.primitives().len();

    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::warn!(
                "Skipping {:?} primitive {} of '{}'",
                primitive.mode(),
                primitive.index(),
                base_name
            );
            continue;
        }
        let name = if primitive_count > 1 {
            format!("{}.{}", base_name, primitive.index())
        } else {
            base_name.clone()
        };
        parts.push(read_primitive(&primitive, world, buffers, flip_uv).map(|mesh| mesh.with_name(name))?);
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive<'_>,
    world: &Mat4,
    buffers: &[gltf::buffer::Data],
    flip_uv: bool,
) -> Result<Mesh, AssetError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| &data[..]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| AssetError::LoadFailed(format!("Primitive {} has no positions", primitive.index())))?
        .collect();
    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()], Iterator::collect);
    let tex_coords: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map_or_else(|| vec![[0.0, 0.0]; positions.len()], |coords| coords.into_f32().collect());
    let indices: Vec<u32> = reader
        .read_indices()
        .map_or_else(|| (0..positions.len() as u32).collect(), |indices| indices.into_u32().collect());

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let position = world.transform_point(&Point3::from(position)).coords;
            let normal = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            let normal = world
                .transform_vector(&Vec3::from(normal))
                .try_normalize(1e-6)
                .unwrap_or_else(Vec3::y);
            let [u, v] = tex_coords.get(i).copied().unwrap_or([0.0, 0.0]);
            let tex_coord = if flip_uv { [u, 1.0 - v] } else { [u, v] };
            Vertex::new(position.into(), normal.into(), tex_coord)
        })
        .collect();

    Ok(Mesh::new(vertices, indices))
}
