//! Model import into scene objects

use std::path::Path;
use std::sync::Arc;

use crate::assets::{AssetError, GltfLoader, ObjLoader};
use crate::render::Mesh;
use crate::scene::SceneObject;

/// Load a model file as a scene object
///
/// Each mesh part of the file becomes one mesh of the object, in file
/// order. The object is named after the file stem. With `flip_uv` the V
/// texture coordinate is inverted (`v' = 1 - v`).
///
/// Wavefront OBJ and glTF (`.gltf`, `.glb`) are understood; any other
/// extension is reported as [`AssetError::UnsupportedFormat`].
pub fn load_model<P: AsRef<Path>>(path: P, flip_uv: bool) -> Result<SceneObject, AssetError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parts = match extension.as_str() {
        "obj" => ObjLoader::load_obj(path, flip_uv)?,
        "gltf" | "glb" => GltfLoader::load_gltf(path, flip_uv)?,
        _ => return Err(AssetError::UnsupportedFormat(path.display().to_string())),
    };

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    log::info!("Imported model '{}' with {} part(s)", name, parts.len());
    Ok(SceneObject::new(parts.into_iter().map(Arc::new).collect()).with_name(name))
}

/// Like [`load_model`], but falls back to a cube when loading fails
///
/// The fallback keeps the file stem as its name so lookups by name still
/// work.
pub fn load_model_or_placeholder<P: AsRef<Path>>(path: P, flip_uv: bool) -> SceneObject {
    let path = path.as_ref();
    match load_model(path, flip_uv) {
        Ok(object) => object,
        Err(e) => {
            log::warn!("Using placeholder cube for {}: {}", path.display(), e);
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("placeholder");
            SceneObject::new(vec![Arc::new(Mesh::cube())]).with_name(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_obj_names_object_after_stem() {
        let path = std::env::temp_dir().join(format!("scene_engine_{}_pyramid.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\nf 1 3 4\n").unwrap();

        let object = load_model(&path, false).unwrap();
        assert!(object.name().ends_with("_pyramid"));
        assert_eq!(object.meshes().len(), 1);
        assert_eq!(object.meshes()[0].triangle_count(), 2);
    }

    #[test]
    fn test_load_gltf_keeps_every_primitive() {
        let path = crate::assets::gltf_loader::tests::write_triangle("import");

        let object = load_model(&path, true).unwrap();
        assert_eq!(object.name(), "creeper");
        assert_eq!(object.meshes().len(), 2);
        assert_eq!(object.meshes()[0].vertices[2].tex_coord, [0.0, 0.75]);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_model("models/creeper.dae", false);
        assert!(matches!(result, Err(AssetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_fbx_falls_back_to_placeholder() {
        assert!(matches!(
            load_model("models/boat.fbx", false),
            Err(AssetError::UnsupportedFormat(_))
        ));
        let object = load_model_or_placeholder("models/boat.fbx", false);
        assert_eq!(object.name(), "boat");
        assert_eq!(object.meshes()[0].name, "cube");
    }

    #[test]
    fn test_placeholder_on_missing_file() {
        let object = load_model_or_placeholder("missing/steve.obj", true);
        assert_eq!(object.name(), "steve");
        assert_eq!(object.meshes().len(), 1);
        assert_eq!(object.meshes()[0].name, "cube");
    }
}
