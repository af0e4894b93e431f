//! Asset loading: images plus OBJ and glTF models

pub mod gltf_loader;
pub mod image_loader;
pub mod import;
pub mod obj_loader;

pub use gltf_loader::GltfLoader;
pub use image_loader::ImageData;
pub use import::{load_model, load_model_or_placeholder};
pub use obj_loader::ObjLoader;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File exists but could not be decoded
    #[error("Load failed: {0}")]
    LoadFailed(String),

    /// Malformed content
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Extension the importer does not handle
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),
}
