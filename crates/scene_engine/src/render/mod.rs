//! Rendering layer
//!
//! Backend-agnostic pieces: mesh and texture data, the shader program with
//! its uniforms, the camera, and the [`RenderBackend`] trait draw calls go
//! through.

pub mod backend;
pub mod camera;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use backend::{BackendResult, DrawRecord, FrameStats, NullBackend, RecordingBackend, RenderBackend};
pub use camera::Camera;
pub use mesh::{Mesh, Vertex};
pub use shader::{ShaderError, ShaderProgram, ShaderStage, UniformValue};
pub use texture::Texture;

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shader program problem
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Draw issued with a program that was never activated
    #[error("Shader program is not active")]
    ProgramNotActive,

    /// Calls arrived out of begin/draw/end order
    #[error("Frame state error: {0}")]
    FrameState(String),

    /// Backend-specific failure
    #[error("Backend error: {0}")]
    Backend(String),
}
