//! Backend abstraction for issuing draw calls
//!
//! The scene graph only needs four things from a graphics API: start a
//! frame with a clear color, bind the shader program, draw a mesh with a
//! model matrix, and finish the frame. Anything that implements
//! [`RenderBackend`] can sit behind the engine; the two backends here run
//! without a GPU.

use crate::foundation::math::{Mat4, Vec3};
use crate::render::{Mesh, RenderError, ShaderProgram, UniformValue};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Main rendering backend trait
pub trait RenderBackend {
    /// Start a frame, clearing to the given color
    fn begin_frame(&mut self, clear_color: Vec3) -> BackendResult<()>;

    /// Bind the program used by the following draws
    fn bind_program(&mut self, program: &ShaderProgram) -> BackendResult<()>;

    /// Draw one mesh with its world (model) matrix
    fn draw_mesh(&mut self, mesh: &Mesh, model: &Mat4) -> BackendResult<()>;

    /// Finish and present the frame
    fn end_frame(&mut self) -> BackendResult<()>;
}

/// Running totals kept by [`NullBackend`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames completed
    pub frames: u64,
    /// Draw calls in the last completed frame
    pub draw_calls: usize,
    /// Triangles submitted in the last completed frame
    pub triangles: usize,
    /// Vertex and index bytes submitted in the last completed frame
    pub bytes: usize,
}

/// Backend that accepts every call and only keeps counters
#[derive(Debug, Default)]
pub struct NullBackend {
    in_frame: bool,
    current: FrameStats,
    last: FrameStats,
}

impl NullBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last completed frame
    pub fn stats(&self) -> FrameStats {
        self.last
    }
}

impl RenderBackend for NullBackend {
    fn begin_frame(&mut self, clear_color: Vec3) -> BackendResult<()> {
        if self.in_frame {
            return Err(RenderError::FrameState("begin_frame called twice".to_string()));
        }
        self.in_frame = true;
        self.current = FrameStats {
            frames: self.last.frames,
            ..FrameStats::default()
        };
        log::trace!("Frame begin, clear color {:?}", clear_color);
        Ok(())
    }

    fn bind_program(&mut self, program: &ShaderProgram) -> BackendResult<()> {
        if !program.is_active() {
            return Err(RenderError::ProgramNotActive);
        }
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Mesh, _model: &Mat4) -> BackendResult<()> {
        if !self.in_frame {
            return Err(RenderError::FrameState("draw outside of a frame".to_string()));
        }
        self.current.draw_calls += 1;
        self.current.triangles += mesh.triangle_count();
        self.current.bytes += mesh.byte_size();
        Ok(())
    }

    fn end_frame(&mut self) -> BackendResult<()> {
        if !self.in_frame {
            return Err(RenderError::FrameState("end_frame without begin_frame".to_string()));
        }
        self.in_frame = false;
        self.current.frames += 1;
        self.last = self.current;
        log::trace!(
            "Frame end: {} draws, {} triangles",
            self.last.draw_calls,
            self.last.triangles
        );
        Ok(())
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    /// Name of the mesh that was drawn
    pub mesh_name: String,
    /// World matrix it was drawn with
    pub model: Mat4,
}

/// Backend that records every draw of the most recent frame
///
/// Used by tests to check traversal order and world matrices.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Draws of the frame in progress (or the last one after `end_frame`)
    pub draws: Vec<DrawRecord>,
    /// Clear color passed to the last `begin_frame`
    pub clear_color: Option<Vec3>,
    /// Uniforms of the program bound in the last frame
    pub uniforms: Vec<(String, UniformValue)>,
    /// Completed frames
    pub frames: u64,
}

impl RecordingBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded uniform by name
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .find(|(uniform_name, _)| uniform_name == name)
            .map(|(_, value)| *value)
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self, clear_color: Vec3) -> BackendResult<()> {
        self.draws.clear();
        self.uniforms.clear();
        self.clear_color = Some(clear_color);
        Ok(())
    }

    fn bind_program(&mut self, program: &ShaderProgram) -> BackendResult<()> {
        for name in ["view", "projection", "color"] {
            if let Some(value) = program.uniform(name) {
                self.uniforms.push((name.to_string(), value));
            }
        }
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Mesh, model: &Mat4) -> BackendResult<()> {
        self.draws.push(DrawRecord {
            mesh_name: mesh.name.clone(),
            model: *model,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> BackendResult<()> {
        self.frames += 1;
        Ok(())
    }
}
