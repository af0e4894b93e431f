//! Shader program handle and uniform storage
//!
//! Loads vertex/fragment sources from disk and keeps the uniform values the
//! frame sets. Backends read the uniforms when they bind the program.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::foundation::math::{Mat4, Vec3};

/// Errors raised while building a shader program
#[derive(Error, Debug)]
pub enum ShaderError {
    /// A source file could not be read
    #[error("Failed to read shader {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A source file was read but is not a usable shader
    #[error("Shader {path} failed to compile: {reason}")]
    Compile {
        /// Offending file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
}

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

/// Value that can be stored in a uniform slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar
    Float(f32),
    /// 3-component vector
    Vec3(Vec3),
    /// 4x4 matrix
    Mat4(Mat4),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

/// A linked vertex + fragment program
#[derive(Debug, Clone, Default)]
pub struct ShaderProgram {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
    vertex_source: String,
    fragment_source: String,
    uniforms: HashMap<String, UniformValue>,
    active: bool,
}

impl ShaderProgram {
    /// Load and check both stages
    ///
    /// Fails when either file is unreadable, empty, or has no `main` entry
    /// point.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(vertex_path: P, fragment_path: Q) -> Result<Self, ShaderError> {
        let vertex_path = vertex_path.as_ref().to_path_buf();
        let fragment_path = fragment_path.as_ref().to_path_buf();

        let vertex_source = Self::read_stage(&vertex_path, ShaderStage::Vertex)?;
        let fragment_source = Self::read_stage(&fragment_path, ShaderStage::Fragment)?;

        log::info!(
            "Loaded shader program ({}, {})",
            vertex_path.display(),
            fragment_path.display()
        );

        Ok(Self {
            vertex_path,
            fragment_path,
            vertex_source,
            fragment_source,
            uniforms: HashMap::new(),
            active: false,
        })
    }

    fn read_stage(path: &Path, stage: ShaderStage) -> Result<String, ShaderError> {
        let source = std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if source.trim().is_empty() {
            return Err(ShaderError::Compile {
                path: path.to_path_buf(),
                reason: format!("{:?} source is empty", stage),
            });
        }
        if !source.contains("void main") {
            return Err(ShaderError::Compile {
                path: path.to_path_buf(),
                reason: format!("{:?} source has no main entry point", stage),
            });
        }

        log::debug!("{:?} shader {} ok ({} bytes)", stage, path.display(), source.len());
        Ok(source)
    }

    /// Mark this program as the one used for subsequent draws
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Whether [`ShaderProgram::activate`] has been called
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Set a uniform value, replacing any previous value under the same name
    pub fn set_uniform(&mut self, name: &str, value: impl Into<UniformValue>) {
        self.uniforms.insert(name.to_string(), value.into());
    }

    /// Current value of a uniform
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms.get(name).copied()
    }

    /// Path of the vertex stage source
    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    /// Path of the fragment stage source
    pub fn fragment_path(&self) -> &Path {
        &self.fragment_path
    }

    /// Source text of a stage
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_source,
            ShaderStage::Fragment => &self.fragment_source,
        }
    }
}
