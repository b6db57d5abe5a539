/// ShaderSource — file-based GLSL source loading.
///
/// A program is built from one vertex and one fragment stage. Reading
/// either file can fail; the failure comes back as a structured error
/// carrying the stage, path, and OS message, and the caller decides how
/// to surface it.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Shader stage identifier, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// GLSL source text for one vertex + fragment program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Vertex stage source text
    pub vertex: String,
    /// Fragment stage source text
    pub fragment: String,
}

impl ShaderSource {
    /// Wrap already-available source text (string literals, generated
    /// source).
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Read both stage sources from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShaderFileRead`] naming the stage and path that
    /// failed. Nothing is left half-initialized: either both stages are
    /// read or the whole load fails.
    pub fn from_files(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        let vertex = read_stage(vertex_path, ShaderStage::Vertex)?;
        let fragment = read_stage(fragment_path, ShaderStage::Fragment)?;

        crate::flycam_debug!(
            "flycam3d::shader",
            "Loaded shader sources {} + {}",
            vertex_path.display(),
            fragment_path.display()
        );

        Ok(Self { vertex, fragment })
    }
}

/// Read one stage's source, logging the error before returning it.
fn read_stage(path: &Path, stage: ShaderStage) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let error = Error::ShaderFileRead {
            stage,
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        crate::flycam_error!("flycam3d::shader", "{}", error);
        error
    })
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
