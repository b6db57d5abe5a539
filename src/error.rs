//! Error types for the Flycam 3D crate
//!
//! This module defines the error types used throughout the crate,
//! covering shader source loading, driver diagnostics, and configuration.

use std::fmt;
use std::path::PathBuf;

use crate::shader::ShaderStage;

/// Result type for Flycam 3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flycam 3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A shader source file could not be read from disk
    ShaderFileRead {
        /// Stage the file was meant for
        stage: ShaderStage,
        /// Path that failed to read
        path: PathBuf,
        /// OS-level failure message
        message: String,
    },

    /// The driver rejected a shader stage at compile time
    ShaderCompile {
        /// Stage that failed
        stage: ShaderStage,
        /// Driver info log
        log: String,
    },

    /// The driver rejected the shader program at link time
    ProgramLink {
        /// Driver info log
        log: String,
    },

    /// A configuration file could not be read from disk
    ConfigRead {
        /// Path that failed to read
        path: PathBuf,
        /// OS-level failure message
        message: String,
    },

    /// A configuration file could not be parsed
    ConfigParse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShaderFileRead { stage, path, message } => {
                write!(f, "Failed to read {} shader source {}: {}", stage, path.display(), message)
            }
            Error::ShaderCompile { stage, log } => {
                write!(f, "Failed to compile {} shader: {}", stage, log)
            }
            Error::ProgramLink { log } => write!(f, "Failed to link shader program: {}", log),
            Error::ConfigRead { path, message } => {
                write!(f, "Failed to read camera config {}: {}", path.display(), message)
            }
            Error::ConfigParse(msg) => write!(f, "Invalid camera config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
