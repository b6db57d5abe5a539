//! Camera configuration
//!
//! Movement speed, mouse sensitivity, starting field of view, and the
//! diagonal-movement policy, loadable from TOML. Every field has a
//! default, so a partial (or empty) config file is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Camera movement and control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Linear units per second for keyboard movement.
    pub move_speed: f32,

    /// Degrees of rotation per raw input unit for mouse look.
    pub mouse_sens: f32,

    /// Starting vertical field of view, degrees.
    pub fov: f32,

    /// Scale combined held-key movement back to unit length, so holding
    /// forward and a strafe key together does not exceed `move_speed`.
    /// Off by default: the un-normalized diagonal is the classic tutorial
    /// behavior.
    pub normalize_combined_input: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.0,
            mouse_sens: 0.1,
            fov: 45.0,
            normalize_combined_input: false,
        }
    }
}

impl CameraConfig {
    /// Parse a config from TOML text. Missing fields fall back to their
    /// defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| {
            let error = Error::ConfigParse(e.to_string());
            crate::flycam_error!("flycam3d::config", "{}", error);
            error
        })
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            let error = Error::ConfigRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            crate::flycam_error!("flycam3d::config", "{}", error);
            error
        })?;

        let config = Self::from_toml_str(&text)?;
        crate::flycam_debug!("flycam3d::config", "Camera config loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
